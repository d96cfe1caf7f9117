//! Axum route handlers for the Profile API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::keywords::models::BusinessProfile;
use crate::profile::extractor::{extract_profile, SitePage};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractProfileRequest {
    pub pages: Vec<SitePage>,
}

/// POST /api/v1/profile/extract
///
/// Previews the business profile the report pipeline would use for these pages.
pub async fn handle_extract_profile(
    State(state): State<AppState>,
    Json(request): Json<ExtractProfileRequest>,
) -> Result<Json<BusinessProfile>, AppError> {
    let profile = extract_profile(&request.pages, &state.llm).await?;
    Ok(Json(profile))
}
