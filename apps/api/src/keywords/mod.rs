// Keyword Opportunity Ranking Engine.
// Pure stages (intent, seeds, filter, ranker, cross_ref) plus the provider seam
// (fetcher, dataforseo) and the pipeline that wires them together.

pub mod config;
pub mod cross_ref;
pub mod dataforseo;
pub mod fetcher;
pub mod filter;
pub mod handlers;
pub mod intent;
pub mod models;
pub mod pipeline;
pub mod ranker;
pub mod region;
pub mod seeds;
