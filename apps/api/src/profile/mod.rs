// Business profile extraction from caller-supplied page text.
// All LLM calls go through llm_client.

pub mod extractor;
pub mod handlers;
pub mod prompts;
