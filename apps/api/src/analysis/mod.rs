// Skills analysis: prompt construction, model round trip, reply parsing.
// All model calls go through llm_client::TextGenerator.

pub mod analyzer;
pub mod audit;
pub mod fuzzy;
pub mod models;
pub mod prompts;
