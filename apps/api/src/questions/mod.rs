// Question generation pipeline: distribution planning, prompt construction,
// the generate-validate-retry loop, and the deterministic repair pass.
// All generation calls go through llm_client — no direct Gemini calls here.

pub mod category;
pub mod distribution;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod repair;
