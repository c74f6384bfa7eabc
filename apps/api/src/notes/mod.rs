// Diamond Notes generation
// Implements: subject classification, section assembly, conclusion/keywords, and the
// template / assisted generation facade. All LLM calls go through llm_client.

pub mod assembler;
pub mod classifier;
pub mod composer;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod templates;
