pub mod extractor;
pub mod mock;
pub mod normalizer;
pub mod prompt;
pub mod provider;
pub mod quiz_service;
