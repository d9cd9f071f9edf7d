pub mod enrichment_service;
pub mod evaluation_service;
pub mod model_service;
pub mod prompt_builder;
pub mod response_parser;
pub mod score_validator;
