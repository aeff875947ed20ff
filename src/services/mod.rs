pub mod badge_resolver;
pub mod fallback_questions;
pub mod grading_service;
pub mod model_service;
pub mod question_extractor;
pub mod quiz_assembler;
pub mod session_service;
