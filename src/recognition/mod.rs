//! Boundary with the multimodal model that reads exercise screenshots and
//! rates meals. Everything coming back from it is untrusted until it passes
//! through [`validate`].

pub mod client;
mod prompts;
pub mod validate;

pub use client::{QwenClient, Recognizer, UpstreamError};
pub use validate::{extract_json_object, validate_exercise, validate_meal_analysis};

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    /// A field the score depends on is missing or out of range.
    #[error("{0}")]
    InvalidRecognition(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
