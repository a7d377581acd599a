use bytes::Bytes;
use time::Date;
use tracing::warn;

use super::model::ExerciseObservation;
use crate::recognition::{extract_json_object, validate_exercise, RecognitionError, Recognizer};

/// Accepted screenshot formats.
pub const IMAGE_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Sends the screenshot out for recognition and validates whatever comes back.
pub async fn recognize_exercise(
    recognizer: &dyn Recognizer,
    image: Bytes,
    content_type: &str,
    today: Date,
) -> Result<ExerciseObservation, RecognitionError> {
    let reply = recognizer.recognize_exercise(image, content_type).await?;
    let raw = extract_json_object(&reply).ok_or_else(|| {
        RecognitionError::InvalidRecognition("reply contained no JSON object".into())
    })?;
    validate_exercise(&raw, today).inspect_err(|e| {
        warn!(error = %e, "exercise recognition rejected");
    })
}
