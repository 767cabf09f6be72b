//! Per-character normalization: strokes through the frame transform, medians inverted.

use crate::foundation::core::{FRAME_HEIGHT, FrameTransform};
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::median::transform_medians;
use crate::path::transform_path_str;
use crate::record::CharacterRecord;

/// Normalize a record into the renderer's frame.
///
/// The input is left untouched. Every stroke is converted before anything is
/// returned, so a single bad stroke fails the whole record.
pub fn normalize_record(record: &CharacterRecord) -> StrokeResult<CharacterRecord> {
    normalize_record_with(record, &FrameTransform::renderer(), FRAME_HEIGHT)
}

/// [`normalize_record`] with an explicit stroke transform and median frame height.
pub fn normalize_record_with(
    record: &CharacterRecord,
    transform: &FrameTransform,
    frame_height: f64,
) -> StrokeResult<CharacterRecord> {
    let strokes = record
        .strokes
        .iter()
        .enumerate()
        .map(|(i, d)| {
            transform_path_str(d, transform).map_err(|e| match e {
                StrokeError::MalformedPayload(msg) => {
                    StrokeError::malformed(format!("stroke {i}: {msg}"))
                }
                other => other,
            })
        })
        .collect::<StrokeResult<Vec<_>>>()?;

    Ok(CharacterRecord {
        strokes,
        medians: transform_medians(&record.medians, frame_height),
        extra: record.extra.clone(),
    })
}

/// Parse a raw JSON payload and normalize it with [`normalize_record_with`].
pub fn normalize_payload(
    payload: &str,
    transform: &FrameTransform,
    frame_height: f64,
) -> StrokeResult<CharacterRecord> {
    let record: CharacterRecord = serde_json::from_str(payload)
        .map_err(|e| StrokeError::malformed(format!("not a character record: {e}")))?;
    normalize_record_with(&record, transform, frame_height)
}

#[cfg(test)]
#[path = "../tests/unit/normalize.rs"]
mod tests;
