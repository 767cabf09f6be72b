//! SVG path-description strings: parsing, serialization and the frame transform.
//!
//! Paths stay a list of `svgtypes` segments (not flattened into Bézier curves), so
//! a transformed path keeps the same command letters, the same relative/absolute
//! casing and the same number of segments as the input.

pub mod transform;
pub mod write;

pub use svgtypes::PathSegment;
pub use transform::{transform_path, transform_path_str};
pub use write::write_path;

use crate::foundation::error::{StrokeError, StrokeResult};

/// Parse path data into one segment per command, implicit repeats expanded.
///
/// An empty string is an empty path.
pub fn parse_path(d: &str) -> StrokeResult<Vec<PathSegment>> {
    svgtypes::PathParser::from(d)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StrokeError::malformed(format!("invalid path data: {e}")))
}
