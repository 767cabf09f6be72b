//! strokeprep normalizes hanzi stroke data for a top-down stroke renderer.
//!
//! Each input record holds SVG outlines (`strokes`) and centerline guide points
//! (`medians`) drawn in a frame whose y axis points up. Rendering expects y down,
//! so every record is rewritten once:
//!
//! - strokes go through `scaleY(-1) translateY(-900)`, i.e. `(x, y) -> (x, 900 - y)`;
//! - medians get the same inversion point by point.
//!
//! # Pipeline overview
//!
//! 1. **Enumerate**: a [`RecordSource`] lists `<char>.json` entries (GitHub folder or local dir)
//! 2. **Normalize**: [`normalize_payload`] parses and transforms each payload
//! 3. **Write**: a [`Sink`] stores each record as `<char>.json`
//! 4. **Index**: once every entry succeeded, the sink writes `all.json`
//!
//! Records are transient: nothing is cached between runs and every run recomputes
//! the whole corpus.
#![forbid(unsafe_code)]

mod foundation;

pub mod median;
pub mod normalize;
pub mod path;
pub mod pipeline;
pub mod record;
pub mod sink;
pub mod source;

pub use foundation::core::{Affine, FRAME_HEIGHT, FrameTransform, Point, Vec2};
pub use foundation::error::{EntryFailure, StrokeError, StrokeResult};
pub use median::{Coord, Median, MedianPoint, transform_median, transform_medians};
pub use normalize::{normalize_payload, normalize_record, normalize_record_with};
pub use path::{PathSegment, parse_path, transform_path, transform_path_str, write_path};
pub use pipeline::{
    FailurePolicy, NoProgress, PipelineOpts, Progress, RunReport, run, run_source,
};
pub use record::{CharacterRecord, INDEX_FILE_NAME, RECORD_SUFFIX, identifier_for};
pub use sink::{CharacterIndex, DirSink, MemorySink, Sink};
pub use source::{
    DEFAULT_FOLDER, Entry, GithubSource, LocalSource, RecordSource, RemoteConfig, RemoteSpec,
    Source,
};
