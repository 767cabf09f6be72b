use svgtypes::PathSegment;

use crate::foundation::core::{FrameTransform, Point, Vec2};
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::path::parse_path;
use crate::path::write::write_path;

/// Apply `t` to every coordinate of `path`, keeping command letters and casing.
///
/// Absolute coordinates go through the whole transform; relative ones only
/// through its scale. Arcs under a reflection flip their sweep direction.
pub fn transform_path(path: &[PathSegment], t: &FrameTransform) -> StrokeResult<Vec<PathSegment>> {
    path.iter()
        .enumerate()
        .map(|(i, seg)| transform_segment(*seg, t, i == 0))
        .collect()
}

/// Parse, transform and re-serialize one stroke.
pub fn transform_path_str(d: &str, t: &FrameTransform) -> StrokeResult<String> {
    let path = parse_path(d)?;
    let out = transform_path(&path, t)?;
    Ok(write_path(&out))
}

fn transform_segment(
    seg: PathSegment,
    t: &FrameTransform,
    leading: bool,
) -> StrokeResult<PathSegment> {
    // A leading `m` is measured from the origin, so it is positioned like an absolute point.
    let map = |abs: bool, x: f64, y: f64| -> Point {
        if abs || leading {
            t.point(Point::new(x, y))
        } else {
            t.vector(Vec2::new(x, y)).to_point()
        }
    };

    let out = match seg {
        PathSegment::MoveTo { abs, x, y } => {
            let p = map(abs, x, y);
            PathSegment::MoveTo { abs, x: p.x, y: p.y }
        }
        PathSegment::LineTo { abs, x, y } => {
            let p = map(abs, x, y);
            PathSegment::LineTo { abs, x: p.x, y: p.y }
        }
        PathSegment::HorizontalLineTo { abs, x } => PathSegment::HorizontalLineTo {
            abs,
            x: if abs { t.x(x) } else { t.sx() * x },
        },
        PathSegment::VerticalLineTo { abs, y } => PathSegment::VerticalLineTo {
            abs,
            y: if abs { t.y(y) } else { t.sy() * y },
        },
        PathSegment::CurveTo {
            abs,
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        } => {
            let (c1, c2, p) = (map(abs, x1, y1), map(abs, x2, y2), map(abs, x, y));
            PathSegment::CurveTo {
                abs,
                x1: c1.x,
                y1: c1.y,
                x2: c2.x,
                y2: c2.y,
                x: p.x,
                y: p.y,
            }
        }
        PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
            let (c2, p) = (map(abs, x2, y2), map(abs, x, y));
            PathSegment::SmoothCurveTo {
                abs,
                x2: c2.x,
                y2: c2.y,
                x: p.x,
                y: p.y,
            }
        }
        PathSegment::Quadratic { abs, x1, y1, x, y } => {
            let (c1, p) = (map(abs, x1, y1), map(abs, x, y));
            PathSegment::Quadratic {
                abs,
                x1: c1.x,
                y1: c1.y,
                x: p.x,
                y: p.y,
            }
        }
        PathSegment::SmoothQuadratic { abs, x, y } => {
            let p = map(abs, x, y);
            PathSegment::SmoothQuadratic { abs, x: p.x, y: p.y }
        }
        PathSegment::EllipticalArc {
            abs,
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
        } => {
            let (ax, ay) = (t.sx().abs(), t.sy().abs());
            if ax != ay && x_axis_rotation.rem_euclid(180.0) != 0.0 {
                return Err(StrokeError::validation(
                    "rotated arcs cannot be mapped through a non-uniform scale",
                ));
            }
            let reflect = t.is_reflection();
            let p = map(abs, x, y);
            PathSegment::EllipticalArc {
                abs,
                rx: rx * ax,
                ry: ry * ay,
                x_axis_rotation: if reflect {
                    -x_axis_rotation
                } else {
                    x_axis_rotation
                },
                large_arc,
                sweep: sweep ^ reflect,
                x: p.x,
                y: p.y,
            }
        }
        PathSegment::ClosePath { abs } => PathSegment::ClosePath { abs },
    };
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/path/transform.rs"]
mod tests;
