use svgtypes::PathSegment;

const DECIMALS: f64 = 1e6;

/// Serialize segments with one explicit command letter each.
///
/// Output shape is `M 0,900 L 0,800 Z`: the letter, then comma-joined coordinate
/// pairs, all separated by single spaces.
pub fn write_path(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for (i, seg) in path.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match *seg {
            PathSegment::MoveTo { abs, x, y } => {
                push_letter(&mut out, 'M', abs);
                push_pairs(&mut out, &[(x, y)]);
            }
            PathSegment::LineTo { abs, x, y } => {
                push_letter(&mut out, 'L', abs);
                push_pairs(&mut out, &[(x, y)]);
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                push_letter(&mut out, 'H', abs);
                out.push(' ');
                out.push_str(&format_number(x));
            }
            PathSegment::VerticalLineTo { abs, y } => {
                push_letter(&mut out, 'V', abs);
                out.push(' ');
                out.push_str(&format_number(y));
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                push_letter(&mut out, 'C', abs);
                push_pairs(&mut out, &[(x1, y1), (x2, y2), (x, y)]);
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                push_letter(&mut out, 'S', abs);
                push_pairs(&mut out, &[(x2, y2), (x, y)]);
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                push_letter(&mut out, 'Q', abs);
                push_pairs(&mut out, &[(x1, y1), (x, y)]);
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                push_letter(&mut out, 'T', abs);
                push_pairs(&mut out, &[(x, y)]);
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
                push_letter(&mut out, 'A', abs);
                push_pairs(&mut out, &[(rx, ry)]);
                out.push(' ');
                out.push_str(&format_number(x_axis_rotation));
                out.push(' ');
                out.push(if large_arc { '1' } else { '0' });
                out.push(',');
                out.push(if sweep { '1' } else { '0' });
                push_pairs(&mut out, &[(x, y)]);
            }
            PathSegment::ClosePath { abs } => push_letter(&mut out, 'Z', abs),
        }
    }
    out
}

fn push_letter(out: &mut String, upper: char, abs: bool) {
    out.push(if abs { upper } else { upper.to_ascii_lowercase() });
}

fn push_pairs(out: &mut String, pairs: &[(f64, f64)]) {
    for &(x, y) in pairs {
        out.push(' ');
        out.push_str(&format_number(x));
        out.push(',');
        out.push_str(&format_number(y));
    }
}

/// Shortest decimal form, rounded to 6 places, never `-0`.
pub(crate) fn format_number(v: f64) -> String {
    let scaled = v * DECIMALS;
    let rounded = if scaled.is_finite() {
        scaled.round() / DECIMALS
    } else {
        v
    };
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

#[cfg(test)]
#[path = "../../tests/unit/path/write.rs"]
mod tests;
