//! Median guide paths: vertical inversion of `[x, y]` points.

/// A JSON number that remembers whether it was written as an integer.
///
/// Median data is integral in practice; keeping `i64` means `[0, 100]` comes back
/// out as `[0, 800]` rather than `[0.0, 800.0]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Coord {
    Int(i64),
    Float(f64),
}

impl Coord {
    pub fn as_f64(self) -> f64 {
        match self {
            Coord::Int(v) => v as f64,
            Coord::Float(v) => v,
        }
    }

    /// `height - self`, staying integral when both sides are.
    pub fn inverted(self, height: f64) -> Coord {
        if let Coord::Int(v) = self
            && height.fract() == 0.0
            && height.abs() < i64::MAX as f64
            && let Some(out) = (height as i64).checked_sub(v)
        {
            return Coord::Int(out);
        }
        Coord::Float(height - self.as_f64())
    }
}

/// One `[x, y]` guide point.
pub type MedianPoint = [Coord; 2];

/// Ordered guide points along one stroke's centerline.
pub type Median = Vec<MedianPoint>;

/// Map each `[x, y]` to `[x, height - y]`, preserving length and order.
pub fn transform_median(points: &[MedianPoint], height: f64) -> Median {
    points
        .iter()
        .map(|&[x, y]| [x, y.inverted(height)])
        .collect()
}

/// [`transform_median`] applied to every median of a record.
pub fn transform_medians(medians: &[Median], height: f64) -> Vec<Median> {
    medians
        .iter()
        .map(|m| transform_median(m, height))
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/median.rs"]
mod tests;
