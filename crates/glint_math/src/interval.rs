/// A closed parametric range `[min, max]` along a ray.
///
/// Used by the slab test: each axis produces one interval and the ray is
/// inside the box where all of them overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Create an interval from two bounds given in any order.
    pub fn ordered(a: f32, b: f32) -> Self {
        Self::new(a.min(b), a.max(b))
    }

    /// Returns true when max < min.
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    /// Overlap of two intervals. May be empty.
    pub fn intersect(&self, other: &Interval) -> Interval {
        Interval::new(self.min.max(other.min), self.max.min(other.max))
    }

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };
}
