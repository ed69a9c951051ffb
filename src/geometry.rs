//! Geometric primitives for rasterization.
//!
//! All coordinates live on an infinite integer grid; negative coordinates
//! are valid everywhere. Values are plain data, created fresh per call and
//! never mutated after construction.

/// A point on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct GridPoint {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl GridPoint {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new grid point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A grid cell plus the coverage intensity assigned to it by a rasterizer.
///
/// Intensity expresses how much of the cell the ideal primitive covers; it
/// is not a color. Non-antialiasing algorithms always emit `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Coverage intensity in `[0.0, 1.0]`.
    pub intensity: f64,
}

impl Pixel {
    /// Create a fully covered pixel (intensity 1.0).
    #[must_use]
    pub const fn solid(x: i32, y: i32) -> Self {
        Self { x, y, intensity: 1.0 }
    }

    /// Create a pixel with the given coverage, clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn with_intensity(x: i32, y: i32, intensity: f64) -> Self {
        Self { x, y, intensity: intensity.clamp(0.0, 1.0) }
    }

    /// The grid cell this pixel covers, without its intensity.
    #[must_use]
    pub const fn point(&self) -> GridPoint {
        GridPoint::new(self.x, self.y)
    }
}

/// A line segment between two grid points.
///
/// Identical endpoints are valid and rasterize to a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineSegment {
    /// Start point.
    pub start: GridPoint,
    /// End point.
    pub end: GridPoint,
}

impl LineSegment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: GridPoint, end: GridPoint) -> Self {
        Self { start, end }
    }

    /// Create a segment from endpoint coordinates.
    #[must_use]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(GridPoint::new(x1, y1), GridPoint::new(x2, y2))
    }

    /// Extent along the major axis: `max(|dx|, |dy|)`.
    ///
    /// Every non-antialiasing line algorithm emits exactly `extent() + 1`
    /// pixels for this segment. Computed in `i64` so segments spanning the
    /// full `i32` range report their true extent.
    #[must_use]
    pub fn extent(&self) -> i64 {
        let dx = (i64::from(self.end.x) - i64::from(self.start.x)).abs();
        let dy = (i64::from(self.end.y) - i64::from(self.start.y)).abs();
        dx.max(dy)
    }
}

/// A circle with an integer center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    /// Center point.
    pub center: GridPoint,
    /// Radius in grid cells. Must be strictly positive for rasterization.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: GridPoint, radius: i32) -> Self {
        Self { center, radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_point_origin() {
        assert_eq!(GridPoint::ORIGIN, GridPoint::new(0, 0));
    }

    #[test]
    fn test_pixel_solid_intensity() {
        let p = Pixel::solid(3, -7);
        assert_eq!(p.x, 3);
        assert_eq!(p.y, -7);
        assert_eq!(p.intensity, 1.0);
    }

    #[test]
    fn test_pixel_intensity_clamped() {
        assert_eq!(Pixel::with_intensity(0, 0, 1.5).intensity, 1.0);
        assert_eq!(Pixel::with_intensity(0, 0, -0.25).intensity, 0.0);
        assert_eq!(Pixel::with_intensity(0, 0, 0.5).intensity, 0.5);
    }

    #[test]
    fn test_segment_extent() {
        assert_eq!(LineSegment::from_coords(0, 0, 4, 0).extent(), 4);
        assert_eq!(LineSegment::from_coords(0, 0, 3, 3).extent(), 3);
        assert_eq!(LineSegment::from_coords(5, 5, 5, 5).extent(), 0);
        assert_eq!(LineSegment::from_coords(-2, -1, 2, -9).extent(), 8);
    }

    #[test]
    fn test_segment_extent_full_i32_span() {
        let segment = LineSegment::from_coords(i32::MIN, 0, i32::MAX, 0);
        assert_eq!(segment.extent(), i64::from(u32::MAX));
    }
}
