//! Midpoint circle rasterization.

use crate::geometry::Pixel;

/// Midpoint (integer) circle algorithm.
///
/// Walks the second octant from `(0, radius)` with the decision variable
/// `d = 3 - 2*radius`, emitting the eight symmetric reflections of each
/// step around the center. Pixels on octant seams (the axes and the 45°
/// diagonals) are emitted once per reflection that lands on them, so the
/// sequence may repeat a cell; the pixel *set* is what the recurrence
/// guarantees, independent of starting-octant convention.
///
/// The decision variable is carried as `i64` so radii near `i32::MAX` do
/// not overflow it; the reflected coordinates themselves must fit in `i32`.
pub(super) fn midpoint(cx: i32, cy: i32, radius: i32) -> Vec<Pixel> {
    let mut x: i32 = 0;
    let mut y = radius;
    let mut d = 3 - 2 * i64::from(radius);
    let mut pixels = Vec::with_capacity(8 * (radius as usize + 1));

    while x <= y {
        emit_reflections(&mut pixels, cx, cy, x, y);
        if d < 0 {
            d += 4 * i64::from(x) + 6;
        } else {
            d += 4 * (i64::from(x) - i64::from(y)) + 10;
            y -= 1;
        }
        x += 1;
    }

    pixels
}

/// Push the eight reflections of `(x, y)` around `(cx, cy)`.
#[inline]
fn emit_reflections(pixels: &mut Vec<Pixel>, cx: i32, cy: i32, x: i32, y: i32) {
    pixels.push(Pixel::solid(cx + x, cy + y));
    pixels.push(Pixel::solid(cx - x, cy + y));
    pixels.push(Pixel::solid(cx + x, cy - y));
    pixels.push(Pixel::solid(cx - x, cy - y));
    pixels.push(Pixel::solid(cx + y, cy + x));
    pixels.push(Pixel::solid(cx - y, cy + x));
    pixels.push(Pixel::solid(cx + y, cy - x));
    pixels.push(Pixel::solid(cx - y, cy - x));
}
