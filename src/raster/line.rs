//! Line rasterization algorithms.
//!
//! Each function maps integer endpoints to an ordered pixel sequence and is
//! pure: no state survives a call and identical inputs always produce
//! identical output. Intermediate arithmetic may use `f64`, but emitted
//! coordinates are always integers.
//!
//! Rounding convention for the sampling algorithms ([`step_by_step`],
//! [`dda`]): nearest integer, ties to even (`f64::round_ties_even`), the
//! same tie-break on negative and positive half-steps.
//!
//! Deltas and error accumulators are widened to `i64` internally, so
//! endpoint spans covering the full `i32` range cannot overflow them. The
//! emitted coordinates themselves (including Wu's `floor(y) + 1` fringe)
//! must fit in `i32`.

use crate::geometry::Pixel;

/// Step-by-step incremental sampling.
///
/// Takes `max(|dx|, |dy|)` steps, advancing both coordinates by constant
/// per-axis increments and rounding each sample to the nearest grid cell,
/// ties to even. Emits exactly `max(|dx|, |dy|) + 1` pixels.
pub(super) fn step_by_step(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    let dx = i64::from(x2) - i64::from(x1);
    let dy = i64::from(y2) - i64::from(y1);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![Pixel::solid(x1, y1)];
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;

    let mut x = f64::from(x1);
    let mut y = f64::from(y1);
    let mut pixels = Vec::with_capacity(steps as usize + 1);

    for _ in 0..=steps {
        pixels.push(Pixel::solid(x.round_ties_even() as i32, y.round_ties_even() as i32));
        x += x_inc;
        y += y_inc;
    }

    pixels
}

/// Digital differential analyzer.
///
/// Same recurrence as [`step_by_step`] with the accumulators held in
/// floating point from the first sample onward; the two produce identical
/// sequences for all inputs.
pub(super) fn dda(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    let dx = i64::from(x2) - i64::from(x1);
    let dy = i64::from(y2) - i64::from(y1);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![Pixel::solid(x1, y1)];
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;

    let mut x_acc = f64::from(x1);
    let mut y_acc = f64::from(y1);
    let mut pixels = Vec::with_capacity(steps as usize + 1);

    for _ in 0..=steps {
        pixels.push(Pixel::solid(x_acc.round_ties_even() as i32, y_acc.round_ties_even() as i32));
        x_acc += x_inc;
        y_acc += y_inc;
    }

    pixels
}

/// Bresenham's integer line algorithm.
///
/// Walks one unit per step along the major axis, stepping the minor axis
/// when the error accumulator drops below zero. The accumulator is seeded
/// at half the major extent and carried doubled so the half stays exact in
/// integer arithmetic; the strict `error < 0` trigger decides which of two
/// equally close pixels wins on exact half-step cases. Emits exactly
/// `max(|dx|, |dy|) + 1` pixels, monotone along the major axis.
pub(super) fn bresenham(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    let dx = (i64::from(x2) - i64::from(x1)).abs();
    let dy = (i64::from(y2) - i64::from(y1)).abs();
    let x_sign = if x2 > x1 { 1 } else { -1 };
    let y_sign = if y2 > y1 { 1 } else { -1 };

    let mut x = x1;
    let mut y = y1;
    let mut pixels = Vec::with_capacity(dx.max(dy) as usize + 1);

    if dx > dy {
        // error = dx/2, doubled
        let mut error = dx;
        while x != x2 {
            pixels.push(Pixel::solid(x, y));
            error -= 2 * dy;
            if error < 0 {
                y += y_sign;
                error += 2 * dx;
            }
            x += x_sign;
        }
        pixels.push(Pixel::solid(x, y));
    } else {
        // error = dy/2, doubled
        let mut error = dy;
        while y != y2 {
            pixels.push(Pixel::solid(x, y));
            error -= 2 * dx;
            if error < 0 {
                x += x_sign;
                error += 2 * dy;
            }
            y += y_sign;
        }
        pixels.push(Pixel::solid(x, y));
    }

    pixels
}

/// Castle-Pitway doubled-error line algorithm.
///
/// Restates Bresenham's geometric result with an `e = 2*dy - dx` recurrence
/// updated by `2*dx` / `2*dy`, avoiding any division; axis roles are swapped
/// when the segment is steep. The minor-axis trigger is strict (`e > 0`) so
/// exact half-step ties resolve to the same pixel as [`bresenham`]'s strict
/// `error < 0`; for any endpoints the output pixel set equals
/// [`bresenham`]'s.
pub(super) fn castle_pitway(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    let mut dx = (i64::from(x2) - i64::from(x1)).abs();
    let mut dy = (i64::from(y2) - i64::from(y1)).abs();
    let step_x = if x2 >= x1 { 1 } else { -1 };
    let step_y = if y2 >= y1 { 1 } else { -1 };

    if dx == 0 && dy == 0 {
        return vec![Pixel::solid(x1, y1)];
    }

    // Swap axis roles when the slope exceeds 45 degrees
    let swapped = dy > dx;
    if swapped {
        std::mem::swap(&mut dx, &mut dy);
    }

    let mut e = 2 * dy - dx;
    let mut x = x1;
    let mut y = y1;
    let mut pixels = Vec::with_capacity(dx as usize + 1);

    for _ in 0..=dx {
        pixels.push(Pixel::solid(x, y));

        while e > 0 {
            if swapped {
                x += step_x;
            } else {
                y += step_y;
            }
            e -= 2 * dx;
        }

        if swapped {
            y += step_y;
        } else {
            x += step_x;
        }
        e += 2 * dy;
    }

    pixels
}

/// Wu's antialiased line algorithm.
///
/// Computes along the axis of greater extent (x and y roles swap when the
/// segment is steep, and swap back on emission) with endpoints ordered so
/// the major coordinate increases. At each step two vertically adjacent
/// pixels share the cell's coverage: `1 - frac(y)` and `frac(y)`, so every
/// non-endpoint pair sums to 1.0. Endpoint pixels are additionally scaled
/// by the endpoint's horizontal coverage gap.
///
/// The fractional part is taken with `floor`, keeping intensities in
/// `[0, 1]` for lines in negative coordinates. The `gradient = 1.0`
/// fallback for a zero run length after axis normalization is historical;
/// the branch is unreachable for non-degenerate input and is preserved
/// as-is rather than silently redefined.
pub(super) fn wu(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    if x1 == x2 && y1 == y2 {
        return vec![Pixel::solid(x1, y1)];
    }

    let steep = (i64::from(y2) - i64::from(y1)).abs() > (i64::from(x2) - i64::from(x1)).abs();
    if steep {
        wu_major(y1, x1, y2, x2, true)
    } else {
        wu_major(x1, y1, x2, y2, false)
    }
}

/// Wu's algorithm with x as the major axis; `swap_xy` restores the
/// caller's axis order on emission.
fn wu_major(x1: i32, y1: i32, x2: i32, y2: i32, swap_xy: bool) -> Vec<Pixel> {
    let (x1, y1, x2, y2) = if x2 < x1 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };

    let dx = (i64::from(x2) - i64::from(x1)) as f64;
    let dy = (i64::from(y2) - i64::from(y1)) as f64;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    let mut pixels = Vec::with_capacity(2 * (dx as usize + 2));
    let mut plot = |x: i32, y: i32, coverage: f64| {
        if swap_xy {
            pixels.push(Pixel::with_intensity(y, x, coverage));
        } else {
            pixels.push(Pixel::with_intensity(x, y, coverage));
        }
    };

    // First endpoint. Integer input, so the rounded endpoint x is x1
    // itself and the horizontal coverage gap is exactly 0.5.
    let yend = f64::from(y1);
    let xgap = rfpart(f64::from(x1) + 0.5);
    let xpxl1 = x1;
    let ypxl1 = yend.floor() as i32;

    plot(xpxl1, ypxl1, rfpart(yend) * xgap);
    plot(xpxl1, ypxl1 + 1, fpart(yend) * xgap);

    let mut intery = yend + gradient;

    // Second endpoint
    let yend = f64::from(y2);
    let xgap = fpart(f64::from(x2) + 0.5);
    let xpxl2 = x2;
    let ypxl2 = yend.floor() as i32;

    plot(xpxl2, ypxl2, rfpart(yend) * xgap);
    plot(xpxl2, ypxl2 + 1, fpart(yend) * xgap);

    // Interior steps
    for x in (xpxl1 + 1)..xpxl2 {
        let ipart = intery.floor() as i32;
        plot(x, ipart, rfpart(intery));
        plot(x, ipart + 1, fpart(intery));
        intery += gradient;
    }

    pixels
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f64) -> f64 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridPoint;
    use std::collections::HashSet;

    fn points(pixels: &[Pixel]) -> Vec<GridPoint> {
        pixels.iter().map(Pixel::point).collect()
    }

    fn point_set(pixels: &[Pixel]) -> HashSet<GridPoint> {
        pixels.iter().map(Pixel::point).collect()
    }

    #[test]
    fn test_bresenham_horizontal() {
        let pixels = bresenham(0, 0, 4, 0);
        assert_eq!(
            points(&pixels),
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(1, 0),
                GridPoint::new(2, 0),
                GridPoint::new(3, 0),
                GridPoint::new(4, 0),
            ]
        );
        assert!(pixels.iter().all(|p| p.intensity == 1.0));
    }

    #[test]
    fn test_bresenham_diagonal() {
        let pixels = bresenham(0, 0, 3, 3);
        assert_eq!(
            points(&pixels),
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(1, 1),
                GridPoint::new(2, 2),
                GridPoint::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_bresenham_pixel_count_law() {
        for (x1, y1, x2, y2) in [(0_i32, 0_i32, 10_i32, 3_i32), (5, -2, -7, 4), (3, 3, 3, 9), (-1, -1, -1, -1)] {
            let expected = (x2 - x1).abs().max((y2 - y1).abs()) as usize + 1;
            assert_eq!(bresenham(x1, y1, x2, y2).len(), expected, "({x1},{y1})-({x2},{y2})");
        }
    }

    #[test]
    fn test_bresenham_monotone_along_major_axis() {
        let pixels = bresenham(2, 1, -9, 5);
        for pair in pixels.windows(2) {
            assert_eq!(pair[1].x, pair[0].x - 1);
        }
    }

    #[test]
    fn test_step_by_step_degenerate() {
        assert_eq!(step_by_step(7, -3, 7, -3), vec![Pixel::solid(7, -3)]);
    }

    #[test]
    fn test_sampling_rounds_half_to_even() {
        // (0,0)-(-1,2) samples x = -0.5 at the middle step; ties go to the
        // even integer, so the middle pixel is (0,1), not (-1,1)
        let pixels = step_by_step(0, 0, -1, 2);
        assert_eq!(
            points(&pixels),
            vec![GridPoint::new(0, 0), GridPoint::new(0, 1), GridPoint::new(-1, 2)]
        );
        assert_eq!(dda(0, 0, -1, 2), pixels);

        // Positive half-step: 0.5 also rounds down to 0
        let pixels = step_by_step(0, 0, 1, 2);
        assert_eq!(
            points(&pixels),
            vec![GridPoint::new(0, 0), GridPoint::new(0, 1), GridPoint::new(1, 2)]
        );
        assert_eq!(dda(0, 0, 1, 2), pixels);
    }

    #[test]
    fn test_step_by_step_matches_dda() {
        for (x1, y1, x2, y2) in [(0, 0, 50, 25), (-10, 4, 3, -17), (0, 0, 0, 9), (6, 6, 1, 1)] {
            assert_eq!(step_by_step(x1, y1, x2, y2), dda(x1, y1, x2, y2));
        }
    }

    #[test]
    fn test_castle_pitway_matches_bresenham_set() {
        // (0,0)-(4,2) and (0,0)-(2,4) hit exact half-step ties
        for (x1, y1, x2, y2) in [
            (0, 0, 50, 25),
            (0, 0, 25, 50),
            (-8, 3, 12, -5),
            (4, 4, 4, 4),
            (0, 0, -30, -30),
            (0, 0, 4, 2),
            (0, 0, 2, 4),
        ] {
            assert_eq!(
                point_set(&castle_pitway(x1, y1, x2, y2)),
                point_set(&bresenham(x1, y1, x2, y2)),
                "({x1},{y1})-({x2},{y2})"
            );
        }
    }

    #[test]
    fn test_castle_pitway_degenerate_terminates() {
        assert_eq!(castle_pitway(-2, 5, -2, 5), vec![Pixel::solid(-2, 5)]);
    }

    #[test]
    fn test_wu_interior_pairs_sum_to_one() {
        let pixels = wu(0, 0, 11, 4);
        // Two pixels per endpoint, then interior pairs
        assert!(pixels.len() > 4);
        for pair in pixels[4..].chunks(2) {
            let sum = pair[0].intensity + pair[1].intensity;
            assert!((sum - 1.0).abs() < 1e-9, "pair sums to {sum}");
        }
    }

    #[test]
    fn test_wu_intensities_in_range() {
        for (x1, y1, x2, y2) in [(0, 0, 11, 4), (-9, -13, 2, 40), (5, 5, -20, -7)] {
            for p in wu(x1, y1, x2, y2) {
                assert!((0.0..=1.0).contains(&p.intensity), "intensity {}", p.intensity);
            }
        }
    }

    #[test]
    fn test_wu_steep_line_swaps_axes_back() {
        // |dy| > |dx|: steps walk the y axis, emitted coordinates stay (x, y)
        let pixels = wu(0, 0, 3, 10);
        let ys: HashSet<i32> = pixels.iter().map(|p| p.y).collect();
        assert!(ys.contains(&0) && ys.contains(&10));
        for p in &pixels {
            assert!((-1..=4).contains(&p.x), "x {} off the minor extent", p.x);
        }
    }

    #[test]
    fn test_wu_endpoint_order_independent_set() {
        let forward = point_set(&wu(1, 2, 14, 7));
        let backward = point_set(&wu(14, 7, 1, 2));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_wu_degenerate() {
        assert_eq!(wu(3, 3, 3, 3), vec![Pixel::solid(3, 3)]);
    }

    #[test]
    fn test_all_algorithms_idempotent() {
        for (x1, y1, x2, y2) in [(0, 0, 17, 6), (-4, 9, 8, -22)] {
            assert_eq!(step_by_step(x1, y1, x2, y2), step_by_step(x1, y1, x2, y2));
            assert_eq!(dda(x1, y1, x2, y2), dda(x1, y1, x2, y2));
            assert_eq!(bresenham(x1, y1, x2, y2), bresenham(x1, y1, x2, y2));
            assert_eq!(castle_pitway(x1, y1, x2, y2), castle_pitway(x1, y1, x2, y2));
            assert_eq!(wu(x1, y1, x2, y2), wu(x1, y1, x2, y2));
        }
    }
}
