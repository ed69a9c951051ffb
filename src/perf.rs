//! Performance measurement harness for the rasterization algorithms.
//!
//! Drives each algorithm with frozen inputs, repeats every call a fixed
//! number of times, and aggregates wall-clock timings into a comparison
//! report. The harness is a pure consumer of the rasterizer's public
//! contract: test cases run sequentially (concurrent timing runs would
//! contend for the same core), nothing mutates shared state, and re-running
//! yields the same results modulo timing noise.
//!
//! ```rust
//! use trazar::perf::{default_line_cases, Harness};
//! use trazar::raster::LineAlgorithm;
//!
//! let mut harness = Harness::new(100);
//! harness.run_line(LineAlgorithm::Bresenham, &default_line_cases());
//! println!("{}", harness.report());
//! ```

use std::fmt::Write as _;
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::raster::{rasterize_circle, rasterize_line, LineAlgorithm};

/// Report name for the circle algorithm (not a [`LineAlgorithm`] variant).
const CIRCLE_ALGORITHM_NAME: &str = "Midpoint (circle)";

/// The case used for the focused line-algorithm comparison when present.
const REPRESENTATIVE_CASE: &str = "diagonal 45";

/// A named line-segment test case with frozen endpoint inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCase {
    /// Case name used in the report.
    pub name: String,
    /// First endpoint x.
    pub x1: i32,
    /// First endpoint y.
    pub y1: i32,
    /// Second endpoint x.
    pub x2: i32,
    /// Second endpoint y.
    pub y2: i32,
}

impl LineCase {
    /// Create a new line test case.
    pub fn new(name: impl Into<String>, x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { name: name.into(), x1, y1, x2, y2 }
    }
}

/// A named circle test case with frozen center/radius inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleCase {
    /// Case name used in the report.
    pub name: String,
    /// Center x.
    pub cx: i32,
    /// Center y.
    pub cy: i32,
    /// Radius (must be positive).
    pub radius: i32,
}

impl CircleCase {
    /// Create a new circle test case.
    pub fn new(name: impl Into<String>, cx: i32, cy: i32, radius: i32) -> Self {
        Self { name: name.into(), cx, cy, radius }
    }
}

/// Aggregated timing statistics for one algorithm on one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingSample {
    /// Algorithm name.
    pub algorithm: String,
    /// Test case name.
    pub case: String,
    /// Pixels emitted by a single invocation.
    pub pixel_count: usize,
    /// Fastest observed call.
    pub min: Duration,
    /// Mean over all calls.
    pub avg: Duration,
    /// Slowest observed call.
    pub max: Duration,
}

impl TimingSample {
    /// Whether this sample came from a line algorithm (as opposed to the
    /// circle algorithm).
    #[must_use]
    pub fn is_line(&self) -> bool {
        LineAlgorithm::ALL.iter().any(|a| a.name() == self.algorithm)
    }
}

/// The default line test suite: one case per slope family.
#[must_use]
pub fn default_line_cases() -> Vec<LineCase> {
    vec![
        LineCase::new("horizontal", 0, 0, 50, 0),
        LineCase::new("vertical", 0, 0, 0, 50),
        LineCase::new(REPRESENTATIVE_CASE, 0, 0, 50, 50),
        LineCase::new("gentle slope", 0, 0, 50, 25),
        LineCase::new("long line", 0, 0, 100, 50),
    ]
}

/// The default circle test suite: radii spanning two orders of magnitude.
#[must_use]
pub fn default_circle_cases() -> Vec<CircleCase> {
    vec![
        CircleCase::new("small circle", 0, 0, 5),
        CircleCase::new("medium circle", 0, 0, 20),
        CircleCase::new("large circle", 0, 0, 50),
        CircleCase::new("huge circle", 0, 0, 100),
    ]
}

/// Repeated-invocation timing harness.
///
/// Collects one [`TimingSample`] per (algorithm, case) pair. Timer start
/// and stop wrap the single call under test; nothing else happens in the
/// timed region.
#[derive(Debug, Clone)]
pub struct Harness {
    iterations: u32,
    samples: Vec<TimingSample>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Harness {
    /// Create a harness running each case `iterations` times (minimum 1).
    #[must_use]
    pub fn new(iterations: u32) -> Self {
        Self { iterations: iterations.max(1), samples: Vec::new() }
    }

    /// Samples collected so far, in run order.
    #[must_use]
    pub fn samples(&self) -> &[TimingSample] {
        &self.samples
    }

    /// Time one line algorithm against every case in `cases`.
    pub fn run_line(&mut self, algorithm: LineAlgorithm, cases: &[LineCase]) {
        for case in cases {
            let (stats, pixel_count) = self.time_calls(|| {
                rasterize_line(
                    algorithm,
                    black_box(case.x1),
                    black_box(case.y1),
                    black_box(case.x2),
                    black_box(case.y2),
                )
            });
            self.samples.push(TimingSample {
                algorithm: algorithm.name().to_string(),
                case: case.name.clone(),
                pixel_count,
                min: stats.0,
                avg: stats.1,
                max: stats.2,
            });
        }
    }

    /// Time the circle algorithm against every case in `cases`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidRadius`] if a case has a non-positive
    /// radius; cases before the invalid one keep their samples.
    pub fn run_circle(&mut self, cases: &[CircleCase]) -> Result<()> {
        for case in cases {
            // Validate outside the timed loop so an invalid case fails
            // before any timing work
            rasterize_circle(case.cx, case.cy, case.radius)?;

            let (stats, pixel_count) = self.time_calls(|| {
                rasterize_circle(black_box(case.cx), black_box(case.cy), black_box(case.radius))
                    .unwrap_or_default()
            });
            self.samples.push(TimingSample {
                algorithm: CIRCLE_ALGORITHM_NAME.to_string(),
                case: case.name.clone(),
                pixel_count,
                min: stats.0,
                avg: stats.1,
                max: stats.2,
            });
        }
        Ok(())
    }

    /// Run every line algorithm over the default line suite plus the circle
    /// algorithm over the default circle suite.
    ///
    /// # Errors
    ///
    /// Propagates circle-case validation failures (the default suite never
    /// triggers them).
    pub fn run_default_suite(&mut self) -> Result<()> {
        let line_cases = default_line_cases();
        for algorithm in LineAlgorithm::ALL {
            self.run_line(algorithm, &line_cases);
        }
        self.run_circle(&default_circle_cases())
    }

    /// Invoke `call` `iterations` times, timing each call tightly.
    ///
    /// Returns `((min, avg, max), pixel_count)` where `pixel_count` is the
    /// length of the last result (identical every iteration by purity).
    fn time_calls<F>(&self, mut call: F) -> ((Duration, Duration, Duration), usize)
    where
        F: FnMut() -> Vec<crate::geometry::Pixel>,
    {
        let mut min = Duration::MAX;
        let mut max = Duration::ZERO;
        let mut total = Duration::ZERO;
        let mut pixel_count = 0;

        for _ in 0..self.iterations {
            let start = Instant::now();
            let pixels = call();
            let elapsed = start.elapsed();

            pixel_count = black_box(&pixels).len();
            min = min.min(elapsed);
            max = max.max(elapsed);
            total += elapsed;
        }

        ((min, total / self.iterations, max), pixel_count)
    }

    /// Render the comparison report.
    ///
    /// Groups samples by test case (comparing every algorithm run against
    /// it), then appends a focused comparison of the line algorithms on one
    /// representative case, expressing each average as a multiple of the
    /// fastest average.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(72));
        let _ = writeln!(out, "RASTERIZATION PERFORMANCE ({} iterations per case)", self.iterations);
        let _ = writeln!(out, "{}", "=".repeat(72));

        for case in self.case_names() {
            let _ = writeln!(out, "\n{case}:");
            let _ = writeln!(
                out,
                "{:<22} {:>8} {:>12} {:>12} {:>12}",
                "Algorithm", "Pixels", "Min (us)", "Avg (us)", "Max (us)"
            );
            let _ = writeln!(out, "{}", "-".repeat(70));
            for s in self.samples.iter().filter(|s| s.case == case) {
                let _ = writeln!(
                    out,
                    "{:<22} {:>8} {:>12.3} {:>12.3} {:>12.3}",
                    s.algorithm,
                    s.pixel_count,
                    micros(s.min),
                    micros(s.avg),
                    micros(s.max)
                );
            }
        }

        self.write_line_comparison(&mut out);
        out
    }

    /// Focused line-algorithm comparison on the representative case.
    fn write_line_comparison(&self, out: &mut String) {
        let case = self
            .samples
            .iter()
            .find(|s| s.is_line() && s.case == REPRESENTATIVE_CASE)
            .or_else(|| self.samples.iter().find(|s| s.is_line()))
            .map(|s| s.case.clone());
        let Some(case) = case else {
            return;
        };

        let rows: Vec<&TimingSample> =
            self.samples.iter().filter(|s| s.is_line() && s.case == case).collect();
        let Some(fastest) = rows.iter().map(|s| s.avg).min() else {
            return;
        };

        let _ = writeln!(out, "\n{}", "=".repeat(72));
        let _ = writeln!(out, "LINE ALGORITHM COMPARISON: {case}");
        let _ = writeln!(out, "{}", "=".repeat(72));
        let _ = writeln!(out, "{:<22} {:>12} {:>10}", "Algorithm", "Avg (us)", "Relative");
        let _ = writeln!(out, "{}", "-".repeat(46));
        for s in rows {
            // Sub-resolution averages degrade to an even comparison
            let relative =
                if fastest.is_zero() { 1.0 } else { micros(s.avg) / micros(fastest) };
            let _ = writeln!(out, "{:<22} {:>12.3} {:>9.2}x", s.algorithm, micros(s.avg), relative);
        }
    }

    /// Distinct case names in first-seen order.
    fn case_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for s in &self.samples {
            if !names.contains(&s.case) {
                names.push(s.case.clone());
            }
        }
        names
    }
}

/// Duration as fractional microseconds for display.
#[inline]
fn micros(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000_000.0
}
