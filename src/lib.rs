//! # Trazar
//!
//! Deterministic 2D rasterization algorithms with a performance comparison
//! harness.
//!
//! Trazar converts continuous geometric primitives (line segments, circles)
//! into ordered sequences of grid pixels. Every algorithm is a pure function:
//! identical inputs produce byte-for-byte identical output sequences, with no
//! hidden state and no dependence on the environment. Rendering the pixels
//! (mapping grid coordinates onto a screen, blending antialiased coverage
//! into a background color) is the caller's concern, not this crate's.
//!
//! ## Quick Start
//!
//! ```rust
//! use trazar::prelude::*;
//!
//! // Rasterize a line segment with Bresenham's algorithm
//! let pixels = rasterize_line(LineAlgorithm::Bresenham, 0, 0, 4, 0);
//! assert_eq!(pixels.len(), 5);
//!
//! // Rasterize a circle outline (radius must be positive)
//! let pixels = rasterize_circle(0, 0, 10)?;
//! assert!(!pixels.is_empty());
//! # Ok::<(), trazar::Error>(())
//! ```
//!
//! ## Algorithms
//!
//! - **Step-by-step / DDA**: floating-point incremental sampling
//! - **Bresenham**: integer error-accumulator line drawing
//! - **Castle-Pitway**: division-free doubled-error line drawing
//! - **Wu**: antialiased lines with per-pixel coverage intensities
//! - **Midpoint circle**: integer 8-way symmetric circle outlines
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." IBM Systems Journal.
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or
//!   hyperbolae with a digital plotter." The Computer Journal.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (grid points, pixels, segments, circles).
pub mod geometry;

/// Rasterization algorithms and dispatch.
pub mod raster;

/// Performance measurement harness and reporting.
pub mod perf;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trazar operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trazar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Circle, GridPoint, LineSegment, Pixel};
    pub use crate::perf::{CircleCase, Harness, LineCase, TimingSample};
    pub use crate::raster::{rasterize_circle, rasterize_line, LineAlgorithm};
}
