//! Graham-scan convex hull of 2D point sets.
//!
//! Layout
//! - `geom2`: orientation / squared-distance predicates and polygon helpers.
//! - `hull`: angular sorter, stack sweep, and the `compute_hull` entry point.
//! - `sample`: reproducible random point sets for tests, benches and the CLI.
//!
//! The core is pure: no I/O, no logging, no global state. Parsing and output
//! formatting live in the `graham-cli` crate.

pub mod geom2;
pub mod hull;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{compute_hull, hull_of};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{contains_eps, orientation, signed_area, squared_distance, Orientation};
    pub use crate::hull::{compute_hull, hull_of, sort_around_pivot, sweep, AngularOrder};
    pub use crate::sample::{draw_cloud, draw_ring, CloudCfg, PointCount, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
