//! Boolean 2D collision tests between points, circles, axis-aligned
//! rectangles, line segments and simple polygons.
//!
//! Every test is a pure function over borrowed inputs. The free functions in
//! [`geo`] are the core; [`geo::Collide`], [`geo::Contains`] and [`geo::Geo`]
//! are thin dispatch layers on top of them.

pub mod config;
pub mod error;
pub mod geo;
pub mod utils;

pub use config::CollisionConfig;
pub use error::GeoError;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
