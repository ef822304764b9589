//! **wayfind-core**: geometry and grid types shared by the *wayfind* crates.
//!
//! This crate provides [`Point`], [`Direction`] and [`Range`] geometry, the
//! immutable [`Grid`] parsed from puzzle text, and [`GridError`] for the
//! construction-time failures (ragged rows, missing markers).

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Direction, Point, Range, RangeIter};
pub use grid::Grid;
