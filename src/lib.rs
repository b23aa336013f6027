//! Decomposes simple 2D polygons into triangles via ear clipping.

pub mod math;
pub mod triangulate;

pub use math::Vec2;
pub use triangulate::earclipping::{triangulate, Error, Result};
pub use triangulate::{Tri, Triangulation};
