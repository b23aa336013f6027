//! Everything related to triangulation.

pub mod earclipping;

pub type Tri = [crate::math::Vec2; 3];
pub type Triangulation = Vec<Tri>;
