//! Math-related constructs used by the other modules.

mod vec2;

pub use vec2::Vec2;
