//! Reference stages shipped with the engine.
//!
//! Generators (`circle`, `lissajous`) add a moving offset to the incoming position; transformers
//! (`rotation`, `oscillating_rotation`, `translation`) move the incoming position itself.

pub(crate) mod circle;
pub(crate) mod lissajous;
pub(crate) mod rotation;
pub(crate) mod translation;

pub use circle::Circle;
pub use lissajous::Lissajous;
pub use rotation::{OscillatingRotation, Rotation};
pub use translation::Translation;

#[cfg(test)]
#[path = "../../../tests/unit/stage/builtin.rs"]
mod tests;
