//! Ken Burns Geometry
//!
//! The value types the animation engine is built on:
//! - **Rect:** Immutable axis-aligned rectangle with derived size, center, and ratio
//! - **Ratio:** Aspect-ratio computation and tolerance-based comparison
//! - **Easing:** Interpolation curves that shape progress over a transition
//!
//! Coordinates are in drawable pixels and are never normalized.

pub mod easing;
pub mod ratio;
pub mod rect;

pub use easing::*;
pub use ratio::*;
pub use rect::*;
