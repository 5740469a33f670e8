//! Prelude module for `animat_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use animat_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut sheets = SpritesheetRegistry::new();
//! let texture = sheets.register("walking-12px-zoom.png", 192, 24);
//!
//! // Slice a horizontal strip into a looping player
//! let walk = AnimatDescriptor::from_horizontal_strip(texture, 8, 100).unwrap();
//! let player = FrameAnimation::from_descriptor(&walk).unwrap();
//! assert_eq!(player.frames().len(), 8);
//! ```

// Re-export everything from animat_types::prelude
#[doc(inline)]
pub use animat_types::prelude::*;

// Re-export the entire animat_types module for advanced usage
#[doc(inline)]
pub use animat_types;
