//! Prelude module for `animat_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use animat_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut sheets = SpritesheetRegistry::new();
//! let texture = sheets.register("spark1-sheet.png", 128, 32);
//! let sprite = Sprite::from_texture(texture);
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{AnimatDescriptor, AnimatError, Diagnostic, ParseConfig};

// Geometry and sprites
#[doc(inline)]
pub use crate::geometry::{Flip, Rect, RectF, Vec2f};

#[doc(inline)]
pub use crate::sprite::{Renderer, Sprite, Texture, TextureHandle, render_sprite, render_sprite_at};

#[doc(inline)]
pub use crate::sheet::SpritesheetRegistry;

// Playback
#[doc(inline)]
pub use crate::playback::{ComposedRubberAnimation, FrameAnimation, RubberAnimation, SquashAnimation};

#[doc(inline)]
pub use crate::text::TextView;

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
