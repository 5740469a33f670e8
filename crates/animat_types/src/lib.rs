//! This crate provides the core data types of the `animat-rs` project: the
//! animation definition format and the playback state machines that drive a
//! renderer.
//!
//! # Components
//!
//! - **[`text`]**: borrowed byte views used to tokenize text formats
//! - **[`file::animat`]**: `key = value` animation definitions with
//!   line-precise diagnostics
//! - **[`sheet`]**: registry resolving spritesheet names to texture handles
//! - **[`sprite`]**: sprites, shared textures and the [`sprite::Renderer`] seam
//! - **[`playback`]**: frame, rubber, composed rubber and squash animations
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use animat_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut sheets = SpritesheetRegistry::new();
//! sheets.register("fantasy_tiles.png", 64, 16);
//!
//! let source = "sprite = fantasy_tiles.png\ncount = 1\nduration = 100\n\
//!               frames.0.x = 0\nframes.0.y = 0\nframes.0.w = 16\nframes.0.h = 16\n";
//! let descriptor = AnimatDescriptor::parse("tiles.txt", source.as_bytes(), &sheets)?;
//!
//! let mut animation = FrameAnimation::from_descriptor(&descriptor)?;
//! animation.advance(0.016);
//! assert_eq!(animation.current_sprite().src, Rect::new(0, 0, 16, 16));
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod geometry;
pub mod playback;
pub mod sheet;
pub mod sprite;
pub mod text;

/// `use animat_types::prelude::*;` to import commonly used items.
pub mod prelude;
