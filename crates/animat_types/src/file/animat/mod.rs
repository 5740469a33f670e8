//! Animation definition file support.
//!
//! An animation definition is a small line-oriented text file describing a
//! multi-frame animation cut from one spritesheet.
//!
//! # File Structure Overview
//!
//! ```text
//! # walking cycle, 4 frames of 16×24
//! sprite = ./assets/sprites/walking-12px-zoom.png
//! count = 4
//! duration = 100
//!
//! frames.0.x = 0
//! frames.0.y = 0
//! frames.0.w = 16
//! frames.0.h = 24
//! ...
//! ```
//!
//! ## Grammar
//!
//! ```text
//! Key               Value               Description
//! ----------------  ------------------  ----------------------------------------
//! count             unsigned integer    Number of frame slots, exactly once
//! sprite            spritesheet name    Resolved through a SpritesheetRegistry
//! duration          unsigned integer    Milliseconds per frame
//! frames.<i>.x      unsigned integer    Source rectangle left edge of frame i
//! frames.<i>.y      unsigned integer    Source rectangle top edge of frame i
//! frames.<i>.w      unsigned integer    Source rectangle width of frame i
//! frames.<i>.h      unsigned integer    Source rectangle height of frame i
//! ```
//!
//! - Blank lines and lines starting with `#` are ignored.
//! - Keys and values are trimmed; the line is split at the first `=`.
//! - `count` and `sprite` must appear before any `frames` key.
//! - Negative numbers are not supported.
//!
//! # Diagnostics
//!
//! Malformed definitions are rejected with a [`Diagnostic`] naming the file,
//! the 1-based line, and a caret under the offending token:
//!
//! ```text
//! walk.txt:4: frame index is bigger than the `count`
//! frames.5.x = 1
//!        ^
//! ```
//!
//! # Usage Examples
//!
//! ```no_run
//! use animat_types::{file::animat::AnimatDescriptor, sheet::SpritesheetRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut sheets = SpritesheetRegistry::new();
//! sheets.register("./assets/sprites/walking-12px-zoom.png", 192, 24);
//!
//! let walk = AnimatDescriptor::open("./assets/animats/walk.txt", &sheets)?;
//! println!("{} frames, {} ms each", walk.frame_count(), walk.duration_ms());
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod descriptor;
mod diagnostic;
pub mod parse_config;
mod parser;

pub use self::descriptor::AnimatDescriptor;
pub use self::diagnostic::Diagnostic;
pub use self::parse_config::ParseConfig;
