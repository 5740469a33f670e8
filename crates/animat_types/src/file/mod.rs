//! File type support for `animat-rs` project.

mod error;

pub mod animat;

// Re-export unified error type
pub use error::AnimatError;

// Re-export main file types
pub use animat::{AnimatDescriptor, Diagnostic, ParseConfig};
