//! This module is separated into its own crate to keep the facade thin, and should not be used directly.

/// `use animat_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export animat_types for convenience
pub use animat_types;

// Re-export commonly used types at crate root
pub use animat_types::file::{AnimatDescriptor, AnimatError, Diagnostic, ParseConfig};
pub use animat_types::sheet::SpritesheetRegistry;
