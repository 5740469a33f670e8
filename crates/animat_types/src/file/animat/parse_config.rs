//! Parse configuration for animation definition files.
//!
//! This module provides the knobs that decide how forgiving the parser is
//! about incomplete or repeated declarations.

/// Configuration for parsing animation definitions.
///
/// # Presets
///
/// - `default()`: complete definitions, no redefinitions, up to 4096 frames
/// - `lenient()`: missing rectangle fields and `duration` default to 0, the
///   last value of a repeated key wins, up to 65536 frames
/// - `strict()`: like `default()` but limited to 256 frames
///
/// `count` may never be given twice, whatever the configuration.
///
/// # Examples
///
/// ```
/// use animat_types::file::animat::ParseConfig;
///
/// let config = ParseConfig::default();
/// assert!(config.require_complete_frames);
///
/// let config = ParseConfig::lenient();
/// assert!(config.allow_redefinition);
///
/// let config = ParseConfig::new(16, true, false);
/// assert_eq!(config.max_frame_count, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
	/// Largest accepted `count`
	pub max_frame_count: usize,
	/// Every frame field and top-level key must be present
	pub require_complete_frames: bool,
	/// Keys other than `count` may be given more than once
	pub allow_redefinition: bool,
}

impl Default for ParseConfig {
	fn default() -> Self {
		Self {
			max_frame_count: 4096,
			require_complete_frames: true,
			allow_redefinition: false,
		}
	}
}

impl ParseConfig {
	/// Create a parse configuration with custom settings.
	///
	/// # Arguments
	/// * `max_frame_count` - Largest accepted `count`
	/// * `require_complete_frames` - Reject definitions with unset fields
	/// * `allow_redefinition` - Let repeated keys overwrite earlier values
	pub fn new(max_frame_count: usize, require_complete_frames: bool, allow_redefinition: bool) -> Self {
		Self {
			max_frame_count,
			require_complete_frames,
			allow_redefinition,
		}
	}

	/// Create a lenient configuration.
	///
	/// Suitable for hand-edited work-in-progress files.
	/// - `max_frame_count`: 65536
	/// - `require_complete_frames`: false
	/// - `allow_redefinition`: true
	pub fn lenient() -> Self {
		Self {
			max_frame_count: 65536,
			require_complete_frames: false,
			allow_redefinition: true,
		}
	}

	/// Create a strict configuration.
	///
	/// - `max_frame_count`: 256
	/// - `require_complete_frames`: true
	/// - `allow_redefinition`: false
	pub fn strict() -> Self {
		Self {
			max_frame_count: 256,
			require_complete_frames: true,
			allow_redefinition: false,
		}
	}
}
