//! Benchmark helper utilities for animat-rs
//!
//! This module generates synthetic animation definitions so the parser can be
//! measured on inputs of any size without shipping asset files.

use std::fmt::Write;

/// Spritesheet name used by every generated definition.
pub const SHEET_NAME: &str = "./assets/sprites/bench-sheet.png";

/// Width and height of one generated frame in pixels.
pub const FRAME_SIZE: u32 = 32;

/// Generates a horizontal-strip definition with `frame_count` frames.
///
/// Every line uses the canonical `key = value` spacing and the file starts
/// with a comment, so the parser also exercises its skip path.
pub fn generate_definition(frame_count: u32, duration_ms: u32) -> String {
	let mut text = String::with_capacity(64 + frame_count as usize * 64);

	// Writing into a String cannot fail
	let _ = writeln!(text, "# generated, {frame_count} frames");
	let _ = writeln!(text, "sprite = {SHEET_NAME}");
	let _ = writeln!(text, "count = {frame_count}");
	let _ = writeln!(text, "duration = {duration_ms}");
	for i in 0..frame_count {
		let _ = writeln!(text, "frames.{i}.x = {}", i * FRAME_SIZE);
		let _ = writeln!(text, "frames.{i}.y = 0");
		let _ = writeln!(text, "frames.{i}.w = {FRAME_SIZE}");
		let _ = writeln!(text, "frames.{i}.h = {FRAME_SIZE}");
	}

	text
}

/// Width of a spritesheet holding `frame_count` generated frames side by side.
pub fn sheet_width(frame_count: u32) -> u32 {
	frame_count * FRAME_SIZE
}

/// Common frame counts for benchmarking
pub mod sizes {
	/// Single frame (a still sprite)
	pub const SINGLE: u32 = 1;
	/// Typical walk cycle
	pub const CYCLE: u32 = 8;
	/// Long effect animation
	pub const EFFECT: u32 = 64;
	/// The default parser limit
	pub const LIMIT: u32 = 4096;
}

#[cfg(test)]
mod tests {
	use animat_types::{file::AnimatDescriptor, geometry::Rect, sheet::SpritesheetRegistry};

	use super::*;

	#[test]
	fn test_generated_definition_parses() {
		let mut sheets = SpritesheetRegistry::new();
		sheets.register(SHEET_NAME, sheet_width(sizes::CYCLE), FRAME_SIZE);

		let text = generate_definition(sizes::CYCLE, 100);
		let descriptor = AnimatDescriptor::parse("bench", text.as_bytes(), &sheets).unwrap();

		assert_eq!(descriptor.frame_count(), 8);
		assert_eq!(descriptor.frames()[3], Rect::new(96, 0, 32, 32));
		assert_eq!(descriptor.duration_ms(), 100);
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::SINGLE, 1);
		assert_eq!(sizes::CYCLE, 8);
		assert_eq!(sizes::EFFECT, 64);
		assert_eq!(sizes::LIMIT, 4096);
	}
}
