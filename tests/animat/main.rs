//! Integration tests for `animat-rs`

mod files;
mod playback;

use animat_rs::prelude::*;

/// Definition of the eight-frame walking cycle used across the tests.
pub(crate) const WALKING: &str = "\
# walking cycle, 24px frames
sprite = ./assets/sprites/walking-12px-zoom.png
count = 8
duration = 100

frames.0.x = 0
frames.0.y = 0
frames.0.w = 24
frames.0.h = 24
frames.1.x = 24
frames.1.y = 0
frames.1.w = 24
frames.1.h = 24
frames.2.x = 48
frames.2.y = 0
frames.2.w = 24
frames.2.h = 24
frames.3.x = 72
frames.3.y = 0
frames.3.w = 24
frames.3.h = 24
frames.4.x = 96
frames.4.y = 0
frames.4.w = 24
frames.4.h = 24
frames.5.x = 120
frames.5.y = 0
frames.5.w = 24
frames.5.h = 24
frames.6.x = 144
frames.6.y = 0
frames.6.w = 24
frames.6.h = 24
frames.7.x = 168
frames.7.y = 0
frames.7.w = 24
frames.7.h = 24
";

pub(crate) fn registry() -> SpritesheetRegistry {
	let mut sheets = SpritesheetRegistry::new();
	sheets.register("./assets/sprites/walking-12px-zoom.png", 192, 24);
	sheets.register("./assets/sprites/spark1-sheet.png", 128, 32);
	sheets
}

/// Renderer that remembers the source rectangle of every copy.
#[derive(Default)]
pub(crate) struct SourceRecorder {
	pub sources: Vec<Rect>,
}

impl Renderer for SourceRecorder {
	type Error = std::convert::Infallible;

	fn copy(&mut self, _texture: &Texture, src: Rect, _dst: RectF, _flip: Flip) -> Result<(), Self::Error> {
		self.sources.push(src);
		Ok(())
	}
}
