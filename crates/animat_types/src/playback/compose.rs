//! Rubber tweens played back to back.

use crate::{
	geometry::{Flip, RectF, Vec2f},
	sprite::Renderer,
};

use super::{RubberAnimation, is_valid_step};

/// Fixed sequence of [`RubberAnimation`] segments.
///
/// The cursor only moves past a segment after that segment has reported
/// finished, so no segment is ever skipped. Once the cursor reaches `N` the
/// composition is finished and keeps rendering the last segment's final pose.
///
/// `N` must be at least one; `ComposedRubberAnimation::<0>::new` does not
/// compile.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use animat_types::{
/// 	playback::{ComposedRubberAnimation, RubberAnimation},
/// 	sprite::{Sprite, Texture},
/// };
///
/// let blob = Sprite::from_texture(Arc::new(Texture::new("blob.png", 16, 16)));
/// let mut jump = ComposedRubberAnimation::new([
/// 	RubberAnimation::new(blob.clone(), 0.0, 0.5, 0.25),
/// 	RubberAnimation::new(blob, 0.5, 0.0, 0.25),
/// ]);
///
/// while !jump.finished() {
/// 	jump.advance(0.125);
/// }
/// assert_eq!(jump.current(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedRubberAnimation<const N: usize> {
	segments: [RubberAnimation; N],
	current: usize,
}

impl<const N: usize> ComposedRubberAnimation<N> {
	/// Creates a composition positioned at its first segment.
	pub fn new(segments: [RubberAnimation; N]) -> Self {
		const { assert!(N > 0, "a composed animation needs at least one segment") };

		Self {
			segments,
			current: 0,
		}
	}

	/// Advances the active segment by `dt` seconds.
	///
	/// A segment that finishes during the call hands over to the next one at
	/// the end of the same call. Time left over is not carried into the next
	/// segment, and the cursor moves at most one segment per call.
	pub fn advance(&mut self, dt: f32) {
		if !is_valid_step(dt) || self.finished() {
			return;
		}

		let segment = &mut self.segments[self.current];
		segment.advance(dt);
		if segment.finished() {
			self.current += 1;
		}
	}

	/// Returns `true` once every segment has played.
	pub fn finished(&self) -> bool {
		self.current >= N
	}

	/// Rewinds the cursor and every segment.
	pub fn reset(&mut self) {
		self.current = 0;
		for segment in &mut self.segments {
			segment.reset();
		}
	}

	/// Cursor position, `N` once finished.
	pub fn current(&self) -> usize {
		self.current
	}

	/// Segment used for rendering, the last one once finished.
	pub fn active(&self) -> &RubberAnimation {
		&self.segments[self.current.min(N - 1)]
	}

	/// All segments in playback order.
	pub fn segments(&self) -> &[RubberAnimation; N] {
		&self.segments
	}

	/// Destination rectangle of the active segment.
	pub fn dest_rect(&self, pos: Vec2f, texbox: RectF) -> RectF {
		self.active().dest_rect(pos, texbox)
	}

	/// Draws the active segment.
	pub fn render<R: Renderer + ?Sized>(
		&self,
		renderer: &mut R,
		pos: Vec2f,
		texbox: RectF,
		flip: Flip,
	) -> Result<(), R::Error> {
		self.active().render(renderer, pos, texbox, flip)
	}
}
