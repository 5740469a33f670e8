//! Cyclic sprite frame player.

use std::io;

use crate::{
	file::{AnimatDescriptor, AnimatError, animat::constants},
	geometry::{Flip, RectF, Vec2f},
	sprite::{Renderer, Sprite, render_sprite, render_sprite_at},
};

use super::is_valid_step;

/// Plays a fixed list of frames in a loop.
///
/// Each call to [`advance`](Self::advance) either burns down the current
/// frame's cooldown or moves to the next frame, never both, and never more
/// than one frame. A `dt` much larger than the frame duration therefore still
/// advances a single frame.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use animat_types::{
/// 	file::AnimatDescriptor, playback::FrameAnimation, sprite::Texture,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let sheet = Arc::new(Texture::new("spark1-sheet.png", 128, 32));
/// let descriptor = AnimatDescriptor::from_horizontal_strip(sheet, 4, 250)?;
/// let mut spark = FrameAnimation::from_descriptor(&descriptor)?;
///
/// spark.advance(0.25);
/// assert_eq!(spark.current_index(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAnimation {
	frames: Vec<Sprite>,
	frame_duration: f32,
	duration_ms: u32,
	frame_cooldown: f32,
	frame_current: usize,
}

impl FrameAnimation {
	/// Creates a player showing `frames` for `frame_duration` seconds each.
	///
	/// # Errors
	/// Returns [`AnimatError::EmptyAnimation`] if `frames` is empty and
	/// [`AnimatError::InvalidFrameDuration`] if `frame_duration` is negative
	/// or NaN.
	#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
	pub fn new(frames: Vec<Sprite>, frame_duration: f32) -> Result<Self, AnimatError> {
		if frames.is_empty() {
			return Err(AnimatError::EmptyAnimation);
		}
		if frame_duration.is_nan() || frame_duration < 0.0 {
			return Err(AnimatError::InvalidFrameDuration(frame_duration));
		}

		let duration_ms = (frame_duration * constants::MILLIS_PER_SECOND).round() as u32;
		Ok(Self {
			frames,
			frame_duration,
			duration_ms,
			frame_cooldown: frame_duration,
			frame_current: 0,
		})
	}

	/// Creates a player for a parsed definition.
	///
	/// # Errors
	/// Returns [`AnimatError::EmptyAnimation`] if the definition has no frames.
	pub fn from_descriptor(descriptor: &AnimatDescriptor) -> Result<Self, AnimatError> {
		let mut animation = Self::new(descriptor.sprites(), descriptor.frame_duration())?;
		animation.duration_ms = descriptor.duration_ms();
		Ok(animation)
	}

	/// Advances playback by `dt` seconds.
	pub fn advance(&mut self, dt: f32) {
		if !is_valid_step(dt) {
			return;
		}

		if dt < self.frame_cooldown {
			self.frame_cooldown -= dt;
		} else {
			self.frame_current = (self.frame_current + 1) % self.frames.len();
			self.frame_cooldown = self.frame_duration;
		}
	}

	/// Rewinds to the first frame with a full cooldown.
	pub fn reset(&mut self) {
		self.frame_current = 0;
		self.frame_cooldown = self.frame_duration;
	}

	/// Index of the frame on screen.
	pub fn current_index(&self) -> usize {
		self.frame_current
	}

	/// Sprite of the frame on screen.
	pub fn current_sprite(&self) -> &Sprite {
		&self.frames[self.frame_current]
	}

	/// All frames in playback order.
	pub fn frames(&self) -> &[Sprite] {
		&self.frames
	}

	/// Seconds each frame is shown.
	pub fn frame_duration(&self) -> f32 {
		self.frame_duration
	}

	/// Seconds left on the current frame.
	pub fn frame_cooldown(&self) -> f32 {
		self.frame_cooldown
	}

	/// Draws the current frame into `dst`.
	pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R, dst: RectF, flip: Flip) -> Result<(), R::Error> {
		render_sprite(renderer, self.current_sprite(), dst, flip)
	}

	/// Draws the current frame at its own size centred on `pos`.
	pub fn render_at<R: Renderer + ?Sized>(&self, renderer: &mut R, pos: Vec2f, flip: Flip) -> Result<(), R::Error> {
		render_sprite_at(renderer, self.current_sprite(), pos, flip)
	}

	/// Rebuilds a definition from the player.
	///
	/// Frames are assumed to share the first frame's spritesheet. A player
	/// built from a definition keeps its exact millisecond duration.
	pub fn to_descriptor(&self) -> AnimatDescriptor {
		let texture = self.frames[0].texture.clone();
		let frames = self.frames.iter().map(|sprite| sprite.src).collect();
		AnimatDescriptor::from_parts(texture, self.duration_ms, frames)
	}

	/// Writes the player's definition in the text format.
	pub fn dump<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
		self.to_descriptor().dump(writer)
	}
}
