//! Squash-and-stretch tween towards a target offset.

use crate::{
	geometry::{Flip, RectF, Vec2f},
	sprite::{Renderer, Sprite, render_sprite},
};

use super::is_valid_step;

/// Tweens a deformation offset from `begin` to `end` over `duration` seconds.
///
/// An offset `o` turns a `w`×`h` box into a `(w + o·h)`×`(h − o·h)` one whose
/// bottom-centre stays put, so positive offsets squash and negative ones
/// stretch.
#[derive(Debug, Clone, PartialEq)]
pub struct RubberAnimation {
	sprite: Sprite,
	begin: f32,
	end: f32,
	duration: f32,
	elapsed: f32,
}

impl RubberAnimation {
	/// Creates a tween that has not started yet.
	pub fn new(sprite: Sprite, begin: f32, end: f32, duration: f32) -> Self {
		Self {
			sprite,
			begin,
			end,
			duration,
			elapsed: 0.0,
		}
	}

	/// Advances the tween by `dt` seconds.
	///
	/// Once finished, further calls leave the elapsed time alone, so it
	/// overshoots `duration` by at most one step.
	pub fn advance(&mut self, dt: f32) {
		if !is_valid_step(dt) {
			return;
		}

		if !self.finished() {
			self.elapsed += dt;
		}
	}

	/// Returns `true` once the elapsed time reaches the duration.
	pub fn finished(&self) -> bool {
		self.elapsed >= self.duration
	}

	/// Rewinds to the beginning.
	pub fn reset(&mut self) {
		self.elapsed = 0.0;
	}

	/// Seconds played so far.
	pub fn elapsed(&self) -> f32 {
		self.elapsed
	}

	/// Total length in seconds.
	pub fn duration(&self) -> f32 {
		self.duration
	}

	/// Sprite being deformed.
	pub fn sprite(&self) -> &Sprite {
		&self.sprite
	}

	/// Current deformation offset.
	///
	/// Progress is clamped to the tween's length, so a finished tween sits
	/// exactly at `end`.
	pub fn offset(&self) -> f32 {
		let progress = if self.finished() {
			1.0
		} else {
			self.elapsed / self.duration
		};
		self.begin + (self.end - self.begin) * progress
	}

	/// Destination rectangle for a `texbox`-sized sprite centred on `pos`.
	pub fn dest_rect(&self, pos: Vec2f, texbox: RectF) -> RectF {
		let offset = self.offset();
		let w = texbox.w + offset * texbox.h;
		let h = texbox.h - offset * texbox.h;
		RectF::bottom_anchored(pos, texbox, w, h)
	}

	/// Draws the deformed sprite.
	pub fn render<R: Renderer + ?Sized>(
		&self,
		renderer: &mut R,
		pos: Vec2f,
		texbox: RectF,
		flip: Flip,
	) -> Result<(), R::Error> {
		render_sprite(renderer, &self.sprite, self.dest_rect(pos, texbox), flip)
	}
}
