//! Continuous squash deformation.

use crate::{
	geometry::{Flip, RectF, Vec2f},
	sprite::{Renderer, Sprite, render_sprite},
};

use super::is_valid_step;

/// Squashes a sprite by an amount growing at `1 / duration` per second.
///
/// The amount is never clamped and the animation never finishes; the caller
/// stops driving it or calls [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq)]
pub struct SquashAnimation {
	sprite: Sprite,
	duration: f32,
	amount: f32,
}

impl SquashAnimation {
	/// Creates an undeformed squash. `duration` is expected to be positive.
	pub fn new(sprite: Sprite, duration: f32) -> Self {
		Self {
			sprite,
			duration,
			amount: 0.0,
		}
	}

	/// Grows the squash amount by `dt / duration`.
	pub fn advance(&mut self, dt: f32) {
		if !is_valid_step(dt) {
			return;
		}

		self.amount += dt / self.duration;
	}

	/// Accumulated squash amount.
	pub fn amount(&self) -> f32 {
		self.amount
	}

	/// Clears the accumulated amount.
	pub fn reset(&mut self) {
		self.amount = 0.0;
	}

	/// Sprite being deformed.
	pub fn sprite(&self) -> &Sprite {
		&self.sprite
	}

	/// Destination rectangle for a `texbox`-sized sprite centred on `pos`.
	pub fn dest_rect(&self, pos: Vec2f, texbox: RectF) -> RectF {
		let w = texbox.w + texbox.w * self.amount;
		let h = texbox.h * (1.0 - self.amount);
		RectF::bottom_anchored(pos, texbox, w, h)
	}

	/// Draws the squashed sprite.
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
