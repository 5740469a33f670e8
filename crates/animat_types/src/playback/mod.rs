//! Playback state machines driven by elapsed time.
//!
//! Every machine exposes `advance(dt)` taking non-negative seconds, and a
//! geometry query the renderer consumes. A negative or NaN `dt` violates
//! that contract and is ignored: the state is left untouched.
//!
//! - [`FrameAnimation`]: cycles through sprite frames, one step per call
//! - [`RubberAnimation`]: tweens a squash-and-stretch offset towards a target
//! - [`ComposedRubberAnimation`]: plays rubber segments back to back
//! - [`SquashAnimation`]: accumulates an unbounded squash amount

mod compose;
mod frame;
mod rubber;
mod squash;

pub use self::compose::ComposedRubberAnimation;
pub use self::frame::FrameAnimation;
pub use self::rubber::RubberAnimation;
pub use self::squash::SquashAnimation;

/// Returns `true` if `dt` may be applied to a playback state.
#[inline]
fn is_valid_step(dt: f32) -> bool {
	let valid = dt >= 0.0;
	if !valid {
		log::trace!("Ignoring invalid time step {dt}");
	}
	valid
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_is_valid_step() {
		assert!(is_valid_step(0.0));
		assert!(is_valid_step(0.016));
		assert!(!is_valid_step(-0.016));
		assert!(!is_valid_step(f32::NAN));
	}
}
