//! Driving players built from loaded definitions

use animat_rs::prelude::*;

use crate::{SourceRecorder, WALKING, registry};

#[test]
fn test_loaded_walk_cycle_plays_in_order() {
	let descriptor = AnimatDescriptor::parse("walking.txt", WALKING.as_bytes(), &registry()).unwrap();
	let mut player = FrameAnimation::from_descriptor(&descriptor).unwrap();
	let mut renderer = SourceRecorder::default();

	for _ in 0..10 {
		let Ok(()) = player.render_at(&mut renderer, Vec2f::new(64.0, 64.0), Flip::None);
		player.advance(0.1);
	}

	let xs: Vec<u32> = renderer.sources.iter().map(|src| src.x).collect();
	assert_eq!(xs, [0, 24, 48, 72, 96, 120, 144, 168, 0, 24]);
}

#[test]
fn test_dumped_player_matches_definition() {
	let sheets = registry();
	let descriptor = AnimatDescriptor::parse("walking.txt", WALKING.as_bytes(), &sheets).unwrap();
	let mut player = FrameAnimation::from_descriptor(&descriptor).unwrap();
	player.advance(0.1);

	let mut out = Vec::new();
	player.dump(&mut out).unwrap();
	let reloaded = AnimatDescriptor::parse("dump", &out, &sheets).unwrap();

	assert_eq!(reloaded, descriptor);
}

#[test]
fn test_bounce_sequence_settles_on_last_pose() {
	let sheets = registry();
	let sprite = Sprite::from_texture(sheets.resolve("./assets/sprites/spark1-sheet.png").unwrap());
	let mut bounce = ComposedRubberAnimation::new([
		RubberAnimation::new(sprite.clone(), 0.0, 0.5, 0.25),
		RubberAnimation::new(sprite.clone(), 0.5, -0.25, 0.25),
		RubberAnimation::new(sprite, -0.25, 0.0, 0.25),
	]);

	for _ in 0..20 {
		bounce.advance(0.05);
	}

	assert!(bounce.finished());
	let texbox = RectF::new(0.0, 0.0, 32.0, 32.0);
	assert_eq!(bounce.dest_rect(Vec2f::new(16.0, 16.0), texbox), RectF::new(0.0, 0.0, 32.0, 32.0));
}
