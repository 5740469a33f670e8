//! Loading and saving definition files on disk

use std::fs;

use animat_rs::prelude::*;

use crate::{WALKING, registry};

#[test]
fn test_open_definition_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("walking.txt");
	fs::write(&path, WALKING).unwrap();

	let descriptor = AnimatDescriptor::open(&path, &registry()).unwrap();
	assert_eq!(descriptor.frame_count(), 8);
	assert_eq!(descriptor.duration_ms(), 100);
	assert_eq!(descriptor.texture().name(), "./assets/sprites/walking-12px-zoom.png");
	assert_eq!(descriptor.frames()[7], Rect::new(168, 0, 24, 24));
}

#[test]
fn test_save_then_open_reconstructs_descriptor() {
	let sheets = registry();
	let saved = AnimatDescriptor::parse("walking.txt", WALKING.as_bytes(), &sheets).unwrap();

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("dumped.txt");
	saved.save(&path).unwrap();
	let reloaded = AnimatDescriptor::open(&path, &sheets).unwrap();

	assert_eq!(reloaded, saved);
	assert_eq!(fs::read_to_string(&path).unwrap(), saved.to_string());
}

#[test]
fn test_strip_dump_reloads_as_same_animation() {
	let sheets = registry();
	let texture = sheets.resolve("./assets/sprites/spark1-sheet.png").unwrap();
	let strip = AnimatDescriptor::from_horizontal_strip(texture, 4, 80).unwrap();

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("spark.txt");
	strip.save(&path).unwrap();

	let reloaded = AnimatDescriptor::open_with_config(&path, &sheets, &ParseConfig::strict()).unwrap();
	assert_eq!(reloaded.frames(), strip.frames());
	assert_eq!(reloaded.duration_ms(), 80);
}

#[test]
fn test_missing_file_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("does-not-exist.txt");

	let err = AnimatDescriptor::open(&path, &registry()).unwrap_err();
	match &err {
		AnimatError::Io {
			path: reported,
			..
		} => assert_eq!(reported, &path),
		other => panic!("expected an io error, got {other:?}"),
	}
	assert!(err.diagnostic().is_none());
}

#[test]
fn test_diagnostic_is_labelled_with_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("broken.txt");
	fs::write(&path, "count = 2\nsprite = ./assets/sprites/spark1-sheet.png\nduration = 50\nframes.5.x = 1\n").unwrap();

	let err = AnimatDescriptor::open(&path, &registry()).unwrap_err();
	let diagnostic = err.diagnostic().unwrap();

	assert_eq!(diagnostic.label(), path.display().to_string());
	assert_eq!(diagnostic.line_number(), 4);
	assert_eq!(diagnostic.line(), "frames.5.x = 1");
	assert!(err.to_string().starts_with(&format!("{}:4: ", path.display())));
}

#[test]
fn test_unregistered_sheet_names_the_sheet() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("ghost.txt");
	fs::write(&path, "sprite = ghost.png\ncount = 1\nduration = 10\n").unwrap();

	let err = AnimatDescriptor::open(&path, &registry()).unwrap_err();
	match err {
		AnimatError::UnknownSpritesheet {
			name,
			diagnostic,
		} => {
			assert_eq!(name, "ghost.png");
			assert_eq!(diagnostic.line_number(), 1);
		}
		other => panic!("expected an unknown spritesheet error, got {other:?}"),
	}
}
