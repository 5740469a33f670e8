//! Benchmark suite for animation definition parsing and playback
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use std::hint::black_box;

use animat_benches::{FRAME_SIZE, SHEET_NAME, generate_definition, sheet_width, sizes};
use animat_types::{
	file::AnimatDescriptor,
	geometry::{RectF, Vec2f},
	playback::{ComposedRubberAnimation, FrameAnimation, RubberAnimation, SquashAnimation},
	sheet::SpritesheetRegistry,
	sprite::Sprite,
	text::TextView,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn registry(frame_count: u32) -> SpritesheetRegistry {
	let mut sheets = SpritesheetRegistry::new();
	sheets.register(SHEET_NAME, sheet_width(frame_count), FRAME_SIZE);
	sheets
}

/// Benchmark parsing of generated definitions of growing size
fn bench_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("animat_parse");

	for frame_count in [sizes::SINGLE, sizes::CYCLE, sizes::EFFECT, sizes::LIMIT] {
		let sheets = registry(frame_count);
		let text = generate_definition(frame_count, 100);

		group.throughput(Throughput::Bytes(text.len() as u64));
		group.bench_with_input(BenchmarkId::new("parse", frame_count), &text, |b, text| {
			b.iter(|| {
				let result = AnimatDescriptor::parse("bench", black_box(text.as_bytes()), &sheets);
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark the line splitting the parser is built on
fn bench_text_view(c: &mut Criterion) {
	let mut group = c.benchmark_group("animat_text_view");
	let text = generate_definition(sizes::EFFECT, 100);

	group.throughput(Throughput::Bytes(text.len() as u64));
	group.bench_function("split_lines", |b| {
		b.iter(|| {
			let mut input = TextView::from(black_box(text.as_str()));
			let mut lines = 0usize;
			while !input.is_empty() {
				let line = input.chop_by_delim(b'\n').trim();
				lines += usize::from(!line.is_empty());
			}
			black_box(lines)
		});
	});

	group.finish();
}

/// Benchmark dumping a descriptor back to text
fn bench_dump(c: &mut Criterion) {
	let mut group = c.benchmark_group("animat_dump");
	let sheets = registry(sizes::EFFECT);
	let Ok(descriptor) = AnimatDescriptor::parse("bench", generate_definition(sizes::EFFECT, 100).as_bytes(), &sheets)
	else {
		eprintln!("Warning: Could not parse generated definition for dump benchmark");
		return;
	};

	group.bench_function("to_string", |b| {
		b.iter(|| black_box(black_box(&descriptor).to_string()));
	});

	group.finish();
}

/// Benchmark one simulated second of playback at 60 steps per second
fn bench_playback(c: &mut Criterion) {
	let mut group = c.benchmark_group("animat_playback");
	let sheets = registry(sizes::CYCLE);
	let Ok(descriptor) = AnimatDescriptor::parse("bench", generate_definition(sizes::CYCLE, 100).as_bytes(), &sheets)
	else {
		eprintln!("Warning: Could not parse generated definition for playback benchmark");
		return;
	};
	let Ok(player) = FrameAnimation::from_descriptor(&descriptor) else {
		return;
	};
	let sprite = Sprite::new(descriptor.texture().clone(), descriptor.frames()[0]);
	let dt = 1.0 / 60.0;

	group.throughput(Throughput::Elements(60));
	group.bench_function("frame_player", |b| {
		b.iter(|| {
			let mut player = player.clone();
			for _ in 0..60 {
				player.advance(black_box(dt));
			}
			black_box(player.current_index())
		});
	});

	let bounce = ComposedRubberAnimation::new([
		RubberAnimation::new(sprite.clone(), 0.0, 0.5, 0.25),
		RubberAnimation::new(sprite.clone(), 0.5, -0.25, 0.25),
		RubberAnimation::new(sprite.clone(), -0.25, 0.0, 0.25),
	]);
	let texbox = RectF::new(0.0, 0.0, 32.0, 32.0);

	group.bench_function("composed_rubber", |b| {
		b.iter(|| {
			let mut bounce = bounce.clone();
			let mut last = texbox;
			for _ in 0..60 {
				bounce.advance(black_box(dt));
				last = bounce.dest_rect(Vec2f::new(16.0, 16.0), texbox);
			}
			black_box(last)
		});
	});

	let squash = SquashAnimation::new(sprite, 0.5);
	group.bench_function("squash", |b| {
		b.iter(|| {
			let mut squash = squash.clone();
			for _ in 0..60 {
				squash.advance(black_box(dt));
			}
			black_box(squash.dest_rect(Vec2f::new(16.0, 16.0), texbox))
		});
	});

	group.finish();
}

criterion_group!(benches, bench_parse, bench_text_view, bench_dump, bench_playback);

criterion_main!(benches);
