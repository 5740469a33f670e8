//! Animation definition utility.
//!
//! Provides four subcommands:
//! - `check`: parse definition files (or every matching file under a
//!   directory) and print a diagnostic for each malformed one.
//! - `dump`: print a definition in canonical form, or as JSON.
//! - `slice`: build a definition from a horizontal strip image.
//! - `play`: step a frame player and print every draw call it makes.
//!
//! Spritesheets are registered from `--sheet <IMAGE>` (under the image path as
//! written) and from a `--manifest <TOML>` file:
//!
//! ```toml
//! [[sheets]]
//! name = "./assets/sprites/walking-12px-zoom.png"
//! path = "assets/sprites/walking-12px-zoom.png"
//! ```

use std::{
	convert::Infallible,
	fs,
	path::{Path, PathBuf},
};

use animat_rs::prelude::*;
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info, warn};
use serde::Deserialize;
use walkdir::WalkDir;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = cli.common.preset.config();
	let sheets = load_sheets(&cli.common)?;

	match cli.command {
		Command::Check(opts) => run_check(opts, &sheets, &config),
		Command::Dump(opts) => run_dump(opts, &sheets, &config),
		Command::Slice(opts) => run_slice(opts),
		Command::Play(opts) => run_play(opts, &sheets, &config),
	}
}

#[derive(Parser)]
#[command(name = "animat_utils")]
#[command(author = "animat-rs project")]
#[command(version)]
#[command(about = "Check, dump and preview animation definition files", long_about = None)]
struct Cli {
	#[command(flatten)]
	common: CommonArgs,

	#[command(subcommand)]
	command: Command,
}

#[derive(Args)]
struct CommonArgs {
	/// Spritesheet image to register under its path
	#[arg(short, long = "sheet", value_name = "IMAGE", global = true)]
	sheets: Vec<PathBuf>,

	/// TOML manifest listing spritesheets to register
	#[arg(short, long, value_name = "TOML", global = true)]
	manifest: Option<PathBuf>,

	/// Parsing preset
	#[arg(long, value_enum, default_value_t = Preset::Default, global = true)]
	preset: Preset,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
	Default,
	Lenient,
	Strict,
}

impl Preset {
	fn config(self) -> ParseConfig {
		match self {
			Self::Default => ParseConfig::default(),
			Self::Lenient => ParseConfig::lenient(),
			Self::Strict => ParseConfig::strict(),
		}
	}
}

#[derive(Subcommand)]
enum Command {
	/// Parse definition files and report diagnostics
	Check(CheckArgs),
	/// Print a definition in canonical form
	Dump(DumpArgs),
	/// Build a definition from a horizontal strip image
	Slice(SliceArgs),
	/// Drive a frame player and print its draw calls
	Play(PlayArgs),
}

#[derive(Args)]
struct CheckArgs {
	/// Definition files or directories containing them
	#[arg(value_name = "PATH", required = true)]
	paths: Vec<PathBuf>,

	/// File extension of definitions inside directories
	#[arg(short, long, value_name = "EXT", default_value = "txt")]
	ext: String,

	/// Recurse into sub-directories while scanning
	#[arg(short, long, default_value_t = false)]
	recursive: bool,
}

#[derive(Args)]
struct DumpArgs {
	/// Definition file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Print JSON instead of the text format
	#[arg(long, default_value_t = false)]
	json: bool,

	/// Write to a file instead of stdout
	#[arg(short, long, value_name = "FILE")]
	output: Option<PathBuf>,
}

#[derive(Args)]
struct SliceArgs {
	/// Horizontal strip image
	#[arg(value_name = "IMAGE")]
	image: PathBuf,

	/// Number of frames in the strip
	#[arg(short, long, value_name = "COUNT")]
	count: u32,

	/// Milliseconds per frame
	#[arg(short, long, value_name = "MS", default_value_t = 100)]
	duration: u32,

	/// Spritesheet name written to `sprite` (defaults to the image path)
	#[arg(short, long, value_name = "NAME")]
	name: Option<String>,

	/// Write to a file instead of stdout
	#[arg(short, long, value_name = "FILE")]
	output: Option<PathBuf>,
}

#[derive(Args)]
struct PlayArgs {
	/// Definition file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Seconds per step
	#[arg(long, value_name = "SECONDS", default_value_t = 0.016)]
	dt: f32,

	/// Number of steps
	#[arg(short, long, value_name = "COUNT", default_value_t = 60)]
	steps: usize,
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
	#[serde(default)]
	sheets: Vec<ManifestSheet>,
}

#[derive(Debug, Deserialize)]
struct ManifestSheet {
	/// Registry name, defaults to `path`
	name: Option<String>,
	path: PathBuf,
}

fn read_manifest(path: &Path) -> Result<Manifest> {
	let settings = config::Config::builder()
		.add_source(config::File::from(path).format(config::FileFormat::Toml))
		.build()
		.with_context(|| format!("Failed to read manifest {}", path.display()))?;
	settings.try_deserialize().with_context(|| format!("Invalid manifest {}", path.display()))
}

fn register_image(sheets: &mut SpritesheetRegistry, name: String, path: &Path) -> Result<TextureHandle> {
	let (width, height) = image::image_dimensions(path)
		.with_context(|| format!("Failed to read image dimensions of {}", path.display()))?;
	debug!("{} is {}×{}", path.display(), width, height);
	Ok(sheets.register(name, width, height))
}

fn load_sheets(args: &CommonArgs) -> Result<SpritesheetRegistry> {
	let mut sheets = SpritesheetRegistry::new();

	if let Some(manifest_path) = &args.manifest {
		let manifest = read_manifest(manifest_path)?;
		let base = manifest_path.parent().unwrap_or(Path::new("."));
		for entry in manifest.sheets {
			let name = entry.name.unwrap_or_else(|| entry.path.display().to_string());
			register_image(&mut sheets, name, &base.join(&entry.path))?;
		}
	}

	for path in &args.sheets {
		register_image(&mut sheets, path.display().to_string(), path)?;
	}

	info!("Registered {} spritesheet(s)", sheets.len());
	Ok(sheets)
}

fn collect_definitions(args: &CheckArgs) -> Vec<PathBuf> {
	let mut files = Vec::new();
	for path in &args.paths {
		if !path.is_dir() {
			files.push(path.clone());
			continue;
		}

		let max_depth = if args.recursive { usize::MAX } else { 1 };
		for entry in WalkDir::new(path).max_depth(max_depth).into_iter().flatten() {
			let matches = entry.path().extension().and_then(|ext| ext.to_str()).is_some_and(|ext| ext == args.ext);
			if entry.file_type().is_file() && matches {
				files.push(entry.into_path());
			}
		}
	}
	files.sort();
	files
}

fn run_check(args: CheckArgs, sheets: &SpritesheetRegistry, config: &ParseConfig) -> Result<()> {
	let files = collect_definitions(&args);
	if files.is_empty() {
		println!("No definition files found");
		return Ok(());
	}

	let mut failures = 0usize;
	for path in &files {
		match AnimatDescriptor::open_with_config(path, sheets, config) {
			Ok(descriptor) => {
				println!(
					"✓ {} - {} frame(s) of {}, {} ms",
					path.display(),
					descriptor.frame_count(),
					descriptor.texture().name(),
					descriptor.duration_ms()
				);
			}
			Err(err) => {
				failures += 1;
				eprintln!("{err}");
			}
		}
	}

	println!("Checked {} file(s), {} failed", files.len(), failures);
	if failures > 0 {
		bail!("{failures} definition(s) failed to parse");
	}
	Ok(())
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
	match output {
		Some(path) => fs::write(path, text).with_context(|| format!("Failed to write {}", path.display())),
		None => {
			print!("{text}");
			Ok(())
		}
	}
}

fn run_dump(args: DumpArgs, sheets: &SpritesheetRegistry, config: &ParseConfig) -> Result<()> {
	let descriptor = AnimatDescriptor::open_with_config(&args.file, sheets, config)?;
	let text = if args.json {
		let mut json = serde_json::to_string_pretty(&descriptor)?;
		json.push('\n');
		json
	} else {
		descriptor.to_string()
	};
	write_output(args.output.as_deref(), &text)
}

fn run_slice(args: SliceArgs) -> Result<()> {
	if args.count == 0 {
		bail!("count must be greater than zero");
	}

	let mut sheets = SpritesheetRegistry::new();
	let name = args.name.unwrap_or_else(|| args.image.display().to_string());
	let texture = register_image(&mut sheets, name, &args.image)?;
	if texture.width() % args.count != 0 {
		warn!(
			"Image width {} is not a multiple of {}, the last {} column(s) are dropped",
			texture.width(),
			args.count,
			texture.width() % args.count
		);
	}

	let descriptor = AnimatDescriptor::from_horizontal_strip(texture, args.count, args.duration)?;
	write_output(args.output.as_deref(), &descriptor.to_string())
}

/// Renderer that prints every copy call.
struct PrintRenderer {
	step: usize,
	frame: usize,
}

impl Renderer for PrintRenderer {
	type Error = Infallible;

	fn copy(&mut self, texture: &Texture, src: Rect, dst: RectF, flip: Flip) -> Result<(), Self::Error> {
		println!(
			"step {:>4}: frame {:>3} {} {} -> ({:.1}, {:.1}, {:.1}×{:.1}) {:?}",
			self.step,
			self.frame,
			texture.name(),
			src,
			dst.x,
			dst.y,
			dst.w,
			dst.h,
			flip
		);
		Ok(())
	}
}

fn run_play(args: PlayArgs, sheets: &SpritesheetRegistry, config: &ParseConfig) -> Result<()> {
	if args.dt.is_nan() || args.dt < 0.0 {
		bail!("dt must be a non-negative number of seconds");
	}

	let descriptor = AnimatDescriptor::open_with_config(&args.file, sheets, config)?;
	let mut player = FrameAnimation::from_descriptor(&descriptor)?;
	let mut renderer = PrintRenderer {
		step: 0,
		frame: 0,
	};

	for step in 0..args.steps {
		player.advance(args.dt);
		renderer.step = step;
		renderer.frame = player.current_index();
		let Ok(()) = player.render_at(&mut renderer, Vec2f::default(), Flip::None);
	}

	Ok(())
}
