//! Line-oriented parser for animation definitions.
//!
//! Each non-blank, non-comment line is split at the first `=` into a key and a
//! value. The key is split at `.` into a primary key and, for `frames`, an
//! index and a rectangle field. Every rejection is reported at the byte where
//! the offending token starts.

use log::{debug, trace};

use crate::{
	file::AnimatError,
	geometry::Rect,
	sheet::SpritesheetRegistry,
	sprite::TextureHandle,
	text::{TextView, UnsignedInteger},
};

use super::{
	constants, descriptor::AnimatDescriptor, diagnostic::Diagnostic, parse_config::ParseConfig,
};

/// Frame rectangle filled in one `frames.<i>.<field>` line at a time.
///
/// Fields are stored in [`constants::FRAME_FIELDS`] order.
#[derive(Debug, Clone, Copy, Default)]
struct PartialRect {
	fields: [Option<u32>; 4],
}

impl PartialRect {
	/// Returns the finished rectangle, or the name of the first unset field.
	fn complete(&self, fill_missing: bool) -> Result<Rect, &'static str> {
		let mut values = [0u32; 4];
		for (slot, field) in self.fields.iter().enumerate() {
			match field {
				Some(value) => values[slot] = *value,
				None if fill_missing => {}
				None => return Err(constants::FRAME_FIELDS[slot]),
			}
		}
		let [x, y, w, h] = values;
		Ok(Rect::new(x, y, w, h))
	}
}

/// Parses a value that must consist of digits only.
fn parse_number<T: UnsignedInteger>(mut view: TextView<'_>) -> Option<T> {
	let number = view.parse_unsigned_integer()?;
	view.is_empty().then_some(number)
}

pub(super) struct Parser<'a> {
	label: &'a str,
	source: TextView<'a>,
	registry: &'a SpritesheetRegistry,
	config: ParseConfig,
	texture: Option<TextureHandle>,
	duration_ms: Option<u32>,
	frames: Option<Vec<PartialRect>>,
}

impl<'a> Parser<'a> {
	pub(super) fn new(
		label: &'a str,
		source: TextView<'a>,
		registry: &'a SpritesheetRegistry,
		config: ParseConfig,
	) -> Self {
		Self {
			label,
			source,
			registry,
			config,
			texture: None,
			duration_ms: None,
			frames: None,
		}
	}

	pub(super) fn parse(mut self) -> Result<AnimatDescriptor, AnimatError> {
		let mut input = self.source;
		while !input.is_empty() {
			let line = input.chop_by_delim(b'\n').trim();
			if line.is_empty() || line.starts_with(constants::COMMENT_PREFIX) {
				continue;
			}
			self.parse_line(line)?;
		}
		self.finish()
	}

	fn parse_line(&mut self, line: TextView<'a>) -> Result<(), AnimatError> {
		let mut value = line;
		let mut key = value.chop_by_delim(constants::KEY_VALUE_DELIM).trim();
		let value = value.trim();

		if key.is_empty() {
			return Err(self.error(key, "missing key before `=`"));
		}
		if key.as_bytes().ends_with(&[constants::KEY_PATH_DELIM]) {
			let mut dot = key;
			dot.chop(key.len() - 1);
			return Err(self.error(dot, "missing key component after `.`"));
		}

		let primary = key.chop_by_delim(constants::KEY_PATH_DELIM).trim();
		trace!("{}: `{}` = `{}`", self.label, primary, value);

		if primary == constants::KEY_COUNT {
			self.expect_no_subkey(key)?;
			self.parse_count(primary, value)
		} else if primary == constants::KEY_SPRITE {
			self.expect_no_subkey(key)?;
			self.parse_sprite(primary, value)
		} else if primary == constants::KEY_DURATION {
			self.expect_no_subkey(key)?;
			self.parse_duration(primary, value)
		} else if primary == constants::KEY_FRAMES {
			self.parse_frame_field(primary, key, value)
		} else {
			Err(self.error(primary, format!("unknown key `{primary}`")))
		}
	}

	fn expect_no_subkey(&self, rest: TextView<'a>) -> Result<(), AnimatError> {
		if rest.is_empty() {
			Ok(())
		} else {
			Err(self.error(rest, format!("unknown subkey `{}`", rest.trim())))
		}
	}

	fn parse_count(&mut self, key: TextView<'a>, value: TextView<'a>) -> Result<(), AnimatError> {
		// The frame table is sized once; a second `count` would reallocate it.
		if self.frames.is_some() {
			return Err(self.error(key, "`count` provided twice"));
		}

		let count: usize =
			parse_number(value).ok_or_else(|| self.error(value, "`count` is not a number"))?;
		if count > self.config.max_frame_count {
			return Err(self.error(
				value,
				format!("`count` exceeds the limit of {} frames", self.config.max_frame_count),
			));
		}

		self.frames = Some(vec![PartialRect::default(); count]);
		Ok(())
	}

	fn parse_sprite(&mut self, key: TextView<'a>, value: TextView<'a>) -> Result<(), AnimatError> {
		if self.texture.is_some() && !self.config.allow_redefinition {
			return Err(self.error(key, "`sprite` provided twice"));
		}

		let name = value.to_str_lossy();
		let Some(texture) = self.registry.resolve(&name) else {
			let diagnostic = self.diagnostic(
				value,
				format!("unknown spritesheet `{name}`, it has to be registered before loading animations"),
			);
			return Err(AnimatError::UnknownSpritesheet {
				name: name.into_owned(),
				diagnostic: Box::new(diagnostic),
			});
		};

		self.texture = Some(texture);
		Ok(())
	}

	fn parse_duration(&mut self, key: TextView<'a>, value: TextView<'a>) -> Result<(), AnimatError> {
		if self.duration_ms.is_some() && !self.config.allow_redefinition {
			return Err(self.error(key, "`duration` provided twice"));
		}

		let duration = parse_number(value).ok_or_else(|| self.error(value, "`duration` is not a number"))?;
		self.duration_ms = Some(duration);
		Ok(())
	}

	fn parse_frame_field(
		&mut self,
		key: TextView<'a>,
		mut rest: TextView<'a>,
		value: TextView<'a>,
	) -> Result<(), AnimatError> {
		let index_view = rest.chop_by_delim(constants::KEY_PATH_DELIM).trim();
		let index: usize =
			parse_number(index_view).ok_or_else(|| self.error(index_view, "frame index is not a number"))?;

		let Some(count) = self.frames.as_ref().map(Vec::len) else {
			return Err(self.error(key, "`count` has to be declared before any `frames` key"));
		};
		if self.texture.is_none() {
			return Err(self.error(key, "`sprite` has to be declared before any `frames` key"));
		}
		if index >= count {
			return Err(self.error(index_view, "frame index is bigger than the `count`"));
		}

		let field = rest.chop_by_delim(constants::KEY_PATH_DELIM).trim();
		if !rest.is_empty() {
			return Err(self.error(rest, format!("unknown subkey `{}`", rest.trim())));
		}
		if field.is_empty() {
			return Err(self.error(field, "missing frame field, expected one of `x`, `y`, `w`, `h`"));
		}
		let Some(slot) = constants::FRAME_FIELDS.iter().position(|name| field == *name) else {
			return Err(self.error(field, format!("unknown subkey `{field}`")));
		};

		let number = parse_number(value).ok_or_else(|| self.error(value, "value is not a number"))?;

		let already_set = self.frames.as_ref().is_some_and(|frames| frames[index].fields[slot].is_some());
		if already_set && !self.config.allow_redefinition {
			return Err(self.error(key, format!("`frames.{index}.{field}` provided twice")));
		}
		if let Some(frames) = self.frames.as_mut() {
			frames[index].fields[slot] = Some(number);
		}
		Ok(())
	}

	fn finish(self) -> Result<AnimatDescriptor, AnimatError> {
		let end = self.end_of_source();
		let fill_missing = !self.config.require_complete_frames;

		let Some(texture) = self.texture.clone() else {
			return Err(self.error(end, "`sprite` is not provided"));
		};
		let frames = match &self.frames {
			Some(frames) => frames.as_slice(),
			None if fill_missing => &[],
			None => return Err(self.error(end, "`count` is not provided")),
		};
		let duration_ms = match self.duration_ms {
			Some(duration) => duration,
			None if fill_missing => 0,
			None => return Err(self.error(end, "`duration` is not provided")),
		};

		let rects = frames
			.iter()
			.enumerate()
			.map(|(index, frame)| {
				frame
					.complete(fill_missing)
					.map_err(|field| self.error(end, format!("frame {index} is missing `{field}`")))
			})
			.collect::<Result<Vec<_>, _>>()?;

		debug!(
			"Parsed animation `{}`: {} frames from `{}`, {} ms per frame",
			self.label,
			rects.len(),
			texture.name(),
			duration_ms
		);

		Ok(AnimatDescriptor::from_parts(texture, duration_ms, rects))
	}

	fn end_of_source(&self) -> TextView<'a> {
		let mut end = self.source;
		end.chop(end.len());
		end
	}

	fn diagnostic(&self, at: TextView<'_>, message: impl Into<String>) -> Diagnostic {
		Diagnostic::new(self.label, self.source, at, message)
	}

	fn error(&self, at: TextView<'_>, message: impl Into<String>) -> AnimatError {
		AnimatError::Parse(Box::new(self.diagnostic(at, message)))
	}
}
