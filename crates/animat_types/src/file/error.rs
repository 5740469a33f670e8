//! Error types for animation files and playback construction.

use std::path::PathBuf;

use thiserror::Error;

use super::animat::Diagnostic;

/// Errors raised while loading animation definitions or building players.
#[derive(Debug, Error)]
pub enum AnimatError {
	/// The definition text is malformed
	#[error("{0}")]
	Parse(Box<Diagnostic>),

	/// The definition names a spritesheet that is not registered
	#[error("{diagnostic}")]
	UnknownSpritesheet {
		/// Name given by the `sprite` key
		name: String,
		/// Report pointing at the offending value
		diagnostic: Box<Diagnostic>,
	},

	/// A frame animation needs at least one frame
	#[error("Frame animation needs at least one frame")]
	EmptyAnimation,

	/// Frame duration is negative or NaN
	#[error("Invalid frame duration {0}, expected a non-negative number of seconds")]
	InvalidFrameDuration(f32),

	/// Reading or writing a definition file failed
	#[error("Could not access `{}`: {source}", path.display())]
	Io {
		/// File that was accessed
		path: PathBuf,
		/// Underlying error
		#[source]
		source: std::io::Error,
	},
}

impl AnimatError {
	/// Returns the source diagnostic for parse-time errors.
	pub fn diagnostic(&self) -> Option<&Diagnostic> {
		match self {
			Self::Parse(diagnostic) => Some(diagnostic),
			Self::UnknownSpritesheet {
				diagnostic,
				..
			} => Some(diagnostic),
			Self::EmptyAnimation | Self::InvalidFrameDuration(_) | Self::Io { .. } => None,
		}
	}

	pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}
