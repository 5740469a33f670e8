//! Source-excerpt reports for malformed definition files.

use std::{fmt, io};

use crate::text::TextView;

use super::constants::CONTEXT_LINES;

/// Line-precise description of a parse failure.
///
/// Rendered as:
///
/// ```text
/// walking.txt:7: frame index is bigger than the `count`
/// frames.5.x = 1
///        ^
/// frames.5.y = 2
/// ```
///
/// The caret line is indented by the column of the offending byte and is
/// followed by up to three lines of trailing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	label: String,
	message: String,
	offset: usize,
	line_number: usize,
	column: usize,
	line: String,
	context: Vec<String>,
}

impl Diagnostic {
	/// Builds a report for the position where `rest` starts inside `source`.
	///
	/// `rest` should be a view derived from `source`; a foreign view is
	/// reported at the end of the source.
	pub fn new(
		label: impl Into<String>,
		source: TextView<'_>,
		rest: TextView<'_>,
		message: impl Into<String>,
	) -> Self {
		let offset = rest.offset_in(source).unwrap_or(source.len());
		Self::at_offset(label, source, offset, message)
	}

	/// Builds a report for a byte offset into `source`.
	pub fn at_offset(
		label: impl Into<String>,
		source: TextView<'_>,
		offset: usize,
		message: impl Into<String>,
	) -> Self {
		let offset = offset.min(source.len());
		let mut input = source;
		let mut remaining = offset;
		let mut line_number = 1;
		let mut found = None;

		while !input.is_empty() {
			let line = input.chop_by_delim(b'\n');
			if remaining <= line.len() {
				found = Some(line);
				break;
			}
			remaining -= line.len() + 1;
			line_number += 1;
		}

		// Past the final newline there is no line left to show.
		let (line, column) = match found {
			Some(line) => (line.to_str_lossy().into_owned(), remaining),
			None => (String::new(), 0),
		};

		let mut context = Vec::with_capacity(CONTEXT_LINES);
		while context.len() < CONTEXT_LINES && !input.is_empty() {
			context.push(input.chop_by_delim(b'\n').to_str_lossy().into_owned());
		}

		Self {
			label: label.into(),
			message: message.into(),
			offset,
			line_number,
			column,
			line,
			context,
		}
	}

	/// Label of the source, usually its file path.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Human-readable description of the problem.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// Byte offset of the offending position in the source.
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// 1-based line number.
	pub fn line_number(&self) -> usize {
		self.line_number
	}

	/// 0-based byte column inside the line.
	pub fn column(&self) -> usize {
		self.column
	}

	/// The offending line, verbatim.
	pub fn line(&self) -> &str {
		&self.line
	}

	/// Lines following the offending one.
	pub fn context(&self) -> &[String] {
		&self.context
	}

	/// Writes the report followed by a newline.
	pub fn report<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
		writeln!(writer, "{self}")
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}:{}: {}", self.label, self.line_number, self.message)?;
		writeln!(f, "{}", self.line)?;
		write!(f, "{:width$}^", "", width = self.column)?;
		for line in &self.context {
			write!(f, "\n{line}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SOURCE: &str = "count = 2\nsprite = a\nduration = x\nframes.0.x = 1\nframes.0.y = 2\nframes.0.w = 3\nframes.0.h = 4\n";

	#[test]
	fn test_reports_line_and_column() {
		let diagnostic = Diagnostic::at_offset("anim.txt", SOURCE.into(), 32, "`duration` is not a number");

		assert_eq!(diagnostic.line_number(), 3);
		assert_eq!(diagnostic.column(), 11);
		assert_eq!(diagnostic.line(), "duration = x");
		assert_eq!(diagnostic.context(), ["frames.0.x = 1", "frames.0.y = 2", "frames.0.w = 3"]);
		assert_eq!(
			diagnostic.to_string(),
			"anim.txt:3: `duration` is not a number\n\
			 duration = x\n           ^\n\
			 frames.0.x = 1\nframes.0.y = 2\nframes.0.w = 3"
		);
	}

	#[test]
	fn test_from_rest_view() {
		let source = TextView::from(SOURCE);
		let mut rest = source;
		rest.chop_by_delim(b'\n');
		let diagnostic = Diagnostic::new("anim.txt", source, rest, "here");

		assert_eq!(diagnostic.line_number(), 2);
		assert_eq!(diagnostic.column(), 0);
		assert_eq!(diagnostic.offset(), 10);
	}

	#[test]
	fn test_position_on_newline_belongs_to_its_line() {
		let diagnostic = Diagnostic::at_offset("anim.txt", SOURCE.into(), 9, "end of line");
		assert_eq!(diagnostic.line_number(), 1);
		assert_eq!(diagnostic.column(), 9);
		assert_eq!(diagnostic.line(), "count = 2");
	}

	#[test]
	fn test_position_at_end_of_source() {
		let diagnostic = Diagnostic::at_offset("anim.txt", SOURCE.into(), SOURCE.len(), "missing");
		assert_eq!(diagnostic.line_number(), 8);
		assert_eq!(diagnostic.line(), "");
		assert_eq!(diagnostic.column(), 0);
		assert!(diagnostic.context().is_empty());
	}

	#[test]
	fn test_context_shorter_than_three_lines() {
		let diagnostic = Diagnostic::at_offset("a", "x\ny\nz".into(), 2, "msg");
		assert_eq!(diagnostic.line_number(), 2);
		assert_eq!(diagnostic.context(), ["z"]);
	}

	#[test]
	fn test_report_appends_newline() {
		let diagnostic = Diagnostic::at_offset("a", "x".into(), 0, "msg");
		let mut out = Vec::new();
		diagnostic.report(&mut out).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "a:1: msg\nx\n^\n");
	}
}
