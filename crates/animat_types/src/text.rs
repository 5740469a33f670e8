//! Borrowed byte views for the line-oriented text formats.
//!
//! [`TextView`] never owns its bytes. Every view derived from another one
//! (by trimming or chopping) is a sub-range of the same root buffer, which is
//! what lets a diagnostic recover the byte offset of any token by comparing
//! it against the root view.

use std::{borrow::Cow, fmt};

/// Returns `true` for the bytes C's `isspace` accepts in the "C" locale.
#[inline]
fn is_space(byte: u8) -> bool {
	matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Unsigned integer types that [`TextView::parse_unsigned_integer`] can produce.
pub trait UnsignedInteger: Copy {
	/// The additive identity.
	const ZERO: Self;

	/// Returns `self * 10 + digit`, or `None` on overflow.
	fn push_digit(self, digit: u8) -> Option<Self>;
}

macro_rules! impl_unsigned_integer {
	($($ty:ty),* $(,)?) => {
		$(
			impl UnsignedInteger for $ty {
				const ZERO: Self = 0;

				#[inline]
				fn push_digit(self, digit: u8) -> Option<Self> {
					self.checked_mul(10)?.checked_add(Self::from(digit))
				}
			}
		)*
	};
}

impl_unsigned_integer!(u8, u16, u32, u64, u128, usize);

/// Immutable, non-owning view over a byte buffer.
///
/// # Examples
///
/// ```
/// use animat_types::text::TextView;
///
/// let mut view = TextView::from("a,b,c");
/// assert_eq!(view.chop_by_delim(b','), "a");
/// assert_eq!(view, "b,c");
///
/// assert_eq!(TextView::from("  hello  ").trim(), "hello");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextView<'a> {
	data: &'a [u8],
}

impl<'a> TextView<'a> {
	/// Creates a view over `data`.
	#[inline]
	pub const fn new(data: &'a [u8]) -> Self {
		Self {
			data,
		}
	}

	/// Returns the viewed bytes.
	#[inline]
	pub const fn as_bytes(&self) -> &'a [u8] {
		self.data
	}

	/// Number of bytes in the view.
	#[inline]
	pub const fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` when the view has no bytes left.
	#[inline]
	pub const fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Returns the view as text, replacing invalid UTF-8 sequences.
	pub fn to_str_lossy(&self) -> Cow<'a, str> {
		String::from_utf8_lossy(self.data)
	}

	/// Returns `true` if the view starts with `byte`.
	#[inline]
	pub fn starts_with(&self, byte: u8) -> bool {
		self.data.first() == Some(&byte)
	}

	/// Strips leading whitespace.
	pub fn trim_start(self) -> Self {
		let skip = self.data.iter().take_while(|&&b| is_space(b)).count();
		Self::new(&self.data[skip..])
	}

	/// Strips trailing whitespace.
	pub fn trim_end(self) -> Self {
		let keep = self.data.len() - self.data.iter().rev().take_while(|&&b| is_space(b)).count();
		Self::new(&self.data[..keep])
	}

	/// Strips leading and trailing whitespace.
	pub fn trim(self) -> Self {
		self.trim_start().trim_end()
	}

	/// Advances the view by `n` bytes, saturating at its length.
	pub fn chop(&mut self, n: usize) {
		let n = n.min(self.data.len());
		self.data = &self.data[n..];
	}

	/// Splits off everything before the first `delim`.
	///
	/// The receiver is advanced past the delimiter. Without a delimiter the
	/// whole remainder is returned and the receiver becomes an empty view
	/// positioned at the end of the old one.
	pub fn chop_by_delim(&mut self, delim: u8) -> Self {
		match self.data.iter().position(|&b| b == delim) {
			Some(index) => {
				let (head, tail) = self.data.split_at(index);
				self.data = &tail[1..];
				Self::new(head)
			}
			None => {
				let head = self.data;
				self.data = &head[head.len()..];
				Self::new(head)
			}
		}
	}

	/// Consumes leading ASCII digits and returns their value.
	///
	/// Returns `None` without consuming anything when the view is empty, when
	/// the first byte is not a digit, or when the value overflows `T`. Signs
	/// are not accepted.
	pub fn parse_unsigned_integer<T: UnsignedInteger>(&mut self) -> Option<T> {
		let digits = self.data.iter().take_while(|b| b.is_ascii_digit()).count();
		if digits == 0 {
			return None;
		}

		let mut number = T::ZERO;
		for &byte in &self.data[..digits] {
			number = number.push_digit(byte - b'0')?;
		}

		self.chop(digits);
		Some(number)
	}

	/// Byte offset of this view's start inside `root`.
	///
	/// Returns `None` if the view is not a sub-range of `root`.
	pub fn offset_in(&self, root: TextView<'_>) -> Option<usize> {
		let root_start = root.data.as_ptr().addr();
		let start = self.data.as_ptr().addr();
		let end = start.checked_add(self.data.len())?;

		(start >= root_start && end <= root_start + root.data.len()).then(|| start - root_start)
	}
}

impl<'a> From<&'a str> for TextView<'a> {
	fn from(value: &'a str) -> Self {
		Self::new(value.as_bytes())
	}
}

impl<'a> From<&'a [u8]> for TextView<'a> {
	fn from(value: &'a [u8]) -> Self {
		Self::new(value)
	}
}

impl PartialEq<str> for TextView<'_> {
	fn eq(&self, other: &str) -> bool {
		self.data == other.as_bytes()
	}
}

impl PartialEq<&str> for TextView<'_> {
	fn eq(&self, other: &&str) -> bool {
		self.data == other.as_bytes()
	}
}

impl fmt::Display for TextView<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_str_lossy())
	}
}

impl fmt::Debug for TextView<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TextView({:?})", self.to_str_lossy())
	}
}
