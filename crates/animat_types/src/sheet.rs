//! Registry of loaded spritesheets.

use std::{collections::HashMap, sync::Arc};

use log::{debug, warn};

use crate::sprite::{Texture, TextureHandle};

/// Maps spritesheet names to texture handles.
///
/// Populate it once at startup, then hand it to the animation loader by
/// reference. Lookups never mutate the registry.
///
/// # Examples
///
/// ```
/// use animat_types::sheet::SpritesheetRegistry;
///
/// let mut sheets = SpritesheetRegistry::new();
/// sheets.register("./assets/sprites/walking-12px-zoom.png", 192, 16);
///
/// let texture = sheets.resolve("./assets/sprites/walking-12px-zoom.png").unwrap();
/// assert_eq!(texture.width(), 192);
/// assert!(sheets.resolve("missing.png").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpritesheetRegistry {
	sheets: HashMap<String, TextureHandle>,
}

impl SpritesheetRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a sheet of the given size and returns its handle.
	pub fn register(&mut self, name: impl Into<String>, width: u32, height: u32) -> TextureHandle {
		let texture = Arc::new(Texture::new(name, width, height));
		self.insert(Arc::clone(&texture));
		texture
	}

	/// Registers an existing handle under its own name.
	///
	/// A handle already registered under the same name is replaced.
	pub fn insert(&mut self, texture: TextureHandle) {
		debug!("Registering spritesheet `{}` ({}×{})", texture.name(), texture.width(), texture.height());
		if let Some(previous) = self.sheets.insert(texture.name().to_owned(), texture) {
			warn!("Spritesheet `{}` registered twice, replacing the previous handle", previous.name());
		}
	}

	/// Looks up a sheet by name.
	pub fn resolve(&self, name: &str) -> Option<TextureHandle> {
		self.sheets.get(name).cloned()
	}

	/// Number of registered sheets.
	pub fn len(&self) -> usize {
		self.sheets.len()
	}

	/// Returns `true` if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.sheets.is_empty()
	}

	/// Registered names, sorted.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.sheets.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}
}
