//! Animation definition format constants.
//!
//! Key names of the `key = value` grammar and reporting limits.

/// Total number of frame slots
pub const KEY_COUNT: &str = "count";

/// Name of the spritesheet every frame is cut from
pub const KEY_SPRITE: &str = "sprite";

/// Milliseconds each frame stays on screen
pub const KEY_DURATION: &str = "duration";

/// Prefix of the per-frame `frames.<index>.<field>` keys
pub const KEY_FRAMES: &str = "frames";

/// Per-frame rectangle fields, in dump order
pub const FRAME_FIELDS: [&str; 4] = ["x", "y", "w", "h"];

/// Lines starting with this byte (after trimming) are ignored
pub const COMMENT_PREFIX: u8 = b'#';

/// Separates a key from its value
pub const KEY_VALUE_DELIM: u8 = b'=';

/// Separates the components of a dotted key
pub const KEY_PATH_DELIM: u8 = b'.';

/// Milliseconds per second, for the `duration` conversion
pub const MILLIS_PER_SECOND: f32 = 1000.0;

/// Lines of trailing context shown under a diagnostic
pub const CONTEXT_LINES: usize = 3;
