#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `animat-rs` loads sprite-sheet animation definitions and drives the
//! playback state used by a game's renderer.
//!
pub use animat_internal::*;
