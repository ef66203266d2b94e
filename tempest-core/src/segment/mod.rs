//! 7-segment encoding
//!
//! Glyph table, character lookup and the fixed-width strings the
//! display driver renders.

pub mod glyph;
pub mod text;

pub use glyph::{lookup, try_lookup, Segment, SegmentCharacter, SegmentMask, GLYPHS};
pub use text::{DigitPosition, DisplayString, TextError, DIGIT_COUNT};
