//! Fixed-width display strings

use core::fmt;
use core::str::FromStr;

use super::glyph::{lookup, SegmentMask};

/// Number of physical digits on the display
pub const DIGIT_COUNT: usize = 4;

/// Errors building a [`DisplayString`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextError {
    /// Text is not exactly (or, when padding, at most) 4 characters
    WrongLength(usize),
    /// Text contains a non-ASCII character
    NonAscii,
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::WrongLength(len) => {
                write!(f, "display text must fit {} digits, got {}", DIGIT_COUNT, len)
            }
            TextError::NonAscii => f.write_str("display text must be ASCII"),
        }
    }
}

/// Index of a physical digit line, 0 to 3
///
/// Digit `n` shows character `n` of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitPosition(u8);

impl DigitPosition {
    /// Scan order used by every frame
    pub const ALL: [DigitPosition; DIGIT_COUNT] = [
        DigitPosition(0),
        DigitPosition(1),
        DigitPosition(2),
        DigitPosition(3),
    ];

    /// Position from an index, `None` if out of range
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < DIGIT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Exactly four ASCII characters, one per digit
///
/// Characters are stored as written left to right, so position 0 holds
/// the first character.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayString([u8; DIGIT_COUNT]);

impl DisplayString {
    /// Shown when the sensor returns no number
    pub const SENSOR_FAULT: DisplayString = DisplayString(*b"Err0");

    /// Shown when a reading does not fit the four digits
    pub const OVERFLOW: DisplayString = DisplayString(*b"Err1");

    /// All digits dark
    pub const BLANK: DisplayString = DisplayString(*b"    ");

    /// Build from exactly four ASCII characters
    pub fn new(text: &str) -> Result<Self, TextError> {
        if !text.is_ascii() {
            return Err(TextError::NonAscii);
        }
        if text.len() != DIGIT_COUNT {
            return Err(TextError::WrongLength(text.len()));
        }
        Self::padded(text)
    }

    /// Build from at most four ASCII characters, left-justified and padded
    /// with spaces
    pub fn padded(text: &str) -> Result<Self, TextError> {
        if !text.is_ascii() {
            return Err(TextError::NonAscii);
        }
        let bytes = text.as_bytes();
        if bytes.len() > DIGIT_COUNT {
            return Err(TextError::WrongLength(bytes.len()));
        }

        let mut buf = [b' '; DIGIT_COUNT];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self(buf))
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored
        core::str::from_utf8(&self.0).unwrap_or("????")
    }

    pub fn as_bytes(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }

    /// Character shown at `position`
    pub fn char_at(&self, position: DigitPosition) -> char {
        char::from(self.0[position.index()])
    }

    /// Bitmap shown at `position`
    pub fn mask_at(&self, position: DigitPosition) -> SegmentMask {
        lookup(self.char_at(position))
    }

    /// Bitmaps for all four positions, in scan order
    pub fn masks(&self) -> [SegmentMask; DIGIT_COUNT] {
        DigitPosition::ALL.map(|position| self.mask_at(position))
    }

    /// Text with trailing padding removed
    pub fn trimmed(&self) -> &str {
        self.as_str().trim_end()
    }
}

impl FromStr for DisplayString {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for DisplayString {
    type Error = TextError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Debug for DisplayString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisplayString({:?})", self.as_str())
    }
}

impl fmt::Display for DisplayString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayString {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "\"{}\"", self.as_str());
    }
}
