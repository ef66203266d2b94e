//! Segment encoding table
//!
//! The display is common-anode, so a segment is lit when its bit is
//! **0**. Bit layout, most significant first:
//!
//! ```text
//!   bit:  7  6  5  4  3  2  1  0
//!   seg:  a  b  c  d  e  f  g  dp
//!
//!    aaa
//!   f   b
//!    ggg
//!   e   c
//!    ddd  dp
//! ```
//!
//! The shift register receives the byte LSB first, so `dp` is clocked
//! out first and `a` last.

/// One of the eight LED segments of a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    /// Decimal point
    Dp,
}

impl Segment {
    /// All segments in bit order (a first)
    pub const ALL: [Segment; 8] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
        Segment::Dp,
    ];

    /// Bit of this segment within a [`SegmentMask`]
    pub const fn bit(self) -> u8 {
        match self {
            Segment::A => 1 << 7,
            Segment::B => 1 << 6,
            Segment::C => 1 << 5,
            Segment::D => 1 << 4,
            Segment::E => 1 << 3,
            Segment::F => 1 << 2,
            Segment::G => 1 << 1,
            Segment::Dp => 1,
        }
    }
}

/// Segment bitmap for one digit (active-low)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentMask(u8);

impl SegmentMask {
    /// All segments off
    pub const BLANK: SegmentMask = SegmentMask(0xFF);

    /// Wrap a raw active-low bitmap
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Build a mask with exactly the given segments lit
    pub const fn from_lit(segments: &[Segment]) -> Self {
        let mut bits = 0xFF;
        let mut i = 0;
        while i < segments.len() {
            bits &= !segments[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Raw active-low bitmap, as shifted into the register
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if `segment` is lit
    pub const fn is_lit(self, segment: Segment) -> bool {
        self.0 & segment.bit() == 0
    }

    /// Number of lit segments
    pub const fn lit_count(self) -> u32 {
        (!self.0).count_ones()
    }

    /// Check if nothing is lit
    pub const fn is_blank(self) -> bool {
        self.0 == Self::BLANK.0
    }
}

impl Default for SegmentMask {
    fn default() -> Self {
        Self::BLANK
    }
}

/// A displayable character and its bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentCharacter {
    pub character: char,
    pub mask: SegmentMask,
}

impl SegmentCharacter {
    const fn new(character: char, bits: u8) -> Self {
        Self {
            character,
            mask: SegmentMask::from_bits(bits),
        }
    }
}

/// Every character the display can show
///
/// `d` is rendered as a degree symbol (a, b, f, g lit) and `P` doubles as
/// the percent sign in the humidity suffix.
pub const GLYPHS: [SegmentCharacter; 16] = [
    SegmentCharacter::new('0', 0b0000_0011),
    SegmentCharacter::new('1', 0b1001_1111),
    SegmentCharacter::new('2', 0b0010_0101),
    SegmentCharacter::new('3', 0b0000_1101),
    SegmentCharacter::new('4', 0b1001_1001),
    SegmentCharacter::new('5', 0b0100_1001),
    SegmentCharacter::new('6', 0b0100_0001),
    SegmentCharacter::new('7', 0b0001_1111),
    SegmentCharacter::new('8', 0b0000_0001),
    SegmentCharacter::new('9', 0b0000_1001),
    SegmentCharacter::new('C', 0b0110_0011),
    SegmentCharacter::new('P', 0b0011_0001),
    SegmentCharacter::new('E', 0b0110_0001),
    SegmentCharacter::new('d', 0b0011_1001),
    SegmentCharacter::new('r', 0b1111_0101),
    // Minus sign for sub-zero temperatures
    SegmentCharacter::new('-', 0b1111_1101),
];

/// Look up the bitmap for `character`
///
/// Returns `None` if the character has no glyph.
pub fn try_lookup(character: char) -> Option<SegmentMask> {
    GLYPHS
        .iter()
        .find(|glyph| glyph.character == character)
        .map(|glyph| glyph.mask)
}

/// Look up the bitmap for `character`
///
/// Characters without a glyph (including space) render blank.
pub fn lookup(character: char) -> SegmentMask {
    try_lookup(character).unwrap_or(SegmentMask::BLANK)
}
