// src/console/color.rs

//! VGA palette, attribute bytes and the 16-bit cell encoding
//!
//! Cell layout: `[background 4 bits][foreground 4 bits][character 8 bits]`

/// VGA color codes (4-bit color palette)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VgaColor {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

impl VgaColor {
    /// Map the low nibble of `value` to a palette entry.
    pub const fn from_nibble(value: u8) -> Self {
        match value & 0x0f {
            0 => Self::Black,
            1 => Self::Blue,
            2 => Self::Green,
            3 => Self::Cyan,
            4 => Self::Red,
            5 => Self::Magenta,
            6 => Self::Brown,
            7 => Self::LightGray,
            8 => Self::DarkGray,
            9 => Self::LightBlue,
            10 => Self::LightGreen,
            11 => Self::LightCyan,
            12 => Self::LightRed,
            13 => Self::Pink,
            14 => Self::Yellow,
            _ => Self::White,
        }
    }
}

/// Attribute byte combining foreground and background colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Create a new color code from foreground and background colors
    pub const fn new(fg: VgaColor, bg: VgaColor) -> Self {
        Self((bg as u8) << 4 | (fg as u8))
    }

    /// Wrap a raw attribute byte.
    pub const fn from_u8(raw: u8) -> Self {
        Self(raw)
    }

    /// Get the raw byte value
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    pub const fn foreground(self) -> VgaColor {
        VgaColor::from_nibble(self.0)
    }

    pub const fn background(self) -> VgaColor {
        VgaColor::from_nibble(self.0 >> 4)
    }

    /// Default color scheme (light gray on black)
    pub const fn normal() -> Self {
        Self::new(VgaColor::LightGray, VgaColor::Black)
    }

    /// Info color scheme (light cyan on black)
    pub const fn info() -> Self {
        Self::new(VgaColor::LightCyan, VgaColor::Black)
    }

    /// Success color scheme (light green on black)
    pub const fn success() -> Self {
        Self::new(VgaColor::LightGreen, VgaColor::Black)
    }

    /// Warning color scheme (yellow on black)
    pub const fn warning() -> Self {
        Self::new(VgaColor::Yellow, VgaColor::Black)
    }

    /// Error color scheme (light red on black)
    pub const fn error() -> Self {
        Self::new(VgaColor::LightRed, VgaColor::Black)
    }

    /// Panic color scheme (white on red)
    pub const fn panic() -> Self {
        Self::new(VgaColor::White, VgaColor::Red)
    }
}

impl From<VgaColor> for ColorCode {
    /// Foreground color on a black background.
    fn from(fg: VgaColor) -> Self {
        Self::new(fg, VgaColor::Black)
    }
}

impl From<u8> for ColorCode {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

/// One encoded character cell as stored in the display buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Cell(u16);

impl Cell {
    /// The pattern written by clear operations
    pub const BLANK: Self = Self::new(super::constants::CLEAR_CHAR, super::constants::CLEAR_COLOR);

    /// Encode `(color << 8) | character`.
    pub const fn new(character: u8, color: ColorCode) -> Self {
        Self((color.as_u8() as u16) << 8 | character as u16)
    }

    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn character(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub const fn color(self) -> ColorCode {
        ColorCode((self.0 >> 8) as u8)
    }
}
