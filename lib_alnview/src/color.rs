use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use crate::error::Error;


/// An 8-bit RGB triple, displayed as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(string.to_string());

        let digits = string.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel =
            |range| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());
        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }
}

/// Widens a 3-bit channel value (0–7) to 8 bits by repeating its bits.
const fn widen_channel(channel: u8) -> u8 {
    (channel << 5) | (channel << 2) | (channel >> 1)
}

/// Deterministic colour wheel over the letter indices 0–25 (`'A'`–`'Z'`).
///
/// Three bits per channel are extracted from different bit positions of the
/// letter index and widened to a full 8-bit channel, spreading neighbouring
/// letters across the wheel.
pub fn letter_wheel_color(letter_index: u8) -> Rgb {
    debug_assert!(letter_index < 26);

    let index = letter_index;
    let red = ((index >> 4) & 1) | (((index >> 1) & 1) << 2);
    let green = (((index >> 3) & 1) << 1) | (((index >> 2) & 1) << 2);
    let blue = (((index >> 2) & 1) << 1) | ((index & 1) << 2);

    Rgb::new(widen_channel(red), widen_channel(green), widen_channel(blue))
}

/// Display configuration of a grid: colour, dot compression, and per-character
/// colour overrides.
///
/// The custom colour map is an immutable value that is replaced wholesale; a
/// policy never aliases a map shared with its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPolicy {
    pub use_color: bool,
    pub use_dots: bool,
    custom_colors: BTreeMap<char, Rgb>,
}

impl ColorPolicy {
    pub fn new(use_color: bool, use_dots: bool) -> Self {
        Self {
            use_color,
            use_dots,
            custom_colors: Default::default(),
        }
    }

    /// Replaces the whole custom colour table.
    pub fn with_custom_colors(mut self, custom_colors: BTreeMap<char, Rgb>) -> Self {
        self.custom_colors = custom_colors;
        self
    }

    pub fn custom_colors(&self) -> &BTreeMap<char, Rgb> {
        &self.custom_colors
    }

    /// The colour of a character: a custom override if present, otherwise the
    /// letter wheel for `'A'`–`'Z'`. Case-sensitive; characters without a
    /// colour render plain.
    pub fn color_of(&self, character: char) -> Option<Rgb> {
        if let Some(&color) = self.custom_colors.get(&character) {
            return Some(color);
        }

        character
            .is_ascii_uppercase()
            .then(|| letter_wheel_color(character as u8 - b'A'))
    }
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self::new(false, true)
    }
}
