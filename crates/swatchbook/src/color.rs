//! 24-bit colors and their HSL coordinates.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

use crate::core::{
    format, from_24bit, hsl_to_rgb, parse_hex, rgb_to_hsl, to_24bit, to_brightness,
    to_contrast_text, ColorFormat,
};
use crate::error::ColorFormatError;
use crate::Float;

/// A 24-bit sRGB color.
///
/// Displaying an RGB color produces its canonical hexadecimal form, i.e., `#`
/// followed by six uppercase hexadecimal digits. Parsing accepts either case
/// and an optional `#`.
///
/// ```
/// # use swatchbook::Rgb;
/// let teal: Rgb = "#00808c".parse()?;
/// assert_eq!(teal.to_string(), "#00808C");
/// assert_eq!(teal.coordinates(), [0, 128, 140]);
/// # Ok::<(), swatchbook::error::ColorFormatError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new RGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new RGB color from unrounded HSL coordinates.
    ///
    /// The hue is reduced modulo 360. Saturation and lightness are
    /// percentages clamped to `0..=100`.
    pub fn from_hsl(hue: Float, saturation: Float, lightness: Float) -> Self {
        Self(to_24bit(&hsl_to_rgb(&[hue, saturation, lightness])))
    }

    /// Access this color's coordinates.
    pub const fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Convert this color to unrounded HSL coordinates.
    pub(crate) fn to_hsl_coordinates(self) -> [Float; 3] {
        let [r, g, b] = self.0;
        rgb_to_hsl(&from_24bit(r, g, b))
    }

    /// Convert this color to rounded HSL coordinates.
    pub fn to_hsl(&self) -> Hsl {
        let [h, s, l] = self.to_hsl_coordinates();
        Hsl::from_coordinates(h, s, l)
    }

    /// Compute this color's luma `0..=255`.
    pub fn brightness(&self) -> u8 {
        let [r, g, b] = self.0;
        to_brightness(r, g, b)
    }

    /// Determine whether black or white text is more legible on this color.
    pub fn contrast(&self) -> Rgb {
        let [r, g, b] = self.0;
        Self(to_contrast_text(&from_24bit(r, g, b)))
    }

    /// Format this color in the given format.
    pub fn to_string_as(&self, target: ColorFormat) -> String {
        struct Formatted(Rgb, ColorFormat);

        impl std::fmt::Display for Formatted {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                format(self.1, &self.0 .0, f)
            }
        }

        Formatted(*self, target).to_string()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(ColorFormat::Hex, &self.0, f)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let [r, g, b] = self.0;
        let mut state = serializer.serialize_struct("Rgb", 3)?;
        state.serialize_field("r", &r)?;
        state.serialize_field("g", &g)?;
        state.serialize_field("b", &b)?;
        state.end()
    }
}

// ====================================================================================================================

/// Rounded HSL coordinates.
///
/// The hue ranges `0..360` degrees, saturation and lightness range `0..=100`
/// percent. Deserialization rejects coordinates outside these ranges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HslRepr")]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
}

impl Hsl {
    /// Create new HSL coordinates.
    ///
    /// The hue is reduced modulo 360; saturation and lightness are capped at
    /// 100.
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: if s > 100 { 100 } else { s },
            l: if l > 100 { 100 } else { l },
        }
    }

    /// Access the hue in degrees `0..360`.
    pub const fn h(&self) -> u16 {
        self.h
    }

    /// Access the saturation in percent `0..=100`.
    pub const fn s(&self) -> u8 {
        self.s
    }

    /// Access the lightness in percent `0..=100`.
    pub const fn l(&self) -> u8 {
        self.l
    }

    /// Round unrounded HSL coordinates. A hue that rounds to 360 becomes 0.
    pub(crate) fn from_coordinates(h: Float, s: Float, l: Float) -> Self {
        Self {
            h: (h.rem_euclid(360.0).round() as u16) % 360,
            s: s.clamp(0.0, 100.0).round() as u8,
            l: l.clamp(0.0, 100.0).round() as u8,
        }
    }

    /// Convert these coordinates back to a 24-bit color.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_hsl(self.h as Float, self.s as Float, self.l as Float)
    }
}

#[derive(Deserialize)]
struct HslRepr {
    h: u16,
    s: u8,
    l: u8,
}

impl TryFrom<HslRepr> for Hsl {
    type Error = String;

    fn try_from(value: HslRepr) -> Result<Self, Self::Error> {
        let HslRepr { h, s, l } = value;
        if h >= 360 || s > 100 || l > 100 {
            Err(format!("hsl({}, {}%, {}%) is out of range", h, s, l))
        } else {
            Ok(Self { h, s, l })
        }
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("hsl({}, {}%, {}%)", self.h, self.s, self.l))
    }
}

// ====================================================================================================================

/// Convert the hexadecimal color to the given format.
///
/// ```
/// # use swatchbook::{convert_color, ColorFormat};
/// assert_eq!(convert_color("#ff0000", ColorFormat::Hsl)?, "hsl(0, 100%, 50%)");
/// assert_eq!(convert_color("00ff00", ColorFormat::Rgb)?, "rgb(0, 255, 0)");
/// # Ok::<(), swatchbook::error::ColorFormatError>(())
/// ```
pub fn convert_color(hex: &str, target: ColorFormat) -> Result<String, ColorFormatError> {
    let color: Rgb = hex.parse()?;
    Ok(color.to_string_as(target))
}
