use super::conversion::{from_24bit, rgb_to_cmyk, rgb_to_hsl, srgb_to_lab, srgb_to_oklab};
use crate::error::ColorFormatError;
use crate::Float;

/// Parse a 24-bit color in hexadecimal format.
///
/// This function trims leading and trailing white space, accepts an optional
/// `#` prefix, and then requires exactly six hexadecimal digits in either
/// case. If successful, it returns the three coordinates as unsigned bytes.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * index + 2)
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// The textual formats a 24-bit color can be converted to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#RRGGBB` with uppercase digits.
    Hex,
    /// `rgb(r, g, b)` with integer coordinates.
    Rgb,
    /// `hsl(h, s%, l%)` with integer coordinates.
    Hsl,
    /// `cmyk(c%, m%, y%, k%)` with integer percentages.
    Cmyk,
    /// `lab(L a b)` for CIE L*a*b* relative to D65, with up to five digits
    /// past the decimal.
    Lab,
    /// `oklab(L a b)` with up to five digits past the decimal.
    Oklab,
}

impl std::str::FromStr for ColorFormat {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            "cmyk" => Ok(Self::Cmyk),
            "lab" => Ok(Self::Lab),
            "oklab" => Ok(Self::Oklab),
            _ => Err(ColorFormatError::UnknownFormat),
        }
    }
}

/// Write a floating point number with at most five digits past the decimal
/// and no trailing zeros.
fn write_compact(value: Float, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let factor = 100_000.0;
    let c = (value * factor).round() / factor;
    if c == c.trunc() {
        // Also turns -0 into 0
        f.write_fmt(format_args!("{:.0}", c.abs()))
    } else {
        f.write_fmt(format_args!("{}", c))
    }
}

/// Write the coordinates as space-separated arguments of a CSS-like function.
fn write_function(
    name: &str,
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str(name)?;
    f.write_str("(")?;
    for (index, coordinate) in coordinates.iter().enumerate() {
        write_compact(*coordinate, f)?;
        if index < 2 {
            f.write_str(" ")?;
        }
    }
    f.write_str(")")
}

/// Format the 24-bit color in the given format.
pub(crate) fn format(
    target: ColorFormat,
    rgb: &[u8; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b] = *rgb;

    match target {
        ColorFormat::Hex => f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", r, g, b)),
        ColorFormat::Rgb => f.write_fmt(format_args!("rgb({}, {}, {})", r, g, b)),
        ColorFormat::Hsl => {
            let [h, s, l] = rgb_to_hsl(&from_24bit(r, g, b));
            f.write_fmt(format_args!(
                "hsl({}, {}%, {}%)",
                h.round() % 360.0,
                s.round(),
                l.round()
            ))
        }
        ColorFormat::Cmyk => {
            let [c, m, y, k] = rgb_to_cmyk(&from_24bit(r, g, b));
            f.write_fmt(format_args!(
                "cmyk({}%, {}%, {}%, {}%)",
                c.round(),
                m.round(),
                y.round(),
                k.round()
            ))
        }
        ColorFormat::Lab => write_function("lab", &srgb_to_lab(&from_24bit(r, g, b)), f),
        ColorFormat::Oklab => write_function("oklab", &srgb_to_oklab(&from_24bit(r, g, b)), f),
    }
}

// ====================================================================================================================
