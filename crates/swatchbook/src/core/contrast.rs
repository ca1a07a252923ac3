use super::conversion::{rgb_to_linear_rgb, LINEAR_SRGB_TO_XYZ};
use crate::Float;

/// The relative luminance above which black text is more legible than white
/// text.
const LUMINANCE_THRESHOLD: Float = 0.5;

/// Compute the luma of the given 24-bit color.
///
/// The result is `round(0.299·r + 0.587·g + 0.114·b)` and hence also ranges
/// `0..=255`. Integer weights keep the sum exact before the single rounding.
pub(crate) fn to_brightness(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    (weighted as Float / 1000.0).round() as u8
}

/// Compute the relative luminance, i.e., the Y in XYZ, for the given sRGB
/// coordinates.
pub(crate) fn to_luminance(coordinates: &[Float; 3]) -> Float {
    let [r, g, b] = rgb_to_linear_rgb(coordinates);
    let [c1, c2, c3] = LINEAR_SRGB_TO_XYZ[1];
    c1.mul_add(r, c2.mul_add(g, c3 * b))
}

/// Determine the text color for the given sRGB background: black for light
/// backgrounds and white for dark ones.
pub(crate) fn to_contrast_text(coordinates: &[Float; 3]) -> [u8; 3] {
    if to_luminance(coordinates) > LUMINANCE_THRESHOLD {
        [0, 0, 0]
    } else {
        [255, 255, 255]
    }
}
