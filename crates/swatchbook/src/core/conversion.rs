use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the unit-range RGB coordinates to 24-bit representation.
///
/// Coordinates outside `0..=1` are clamped first, so the result always is a
/// valid 24-bit color. Each coordinate is rounded to the nearest integer.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    #[inline]
    fn convert(value: Float) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    let [r, g, b] = *coordinates;
    [convert(r), convert(g), convert(b)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert unit-range RGB coordinates to HSL.
///
/// The result has hue in degrees `0..360`, saturation and lightness in
/// percent `0..=100`. For achromatic colors, i.e., colors whose largest and
/// smallest channel are the same, hue and saturation are zero. The result is
/// *not* rounded.
pub(crate) fn rgb_to_hsl(coordinates: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *coordinates;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, lightness * 100.0];
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    // The red branch wraps negative hues into the top sextant.
    let sextant = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [sextant * 60.0, saturation * 100.0, lightness * 100.0]
}

/// Convert HSL coordinates to unit-range RGB.
///
/// Hue may have any magnitude and is reduced modulo 360 first. Saturation and
/// lightness are percentages and clamped to `0..=100`. The conversion uses
/// chroma `c`, the intermediate `x`, and the lightness offset `m` over six 60º
/// hue sectors.
pub(crate) fn hsl_to_rgb(coordinates: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *coordinates;
    let h = h.rem_euclid(360.0);
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 as Float).mul_add(l, -1.0).abs()) * s;
    let sector = h / 60.0;
    let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let [r, g, b] = match sector as u8 {
        0 => [c, x, 0.0],
        1 => [x, c, 0.0],
        2 => [0.0, c, x],
        3 => [0.0, x, c],
        4 => [x, 0.0, c],
        _ => [c, 0.0, x],
    };

    [r + m, g + m, b + m]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Convert coordinates from gamma-corrected sRGB to linear sRGB.
pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/oklab.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

/// Convert coordinates for sRGB to Oklab. This is a three-hop conversion
/// through linear sRGB and XYZ.
pub(crate) fn srgb_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let linear = rgb_to_linear_rgb(value);
    let xyz = multiply(&LINEAR_SRGB_TO_XYZ, &linear);
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, &xyz);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/adapt.js

/// The D65 reference white in XYZ, from its xy chromaticity `(0.3127,
/// 0.3290)`. The rows of [`LINEAR_SRGB_TO_XYZ`] sum to the same values.
const D65_WHITE: [Float; 3] = [
    0.3127 / 0.3290,
    1.0,
    (1.0 - 0.3127 - 0.3290) / 0.3290,
];

/// Convert coordinates for sRGB to CIE L*a*b* relative to D65. This is a
/// three-hop conversion through linear sRGB and XYZ.
pub(crate) fn srgb_to_lab(value: &[Float; 3]) -> [Float; 3] {
    const EPSILON: Float = 216.0 / 24389.0;
    const KAPPA: Float = 24389.0 / 27.0;

    #[inline]
    fn compand(value: Float) -> Float {
        if value > EPSILON {
            value.cbrt()
        } else {
            KAPPA.mul_add(value, 16.0) / 116.0
        }
    }

    let linear = rgb_to_linear_rgb(value);
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, &linear);
    let fx = compand(x / D65_WHITE[0]);
    let fy = compand(y / D65_WHITE[1]);
    let fz = compand(z / D65_WHITE[2]);

    [
        fy.mul_add(116.0, -16.0),
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ]
}

/// Convert unit-range RGB coordinates to CMYK percentages.
///
/// Pure black has no meaningful cyan, magenta, or yellow and maps to `[0, 0,
/// 0, 100]`.
pub(crate) fn rgb_to_cmyk(value: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = *value;
    let white = r.max(g).max(b);
    if white == 0.0 {
        return [0.0, 0.0, 0.0, 100.0];
    }

    let k = 1.0 - white;
    [
        (white - r) / white * 100.0,
        (white - g) / white * 100.0,
        (white - b) / white * 100.0,
        k * 100.0,
    ]
}

// ====================================================================================================================
