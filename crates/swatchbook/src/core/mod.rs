mod contrast;
mod conversion;
mod string;

// contrast
pub(crate) use contrast::{to_brightness, to_contrast_text};

// conversion
pub(crate) use conversion::{from_24bit, hsl_to_rgb, rgb_to_hsl, to_24bit};

// string
pub use string::ColorFormat;
pub(crate) use string::{format, parse_hex};
