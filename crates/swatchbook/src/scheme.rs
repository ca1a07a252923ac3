//! Deriving color schemes from a base color.

use serde::{Serialize, Serializer};

use crate::color::{Hsl, Rgb};
use crate::error::SchemeTypeError;
use crate::Float;

/// A kind of color scheme.
///
/// Schemes derive from the base color's HSL coordinates by rotating the hue
/// or, for monochromatic schemes, by adjusting lightness and saturation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SchemeType {
    /// The opposite hue.
    Complementary,
    /// Two hues at a third of the color wheel.
    Triadic,
    /// The two neighboring hues 30° apart.
    Analogous,
    /// The two neighbors of the opposite hue.
    SplitComplementary,
    /// Three hues at quarters of the color wheel.
    Tetradic,
    /// A lighter, a darker, and a more saturated color.
    Monochromatic,
}

impl SchemeType {
    /// Get an iterator over all scheme types.
    pub fn all() -> impl Iterator<Item = SchemeType> {
        use SchemeType::*;

        [
            Complementary,
            Triadic,
            Analogous,
            SplitComplementary,
            Tetradic,
            Monochromatic,
        ]
        .into_iter()
    }

    /// Get this scheme type's name.
    pub const fn name(&self) -> &'static str {
        use SchemeType::*;

        match *self {
            Complementary => "complementary",
            Triadic => "triadic",
            Analogous => "analogous",
            SplitComplementary => "split-complementary",
            Tetradic => "tetradic",
            Monochromatic => "monochromatic",
        }
    }

    fn steps(&self) -> &'static [(Step, SchemeRole)] {
        use SchemeRole::*;
        use Step::*;

        match *self {
            Self::Complementary => &[(Rotate(180.0), Complementary)],
            Self::Triadic => &[(Rotate(120.0), Triadic1), (Rotate(240.0), Triadic2)],
            Self::Analogous => &[(Rotate(-30.0), AnalogousLeft), (Rotate(30.0), AnalogousRight)],
            Self::SplitComplementary => &[
                (Rotate(150.0), SplitComplementary1),
                (Rotate(210.0), SplitComplementary2),
            ],
            Self::Tetradic => &[
                (Rotate(90.0), Tetradic1),
                (Rotate(180.0), Tetradic2),
                (Rotate(270.0), Tetradic3),
            ],
            Self::Monochromatic => &[
                (Lighten(20.0), Lighter),
                (Lighten(-20.0), Darker),
                (Saturate(20.0), Saturated),
            ],
        }
    }

    /// Get the number of colors in this scheme.
    pub fn arity(&self) -> usize {
        self.steps().len()
    }

    /// Derive this scheme from the base color.
    ///
    /// The result does not include the base color itself.
    ///
    /// ```
    /// # use swatchbook::{Rgb, SchemeType};
    /// let scheme = SchemeType::Complementary.generate(Rgb::new(255, 0, 0));
    /// assert_eq!(scheme.len(), 1);
    /// assert_eq!(scheme[0].color().to_string(), "#00FFFF");
    /// assert_eq!(scheme[0].role().name(), "complementary_color");
    /// ```
    pub fn generate(&self, base: Rgb) -> Vec<SchemeColor> {
        let [h, s, l] = base.to_hsl_coordinates();

        self.steps()
            .iter()
            .map(|(step, role)| {
                let [h, s, l] = step.apply(h, s, l);
                SchemeColor {
                    color: Rgb::from_hsl(h, s, l),
                    hsl: Hsl::from_coordinates(h, s, l),
                    role: *role,
                }
            })
            .collect()
    }
}

impl std::str::FromStr for SchemeType {
    type Err = SchemeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .find(|t| t.name() == name)
            .ok_or_else(|| SchemeTypeError::new(s))
    }
}

impl std::fmt::Display for SchemeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for SchemeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A single adjustment of HSL coordinates.
#[derive(Copy, Clone, Debug)]
enum Step {
    Rotate(Float),
    Lighten(Float),
    Saturate(Float),
}

impl Step {
    fn apply(&self, h: Float, s: Float, l: Float) -> [Float; 3] {
        match *self {
            Self::Rotate(degrees) => [(h + degrees).rem_euclid(360.0), s, l],
            Self::Lighten(delta) => [h, s, (l + delta).clamp(0.0, 100.0)],
            Self::Saturate(delta) => [h, (s + delta).clamp(0.0, 100.0), l],
        }
    }
}

// ====================================================================================================================

/// The role of a derived color within its scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SchemeRole {
    Complementary,
    Triadic1,
    Triadic2,
    AnalogousLeft,
    AnalogousRight,
    SplitComplementary1,
    SplitComplementary2,
    Tetradic1,
    Tetradic2,
    Tetradic3,
    Lighter,
    Darker,
    Saturated,
}

impl SchemeRole {
    /// Get this role's name, e.g., `triadic_color_1`.
    pub const fn name(&self) -> &'static str {
        use SchemeRole::*;

        match *self {
            Complementary => "complementary_color",
            Triadic1 => "triadic_color_1",
            Triadic2 => "triadic_color_2",
            AnalogousLeft => "analogous_color_left",
            AnalogousRight => "analogous_color_right",
            SplitComplementary1 => "split_complementary_color_1",
            SplitComplementary2 => "split_complementary_color_2",
            Tetradic1 => "tetradic_color_1",
            Tetradic2 => "tetradic_color_2",
            Tetradic3 => "tetradic_color_3",
            Lighter => "lighter_color",
            Darker => "darker_color",
            Saturated => "saturated_color",
        }
    }
}

impl Serialize for SchemeRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

fn serialize_hex<S: Serializer>(color: &Rgb, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(color)
}

/// A derived color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SchemeColor {
    #[serde(rename = "hex", serialize_with = "serialize_hex")]
    color: Rgb,
    hsl: Hsl,
    role: SchemeRole,
}

impl SchemeColor {
    /// Get the derived color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Get the derived color's rounded HSL coordinates.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Get the derived color's role within its scheme.
    pub fn role(&self) -> SchemeRole {
        self.role
    }
}

/// Derive the named scheme from the base color.
///
/// Scheme names are `complementary`, `triadic`, `analogous`,
/// `split-complementary`, `tetradic`, and `monochromatic`.
pub fn generate_scheme(base: Rgb, scheme: &str) -> Result<Vec<SchemeColor>, SchemeTypeError> {
    Ok(scheme.parse::<SchemeType>()?.generate(base))
}

#[cfg(test)]
mod test {
    use super::{generate_scheme, SchemeRole, SchemeType};
    use crate::color::{Hsl, Rgb};
    use crate::error::SchemeTypeError;

    fn hexes(base: Rgb, scheme: SchemeType) -> Vec<String> {
        scheme
            .generate(base)
            .iter()
            .map(|c| c.color().to_string())
            .collect()
    }

    #[test]
    fn test_scheme_types() -> Result<(), SchemeTypeError> {
        assert_eq!("Split_Complementary".parse::<SchemeType>()?, SchemeType::SplitComplementary);
        assert_eq!(
            "pentadic".parse::<SchemeType>(),
            Err(SchemeTypeError::new("pentadic"))
        );

        let arities: Vec<usize> = SchemeType::all().map(|t| t.arity()).collect();
        assert_eq!(arities, vec![1, 2, 2, 2, 3, 3]);
        Ok(())
    }

    #[test]
    fn test_rotations() {
        let red = Rgb::new(255, 0, 0);

        assert_eq!(hexes(red, SchemeType::Complementary), vec!["#00FFFF"]);
        assert_eq!(hexes(red, SchemeType::Triadic), vec!["#00FF00", "#0000FF"]);
        assert_eq!(hexes(red, SchemeType::Analogous), vec!["#FF0080", "#FF8000"]);
        assert_eq!(
            hexes(red, SchemeType::SplitComplementary),
            vec!["#00FF80", "#0080FF"]
        );
        assert_eq!(
            hexes(red, SchemeType::Tetradic),
            vec!["#80FF00", "#00FFFF", "#8000FF"]
        );

        let roles: Vec<_> = SchemeType::Tetradic
            .generate(red)
            .iter()
            .map(|c| c.role())
            .collect();
        assert_eq!(
            roles,
            vec![SchemeRole::Tetradic1, SchemeRole::Tetradic2, SchemeRole::Tetradic3]
        );
    }

    #[test]
    fn test_monochromatic() {
        let scheme = SchemeType::Monochromatic.generate(Rgb::new(0x80, 0x40, 0x40));
        let hsl: Vec<Hsl> = scheme.iter().map(|c| c.hsl()).collect();
        assert_eq!(
            hsl,
            vec![Hsl::new(0, 33, 58), Hsl::new(0, 33, 18), Hsl::new(0, 53, 38)]
        );

        // Clamped at the extremes
        let white = SchemeType::Monochromatic.generate(Rgb::new(255, 255, 255));
        assert_eq!(white[0].color(), Rgb::new(255, 255, 255));
        assert_eq!(white[1].color(), Rgb::new(204, 204, 204));
        assert_eq!(white[2].hsl(), Hsl::new(0, 20, 100));
    }

    #[test]
    fn test_generate_scheme() {
        let scheme = generate_scheme(Rgb::new(0, 0, 255), "complementary");
        assert_eq!(
            scheme.map(|s| s[0].color()),
            Ok(Rgb::new(255, 255, 0))
        );
        assert_eq!(
            generate_scheme(Rgb::new(0, 0, 255), "clashing").map(|s| s.len()),
            Err(SchemeTypeError::new("clashing"))
        );

        let serialized = serde_json::to_string(&SchemeType::Triadic.generate(Rgb::new(255, 0, 0))[0]);
        assert_eq!(
            serialized.ok().as_deref(),
            Some(r##"{"hex":"#00FF00","hsl":{"h":120,"s":100,"l":50},"role":"triadic_color_1"}"##)
        );
    }
}
