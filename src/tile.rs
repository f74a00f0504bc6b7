use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The number of [`Tile`] variants. 12 tiles from 4 colors and 3 variants.
pub const TILES_LEN: usize = Color::COLORS_LEN * Variant::VARIANTS_LEN;

/// The prefix of every tile identifier, as in `blop1_rouge`.
const IDENTIFIER_PREFIX: &str = "blop";

/// Describes a tile kind with a [`Color`] and a [`Variant`].
///
/// Ordered in catalog order, colors first and then variants, so collections of tiles sort
/// the same way the [tray](crate::Tray) displays them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tile {
    /// The color of the tile.
    pub color: Color,
    /// The variant of the tile.
    pub variant: Variant,
}

impl Tile {
    /// Creates a [`Tile`] from its color and variant.
    #[inline]
    pub const fn new(color: Color, variant: Variant) -> Tile {
        Tile { color, variant }
    }

    /// # Returns
    ///
    /// The path of the image displayed for this tile, e.g. `/blop1_rouge.png`.
    pub fn image_path(&self) -> String {
        format!("/{self}.png")
    }
}

/// # Returns
///
/// An array of all [`Tile`] variants in color then variant order, e.g. `blop1_rouge`,
/// `blop2_rouge`, `blop3_rouge`, `blop1_vert`, and so on.
#[inline]
pub fn tiles() -> [Tile; TILES_LEN] {
    let mut tiles = [Tile::new(Color::Red, Variant::One); TILES_LEN];
    for (index, (color, variant)) in Color::colors()
        .into_iter()
        .flat_map(|color| Variant::variants().map(|variant| (color, variant)))
        .enumerate()
    {
        tiles[index] = Tile::new(color, variant);
    }
    tiles
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{IDENTIFIER_PREFIX}{}_{}",
            self.variant.number(),
            self.color.name()
        )
    }
}

/// Describes the reason why a tile identifier could not be parsed.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum TileParseError {
    /// The identifier does not start with `blop`.
    #[error("tile identifier `{identifier}` does not start with `blop`")]
    MissingPrefix {
        /// The identifier being parsed.
        identifier: String,
    },
    /// The identifier has no `_` between its variant and its color.
    #[error("tile identifier `{identifier}` has no `_` separator")]
    MissingSeparator {
        /// The identifier being parsed.
        identifier: String,
    },
    /// The variant is not a number in `1..=3`.
    #[error("unknown tile variant `{variant}`")]
    UnknownVariant {
        /// The variant part of the identifier.
        variant: String,
    },
    /// The color is not one of the known color names.
    #[error("unknown tile color `{color}`")]
    UnknownColor {
        /// The color part of the identifier.
        color: String,
    },
}

impl FromStr for Tile {
    type Err = TileParseError;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        let Some(rest) = identifier.strip_prefix(IDENTIFIER_PREFIX) else {
            return Err(TileParseError::MissingPrefix {
                identifier: identifier.to_owned(),
            });
        };
        let Some((variant, color)) = rest.split_once('_') else {
            return Err(TileParseError::MissingSeparator {
                identifier: identifier.to_owned(),
            });
        };

        let variant = variant
            .parse::<u8>()
            .ok()
            .and_then(Variant::from_number)
            .ok_or_else(|| TileParseError::UnknownVariant {
                variant: variant.to_owned(),
            })?;
        let color = Color::from_name(color).ok_or_else(|| TileParseError::UnknownColor {
            color: color.to_owned(),
        })?;

        Ok(Tile::new(color, variant))
    }
}

impl Serialize for Tile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let identifier = String::deserialize(deserializer)?;
        identifier.parse().map_err(de::Error::custom)
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        Tile::new(rng.gen(), rng.gen())
    }
}

/// Describes the color on a [`Tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Color {
    /// `0`, named `rouge`.
    Red = 0,
    /// `1`, named `vert`.
    Green = 1,
    /// `2`, named `bleu`.
    Blue = 2,
    /// `3`, named `jaune`.
    Yellow = 3,
}

impl Color {
    /// The number of [`Color`] variants. 4 colors.
    pub const COLORS_LEN: usize = 4;

    /// # Returns
    ///
    /// An array of all [`Color`] variants in order.
    #[inline]
    pub fn colors() -> [Color; Color::COLORS_LEN] {
        [Color::Red, Color::Green, Color::Blue, Color::Yellow]
    }

    /// # Returns
    ///
    /// The name used for this color in tile identifiers.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "rouge",
            Color::Green => "vert",
            Color::Blue => "bleu",
            Color::Yellow => "jaune",
        }
    }

    /// # Returns
    ///
    /// The color with the given identifier name or `None` if no color has that name.
    pub fn from_name(name: &str) -> Option<Color> {
        Color::colors().into_iter().find(|color| color.name() == name)
    }
}

impl Distribution<Color> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let index = rng.gen_range(0..Color::COLORS_LEN);
        Color::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since colors cover all indexes \
                in range 0..Color::COLORS_LEN (0..{:?}).",
                index,
                Color::COLORS_LEN
            );
        })
    }
}

/// Describes the variant number on a [`Tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Variant {
    /// `0`, numbered `1`.
    One = 0,
    /// `1`, numbered `2`.
    Two = 1,
    /// `2`, numbered `3`.
    Three = 2,
}

impl Variant {
    /// The number of [`Variant`] variants. 3 variants.
    pub const VARIANTS_LEN: usize = 3;

    /// # Returns
    ///
    /// An array of all [`Variant`] variants in order.
    #[inline]
    pub fn variants() -> [Variant; Variant::VARIANTS_LEN] {
        [Variant::One, Variant::Two, Variant::Three]
    }

    /// # Returns
    ///
    /// The number used for this variant in tile identifiers, in `1..=3`.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// # Returns
    ///
    /// The variant with the given identifier number or `None` if it is not in `1..=3`.
    pub fn from_number(number: u8) -> Option<Variant> {
        number.checked_sub(1).and_then(Variant::from_u8)
    }
}

impl Distribution<Variant> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Variant {
        let index = rng.gen_range(0..Variant::VARIANTS_LEN);
        Variant::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since variants cover all indexes \
                in range 0..Variant::VARIANTS_LEN (0..{:?}).",
                index,
                Variant::VARIANTS_LEN
            );
        })
    }
}
