//! Tile handles and the discrete color palette

use std::fmt;

/// Discrete tile color
///
/// Colors compare by identity only; there is no notion of "close" colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red tile
    Red,
    /// Green tile
    Green,
    /// Blue tile
    Blue,
    /// Yellow tile
    Yellow,
    /// Purple tile
    Purple,
    /// Orange tile
    Orange,
}

impl Color {
    /// Every color in palette order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
    ];

    /// Single-letter symbol used by the board text format
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Purple => 'P',
            Self::Orange => 'O',
        }
    }

    /// Parse a board symbol, ignoring case
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'Y' => Some(Self::Yellow),
            'P' => Some(Self::Purple),
            'O' => Some(Self::Orange),
            _ => None,
        }
    }

    /// RGBA value used when exporting boards as images
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Red => [220, 50, 47, 255],
            Self::Green => [133, 153, 0, 255],
            Self::Blue => [38, 139, 210, 255],
            Self::Yellow => [181, 137, 0, 255],
            Self::Purple => [108, 113, 196, 255],
            Self::Orange => [203, 75, 22, 255],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
        };
        f.write_str(name)
    }
}

/// Stable identifier of a tile instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A colored tile occupying one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Identity of this tile
    pub id: TileId,
    /// Color compared during matching
    pub color: Color,
}

impl Tile {
    /// Create a tile with the given id and color
    pub const fn new(id: u32, color: Color) -> Self {
        Self {
            id: TileId(id),
            color,
        }
    }
}
