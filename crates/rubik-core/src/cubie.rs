//! A single cubie and its stickers.

use crate::{Color, CubieKind, Facing, Position};

/// One of the 26 visible pieces of the cube.
///
/// A cubie stores the color shown in each of the six directions; directions
/// the cubie does not touch are `None`. Inside a [`Cube`](crate::Cube) the
/// populated directions always equal the facings of the cubie's position.
///
/// # Examples
///
/// ```
/// use rubik_core::{Color, Cubie, Facing, Position};
///
/// let cubie = Cubie::solved(Position::FRU);
/// assert_eq!(cubie.color(Facing::Up), Some(Color::Yellow));
/// assert_eq!(cubie.color(Facing::Down), None);
/// assert_eq!(cubie.color_facing(Color::Green), Some(Facing::Right));
/// assert!(cubie.has_colors(&[Color::Green, Color::Red, Color::Yellow]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cubie {
    stickers: [Option<Color>; 6],
}

impl Cubie {
    /// Creates a cubie with no stickers.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            stickers: [None; 6],
        }
    }

    /// Creates the cubie found at `position` on a solved cube.
    #[must_use]
    pub fn solved(position: Position) -> Self {
        let mut cubie = Self::empty();
        for facing in position.facings() {
            cubie.set_color(facing, Some(Color::on_solved(facing)));
        }
        cubie
    }

    /// Returns the color shown towards `facing`, if any.
    #[must_use]
    pub const fn color(&self, facing: Facing) -> Option<Color> {
        self.stickers[facing.index()]
    }

    pub(crate) const fn set_color(&mut self, facing: Facing, color: Option<Color>) {
        self.stickers[facing.index()] = color;
    }

    /// Iterates over `(facing, color)` for every sticker in canonical facing
    /// order.
    pub fn stickers(&self) -> impl Iterator<Item = (Facing, Color)> + '_ {
        Facing::ALL
            .into_iter()
            .filter_map(|facing| self.color(facing).map(|color| (facing, color)))
    }

    /// Returns the set of directions this cubie has stickers on.
    #[must_use]
    pub fn position(&self) -> Position {
        self.stickers().map(|(facing, _)| facing).collect()
    }

    /// Returns the kind of this cubie, judged by its sticker count.
    #[must_use]
    pub fn kind(&self) -> Option<CubieKind> {
        self.position().kind()
    }

    /// Returns the facing that shows `color`, or `None` if the cubie does not
    /// carry that color.
    ///
    /// When a malformed cubie carries the same color twice, the first facing in
    /// canonical order wins.
    #[must_use]
    pub fn color_facing(&self, color: Color) -> Option<Facing> {
        self.stickers()
            .find_map(|(facing, c)| (c == color).then_some(facing))
    }

    /// Returns `true` if any sticker of this cubie shows `color`.
    #[must_use]
    pub fn has_color(&self, color: Color) -> bool {
        self.color_facing(color).is_some()
    }

    /// Counts the stickers of each color, indexed by [`Color::index`].
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for (_, color) in self.stickers() {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Returns `true` if the cubie's colors are exactly `colors`, ignoring order.
    ///
    /// Duplicates count: a cubie showing white twice does not match `[White]`.
    #[must_use]
    pub fn has_colors(&self, colors: &[Color]) -> bool {
        let mut expected = [0; 6];
        for color in colors {
            expected[color.index()] += 1;
        }
        self.color_counts() == expected
    }
}
