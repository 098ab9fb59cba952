use cgmath::{vec3, Vector3};
use enum_map::Enum;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::puzzle::geometry::{Axis, Direction};

/// One of the six sticker colors. Colors are compared for face uniformity;
/// how they look is up to the preferences.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceColor {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sticker {
    pub color: FaceColor,
    /// The face of the whole puzzle this sticker currently sits on.
    pub face: Direction,
}

impl Sticker {
    pub fn new(color: FaceColor, face: Direction) -> Self {
        Self { color, face }
    }

    pub fn turned(self, axis: Axis) -> Self {
        Self {
            color: self.color,
            face: self.face.turn(axis),
        }
    }
}

/// A slot in the 3x3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub depth: u8,
    pub column: u8,
    pub row: u8,
}

impl GridPos {
    pub fn new(depth: u8, column: u8, row: u8) -> Self {
        let pos = Self { depth, column, row };
        assert!(pos.in_range(), "grid position {pos:?} is outside the cube");
        pos
    }

    /// All 27 positions, depth-major.
    pub fn all() -> impl Iterator<Item = GridPos> {
        iproduct!(0..3, 0..3, 0..3).map(|(d, c, r)| GridPos::new(d, c, r))
    }

    pub fn get(self, axis: Axis) -> u8 {
        match axis {
            Axis::Depth => self.depth,
            Axis::Column => self.column,
            Axis::Row => self.row,
        }
    }

    /// Centre of the cubie in puzzle space, with the core at the origin.
    pub fn to_vec(self) -> Vector3<f32> {
        vec3(
            self.row as f32 - 1.0,
            self.depth as f32 - 1.0,
            self.column as f32 - 1.0,
        )
    }

    fn in_range(self) -> bool {
        self.depth < 3 && self.column < 3 && self.row < 3
    }

    fn index(self) -> usize {
        assert!(self.in_range(), "grid position {self:?} is outside the cube");
        self.depth as usize * 9 + self.column as usize * 3 + self.row as usize
    }
}

/// A single sub-cube. Stickers move between cubies; the cubie itself never
/// leaves its slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cubie {
    position: GridPos,
    pub stickers: Vec<Sticker>,
    pub visible: bool,
}

impl Cubie {
    fn make_solved(position: GridPos) -> Self {
        let GridPos { depth, column, row } = position;
        let mut stickers = vec![];
        match depth {
            0 => stickers.push(Sticker::new(FaceColor::White, Direction::Down)),
            2 => stickers.push(Sticker::new(FaceColor::Yellow, Direction::Up)),
            _ => (),
        }
        match column {
            0 => stickers.push(Sticker::new(FaceColor::Green, Direction::Back)),
            2 => stickers.push(Sticker::new(FaceColor::Blue, Direction::Front)),
            _ => (),
        }
        match row {
            0 => stickers.push(Sticker::new(FaceColor::Orange, Direction::Left)),
            2 => stickers.push(Sticker::new(FaceColor::Red, Direction::Right)),
            _ => (),
        }

        Self {
            position,
            stickers,
            visible: true,
        }
    }

    pub fn position(&self) -> GridPos {
        self.position
    }

    pub fn sticker_on(&self, face: Direction) -> Option<&Sticker> {
        self.stickers.iter().find(|sticker| sticker.face == face)
    }
}

/// Arena of 27 cubies addressed by grid position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    cubies: Vec<Cubie>,
}

impl Cube {
    pub fn make_solved() -> Self {
        Self {
            cubies: GridPos::all().map(Cubie::make_solved).collect(),
        }
    }

    pub fn cubies(&self) -> impl Iterator<Item = &Cubie> {
        self.cubies.iter()
    }

    pub fn stickers(&self) -> impl Iterator<Item = &Sticker> {
        self.cubies.iter().flat_map(|cubie| cubie.stickers.iter())
    }

    pub fn set_all_visible(&mut self, visible: bool) {
        for cubie in &mut self.cubies {
            cubie.visible = visible;
        }
    }

    /// Whether two cubes carry the same stickers in the same slots,
    /// ignoring visibility.
    pub fn same_layout(&self, other: &Cube) -> bool {
        self.cubies
            .iter()
            .zip(&other.cubies)
            .all(|(a, b)| a.stickers == b.stickers)
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::make_solved()
    }
}

impl Index<GridPos> for Cube {
    type Output = Cubie;

    fn index(&self, pos: GridPos) -> &Cubie {
        &self.cubies[pos.index()]
    }
}

impl IndexMut<GridPos> for Cube {
    fn index_mut(&mut self, pos: GridPos) -> &mut Cubie {
        &mut self.cubies[pos.index()]
    }
}
