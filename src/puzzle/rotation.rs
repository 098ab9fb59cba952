use serde::{Deserialize, Serialize};
use std::fmt;

use crate::puzzle::cubie::{Cube, GridPos, Sticker};
use crate::puzzle::geometry::Axis;

/// A turn of one slice by a number of quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub axis: Axis,
    pub layer: u8,
    pub quarter_turns: u8,
}

impl Move {
    pub fn new(axis: Axis, layer: u8, quarter_turns: u8) -> Self {
        assert!(layer < 3, "layer {layer} is outside the cube");
        assert!(quarter_turns < 4, "{quarter_turns} quarter turns is not reduced mod 4");
        Self {
            axis,
            layer,
            quarter_turns,
        }
    }

    pub fn inverse(self) -> Self {
        Self {
            quarter_turns: (4 - self.quarter_turns) % 4,
            ..self
        }
    }

    pub fn is_identity(self) -> bool {
        self.quarter_turns == 0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}[{}]x{}", self.axis, self.layer, self.quarter_turns)
    }
}

/// The nine positions of a slice, laid out so that one quarter turn sends
/// the stickers at `[j][2 - i]` to `[i][j]`.
///
/// The column axis runs opposite to the other two relative to the spatial
/// frame, so its rows are reversed.
pub fn slice_grid(axis: Axis, layer: u8) -> [[GridPos; 3]; 3] {
    std::array::from_fn(|i| {
        std::array::from_fn(|j| {
            let (i, j) = (i as u8, j as u8);
            match axis {
                Axis::Depth => GridPos::new(layer, i, j),
                Axis::Column => GridPos::new(i, layer, 2 - j),
                Axis::Row => GridPos::new(i, j, layer),
            }
        })
    })
}

/// Turns the slice of `cube` at `layer` along `axis` by `quarter_turns`
/// quarter turns. Panics on an out-of-range layer or turn count.
pub fn rotate_slice(cube: &mut Cube, axis: Axis, layer: u8, quarter_turns: u8) {
    assert!(layer < 3, "layer {layer} is outside the cube");
    assert!(quarter_turns < 4, "{quarter_turns} quarter turns is not reduced mod 4");

    let grid = slice_grid(axis, layer);
    for _ in 0..quarter_turns {
        // Snapshot every relabeled sticker set before writing any of them.
        let mut turned: [[Vec<Sticker>; 3]; 3] = grid.map(|line| {
            line.map(|pos| {
                cube[pos]
                    .stickers
                    .iter()
                    .map(|sticker| sticker.turned(axis))
                    .collect()
            })
        });
        for (i, line) in grid.iter().enumerate() {
            for (j, &pos) in line.iter().enumerate() {
                cube[pos].stickers = std::mem::take(&mut turned[j][2 - i]);
            }
        }
    }
}

impl Cube {
    pub fn apply(&mut self, mv: Move) {
        rotate_slice(self, mv.axis, mv.layer, mv.quarter_turns);
    }
}
