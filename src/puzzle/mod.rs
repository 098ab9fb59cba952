pub mod cubie;
pub mod geometry;
pub mod rotation;
pub mod scramble;

pub use cubie::{Cube, Cubie, FaceColor, GridPos, Sticker};
pub use geometry::{Axis, Direction};
pub use rotation::{rotate_slice, Move};
pub use scramble::{is_solved, scramble};
