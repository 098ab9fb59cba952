use enum_map::{Enum, EnumMap};
use itertools::Itertools;
use rand::Rng;

use crate::puzzle::cubie::{Cube, FaceColor};
use crate::puzzle::geometry::{Axis, Direction};
use crate::puzzle::rotation::Move;

/// Whether every face shows a single color.
///
/// This only looks at sticker faces, so the orientation of the whole puzzle
/// in the view does not matter.
pub fn is_solved(cube: &Cube) -> bool {
    let mut faces: EnumMap<Direction, Vec<FaceColor>> = EnumMap::default();
    for sticker in cube.stickers() {
        faces[sticker.face].push(sticker.color);
    }
    faces.values().all(|colors| colors.iter().all_equal())
}

/// A uniformly random move, including the zero move.
pub fn random_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    Move::new(
        Axis::from_usize(rng.gen_range(0..Axis::LENGTH)),
        rng.gen_range(0..3),
        rng.gen_range(0..4),
    )
}

/// Applies batches of `min_turns` random moves until the cube is no longer
/// solved, and returns the number of batches applied.
pub fn scramble<R: Rng + ?Sized>(cube: &mut Cube, min_turns: usize, rng: &mut R) -> usize {
    assert!(min_turns >= 1, "a scramble needs at least one turn");

    let mut batches = 0;
    loop {
        for _ in 0..min_turns {
            cube.apply(random_move(rng));
        }
        batches += 1;
        if !is_solved(cube) {
            break;
        }
        log::debug!("scramble batch {batches} of {min_turns} turns left the cube solved, retrying");
    }
    batches
}
