use cgmath::{vec3, Euler, Rad, Vector3};
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::fmt;

/// Axis of a slice, named after the grid index it holds fixed.
///
/// depth: +Y, column: +Z, row: +X
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Depth,
    Column,
    Row,
}

impl Axis {
    /// Unit vector along the positive spatial axis. A quarter turn about
    /// `axis` is a +90° rotation about this vector.
    pub fn to_vec(self) -> Vector3<f32> {
        match self {
            Axis::Depth => Vector3::unit_y(),
            Axis::Column => Vector3::unit_z(),
            Axis::Row => Vector3::unit_x(),
        }
    }

    /// The two directions fixed by a quarter turn about this axis.
    pub fn poles(self) -> [Direction; 2] {
        use Direction::*;

        match self {
            Axis::Depth => [Up, Down],
            Axis::Column => [Front, Back],
            Axis::Row => [Right, Left],
        }
    }
}

/// Outward normal of one face of the puzzle.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Direction {
    /// The slice axis this direction is normal to.
    pub fn axis(self) -> Axis {
        use Direction::*;

        match self {
            Up | Down => Axis::Depth,
            Left | Right => Axis::Row,
            Front | Back => Axis::Column,
        }
    }

    /// Grid index of the outer layer this direction faces.
    pub fn layer(self) -> u8 {
        use Direction::*;

        match self {
            Up | Right | Front => 2,
            Down | Left | Back => 0,
        }
    }

    pub fn opposite(self) -> Self {
        use Direction::*;

        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
            Front => Back,
            Back => Front,
        }
    }

    /// Unit normal in puzzle space.
    pub fn to_vec(self) -> Vector3<f32> {
        use Direction::*;

        match self {
            Up => vec3(0.0, 1.0, 0.0),
            Down => vec3(0.0, -1.0, 0.0),
            Left => vec3(-1.0, 0.0, 0.0),
            Right => vec3(1.0, 0.0, 0.0),
            Front => vec3(0.0, 0.0, 1.0),
            Back => vec3(0.0, 0.0, -1.0),
        }
    }

    /// Offset from a cubie's centre to the centre of its sticker on this face.
    pub fn offset(self) -> Vector3<f32> {
        self.to_vec() * 0.5
    }

    /// Rotation that lays a unit square in the XY plane onto this face.
    /// Only the view layer cares about this.
    pub fn sticker_rotation(self) -> Euler<Rad<f32>> {
        use Direction::*;

        match self {
            Up | Down => Euler::new(Rad(FRAC_PI_2), Rad(0.0), Rad(0.0)),
            Left | Right => Euler::new(Rad(0.0), Rad(FRAC_PI_2), Rad(0.0)),
            Front | Back => Euler::new(Rad(0.0), Rad(0.0), Rad(0.0)),
        }
    }

    /// Returns the direction that `self` is carried to by one quarter turn
    /// about `axis`.
    pub fn turn(self, axis: Axis) -> Self {
        use Direction::*;

        match (axis, self) {
            (Axis::Depth, Left) => Front,
            (Axis::Depth, Front) => Right,
            (Axis::Depth, Right) => Back,
            (Axis::Depth, Back) => Left,
            (Axis::Depth, Up | Down) => self,

            (Axis::Column, Up) => Left,
            (Axis::Column, Left) => Down,
            (Axis::Column, Down) => Right,
            (Axis::Column, Right) => Up,
            (Axis::Column, Front | Back) => self,

            (Axis::Row, Up) => Front,
            (Axis::Row, Front) => Down,
            (Axis::Row, Down) => Back,
            (Axis::Row, Back) => Up,
            (Axis::Row, Left | Right) => self,
        }
    }

    /// The two in-plane directions a drag on this face is compared against.
    pub fn drag_candidates(self) -> [Direction; 2] {
        use Direction::*;

        match self {
            Up => [Left, Front],
            Down => [Right, Back],
            Right => [Back, Up],
            Left => [Front, Down],
            Front => [Down, Right],
            Back => [Up, Left],
        }
    }

    pub fn name(self) -> &'static str {
        use Direction::*;

        match self {
            Up => "U",
            Down => "D",
            Left => "L",
            Right => "R",
            Front => "F",
            Back => "B",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub mod geometry_tests {
    use super::*;
    use crate::util::enum_iter;
    use cgmath::{InnerSpace, Matrix3};
    use itertools::Itertools;

    const EPSILON: f32 = 1e-5;

    fn poles_fixed() {
        for axis in enum_iter::<Axis>() {
            for pole in axis.poles() {
                assert_eq!(pole.axis(), axis, "{pole:?} is not a pole of {axis:?}");
                assert_eq!(pole.turn(axis), pole, "{pole:?} moved under {axis:?}");
            }
        }
    }

    fn turns_permutations() {
        for axis in enum_iter::<Axis>() {
            for pair in enum_iter::<Direction>().combinations(2) {
                assert!(
                    pair[0].turn(axis) != pair[1].turn(axis),
                    "{:?} and {:?} turn the same under {axis:?}",
                    pair[0],
                    pair[1],
                );
            }
        }
    }

    fn turns_have_order_four() {
        for axis in enum_iter::<Axis>() {
            for dir in enum_iter::<Direction>() {
                let mut cur = dir;
                for _ in 0..4 {
                    cur = cur.turn(axis);
                }
                assert_eq!(cur, dir, "four turns of {dir:?} about {axis:?}");
            }
        }
    }

    fn turn_matches_rotation() {
        for axis in enum_iter::<Axis>() {
            let mat = Matrix3::from_axis_angle(axis.to_vec(), Rad(FRAC_PI_2));
            for dir in enum_iter::<Direction>() {
                let abstract_turn = dir.turn(axis).to_vec();
                let concrete_turn = mat * dir.to_vec();
                assert!(
                    (abstract_turn - concrete_turn).magnitude() < EPSILON,
                    "turning {dir:?} about {axis:?} gives {:?} but the rotation gives \
                    {concrete_turn:?}",
                    dir.turn(axis),
                );
            }
        }
    }

    fn candidates_tangent() {
        for dir in enum_iter::<Direction>() {
            let [first, second] = dir.drag_candidates();
            for candidate in [first, second] {
                assert_ne!(candidate.axis(), dir.axis(), "{candidate:?} on face {dir:?}");
            }
            assert_ne!(first.axis(), second.axis(), "candidates of {dir:?}");
        }
    }

    fn layers_match_offsets() {
        for dir in enum_iter::<Direction>() {
            let component = dir.to_vec().dot(dir.axis().to_vec());
            assert_eq!(dir.layer() as f32, component + 1.0, "outer layer of {dir:?}");
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.opposite().axis(), dir.axis());
        }
    }

    pub fn validate_geometry() {
        poles_fixed();
        turns_permutations();
        turns_have_order_four();
        turn_matches_rotation();
        candidates_tangent();
        layers_match_offsets();
    }
}

#[cfg(test)]
mod tests {
    use super::geometry_tests::validate_geometry;
    use super::*;

    #[test]
    fn validate_cube_geometry() {
        validate_geometry()
    }

    #[test]
    fn drag_candidates_span_face() {
        use Direction::*;

        // Dragging along one candidate on the top face turns about the other.
        let [first, second] = Up.drag_candidates();
        assert_eq!((first, second), (Left, Front));
        assert_eq!(first.axis(), Axis::Row);
        assert_eq!(second.axis(), Axis::Column);
    }

    #[test]
    fn offsets_are_half_units() {
        assert_eq!(Direction::Up.offset(), vec3(0.0, 0.5, 0.0));
        assert_eq!(Direction::Back.offset(), vec3(0.0, 0.0, -0.5));
    }
}
