//! Turning a pointer drag on a sticker into a slice twist.
//!
//! A drag starts on one sticker. Each pointer move compares the drag vector
//! against the on-screen directions of the two edges of that sticker's face.
//! Dragging along one of them turns the slice about the other. On release
//! the angle snaps to the nearest quarter turn.

use cgmath::{EuclideanSpace, InnerSpace, Point2, Point3, Quaternion, Rad, Rotation3, Transform};
use cgmath::{Vector2, Zero};
use std::f32::consts::FRAC_PI_2;

use crate::puzzle::{Axis, Direction, GridPos, Move};
use crate::view::SceneView;

/// Screen units of drag per radian of twist.
pub const DEFAULT_DRAG_UNITS_PER_RADIAN: f32 = 70.0;

/// Where a drag started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    pub cubie: GridPos,
    /// Face of the sticker under the pointer.
    pub face: Direction,
    pub start: Point2<f32>,
}

/// A slice twist in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Twist {
    /// The direction the slice turns about. Its axis is `axis`.
    pub pivot: Direction,
    pub axis: Axis,
    pub layer: u8,
    /// Uncommitted angle in radians, positive about `axis.to_vec()`.
    pub angle: f32,
}

impl Twist {
    /// Rotation to draw the lifted slice with.
    pub fn rotation(&self) -> Quaternion<f32> {
        Quaternion::from_axis_angle(self.axis.to_vec(), Rad(self.angle))
    }

    /// The angle rounded to the nearest quarter turn, halves rounding up,
    /// then reduced to `0..4`.
    pub fn quarter_turns(&self) -> u8 {
        let turns = (self.angle / FRAC_PI_2 + 0.5).floor() as i64;
        turns.rem_euclid(4) as u8
    }

    pub fn to_move(&self) -> Move {
        Move::new(self.axis, self.layer, self.quarter_turns())
    }

    /// Whether the cubie at `pos` turns with the slice.
    pub fn lifts(&self, pos: GridPos) -> bool {
        pos.get(self.axis) == self.layer
    }
}

/// Picks the twist a drag from `grab.start` to `current` asks for, or `None`
/// if the grabbed cubie has not been placed in the view yet.
pub fn resolve_twist(
    grab: &Grab,
    current: Point2<f32>,
    view: &impl SceneView,
    units_per_radian: f32,
) -> Option<Twist> {
    let transform = view.cubie_transform(grab.cubie)?;
    let centre = view.project(transform.transform_point(Point3::origin()));
    let screen_direction = |dir: Direction| {
        let tip = view.project(transform.transform_point(Point3::from_vec(dir.offset())));
        let v: Vector2<f32> = tip - centre;
        if v.magnitude2() > 0.0 {
            v.normalize()
        } else {
            Vector2::zero()
        }
    };

    let drag = current - grab.start;
    let [first, second] = grab.face.drag_candidates();
    let first_score = screen_direction(first).dot(drag);
    let second_score = screen_direction(second).dot(drag);

    let (pivot, score) = if first_score.abs() > second_score.abs() {
        (second, first_score)
    } else {
        (first, second_score)
    };
    let axis = pivot.axis();
    Some(Twist {
        pivot,
        axis,
        layer: grab.cubie.get(axis),
        angle: score / units_per_radian,
    })
}

/// Drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        grab: Grab,
        /// `None` until a pointer move has picked an axis.
        twist: Option<Twist>,
    },
}

impl Gesture {
    pub fn begin(&mut self, grab: Grab) {
        if self.is_dragging() {
            log::trace!("pointer down during a drag, restarting from {:?}", grab.cubie);
        }
        *self = Gesture::Dragging { grab, twist: None };
    }

    /// Updates the twist for a pointer at `current`. Returns the new twist,
    /// or `None` if there is no drag or the event was ignored.
    pub fn update(
        &mut self,
        current: Point2<f32>,
        view: &impl SceneView,
        units_per_radian: f32,
    ) -> Option<Twist> {
        let Gesture::Dragging { grab, twist } = self else {
            return None;
        };
        match resolve_twist(grab, current, view, units_per_radian) {
            Some(new_twist) => {
                *twist = Some(new_twist);
                Some(new_twist)
            }
            None => {
                log::trace!("no transform for cubie {:?} yet, ignoring move", grab.cubie);
                None
            }
        }
    }

    /// Ends the drag and returns the move to commit, if the drag picked an
    /// axis and moved at least half a quarter turn.
    pub fn finish(&mut self) -> Option<Move> {
        let finished = std::mem::take(self);
        let Gesture::Dragging {
            twist: Some(twist), ..
        } = finished
        else {
            return None;
        };
        Some(twist.to_move()).filter(|mv| !mv.is_identity())
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    pub fn twist(&self) -> Option<&Twist> {
        match self {
            Gesture::Dragging { twist, .. } => twist.as_ref(),
            Gesture::Idle => None,
        }
    }

    pub fn grab(&self) -> Option<&Grab> {
        match self {
            Gesture::Dragging { grab, .. } => Some(grab),
            Gesture::Idle => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_views {
    use super::*;
    use cgmath::Matrix4;

    /// Looking straight down on the top face, front toward the bottom of the
    /// screen.
    pub struct TopDown;

    impl SceneView for TopDown {
        fn cubie_transform(&self, pos: GridPos) -> Option<Matrix4<f32>> {
            Some(Matrix4::from_translation(pos.to_vec()))
        }

        fn project(&self, point: Point3<f32>) -> Point2<f32> {
            Point2::new(point.x, -point.z)
        }
    }

    /// A view that has not drawn anything yet.
    pub struct Unpainted;

    impl SceneView for Unpainted {
        fn cubie_transform(&self, _pos: GridPos) -> Option<Matrix4<f32>> {
            None
        }

        fn project(&self, point: Point3<f32>) -> Point2<f32> {
            Point2::new(point.x, point.y)
        }
    }

    /// Drag distance that turns `degrees` at the default scale.
    pub fn drag_for(degrees: f32) -> f32 {
        degrees.to_radians() * DEFAULT_DRAG_UNITS_PER_RADIAN
    }
}

#[cfg(test)]
mod tests {
    use super::test_views::*;
    use super::*;
    use crate::puzzle::{Cube, FaceColor};
    use crate::view::{PerspectiveCamera, PuzzleView, Viewport};
    use cgmath::{vec3, Deg, One, Rotation, Vector3};

    fn top_grab(cubie: GridPos) -> Grab {
        Grab {
            cubie,
            face: Direction::Up,
            start: Point2::new(0.0, 0.0),
        }
    }

    fn twist_at(angle: f32) -> Twist {
        Twist {
            pivot: Direction::Right,
            axis: Axis::Row,
            layer: 2,
            angle,
        }
    }

    #[test]
    fn drag_toward_front_turns_about_row() {
        let grab = top_grab(GridPos::new(2, 1, 2));
        let twist = resolve_twist(
            &grab,
            Point2::new(0.0, -drag_for(95.0)),
            &TopDown,
            DEFAULT_DRAG_UNITS_PER_RADIAN,
        )
        .expect("cubie is placed");
        assert_eq!(twist.pivot, Direction::Left);
        assert_eq!(twist.axis, Axis::Row);
        assert_eq!(twist.layer, 2);
        assert!((twist.angle - 95f32.to_radians()).abs() < 1e-4);
        assert_eq!(twist.to_move(), Move::new(Axis::Row, 2, 1));
    }

    #[test]
    fn drag_toward_left_turns_about_column() {
        let grab = top_grab(GridPos::new(2, 0, 1));
        let twist = resolve_twist(
            &grab,
            Point2::new(-30.0, 4.0),
            &TopDown,
            DEFAULT_DRAG_UNITS_PER_RADIAN,
        )
        .expect("cubie is placed");
        assert_eq!(twist.pivot, Direction::Front);
        assert_eq!(twist.axis, Axis::Column);
        assert_eq!(twist.layer, 0);
        assert!((twist.angle - 30.0 / 70.0).abs() < 1e-6);
    }

    /// The lifted slice should turn the way the pointer went: the grabbed
    /// sticker's point rotated by the preview moves along the drag.
    #[test]
    fn preview_follows_pointer() {
        let grab = top_grab(GridPos::new(2, 1, 2));
        for drag in [
            vec3(0.0, -40.0, 0.0),
            vec3(0.0, 40.0, 0.0),
            vec3(40.0, 5.0, 0.0),
            vec3(-40.0, 5.0, 0.0),
        ] {
            let current = Point2::new(drag.x, drag.y);
            let twist = resolve_twist(&grab, current, &TopDown, DEFAULT_DRAG_UNITS_PER_RADIAN)
                .expect("cubie is placed");
            let point = grab.cubie.to_vec() + grab.face.offset();
            let moved = twist.rotation().rotate_vector(point);
            let delta = TopDown.project(Point3::from_vec(moved))
                - TopDown.project(Point3::from_vec(point));
            assert!(
                delta.dot(Vector2::new(drag.x, drag.y)) > 0.0,
                "drag {drag:?} moved the sticker by {delta:?}",
            );
        }
    }

    #[test]
    fn perspective_view_resolves() {
        let camera = PerspectiveCamera::new(
            Viewport::new(800.0, 600.0),
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
            Deg(75.0),
            0.1,
            1000.0,
        );
        let mut view = PuzzleView::new(camera, vec3(0.0, 0.0, -5.0));
        view.orientation = Some(Quaternion::one());

        // Front face, dragged straight up the screen: turns the row slice.
        let grab = Grab {
            cubie: GridPos::new(1, 2, 0),
            face: Direction::Front,
            start: Point2::new(400.0, 300.0),
        };
        let twist = resolve_twist(
            &grab,
            Point2::new(400.0, 300.0 + drag_for(90.0)),
            &view,
            DEFAULT_DRAG_UNITS_PER_RADIAN,
        )
        .expect("cubie is placed");
        assert_eq!(twist.axis, Axis::Row);
        assert_eq!(twist.layer, 0);
        // Up the front face is a negative turn about +X.
        assert!(twist.angle < 0.0);
        assert_eq!(twist.quarter_turns(), 3);
    }

    #[test]
    fn rounding() {
        assert_eq!(twist_at(0.0).quarter_turns(), 0);
        assert_eq!(twist_at(44f32.to_radians()).quarter_turns(), 0);
        assert_eq!(twist_at(-44f32.to_radians()).quarter_turns(), 0);
        assert_eq!(twist_at(46f32.to_radians()).quarter_turns(), 1);
        assert_eq!(twist_at(95f32.to_radians()).quarter_turns(), 1);
        assert_eq!(twist_at(180f32.to_radians()).quarter_turns(), 2);
        assert_eq!(twist_at(-90f32.to_radians()).quarter_turns(), 3);
        assert_eq!(twist_at(360f32.to_radians()).quarter_turns(), 0);
        assert_eq!(twist_at(-400f32.to_radians()).quarter_turns(), 0);
    }

    #[test]
    fn lifted_slice() {
        let twist = twist_at(0.3);
        let lifted = GridPos::all().filter(|&pos| twist.lifts(pos)).count();
        assert_eq!(lifted, 9);
        assert!(twist.lifts(GridPos::new(0, 1, 2)));
        assert!(!twist.lifts(GridPos::new(0, 1, 1)));
    }

    #[test]
    fn unplaced_cubie_is_ignored() {
        let mut gesture = Gesture::default();
        gesture.begin(top_grab(GridPos::new(2, 1, 1)));
        let twist = gesture.update(Point2::new(0.0, -200.0), &Unpainted, 70.0);
        assert!(twist.is_none());
        assert!(gesture.twist().is_none());
        assert!(gesture.is_dragging());
        assert_eq!(gesture.finish(), None);
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn finish_snaps_and_resets() {
        let mut gesture = Gesture::default();
        gesture.begin(top_grab(GridPos::new(2, 1, 2)));
        gesture.update(Point2::new(0.0, -10.0), &TopDown, 70.0);
        gesture.update(Point2::new(0.0, -drag_for(95.0)), &TopDown, 70.0);
        assert_eq!(gesture.finish(), Some(Move::new(Axis::Row, 2, 1)));
        assert_eq!(gesture, Gesture::Idle);
    }

    #[test]
    fn small_drag_commits_nothing() {
        let mut gesture = Gesture::default();
        gesture.begin(top_grab(GridPos::new(2, 1, 2)));
        gesture.update(Point2::new(0.0, -drag_for(30.0)), &TopDown, 70.0);
        assert!(gesture.twist().is_some());
        assert_eq!(gesture.finish(), None);
    }

    #[test]
    fn update_without_drag() {
        let mut gesture = Gesture::default();
        assert!(gesture.update(Point2::new(5.0, 5.0), &TopDown, 70.0).is_none());
        assert_eq!(gesture.finish(), None);
    }

    #[test]
    fn committed_turn_matches_preview() {
        // Dragging the top front edge toward the front by a quarter turn
        // carries the top sticker onto the front face.
        let mut gesture = Gesture::default();
        let cubie = GridPos::new(2, 2, 1);
        gesture.begin(Grab {
            cubie,
            face: Direction::Up,
            start: Point2::new(0.0, 0.0),
        });
        gesture.update(Point2::new(0.0, -drag_for(90.0)), &TopDown, 70.0);
        let mv = gesture.finish().expect("quarter turn");
        let mut cube = Cube::make_solved();
        cube.apply(mv);
        assert_eq!(
            cube[GridPos::new(1, 2, 1)]
                .sticker_on(Direction::Front)
                .map(|s| s.color),
            Some(FaceColor::Yellow)
        );
    }
}
