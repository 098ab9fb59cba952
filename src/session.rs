use cgmath::{One, Point2, Quaternion};
use rand::Rng;
use serde::Serialize;

use crate::gesture::{Gesture, Grab};
use crate::preferences::Preferences;
use crate::puzzle::scramble::{is_solved, scramble};
use crate::puzzle::{Cube, Direction, GridPos, Move};
use crate::view::SceneView;

/// One play-through: a live cube, the shadow cube shown while a slice is
/// being dragged, and the move counter.
#[derive(Debug, Clone)]
pub struct Session {
    live: Cube,
    /// Copy of `live` taken when a drag starts. Only the lifted slice of it
    /// is visible.
    shadow: Option<Cube>,
    gesture: Gesture,
    move_count: u32,
    /// Sticky: once solved, the session stays solved.
    solved: bool,
    drag_units_per_radian: f32,
}

impl Session {
    /// Starts a session on a freshly scrambled cube.
    pub fn new<R: Rng + ?Sized>(prefs: &Preferences, rng: &mut R) -> Session {
        let mut cube = Cube::make_solved();
        let batches = scramble(&mut cube, prefs.interaction.scramble_turns, rng);
        log::debug!("scrambled in {batches} batch(es)");
        Session::from_cube(cube, prefs)
    }

    /// Starts a session on an arbitrary cube, as is.
    pub fn from_cube(cube: Cube, prefs: &Preferences) -> Session {
        Session {
            solved: is_solved(&cube),
            live: cube,
            shadow: None,
            gesture: Gesture::Idle,
            move_count: 0,
            drag_units_per_radian: prefs.interaction.drag_units_per_radian,
        }
    }

    /// Pointer pressed on the sticker facing `face` on the cubie at `cubie`.
    /// Returns whether a drag started.
    pub fn pointer_down(&mut self, cubie: GridPos, face: Direction, at: Point2<f32>) -> bool {
        if self.solved {
            log::trace!("puzzle is solved, ignoring press on {cubie:?}");
            return false;
        }
        assert!(
            self.live[cubie].sticker_on(face).is_some(),
            "cubie {cubie:?} has no sticker facing {face}",
        );

        self.gesture.begin(Grab {
            cubie,
            face,
            start: at,
        });
        let mut shadow = self.live.clone();
        shadow.set_all_visible(false);
        self.shadow = Some(shadow);
        self.live.set_all_visible(true);
        true
    }

    /// Pointer moved to `at` (Y up). Updates the preview, or does nothing if
    /// no drag is open or the view has not placed the grabbed cubie yet.
    pub fn pointer_move(&mut self, at: Point2<f32>, view: &impl SceneView) {
        let Some(twist) = self.gesture.update(at, view, self.drag_units_per_radian) else {
            return;
        };
        let Some(shadow) = &mut self.shadow else {
            return;
        };
        for pos in GridPos::all() {
            let lifted = twist.lifts(pos);
            self.live[pos].visible = !lifted;
            shadow[pos].visible = lifted;
        }
    }

    /// Pointer released. Commits the snapped move, if any, and ends the drag.
    pub fn pointer_up(&mut self) -> Option<Move> {
        let committed = self.gesture.finish();
        if let Some(mv) = committed {
            self.live.apply(mv);
            self.move_count += 1;
            log::debug!("move {}: {mv}", self.move_count);
            if !self.solved && is_solved(&self.live) {
                log::info!("solved in {} moves", self.move_count);
                self.solved = true;
            }
        }
        self.live.set_all_visible(true);
        self.shadow = None;
        committed
    }

    pub fn live(&self) -> &Cube {
        &self.live
    }

    pub fn shadow(&self) -> Option<&Cube> {
        self.shadow.as_ref()
    }

    /// Rotation of the shadow cube. Identity when nothing is being dragged.
    pub fn preview_rotation(&self) -> Quaternion<f32> {
        self.gesture
            .twist()
            .map_or_else(Quaternion::one, |twist| twist.rotation())
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn frame(&self) -> Frame {
        let q = self.preview_rotation();
        Frame {
            live: self.live.clone(),
            shadow: self.shadow.clone(),
            preview_rotation: [q.v.x, q.v.y, q.v.z, q.s],
            move_count: self.move_count,
            solved: self.solved,
        }
    }
}

/// Everything the view layer draws from, for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub live: Cube,
    pub shadow: Option<Cube>,
    /// `[x, y, z, w]`
    pub preview_rotation: [f32; 4],
    pub move_count: u32,
    pub solved: bool,
}

impl Frame {
    pub fn to_json(&self) -> eyre::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
