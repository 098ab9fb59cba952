use cgmath::{Euler, One, Point2, Quaternion, Rad};
use std::f32::consts::PI;

use crate::preferences::Preferences;
use crate::view::Viewport;

/// Free rotation of the whole puzzle, dragged from anywhere off the stickers.
/// This is purely cosmetic; the engine never reads it except through
/// [`SceneView`](crate::view::SceneView).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreeRotation {
    pub orientation: Quaternion<f32>,
    last: Option<Point2<f32>>,
}

impl Default for FreeRotation {
    fn default() -> Self {
        Self {
            orientation: Quaternion::one(),
            last: None,
        }
    }
}

impl FreeRotation {
    pub fn press(&mut self, at: Point2<f32>) {
        self.last = Some(at);
    }

    pub fn release(&mut self) {
        self.last = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    /// Rotates by the pointer movement since the last call. A full sweep
    /// across the viewport's shorter side is one full turn.
    pub fn drag(&mut self, at: Point2<f32>, viewport: &Viewport) {
        let Some(last) = self.last else {
            return;
        };
        let scale = 2.0 * PI / viewport.min_side();
        // Screen Y is up, but dragging down should tip the front downward.
        let delta = Quaternion::from(Euler::new(
            Rad((last.y - at.y) * scale),
            Rad((at.x - last.x) * scale),
            Rad(0.0),
        ));
        self.orientation = delta * self.orientation;
        self.last = Some(at);
    }

    /// One frame of the idle spin shown once the puzzle is solved.
    pub fn spin(&mut self, step: Rad<f32>) {
        self.orientation = self.orientation * Quaternion::from(Euler::new(step, step, step));
    }

    /// [`spin`](Self::spin) at the configured celebration rate.
    pub fn celebrate(&mut self, prefs: &Preferences) {
        self.spin(Rad(prefs.interaction.celebration_spin));
    }
}
