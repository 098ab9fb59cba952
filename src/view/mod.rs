//! The boundary between the engine and whatever draws it.
//!
//! The engine reads nothing from the view except through [`SceneView`].
//! [`PuzzleView`] is a ready-made implementation for hosts that use a plain
//! perspective camera.

use cgmath::{Matrix4, Point2, Point3};

use crate::puzzle::GridPos;

pub mod camera;
pub mod orbit;

pub use camera::{PerspectiveCamera, PuzzleView, Viewport};
pub use orbit::FreeRotation;

/// What the gesture resolver needs to know about the current frame.
pub trait SceneView {
    /// World transform of the cubie at `pos`, or `None` if it has not been
    /// placed yet.
    fn cubie_transform(&self, pos: GridPos) -> Option<Matrix4<f32>>;

    /// Projects a world-space point to screen space, with Y increasing
    /// upward.
    fn project(&self, point: Point3<f32>) -> Point2<f32>;
}
