use cgmath::{perspective, Deg, Matrix4, Point2, Point3, Quaternion, Vector3};

use crate::puzzle::GridPos;
use crate::view::SceneView;

/// Screen rectangle the puzzle is drawn into, in pixels with Y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn min_side(&self) -> f32 {
        f32::min(self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub viewport: Viewport,
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fovy: Deg<f32>,
    pub z_near: f32,
    pub z_far: f32,
}

impl PerspectiveCamera {
    pub fn new(
        viewport: Viewport,
        position: Point3<f32>,
        target: Point3<f32>,
        up: Vector3<f32>,
        fovy: Deg<f32>,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        Self {
            viewport,
            position,
            target,
            up,
            fovy,
            z_near,
            z_far,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        perspective(self.fovy, self.viewport.aspect(), self.z_near, self.z_far)
            * Matrix4::look_at_rh(self.position, self.target, self.up)
    }

    /// Maps a world-space point to viewport pixels. Points behind the camera
    /// come out mirrored.
    pub fn project(&self, point: Point3<f32>) -> Point2<f32> {
        let clip = self.view_projection() * point.to_homogeneous();
        let ndc = clip.truncate() / clip.w;
        let vp = self.viewport;
        Point2::new(
            vp.x + (ndc.x + 1.0) * 0.5 * vp.width,
            vp.y + (ndc.y + 1.0) * 0.5 * vp.height,
        )
    }
}

/// A puzzle placed in front of a perspective camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuzzleView {
    pub camera: PerspectiveCamera,
    /// Where the core cubie sits in world space.
    pub puzzle_position: Vector3<f32>,
    /// Orientation of the whole puzzle as last drawn. `None` until the host
    /// has drawn a frame.
    pub orientation: Option<Quaternion<f32>>,
}

impl PuzzleView {
    pub fn new(camera: PerspectiveCamera, puzzle_position: Vector3<f32>) -> Self {
        Self {
            camera,
            puzzle_position,
            orientation: None,
        }
    }
}

impl SceneView for PuzzleView {
    fn cubie_transform(&self, pos: GridPos) -> Option<Matrix4<f32>> {
        let orientation = self.orientation?;
        Some(
            Matrix4::from_translation(self.puzzle_position)
                * Matrix4::from(orientation)
                * Matrix4::from_translation(pos.to_vec()),
        )
    }

    fn project(&self, point: Point3<f32>) -> Point2<f32> {
        self.camera.project(point)
    }
}
