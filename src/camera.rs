//! Perspective camera and window-resize handling.

use cgmath::{perspective as cgmath_perspective, Deg};
use mint;

use render::Renderer;
use Position;

/// Perspective projection parameters.
/// See [`Perspective projection`](https://en.wikipedia.org/wiki/3D_projection#Perspective_projection).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in degrees.
    /// Note: the horizontal FOV is computed based on the aspect.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    /// Represents projection as projection matrix.
    pub fn get_matrix(&self, aspect: f32) -> mint::ColumnMatrix4<f32> {
        let m: [[f32; 4]; 4];
        m = cgmath_perspective(Deg(self.fov_y),
                               aspect, self.near, self.far
                               ).into();
        m.into()
    }
}

/// Camera with perspective projection, placed in world space.
///
/// The aspect ratio tracks the render surface and is refreshed by
/// [`handle_resize`](fn.handle_resize.html) whenever the host window
/// changes size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveCamera {
    /// See [`Perspective`](struct.Perspective.html).
    pub projection: Perspective,
    /// Width to height ratio of the render surface.
    pub aspect: f32,
    /// World-space position.
    pub position: Position,
}

impl PerspectiveCamera {
    /// Create a camera at the origin, with the aspect ratio derived
    /// from the render surface size in pixels.
    pub fn new(projection: Perspective, width: u32, height: u32) -> Self {
        PerspectiveCamera {
            projection,
            aspect: width as f32 / height as f32,
            position: [0.0, 0.0, 0.0].into(),
        }
    }

    /// Recompute the aspect ratio for a new surface size.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    /// The projection matrix at the current aspect ratio.
    pub fn matrix(&self) -> mint::ColumnMatrix4<f32> {
        self.projection.get_matrix(self.aspect)
    }
}

/// Window resize handler: size the render surface to the new pixel
/// dimensions and refresh the camera aspect ratio to `width / height`.
///
/// Touches nothing else, so it may interleave with animation ticks in
/// any order and calling it twice with the same size is a no-op.
pub fn handle_resize<R: Renderer>(
    camera: &mut PerspectiveCamera,
    renderer: &mut R,
    width: u32,
    height: u32,
) {
    debug!("resize to {}x{}", width, height);
    renderer.set_size(width, height);
    camera.set_aspect(width, height);
}

#[cfg(test)]
mod tests {
    use super::{handle_resize, Perspective, PerspectiveCamera};
    use render::Headless;

    fn camera() -> PerspectiveCamera {
        let projection = Perspective { fov_y: 45.0, near: 0.1, far: 20000.0 };
        PerspectiveCamera::new(projection, 1024, 768)
    }

    #[test]
    fn aspect_is_width_over_height() {
        let mut camera = camera();
        camera.set_aspect(800, 600);
        assert_eq!(camera.aspect, 800.0 / 600.0);
    }

    #[test]
    fn resize_updates_camera_and_renderer() {
        let mut camera = camera();
        let mut renderer = Headless::new();
        handle_resize(&mut camera, &mut renderer, 800, 600);
        assert_eq!(camera.aspect, 800.0 / 600.0);
        assert_eq!(renderer.size(), (800, 600));

        // Repeating the same notification must change nothing.
        handle_resize(&mut camera, &mut renderer, 800, 600);
        assert_eq!(camera.aspect, 800.0 / 600.0);
        assert_eq!(renderer.size(), (800, 600));
    }

    #[test]
    fn matrix_reflects_the_aspect() {
        let mut camera = camera();
        camera.set_aspect(800, 600);
        let m = camera.matrix();
        // Column-major: x-scale shrinks as the surface gets wider.
        assert!((m.x.x * camera.aspect - m.y.y).abs() < 1.0e-4);
    }
}
