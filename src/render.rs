//! Boundaries to the host environment: drawing and frame pacing.

use camera::PerspectiveCamera;
use scene::Scene;

/// The rendering backend boundary.
///
/// Implementations own the actual graphics resources; the crate only
/// asks them to match the render surface to the window size and to
/// draw the retained scene once per frame.
pub trait Renderer {
    /// Resize the render surface, in pixels.
    fn set_size(&mut self, width: u32, height: u32);

    /// Draw one frame of `scene` as viewed through `camera`.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera);
}

/// The repaint pacing boundary.
///
/// One call to [`next_frame`] corresponds to one `requestAnimationFrame`
/// style wait: it returns once the host is ready for another repaint,
/// or `false` when the host is tearing down and no more frames should
/// be produced. Frames are strictly sequential; the loop never asks for
/// the next frame before the previous one is fully processed.
///
/// [`next_frame`]: trait.FrameScheduler.html#tymethod.next_frame
pub trait FrameScheduler {
    /// Wait for the next repaint opportunity.
    fn next_frame(&mut self) -> bool;
}

/// Renderer that draws nothing and only records what it was asked to
/// do. Useful for tests and for exercising the animation loop without
/// a graphics backend.
#[derive(Debug)]
pub struct Headless {
    size: (u32, u32),
    frames: usize,
}

impl Headless {
    /// Create a renderer with a zero-sized surface.
    pub fn new() -> Self {
        Headless { size: (0, 0), frames: 0 }
    }

    /// The last surface size passed to [`set_size`](trait.Renderer.html#tymethod.set_size).
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Renderer for Headless {
    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn render(&mut self, _scene: &Scene, _camera: &PerspectiveCamera) {
        self.frames += 1;
        trace!("frame {} drawn", self.frames);
    }
}

/// Scheduler that grants a fixed number of frames and then reports
/// teardown, standing in for a host that closes after a while.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameBudget {
    remaining: usize,
}

impl FrameBudget {
    /// Grant `frames` further repaints.
    pub fn new(frames: usize) -> Self {
        FrameBudget { remaining: frames }
    }
}

impl FrameScheduler for FrameBudget {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameBudget, FrameScheduler, Headless, Renderer};
    use camera::{Perspective, PerspectiveCamera};
    use scene::Scene;

    #[test]
    fn headless_counts_frames() {
        let scene = Scene::new();
        let camera = PerspectiveCamera::new(
            Perspective { fov_y: 45.0, near: 0.1, far: 100.0 },
            640,
            480,
        );
        let mut renderer = Headless::new();
        renderer.render(&scene, &camera);
        renderer.render(&scene, &camera);
        assert_eq!(renderer.frames(), 2);
    }

    #[test]
    fn budget_runs_out() {
        let mut scheduler = FrameBudget::new(2);
        assert!(scheduler.next_frame());
        assert!(scheduler.next_frame());
        assert!(!scheduler.next_frame());
        assert!(!scheduler.next_frame());
    }
}
