//! The stock grey-cube visualization, wired together.
//!
//! Reproduces the classic "spinning cube" starter scene: a grey
//! background, a 45° perspective camera, a dim directional light plus a
//! blue point light, and a single cube revolving around its Z axis at
//! half speed, one full turn every two seconds.

use std::f32::consts::PI;

use animation::{AnimationLoop, SpinParams, Spinner, StopHandle};
use camera::{handle_resize, Perspective, PerspectiveCamera};
use geometry::Geometry;
use light::{DirectionalLight, PointLight};
use material::Material;
use mesh::{Mesh, MeshNode};
use render::{FrameScheduler, Renderer};
use scene::{Background, Color, Scene};
use timer::Timer;
use {AxisSpeed, Error, Orientation, Position};

/// Background grey behind the cube.
pub const BACKGROUND_COLOR: Color = 0x717073;
/// Vertical field of view of the camera, in degrees.
pub const CAMERA_FOV_Y: f32 = 45.0;
/// Near clipping plane of the camera.
pub const CAMERA_NEAR: f32 = 0.1;
/// Far clipping plane of the camera.
pub const CAMERA_FAR: f32 = 20000.0;
/// Milliseconds per full revolution of the cube.
pub const SPIN_DURATION_MS: f32 = 1000.0;

/// Everything needed to place one cube in the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeParams {
    /// Edge length.
    pub size: f32,
    /// Surface color.
    pub color: Color,
    /// World-space position.
    pub position: Position,
    /// Initial rotation angles, in radians.
    pub rotation: Orientation,
}

/// Create a cube mesh with a diffuse material and add it to `scene`.
pub fn create_cube(scene: &mut Scene, params: CubeParams) -> Mesh {
    let geometry = Geometry::cuboid(params.size, params.size, params.size);
    let material = Material::Lambert { color: params.color };
    let node = MeshNode::new(geometry, material)
        .position(params.position)
        .orientation(params.rotation);
    scene.add(node)
}

/// The assembled starter visualization.
///
/// [`new`](struct.Visualization.html#method.new) builds the scene and
/// draws the first frame; [`run`](struct.Visualization.html#method.run)
/// then spins the cube until the host stops granting frames or
/// [`stop_handle`](struct.Visualization.html#method.stop_handle) fires.
pub struct Visualization {
    /// The scene holding the cube and the lights.
    pub scene: Scene,
    /// See [`PerspectiveCamera`](struct.PerspectiveCamera.html).
    pub camera: PerspectiveCamera,
    /// Handle to the spinning cube.
    pub cube: Mesh,
    animation: AnimationLoop<Timer>,
}

impl Visualization {
    /// Build the scene, size the render surface to `width` x `height`
    /// pixels and draw the initial frame.
    pub fn new<R: Renderer>(renderer: &mut R, width: u32, height: u32) -> Self {
        let mut scene = Scene::new();
        scene.background = Background::Color(BACKGROUND_COLOR);

        let projection = Perspective {
            fov_y: CAMERA_FOV_Y,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        };
        let camera = PerspectiveCamera::new(projection, width, height);

        // A subtle grey key light from off screen and a blue accent
        // at the origin.
        scene.add_directional_light(DirectionalLight {
            color: 0x888888,
            intensity: 0.5,
            position: [0.5, 0.0, 3.0].into(),
        });
        scene.add_point_light(PointLight {
            color: 0x0000FF,
            intensity: 1.0,
            range: 10.0,
            position: [0.0, 0.0, 0.0].into(),
        });

        let cube = create_cube(&mut scene, CubeParams {
            size: 2.0,
            color: 0x999999,
            position: [0.0, 0.0, -8.0].into(),
            rotation: [PI / 5.0, PI / 5.0, 0.0].into(),
        });

        renderer.set_size(width, height);
        renderer.render(&scene, &camera);

        let axis_speed: AxisSpeed = [0.0, 0.0, 0.5].into();
        let timer = Timer::new();
        let spinner = Spinner::new(
            cube.clone(),
            SpinParams { duration_ms: SPIN_DURATION_MS, axis_speed },
            0.0,
        );
        info!("visualization initialized at {}x{}", width, height);

        Visualization {
            scene,
            camera,
            cube,
            animation: AnimationLoop::new(timer, spinner),
        }
    }

    /// A handle that stops [`run`](struct.Visualization.html#method.run)
    /// from elsewhere, e.g. page teardown.
    pub fn stop_handle(&self) -> StopHandle {
        self.animation.stop_handle()
    }

    /// Spin the cube and redraw, once per frame granted by `scheduler`.
    pub fn run<R, S>(&mut self, renderer: &mut R, scheduler: &mut S) -> Result<(), Error> where
        R: Renderer,
        S: FrameScheduler,
    {
        self.animation.run(&mut self.scene, renderer, &self.camera, scheduler)
    }

    /// Process a single animation frame.
    pub fn step_frame<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), Error> {
        self.animation.step_frame(&mut self.scene, renderer, &self.camera)
    }

    /// React to a host window resize notification.
    pub fn resize<R: Renderer>(&mut self, renderer: &mut R, width: u32, height: u32) {
        handle_resize(&mut self.camera, renderer, width, height);
    }
}
