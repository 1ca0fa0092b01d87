//! Three.js inspired spinning-cube visualization boilerplate.
//!
//! The crate provides a small retained scene model (a [`Scene`] with
//! meshes and lights, viewed by a [`PerspectiveCamera`]) and a
//! time-based animation loop that spins a mesh once per display refresh.
//! Drawing itself is delegated to a [`Renderer`] implementation, and
//! frame pacing to a [`FrameScheduler`], so the crate stays independent
//! of any particular graphics backend or windowing environment.
//!
//! The quickest way in is [`Visualization`], which wires up the stock
//! grey-cube scene and runs it:
//!
//! ```rust
//! use spinviz::{FrameBudget, Headless, Visualization};
//!
//! let mut renderer = Headless::new();
//! let mut viz = Visualization::new(&mut renderer, 800, 600);
//! let mut scheduler = FrameBudget::new(60);
//! viz.run(&mut renderer, &mut scheduler).unwrap();
//! ```
//!
//! [`Scene`]: struct.Scene.html
//! [`PerspectiveCamera`]: struct.PerspectiveCamera.html
//! [`Renderer`]: trait.Renderer.html
//! [`FrameScheduler`]: trait.FrameScheduler.html
//! [`Visualization`]: struct.Visualization.html

extern crate cgmath;
extern crate froggy;
extern crate genmesh;
#[macro_use]
extern crate log;
extern crate mint;
#[macro_use]
extern crate quick_error;

pub mod animation;
pub mod boilerplate;
pub mod camera;
pub mod geometry;
pub mod light;
pub mod material;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod timer;

pub use animation::{spin, AnimationLoop, SpinParams, Spinner, StopHandle};
pub use boilerplate::{create_cube, CubeParams, Visualization};
pub use camera::{handle_resize, Perspective, PerspectiveCamera};
pub use geometry::Geometry;
pub use light::{DirectionalLight, PointLight};
pub use material::Material;
pub use mesh::{Mesh, MeshNode};
pub use render::{FrameBudget, FrameScheduler, Headless, Renderer};
pub use scene::{Background, Color, Scene};
pub use timer::{Clock, Timer};

/// Orientation of an object as rotation angles about the X, Y and Z
/// axes, in radians. Angles accumulate over an object's lifetime and are
/// never wrapped back into `[0, 2π)`.
pub type Orientation = mint::Vector3<f32>;
/// World-space position.
pub type Position = mint::Point3<f32>;
/// Per-axis spin rate multipliers. A component of zero leaves that axis
/// untouched; a negative component reverses the spin direction.
pub type AxisSpeed = mint::Vector3<f32>;

quick_error! {
    #[doc = "Error encountered when driving an animation."]
    #[derive(Debug, Clone, PartialEq)]
    pub enum Error {
        #[doc = "The spin duration is zero or negative."]
        InvalidConfiguration(duration_ms: f32) {
            description("invalid spin configuration")
            display("invalid spin configuration: duration of {} ms is not positive", duration_ms)
        }
    }
}
