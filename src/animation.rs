//! Time-based spin animation.
//!
//! The module splits the update into two layers. [`spin`] is the pure
//! computation: given an orientation, two timestamps and the spin
//! configuration, it returns the new orientation. [`Spinner`] threads
//! that computation through a scene one mesh at a time, and
//! [`AnimationLoop`] repeats update-and-redraw once per frame granted
//! by a [`FrameScheduler`](trait.FrameScheduler.html), until its
//! [`StopHandle`] is signalled or the host tears down.
//!
//! [`spin`]: fn.spin.html
//! [`Spinner`]: struct.Spinner.html
//! [`AnimationLoop`]: struct.AnimationLoop.html
//! [`StopHandle`]: struct.StopHandle.html

use std::f32::consts::PI;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use camera::PerspectiveCamera;
use mesh::Mesh;
use render::{FrameScheduler, Renderer};
use scene::Scene;
use timer::Clock;
use {AxisSpeed, Error, Orientation};

/// Configuration of a spin animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinParams {
    /// Time of one full 2π revolution at unit axis speed, in
    /// milliseconds. Must be positive.
    pub duration_ms: f32,
    /// See [`AxisSpeed`](type.AxisSpeed.html).
    pub axis_speed: AxisSpeed,
}

/// Compute the orientation of a spinning object after one tick.
///
/// The elapsed time between `previous_ms` and `current_ms` is turned
/// into a fraction of a revolution, and each axis advances by that
/// fraction of 2π scaled by its speed multiplier. The result is not
/// wrapped into `[0, 2π)`; angles keep accumulating for the lifetime
/// of the object.
///
/// `current_ms` must come from the same clock as `previous_ms` and not
/// be earlier, or the spin will run backward for a tick. The caller is
/// expected to keep `current_ms` around as the next tick's
/// `previous_ms`.
///
/// Fails with [`Error::InvalidConfiguration`](enum.Error.html) if the
/// configured duration is zero or negative.
pub fn spin(
    orientation: Orientation,
    previous_ms: f64,
    current_ms: f64,
    params: &SpinParams,
) -> Result<Orientation, Error> {
    if !(params.duration_ms > 0.0) {
        return Err(Error::InvalidConfiguration(params.duration_ms));
    }
    let delta_t = (current_ms - previous_ms) as f32;
    let fraction = delta_t / params.duration_ms;
    let angle = 2.0 * PI * fraction;
    Ok([
        orientation.x + angle * params.axis_speed.x,
        orientation.y + angle * params.axis_speed.y,
        orientation.z + angle * params.axis_speed.z,
    ].into())
}

/// Spins a single mesh, keeping track of the timestamp of its last
/// update.
#[derive(Clone, Debug)]
pub struct Spinner {
    mesh: Mesh,
    params: SpinParams,
    previous_ms: f64,
}

impl Spinner {
    /// Create a spinner for `mesh`, with `start_ms` as the timestamp
    /// the first tick will be measured against.
    pub fn new(mesh: Mesh, params: SpinParams, start_ms: f64) -> Self {
        Spinner { mesh, params, previous_ms: start_ms }
    }

    /// The mesh being spun.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Advance the mesh orientation up to `now_ms`.
    ///
    /// On failure the scene and the stored timestamp are left
    /// untouched.
    pub fn step(&mut self, scene: &mut Scene, now_ms: f64) -> Result<(), Error> {
        let orientation = scene.orientation(&self.mesh);
        let next = spin(orientation, self.previous_ms, now_ms, &self.params)?;
        scene.set_orientation(&self.mesh, next);
        self.previous_ms = now_ms;
        Ok(())
    }
}

/// Cloneable flag that tells a running [`AnimationLoop`] to halt.
///
/// The flag is checked once per frame, before the next repaint is
/// requested, so a stopped loop finishes the frame it is on and then
/// returns.
///
/// [`AnimationLoop`]: struct.AnimationLoop.html
#[derive(Clone, Debug)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    fn new() -> Self {
        StopHandle { flag: Arc::new(AtomicBool::new(false)) }
    }

    /// Signal the loop to halt after its current frame.
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Cooperative update-and-redraw loop.
///
/// Each frame reads the clock, advances the spinner and draws the
/// scene. The next frame is only requested once the previous one is
/// fully processed; ticks never overlap.
pub struct AnimationLoop<C> {
    clock: C,
    spinner: Spinner,
    stop: StopHandle,
}

impl<C: Clock> AnimationLoop<C> {
    /// Create a loop around `spinner`, reading timestamps from `clock`.
    pub fn new(clock: C, spinner: Spinner) -> Self {
        AnimationLoop {
            clock,
            spinner,
            stop: StopHandle::new(),
        }
    }

    /// A handle that can stop the loop, e.g. from teardown code.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Process exactly one frame: advance the spin to the current
    /// clock reading and draw the scene.
    pub fn step_frame<R: Renderer>(
        &mut self,
        scene: &mut Scene,
        renderer: &mut R,
        camera: &PerspectiveCamera,
    ) -> Result<(), Error> {
        let now_ms = self.clock.now_ms();
        self.spinner.step(scene, now_ms)?;
        renderer.render(scene, camera);
        Ok(())
    }

    /// Run frames until the stop handle is signalled or the scheduler
    /// reports host teardown.
    pub fn run<R, S>(
        &mut self,
        scene: &mut Scene,
        renderer: &mut R,
        camera: &PerspectiveCamera,
        scheduler: &mut S,
    ) -> Result<(), Error> where
        R: Renderer,
        S: FrameScheduler,
    {
        info!("animation loop started");
        loop {
            self.step_frame(scene, renderer, camera)?;
            if self.stop.is_stopped() {
                info!("animation loop stopped");
                return Ok(());
            }
            if !scheduler.next_frame() {
                info!("animation loop ended by the host");
                return Ok(());
            }
        }
    }
}
