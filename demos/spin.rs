extern crate env_logger;
extern crate spinviz;

use std::thread;
use std::time::Duration;

use spinviz::{FrameScheduler, Headless, Visualization};

/// Roughly 60 Hz pacing for a fixed number of frames.
struct Paced {
    remaining: usize,
}

impl FrameScheduler for Paced {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        thread::sleep(Duration::from_millis(16));
        true
    }
}

fn main() {
    env_logger::init().unwrap();

    let mut renderer = Headless::new();
    let mut viz = Visualization::new(&mut renderer, 800, 600);

    // Pretend the window got dragged wider mid-session.
    viz.resize(&mut renderer, 1280, 720);

    // Two seconds of frames, then tear down.
    let mut scheduler = Paced { remaining: 120 };
    viz.run(&mut renderer, &mut scheduler).unwrap();

    let orientation = viz.scene.orientation(&viz.cube);
    println!("cube stopped at rotation ({:.3}, {:.3}, {:.3}) rad",
             orientation.x, orientation.y, orientation.z);
}
