/// Frame pacing for the simulation
///
/// Fixed timestep with an accumulator: simulation steps run at a constant
/// rate regardless of how fast frames are produced. The world itself has no
/// opinion on pacing; the binary owns a clock and asks it how many steps to
/// run each frame.
use std::time::{Duration, Instant};

/// Simulation rate in steps per second
pub const STEP_HZ: u32 = 60;

/// Fixed timestep duration (~1/60 second)
const STEP_DURATION: Duration = Duration::from_micros(1_000_000 / STEP_HZ as u64);

/// Cap on steps per frame to prevent a spiral of death after a long stall
const MAX_STEPS_PER_FRAME: u32 = 5;

/// Fixed-timestep frame clock
pub struct FrameClock {
    /// Unspent time carried between frames
    accumulator: Duration,

    /// When the previous frame began
    last_frame: Instant,

    /// Whether simulation time is frozen
    paused: bool,

    /// Frames seen so far
    frame_count: u64,

    /// Simulation steps granted so far
    step_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame: Instant::now(),
            paused: false,
            frame_count: 0,
            step_count: 0,
        }
    }

    /// Begin a frame; returns how many fixed steps to simulate.
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= STEP_DURATION && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= STEP_DURATION;
            steps += 1;
        }

        // Drop whatever the cap refused instead of letting it pile up
        if steps == MAX_STEPS_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }

        self.step_count += u64::from(steps);
        steps
    }

    #[allow(dead_code)]
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        if !paused {
            // Don't replay the time spent paused
            self.last_frame = Instant::now();
            self.accumulator = Duration::ZERO;
        }
    }

    #[allow(dead_code)]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
