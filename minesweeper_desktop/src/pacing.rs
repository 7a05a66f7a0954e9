use std::time::{Duration, Instant};

/// Fixed rate frame scheduling.
///
/// The window shell waits until `next_deadline`, runs a frame and calls `tick`.
/// When a frame runs late the schedule restarts from that frame instead of
/// trying to catch up with a burst of frames.
#[derive(Clone, Debug)]
pub struct FramePacer {
    frame_delay: Duration,
    next_frame: Instant,
    frame_index: u64,
}

impl FramePacer {
    pub fn new(frame_delay: Duration, now: Instant) -> FramePacer {
        FramePacer {
            frame_delay,
            next_frame: now,
            frame_index: 0,
        }
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Marks a frame as done and returns its index.
    pub fn tick(&mut self, now: Instant) -> u64 {
        let index = self.frame_index;
        self.frame_index += 1;
        let scheduled = self.next_frame + self.frame_delay;
        self.next_frame = if scheduled > now {
            scheduled
        } else {
            now + self.frame_delay
        };
        index
    }
}
