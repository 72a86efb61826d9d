/// Fixed timestep accumulator.
/// Turns variable frame deltas into a steady count of game ticks
/// (one per second for the round timer).
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }
}

/// One-shot actions due at a wall-clock time (milliseconds).
///
/// Actions cannot be cancelled; each fires exactly once and the receiver
/// decides whether it still applies.
#[derive(Debug)]
pub struct Deferred<A> {
    pending: Vec<(u64, A)>,
}

impl<A> Deferred<A> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, due_ms: u64, action: A) {
        self.pending.push((due_ms, action));
    }

    /// Remove and return every action whose due time has passed, oldest first.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<A> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].0 <= now_ms {
                due.push(self.pending.remove(i).1);
            } else {
                i += 1;
            }
        }
        due
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<A> Default for Deferred<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_per_second() {
        let mut ts = FixedTimestep::new(1.0);
        assert_eq!(ts.accumulate(1.0), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0);
        assert_eq!(ts.accumulate(0.6), 0);
        assert_eq!(ts.accumulate(0.5), 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0);
        assert_eq!(ts.accumulate(60.0), 10);
    }

    #[test]
    fn deferred_fires_once_when_due() {
        let mut d = Deferred::new();
        d.schedule(2_000, "back");
        assert!(d.take_due(1_999).is_empty());
        assert_eq!(d.take_due(2_000), vec!["back"]);
        assert!(d.take_due(10_000).is_empty());
        assert!(d.is_empty());
    }

    #[test]
    fn deferred_keeps_later_actions() {
        let mut d = Deferred::new();
        d.schedule(100, 1);
        d.schedule(500, 2);
        d.schedule(50, 3);
        assert_eq!(d.take_due(100), vec![1, 3]);
        assert_eq!(d.take_due(500), vec![2]);
    }
}
