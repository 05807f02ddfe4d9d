//! Frame-coalesced redraw scheduling.
//!
//! Any number of invalidations between two display frames collapse into one
//! redraw. The host owns the actual frame callback (`requestAnimationFrame`,
//! a vsync timer, ...); this type only decides whether one is needed.

#[derive(Debug, Default)]
pub struct RenderScheduler {
    pending: bool,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the surface dirty.
    ///
    /// Returns `true` only for the first invalidation since the last frame,
    /// i.e. when the host must schedule a frame callback.
    pub fn invalidate(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Frame boundary: run `redraw` once if anything was invalidated.
    ///
    /// The pending flag is cleared before `redraw` runs, so an invalidation
    /// raised while drawing schedules the next frame instead of being lost.
    pub fn run_frame(&mut self, redraw: impl FnOnce()) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        redraw();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_invalidations_one_frame() {
        let mut sched = RenderScheduler::new();
        assert!(sched.invalidate());
        for _ in 0..10 {
            assert!(!sched.invalidate(), "already scheduled");
        }

        let mut redraws = 0;
        assert!(sched.run_frame(|| redraws += 1));
        assert!(!sched.run_frame(|| redraws += 1));
        assert_eq!(redraws, 1);
    }

    #[test]
    fn idle_frame_does_nothing() {
        let mut sched = RenderScheduler::new();
        let mut ran = false;
        assert!(!sched.run_frame(|| ran = true));
        assert!(!ran);
    }

    #[test]
    fn invalidate_after_frame_schedules_again() {
        let mut sched = RenderScheduler::new();
        sched.invalidate();
        sched.run_frame(|| {});
        assert!(sched.invalidate());
        assert!(sched.is_pending());
    }
}
