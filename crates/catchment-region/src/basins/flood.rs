//! Flood driver
//!
//! Drains the hierarchical queue one level at a time. A level is drained to
//! completion, including pixels appended to it while it is being walked,
//! before the water rises. When the last bucket of a window has been
//! drained, the overflow bucket is redistributed into the next window.

use super::hqueue::HierarchicalQueue;

/// Phase of a flood run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloodState {
    /// Waiting for seeds; left by [`FloodDriver::seed`] or by the first
    /// step of [`FloodDriver::run`]
    Initializing,
    /// Walking the bucket of the current level
    Draining,
    /// Moving the overflow bucket into the next window
    RollingOverWindow,
    /// No more levels will be drained
    Done,
}

/// Counters collected during one flood run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloodStats {
    /// Number of pixels queued by [`FloodDriver::seed`]
    pub seeds_queued: u64,
    /// Number of levels whose bucket was drained
    pub levels_drained: u64,
    /// Number of pixels taken from the queue
    pub pixels_processed: u64,
    /// Number of window rollovers performed
    pub window_rollovers: u32,
}

/// Level-by-level flood loop
#[derive(Debug)]
pub struct FloodDriver {
    /// Maximum number of levels to drain, 0 for no limit
    max_level: u32,
    state: FloodState,
    stats: FloodStats,
}

impl FloodDriver {
    /// Create a driver that drains at most `max_level` levels (0 = unbounded).
    pub fn new(max_level: u32) -> Self {
        Self {
            max_level,
            state: FloodState::Initializing,
            stats: FloodStats::default(),
        }
    }

    /// Current phase.
    pub fn state(&self) -> FloodState {
        self.state
    }

    fn budget_exhausted(&self) -> bool {
        self.max_level != 0 && self.stats.levels_drained >= u64::from(self.max_level)
    }

    /// Fill the queue with the initial pixels.
    ///
    /// `seed` inserts the seeds into `queue` and returns how many it queued.
    /// Only valid before the flood starts; later calls are ignored.
    pub fn seed<S>(&mut self, queue: &mut HierarchicalQueue, seed: S)
    where
        S: FnOnce(&mut HierarchicalQueue) -> u64,
    {
        if self.state != FloodState::Initializing {
            log::warn!("flood: seeding ignored in state {:?}", self.state);
            return;
        }
        self.stats.seeds_queued = seed(queue);
        self.state = FloodState::Draining;
    }

    /// Run the flood.
    ///
    /// If [`FloodDriver::seed`] was not called, `queue` is taken as already
    /// seeded.
    /// `visit` is called once for every pixel taken from the queue and may
    /// insert further pixels. `level_of` gives the grey level of a pixel and
    /// is used when deferred pixels are moved into a new window.
    pub fn run<L, V>(
        &mut self,
        queue: &mut HierarchicalQueue,
        level_of: L,
        mut visit: V,
    ) -> FloodStats
    where
        L: Fn(usize) -> u32,
        V: FnMut(&mut HierarchicalQueue, usize),
    {
        loop {
            self.state = match self.state {
                FloodState::Initializing => FloodState::Draining,
                FloodState::Draining if self.budget_exhausted() => FloodState::Done,
                FloodState::Draining => {
                    let mut cursor = queue.first_at_level();
                    while let Some(index) = cursor {
                        visit(queue, index);
                        self.stats.pixels_processed += 1;
                        cursor = queue.next(index);
                    }
                    self.stats.levels_drained += 1;

                    if queue.advance_level() {
                        FloodState::RollingOverWindow
                    } else {
                        FloodState::Draining
                    }
                }
                FloodState::RollingOverWindow => {
                    self.stats.window_rollovers += 1;
                    let was_empty = queue.drain_overflow_into(&level_of);
                    log::trace!(
                        "flood: window {} reached, overflow empty: {}",
                        queue.window(),
                        was_empty
                    );
                    if was_empty {
                        FloodState::Done
                    } else {
                        FloodState::Draining
                    }
                }
                FloodState::Done => return self.stats,
            };
        }
    }
}
