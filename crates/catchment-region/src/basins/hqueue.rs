//! Hierarchical queue
//!
//! A bucket priority queue keyed by grey level. Only one window of
//! [`BUCKET_COUNT`] consecutive levels is resident at a time; pixels whose
//! level lies beyond the window are parked in a single overflow bucket and
//! redistributed when the window advances.
//!
//! Buckets do not own nodes. Every pixel has one slot in a token table
//! holding the index of the next pixel in the same bucket, so a bucket is
//! just a `(first, last)` pair and insertion never allocates.

use crate::error::{RegionError, RegionResult};

/// Number of resident buckets (one window of grey levels)
pub const BUCKET_COUNT: usize = 1 << WINDOW_SHIFT;

/// Token value marking the end of a bucket chain
pub(crate) const LIST_END: usize = usize::MAX;

const WINDOW_SHIFT: u32 = 16;
const LEVEL_MASK: u32 = 0xffff;

/// FIFO descriptor: first and last pixel of a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bucket {
    first: usize,
    last: usize,
}

impl Bucket {
    const EMPTY: Bucket = Bucket {
        first: LIST_END,
        last: LIST_END,
    };

    #[inline]
    fn is_empty(&self) -> bool {
        self.last == LIST_END
    }
}

/// Grey-level bucket queue over the pixels of one image
#[derive(Debug)]
pub struct HierarchicalQueue {
    /// Next-pixel links, indexed by `x + y * width`
    tokens: Vec<usize>,
    buckets: Vec<Bucket>,
    overflow: Bucket,
    /// Current flood level; never decreases
    water_level: u32,
}

impl HierarchicalQueue {
    /// Create an empty queue able to hold `pixel_count` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::OutOfMemory`] if the token table or the bucket
    /// array cannot be allocated.
    pub fn new(pixel_count: usize) -> RegionResult<Self> {
        let mut tokens = Vec::new();
        tokens
            .try_reserve_exact(pixel_count)
            .map_err(|_| RegionError::OutOfMemory {
                bytes: pixel_count.saturating_mul(std::mem::size_of::<usize>()),
            })?;
        tokens.resize(pixel_count, LIST_END);

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(BUCKET_COUNT)
            .map_err(|_| RegionError::OutOfMemory {
                bytes: BUCKET_COUNT * std::mem::size_of::<Bucket>(),
            })?;
        buckets.resize(BUCKET_COUNT, Bucket::EMPTY);

        Ok(Self {
            tokens,
            buckets,
            overflow: Bucket::EMPTY,
            water_level: 0,
        })
    }

    /// Current flood level.
    #[inline]
    pub fn water_level(&self) -> u32 {
        self.water_level
    }

    /// Index of the resident window (high 16 bits of the flood level).
    #[inline]
    pub fn window(&self) -> u32 {
        self.water_level >> WINDOW_SHIFT
    }

    /// Whether the overflow bucket currently holds any pixel.
    #[inline]
    pub fn is_overflow_empty(&self) -> bool {
        self.overflow.is_empty()
    }

    /// Append pixel `index` with grey level `value`.
    ///
    /// Levels at or beyond the end of the resident window go to the overflow
    /// bucket untouched. Levels below the current flood level are raised to
    /// it, so the front never retreats.
    pub fn insert(&mut self, index: usize, value: u32) {
        let limit = (u64::from(self.window()) + 1) << WINDOW_SHIFT;

        self.tokens[index] = LIST_END;
        let bucket = if u64::from(value) >= limit {
            &mut self.overflow
        } else {
            let level = value.max(self.water_level);
            &mut self.buckets[(level & LEVEL_MASK) as usize]
        };

        if bucket.is_empty() {
            bucket.first = index;
        } else {
            self.tokens[bucket.last] = index;
        }
        bucket.last = index;
    }

    /// Empty every resident bucket and the overflow bucket.
    pub fn reset_all(&mut self) {
        self.buckets.fill(Bucket::EMPTY);
        self.overflow = Bucket::EMPTY;
    }

    /// First pixel of the bucket addressed by the current flood level.
    #[inline]
    pub fn first_at_level(&self) -> Option<usize> {
        let bucket = self.buckets[(self.water_level & LEVEL_MASK) as usize];
        (!bucket.is_empty()).then_some(bucket.first)
    }

    /// Pixel following `index` in its chain.
    #[inline]
    pub fn next(&self, index: usize) -> Option<usize> {
        let next = self.tokens[index];
        (next != LIST_END).then_some(next)
    }

    /// Raise the flood level by one.
    ///
    /// Returns `true` when the level just crossed into a new window, i.e.
    /// the last resident bucket has been drained.
    pub fn advance_level(&mut self) -> bool {
        let finished_window = self.water_level & LEVEL_MASK == LEVEL_MASK;
        self.water_level = self.water_level.wrapping_add(1);
        finished_window
    }

    /// Redistribute the overflow bucket into the freshly reset buckets of the
    /// current window, using `level_of` to recover each pixel's grey level.
    ///
    /// Pixels still beyond the new window return to the overflow bucket.
    /// Returns `true` if the overflow bucket was empty when the call began.
    pub fn drain_overflow_into(&mut self, level_of: impl Fn(usize) -> u32) -> bool {
        let was_empty = self.overflow.is_empty();
        let mut cursor = self.overflow.first;

        self.reset_all();

        while cursor != LIST_END {
            let next = self.tokens[cursor];
            self.insert(cursor, level_of(cursor));
            cursor = next;
        }

        was_empty
    }
}
