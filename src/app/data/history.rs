//! Fixed-capacity history of smoothed CPU usage.

use super::MovingAverage;
use crate::{
    collection::CpuHarvest,
    constants::MIN_HISTORY,
    utils::error::{HistoryError, HistoryResult},
};

/// A validated index into a [`HistoryStore`]'s core slots.
///
/// These can only be obtained from the store itself, so any [`CoreId`] in hand
/// is known to be in range for the store that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoreId(usize);

impl CoreId {
    /// The raw core number.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The history of a single core (or the total counter).
#[derive(Clone, Debug)]
struct Track {
    points: Box<[f64]>,
    filter: MovingAverage,

    /// The most recently recorded value.
    latest: f64,
}

impl Track {
    fn new(capacity: usize, window: usize) -> Self {
        Self {
            points: vec![0.0; capacity].into_boxed_slice(),
            filter: MovingAverage::new(window),
            latest: 0.0,
        }
    }

    /// Smooth `reading`, or repeat the last recorded value if there is none.
    fn smooth(&mut self, reading: Option<f64>) -> f64 {
        match reading {
            Some(raw) => self.filter.push(raw),
            None => self.latest,
        }
    }

    fn record(&mut self, cursor: usize, value: f64) {
        self.points[cursor] = value;
        self.latest = value;
    }

    fn ingest(&mut self, cursor: usize, reading: Option<f64>) {
        let value = self.smooth(reading);
        self.record(cursor, value);
    }
}

/// Per-core circular buffers of smoothed CPU usage, all written in lock-step
/// through a single shared cursor.
///
/// Every tick advances the cursor once and then writes one value for every
/// core slot, so position `n` in one core's buffer is the same moment in time
/// as position `n` in every other core's buffer.
#[derive(Clone, Debug)]
pub struct HistoryStore {
    capacity: usize,
    cursor: usize,
    ticks: u64,

    /// How many of the slots are backed by a real core.
    discovered: usize,

    cores: Vec<Track>,
    total: Track,
}

impl HistoryStore {
    /// Create a new, zeroed [`HistoryStore`].
    ///
    /// `slots` is how many core slots are sampled each tick, while
    /// `discovered` is how many of those are real cores; it is clamped to
    /// `slots`. Only discovered cores count towards [`HistoryStore::aggregate`].
    pub fn new(
        slots: usize, discovered: usize, capacity: usize, window: usize,
    ) -> HistoryResult<Self> {
        if capacity < MIN_HISTORY {
            return Err(HistoryError::InvalidCapacity {
                min: MIN_HISTORY,
                got: capacity,
            });
        }

        if window == 0 || window > capacity {
            return Err(HistoryError::InvalidWindow {
                capacity,
                got: window,
            });
        }

        Ok(Self {
            capacity,
            cursor: 0,
            ticks: 0,
            discovered: discovered.min(slots),
            cores: vec![Track::new(capacity, window); slots],
            total: Track::new(capacity, window),
        })
    }

    /// Validate a raw core number.
    pub fn core_id(&self, index: usize) -> HistoryResult<CoreId> {
        if index < self.cores.len() {
            Ok(CoreId(index))
        } else {
            Err(HistoryError::CoreOutOfRange {
                index,
                slots: self.cores.len(),
            })
        }
    }

    /// The ids of every discovered core, in order.
    pub fn discovered_cores(&self) -> impl Iterator<Item = CoreId> {
        (0..self.discovered).map(CoreId)
    }

    pub fn slot_count(&self) -> usize {
        self.cores.len()
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered
    }

    /// How many points each buffer holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many ticks have been recorded so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Move the shared write cursor forward by one position.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.capacity;
        self.ticks += 1;
    }

    /// Push a raw reading through `core`'s moving average, returning the
    /// smoothed value. This does not record anything.
    pub fn smooth(&mut self, core: CoreId, raw: f64) -> f64 {
        self.cores[core.0].smooth(Some(raw))
    }

    /// Write `value` for `core` at the current cursor position.
    pub fn record(&mut self, core: CoreId, value: f64) {
        self.cores[core.0].record(self.cursor, value);
    }

    /// Record one tick of readings.
    ///
    /// The cursor is advanced once, then every slot gets a value at the new
    /// position: readings are smoothed and recorded, while missing readings
    /// repeat that slot's previous smoothed value without touching its
    /// moving average.
    pub fn ingest(&mut self, harvest: &CpuHarvest) {
        self.advance();

        let cursor = self.cursor;
        for (index, track) in self.cores.iter_mut().enumerate() {
            track.ingest(cursor, harvest.cores.get(index).copied().flatten());
        }

        self.total.ingest(cursor, harvest.total);
    }

    /// Buffer positions in chronological order, oldest first.
    fn chronological(&self) -> impl Iterator<Item = usize> + '_ {
        let start = (self.cursor + 1) % self.capacity;
        (0..self.capacity).map(move |offset| (start + offset) % self.capacity)
    }

    /// All of `core`'s retained points, oldest first. Always returns
    /// [`HistoryStore::capacity`] values; positions that have never been
    /// written read as 0.0.
    pub fn read_sequence(&self, core: CoreId) -> Vec<f64> {
        let points = &self.cores[core.0].points;
        self.chronological().map(|pos| points[pos]).collect()
    }

    /// The total counter's retained points, oldest first.
    ///
    /// This is independent from [`HistoryStore::aggregate`].
    pub fn read_total_sequence(&self) -> Vec<f64> {
        self.chronological().map(|pos| self.total.points[pos]).collect()
    }

    /// For each retained position, oldest first, the mean of every
    /// discovered core's value at that position.
    ///
    /// With no discovered cores this is all zeroes.
    pub fn aggregate(&self) -> Vec<f64> {
        if self.discovered == 0 {
            return vec![0.0; self.capacity];
        }

        let cores = &self.cores[..self.discovered];
        self.chronological()
            .map(|pos| {
                let sum: f64 = cores.iter().map(|track| track.points[pos]).sum();
                sum / cores.len() as f64
            })
            .collect()
    }

    /// The most recently recorded value for `core`.
    pub fn latest(&self, core: CoreId) -> f64 {
        self.cores[core.0].latest
    }

    /// The most recently recorded value of the total counter.
    pub fn latest_total(&self) -> f64 {
        self.total.latest
    }

    /// The mean of every discovered core's most recent value.
    pub fn latest_aggregate(&self) -> f64 {
        if self.discovered == 0 {
            return 0.0;
        }

        let cores = &self.cores[..self.discovered];
        cores.iter().map(|track| track.latest).sum::<f64>() / cores.len() as f64
    }
}
