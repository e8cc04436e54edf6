//! A trailing moving average used to smooth raw samples.

/// An unweighted moving average over the last `size` samples.
///
/// Until `size` samples have been seen, the average is taken over only the
/// samples seen so far.
#[derive(Clone, Debug)]
pub struct MovingAverage {
    window: Box<[f64]>,
    cursor: usize,
    filled: usize,
}

impl MovingAverage {
    /// Create a new [`MovingAverage`]. A `size` of zero is treated as one.
    pub fn new(size: usize) -> Self {
        Self {
            window: vec![0.0; size.max(1)].into_boxed_slice(),
            cursor: 0,
            filled: 0,
        }
    }

    /// Push a new sample, overwriting the oldest one once the window is full,
    /// and return the new average.
    pub fn push(&mut self, value: f64) -> f64 {
        self.window[self.cursor] = value;
        self.cursor = (self.cursor + 1) % self.window.len();

        if self.filled < self.window.len() {
            self.filled += 1;
        }

        // Slots past `filled` have never been written, and once the window is
        // full every slot is live, so summing the prefix is always correct.
        let sum: f64 = self.window[..self.filled].iter().sum();
        sum / self.filled as f64
    }

    /// How many samples are currently in the window.
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// The maximum number of samples averaged.
    pub fn capacity(&self) -> usize {
        self.window.len()
    }
}
