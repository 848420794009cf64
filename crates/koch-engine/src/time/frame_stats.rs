use std::collections::VecDeque;

/// Rolling window of recent frame times.
///
/// Feeds the debug overlay plot and the "ms/frame (FPS)" readout. The
/// average is taken over the whole window, so a single slow frame does not
/// make the readout jump.
#[derive(Debug, Clone)]
pub struct FrameStats {
    samples: VecDeque<f32>,
    capacity: usize,
    sum: f64,
}

impl FrameStats {
    pub const DEFAULT_CAPACITY: usize = 120;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            sum: 0.0,
        }
    }

    /// Records one frame duration in seconds. Non-finite or negative values are ignored.
    pub fn record(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            return;
        }
        if self.samples.len() == self.capacity {
            if let Some(old) = self.samples.pop_front() {
                self.sum -= old as f64;
            }
        }
        self.samples.push_back(dt);
        self.sum += dt as f64;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples oldest first.
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    /// Mean frame time in milliseconds, `0.0` when empty.
    pub fn average_ms(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        (self.sum / self.samples.len() as f64 * 1000.0) as f32
    }

    /// Frames per second implied by [`average_ms`](Self::average_ms), `0.0` when empty.
    pub fn fps(&self) -> f32 {
        let ms = self.average_ms();
        if ms > 0.0 { 1000.0 / ms } else { 0.0 }
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_are_zero() {
        let stats = FrameStats::new();
        assert_eq!(stats.average_ms(), 0.0);
        assert_eq!(stats.fps(), 0.0);
    }

    #[test]
    fn average_over_window() {
        let mut stats = FrameStats::with_capacity(4);
        for dt in [0.010, 0.020, 0.030, 0.040] {
            stats.record(dt);
        }
        assert!((stats.average_ms() - 25.0).abs() < 1e-3);
        assert!((stats.fps() - 40.0).abs() < 1e-2);
    }

    #[test]
    fn oldest_sample_is_evicted() {
        let mut stats = FrameStats::with_capacity(2);
        stats.record(1.0);
        stats.record(0.002);
        stats.record(0.004);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats.samples().collect::<Vec<_>>(), vec![0.002, 0.004]);
        assert!((stats.average_ms() - 3.0).abs() < 1e-3);
    }

    #[test]
    fn bad_samples_are_ignored() {
        let mut stats = FrameStats::with_capacity(8);
        stats.record(f32::NAN);
        stats.record(-1.0);
        stats.record(f32::INFINITY);
        assert!(stats.is_empty());
    }

    #[test]
    fn zero_capacity_is_promoted_to_one() {
        let mut stats = FrameStats::with_capacity(0);
        stats.record(0.5);
        stats.record(0.25);
        assert_eq!(stats.capacity(), 1);
        assert_eq!(stats.len(), 1);
    }
}
