//! Beat detection from the raw pulse-sensor waveform.
//!
//! The detector keeps a rolling window of the most recent [`MAX_HISTORY`]
//! ADC samples and declares a beat when a new sample both clears an
//! upper-quartile threshold and rises above its immediate predecessor. The
//! dual condition counts each pulse exactly once: while the signal sits on
//! the plateau of a pulse it stays above the threshold, but only the rising
//! crossing satisfies both tests.
//!
//! # Threshold
//!
//! The threshold is the element at index `3 * len / 4` of the
//! ascending-sorted window. This is a rank lookup standing in for "upper
//! quartile crossing", not an interpolated percentile; the exact indexing is
//! intentional.
//!
//! # BPM Estimate
//!
//! Beat timestamps are kept in a FIFO window capped at [`MAX_BEATS`]. On
//! each beat the estimate is recomputed as `count / span * 60` over that
//! window. A zero span (all retained beats at the same timestamp) or an
//! empty window leaves the previous estimate untouched, so the readout is
//! sticky: it never collapses to zero or produces infinity when beats stop
//! arriving, it just stops updating until fresh beats age the window over.

use std::collections::VecDeque;
use std::time::Duration;

use crate::config::{MAX_BEATS, MAX_HISTORY};

// =============================================================================
// Sample Window
// =============================================================================

/// Fixed-capacity rolling window of recent sensor readings.
///
/// Circular array with O(1) push-and-evict; order of iteration is arrival
/// order, oldest first.
pub struct SampleBuffer {
    samples: [u16; MAX_HISTORY],
    /// Next write position.
    head: usize,
    /// Number of valid samples (grows until `MAX_HISTORY`).
    len: usize,
}

impl SampleBuffer {
    /// Create an empty window.
    pub const fn new() -> Self {
        Self {
            samples: [0; MAX_HISTORY],
            head: 0,
            len: 0,
        }
    }

    /// Append a sample, evicting the oldest once at capacity.
    pub const fn push(&mut self, sample: u16) {
        self.samples[self.head] = sample;
        self.head = (self.head + 1) % MAX_HISTORY;
        if self.len < MAX_HISTORY {
            self.len += 1;
        }
    }

    /// Number of retained samples.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True while no sample has been pushed.
    #[allow(dead_code)] // Completes the len/is_empty pair
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Most recently pushed sample.
    pub const fn newest(&self) -> Option<u16> {
        if self.len == 0 {
            return None;
        }
        let idx = (self.head + MAX_HISTORY - 1) % MAX_HISTORY;
        Some(self.samples[idx])
    }

    /// Iterate the window in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        let start = if self.len < MAX_HISTORY { 0 } else { self.head };
        (0..self.len).map(move |i| self.samples[(start + i) % MAX_HISTORY])
    }

    /// Smallest and largest retained sample, or `None` while empty.
    pub fn min_max(&self) -> Option<(u16, u16)> {
        let mut iter = self.iter();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for s in iter {
            min = min.min(s);
            max = max.max(s);
        }
        Some((min, max))
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Beat Detector
// =============================================================================

/// Outcome of observing one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BeatDecision {
    /// Sample did not mark a heartbeat.
    NoBeat,
    /// Sample marked a heartbeat; carries the recomputed BPM estimate.
    Beat(f32),
}

/// Consumes one sample per tick and maintains the rolling BPM estimate.
pub struct BeatDetector {
    window: SampleBuffer,
    /// Beat timestamps, oldest first, capped at `MAX_BEATS`.
    /// Timestamps are non-decreasing (monotonic clock).
    beats: VecDeque<Duration>,
    bpm: f32,
}

impl BeatDetector {
    /// Create a detector with an empty window and a zero BPM estimate.
    pub fn new() -> Self {
        Self {
            window: SampleBuffer::new(),
            beats: VecDeque::with_capacity(MAX_BEATS),
            bpm: 0.0,
        }
    }

    /// Push one sample and decide whether it marks a heartbeat.
    ///
    /// `now` is the monotonic time of the reading (elapsed since boot).
    /// A window shorter than two samples can never produce a beat: the
    /// rising-edge condition has no predecessor to compare against.
    pub fn observe(&mut self, sample: u16, now: Duration) -> BeatDecision {
        let previous = self.window.newest();
        self.window.push(sample);

        let Some(previous) = previous else {
            return BeatDecision::NoBeat;
        };

        if sample > self.threshold() && sample > previous {
            if self.beats.len() >= MAX_BEATS {
                self.beats.pop_front();
            }
            self.beats.push_back(now);
            self.recompute_bpm();
            return BeatDecision::Beat(self.bpm);
        }

        BeatDecision::NoBeat
    }

    /// Last known BPM estimate. Sticky across beat-free stretches.
    pub const fn bpm(&self) -> f32 {
        self.bpm
    }

    /// The rolling sample window (for waveform scaling).
    pub const fn window(&self) -> &SampleBuffer {
        &self.window
    }

    /// Number of retained beat timestamps.
    #[allow(dead_code)] // Exercised by the capacity tests
    pub fn beat_count(&self) -> usize {
        self.beats.len()
    }

    /// Upper-quartile rank threshold over the current window.
    ///
    /// Element at index `3 * len / 4` of the ascending-sorted window.
    /// Callers guarantee the window is non-empty.
    fn threshold(&self) -> u16 {
        let mut sorted = [0u16; MAX_HISTORY];
        for (slot, sample) in sorted.iter_mut().zip(self.window.iter()) {
            *slot = sample;
        }
        let len = self.window.len();
        let sorted = &mut sorted[..len];
        sorted.sort_unstable();
        sorted[3 * len / 4]
    }

    /// Recompute the BPM over the retained beat window.
    ///
    /// A zero span would divide by zero; the previous estimate is kept
    /// instead, so the value is never infinity or NaN.
    fn recompute_bpm(&mut self) {
        if let (Some(first), Some(last)) = (self.beats.front(), self.beats.back()) {
            let span = last.saturating_sub(*first).as_secs_f32();
            if span > 0.0 {
                self.bpm = (self.beats.len() as f32 / span) * 60.0;
            }
        }
    }
}

impl Default for BeatDetector {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    // -------------------------------------------------------------------------
    // SampleBuffer Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_sample_buffer_starts_empty() {
        let buf = SampleBuffer::new();
        assert!(buf.is_empty(), "New buffer should be empty");
        assert_eq!(buf.newest(), None, "Empty buffer has no newest sample");
        assert_eq!(buf.min_max(), None, "Empty buffer has no min/max");
    }

    #[test]
    fn test_sample_buffer_push_and_order() {
        let mut buf = SampleBuffer::new();
        buf.push(10);
        buf.push(20);
        buf.push(30);

        assert_eq!(buf.len(), 3);
        assert_eq!(buf.newest(), Some(30));
        let collected: Vec<u16> = buf.iter().collect();
        assert_eq!(collected, vec![10, 20, 30], "Iteration is oldest first");
    }

    #[test]
    fn test_sample_buffer_evicts_oldest_at_capacity() {
        let mut buf = SampleBuffer::new();
        for i in 0..(MAX_HISTORY as u16 + 5) {
            buf.push(i);
        }

        assert_eq!(buf.len(), MAX_HISTORY, "Length never exceeds capacity");
        let collected: Vec<u16> = buf.iter().collect();
        assert_eq!(
            collected[0], 5,
            "Oldest samples are evicted first once over capacity"
        );
        assert_eq!(buf.newest(), Some(MAX_HISTORY as u16 + 4));
    }

    #[test]
    fn test_sample_buffer_min_max() {
        let mut buf = SampleBuffer::new();
        for s in [500, 100, 900, 300] {
            buf.push(s);
        }
        assert_eq!(buf.min_max(), Some((100, 900)));
    }

    // -------------------------------------------------------------------------
    // Beat Decision Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_sample_never_beats() {
        let mut det = BeatDetector::new();
        assert_eq!(
            det.observe(4000, secs(0)),
            BeatDecision::NoBeat,
            "A singleton window cannot evaluate the rising edge"
        );
    }

    #[test]
    fn test_quartile_threshold_scenario() {
        // Window of 96 x 10 plus one 90; pushing 95 sorts to a window whose
        // upper-quartile element is 10, and 95 > 90 is a rising edge.
        let mut det = BeatDetector::new();
        for _ in 0..96 {
            det.observe(10, secs(0));
        }
        det.observe(90, secs(1));

        let decision = det.observe(95, secs(2));
        assert!(
            matches!(decision, BeatDecision::Beat(_)),
            "95 over threshold 10 on a rising edge should beat"
        );
    }

    #[test]
    fn test_single_beat_per_pulse() {
        // Flat baseline, then a rise to a plateau, then descent: the pulse
        // must be counted exactly once, on the rising crossing.
        let mut det = BeatDetector::new();
        for _ in 0..100 {
            det.observe(1000, secs(0));
        }

        let wave = [600, 900, 3000, 3000, 2000, 1200, 1000];
        let mut beats = 0;
        for (i, &s) in wave.iter().enumerate() {
            if matches!(det.observe(s, secs(1 + i as u64)), BeatDecision::Beat(_)) {
                beats += 1;
            }
        }
        assert_eq!(beats, 1, "Plateau and descent must not re-count the pulse");
    }

    #[test]
    fn test_beat_requires_rising_edge() {
        let mut det = BeatDetector::new();
        for _ in 0..100 {
            det.observe(1000, secs(0));
        }
        det.observe(3000, secs(1));

        // Above threshold but equal to predecessor: no edge.
        assert_eq!(det.observe(3000, secs(2)), BeatDecision::NoBeat);
        // Above threshold but falling: no edge.
        assert_eq!(det.observe(2500, secs(3)), BeatDecision::NoBeat);
    }

    // -------------------------------------------------------------------------
    // BPM Estimate Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_two_beats_one_second_apart_is_120_bpm() {
        let mut det = BeatDetector::new();
        for _ in 0..100 {
            det.observe(1000, secs(0));
        }
        det.observe(3000, secs(0)); // first beat, span 0, bpm unchanged
        det.observe(1000, secs(0));
        let decision = det.observe(3000, secs(1)); // second beat at t=1

        assert_eq!(
            decision,
            BeatDecision::Beat(120.0),
            "2 beats over 1 second = 120 BPM"
        );
        assert_eq!(det.bpm(), 120.0);
    }

    #[test]
    fn test_zero_span_keeps_previous_estimate() {
        let mut det = BeatDetector::new();
        for _ in 0..100 {
            det.observe(1000, secs(0));
        }

        // First beat: only one timestamp, span 0, estimate stays at its
        // initial value rather than becoming infinity.
        det.observe(3000, secs(5));
        assert_eq!(det.bpm(), 0.0, "Span of zero must not update the estimate");
        assert!(det.bpm().is_finite(), "Estimate must never be inf/NaN");
    }

    #[test]
    fn test_bpm_sticky_without_beats() {
        let mut det = BeatDetector::new();
        for _ in 0..100 {
            det.observe(1000, secs(0));
        }
        det.observe(3000, secs(0));
        det.observe(1000, secs(0));
        det.observe(3000, secs(1));
        assert_eq!(det.bpm(), 120.0);

        // A long beat-free stretch leaves the readout untouched.
        for i in 0..200 {
            det.observe(1000, secs(2 + i));
        }
        assert_eq!(det.bpm(), 120.0, "Estimate is sticky across quiet stretches");
    }

    #[test]
    fn test_bpm_never_negative() {
        let mut det = BeatDetector::new();
        for _ in 0..100 {
            det.observe(1000, secs(0));
        }
        for i in 0..50 {
            det.observe(1000, secs(i));
            det.observe(3000, secs(i));
            assert!(det.bpm() >= 0.0, "BPM must never go negative");
        }
    }

    #[test]
    fn test_beat_window_capped_with_fifo_eviction() {
        let mut det = BeatDetector::new();
        for _ in 0..100 {
            det.observe(1000, secs(0));
        }

        // Alternate low/high to produce one beat per pair, far more than the cap.
        for i in 0..(MAX_BEATS as u64 * 2) {
            det.observe(1000, secs(i));
            det.observe(3000, secs(i));
        }

        assert_eq!(
            det.beat_count(),
            MAX_BEATS,
            "Beat window must stay capped at MAX_BEATS"
        );
        // 30 retained beats spanning 29 seconds.
        let expected = (MAX_BEATS as f32 / 29.0) * 60.0;
        assert!(
            (det.bpm() - expected).abs() < 0.01,
            "Estimate reflects only the retained window"
        );
    }

    #[test]
    fn test_degenerate_window_still_detects_off_threshold() {
        // All-equal window: max == min disables waveform scaling, but the
        // sorted threshold still exists and detection still runs.
        let mut det = BeatDetector::new();
        for _ in 0..10 {
            det.observe(2000, secs(0));
        }
        assert_eq!(det.window().min_max(), Some((2000, 2000)));

        let decision = det.observe(2500, secs(1));
        assert!(
            matches!(decision, BeatDecision::Beat(_)),
            "2500 > threshold 2000 on a rising edge should beat"
        );
    }
}
