//! Sliding-window statistics over recent magnitudes.

/// Fixed-capacity ring buffer tracking the last `window_len` magnitudes,
/// their first differences, squared differences, and a per-tick variance
/// proxy.
///
/// Four parallel sequences are indexed by `tick mod window_len`; writing at
/// the cursor overwrites the value from `window_len` ticks ago. Slots that
/// have never been written hold 0.0, which biases the variance proxy during
/// the first `window_len` ticks. That warm-up bias is documented and
/// deliberately left uncorrected.
///
/// All storage is allocated once at construction; `update` is O(window_len)
/// time and allocation-free.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    magnitudes: Vec<f32>,
    diffs: Vec<f32>,
    squares: Vec<f32>,
    averages: Vec<f32>,

    /// Total ticks processed; the write cursor is `tick mod window_len`.
    tick: u64,
}

impl SlidingWindow {
    pub fn new(window_len: usize) -> Self {
        Self {
            magnitudes: vec![0.0; window_len],
            diffs: vec![0.0; window_len],
            squares: vec![0.0; window_len],
            averages: vec![0.0; window_len],
            tick: 0,
        }
    }

    /// Ingest this tick's magnitude and return the variance proxy.
    ///
    /// Stores the magnitude at the cursor, the first difference against the
    /// previous slot, and its square, then recomputes the mean of the full
    /// `squares` buffer. The full recomputation (rather than an incremental
    /// running sum) keeps the value deterministic regardless of history and
    /// is cheap at the default capacity.
    pub fn update(&mut self, magnitude: f32) -> f32 {
        let len = self.magnitudes.len();
        let cursor = self.cursor();
        let prev = (cursor + len - 1) % len;

        self.magnitudes[cursor] = magnitude;
        let diff = magnitude - self.magnitudes[prev];
        self.diffs[cursor] = diff;
        self.squares[cursor] = diff * diff;

        let variance_proxy = self.squares.iter().sum::<f32>() / len as f32;
        // Stashed per tick for external inspection only; nothing in the
        // detector reads it back.
        self.averages[cursor] = variance_proxy;

        variance_proxy
    }

    /// Commit the tick: move the write cursor forward.
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Ticks processed so far (the index of the in-flight tick).
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Write position for the in-flight tick.
    pub fn cursor(&self) -> usize {
        (self.tick % self.magnitudes.len() as u64) as usize
    }

    /// Magnitude written this tick.
    pub fn current_magnitude(&self) -> f32 {
        self.magnitudes[self.cursor()]
    }

    /// Magnitude written one tick ago.
    pub fn previous_magnitude(&self) -> f32 {
        let len = self.magnitudes.len();
        self.magnitudes[(self.cursor() + len - 1) % len]
    }

    /// Value in the slot one position ahead of the cursor.
    ///
    /// No future sample exists yet, so at the current tick this slot still
    /// holds the magnitude written `window_len` ticks ago (or 0.0 before the
    /// buffer first wraps). The peak test compares against this stale value
    /// on purpose; see [`PeakDetector`](crate::PeakDetector).
    pub fn stale_lookahead(&self) -> f32 {
        let len = self.magnitudes.len();
        self.magnitudes[(self.cursor() + 1) % len]
    }

    /// The magnitude ring in slot order (not tick order).
    pub fn magnitudes(&self) -> &[f32] {
        &self.magnitudes
    }

    /// First differences in slot order, for inspection/debug.
    pub fn diffs(&self) -> &[f32] {
        &self.diffs
    }

    /// Per-tick variance proxies in slot order, for inspection/debug.
    pub fn averages(&self) -> &[f32] {
        &self.averages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(window: &mut SlidingWindow, magnitudes: &[f32]) -> Vec<f32> {
        magnitudes
            .iter()
            .map(|&m| {
                let v = window.update(m);
                window.advance();
                v
            })
            .collect()
    }

    #[test]
    fn buffer_holds_last_n_samples_in_tick_order() {
        let mut window = SlidingWindow::new(16);
        let injected: Vec<f32> = (1..=16).map(|i| i as f32 * 0.1).collect();
        run(&mut window, &injected);

        // After exactly 16 ticks, slot i holds the sample from tick i and no
        // zero-initialized slot remains.
        assert_eq!(window.magnitudes(), injected.as_slice());
    }

    #[test]
    fn cursor_wraps_at_capacity() {
        let mut window = SlidingWindow::new(4);
        run(&mut window, &[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(window.cursor(), 1);
        // Tick 4 overwrote the value from tick 0.
        assert_eq!(window.magnitudes(), &[5.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn constant_input_variance_settles_to_zero() {
        let mut window = SlidingWindow::new(16);
        let proxies = run(&mut window, &[0.7; 40]);

        // The first diff (0.7 against the zero-initialized previous slot)
        // pollutes the proxy until its slot is overwritten at tick 16.
        assert!(proxies[0] > 0.0);
        for (tick, &v) in proxies.iter().enumerate().skip(16) {
            assert_eq!(v, 0.0, "variance proxy must be 0 at tick {tick}");
        }
    }

    #[test]
    fn zero_init_bias_is_visible_before_first_wrap() {
        let mut window = SlidingWindow::new(16);
        let v0 = window.update(0.7);
        // One squared diff of 0.49 averaged over 16 zero-initialized slots.
        assert!((v0 - 0.49 / 16.0).abs() < 1e-6);
    }

    #[test]
    fn diff_is_taken_against_previous_slot() {
        let mut window = SlidingWindow::new(8);
        run(&mut window, &[1.0]);

        let v = window.update(3.0);
        // squares = [1.0, 4.0, 0, ...] → mean = 5/8
        assert!((v - 5.0 / 8.0).abs() < 1e-6);
        assert_eq!(&window.diffs()[..2], &[1.0, 2.0]);
    }

    #[test]
    fn stale_lookahead_reads_value_from_window_len_ticks_ago() {
        let mut window = SlidingWindow::new(4);
        run(&mut window, &[10.0, 20.0, 30.0, 40.0]);

        // In-flight tick 4: cursor 0, lookahead slot 1 still holds tick 1's
        // value because tick 5 has not happened yet.
        window.update(50.0);
        assert_eq!(window.stale_lookahead(), 20.0);
        assert_eq!(window.previous_magnitude(), 40.0);
        assert_eq!(window.current_magnitude(), 50.0);
    }

    #[test]
    fn averages_mirror_returned_proxies() {
        let mut window = SlidingWindow::new(4);
        let proxies = run(&mut window, &[0.5, 1.5, 0.25]);
        assert_eq!(&window.averages()[..3], proxies.as_slice());
    }
}
