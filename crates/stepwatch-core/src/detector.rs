//! Three-state peak detector with debounce.

use crate::window::SlidingWindow;

/// Detector phase. `Idle` is the initial state; there is no terminal state.
///
/// The enum is matched exhaustively everywhere, so there is no "impossible
/// state" fallthrough to handle: an invalid state is unrepresentable rather
/// than silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorState {
    /// Armed, watching for a peak.
    Idle,
    /// A peak was confirmed last tick; emits exactly one step event and is
    /// traversed for exactly one tick.
    Detect,
    /// Post-detection cooldown so one impact is not counted twice.
    Timeout,
}

/// Finite-state step detector.
///
/// Evaluated once per tick against the post-update window. The decision for
/// tick *t* reads the state as of tick *t*; the staged next state is applied
/// only by [`commit`](PeakDetector::commit), so all logic within a tick
/// observes a single consistent state.
#[derive(Debug, Clone)]
pub struct PeakDetector {
    current: DetectorState,
    next: DetectorState,
    timeout_ticks: u32,
    steps: u32,

    variance_gate: f32,
    debounce_ticks: u32,
}

impl PeakDetector {
    pub fn new(variance_gate: f32, debounce_ticks: u32) -> Self {
        Self {
            current: DetectorState::Idle,
            next: DetectorState::Idle,
            timeout_ticks: 0,
            steps: 0,
            variance_gate,
            debounce_ticks,
        }
    }

    /// Run one tick of the state machine. Returns `true` when a step fired.
    ///
    /// In `Idle`, a step candidate needs the variance proxy above the gate
    /// and the current magnitude above both its neighbors. The "next"
    /// neighbor is [`SlidingWindow::stale_lookahead`]: the slot one ahead of
    /// the cursor, which at this tick still holds the magnitude from
    /// `window_len` ticks ago. That stale comparison is intentional, pinned
    /// by tests; swapping in a one-tick-delayed confirmation would change
    /// which peaks are accepted.
    pub fn evaluate(&mut self, window: &SlidingWindow, variance_proxy: f32) -> bool {
        match self.current {
            DetectorState::Idle => {
                let cur = window.current_magnitude();
                let is_peak = variance_proxy > self.variance_gate
                    && cur > window.previous_magnitude()
                    && cur > window.stale_lookahead();
                if is_peak {
                    log::debug!(
                        "peak candidate at tick {} (mag {:.3} g, variance {:.4})",
                        window.tick(),
                        cur,
                        variance_proxy
                    );
                    self.next = DetectorState::Detect;
                } else {
                    self.next = DetectorState::Idle;
                }
                false
            }
            DetectorState::Detect => {
                // Entry into Detect always counts exactly one step.
                self.steps = self.steps.saturating_add(1);
                self.timeout_ticks = 0;
                self.next = DetectorState::Timeout;
                true
            }
            DetectorState::Timeout => {
                self.timeout_ticks += 1;
                self.next = if self.timeout_ticks > self.debounce_ticks {
                    DetectorState::Idle
                } else {
                    DetectorState::Timeout
                };
                false
            }
        }
    }

    /// Apply the transition staged by [`evaluate`](PeakDetector::evaluate).
    /// Called once at the end of the tick.
    pub fn commit(&mut self) {
        self.current = self.next;
    }

    /// State as observed by the in-flight tick.
    pub fn state(&self) -> DetectorState {
        self.current
    }

    /// Total confirmed steps. Non-decreasing; saturates instead of wrapping.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Ticks spent in the current `Timeout` stretch.
    pub fn timeout_ticks(&self) -> u32 {
        self.timeout_ticks
    }
}
