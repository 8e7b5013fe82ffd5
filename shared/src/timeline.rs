//! Animation state behind the temporal timeline.
//!
//! While a run is processing, a ticker walks a highlight across the input
//! frames, one frame per tick, and stops on the last one. When results land
//! the timeline flips to its output phase and stays there until the next run.

use log::debug;
use strum_macros::{AsRefStr, Display};

use crate::ticker::{TickHandle, TickerSlot};

/// Output slots drawn while no predictions exist yet.
pub const PLACEHOLDER_SLOTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum TimelinePhase {
    #[strum(serialize = "input")]
    Input,
    #[strum(serialize = "processing")]
    Processing,
    #[strum(serialize = "output")]
    Output,
}

impl TimelinePhase {
    pub fn badge(&self) -> &'static str {
        match self {
            TimelinePhase::Input => "Ready",
            TimelinePhase::Processing => "Processing",
            TimelinePhase::Output => "Complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Advanced(usize),
    /// The step reached its cap on this tick; the ticker has been cancelled.
    Capped(usize),
    /// No ticker is running; the tick was stale.
    Ignored,
}

#[derive(Debug)]
pub struct TimelineDriver<H: TickHandle> {
    phase: TimelinePhase,
    active_step: usize,
    input_count: usize,
    ticker: TickerSlot<H>,
}

impl<H: TickHandle> Default for TimelineDriver<H> {
    fn default() -> Self {
        Self {
            phase: TimelinePhase::Input,
            active_step: 0,
            input_count: 0,
            ticker: TickerSlot::default(),
        }
    }
}

impl<H: TickHandle> TimelineDriver<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TimelinePhase {
        self.phase
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    fn cap(&self) -> usize {
        self.input_count.saturating_sub(1)
    }

    /// Enters the processing phase with a fresh step counter, taking
    /// ownership of `ticker`.
    pub fn start(&mut self, input_count: usize, ticker: H) {
        self.phase = TimelinePhase::Processing;
        self.active_step = 0;
        self.input_count = input_count;
        self.ticker.install(ticker);

        if self.active_step >= self.cap() {
            self.ticker.cancel();
        }
        debug!("Timeline started over {} inputs", input_count);
    }

    pub fn tick(&mut self) -> Tick {
        if !self.ticker.is_active() {
            return Tick::Ignored;
        }

        self.active_step = (self.active_step + 1).min(self.cap());
        if self.active_step >= self.cap() {
            self.ticker.cancel();
            Tick::Capped(self.active_step)
        } else {
            Tick::Advanced(self.active_step)
        }
    }

    pub fn cancel(&mut self) {
        self.ticker.cancel();
    }

    /// Called once processing is over. A non-empty result moves the
    /// timeline into its output phase; a run that ended empty drops back to
    /// input. An existing output phase is kept either way.
    pub fn complete(&mut self, result_count: usize) {
        self.ticker.cancel();
        if result_count > 0 {
            self.phase = TimelinePhase::Output;
        } else if self.phase == TimelinePhase::Processing {
            self.phase = TimelinePhase::Input;
            self.active_step = 0;
        }
    }

    pub fn is_lit(&self, input_index: usize) -> bool {
        input_index <= self.active_step || self.phase == TimelinePhase::Output
    }

    pub fn progress(&self, input_count: usize, result_count: usize) -> f64 {
        progress_fraction(self.active_step, input_count, result_count)
    }
}

impl<H: TickHandle> Drop for TimelineDriver<H> {
    fn drop(&mut self) {
        self.ticker.cancel();
    }
}

/// Fill of the timeline bar, in `[0, 1]`.
pub fn progress_fraction(active_step: usize, input_count: usize, result_count: usize) -> f64 {
    let total = input_count + result_count.max(PLACEHOLDER_SLOTS);
    let total = total.max(1) as f64;
    ((active_step + 1) as f64 / total).clamp(0.0, 1.0)
}

pub fn input_label(index: usize) -> String {
    format!("T+{index}")
}

pub fn output_label(input_count: usize, index: usize) -> String {
    format!("T+{}", input_count + index + 1)
}

/// Output slots for the timeline: real predictions when present, otherwise
/// placeholders.
pub fn output_slots(predictions: &[String]) -> Vec<Option<&str>> {
    if predictions.is_empty() {
        vec![None; PLACEHOLDER_SLOTS]
    } else {
        predictions.iter().map(|p| Some(p.as_str())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::tests::FakeTicker;

    #[test]
    fn step_climbs_to_cap_then_cancels_once() {
        let ticker = FakeTicker::default();
        let mut driver = TimelineDriver::new();
        driver.start(4, ticker.clone());

        assert_eq!(driver.phase(), TimelinePhase::Processing);
        assert_eq!(driver.tick(), Tick::Advanced(1));
        assert_eq!(driver.tick(), Tick::Advanced(2));
        assert_eq!(driver.tick(), Tick::Capped(3));
        assert_eq!(ticker.cancels.get(), 1);

        assert_eq!(driver.tick(), Tick::Ignored);
        assert_eq!(driver.active_step(), 3);
        drop(driver);
        assert_eq!(ticker.cancels.get(), 1);
    }

    #[test]
    fn step_is_monotonic_and_bounded() {
        for inputs in 1..=6 {
            let ticker = FakeTicker::default();
            let mut driver = TimelineDriver::new();
            driver.start(inputs, ticker.clone());

            let mut last = driver.active_step();
            for _ in 0..20 {
                driver.tick();
                assert!(driver.active_step() >= last);
                assert!(driver.active_step() <= inputs - 1);
                last = driver.active_step();
            }
            assert_eq!(ticker.cancels.get(), 1);
        }
    }

    #[test]
    fn single_input_cancels_immediately() {
        let ticker = FakeTicker::default();
        let mut driver = TimelineDriver::new();
        driver.start(1, ticker.clone());
        assert_eq!(ticker.cancels.get(), 1);
        assert_eq!(driver.tick(), Tick::Ignored);
    }

    #[test]
    fn teardown_cancels_running_ticker() {
        let ticker = FakeTicker::default();
        let mut driver = TimelineDriver::new();
        driver.start(6, ticker.clone());
        driver.tick();
        drop(driver);
        assert_eq!(ticker.cancels.get(), 1);
    }

    #[test]
    fn restart_cancels_previous_run() {
        let first = FakeTicker::default();
        let second = FakeTicker::default();
        let mut driver = TimelineDriver::new();
        driver.start(5, first.clone());
        driver.tick();
        driver.tick();

        driver.start(5, second.clone());
        assert_eq!(first.cancels.get(), 1);
        assert_eq!(driver.active_step(), 0);
    }

    #[test]
    fn output_phase_lights_everything_and_persists() {
        let mut driver: TimelineDriver<FakeTicker> = TimelineDriver::new();
        driver.complete(0);
        assert_eq!(driver.phase(), TimelinePhase::Input);
        assert!(driver.is_lit(0));
        assert!(!driver.is_lit(3));

        driver.start(4, FakeTicker::default());
        driver.complete(2);
        assert_eq!(driver.phase(), TimelinePhase::Output);
        assert!(driver.is_lit(3));

        driver.complete(0);
        assert_eq!(driver.phase(), TimelinePhase::Output);
    }

    #[test]
    fn run_ending_without_results_returns_to_input() {
        let ticker = FakeTicker::default();
        let mut driver = TimelineDriver::new();
        driver.start(4, ticker.clone());
        driver.tick();

        driver.complete(0);
        assert_eq!(driver.phase(), TimelinePhase::Input);
        assert_eq!(driver.phase().badge(), "Ready");
        assert_eq!(driver.active_step(), 0);
        assert_eq!(ticker.cancels.get(), 1);
        assert_eq!(driver.tick(), Tick::Ignored);
    }

    #[test]
    fn progress_stays_in_unit_range() {
        for inputs in 0usize..=8 {
            for results in 0..=5 {
                for step in 0..=inputs.saturating_sub(1) {
                    let p = progress_fraction(step, inputs, results);
                    assert!((0.0..=1.0).contains(&p), "{step}/{inputs}/{results} -> {p}");
                }
            }
        }
        assert_eq!(progress_fraction(0, 0, 0), 0.5);
        assert_eq!(progress_fraction(3, 4, 2), 4.0 / 6.0);
        assert_eq!(progress_fraction(0, 4, 1), 1.0 / 6.0);
    }

    #[test]
    fn slot_labels_follow_inputs() {
        assert_eq!(input_label(0), "T+0");
        assert_eq!(output_label(4, 0), "T+5");
        assert_eq!(output_label(4, 1), "T+6");
        assert_eq!(output_slots(&[]), vec![None, None]);
        let preds = vec!["a".to_string()];
        assert_eq!(output_slots(&preds), vec![Some("a")]);
    }
}
