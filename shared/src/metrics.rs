//! Fabricated forecast-quality figures and their count-up animation.

use crate::ticker::{TickHandle, TickerSlot};

pub const ANIMATION_STEPS: u32 = 60;
pub const ANIMATION_DURATION_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityMetrics {
    pub ssim: f64,
    pub mae: f64,
    pub psnr: f64,
}

impl QualityMetrics {
    pub const ZERO: QualityMetrics = QualityMetrics { ssim: 0.0, mae: 0.0, psnr: 0.0 };

    /// The figures shown next to the simulated forecast. Nothing computes
    /// them.
    pub const SHOWCASE: QualityMetrics = QualityMetrics { ssim: 0.892, mae: 0.0234, psnr: 32.4 };

    fn scaled(&self, factor: f64) -> Self {
        Self {
            ssim: self.ssim * factor,
            mae: self.mae * factor,
            psnr: self.psnr * factor,
        }
    }

    pub fn ssim_fill(&self) -> f64 {
        (self.ssim * 100.0).clamp(0.0, 100.0)
    }

    pub fn mae_fill(&self) -> f64 {
        (1.0 - (self.mae / 0.1).min(1.0)) * 100.0
    }

    pub fn psnr_fill(&self) -> f64 {
        (self.psnr / 40.0 * 100.0).min(100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityLabel {
    pub fn from_ssim(ssim: f64) -> Self {
        if ssim >= 0.9 {
            QualityLabel::Excellent
        } else if ssim >= 0.8 {
            QualityLabel::Good
        } else if ssim >= 0.7 {
            QualityLabel::Fair
        } else {
            QualityLabel::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLabel::Excellent => "Excellent",
            QualityLabel::Good => "Good",
            QualityLabel::Fair => "Fair",
            QualityLabel::Poor => "Poor",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            QualityLabel::Excellent => "quality-excellent",
            QualityLabel::Good => "quality-good",
            QualityLabel::Fair => "quality-fair",
            QualityLabel::Poor => "quality-poor",
        }
    }
}

pub fn tick_interval_ms() -> u32 {
    ANIMATION_DURATION_MS / ANIMATION_STEPS
}

#[derive(Debug)]
pub struct MetricsAnimation<H: TickHandle> {
    target: QualityMetrics,
    current: QualityMetrics,
    step: u32,
    ticker: TickerSlot<H>,
}

impl<H: TickHandle> MetricsAnimation<H> {
    pub fn new(target: QualityMetrics) -> Self {
        Self {
            target,
            current: QualityMetrics::ZERO,
            step: 0,
            ticker: TickerSlot::default(),
        }
    }

    pub fn current(&self) -> QualityMetrics {
        self.current
    }

    pub fn target(&self) -> QualityMetrics {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_active()
    }

    /// Restarts from zero towards `target`.
    pub fn start(&mut self, target: QualityMetrics, ticker: H) {
        self.target = target;
        self.current = QualityMetrics::ZERO;
        self.step = 0;
        self.ticker.install(ticker);
    }

    /// Returns `false` once the animation has settled.
    pub fn tick(&mut self) -> bool {
        if !self.ticker.is_active() {
            return false;
        }

        self.step += 1;
        if self.step >= ANIMATION_STEPS {
            self.current = self.target;
            self.ticker.cancel();
            return false;
        }
        self.current = self
            .target
            .scaled(f64::from(self.step) / f64::from(ANIMATION_STEPS));
        true
    }

    pub fn cancel(&mut self) {
        self.ticker.cancel();
    }
}

impl<H: TickHandle> Drop for MetricsAnimation<H> {
    fn drop(&mut self) {
        self.ticker.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::tests::FakeTicker;

    #[test]
    fn quality_thresholds() {
        assert_eq!(QualityLabel::from_ssim(0.95), QualityLabel::Excellent);
        assert_eq!(QualityLabel::from_ssim(0.9), QualityLabel::Excellent);
        assert_eq!(QualityLabel::from_ssim(0.892), QualityLabel::Good);
        assert_eq!(QualityLabel::from_ssim(0.7), QualityLabel::Fair);
        assert_eq!(QualityLabel::from_ssim(0.1), QualityLabel::Poor);
    }

    #[test]
    fn fills_are_bounded() {
        let m = QualityMetrics { ssim: 0.5, mae: 0.25, psnr: 55.0 };
        assert_eq!(m.ssim_fill(), 50.0);
        assert_eq!(m.mae_fill(), 0.0);
        assert_eq!(m.psnr_fill(), 100.0);
    }

    #[test]
    fn animation_ends_on_exact_target() {
        let ticker = FakeTicker::default();
        let mut animation = MetricsAnimation::new(QualityMetrics::SHOWCASE);
        animation.start(QualityMetrics::SHOWCASE, ticker.clone());

        let mut ticks = 0;
        let mut last_ssim = 0.0;
        while animation.tick() {
            ticks += 1;
            assert!(animation.current().ssim >= last_ssim);
            last_ssim = animation.current().ssim;
        }

        assert_eq!(ticks, ANIMATION_STEPS - 1);
        assert_eq!(animation.current(), QualityMetrics::SHOWCASE);
        assert_eq!(ticker.cancels.get(), 1);
        assert!(!animation.tick());
    }

    #[test]
    fn teardown_mid_animation_cancels() {
        let ticker = FakeTicker::default();
        let mut animation = MetricsAnimation::new(QualityMetrics::SHOWCASE);
        animation.start(QualityMetrics::SHOWCASE, ticker.clone());
        animation.tick();
        drop(animation);
        assert_eq!(ticker.cancels.get(), 1);
    }
}
