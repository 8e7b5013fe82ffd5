use log::info;
use rand::Rng;
use std::future::Future;
use std::ops::Range;
use std::time::Duration;
use thiserror::Error;

use crate::intake::UploadBatch;

/// Placeholder frames returned by the simulated model.
pub const PLACEHOLDER_PREDICTIONS: [&str; 2] = [
    "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?w=800&h=600&fit=crop",
    "https://images.unsplash.com/photo-1482938289607-e9573fc25ebb?w=800&h=600&fit=crop",
];

pub const CONFIDENCE_RANGE: Range<f32> = 85.0..95.0;

/// Ordered predicted frames, replaced wholesale by every run.
pub type PredictionSet = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    #[error("prediction service unavailable: {0}")]
    Unavailable(String),
    #[error("prediction service returned no frames")]
    Empty,
}

/// The single entry point to whatever produces forecast frames.
pub trait PredictionService {
    fn submit<I, P>(
        &self,
        batch: &UploadBatch<I, P>,
    ) -> impl Future<Output = Result<PredictionSet, PredictionError>>;
}

/// Stand-in for the forecasting model: waits a fixed latency, then returns
/// the placeholder frames regardless of input.
///
/// `sleep` is injected so the browser can use its timer queue and tests can
/// resolve immediately.
#[derive(Clone)]
pub struct SimulatedPredictionService<S> {
    latency: Duration,
    frames: Vec<String>,
    sleep: S,
}

impl<S, F> SimulatedPredictionService<S>
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    pub fn new(latency: Duration, sleep: S) -> Self {
        Self {
            latency,
            frames: PLACEHOLDER_PREDICTIONS.iter().map(|s| s.to_string()).collect(),
            sleep,
        }
    }
}

impl<S, F> PredictionService for SimulatedPredictionService<S>
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    async fn submit<I, P>(
        &self,
        batch: &UploadBatch<I, P>,
    ) -> Result<PredictionSet, PredictionError> {
        info!(
            "Simulating forecast for {} frames ({} ms)",
            batch.len(),
            self.latency.as_millis()
        );
        (self.sleep)(self.latency).await;
        if self.frames.is_empty() {
            return Err(PredictionError::Empty);
        }
        Ok(self.frames.clone())
    }
}

/// Everything a result card shows for one predicted frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionCard {
    pub index: usize,
    pub locator: String,
    pub horizon: String,
    pub confidence: f32,
}

impl PredictionCard {
    pub fn title(&self) -> String {
        format!("Prediction {}", self.index + 1)
    }

    pub fn download_name(&self) -> String {
        download_name(self.index)
    }
}

pub fn horizon_label(index: usize, step_hours: u32) -> String {
    format!("+{}h", (index as u32 + 1) * step_hours)
}

pub fn download_name(index: usize) -> String {
    format!("prediction_{}.jpg", index + 1)
}

/// Builds one card per prediction. Confidence is fabricated from `rng` on
/// every call.
pub fn prediction_cards<R: Rng + ?Sized>(
    predictions: &[String],
    step_hours: u32,
    rng: &mut R,
) -> Vec<PredictionCard> {
    predictions
        .iter()
        .enumerate()
        .map(|(index, locator)| PredictionCard {
            index,
            locator: locator.clone(),
            horizon: horizon_label(index, step_hours),
            confidence: rng.gen_range(CONFIDENCE_RANGE),
        })
        .collect()
}
