//! Top-level state of the forecast page.
//!
//! `Session` is the only writer of the uploaded batch, the prediction set and
//! the in-flight run. Views read it and send intents; the component that owns
//! it applies them through the methods below.

use derive_more::Display;
use log::{info, warn};
use thiserror::Error;

use crate::intake::{CountBounds, ImageSource, IntakeError, UploadBatch, intake};
use crate::predictions::{PredictionError, PredictionSet};
use crate::prefs::{DataSource, DisplayPreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "run #{}", _0)]
pub struct GenerationTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingPhase {
    InputReady,
    Processing,
    OutputReady,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no images to process; upload {min}-{max} images first")]
    NoImages { min: usize, max: usize },
    #[error("a prediction run is already in flight")]
    AlreadyProcessing,
    #[error("result for {0} arrived after it was superseded")]
    StaleRun(GenerationTicket),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

/// What the caller needs to hand to the prediction service.
#[derive(Debug, Clone)]
pub struct GenerationRequest<I, P> {
    pub ticket: GenerationTicket,
    pub batch: UploadBatch<I, P>,
}

#[derive(Debug)]
pub struct Session<I, P> {
    bounds: CountBounds,
    batch: Option<UploadBatch<I, P>>,
    predictions: PredictionSet,
    in_flight: Option<GenerationTicket>,
    issued: u64,
    data_source: DataSource,
    rejection: Option<IntakeError>,
    pub prefs: DisplayPreferences,
}

impl<I, P> Session<I, P> {
    pub fn new(bounds: CountBounds) -> Self {
        Self {
            bounds,
            batch: None,
            predictions: PredictionSet::new(),
            in_flight: None,
            issued: 0,
            data_source: DataSource::default(),
            rejection: None,
            prefs: DisplayPreferences::default(),
        }
    }

    pub fn bounds(&self) -> CountBounds {
        self.bounds
    }

    pub fn batch(&self) -> Option<&UploadBatch<I, P>> {
        self.batch.as_ref()
    }

    pub fn predictions(&self) -> &[String] {
        &self.predictions
    }

    pub fn is_processing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn phase(&self) -> ProcessingPhase {
        if self.in_flight.is_some() {
            ProcessingPhase::Processing
        } else if !self.predictions.is_empty() {
            ProcessingPhase::OutputReady
        } else {
            ProcessingPhase::InputReady
        }
    }

    /// Why the most recent upload was refused, until one is accepted.
    pub fn rejection(&self) -> Option<&IntakeError> {
        self.rejection.as_ref()
    }

    pub fn data_source(&self) -> DataSource {
        self.data_source
    }

    pub fn set_data_source(&mut self, source: DataSource) {
        self.data_source = source;
    }

    /// Validates `candidates` and, on success, replaces the current batch
    /// and clears any previous predictions. Returns the accepted count.
    ///
    /// On failure only the last rejection is recorded; batch and results are
    /// left as they were.
    pub fn accept_candidates<B>(
        &mut self,
        candidates: Vec<I>,
        bind: B,
    ) -> Result<usize, IntakeError>
    where
        I: ImageSource,
        B: FnMut(&I) -> P,
    {
        let batch = match intake(candidates, self.bounds, bind) {
            Ok(batch) => batch,
            Err(e) => {
                warn!("Rejected upload: {}", e);
                self.rejection = Some(e.clone());
                return Err(e);
            }
        };
        self.rejection = None;

        if let Some(ticket) = self.in_flight.take() {
            info!("New batch supersedes {}", ticket);
        }

        let count = batch.len();
        self.batch = Some(batch);
        self.predictions.clear();
        info!("Accepted batch of {} images", count);
        Ok(count)
    }

    /// Enters the processing phase, or explains why it cannot.
    pub fn begin_generation(&mut self) -> Result<GenerationRequest<I, P>, SessionError>
    where
        I: Clone,
        P: Clone,
    {
        let batch = match &self.batch {
            Some(batch) if !batch.is_empty() => batch.clone(),
            _ => {
                return Err(SessionError::NoImages {
                    min: self.bounds.min(),
                    max: self.bounds.max(),
                });
            }
        };
        if self.in_flight.is_some() {
            return Err(SessionError::AlreadyProcessing);
        }

        self.issued += 1;
        let ticket = GenerationTicket(self.issued);
        self.in_flight = Some(ticket);
        info!("Starting {} over {} frames", ticket, batch.len());

        Ok(GenerationRequest { ticket, batch })
    }

    /// Applies the outcome of the run identified by `ticket` and leaves the
    /// processing phase. Returns the number of installed predictions.
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        outcome: Result<PredictionSet, PredictionError>,
    ) -> Result<usize, SessionError> {
        if self.in_flight != Some(ticket) {
            warn!("Discarding result of {}", ticket);
            return Err(SessionError::StaleRun(ticket));
        }
        self.in_flight = None;

        let predictions = outcome?;
        self.predictions = predictions;
        info!("{} finished with {} predictions", ticket, self.predictions.len());
        Ok(self.predictions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::tests::{FakeFile, images};

    fn session() -> Session<FakeFile, String> {
        Session::new(CountBounds::new(4, 6).unwrap())
    }

    fn bind(file: &FakeFile) -> String {
        format!("blob:{}", file.name)
    }

    #[test]
    fn generate_without_batch_is_rejected_and_changes_nothing() {
        let mut s = session();
        let err = s.begin_generation().unwrap_err();
        assert_eq!(err, SessionError::NoImages { min: 4, max: 6 });
        assert!(!s.is_processing());
        assert!(s.batch().is_none());
        assert_eq!(s.phase(), ProcessingPhase::InputReady);
    }

    #[test]
    fn rejected_upload_keeps_previous_state() {
        let mut s = session();
        s.accept_candidates(images(4), bind).unwrap();
        let ticket = s.begin_generation().unwrap().ticket;
        s.finish_generation(ticket, Ok(vec!["p1".into(), "p2".into()])).unwrap();

        assert!(s.accept_candidates(images(9), bind).is_err());
        assert_eq!(s.batch().map(|b| b.len()), Some(4));
        assert_eq!(s.predictions().len(), 2);
    }

    #[test]
    fn rejection_is_remembered_until_next_accepted_batch() {
        let mut s = session();
        assert!(s.rejection().is_none());

        s.accept_candidates(images(2), bind).unwrap_err();
        assert_eq!(
            s.rejection(),
            Some(&IntakeError::CountOutOfRange { found: 2, min: 4, max: 6 })
        );

        s.accept_candidates(images(5), bind).unwrap();
        assert!(s.rejection().is_none());
    }

    #[test]
    fn second_start_while_processing_is_rejected() {
        let mut s = session();
        s.accept_candidates(images(5), bind).unwrap();
        let first = s.begin_generation().unwrap();
        assert_eq!(s.begin_generation().unwrap_err(), SessionError::AlreadyProcessing);
        assert_eq!(s.phase(), ProcessingPhase::Processing);

        assert_eq!(s.finish_generation(first.ticket, Ok(vec!["p".into()])), Ok(1));
        assert_eq!(s.phase(), ProcessingPhase::OutputReady);
    }

    #[test]
    fn new_batch_supersedes_in_flight_run() {
        let mut s = session();
        s.accept_candidates(images(4), bind).unwrap();
        let stale = s.begin_generation().unwrap().ticket;

        s.accept_candidates(images(6), bind).unwrap();
        assert!(!s.is_processing());

        let err = s.finish_generation(stale, Ok(vec!["late".into()])).unwrap_err();
        assert_eq!(err, SessionError::StaleRun(stale));
        assert!(s.predictions().is_empty());

        let fresh = s.begin_generation().unwrap().ticket;
        assert_ne!(fresh, stale);
    }

    #[test]
    fn failed_run_leaves_processing_without_results() {
        let mut s = session();
        s.accept_candidates(images(4), bind).unwrap();
        let ticket = s.begin_generation().unwrap().ticket;

        let err = s
            .finish_generation(ticket, Err(PredictionError::Unavailable("offline".into())))
            .unwrap_err();
        assert!(matches!(err, SessionError::Prediction(_)));
        assert_eq!(s.phase(), ProcessingPhase::InputReady);
    }

    #[test]
    fn request_carries_a_copy_of_the_batch() {
        let mut s = session();
        s.accept_candidates(images(4), bind).unwrap();
        let request = s.begin_generation().unwrap();
        assert_eq!(Some(&request.batch), s.batch());
        assert_eq!(request.ticket.to_string(), "run #1");
    }
}
