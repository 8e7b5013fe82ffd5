//! End-to-end runs of the forecast page state through the simulated model.

use futures::executor::block_on;
use shared::predictions::PLACEHOLDER_PREDICTIONS;
use shared::sample::{SampleImage, sample_images};
use shared::{
    AppConfig, ImageSource, PredictionService, ProcessingPhase, Session, SessionError,
    SimulatedPredictionService,
};
use std::cell::RefCell;
use std::future::{Ready, ready};
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
struct PickedFile {
    name: String,
    mime: String,
}

impl ImageSource for PickedFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime.clone()
    }
}

fn picked(count: usize) -> Vec<PickedFile> {
    (0..count)
        .map(|i| PickedFile { name: format!("insat_{i}.png"), mime: "image/png".into() })
        .collect()
}

fn preview(file: &PickedFile) -> String {
    format!("blob:local/{}", file.name)
}

fn recording_service(
    latency: Duration,
) -> (SimulatedPredictionService<impl Fn(Duration) -> Ready<()>>, Rc<RefCell<Vec<Duration>>>) {
    let slept = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&slept);
    let service = SimulatedPredictionService::new(latency, move |d| {
        log.borrow_mut().push(d);
        ready(())
    });
    (service, slept)
}

fn session() -> Session<PickedFile, String> {
    let config = AppConfig::default();
    Session::new(config.bounds().expect("default bounds are valid"))
}

#[test]
fn generate_needs_a_batch_then_yields_two_frames() {
    let config = AppConfig::default();
    let (service, slept) = recording_service(config.simulated_latency());
    let mut session = session();

    let err = session.begin_generation().unwrap_err();
    assert_eq!(err, SessionError::NoImages { min: 4, max: 6 });
    assert_eq!(session.phase(), ProcessingPhase::InputReady);
    assert!(slept.borrow().is_empty());

    session.accept_candidates(picked(4), preview).unwrap();
    let request = session.begin_generation().unwrap();
    assert!(session.is_processing());

    let outcome = block_on(service.submit(&request.batch));
    assert_eq!(slept.borrow().as_slice(), &[Duration::from_millis(3000)]);

    let installed = session.finish_generation(request.ticket, outcome).unwrap();
    assert_eq!(installed, 2);
    assert!(!session.is_processing());
    assert_eq!(session.phase(), ProcessingPhase::OutputReady);
    assert_eq!(session.predictions(), PLACEHOLDER_PREDICTIONS);
}

#[test]
fn new_batch_clears_results_before_next_generate() {
    let (service, _) = recording_service(Duration::ZERO);
    let mut session = session();

    session.accept_candidates(picked(5), preview).unwrap();
    let request = session.begin_generation().unwrap();
    let outcome = block_on(service.submit(&request.batch));
    session.finish_generation(request.ticket, outcome).unwrap();
    assert_eq!(session.predictions().len(), 2);

    session.accept_candidates(picked(6), preview).unwrap();
    assert!(session.predictions().is_empty());
    let batch = session.batch().expect("batch accepted");
    assert_eq!(batch.len(), 6);
    assert_eq!(batch.get(5).map(|item| item.preview().as_str()), Some("blob:local/insat_5.png"));
}

#[test]
fn superseded_run_result_is_discarded() {
    let (service, _) = recording_service(Duration::ZERO);
    let mut session = session();

    session.accept_candidates(picked(4), preview).unwrap();
    let stale = session.begin_generation().unwrap();
    session.accept_candidates(picked(4), preview).unwrap();

    let outcome = block_on(service.submit(&stale.batch));
    assert_eq!(
        session.finish_generation(stale.ticket, outcome),
        Err(SessionError::StaleRun(stale.ticket))
    );
    assert!(session.predictions().is_empty());
    assert_eq!(session.phase(), ProcessingPhase::InputReady);
}

#[test]
fn sample_set_goes_through_the_same_intake() {
    let mut session: Session<SampleImage, String> =
        Session::new(AppConfig::default().bounds().unwrap());

    let count = session
        .accept_candidates(sample_images(), |image: &SampleImage| image.url.clone())
        .unwrap();
    assert_eq!(count, 4);

    let batch = session.batch().unwrap();
    for item in batch {
        assert_eq!(item.preview(), &item.image().url);
        assert!(item.image().name.starts_with("sample_insat_"));
    }
}
