//! Platform-independent core of the cloud motion forecast demo: upload
//! intake, the timeline animation driver, result cards, session state and
//! the prediction-service seam. The browser crate wires these to the DOM.

pub mod config;
pub mod i18n;
pub mod intake;
pub mod metrics;
pub mod predictions;
pub mod prefs;
pub mod route;
pub mod sample;
pub mod session;
pub mod ticker;
pub mod timeline;

pub use config::{AppConfig, ConfigError};
pub use intake::{CountBounds, ImageSource, IntakeError, PreviewedImage, UploadBatch};
pub use predictions::{
    PredictionError, PredictionService, PredictionSet, SimulatedPredictionService,
};
pub use prefs::{DataSource, DisplayPreferences, FontScale, Locale};
pub use route::Route;
pub use session::{GenerationRequest, GenerationTicket, ProcessingPhase, Session, SessionError};
pub use ticker::TickHandle;
