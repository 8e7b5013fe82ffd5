use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use shared::sample::SampleImage;
use shared::{AppConfig, ImageSource, Route, Session, SimulatedPredictionService, TickHandle};
use std::time::Duration;
use wasm_bindgen::JsValue;

/// An input frame, either picked/dropped by the user or bundled.
#[derive(Clone)]
pub enum BatchImage {
    Uploaded(GlooFile),
    Sample(SampleImage),
}

impl ImageSource for BatchImage {
    fn name(&self) -> String {
        match self {
            BatchImage::Uploaded(file) => file.name(),
            BatchImage::Sample(sample) => sample.name.clone(),
        }
    }

    fn mime_type(&self) -> String {
        match self {
            BatchImage::Uploaded(file) => file.raw_mime_type(),
            BatchImage::Sample(sample) => sample.mime_type(),
        }
    }
}

/// Display locator for an input frame. Object URLs are revoked when the
/// last clone is dropped, so replacing a batch releases its blobs.
#[derive(Clone)]
pub enum Preview {
    Object(ObjectUrl),
    Remote(String),
}

impl Preview {
    pub fn url(&self) -> String {
        match self {
            Preview::Object(url) => url.to_string(),
            Preview::Remote(url) => url.clone(),
        }
    }
}

pub fn bind_preview(image: &BatchImage) -> Preview {
    match image {
        BatchImage::Uploaded(file) => Preview::Object(ObjectUrl::from(file.clone())),
        BatchImage::Sample(sample) => Preview::Remote(sample.url.clone()),
    }
}

pub type BrowserSession = Session<BatchImage, Preview>;

pub type BrowserPredictionService = SimulatedPredictionService<fn(Duration) -> TimeoutFuture>;

fn browser_sleep(duration: Duration) -> TimeoutFuture {
    gloo_timers::future::sleep(duration)
}

pub fn prediction_service(config: &AppConfig) -> BrowserPredictionService {
    SimulatedPredictionService::new(
        config.simulated_latency(),
        browser_sleep as fn(Duration) -> TimeoutFuture,
    )
}

/// `setInterval` handle usable by the shared animation drivers.
pub struct IntervalTicker(Interval);

impl IntervalTicker {
    pub fn every<F>(millis: u32, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self(Interval::new(millis, callback))
    }
}

impl TickHandle for IntervalTicker {
    fn cancel(self) {
        let _ = self.0.cancel();
    }
}

pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Landing)
}

pub fn push_route(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                log::warn!("pushState failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("History unavailable: {:?}", e),
    }
}
