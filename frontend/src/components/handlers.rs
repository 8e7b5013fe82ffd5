use super::super::{Model, Msg};
use crate::components::utils::{extract_files, generate_id};
use crate::services::{self, BatchImage, bind_preview};
use gloo_timers::callback::Timeout;
use shared::i18n::NoticeEvent;
use shared::sample::sample_images;
use shared::{
    GenerationTicket, IntakeError, PredictionError, PredictionService, PredictionSet, Route,
    SessionError,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_navigate(model: &mut Model, route: Route) -> bool {
    if model.route == route {
        return false;
    }
    log::info!("Navigating to {}", route.path());
    services::push_route(route);
    model.route = route;
    true
}

pub fn handle_route_changed(model: &mut Model, route: Route) -> bool {
    if model.route == route {
        return false;
    }
    model.route = route;
    true
}

pub fn handle_candidates(model: &mut Model, ctx: &Context<Model>, files: Vec<BatchImage>) -> bool {
    match model.session.accept_candidates(files, bind_preview) {
        Ok(count) => {
            ctx.link().send_message(Msg::Notify(NoticeEvent::BatchAccepted { count }));
        }
        Err(IntakeError::CountOutOfRange { min, max, .. }) => {
            ctx.link().send_message(Msg::Notify(NoticeEvent::InvalidCount { min, max }));
        }
    }
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let files = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .map(|file_list| extract_files(&file_list))
        .unwrap_or_default();

    handle_candidates(model, ctx, files)
}

pub fn handle_load_sample(model: &mut Model, ctx: &Context<Model>) -> bool {
    let samples = sample_images().into_iter().map(BatchImage::Sample).collect();
    match model.session.accept_candidates(samples, bind_preview) {
        Ok(_) => ctx.link().send_message(Msg::Notify(NoticeEvent::SampleLoaded)),
        Err(e) => log::error!("Bundled sample set rejected: {}", e),
    }
    true
}

pub fn handle_generate(model: &mut Model, ctx: &Context<Model>) -> bool {
    let request = match model.session.begin_generation() {
        Ok(request) => request,
        Err(SessionError::NoImages { min, max }) => {
            ctx.link().send_message(Msg::Notify(NoticeEvent::NoImages { min, max }));
            return false;
        }
        Err(SessionError::AlreadyProcessing) => {
            ctx.link().send_message(Msg::Notify(NoticeEvent::AlreadyProcessing));
            return false;
        }
        Err(e) => {
            log::error!("Could not start generation: {}", e);
            return false;
        }
    };

    spawn_local({
        let link = ctx.link().clone();
        let service = model.service.clone();

        async move {
            let outcome = service.submit(&request.batch).await;
            link.send_message(Msg::PredictionsReady(request.ticket, outcome));
        }
    });

    true
}

pub fn handle_predictions_ready(
    model: &mut Model,
    ctx: &Context<Model>,
    ticket: GenerationTicket,
    outcome: Result<PredictionSet, PredictionError>,
) -> bool {
    match model.session.finish_generation(ticket, outcome) {
        Ok(_) => {
            ctx.link().send_message(Msg::Notify(NoticeEvent::PredictionsReady));
            true
        }
        Err(SessionError::StaleRun(_)) => false,
        Err(e) => {
            log::error!("{}", e);
            ctx.link().send_message(Msg::Notify(NoticeEvent::PredictionFailed));
            true
        }
    }
}

pub fn handle_notify(model: &mut Model, ctx: &Context<Model>, event: NoticeEvent) -> bool {
    let id = generate_id();
    model.notice = Some((id, event.render(model.session.prefs.locale)));

    let link = ctx.link().clone();
    let timeout = Timeout::new(model.config.notice_timeout_ms, move || {
        link.send_message(Msg::DismissNotice(id));
    });
    // Replacing the handle drops, and so cancels, the previous timeout.
    model.notice_timeout = Some(timeout);

    true
}

pub fn handle_dismiss_notice(model: &mut Model, id: u64) -> bool {
    match &model.notice {
        Some((current, _)) if *current == id => {
            model.notice = None;
            model.notice_timeout = None;
            true
        }
        _ => false,
    }
}
