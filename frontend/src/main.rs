mod components;
mod config;
mod services;

use components::handlers;
use components::header::render_header;
use components::landing::render_landing;
use components::metrics::MetricsPanel;
use components::preview_area::render_input_images;
use components::results::render_results;
use components::timeline::Timeline;
use components::upload_section::{render_data_source, render_upload_section};
use components::utils::render_notice;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use services::{BatchImage, BrowserPredictionService, BrowserSession};
use shared::i18n::{Notice, NoticeEvent};
use shared::{
    AppConfig, DataSource, GenerationTicket, Locale, PredictionError, PredictionSet, Route,
    Session,
};
use web_sys::DragEvent;
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Navigation
    Navigate(Route),
    RouteChanged(Route),

    // Intake
    CandidatesSelected(Vec<BatchImage>),
    HandleDrop(DragEvent),
    SetDragging(bool),
    SetDataSource(DataSource),
    LoadSample,

    // Forecast run
    Generate,
    PredictionsReady(GenerationTicket, Result<PredictionSet, PredictionError>),

    // Display preferences
    SetLocale(Locale),
    IncreaseFont,
    DecreaseFont,

    // Notices
    Notify(NoticeEvent),
    DismissNotice(u64),
}

// Main component
pub struct Model {
    config: AppConfig,
    route: Route,
    session: BrowserSession,
    service: BrowserPredictionService,
    is_dragging: bool,
    notice: Option<(u64, Notice)>,
    notice_timeout: Option<Timeout>,
    popstate_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = config::load();
        let bounds = config.bounds().unwrap_or_default();

        let mut model = Self {
            service: services::prediction_service(&config),
            config,
            route: services::current_route(),
            session: Session::new(bounds),
            is_dragging: false,
            notice: None,
            notice_timeout: None,
            popstate_listener: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "popstate", move |_| {
                link.send_message(Msg::RouteChanged(services::current_route()));
            });
            model.popstate_listener = Some(listener);
        } else {
            log::error!("no global `window` exists; back/forward navigation disabled");
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => handlers::handle_navigate(self, route),
            Msg::RouteChanged(route) => handlers::handle_route_changed(self, route),

            Msg::CandidatesSelected(files) => handlers::handle_candidates(self, ctx, files),
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::SetDataSource(source) => {
                self.session.set_data_source(source);
                true
            }
            Msg::LoadSample => handlers::handle_load_sample(self, ctx),

            Msg::Generate => handlers::handle_generate(self, ctx),
            Msg::PredictionsReady(ticket, outcome) => {
                handlers::handle_predictions_ready(self, ctx, ticket, outcome)
            }

            Msg::SetLocale(locale) => {
                self.session.prefs.locale = locale;
                true
            }
            Msg::IncreaseFont => {
                self.session.prefs.increase_font();
                true
            }
            Msg::DecreaseFont => {
                self.session.prefs.decrease_font();
                true
            }

            Msg::Notify(event) => handlers::handle_notify(self, ctx, event),
            Msg::DismissNotice(id) => handlers::handle_dismiss_notice(self, id),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let font_class = self.session.prefs.font_scale.css_class();

        let page = match self.route {
            Route::Landing => render_landing(self, ctx),
            Route::Forecast => self.render_forecast_page(ctx),
            Route::NotFound => render_not_found(ctx),
        };

        html! {
            <div class={classes!("page", font_class)}>
                { page }
                { render_notice(self, ctx) }
            </div>
        }
    }
}

// Rendering methods
impl Model {
    fn render_forecast_page(&self, ctx: &Context<Self>) -> Html {
        let strings = self.session.prefs.locale.app();
        let batch = self.session.batch();
        let predictions = self.session.predictions();

        html! {
            <>
                { render_header(self, ctx) }
                <main class="container">
                    { render_data_source(self, ctx) }
                    {
                        if self.session.data_source() == DataSource::Upload {
                            render_upload_section(self, ctx)
                        } else {
                            html! {}
                        }
                    }
                    { render_input_images(self, ctx) }
                    {
                        if let Some(batch) = batch {
                            html! {
                                <Timeline
                                    inputs={batch.iter().map(|item| item.preview().url()).collect::<Vec<_>>()}
                                    predictions={predictions.to_vec()}
                                    phase={self.session.phase()}
                                    tick_interval_ms={self.config.tick_interval_ms}
                                />
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if predictions.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <>
                                    { render_results(predictions, self.config.horizon_step_hours) }
                                    <MetricsPanel />
                                </>
                            }
                        }
                    }
                    <footer class="card footer-card">
                        <p class="footer-primary">{ strings.powered_by }</p>
                        <p class="footer-secondary">{ strings.designed }</p>
                    </footer>
                </main>
            </>
        }
    }
}

fn render_not_found(ctx: &Context<Model>) -> Html {
    let go_home = ctx.link().callback(|e: MouseEvent| {
        e.prevent_default();
        Msg::Navigate(Route::Landing)
    });

    html! {
        <main class="container not-found">
            <h1>{"404"}</h1>
            <p>{"Oops! Page not found"}</p>
            <a href={Route::Landing.path()} onclick={go_home}>{"Return to Home"}</a>
        </main>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
