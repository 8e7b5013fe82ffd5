use crate::services::IntervalTicker;
use shared::metrics::{self, MetricsAnimation, QualityLabel, QualityMetrics};
use yew::prelude::*;

pub enum MetricsMsg {
    Tick,
}

/// Forecast-quality panel. Counts up from zero to the showcase figures
/// once on mount.
pub struct MetricsPanel {
    animation: MetricsAnimation<IntervalTicker>,
}

impl Component for MetricsPanel {
    type Message = MetricsMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut animation = MetricsAnimation::new(QualityMetrics::SHOWCASE);
        let link = ctx.link().clone();
        let ticker = IntervalTicker::every(metrics::tick_interval_ms(), move || {
            link.send_message(MetricsMsg::Tick);
        });
        animation.start(QualityMetrics::SHOWCASE, ticker);

        Self { animation }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // The final tick settles on the target, so it still needs a render.
            MetricsMsg::Tick => {
                let was_running = self.animation.is_running();
                self.animation.tick();
                was_running
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.animation.cancel();
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let shown = self.animation.current();
        let quality = QualityLabel::from_ssim(self.animation.target().ssim);

        html! {
            <section class="card metrics-card">
                <div class="card-header card-header-split">
                    <h2><i class="fa-solid fa-chart-line"></i>{" Forecast Quality Metrics"}</h2>
                    <span class={classes!("badge", quality.css_class())}>
                        { format!("{} Quality", quality.as_str()) }
                    </span>
                </div>
                <div class="card-body metrics-grid">
                    { render_metric(
                        "SSIM",
                        "fa-solid fa-bullseye",
                        format!("{:.3}", shown.ssim),
                        shown.ssim_fill(),
                        "Structural Similarity Index",
                    ) }
                    { render_metric(
                        "MAE",
                        "fa-solid fa-arrow-trend-down",
                        format!("{:.4}", shown.mae),
                        shown.mae_fill(),
                        "Mean Absolute Error (lower is better)",
                    ) }
                    { render_metric(
                        "PSNR",
                        "fa-solid fa-signal",
                        format!("{:.1} dB", shown.psnr),
                        shown.psnr_fill(),
                        "Peak Signal-to-Noise Ratio",
                    ) }
                </div>
                <p class="metrics-note">
                    {"Metrics calculated against ground truth validation data from INSAT-3D satellite observations."}
                </p>
            </section>
        }
    }
}

fn render_metric(name: &str, icon: &str, value: String, fill: f64, caption: &str) -> Html {
    html! {
        <div class="metric">
            <div class="metric-head">
                <span class="metric-name"><i class={icon.to_string()}></i>{" "}{ name.to_string() }</span>
                <span class="metric-value">{ value }</span>
            </div>
            <div class="metric-bar">
                <div class="metric-fill" style={format!("width: {:.1}%", fill)}></div>
            </div>
            <p class="metric-caption">{ caption.to_string() }</p>
        </div>
    }
}
