use crate::services::IntervalTicker;
use shared::ProcessingPhase;
use shared::timeline::{
    Tick, TimelineDriver, TimelinePhase, input_label, output_label, output_slots,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    /// Preview URLs of the input frames, in order.
    pub inputs: Vec<String>,
    pub predictions: Vec<String>,
    pub phase: ProcessingPhase,
    pub tick_interval_ms: u32,
}

pub enum TimelineMsg {
    Tick,
}

pub struct Timeline {
    driver: TimelineDriver<IntervalTicker>,
}

impl Component for Timeline {
    type Message = TimelineMsg;
    type Properties = TimelineProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut timeline = Self { driver: TimelineDriver::new() };
        timeline.sync(ctx, None);
        timeline
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            TimelineMsg::Tick => !matches!(self.driver.tick(), Tick::Ignored),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        self.sync(ctx, Some(old_props));
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.driver.cancel();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let phase = self.driver.phase();
        let progress = self.driver.progress(props.inputs.len(), props.predictions.len());
        let is_processing = props.phase == ProcessingPhase::Processing;
        let output_count = output_slots(&props.predictions).len();

        html! {
            <section class="card timeline-card">
                <div class="card-header card-header-split">
                    <h2><i class="fa-solid fa-clock"></i>{" Temporal Analysis Timeline"}</h2>
                    <span class={classes!("badge", "badge-outline", phase.to_string())}>{ phase.badge() }</span>
                </div>
                <div class="card-body">
                    <div class="timeline">
                        <div class="timeline-track">
                            <div class="timeline-fill" style={format!("width: {:.2}%", progress * 100.0)}></div>
                        </div>
                        <div class="timeline-steps">
                            { for props.inputs.iter().enumerate().map(|(index, url)| self.render_input_step(index, url)) }
                            { self.render_processing_step(is_processing, phase) }
                            <div class={classes!("timeline-arrow", (phase == TimelinePhase::Output).then_some("lit"))}>
                                <i class="fa-solid fa-arrow-right"></i>
                            </div>
                            { for output_slots(&props.predictions).into_iter().enumerate().map(|(index, slot)| {
                                render_output_step(props.inputs.len(), index, slot)
                            })}
                        </div>
                    </div>
                    <div class="timeline-summary">
                        <span>{ format!("Input: {} images", props.inputs.len()) }</span>
                        <span class="dot">{"•"}</span>
                        <span>{ format!("Output: {} predictions", output_count) }</span>
                        <span class="timeline-status">
                            {
                                match props.phase {
                                    ProcessingPhase::Processing => "Processing temporal patterns...",
                                    ProcessingPhase::OutputReady => "Predictions generated successfully",
                                    ProcessingPhase::InputReady => "Ready for processing",
                                }
                            }
                        </span>
                    </div>
                </div>
            </section>
        }
    }
}

impl Timeline {
    fn sync(&mut self, ctx: &Context<Self>, old_props: Option<&TimelineProps>) {
        let props = ctx.props();
        let is_processing = props.phase == ProcessingPhase::Processing;
        let was_processing =
            old_props.is_some_and(|old| old.phase == ProcessingPhase::Processing);
        let inputs_changed = old_props.is_some_and(|old| old.inputs.len() != props.inputs.len());

        if is_processing && (!was_processing || inputs_changed) {
            let link = ctx.link().clone();
            let ticker = IntervalTicker::every(props.tick_interval_ms, move || {
                link.send_message(TimelineMsg::Tick);
            });
            self.driver.start(props.inputs.len(), ticker);
        } else if !is_processing {
            self.driver.complete(props.predictions.len());
        }
    }

    fn render_input_step(&self, index: usize, url: &str) -> Html {
        let lit = self.driver.is_lit(index);
        html! {
            <div class="timeline-step" key={format!("in-{index}")}>
                <div class={classes!("step-dot", lit.then_some("lit"))}>
                    { if lit { html! { <span class="pulse"></span> } } else { html! {} } }
                </div>
                <div
                    class={classes!("step-thumb", lit.then_some("lit"))}
                    style={format!("background-image: url({url})")}
                ></div>
                <span class="step-label">{ input_label(index) }</span>
            </div>
        }
    }

    fn render_processing_step(&self, is_processing: bool, phase: TimelinePhase) -> Html {
        let state = if is_processing {
            "busy"
        } else if phase == TimelinePhase::Output {
            "done"
        } else {
            "idle"
        };

        html! {
            <div class="timeline-step">
                <div class={classes!("model-dot", state)}>
                    {
                        if is_processing {
                            html! { <i class="fa-solid fa-bolt"></i> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <span class="step-label model-label">
                    { if is_processing { "AI Processing" } else { "Diffusion Model" } }
                </span>
                {
                    if is_processing {
                        html! { <span class="step-hint">{"Analyzing patterns..."}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}

fn render_output_step(input_count: usize, index: usize, slot: Option<&str>) -> Html {
    let filled = slot.is_some();
    html! {
        <div class="timeline-step" key={format!("pred-{index}")}>
            <div class={classes!("step-dot", filled.then_some("done"))}>
                { if filled { html! { <span class="pulse"></span> } } else { html! {} } }
            </div>
            {
                match slot {
                    Some(url) => html! {
                        <div class="step-thumb done" style={format!("background-image: url({url})")}></div>
                    },
                    None => html! { <div class="step-thumb placeholder">{"?"}</div> },
                }
            }
            <span class="step-label">{ output_label(input_count, index) }</span>
        </div>
    }
}
