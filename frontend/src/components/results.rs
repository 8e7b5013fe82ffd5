use shared::predictions::{PredictionCard, prediction_cards};
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;
use yew::prelude::*;

const TECHNICAL_INFO: [(&str, &str); 4] = [
    ("Model:", "Diffusion-GAN Hybrid"),
    ("Dataset:", "INSAT-3D/3DR"),
    ("Processing Time:", "2.3 seconds"),
    ("Accuracy:", "89.2%"),
];

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("Could not open {}: {:?}", url, e);
    }
}

fn download(url: &str, filename: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let anchor = match document
        .create_element("a")
        .map(|element| element.dyn_into::<HtmlAnchorElement>())
    {
        Ok(Ok(anchor)) => anchor,
        _ => {
            log::warn!("Could not create download link for {}", filename);
            return;
        }
    };
    anchor.set_href(url);
    anchor.set_download(filename);

    if body.append_child(&anchor).is_ok() {
        anchor.click();
        let _ = body.remove_child(&anchor);
    }
}

pub fn render_results(predictions: &[String], horizon_step_hours: u32) -> Html {
    let cards = prediction_cards(predictions, horizon_step_hours, &mut rand::thread_rng());

    html! {
        <section class="card results-card">
            <div class="card-header">
                <h2>
                    <i class="fa-solid fa-bolt"></i>{" Generated Predictions "}
                    <span class="badge badge-success">{ format!("{} Results", cards.len()) }</span>
                </h2>
            </div>
            <div class="card-body">
                <div class="prediction-grid">
                    { for cards.iter().map(render_card) }
                </div>

                <div class="bulk-actions">
                    <h4>{"Bulk Actions"}</h4>
                    <div class="button-container">
                        <button class="outline-btn"><i class="fa-solid fa-download"></i>{" Download All"}</button>
                        <button class="outline-btn"><i class="fa-solid fa-eye"></i>{" View Gallery"}</button>
                        <button class="outline-btn">{"Export Report"}</button>
                    </div>
                </div>

                <div class="technical-info">
                    <h4>{"Technical Information"}</h4>
                    <div class="technical-grid">
                        { for TECHNICAL_INFO.iter().map(|(label, value)| html! {
                            <div>
                                <span class="technical-label">{ *label }</span>
                                <p class="technical-value">{ *value }</p>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_card(card: &PredictionCard) -> Html {
    let view = {
        let url = card.locator.clone();
        Callback::from(move |_: MouseEvent| open_in_new_tab(&url))
    };
    let save = {
        let url = card.locator.clone();
        let filename = card.download_name();
        Callback::from(move |_: MouseEvent| download(&url, &filename))
    };

    html! {
        <div class="prediction-card" key={card.index.to_string()}>
            <div class="prediction-image">
                <img src={card.locator.clone()} alt={card.title()} />
                <span class="horizon-chip"><i class="fa-solid fa-calendar"></i>{" "}{ &card.horizon }</span>
                <div class="prediction-overlay">
                    <button class="secondary-btn" onclick={view}>
                        <i class="fa-solid fa-eye"></i>{" View"}
                    </button>
                    <button class="primary-btn" onclick={save}>
                        <i class="fa-solid fa-download"></i>{" Download"}
                    </button>
                </div>
            </div>
            <div class="prediction-body">
                <div class="prediction-title">
                    <h3>{ card.title() }</h3>
                    <span class="badge badge-outline">{"Future State"}</span>
                </div>
                <dl class="prediction-facts">
                    <dt>{"Forecast Time:"}</dt>
                    <dd>{ format!("{} from now", card.horizon) }</dd>
                    <dt>{"Confidence:"}</dt>
                    <dd class="confidence">{ format!("{:.1}%", card.confidence) }</dd>
                    <dt>{"Resolution:"}</dt>
                    <dd>{"High Definition"}</dd>
                </dl>
                <p class="prediction-note">
                    {"Generated using advanced diffusion models trained on INSAT satellite data"}
                </p>
            </div>
        </div>
    }
}
