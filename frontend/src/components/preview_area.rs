use super::super::{Model, Msg};
use super::utils::debounce;
use shared::timeline::input_label;
use yew::prelude::*;

pub fn render_input_images(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(batch) = model.session.batch() else {
        return html! {};
    };

    let link = ctx.link().clone();
    let strings = model.session.prefs.locale.app();

    html! {
        <section class="card">
            <div class="card-header card-header-split">
                <h2>{ format!("{} ({})", strings.input_images, batch.len()) }</h2>
                <button
                    class="primary-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Generate)
                    })}
                    disabled={model.session.is_processing()}
                >
                    { render_generate_button_content(model) }
                </button>
            </div>
            <div class="card-body">
                <div id="image-previews">
                    { for batch.iter().enumerate().map(|(index, item)| html! {
                        <div class="preview-item" key={index.to_string()}>
                            <img src={item.preview().url()} alt={format!("Input {}", index + 1)} />
                            <span class="preview-label">{ input_label(index) }</span>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

fn render_generate_button_content(model: &Model) -> Html {
    let strings = model.session.prefs.locale.app();
    if model.session.is_processing() {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" "}{ strings.processing }</> }
    } else {
        html! { <><i class="fa-solid fa-play"></i>{" "}{ strings.generate_pred }</> }
    }
}
