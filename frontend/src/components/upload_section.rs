use super::super::{Model, Msg};
use super::utils::{debounce, extract_files};
use shared::i18n::NoticeEvent;
use shared::{DataSource, IntakeError};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_data_source(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let strings = model.session.prefs.locale.app();
    let source = model.session.data_source();

    html! {
        <section class="card">
            <div class="card-header">
                <h2><i class="fa-solid fa-cloud"></i>{" "}{ strings.data_source }</h2>
            </div>
            <div class="card-body data-source">
                <label>
                    <input
                        type="radio"
                        name="data-source"
                        checked={source == DataSource::Upload}
                        onchange={link.callback(|_| Msg::SetDataSource(DataSource::Upload))}
                    />
                    <span>{ strings.upload_custom }</span>
                </label>
                <label>
                    <input
                        type="radio"
                        name="data-source"
                        checked={source == DataSource::Sample}
                        onchange={link.callback(|_| Msg::SetDataSource(DataSource::Sample))}
                    />
                    <span>{ strings.sample_data }</span>
                </label>
                {
                    if source == DataSource::Sample {
                        html! {
                            <button class="primary-btn" onclick={link.callback(|_| Msg::LoadSample)}>
                                { strings.load_sample }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let bounds = model.session.bounds();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input.files().as_ref().map(extract_files).unwrap_or_default();

        input.set_value("");
        Msg::CandidatesSelected(files)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <section class="card upload-card">
            <div class="card-header">
                <h2><i class="fa-solid fa-upload"></i>{" Upload Geospatial Images"}</h2>
            </div>
            <div class="card-body">
                <input
                    type="file"
                    id="file-input"
                    multiple=true
                    accept="image/*"
                    style="display: none;"
                    onchange={handle_change}
                />

                <div
                    id="drop-zone"
                    class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                    ondragover={handle_drag_over}
                    ondragleave={handle_drag_leave}
                    ondrop={handle_drop}
                    onclick={debounce(300, {
                        let trigger_file_input = trigger_file_input.clone();
                        move || trigger_file_input.emit(())
                    })}
                >
                    <div class="upload-placeholder">
                        <i class="fa-solid fa-image"></i>
                        <h3>{"Drop your satellite images here"}</h3>
                        <p>
                            { format!(
                                "Upload {}-{} sequential geospatial images (cloud cover, rainfall maps, etc.) for time-series analysis and prediction.",
                                bounds.min(),
                                bounds.max()
                            ) }
                        </p>
                        <p class="file-types">{"Supported formats: JPG, PNG, WEBP, TIFF • Max size: 10MB per image"}</p>
                    </div>
                    {
                        if model.is_dragging {
                            html! {
                                <div class="drop-overlay">
                                    <span>{"Drop images to upload"}</span>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                { render_upload_error(model) }

                <div class="upload-guides">
                    { render_guide("Optimal Input Guidelines", &[
                        "Sequential time-series images",
                        "Consistent geographic coverage",
                        "High resolution preferred",
                    ]) }
                    { render_guide("Supported Data Types", &[
                        "Cloud cover maps",
                        "Rainfall distribution",
                        "INSAT satellite imagery",
                    ]) }
                </div>
            </div>
        </section>
    }
}

fn render_upload_error(model: &Model) -> Html {
    let Some(IntakeError::CountOutOfRange { min, max, .. }) = model.session.rejection() else {
        return html! {};
    };
    let notice =
        NoticeEvent::InvalidCount { min: *min, max: *max }.render(model.session.prefs.locale);

    html! {
        <div class="upload-error" role="alert">
            <i class="fa-solid fa-circle-exclamation"></i>
            <span>{ notice.body }</span>
        </div>
    }
}

fn render_guide(title: &str, items: &[&str]) -> Html {
    html! {
        <div class="upload-guide">
            <h4>{ title.to_string() }</h4>
            <ul>
                { for items.iter().map(|item| html! { <li>{ item.to_string() }</li> }) }
            </ul>
        </div>
    }
}
