use super::super::{Model, Msg};
use shared::{Locale, Route};
use strum::IntoEnumIterator;
use yew::prelude::*;

const ISRO_LOGO: &str = "https://www.isro.gov.in/themes/custom/isro/images/isro-logo.png";
const ISRO_LOGO_FALLBACK: &str =
    "https://upload.wikimedia.org/wikipedia/commons/b/bd/Indian_Space_Research_Organisation_Logo.svg";

/// Font-size stepper and language switch, shared by both pages.
pub fn render_display_controls(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let prefs = &model.session.prefs;
    let strings = prefs.locale.app();

    html! {
        <div class="display-controls">
            <div class="font-controls">
                <button
                    class="font-btn"
                    onclick={link.callback(|_| Msg::DecreaseFont)}
                    disabled={!prefs.can_decrease_font()}
                >
                    <i class="fa-solid fa-minus"></i>{" A-"}
                </button>
                <span class="divider">{"|"}</span>
                <button
                    class="font-btn"
                    onclick={link.callback(|_| Msg::IncreaseFont)}
                    disabled={!prefs.can_increase_font()}
                >
                    <i class="fa-solid fa-plus"></i>{" A+"}
                </button>
            </div>
            <div class="locale-toggle">
                { for Locale::iter().map(|locale| {
                    let label = match locale {
                        Locale::En => strings.english,
                        Locale::Hi => strings.hindi,
                    };
                    html! {
                        <button
                            class={classes!("locale-btn", (prefs.locale == locale).then_some("active"))}
                            onclick={link.callback(move |_| Msg::SetLocale(locale))}
                        >
                            { label }
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

/// Renders the forecast page header
pub fn render_header(model: &Model, ctx: &Context<Model>) -> Html {
    let strings = model.session.prefs.locale.app();
    let go_home = ctx.link().callback(|e: MouseEvent| {
        e.prevent_default();
        Msg::Navigate(Route::Landing)
    });
    let logo_fallback = Callback::from(|e: Event| {
        let img: web_sys::HtmlImageElement = e.target_unchecked_into();
        if img.src() != ISRO_LOGO_FALLBACK {
            img.set_src(ISRO_LOGO_FALLBACK);
        }
    });

    html! {
        <header class="app-header">
            <div class="gov-bar">
                <div class="container gov-bar-inner">
                    <div class="gov-identity">
                        <img class="gov-logo" src={ISRO_LOGO} alt="ISRO Logo" onerror={logo_fallback} />
                        <div>
                            <div class="gov-name">{ strings.gov_india }</div>
                            <div class="gov-name-hi">{ strings.gov_india_hi }</div>
                        </div>
                    </div>
                    { render_display_controls(model, ctx) }
                </div>
            </div>
            <nav class="nav-bar">
                <div class="container nav-bar-inner">
                    <div class="nav-left">
                        <a class="nav-home" href={Route::Landing.path()} onclick={go_home}>
                            <i class="fa-solid fa-house"></i>
                            <span>{ strings.home_nav }</span>
                        </a>
                        <div class="nav-title">
                            <i class="fa-solid fa-satellite"></i>
                            <div>
                                <h1>{ strings.title }</h1>
                                <p class="subtitle">{ strings.subtitle }</p>
                            </div>
                        </div>
                    </div>
                    <span class="badge badge-light">
                        <i class="fa-solid fa-bolt"></i>{" "}{ strings.diffusion_models }
                    </span>
                </div>
            </nav>
        </header>
    }
}
