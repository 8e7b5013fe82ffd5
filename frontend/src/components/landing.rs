use super::super::{Model, Msg};
use super::header::render_display_controls;
use shared::Route;
use shared::i18n::{TEAM, TeamRole, initials};
use yew::prelude::*;

const ISRO_LOGO: &str =
    "https://upload.wikimedia.org/wikipedia/commons/b/bd/Indian_Space_Research_Organisation_Logo.svg";

const ABOUT_CARDS: [(&str, &str, &str); 3] = [
    (
        "fa-solid fa-satellite",
        "INSAT-3DR/3DS Imagery",
        "Multi-spectral geostationary observations over the Indian subcontinent as model input.",
    ),
    (
        "fa-solid fa-brain",
        "Diffusion Models",
        "Spatio-temporal generative learning that simulates realistic cloud evolution.",
    ),
    (
        "fa-solid fa-cloud-bolt",
        "Nowcasting",
        "Short-term (0-3 hour) forecasts and early warnings for severe weather events.",
    ),
];

pub fn render_landing(model: &Model, ctx: &Context<Model>) -> Html {
    let app = model.session.prefs.locale.app();
    let strings = model.session.prefs.locale.landing();
    let launch = ctx.link().callback(|e: MouseEvent| {
        e.prevent_default();
        Msg::Navigate(Route::Forecast)
    });

    html! {
        <div class="landing">
            <nav class="gov-bar">
                <div class="container gov-bar-inner">
                    <div class="gov-identity">
                        <img class="gov-logo" src={ISRO_LOGO} alt="ISRO Logo" />
                        <div>
                            <div class="gov-name">{ app.gov_india }</div>
                            <div class="gov-name-hi">{ app.gov_india_hi }</div>
                        </div>
                    </div>
                    { render_display_controls(model, ctx) }
                </div>
            </nav>

            <section class="hero">
                <div class="container hero-inner">
                    <p class="hero-team">{ strings.team_name }</p>
                    <span class="badge badge-light">
                        <i class="fa-solid fa-trophy"></i>{" "}{ strings.hackathon_title }
                    </span>
                    <h1 class="hero-title">{ strings.project_title }</h1>
                    <a class="primary-btn hero-cta" href={Route::Forecast.path()} onclick={launch}>
                        <i class="fa-solid fa-rocket"></i>{" "}{ strings.launch_app }
                    </a>
                </div>
            </section>

            <main class="container">
                <section class="card">
                    <div class="card-header">
                        <h2><i class="fa-solid fa-circle-info"></i>{" "}{ strings.about_title }</h2>
                    </div>
                    <div class="card-body">
                        <p class="project-description">{ strings.project_description }</p>
                        <div class="about-grid">
                            { for ABOUT_CARDS.iter().map(|(icon, title, body)| html! {
                                <div class="about-card">
                                    <i class={*icon}></i>
                                    <h3>{ *title }</h3>
                                    <p>{ *body }</p>
                                </div>
                            })}
                        </div>
                    </div>
                </section>

                <section class="card">
                    <div class="card-header">
                        <h2><i class="fa-solid fa-users"></i>{" "}{ strings.team_title }</h2>
                    </div>
                    <div class="card-body">
                        <p class="team-description">{ strings.team_description }</p>
                        <h3>{ strings.team_members }</h3>
                        <div class="team-grid">
                            { for TEAM.iter().map(|(name, role)| render_member(name, *role, role.label(strings))) }
                        </div>
                    </div>
                </section>
            </main>

            <footer class="landing-footer">
                <div class="container">
                    <p>{ app.powered_by }</p>
                    <p class="footer-secondary">{ format!("{} • {}", strings.team_name, strings.hackathon_title) }</p>
                </div>
            </footer>
        </div>
    }
}

fn render_member(name: &str, role: TeamRole, role_label: &str) -> Html {
    html! {
        <div class="team-member" key={name.to_string()}>
            <div class="avatar">
                { initials(name) }
                {
                    if role == TeamRole::Lead {
                        html! { <span class="avatar-badge">{"TL"}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <p class="member-name">{ name.to_string() }</p>
            <p class="member-role">{ role_label.to_string() }</p>
        </div>
    }
}
