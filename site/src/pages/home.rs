//! The single portfolio page: home, about, services, projects,
//! testimonials, and contact sections.

use leptos::prelude::*;

use crate::components::project_slider::ProjectSlider;
use crate::state::i18n::I18nState;

/// Project card definition: translation keys plus slider images.
struct Project {
    title_key: &'static str,
    desc_key: &'static str,
    alt: &'static str,
    images: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title_key: "projects.dashboard.title",
        desc_key: "projects.dashboard.desc",
        alt: "Analytics dashboard screenshots",
        images: &[
            "/assets/img/projects/dashboard-1.webp",
            "/assets/img/projects/dashboard-2.webp",
            "/assets/img/projects/dashboard-3.webp",
        ],
    },
    Project {
        title_key: "projects.storefront.title",
        desc_key: "projects.storefront.desc",
        alt: "Storefront screenshots",
        images: &[
            "/assets/img/projects/storefront-1.webp",
            "/assets/img/projects/storefront-2.webp",
            "/assets/img/projects/storefront-3.webp",
        ],
    },
    Project {
        title_key: "projects.notes.title",
        desc_key: "projects.notes.desc",
        alt: "Note-taking app screenshots",
        images: &[
            "/assets/img/projects/notes-1.webp",
            "/assets/img/projects/notes-2.webp",
        ],
    },
];

const SERVICE_KEYS: &[(&str, &str)] = &[
    ("services.web.title", "services.web.desc"),
    ("services.design.title", "services.design.desc"),
    ("services.mobile.title", "services.mobile.desc"),
];

const TESTIMONIAL_KEYS: &[(&str, &str)] = &[
    ("testimonials.first.quote", "testimonials.first.author"),
    ("testimonials.second.quote", "testimonials.second.author"),
    ("testimonials.third.quote", "testimonials.third.author"),
    ("testimonials.fourth.quote", "testimonials.fourth.author"),
];

/// One pass over the testimonial cards.
///
/// The marquee track renders the set twice; when the CSS animation
/// reaches -50% the cloned set lines up with the original for a seamless
/// loop.
fn testimonial_cards(i18n: RwSignal<I18nState>) -> impl IntoView {
    TESTIMONIAL_KEYS
        .iter()
        .map(|&(quote_key, author_key)| {
            view! {
                <figure class="testimonials__card">
                    <blockquote>{move || i18n.with(|state| state.t(quote_key))}</blockquote>
                    <figcaption>{move || i18n.with(|state| state.t(author_key))}</figcaption>
                </figure>
            }
        })
        .collect::<Vec<_>>()
}

/// The portfolio page body.
#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = expect_context::<RwSignal<I18nState>>();
    let t = move |key: &'static str| i18n.with(|state| state.t(key));

    let services = SERVICE_KEYS
        .iter()
        .map(|&(title_key, desc_key)| {
            view! {
                <article class="services__card">
                    <h3 class="services__title">{move || t(title_key)}</h3>
                    <p class="services__description">{move || t(desc_key)}</p>
                </article>
            }
        })
        .collect::<Vec<_>>();

    let projects = PROJECTS
        .iter()
        .map(|project| {
            let title_key = project.title_key;
            let desc_key = project.desc_key;
            let images = project.images.iter().map(|src| (*src).to_owned()).collect::<Vec<_>>();
            view! {
                <article class="projects__card">
                    <ProjectSlider images=images alt=project.alt.to_owned()/>
                    <h3 class="projects__title">{move || t(title_key)}</h3>
                    <p class="projects__description">{move || t(desc_key)}</p>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <main class="main">
            <section class="home section" id="home">
                <div class="home__container container">
                    <h1 class="home__name">{move || t("home.name")}</h1>
                    <p class="home__info">{move || t("home.info")}</p>
                </div>
            </section>

            <section class="about section" id="about">
                <h2 class="section__title-1">{move || t("about.title")}</h2>
                <div class="about__container container">
                    <p class="about__info">{move || t("about.info")}</p>
                </div>
            </section>

            <section class="services section" id="services">
                <h2 class="section__title-1">{move || t("services.title")}</h2>
                <div class="services__container container">{services}</div>
            </section>

            <section class="projects section" id="projects">
                <h2 class="section__title-1">{move || t("projects.title")}</h2>
                <div class="projects__container container">{projects}</div>
            </section>

            <section class="testimonials section" id="testimonials">
                <h2 class="section__title-1">{move || t("testimonials.title")}</h2>
                <div class="testimonials__gallery">
                    <div class="testimonials__track">
                        {testimonial_cards(i18n)}
                        {testimonial_cards(i18n)}
                    </div>
                </div>
            </section>

            <section class="contact section" id="contact">
                <h2 class="section__title-1">{move || t("contact.title")}</h2>
                <div class="contact__container container">
                    <p class="contact__data">{move || t("contact.info")}</p>
                    <a class="contact__mail" href="mailto:hello@example.dev">
                        "hello@example.dev"
                    </a>
                </div>
            </section>
        </main>
    }
}
