//! Image carousel for a project card.

use appearance::carousel::Carousel;
use leptos::ev;
use leptos::prelude::*;

/// Image slider with arrows, dots, keyboard, and touch-swipe navigation.
///
/// Each slider owns its own [`Carousel`] position; the active image and
/// dot carry an `active` class.
#[component]
pub fn ProjectSlider(
    /// Image URLs, in slide order.
    images: Vec<String>,
    /// Alt text applied to every slide image.
    alt: String,
) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(images.len()));
    let touch_start_x = RwSignal::new(0.0_f64);

    let on_prev = move |_| carousel.update(Carousel::prev);
    let on_next = move |_| carousel.update(Carousel::next);

    let on_keydown = move |event: ev::KeyboardEvent| {
        carousel.update(|state| {
            if state.key(&event.key()) {
                event.prevent_default();
            }
        });
    };

    let on_touchstart = move |event: ev::TouchEvent| {
        if let Some(touch) = event.changed_touches().get(0) {
            touch_start_x.set(f64::from(touch.screen_x()));
        }
    };
    let on_touchend = move |event: ev::TouchEvent| {
        if let Some(touch) = event.changed_touches().get(0) {
            let start = touch_start_x.get_untracked();
            carousel.update(|state| {
                state.swipe(start, f64::from(touch.screen_x()));
            });
        }
    };

    let slides = images
        .iter()
        .enumerate()
        .map(|(index, src)| {
            let is_active = move || carousel.get().current() == index;
            view! {
                <img
                    class="projects__slider-img"
                    class:active=is_active
                    src=src.clone()
                    alt=alt.clone()
                />
            }
        })
        .collect::<Vec<_>>();

    let dots = (0..images.len())
        .map(|index| {
            let is_active = move || carousel.get().current() == index;
            let on_click = move |_| carousel.update(|state| state.go_to(index));
            view! {
                <button
                    class="projects__slider-dot"
                    class:active=is_active
                    on:click=on_click
                    aria-label=format!("Slide {}", index + 1)
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div
            class="projects__slider"
            tabindex="0"
            on:keydown=on_keydown
            on:touchstart=on_touchstart
            on:touchend=on_touchend
        >
            {slides}
            <button class="projects__slider-prev" on:click=on_prev aria-label="Previous image">
                "\u{2039}"
            </button>
            <button class="projects__slider-next" on:click=on_next aria-label="Next image">
                "\u{203a}"
            </button>
            <div class="projects__slider-dots">{dots}</div>
        </div>
    }
}
