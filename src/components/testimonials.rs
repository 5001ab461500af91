use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use yew::prelude::*;

use crate::carousel::{CarouselController, Step, Testimonial};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct AnimatedTestimonialsProps {
    pub testimonials: Rc<[Testimonial]>,
    #[prop_or(false)]
    pub autoplay: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Reducer wrapper; `None` when the list handed in was empty.
#[derive(PartialEq)]
struct CarouselModel(Option<CarouselController>);

impl Reducible for CarouselModel {
    type Action = Step;

    fn reduce(self: Rc<Self>, step: Step) -> Rc<Self> {
        match self.0.clone() {
            Some(mut controller) => {
                controller.apply(step);
                Rc::new(Self(Some(controller)))
            }
            None => self,
        }
    }
}

#[function_component(AnimatedTestimonials)]
pub fn animated_testimonials(props: &AnimatedTestimonialsProps) -> Html {
    let carousel = {
        let testimonials = props.testimonials.clone();
        let autoplay = props.autoplay;
        use_reducer(move || {
            let controller = CarouselController::new(testimonials, autoplay, js_sys::Math::random)
                .map_err(|err| warn!("testimonials not rendered: {}", err))
                .ok();
            CarouselModel(controller)
        })
    };

    let auto_advance = carousel
        .0
        .as_ref()
        .map_or(false, CarouselController::auto_advance);

    // Autoplay timer lives exactly as long as this effect
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |auto_advance: &bool| {
                let interval = auto_advance.then(move || {
                    debug!("starting testimonial autoplay");
                    autoplay_timer(config::AUTOPLAY_INTERVAL_MS, move |step| carousel.dispatch(step))
                });

                move || drop(interval)
            },
            auto_advance,
        );
    }

    let Some(controller) = carousel.0.as_ref() else {
        return html! {};
    };

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(Step::Previous))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(Step::Next))
    };

    let active = controller.active();
    let active_key = controller.active_index().to_string();

    html! {
        <div class={classes!("testimonials", props.class.clone())}>
            <style>
                {r#"
                    .testimonials {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 5rem 1rem;
                    }
                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 5rem;
                    }
                    .testimonial-stack {
                        position: relative;
                        height: 20rem;
                        width: 100%;
                    }
                    .testimonial-card {
                        position: absolute;
                        inset: 0;
                        transform-origin: bottom;
                        transition: opacity 0.4s ease-in-out, transform 0.4s ease-in-out;
                    }
                    .testimonial-card.active {
                        animation: testimonialBounce 0.4s ease-in-out;
                    }
                    .testimonial-card img {
                        height: 100%;
                        width: 100%;
                        border-radius: 1.5rem;
                        object-fit: cover;
                        object-position: center;
                    }
                    .testimonial-body {
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        padding: 1rem 0;
                    }
                    .testimonial-fade {
                        animation: testimonialIn 0.2s ease-in-out;
                    }
                    .testimonial-word {
                        display: inline-block;
                        opacity: 0;
                        animation: wordIn 0.2s ease-in-out forwards;
                    }
                    .testimonial-controls {
                        display: flex;
                        gap: 1rem;
                        padding-top: 3rem;
                    }
                    .testimonial-controls button {
                        height: 1.75rem;
                        width: 1.75rem;
                        border-radius: 9999px;
                        border: none;
                        cursor: pointer;
                    }
                    @keyframes testimonialBounce {
                        0% { translate: 0 0; }
                        50% { translate: 0 -80px; }
                        100% { translate: 0 0; }
                    }
                    @keyframes testimonialIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes wordIn {
                        from { filter: blur(10px); opacity: 0; transform: translateY(5px); }
                        to { filter: blur(0); opacity: 1; transform: translateY(0); }
                    }
                    @media (min-width: 768px) {
                        .testimonials-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                        .testimonial-controls {
                            padding-top: 0;
                        }
                    }
                "#}
            </style>
            <div class="testimonials-grid">
                <div class="testimonial-stack">
                    { for controller.testimonials().iter().enumerate().map(|(index, testimonial)| {
                        let pose = controller.pose(index);
                        let style = format!(
                            "opacity: {}; transform: scale({}) rotate({}deg); z-index: {};",
                            pose.opacity, pose.scale, pose.rotate_deg, pose.z_index
                        );
                        html! {
                            <div
                                key={card_key(index, testimonial)}
                                class={classes!("testimonial-card", controller.is_active(index).then_some("active"))}
                                style={style}
                            >
                                <img src={testimonial.image_ref.clone()} alt={testimonial.name.clone()} />
                            </div>
                        }
                    }) }
                </div>
                <div class="testimonial-body">
                    <div class="testimonial-text">
                        <div class="testimonial-fade" key={active_key}>
                            <h3 class="testimonial-name">{&active.name}</h3>
                            <p class="testimonial-designation">{&active.designation}</p>
                            <p class="testimonial-quote">
                                { for quote_words(&active.quote).map(|(word, delay)| html! {
                                    <span class="testimonial-word" style={format!("animation-delay: {:.2}s;", delay)}>
                                        {word}{"\u{00a0}"}
                                    </span>
                                }) }
                            </p>
                        </div>
                    </div>
                    <div class="testimonial-controls">
                        <button onclick={on_prev} aria-label="Previous testimonial">{"‹"}</button>
                        <button onclick={on_next} aria-label="Next testimonial">{"›"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Steps the carousel forward every `period_ms` until the returned timer
/// is dropped.
fn autoplay_timer(period_ms: u32, advance: impl Fn(Step) + 'static) -> Interval {
    Interval::new(period_ms, move || advance(Step::Next))
}

// Callers may reuse a photo, so the position is part of the key.
fn card_key(index: usize, testimonial: &Testimonial) -> String {
    format!("{}-{}", index, testimonial.image_ref)
}

/// Words of a quote paired with their fade-in delay in seconds.
fn quote_words(quote: &str) -> impl Iterator<Item = (&str, f64)> {
    quote
        .split_whitespace()
        .enumerate()
        .map(|(index, word)| (word, 0.02 * index as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_staggered() {
        let words: Vec<_> = quote_words("Spotless  floors every\tnight").collect();
        assert_eq!(words.len(), 4);
        assert_eq!(words[0], ("Spotless", 0.0));
        assert_eq!(words[1].0, "floors");
        assert!((words[3].1 - 0.06).abs() < 1e-9);
    }

    #[test]
    fn shared_photos_still_get_distinct_keys() {
        let list = [
            Testimonial::new("Great.", "Ana", "Owner", "/team.jpg"),
            Testimonial::new("Reliable.", "Ben", "Manager", "/team.jpg"),
            Testimonial::new("Spotless.", "Cy", "Director", "/team.jpg"),
        ];
        let mut keys: Vec<_> = list.iter().enumerate().map(|(i, t)| card_key(i, t)).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), list.len());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    async fn dropped_autoplay_timer_stops_advancing() {
        let ticks = Rc::new(Cell::new(0));
        let timer = {
            let ticks = ticks.clone();
            autoplay_timer(10, move |step| {
                assert_eq!(step, Step::Next);
                ticks.set(ticks.get() + 1);
            })
        };

        TimeoutFuture::new(55).await;
        drop(timer);
        let advanced = ticks.get();
        assert!(advanced > 0);

        TimeoutFuture::new(55).await;
        assert_eq!(ticks.get(), advanced);
    }
}
