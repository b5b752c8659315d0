//! Customer testimonial carousel.
//!
//! DESIGN
//! ======
//! Slide position lives in a `Carousel` value. A polling task advances it
//! every `AUTOPLAY_INTERVAL_MS` while auto-play is on; any manual navigation
//! turns auto-play off and the task exits on its next wake.

use leptos::prelude::*;

use super::SectionHeader;
use crate::catalog::showcase::TESTIMONIALS;
use crate::components::icon::{Icon, IconKind};
use crate::components::rating_stars::RatingStars;
use crate::util::carousel::{Carousel, Direction};

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    crate::util::carousel::AUTOPLAY_INTERVAL_MS,
                ))
                .await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if !carousel.get_untracked().autoplay() {
                    break;
                }
                carousel.update(Carousel::tick);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let current = move || TESTIMONIALS[carousel.get().index()];
    let on_prev = move |_| carousel.update(|c| c.navigate(Direction::Prev));
    let on_next = move |_| carousel.update(|c| c.navigate(Direction::Next));

    let dots = (0..TESTIMONIALS.len())
        .map(|i| {
            let class = move || if carousel.get().index() == i { "dot dot--active" } else { "dot" };
            view! {
                <button
                    class=class
                    aria-label=format!("Show testimonial {}", i + 1)
                    on:click=move |_| carousel.update(|c| c.jump(i))
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="testimonials" class="section section--dark">
            <div class="section__glow"></div>
            <div class="container">
                <SectionHeader
                    eyebrow="Testimonials"
                    title="What Our Customers Say"
                    lead="Real experiences from our valued customers"
                    dark=true
                />
                <div class="testimonial">
                    <div class="testimonial__quote-mark">
                        <Icon kind=IconKind::Quote/>
                    </div>
                    {move || {
                        let t = current();
                        view! {
                            <div class="testimonial__card">
                                <RatingStars filled=t.rating large=true/>
                                <p class="testimonial__text">{format!("\"{}\"", t.text)}</p>
                                <div class="testimonial__author">
                                    <img class="avatar" src=t.image alt=t.name/>
                                    <h4>{t.name}</h4>
                                    <p class="muted">{t.role}</p>
                                </div>
                            </div>
                        }
                    }}
                    <button class="carousel-nav carousel-nav--prev" on:click=on_prev aria-label="Previous testimonial">
                        <Icon kind=IconKind::ChevronLeft/>
                    </button>
                    <button class="carousel-nav carousel-nav--next" on:click=on_next aria-label="Next testimonial">
                        <Icon kind=IconKind::ChevronRight/>
                    </button>
                </div>
                <div class="dots">{dots}</div>
            </div>
        </section>
    }
}
