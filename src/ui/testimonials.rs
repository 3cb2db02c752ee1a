//! Customer stories carousel
//!
//! Rotates every few seconds until the visitor uses the arrows or dots;
//! from then on the carousel stays where the visitor left it.

use leptos::prelude::*;

use crate::core::catalog::{TESTIMONIALS, Testimonial};
use crate::core::{ShowcaseConfig, ShowcaseDriver, ShowcaseState};
use crate::ui::SiteScheduler;
use crate::ui::icon::{Icon, icons};

type TestimonialDriver = ShowcaseDriver<Testimonial, SiteScheduler>;

#[component]
pub fn TestimonialsSection(
    /// Autoplay timing; defaults to one testimonial every 5s
    #[prop(optional)]
    config: Option<ShowcaseConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let active = RwSignal::new(0usize);
    let driver = StoredValue::new_local(None::<TestimonialDriver>);

    // Effects only run in the browser, so the timer never starts during SSR
    Effect::new(move |_| {
        if driver.with_value(Option::is_some) {
            return;
        }
        let state = ShowcaseState::new(TESTIMONIALS.to_vec(), config);
        let started = ShowcaseDriver::start(state, &SiteScheduler::default(), move |s| {
            active.set(s.active_index())
        });
        driver.set_value(Some(started));
    });

    on_cleanup(move || driver.dispose());

    let navigate = move |nav: fn(&TestimonialDriver)| {
        driver.with_value(|d| {
            if let Some(d) = d {
                nav(d);
            }
        });
    };

    let current = move || TESTIMONIALS[active.get()];

    view! {
        <section class="py-24 bg-muted/30">
            <div class="container mx-auto px-4">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <span class="section-badge">"Customer Stories"</span>
                    <h2 class="section-title">"Trusted by Industry Leaders"</h2>
                    <p class="section-lead">
                        "See how forward-thinking companies are transforming their data strategies with DataWise."
                    </p>
                </div>

                <div class="max-w-4xl mx-auto">
                    <div class="glass rounded-3xl p-8 md:p-12 relative overflow-hidden">
                        <Icon name=icons::QUOTE class="absolute top-6 left-6 w-12 h-12 opacity-10" />
                        {move || view! { <TestimonialCard testimonial=current() /> }}
                    </div>

                    <div class="flex items-center justify-center gap-4 mt-8">
                        <button
                            class="carousel-arrow"
                            aria-label="Previous testimonial"
                            on:click=move |_| navigate(|d| d.previous())
                        >
                            <Icon name=icons::CHEVRON_LEFT />
                        </button>

                        <div class="flex gap-2">
                            {(0..TESTIMONIALS.len()).map(|index| {
                                view! {
                                    <button
                                        class="carousel-dot"
                                        class:carousel-dot-active=move || active.get() == index
                                        aria-label=format!("Go to testimonial {}", index + 1)
                                        on:click=move |_| {
                                            driver.with_value(|d| {
                                                if let Some(d) = d {
                                                    d.go_to(index);
                                                }
                                            })
                                        }
                                    />
                                }
                            }).collect_view()}
                        </div>

                        <button
                            class="carousel-arrow"
                            aria-label="Next testimonial"
                            on:click=move |_| navigate(|d| d.next())
                        >
                            <Icon name=icons::CHEVRON_RIGHT />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="relative z-10 animate-fade-in">
            <div class="flex gap-1 mb-6">
                {(0..testimonial.rating).map(|_| view! {
                    <Icon name=icons::STAR class="w-5 h-5 text-warning" />
                }).collect_view()}
            </div>

            <blockquote class="text-xl md:text-2xl text-foreground leading-relaxed mb-8">
                "\u{201C}"{testimonial.quote}"\u{201D}"
            </blockquote>

            <div class="flex flex-col md:flex-row md:items-center justify-between gap-6">
                <div class="flex items-center gap-4">
                    <div class="avatar">{testimonial.avatar}</div>
                    <div>
                        <div class="font-semibold text-foreground">{testimonial.author}</div>
                        <div class="text-sm text-muted-foreground">
                            {testimonial.role}", "{testimonial.company}
                        </div>
                        <div class="text-xs text-primary mt-1">{testimonial.industry}</div>
                    </div>
                </div>

                <div class="text-center md:text-right">
                    <div class="text-3xl font-bold gradient-text">{testimonial.stat_value}</div>
                    <div class="text-sm text-muted-foreground">{testimonial.stat_label}</div>
                </div>
            </div>
        </div>
    }
}
