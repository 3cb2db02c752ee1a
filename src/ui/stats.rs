//! Platform metrics section with counters that animate on first view

use leptos::html;
use leptos::prelude::*;

use crate::core::catalog::{STATS, Stat};
use crate::core::{CounterConfig, format_counter};

/// Number that counts up from zero the first time it scrolls into view
#[component]
pub fn AnimatedCounter(
    /// Final value
    value: f64,
    /// Unit appended after the number
    #[prop(default = "")]
    suffix: &'static str,
    /// Animation timing; defaults to 2s in 60 steps
    #[prop(optional)]
    config: Option<CounterConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let display = RwSignal::new(format_counter(0.0, value, config.decimal_threshold));
    let node_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::core::{BrowserScheduler, CounterDriver};
        use crate::ui::visibility::VisibilityObserver;
        use std::rc::Rc;

        // Dropping this releases the observer first, then the step timer
        struct Mounted {
            _observer: Option<VisibilityObserver>,
            _driver: Rc<CounterDriver<BrowserScheduler>>,
        }

        let mounted = StoredValue::new_local(None::<Mounted>);

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if mounted.with_value(Option::is_some) {
                return;
            }

            let driver = Rc::new(CounterDriver::new(
                value,
                config,
                BrowserScheduler,
                move |state| display.set(state.display()),
            ));

            let observed = Rc::clone(&driver);
            let observer = match VisibilityObserver::observe(
                &element,
                config.visibility_threshold,
                move |visible| observed.observe(visible),
            ) {
                Ok(observer) => Some(observer),
                Err(err) => {
                    leptos::logging::warn!("visibility observer unavailable: {:?}", err);
                    driver.observe(true);
                    None
                }
            };

            mounted.set_value(Some(Mounted {
                _observer: observer,
                _driver: driver,
            }));
        });

        on_cleanup(move || mounted.dispose());
    }

    view! {
        <div node_ref=node_ref class="text-4xl md:text-5xl font-bold gradient-text">
            {move || display.get()}
            {suffix}
        </div>
    }
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat-card hover-lift text-center">
            <AnimatedCounter value=stat.value suffix=stat.suffix />
            <p class="font-medium text-foreground mt-2 mb-1">{stat.label}</p>
            <p class="text-xs text-muted-foreground">{stat.description}</p>
        </div>
    }
}

/// Grid of platform metrics
#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="py-24 bg-background relative overflow-hidden">
            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <span class="section-badge">"Platform Metrics"</span>
                    <h2 class="section-title">"Powering Enterprise Intelligence"</h2>
                    <p class="section-lead">
                        "Real numbers that demonstrate our commitment to performance, reliability, and customer success."
                    </p>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-6">
                    {STATS.iter().map(|&stat| view! { <StatCard stat=stat /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
