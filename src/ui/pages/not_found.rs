//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::ui::icon::{Icon, icons};

fn missing_route_message(path: &str) -> String {
    format!("404 Error: User attempted to access non-existent route: {}", path)
}

#[cfg(feature = "hydrate")]
fn history_back() {
    if let Ok(history) = window().history() {
        let _ = history.back();
    }
}

#[cfg(not(feature = "hydrate"))]
fn history_back() {}

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        leptos::logging::error!("{}", missing_route_message(&location.pathname.get()));
    });

    view! {
        <Title text="Page Not Found - DataWise" />

        <div class="min-h-screen bg-background flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-muted rounded-full flex items-center justify-center">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12 text-muted-foreground" />
                </div>

                <h1 class="text-6xl font-bold gradient-text mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-foreground mb-2">"Page Not Found"</h2>
                <p class="text-muted-foreground mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="btn-primary inline-flex items-center gap-2">
                        <Icon name=icons::HOME class="w-4 h-4" />
                        "Go Home"
                    </A>
                    <button class="btn-ghost inline-flex items-center gap-2" on:click=move |_| history_back()>
                        <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_route_message_names_path() {
        assert_eq!(
            missing_route_message("/pricing"),
            "404 Error: User attempted to access non-existent route: /pricing"
        );
    }
}
