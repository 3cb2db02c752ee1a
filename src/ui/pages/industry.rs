//! Industry solution page at `/industries/{id}`

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::catalog::industry;
use crate::ui::icon::{Icon, icons};
use crate::ui::industries::IndustryDetail;
use crate::ui::pages::NotFoundPage;

#[component]
pub fn IndustryPage() -> impl IntoView {
    let params = use_params_map();
    let industry_id = Memo::new(move |_| params.get().get("id").unwrap_or_default());

    move || match industry(&industry_id.get()) {
        Some(&industry) => view! {
            <Title text=format!("{} - DataWise", industry.name) />

            <div class="min-h-screen bg-background">
                <header class="container mx-auto px-4 py-6">
                    <A href="/" attr:class="btn-ghost inline-flex items-center gap-2">
                        <Icon name=icons::HOME class="w-4 h-4" />
                        "DataWise"
                    </A>
                </header>

                <section class="py-16">
                    <div class="container mx-auto px-4">
                        <span class="section-badge">"Industry Solutions"</span>
                        <IndustryDetail industry=industry hide_link=true />
                    </div>
                </section>

                <section class="py-16 text-center">
                    <A href="/demo" attr:class="btn-primary inline-flex items-center gap-2">
                        "Request a Demo"
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                    </A>
                </section>
            </div>
        }
        .into_any(),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}
