//! Demo request page

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::ui::DemoWizard;
use crate::ui::icon::{Icon, icons};

/// What visitors get out of the demo call
const BENEFITS: &[&str] = &[
    "A walkthrough tailored to your industry",
    "Live Q&A with a solutions engineer",
    "A custom ROI estimate for your team",
];

#[component]
pub fn DemoPage() -> impl IntoView {
    view! {
        <Title text="Request a Demo - DataWise" />
        <Meta
            name="description"
            content="Schedule a personalized DataWise demo and see how your team can turn data into decisions."
        />

        <div class="min-h-screen bg-background">
            <header class="container mx-auto px-4 py-6">
                <A href="/" attr:class="btn-ghost inline-flex items-center gap-2">
                    <Icon name=icons::HOME class="w-4 h-4" />
                    "DataWise"
                </A>
            </header>

            <section class="pt-12 pb-16 hero-gradient">
                <div class="container mx-auto px-4 text-center max-w-3xl">
                    <span class="section-badge">"Free Personalized Demo"</span>
                    <h1 class="text-4xl md:text-5xl font-bold text-foreground mb-6">
                        "See DataWise "<span class="gradient-text">"in Action"</span>
                    </h1>
                    <p class="section-lead">
                        "Tell us a little about your team and we'll tailor a 30-minute session to your goals."
                    </p>
                    <ul class="flex flex-col md:flex-row justify-center gap-4 mt-8">
                        {BENEFITS.iter().map(|&benefit| view! {
                            <li class="inline-flex items-center gap-2 text-sm text-muted-foreground">
                                <Icon name=icons::CHECK class="w-4 h-4 text-success" />
                                {benefit}
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </section>

            <DemoWizard />
        </div>
    }
}
