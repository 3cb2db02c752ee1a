//! Home page component
//!
//! Hero, platform metrics, the platform stack, the industry switcher and
//! customer stories.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::{ArchitectureSection, IndustriesSection, StatsSection, TestimonialsSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="DataWise - Enterprise Data Intelligence" />
        <Meta
            name="description"
            content="DataWise turns enterprise data into decisions with real-time analytics, predictive models and industry-ready dashboards."
        />
        <Meta property="og:title" content="DataWise - Enterprise Data Intelligence" />

        <div class="min-h-screen bg-background overflow-x-hidden">
            <section class="min-h-[80vh] flex items-center justify-center relative pt-16 hero-gradient">
                <div class="text-center px-4 max-w-4xl mx-auto">
                    <span class="section-badge animate-fade-in">"AI-Powered Analytics"</span>
                    <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-foreground mb-6 tracking-tight animate-fade-in">
                        "Transform Data Into "
                        <span class="gradient-text">"Decisions"</span>
                    </h1>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto mb-10 leading-relaxed">
                        "Unify your data, predict what comes next and act in real time with an analytics platform built for the enterprise."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A href="/demo" attr:class="btn-primary inline-flex items-center gap-2">
                            "Request a Demo"
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                        </A>
                        <a href="#industries" class="btn-ghost">"Explore Solutions"</a>
                    </div>
                </div>
            </section>

            <StatsSection />
            <ArchitectureSection />
            <div id="industries">
                <IndustriesSection />
            </div>
            <TestimonialsSection />

            <section class="py-24 bg-background">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="section-title">"Ready to See DataWise in Action?"</h2>
                    <p class="section-lead mb-8">
                        "Book a personalized walkthrough with our solutions team."
                    </p>
                    <A href="/demo" attr:class="btn-primary inline-flex items-center gap-2">
                        "Schedule Your Demo"
                        <Icon name=icons::CALENDAR class="w-5 h-5" />
                    </A>
                </div>
            </section>

            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-border">
            <p class="text-center text-sm text-muted-foreground">"© 2025 DataWise"</p>
        </footer>
    }
}
