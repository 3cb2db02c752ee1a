use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::Selection;
use crate::core::catalog::{INDUSTRIES, Industry};
use crate::ui::common::{TabItem, TabPanel, Tabs};
use crate::ui::icon::{Icon, icons};

/// Industry switcher on the home page; one tab is always active
#[component]
pub fn IndustriesSection() -> impl IntoView {
    let selection = RwSignal::new(Selection::single(INDUSTRIES[0].id));
    let tabs = INDUSTRIES
        .iter()
        .map(|industry| TabItem::new(industry.id, industry.name).with_icon(industry.icon))
        .collect::<Vec<_>>();

    view! {
        <section class="py-24 bg-background">
            <div class="container mx-auto px-4">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <span class="section-badge">"Industry Solutions"</span>
                    <h2 class="section-title">"Built for Every Industry"</h2>
                    <p class="section-lead">
                        "Tailored solutions that address the unique challenges and opportunities in your industry vertical."
                    </p>
                </div>

                <Tabs tabs=tabs selection=selection class="justify-center mb-12" />

                {INDUSTRIES.iter().map(|&industry| view! {
                    <TabPanel tab_id=industry.id selection=selection>
                        <IndustryDetail industry=industry />
                    </TabPanel>
                }).collect_view()}
            </div>
        </section>
    }
}

/// Description, benefits checklist and headline stat of one industry
#[component]
pub fn IndustryDetail(
    industry: Industry,
    /// Leave out the link to the industry page (used on that page itself)
    #[prop(optional)]
    hide_link: bool,
) -> impl IntoView {
    view! {
        <div class="grid lg:grid-cols-2 gap-12 items-center">
            <div>
                <div class="flex items-center gap-4 mb-6">
                    <div class="w-16 h-16 rounded-2xl bg-primary/10 flex items-center justify-center">
                        <Icon name=industry.icon class="w-8 h-8" />
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold text-foreground">{industry.name}</h3>
                        <p class="text-muted-foreground">{industry.description}</p>
                    </div>
                </div>

                <ul class="space-y-3 mb-8">
                    {industry.benefits.iter().map(|&benefit| view! {
                        <li class="flex items-center gap-3 p-3 rounded-lg bg-card border border-border">
                            <span class="w-6 h-6 rounded-full bg-success/10 flex items-center justify-center">
                                <Icon name=icons::CHECK class="w-3 h-3" />
                            </span>
                            <span class="text-foreground">{benefit}</span>
                        </li>
                    }).collect_view()}
                </ul>

                <div class="p-4 rounded-xl bg-primary/5 border border-primary/20 mb-6">
                    <p class="text-3xl font-bold gradient-text">{industry.stat_value}</p>
                    <p class="text-muted-foreground">{industry.stat_label}</p>
                </div>

                {(!hide_link).then(|| view! {
                    <A href=industry.href attr:class="btn-primary inline-flex items-center gap-2">
                        "Explore "{industry.name}" Solutions"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </A>
                })}
            </div>

            <div class="glass rounded-2xl p-8">
                <div class="aspect-video rounded-xl border border-border flex flex-col items-center justify-center">
                    <Icon name=industry.icon class="w-20 h-20 opacity-30 mb-4" />
                    <p class="text-lg font-medium text-foreground">{industry.name}</p>
                    <p class="text-sm text-muted-foreground">"Interactive dashboard preview"</p>
                </div>
            </div>
        </div>
    }
}
