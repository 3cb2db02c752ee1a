//! Platform stack selector: a numbered list of layers next to the details
//! of the selected one

use leptos::prelude::*;

use crate::core::Selection;
use crate::core::catalog::{PLATFORM_LAYERS, PlatformLayer, active_id};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ArchitectureSection() -> impl IntoView {
    let ids: Vec<&'static str> = PLATFORM_LAYERS.iter().map(|layer| layer.id).collect();
    let selection = RwSignal::new(Selection::single(PLATFORM_LAYERS[0].id));

    let active = Memo::new(move |_| {
        selection.with(|s| {
            active_id(s, &ids).and_then(|id| PLATFORM_LAYERS.iter().find(|layer| layer.id == id))
        })
    });

    view! {
        <section class="py-24 bg-background overflow-hidden">
            <div class="container mx-auto px-4">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <span class="section-badge">"Platform Architecture"</span>
                    <h2 class="section-title">"5-Layer Intelligence Stack"</h2>
                    <p class="section-lead">
                        "Our modular architecture integrates identity, consent, analytics, AI and quality scoring into one unified platform."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-3" role="tablist" aria-orientation="vertical">
                        {PLATFORM_LAYERS.iter().enumerate().map(|(index, layer)| {
                            let id = layer.id;
                            let is_active = Signal::derive(move || selection.with(|s| s.is_selected(id)));

                            view! {
                                <button
                                    class="layer-button"
                                    class:layer-active=move || is_active.get()
                                    role="tab"
                                    aria-selected=move || is_active.get().to_string()
                                    on:click=move |_| selection.update(|s| s.select_only(id))
                                >
                                    <span class="layer-number">{index + 1}</span>
                                    <span class="flex-1 text-left">
                                        <span class="flex items-center gap-2 font-semibold">
                                            <Icon name=layer.icon class="w-4 h-4" />
                                            {layer.name}
                                        </span>
                                        <span class="block text-sm text-muted-foreground">{layer.description}</span>
                                    </span>
                                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <div class="lg:pl-8">
                        {move || active.get().map(|&layer| view! { <LayerDetail layer=layer /> })}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn LayerDetail(layer: PlatformLayer) -> impl IntoView {
    view! {
        <div class="glass rounded-2xl p-8 animate-fade-in" role="tabpanel">
            <div class="flex items-center gap-4 mb-6">
                <div class="w-16 h-16 rounded-2xl bg-primary/10 flex items-center justify-center">
                    <Icon name=layer.icon class="w-8 h-8" />
                </div>
                <div>
                    <h3 class="text-2xl font-bold text-foreground">{layer.name}</h3>
                    <p class="text-muted-foreground">{layer.description}</p>
                </div>
            </div>

            <p class="text-sm font-medium text-foreground mb-3">"Key Capabilities:"</p>
            <ul class="space-y-3">
                {layer.features.iter().map(|&feature| view! {
                    <li class="flex items-center gap-3 p-3 rounded-lg bg-accent/50">
                        <Icon name=icons::CHECK class="w-4 h-4" />
                        <span class="text-foreground">{feature}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
