//! Inputs rendered from a declared [`FieldSpec`]

use crate::core::{FieldKind, FieldSpec, Selection};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[component]
fn FieldLabel(label: &'static str, required: bool) -> impl IntoView {
    view! {
        <label class="label">
            {label}
            {required.then(|| view! { <span class="text-primary ml-0.5">"*"</span> })}
        </label>
    }
}

/// Free-text input; long text fields get a text area
#[component]
pub fn TextInput(
    /// Declared field (text, email, phone or long text)
    spec: FieldSpec,
    /// Current value signal
    value: Signal<String>,
    /// Receives the new value on every keystroke
    on_input: Callback<String>,
    /// Rows shown for long text
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    let control = match spec.kind {
        FieldKind::LongText => view! {
            <textarea
                class="input-base resize-none"
                name=spec.name
                placeholder=spec.placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any(),
        kind => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Phone => "tel",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    class="input-base"
                    name=spec.name
                    placeholder=spec.placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="space-y-2">
            <FieldLabel label=spec.label required=spec.required />
            {control}
        </div>
    }
}

/// Grid of toggle buttons over the field's choices.
///
/// Multi-choice fields show a check box per button and clicking flips that
/// choice; single-choice fields replace the value on click.
#[component]
pub fn ChoiceGrid(
    /// Declared choice field
    spec: FieldSpec,
    /// Currently selected values
    selected: Signal<Selection>,
    /// Receives the clicked choice
    on_toggle: Callback<String>,
) -> impl IntoView {
    let multi = spec.kind == FieldKind::MultiChoice;
    let grid_class = if multi {
        "grid grid-cols-2 gap-2"
    } else {
        "grid grid-cols-2 sm:grid-cols-3 gap-2"
    };

    view! {
        <div class="space-y-2">
            <FieldLabel label=spec.label required=spec.required />
            <div class=grid_class role="group" aria-label=spec.label>
                {spec.choices.iter().map(|&choice| {
                    let is_selected = Signal::derive(move || selected.with(|s| s.is_selected(choice)));

                    view! {
                        <button
                            type="button"
                            class="choice-button"
                            class:choice-selected=move || is_selected.get()
                            aria-pressed=move || is_selected.get().to_string()
                            on:click=move |_| on_toggle.run(choice.to_string())
                        >
                            {multi.then(|| view! {
                                <span class="choice-box" class:choice-box-checked=move || is_selected.get()>
                                    <Show when=move || is_selected.get()>
                                        <Icon name=icons::CHECK class="w-3 h-3" />
                                    </Show>
                                </span>
                            })}
                            {choice}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
