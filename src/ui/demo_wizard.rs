//! Demo request wizard
//!
//! Renders each step straight from its declared field schema. "Continue"
//! stays disabled until the step validates, and the controller refuses
//! incomplete advances anyway.

use leptos::prelude::*;

use crate::core::catalog::{DEMO_STEPS, INTERESTS, fields};
use crate::core::{
    Answers, FieldKind, FieldSpec, Selection, StepStatus, SubmissionError, SubmissionHandler,
    SubmissionStatus, WizardController,
};
use crate::ui::common::{ChoiceGrid, TextInput};
use crate::ui::icon::{Icon, icons};

/// Heading and lead text per step, in step order
const STEP_COPY: &[(&str, &str)] = &[
    ("Your Information", "Let us know who we'll be speaking with."),
    ("Company Details", "Help us understand your organization."),
    ("Your Goals", "What are you looking to achieve with DataWise?"),
    ("Almost There!", ""),
];

/// Default submission handler: records the request in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSubmissionHandler;

impl SubmissionHandler for LoggingSubmissionHandler {
    fn submit(&self, answers: &Answers) -> Result<(), SubmissionError> {
        let payload =
            serde_json::to_string(answers).map_err(|e| SubmissionError::Rejected(e.to_string()))?;
        leptos::logging::log!("Demo request submitted: {}", payload);
        Ok(())
    }
}

#[component]
pub fn DemoWizard(
    /// Receives the final answers; the request is only logged when absent
    #[prop(optional)]
    on_submit: Option<Callback<Answers, Result<(), SubmissionError>>>,
) -> impl IntoView {
    let wizard = RwSignal::new(WizardController::new(DEMO_STEPS.to_vec()));
    let (submit_error, set_submit_error) = signal(None::<String>);

    let current_step = Memo::new(move |_| wizard.with(WizardController::current_step));
    let is_terminal = Memo::new(move |_| wizard.with(WizardController::is_terminal));
    let can_continue = Memo::new(move |_| wizard.with(|w| w.can_advance(w.current_step())));
    let submitted =
        Memo::new(move |_| wizard.with(|w| *w.submission() == SubmissionStatus::Submitted));

    let on_back = move |_| {
        wizard.update(|w| {
            w.retreat();
        })
    };
    let on_continue = move |_| {
        wizard.update(|w| {
            w.advance();
        })
    };
    let on_submit_click = move |_: leptos::ev::MouseEvent| {
        let outcome = wizard.try_update(|w| match on_submit {
            Some(callback) => w.submit(&|answers: &Answers| callback.run(answers.clone())),
            None => w.submit(&LoggingSubmissionHandler),
        });
        match outcome {
            Some(Err(err)) => {
                leptos::logging::error!("Demo request failed: {}", err);
                set_submit_error.set(Some(err.to_string()));
            }
            _ => set_submit_error.set(None),
        }
    };

    view! {
        <StepProgress wizard=wizard />

        <section class="py-24 bg-background">
            <div class="container mx-auto px-4">
                <div class="max-w-2xl mx-auto glass rounded-2xl p-8">
                    {move || {
                        let step = current_step.get();
                        let (heading, lead) = STEP_COPY.get(step - 1).copied().unwrap_or_default();
                        if is_terminal.get() {
                            view! {
                                <Summary
                                    wizard=wizard
                                    heading=heading
                                    submitted=submitted
                                    error=submit_error
                                    on_submit=Callback::new(on_submit_click)
                                />
                            }.into_any()
                        } else {
                            let definition = wizard.with_untracked(|w| *w.current_definition());
                            view! {
                                <div class="space-y-6 animate-fade-in">
                                    <h2 class="text-2xl font-bold text-foreground">{heading}</h2>
                                    <p class="text-muted-foreground">{lead}</p>
                                    {definition.fields.iter().map(|&field| view! {
                                        <StepField wizard=wizard field=field />
                                    }).collect_view()}
                                </div>
                            }.into_any()
                        }
                    }}

                    <Show when=move || !is_terminal.get()>
                        <div class="flex justify-between mt-8 pt-6 border-t border-border">
                            <button
                                class="btn-ghost inline-flex items-center gap-2"
                                on:click=on_back
                                disabled=move || current_step.get() == 1
                            >
                                <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                                "Back"
                            </button>
                            <button
                                class="btn-primary inline-flex items-center gap-2"
                                on:click=on_continue
                                disabled=move || !can_continue.get()
                            >
                                "Continue"
                                <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}

/// Numbered step indicator: completed steps show a check mark
#[component]
fn StepProgress(wizard: RwSignal<WizardController>) -> impl IntoView {
    let total = DEMO_STEPS.len();

    view! {
        <section class="py-8 bg-muted/30 border-y border-border">
            <div class="flex items-center justify-center gap-4 md:gap-8">
                {DEMO_STEPS.iter().enumerate().map(|(index, step)| {
                    let number = index + 1;
                    let status = Memo::new(move |_| wizard.with(|w| w.step_status(number)));
                    let icon = icons::STEP_ICONS.get(index).copied().unwrap_or(icons::CHECK);

                    view! {
                        <div class="flex items-center">
                            <div
                                class="step-indicator"
                                class:step-reached=move || status.get() != StepStatus::Upcoming
                            >
                                <div
                                    class="step-bubble"
                                    class:step-completed=move || status.get() == StepStatus::Completed
                                    class:step-current=move || status.get() == StepStatus::Current
                                >
                                    {move || match status.get() {
                                        StepStatus::Completed => view! { <Icon name=icons::CHECK /> }.into_any(),
                                        _ => view! { <Icon name=icon /> }.into_any(),
                                    }}
                                </div>
                                <span class="hidden md:inline font-medium">{step.title}</span>
                            </div>
                            {(number < total).then(|| view! {
                                <div
                                    class="step-connector"
                                    class:step-connector-done=move || status.get() == StepStatus::Completed
                                />
                            })}
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

/// One input rendered from its field declaration
#[component]
fn StepField(wizard: RwSignal<WizardController>, field: FieldSpec) -> impl IntoView {
    let name = field.name;

    match field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Phone | FieldKind::LongText => {
            let text = Signal::derive(move || wizard.with(|w| w.answers().text(name).to_string()));
            let on_text =
                Callback::new(move |value: String| wizard.update(|w| w.set_text(name, value)));
            view! { <TextInput spec=field value=text on_input=on_text /> }.into_any()
        }
        FieldKind::SingleChoice => {
            let selected = Signal::derive(move || {
                wizard.with(|w| match w.answers().text(name) {
                    "" => Selection::new(),
                    chosen => Selection::single(chosen),
                })
            });
            let on_choose =
                Callback::new(move |value: String| wizard.update(|w| w.choose(name, value)));
            view! { <ChoiceGrid spec=field selected=selected on_toggle=on_choose /> }.into_any()
        }
        FieldKind::MultiChoice => {
            let selected = Signal::derive(move || {
                wizard.with(|w| w.answers().selection(name).cloned().unwrap_or_default())
            });
            let on_toggle =
                Callback::new(move |value: String| wizard.update(|w| w.toggle_interest(name, &value)));
            view! { <ChoiceGrid spec=field selected=selected on_toggle=on_toggle /> }.into_any()
        }
    }
}

/// Final step: recap of the answers and the submit button
#[component]
fn Summary(
    wizard: RwSignal<WizardController>,
    heading: &'static str,
    submitted: Memo<bool>,
    error: ReadSignal<Option<String>>,
    on_submit: Callback<leptos::ev::MouseEvent>,
) -> impl IntoView {
    let who = move || {
        wizard.with(|w| {
            let a = w.answers();
            format!(
                "{} {} from {}",
                a.text(fields::FIRST_NAME),
                a.text(fields::LAST_NAME),
                a.text(fields::COMPANY)
            )
        })
    };
    let email = move || wizard.with(|w| w.answers().text(fields::EMAIL).to_string());
    let interests = move || {
        wizard.with(|w| {
            w.answers()
                .selection(fields::INTERESTS)
                .map(|set| set.ordered(INTERESTS).join(", "))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="space-y-6 animate-fade-in text-center">
            <div class="w-16 h-16 rounded-full bg-success/10 flex items-center justify-center mx-auto">
                <Icon name=icons::CHECK class="w-8 h-8" />
            </div>
            <h2 class="text-2xl font-bold text-foreground">{heading}</h2>
            <p class="text-muted-foreground">
                "Submit your request and our team will reach out within 24 hours to schedule your personalized demo."
            </p>

            <div class="p-4 rounded-xl bg-muted text-left">
                <h3 class="font-medium text-foreground mb-2">"Summary"</h3>
                <p class="text-sm text-muted-foreground">{who}</p>
                <p class="text-sm text-muted-foreground">{email}</p>
                <p class="text-sm text-muted-foreground mt-2">"Interested in: "{interests}</p>
            </div>

            {move || error.get().map(|message| view! {
                <div class="flex items-center justify-center gap-2 text-sm text-destructive">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4" />
                    <span>{message}</span>
                </div>
            })}

            <Show
                when=move || submitted.get()
                fallback=move || view! {
                    <button
                        class="btn-primary w-full inline-flex items-center justify-center gap-2"
                        on:click=move |ev| on_submit.run(ev)
                    >
                        "Submit Request"
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                    </button>
                }
            >
                <p class="font-medium text-success">"Thanks! We'll be in touch shortly."</p>
            </Show>

            <button
                class="btn-ghost inline-flex items-center gap-2"
                on:click=move |_| wizard.update(|w| {
                    w.retreat();
                })
                disabled=move || submitted.get()
            >
                <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                "Back"
            </button>
        </div>
    }
}
