//! Multi-step form wizard with per-step validation gating
//!
//! The wizard walks a fixed, ordered list of [`StepDefinition`]s. Each step
//! declares the fields it shows and which of them are required; the
//! controller checks those declarations generically instead of carrying
//! bespoke logic per step.
//!
//! Answers accumulate across steps and are never cleared by navigation:
//! going back and forward again always finds previously entered values.

use std::collections::BTreeMap;

use serde::Serialize;

use super::selection::Selection;

/// Kind of input a field collects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    Email,
    Phone,
    /// Multi-line free text
    LongText,
    /// Exactly one value picked from the field's choices
    SingleChoice,
    /// Any number of values picked from the field's choices
    MultiChoice,
}

/// Declared field of a wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    /// Candidate values for choice fields, in display order
    pub choices: &'static [&'static str],
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            placeholder: "",
            choices: &[],
        }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: "",
            choices: &[],
        }
    }

    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub const fn with_choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = choices;
        self
    }
}

/// One screen of the wizard with its field schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

impl StepDefinition {
    /// Names of the fields that must be filled before leaving this step
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

/// Value recorded for a single field.
///
/// Serialized without a tag, so text and single choices both come out as
/// plain strings. The snapshot is write-only: it is handed to submission
/// handlers and never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Choice(String),
    Multi(Selection),
}

impl FieldValue {
    /// Whether the value counts as answered for validation purposes
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => !s.is_empty(),
            FieldValue::Multi(set) => !set.is_empty(),
        }
    }
}

/// Answers collected so far, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, FieldValue>);

impl Answers {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Text or choice value of a field, empty when unset
    pub fn text(&self, name: &str) -> &str {
        match self.0.get(name) {
            Some(FieldValue::Text(s)) | Some(FieldValue::Choice(s)) => s,
            _ => "",
        }
    }

    /// Multi-select value of a field, if one was recorded
    pub fn selection(&self, name: &str) -> Option<&Selection> {
        match self.0.get(name) {
            Some(FieldValue::Multi(set)) => Some(set),
            _ => None,
        }
    }

    pub fn is_filled(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(FieldValue::is_filled)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, name: &str, value: FieldValue) {
        self.0.insert(name.to_string(), value);
    }
}

/// Cumulative wizard state: the step pointer plus every answer so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepState {
    /// 1-indexed, always within `[1, total_steps]`
    pub current_step: usize,
    pub answers: Answers,
}

impl Default for StepState {
    fn default() -> Self {
        Self {
            current_step: 1,
            answers: Answers::default(),
        }
    }
}

/// Position of a step relative to the current one, for progress display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// Outcome of the last submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    NotSubmitted,
    Submitted,
    Failed(String),
}

/// Errors surfaced by [`WizardController::submit`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission is only possible on the last step (at step {current} of {total})")]
    NotAtTerminalStep { current: usize, total: usize },

    #[error("step {step} still has required fields left empty")]
    Incomplete { step: usize },

    #[error("request was already submitted")]
    AlreadySubmitted,

    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// External collaborator that receives the final answers
pub trait SubmissionHandler {
    fn submit(&self, answers: &Answers) -> Result<(), SubmissionError>;
}

impl<F> SubmissionHandler for F
where
    F: Fn(&Answers) -> Result<(), SubmissionError>,
{
    fn submit(&self, answers: &Answers) -> Result<(), SubmissionError> {
        self(answers)
    }
}

/// Drives a [`StepState`] through a fixed list of steps
#[derive(Debug, Clone)]
pub struct WizardController {
    steps: Vec<StepDefinition>,
    state: StepState,
    submission: SubmissionStatus,
}

impl WizardController {
    /// Create a wizard positioned on step 1 with no answers.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is empty.
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        assert!(!steps.is_empty(), "a wizard needs at least one step");
        Self {
            steps,
            state: StepState::default(),
            submission: SubmissionStatus::default(),
        }
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn state(&self) -> &StepState {
        &self.state
    }

    pub fn answers(&self) -> &Answers {
        &self.state.answers
    }

    pub fn submission(&self) -> &SubmissionStatus {
        &self.submission
    }

    /// Definition of a 1-indexed step
    pub fn step(&self, step: usize) -> Option<&StepDefinition> {
        step.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn current_definition(&self) -> &StepDefinition {
        // current_step is kept in range by every mutation
        &self.steps[self.state.current_step - 1]
    }

    /// Required field names of the current step, in declaration order
    pub fn current_required_fields(&self) -> Vec<&'static str> {
        self.current_definition().required_fields().collect()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.current_step == self.total_steps()
    }

    pub fn step_status(&self, step: usize) -> StepStatus {
        use std::cmp::Ordering;
        match step.cmp(&self.state.current_step) {
            Ordering::Less => StepStatus::Completed,
            Ordering::Equal => StepStatus::Current,
            Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Record or overwrite an answer. No validation happens here.
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        self.state.answers.insert(name, value);
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.set_field(name, FieldValue::Text(value.into()));
    }

    /// Single-select: replaces any previous choice
    pub fn choose(&mut self, name: &str, value: impl Into<String>) {
        self.set_field(name, FieldValue::Choice(value.into()));
    }

    /// Flip membership of `key` in a multi-select field.
    ///
    /// A field that is unset, or holds a non-set value, is treated as empty.
    pub fn toggle_interest(&mut self, name: &str, key: &str) {
        let next = match self.state.answers.selection(name) {
            Some(set) => set.toggled(key),
            None => Selection::single(key),
        };
        self.set_field(name, FieldValue::Multi(next));
    }

    /// Whether every required field of `step` is filled.
    ///
    /// Steps outside `[1, total_steps]` never validate.
    pub fn can_advance(&self, step: usize) -> bool {
        self.step(step).is_some_and(|def| {
            def.required_fields()
                .all(|name| self.state.answers.is_filled(name))
        })
    }

    /// Move to the next step.
    ///
    /// No-op on the last step and when the current step is incomplete.
    /// Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if self.is_terminal() || !self.can_advance(self.state.current_step) {
            return false;
        }
        self.state.current_step += 1;
        true
    }

    /// Move to the previous step; no-op on step 1.
    pub fn retreat(&mut self) -> bool {
        if self.state.current_step <= 1 {
            return false;
        }
        self.state.current_step -= 1;
        true
    }

    /// First step whose required fields are not all filled
    pub fn first_incomplete_step(&self) -> Option<usize> {
        (1..=self.total_steps()).find(|&step| !self.can_advance(step))
    }

    /// Hand the full answers snapshot to `handler`.
    ///
    /// Only allowed on the terminal step with every step complete. The
    /// handler is called at most once per attempt and never retried here;
    /// after a successful submission further calls are refused.
    pub fn submit<H>(&mut self, handler: &H) -> Result<(), SubmissionError>
    where
        H: SubmissionHandler + ?Sized,
    {
        if self.submission == SubmissionStatus::Submitted {
            return Err(SubmissionError::AlreadySubmitted);
        }
        if !self.is_terminal() {
            return Err(SubmissionError::NotAtTerminalStep {
                current: self.state.current_step,
                total: self.total_steps(),
            });
        }
        if let Some(step) = self.first_incomplete_step() {
            return Err(SubmissionError::Incomplete { step });
        }

        match handler.submit(&self.state.answers) {
            Ok(()) => {
                self.submission = SubmissionStatus::Submitted;
                Ok(())
            }
            Err(err) => {
                self.submission = SubmissionStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const CONTACT: &[FieldSpec] = &[
        FieldSpec::required("name", "Name", FieldKind::Text),
        FieldSpec::optional("phone", "Phone", FieldKind::Text),
    ];
    const TOPICS: &[FieldSpec] = &[FieldSpec::required("topics", "Topics", FieldKind::MultiChoice)];
    const DONE: &[FieldSpec] = &[];

    fn wizard() -> WizardController {
        WizardController::new(vec![
            StepDefinition {
                title: "Contact",
                fields: CONTACT,
            },
            StepDefinition {
                title: "Topics",
                fields: TOPICS,
            },
            StepDefinition {
                title: "Done",
                fields: DONE,
            },
        ])
    }

    fn filled() -> WizardController {
        let mut w = wizard();
        w.set_text("name", "Ada");
        assert!(w.advance());
        w.toggle_interest("topics", "rust");
        assert!(w.advance());
        w
    }

    #[test]
    fn test_initial_state() {
        let w = wizard();
        assert_eq!(w.current_step(), 1);
        assert_eq!(w.total_steps(), 3);
        assert!(w.answers().is_empty());
        assert_eq!(w.current_required_fields(), vec!["name"]);
    }

    #[test]
    #[should_panic(expected = "a wizard needs at least one step")]
    fn test_empty_steps_rejected() {
        WizardController::new(Vec::new());
    }

    #[test]
    fn test_optional_fields_do_not_gate() {
        let mut w = wizard();
        w.set_text("name", "Ada");
        assert!(w.can_advance(1));
    }

    #[test]
    fn test_empty_text_does_not_count() {
        let mut w = wizard();
        w.set_text("name", "");
        assert!(!w.can_advance(1));
    }

    #[test]
    fn test_can_advance_out_of_range() {
        let w = wizard();
        assert!(!w.can_advance(0));
        assert!(!w.can_advance(4));
        // Terminal step has no required fields
        assert!(w.can_advance(3));
    }

    #[test]
    fn test_incomplete_advance_is_noop() {
        let mut w = wizard();
        assert!(!w.advance());
        assert_eq!(w.current_step(), 1);
    }

    #[test]
    fn test_advance_stops_at_terminal() {
        let mut w = filled();
        assert!(w.is_terminal());
        assert!(!w.advance());
        assert_eq!(w.current_step(), 3);
    }

    #[test]
    fn test_retreat_stops_at_first() {
        let mut w = wizard();
        assert!(!w.retreat());
        assert_eq!(w.current_step(), 1);
    }

    #[test]
    fn test_toggle_on_non_set_field_starts_fresh() {
        let mut w = wizard();
        w.set_text("topics", "oops");
        w.toggle_interest("topics", "rust");
        assert_eq!(w.answers().selection("topics"), Some(&Selection::single("rust")));
    }

    #[test]
    fn test_emptied_selection_blocks_advance() {
        let mut w = wizard();
        w.set_text("name", "Ada");
        w.advance();
        w.toggle_interest("topics", "rust");
        w.toggle_interest("topics", "rust");
        assert!(!w.can_advance(2));
        assert!(!w.advance());
    }

    #[test]
    fn test_step_status() {
        let mut w = wizard();
        w.set_text("name", "Ada");
        w.advance();
        assert_eq!(w.step_status(1), StepStatus::Completed);
        assert_eq!(w.step_status(2), StepStatus::Current);
        assert_eq!(w.step_status(3), StepStatus::Upcoming);
    }

    #[test]
    fn test_submit_before_terminal_skips_handler() {
        let mut w = wizard();
        let calls = Cell::new(0);
        let handler = |_: &Answers| -> Result<(), SubmissionError> {
            calls.set(calls.get() + 1);
            Ok(())
        };

        let err = w.submit(&handler).unwrap_err();
        assert_eq!(err, SubmissionError::NotAtTerminalStep { current: 1, total: 3 });
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_submit_passes_full_snapshot_once() {
        let mut w = filled();
        let seen = Cell::new(0usize);
        let handler = |answers: &Answers| -> Result<(), SubmissionError> {
            assert_eq!(answers.text("name"), "Ada");
            assert!(answers.selection("topics").unwrap().is_selected("rust"));
            seen.set(seen.get() + 1);
            Ok(())
        };

        w.submit(&handler).unwrap();
        assert_eq!(w.submission(), &SubmissionStatus::Submitted);
        assert_eq!(w.submit(&handler), Err(SubmissionError::AlreadySubmitted));
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_submit_refuses_cleared_field() {
        let mut w = filled();
        w.set_text("name", "");
        let handler = |_: &Answers| -> Result<(), SubmissionError> { Ok(()) };
        assert_eq!(w.submit(&handler), Err(SubmissionError::Incomplete { step: 1 }));
    }

    #[test]
    fn test_failed_submission_is_recorded() {
        let mut w = filled();
        let handler = |_: &Answers| -> Result<(), SubmissionError> {
            Err(SubmissionError::Rejected("inbox offline".into()))
        };

        let err = w.submit(&handler).unwrap_err();
        assert_eq!(err.to_string(), "submission rejected: inbox offline");
        assert_eq!(
            w.submission(),
            &SubmissionStatus::Failed("submission rejected: inbox offline".into())
        );

        // An explicit second attempt by the user goes through
        let ok = |_: &Answers| -> Result<(), SubmissionError> { Ok(()) };
        assert!(w.submit(&ok).is_ok());
    }

    #[test]
    fn test_answers_serialize_flat() {
        let w = filled();
        let json = serde_json::to_value(w.answers()).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["topics"], serde_json::json!(["rust"]));
    }

    #[test]
    fn test_single_choice_keeps_its_kind_in_the_snapshot() {
        let mut w = filled();
        w.choose("size", "1-10 employees");
        assert_eq!(
            w.answers().get("size"),
            Some(&FieldValue::Choice("1-10 employees".into()))
        );

        // Serialized as a bare string, like free text
        let json = serde_json::to_value(w.answers()).unwrap();
        assert_eq!(json["size"], "1-10 employees");
        assert_eq!(json["name"], "Ada");
    }
}
