//! Interactive state core of the site: the demo request wizard, rotating
//! showcases, animated counters and the selection helper they share.
//!
//! Nothing in here touches the DOM. Timers are obtained through
//! [`IntervalScheduler`] so every transition can be driven by tests.

pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod counter;
pub mod schedule;
pub mod selection;
pub mod showcase;
pub mod wizard;

pub use counter::{CounterConfig, CounterDriver, CounterState, format_counter};
pub use schedule::{IntervalScheduler, ManualScheduler, ManualTimer};
pub use selection::Selection;
pub use showcase::{ShowcaseConfig, ShowcaseDriver, ShowcaseState};
pub use wizard::{
    Answers, FieldKind, FieldSpec, FieldValue, StepDefinition, StepState, StepStatus,
    SubmissionError, SubmissionHandler, SubmissionStatus, WizardController,
};

#[cfg(feature = "hydrate")]
pub use schedule::{BrowserInterval, BrowserScheduler};
