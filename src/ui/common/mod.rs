//! Common reusable UI components
//!
//! Form inputs and tab strips shared by the demo wizard and the home page
//! sections.

pub mod form;
pub mod tabs;

pub use form::{ChoiceGrid, TextInput};
pub use tabs::{TabItem, TabPanel, Tabs};
