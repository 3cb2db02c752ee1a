pub mod architecture;
pub mod common;
pub mod demo_wizard;
pub mod icon;
pub mod industries;
pub mod pages;
pub mod stats;
pub mod testimonials;
#[cfg(feature = "hydrate")]
pub mod visibility;

pub use architecture::ArchitectureSection;
pub use demo_wizard::{DemoWizard, LoggingSubmissionHandler};
pub use icon::{Icon, icons};
pub use industries::IndustriesSection;
pub use stats::{AnimatedCounter, StatsSection};
pub use testimonials::TestimonialsSection;

/// Timer source for the interactive sections. Components only start their
/// drivers from effects, so the server build never fires a timer.
#[cfg(feature = "hydrate")]
pub type SiteScheduler = crate::core::BrowserScheduler;
#[cfg(not(feature = "hydrate"))]
pub type SiteScheduler = crate::core::ManualScheduler;
