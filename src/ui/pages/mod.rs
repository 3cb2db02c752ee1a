//! Application pages module
//!
//! - Home page (metrics, platform stack, industries, customer stories)
//! - Industry solution pages
//! - Demo request page (multi-step wizard)
//! - Not found page

mod demo;
mod home;
mod industry;
mod not_found;

pub use demo::DemoPage;
pub use home::HomePage;
pub use industry::IndustryPage;
pub use not_found::NotFoundPage;
