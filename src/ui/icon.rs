use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name under /icons without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names used across the site
pub mod icons {
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK: &str = "check";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const QUOTE: &str = "quote";
    pub const STAR: &str = "star";
    pub const CALENDAR: &str = "calendar";
    pub const HOME: &str = "home";
    pub const ALERT_CIRCLE: &str = "alert-circle";

    /// Icon shown on the progress indicator for each demo step
    pub const STEP_ICONS: &[&str] = &["user", "building", "target", CALENDAR];
}
