use crate::core::Selection;
use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Tab item definition
#[derive(Clone, PartialEq)]
pub struct TabItem {
    /// Unique identifier for the tab
    pub id: &'static str,
    /// Display label for the tab
    pub label: &'static str,
    /// Optional icon name
    pub icon: Option<&'static str>,
}

impl TabItem {
    /// Create a new tab item
    pub fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            icon: None,
        }
    }

    /// Add an icon to the tab
    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Tab strip backed by a single-member [`Selection`]
#[component]
pub fn Tabs(
    /// List of tab items
    tabs: Vec<TabItem>,
    /// Selection holding the active tab ID
    selection: RwSignal<Selection>,
    /// Additional CSS classes for the container
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let container_class = if class.is_empty() {
        "tabs-container".to_string()
    } else {
        format!("tabs-container {}", class)
    };

    view! {
        <div class=container_class>
            <div class="tabs-list" role="tablist">
                {tabs.into_iter().map(|tab| {
                    let tab_id = tab.id;
                    let is_active = Signal::derive(move || selection.with(|s| s.is_selected(tab_id)));

                    view! {
                        <button
                            class="tab-item"
                            class:tab-active=move || is_active.get()
                            on:click=move |_| selection.update(|s| s.select_only(tab_id))
                            role="tab"
                            aria-selected=move || is_active.get().to_string()
                            aria-controls=format!("panel-{}", tab.id)
                        >
                            {tab.icon.map(|icon| view! { <Icon name=icon class="w-4 h-4" /> })}
                            <span class="tab-label">{tab.label}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Tab panel content component
#[component]
pub fn TabPanel(
    /// Tab ID this panel belongs to
    tab_id: &'static str,
    /// Selection holding the active tab ID
    selection: RwSignal<Selection>,
    /// Panel content
    children: Children,
) -> impl IntoView {
    let is_active = Signal::derive(move || selection.with(|s| s.is_selected(tab_id)));

    view! {
        <div
            class="tab-panel"
            role="tabpanel"
            id=format!("panel-{}", tab_id)
            style:display=move || if is_active.get() { "block" } else { "none" }
            aria-hidden=move || (!is_active.get()).to_string()
        >
            {children()}
        </div>
    }
}
