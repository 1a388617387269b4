use leptos::prelude::*;

/// Material Symbols glyph, rendered from its ligature name
#[component]
pub fn Icon(
    /// Ligature name, e.g. `person`
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "text-[20px]")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("material-symbols-outlined select-none {}", class) aria-hidden="true">
            {name}
        </span>
    }
}

/// Glyph names used across the page
pub mod icons {
    pub const APP_REGISTRATION: &str = "app_registration";
    pub const ARROW_FORWARD: &str = "arrow_forward";
    pub const VERIFIED_USER: &str = "verified_user";
    pub const ROCKET_LAUNCH: &str = "rocket_launch";
    pub const GROUPS: &str = "groups";
    pub const ERROR: &str = "error";
    pub const CHECK_CIRCLE: &str = "check_circle";
    pub const EXPAND_MORE: &str = "expand_more";
    pub const HOME: &str = "home";
    pub const SEARCH_OFF: &str = "search_off";
}
