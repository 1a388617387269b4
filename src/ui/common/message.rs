//! Inline status messages shown under the registration form

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Shows the message with an alert glyph while the signal holds Some
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div
                role="alert"
                class="flex items-center gap-2 rounded-xl border border-red-200 bg-red-50/80 px-4 py-3 text-sm text-red-700"
            >
                <Icon name=icons::ERROR class="text-[20px]"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success message component
#[component]
pub fn SuccessMessage(
    /// Success message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div
                role="status"
                class="flex items-center gap-2 rounded-xl border border-[#23C062]/30 bg-[#23C062]/10 px-4 py-3 text-sm text-[#0F1A13]"
            >
                <Icon name=icons::CHECK_CIRCLE class="text-[20px] text-[#23C062]"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
