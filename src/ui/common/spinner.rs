use leptos::prelude::*;

use crate::ui::icon::Icon;

/// Small spinning ring for use inside buttons
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span
            class=format!("inline-block h-5 w-5 animate-spin rounded-full border-2 border-white/40 border-t-white {}", class)
            aria-hidden="true"
        />
    }
}

/// Form submit button that swaps its label for a spinner while loading
#[component]
pub fn LoadingButton(
    /// Whether button is in loading state
    #[prop(into)]
    loading: Signal<bool>,
    /// Button text when not loading
    text: &'static str,
    /// Button text when loading
    #[prop(default = "Enviando...")]
    loading_text: &'static str,
    /// Trailing glyph next to the text
    #[prop(optional)]
    icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="mt-4 w-full inline-flex items-center justify-center gap-2 rounded-xl py-4 px-5 \
                   text-base font-bold text-white bg-gradient-to-r from-[#23C062] to-[#23C062] \
                   shadow-md hover:shadow-lg transition active:scale-[0.99] disabled:opacity-70"
            disabled=move || loading.get()
        >
            <Show
                when=move || loading.get()
                fallback=move || view! {
                    <span>{text}</span>
                    {icon.map(|name| view! { <Icon name=name/> })}
                }
            >
                <InlineSpinner/>
                <span>{loading_text}</span>
            </Show>
        </button>
    }
}
