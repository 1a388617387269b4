use crate::core::registration::{CONSENT_POLICY_LINK_TEXT, CONSENT_PREFIX, CONSENT_STATEMENT};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const FIELD_LABEL: &str = "text-sm font-semibold text-[#0F1A13]";
const FIELD_ICON: &str = "pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 text-[20px] text-[#54926D]";
const FIELD_CONTROL: &str = "w-full rounded-xl border border-[#D2E5D9] bg-white/80 py-3 pl-10 pr-4 text-sm \
     text-[#0F1A13] placeholder-[#54926D]/60 focus:outline-none focus:ring-2 focus:ring-[#23C062]/60 \
     focus:border-transparent transition";

/// Labelled text input with a leading icon
#[component]
pub fn InputField(
    /// Form input name
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Material Symbols glyph shown inside the input
    icon: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, tel, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Virtual keyboard hint
    #[prop(default = None)]
    input_mode: Option<&'static str>,
    /// Native `pattern` constraint
    #[prop(default = None)]
    pattern: Option<&'static str>,
    #[prop(default = true)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5">
            <label for=name class=FIELD_LABEL>{label}</label>
            <div class="relative">
                <Icon name=icon class=FIELD_ICON/>
                <input
                    id=name
                    name=name
                    type=input_type
                    inputmode=input_mode
                    pattern=pattern
                    required=required
                    placeholder=placeholder
                    class=FIELD_CONTROL
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// Labelled dropdown with a leading icon and an empty placeholder option
#[component]
pub fn SelectField(
    /// Form select name
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Material Symbols glyph shown inside the select
    icon: &'static str,
    /// Text of the disabled first option
    placeholder: &'static str,
    /// Options as (value, display_text) pairs
    options: Signal<Vec<(String, String)>>,
    #[prop(default = true)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5">
            <label for=name class=FIELD_LABEL>{label}</label>
            <div class="relative">
                <Icon name=icon class=FIELD_ICON/>
                <select
                    id=name
                    name=name
                    required=required
                    class=format!("{} appearance-none pr-10", FIELD_CONTROL)
                    prop:value=move || value.get()
                    on:change=move |ev| on_change.run(event_target_value(&ev))
                >
                    <option value="" disabled=true selected=move || value.get().is_empty()>
                        {placeholder}
                    </option>
                    {move || {
                        options.get().into_iter().map(|(val, text)| {
                            let selected = val == value.get_untracked();
                            view! {
                                <option value=val selected=selected>{text}</option>
                            }
                        }).collect_view()
                    }}
                </select>
                <Icon
                    name=icons::EXPAND_MORE
                    class="pointer-events-none absolute right-3 top-1/2 -translate-y-1/2 text-[20px] text-[#54926D]"
                />
            </div>
        </div>
    }
}

/// Required consent checkbox bound to the data-policy statement
#[component]
pub fn ConsentCheckbox(
    /// Current checked state
    checked: Signal<bool>,
    /// Change event callback
    on_change: Callback<bool>,
    /// Target of the policy link
    #[prop(default = "#")]
    policy_href: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3 mt-2">
            <input
                id="consent"
                name="consent"
                type="checkbox"
                required=true
                class="mt-1 h-5 w-5 rounded border-gray-300 text-[#23C062] focus:ring-[#23C062]"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label for="consent" class="text-sm text-[#54926D] leading-6">
                {CONSENT_PREFIX}
                " "
                <a
                    class="font-semibold text-[#23C062] hover:text-[#7A00D2] hover:underline transition"
                    href=policy_href
                >
                    {CONSENT_POLICY_LINK_TEXT}
                </a>
                ". "
                {CONSENT_STATEMENT}
            </label>
        </div>
    }
}
