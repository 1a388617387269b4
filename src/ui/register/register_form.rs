//! Registration form
//!
//! Renders the field schema row by row, keeps the draft in a signal and,
//! once the browser's native constraints pass, posts it as JSON.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Script;
use leptos_router::hooks::use_query_map;

use super::benefit::BenefitsAside;
use super::catalog::{CatalogContext, provide_catalog_context};
use super::client::{captcha_token, reset_captcha, submit_registration, success_message};
use crate::core::registration::{
    CharClass, FIELD_ROWS, FieldKind, FieldName, RegistrationDraft, RegistrationMode, field_spec,
};
use crate::ui::common::{
    ConsentCheckbox, ErrorMessage, InputField, LoadingButton, SelectField, SuccessMessage,
};
use crate::ui::icon::{Icon, icons};

/// Turnstile site key, baked in at build time
pub const TURNSTILE_SITE_KEY: Option<&str> = option_env!("TURNSTILE_SITE_KEY");

const TURNSTILE_SCRIPT: &str = "https://challenges.cloudflare.com/turnstile/v0/api.js";

/// Grid classes for a row of the layout
fn row_class(len: usize) -> &'static str {
    if len > 1 {
        "grid grid-cols-1 md:grid-cols-2 gap-5"
    } else {
        "flex flex-col gap-5"
    }
}

#[component]
fn DraftField(
    name: FieldName,
    draft: RwSignal<RegistrationDraft>,
    catalog: CatalogContext,
) -> impl IntoView {
    let Some(spec) = field_spec(name) else {
        return ().into_any();
    };

    let value = Signal::derive(move || draft.with(|d| d.get(name).to_string()));
    let update = Callback::new(move |v: String| draft.update(|d| d.set(name, &v)));

    match spec.kind {
        FieldKind::Text {
            input_type,
            input_mode,
            char_class,
        } => view! {
            <InputField
                name=name.as_str()
                label=spec.label
                icon=spec.icon
                placeholder=spec.placeholder
                input_type=input_type
                input_mode=input_mode
                pattern=char_class.map(CharClass::html_pattern)
                required=spec.required
                value=value
                on_input=update
            />
        }
        .into_any(),
        FieldKind::Select(category) => {
            let options =
                Signal::derive(move || catalog.options.with(|set| set.select_options(category)));
            view! {
                <SelectField
                    name=name.as_str()
                    label=spec.label
                    icon=spec.icon
                    placeholder=spec.placeholder
                    options=options
                    required=spec.required
                    value=value
                    on_change=update
                />
            }
            .into_any()
        }
    }
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let catalog = provide_catalog_context();

    let draft = RwSignal::new(RegistrationDraft::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let mode = use_query_map()
        .with_untracked(|query| query.get("mode"))
        .map(|m| RegistrationMode::from_query(&m))
        .unwrap_or_default();

    // Only reached once native validation has passed
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        error.set(None);
        success.set(None);

        let result = catalog
            .options
            .with_untracked(|options| draft.with_untracked(|d| d.to_request(options, captcha_token())));

        let request = match result {
            Ok(request) => request,
            Err(errors) => {
                error.set(errors.first().map(ToString::to_string));
                return;
            }
        };

        loading.set(true);
        spawn_local(async move {
            let result = submit_registration(mode, &request).await;
            if TURNSTILE_SITE_KEY.is_some() {
                reset_captcha();
            }

            match result {
                Ok(response) => {
                    success.set(Some(success_message(&response)));
                    draft.set(RegistrationDraft::new());
                }
                Err(err) => {
                    leptos::logging::warn!("Registration failed: {}", err);
                    error.set(Some(err));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div
            id="registro"
            class="bg-white/70 rounded-2xl border border-white/60 shadow-[0_20px_60px_rgba(0,0,0,0.10)] overflow-hidden"
        >
            <div class="grid grid-cols-1 md:grid-cols-3">
                <div class="md:col-span-2 p-6 md:p-10 lg:p-12">
                    <div class="flex items-center gap-2 mb-6">
                        <Icon
                            name=icons::APP_REGISTRATION
                            class="text-transparent bg-clip-text bg-gradient-to-br from-[#23C062] to-[#7A00D2]"
                        />
                        <h3 class="text-xl font-bold">"Regístrate ahora"</h3>
                    </div>

                    <form on:submit=on_submit class="flex flex-col gap-5">
                        {FIELD_ROWS
                            .iter()
                            .map(|row| {
                                view! {
                                    <div class=row_class(row.len())>
                                        {row
                                            .iter()
                                            .map(|name| view! { <DraftField name=*name draft=draft catalog=catalog/> })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}

                        <ConsentCheckbox
                            checked=Signal::derive(move || draft.with(|d| d.consent()))
                            on_change=Callback::new(move |checked: bool| {
                                draft.update(|d| d.set_consent(checked))
                            })
                        />

                        {TURNSTILE_SITE_KEY.map(|key| view! {
                            <Script src=TURNSTILE_SCRIPT async_="true" defer="true"/>
                            <div class="cf-turnstile" data-sitekey=key data-language="es"></div>
                        })}

                        <ErrorMessage error=error/>
                        <SuccessMessage message=success/>

                        <LoadingButton
                            loading=loading
                            text="Quiero ser parte"
                            icon=icons::ARROW_FORWARD
                        />
                    </form>
                </div>

                <BenefitsAside/>
            </div>
        </div>
    }
}
