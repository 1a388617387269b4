//! Not found page component
//!
//! A 404 page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::layout::WatermarkTiled;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen text-[#0F1A13] flex flex-col items-center justify-center p-4">
            <WatermarkTiled/>

            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white/70 rounded-full flex items-center justify-center">
                    <Icon name=icons::SEARCH_OFF class="text-[48px] text-[#54926D]"/>
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Página no encontrada"</h2>

                <p class="text-[#54926D] mb-8 max-w-md mx-auto">
                    "La página que buscas no existe o fue movida."
                </p>

                <A
                    href="/"
                    attr:class="inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-[#23C062] hover:bg-[#1ea656] text-white font-bold transition-colors"
                >
                    <Icon name=icons::HOME/>
                    "Ir al registro"
                </A>
            </div>
        </div>
    }
}
