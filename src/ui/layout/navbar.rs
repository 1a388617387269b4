use leptos::prelude::*;
use leptos_router::components::A;

use super::watermark::LOGO_PATH;

/// Brand mark used by the navbar and footer
#[component]
pub fn Logo(
    #[prop(default = "h-10 w-auto")]
    class: &'static str,
) -> impl IntoView {
    view! { <img src=LOGO_PATH alt="Movimiento Oxígeno" class=class draggable="false"/> }
}

/// Top bar with the brand and a jump link to the form
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 bg-white/60 backdrop-blur-md border-b border-white/60">
            <div class="mx-auto max-w-7xl px-4 sm:px-6">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo/>
                        <span class="text-lg font-extrabold tracking-tight">"Oxígeno"</span>
                    </A>

                    <nav class="flex items-center gap-4">
                        <a
                            href="#registro"
                            class="rounded-xl px-4 py-2 text-sm font-bold text-white bg-gradient-to-r from-[#23C062] to-[#7A00D2] shadow-sm hover:shadow-md transition"
                        >
                            "Regístrate"
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}
