use leptos::prelude::*;

use super::navbar::Logo;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-16 border-t border-[#D2E5D9]/60 bg-white/40 backdrop-blur-sm">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 py-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <Logo class="h-8 w-auto"/>
                    <span class="text-sm font-semibold">"Movimiento Oxígeno"</span>
                </div>

                <div class="flex items-center gap-6 text-sm text-[#54926D]">
                    <a href="#" class="hover:text-[#7A00D2] transition-colors">
                        "Política de datos"
                    </a>
                    <span>"© 2026 Movimiento Oxígeno"</span>
                </div>
            </div>
        </footer>
    }
}
