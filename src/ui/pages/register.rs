//! Register page
//!
//! Background, navbar, intro copy, the registration form and the footer.

use leptos::prelude::*;

use crate::ui::layout::{Footer, Navbar, WatermarkTiled};
use crate::ui::register::RegisterForm;

pub const INTRO: &str = "Regístrate y sé parte del movimiento que transforma el país con \
                         transparencia, tecnología y acción ciudadana real.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="min-h-screen text-[#0F1A13] font-sans">
            <WatermarkTiled/>
            <Navbar/>

            <main class="mx-auto max-w-7xl px-4 sm:px-6 py-10">
                <section class="text-center mt-4 md:mt-10">
                    <p class="mt-4 text-lg md:text-xl text-[#54926D] max-w-2xl mx-auto">{INTRO}</p>
                </section>

                <section class="mt-10">
                    <RegisterForm/>
                </section>
            </main>

            <Footer/>
        </div>
    }
}
