use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenefitTone {
    Primary,
    Purple,
    Blue,
}

impl BenefitTone {
    fn badge_class(self) -> &'static str {
        match self {
            BenefitTone::Primary => "bg-[#23C062]/15 text-[#23C062]",
            BenefitTone::Purple => "bg-[#7A00D2]/15 text-[#7A00D2]",
            BenefitTone::Blue => "bg-blue-500/15 text-blue-600",
        }
    }
}

pub struct BenefitCopy {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub tone: BenefitTone,
}

pub const BENEFITS: [BenefitCopy; 3] = [
    BenefitCopy {
        icon: icons::VERIFIED_USER,
        title: "Datos Seguros",
        text: "Tus datos están protegidos. Cumplimos con la ley de protección de datos.",
        tone: BenefitTone::Primary,
    },
    BenefitCopy {
        icon: icons::ROCKET_LAUNCH,
        title: "Impacto Real",
        text: "Al registrarte, tu información ayuda a organizar y fortalecer comunidades locales.",
        tone: BenefitTone::Purple,
    },
    BenefitCopy {
        icon: icons::GROUPS,
        title: "Comunidad Activa",
        text: "Únete a miles de personas que están trabajando activamente para hacer un gran cambio.",
        tone: BenefitTone::Blue,
    },
];

pub const CLOSING_LINE: &str = "Juntos somos más fuertes.";

#[component]
pub fn Benefit(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    tone: BenefitTone,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div class=format!("shrink-0 h-11 w-11 rounded-xl flex items-center justify-center {}", tone.badge_class())>
                <Icon name=icon/>
            </div>
            <div>
                <h4 class="font-bold text-[#0F1A13]">{title}</h4>
                <p class="mt-1 text-sm leading-relaxed text-[#54926D]">{text}</p>
            </div>
        </div>
    }
}

/// Sidebar of trust messages next to the form
#[component]
pub fn BenefitsAside() -> impl IntoView {
    view! {
        <aside class="hidden md:flex md:col-span-1 p-10 border-l border-[#D2E5D9]/30 bg-white/25 relative">
            <div class="absolute inset-0 opacity-15 bg-[radial-gradient(circle_at_top_right,_var(--tw-gradient-stops))] from-[#23C062] via-[#7A00D2] to-transparent"/>
            <div class="relative z-10 flex flex-col gap-6">
                {BENEFITS
                    .iter()
                    .map(|b| view! { <Benefit icon=b.icon title=b.title text=b.text tone=b.tone/> })
                    .collect_view()}

                <div class="mt-6 rounded-xl overflow-hidden h-40 bg-gray-100 relative">
                    <div class="absolute inset-0 bg-gradient-to-t from-white/60 to-transparent"/>
                    <div class="h-full w-full bg-[radial-gradient(circle_at_center,_var(--tw-gradient-stops))] from-[#23C062]/20 via-[#7A00D2]/10 to-transparent"/>
                </div>

                <p class="text-xs text-center text-[#54926D]/70">{CLOSING_LINE}</p>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benefits_in_order() {
        let titles: Vec<_> = BENEFITS.iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["Datos Seguros", "Impacto Real", "Comunidad Activa"]);

        let tones: Vec<_> = BENEFITS.iter().map(|b| b.tone).collect();
        assert_eq!(
            tones,
            vec![BenefitTone::Primary, BenefitTone::Purple, BenefitTone::Blue]
        );
    }
}
