//! Decorative page background
//!
//! Fixed behind everything and never interactive: a base colour, two
//! radial fades, three colour blooms, three rotated logo marks and a
//! white veil on top.

use leptos::prelude::*;

/// Logo drawn by the watermark marks
pub const LOGO_PATH: &str = "/images/logo-oxigeno.svg";

/// One rotated logo mark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatermarkMark {
    pub left: &'static str,
    pub top: &'static str,
    /// Rendered width in px
    pub width: u32,
    pub opacity: f32,
}

impl WatermarkMark {
    /// Inline style of the `<img>`
    pub fn style(&self) -> String {
        format!(
            "left: {}; top: {}; width: {}px; opacity: {}; transform: rotate(-14deg); \
             mix-blend-mode: multiply; filter: saturate(0.9);",
            self.left, self.top, self.width, self.opacity
        )
    }
}

pub const WATERMARK_MARKS: [WatermarkMark; 3] = [
    WatermarkMark {
        left: "-5%",
        top: "-15%",
        width: 1600,
        opacity: 0.15,
    },
    WatermarkMark {
        left: "26%",
        top: "5%",
        width: 1600,
        opacity: 0.15,
    },
    WatermarkMark {
        left: "-10%",
        top: "65%",
        width: 1600,
        opacity: 0.15,
    },
];

const GREEN_FADE: &str =
    "background: radial-gradient(900px 600px at 12% 12%, rgba(35,192,98,0.40), transparent 62%);";
const PURPLE_FADE: &str =
    "background: radial-gradient(900px 600px at 88% 90%, rgba(122,0,210,0.35), transparent 62%);";

/// Blurred colour blob
#[component]
pub fn Bloom(
    /// Colour, size and position classes
    class: &'static str,
) -> impl IntoView {
    view! { <div class=format!("absolute rounded-full blur-3xl {}", class)/> }
}

#[component]
pub fn WatermarkTiled() -> impl IntoView {
    view! {
        <div class="pointer-events-none fixed inset-0 -z-10 overflow-hidden" aria-hidden="true">
            <div class="absolute inset-0 bg-[#F9FBFA]"/>

            <div class="absolute inset-0 opacity-70" style=GREEN_FADE/>
            <div class="absolute inset-0 opacity-70" style=PURPLE_FADE/>

            <Bloom class="bg-[#23C062]/40 w-[680px] h-[680px] -top-[240px] -left-[240px]"/>
            <Bloom class="bg-[#7A00D2]/35 w-[820px] h-[820px] -bottom-[320px] -right-[300px]"/>
            <Bloom class="bg-blue-300/20 w-[520px] h-[520px] top-[38%] left-[16%]"/>

            <div class="absolute inset-0">
                {WATERMARK_MARKS
                    .iter()
                    .map(|mark| {
                        view! {
                            <img
                                src=LOGO_PATH
                                alt=""
                                draggable="false"
                                class="absolute select-none max-w-none"
                                style=mark.style()
                            />
                        }
                    })
                    .collect_view()}
            </div>

            // Veil
            <div class="absolute inset-0 bg-white/25"/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_share_size_and_opacity() {
        assert!(WATERMARK_MARKS.iter().all(|m| m.width == 1600 && m.opacity == 0.15));
        let positions: Vec<_> = WATERMARK_MARKS.iter().map(|m| (m.left, m.top)).collect();
        assert_eq!(positions, vec![("-5%", "-15%"), ("26%", "5%"), ("-10%", "65%")]);
    }

    #[test]
    fn test_mark_style() {
        let style = WATERMARK_MARKS[0].style();
        assert!(style.starts_with("left: -5%; top: -15%; width: 1600px; opacity: 0.15;"));
        assert!(style.contains("rotate(-14deg)"));
        assert!(style.contains("mix-blend-mode: multiply"));
    }
}
