use leptos::prelude::*;

use crate::core::Glyph;

/// 24x24 outline path data for each glyph.
fn path_d(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Bolt => "M13 10V3L4 14h7v7l9-11h-7z",
        Glyph::Globe => {
            "M21 12a9 9 0 01-9 9m9-9a9 9 0 00-9-9m9 9H3m9 9a9 9 0 01-9-9m9 9c1.657 0 3-4.03 \
             3-9s-1.343-9-3-9m0 18c-1.657 0-3-4.03-3-9s1.343-9 3-9m-9 9a9 9 0 019-9"
        }
        Glyph::Rocket => {
            "M15.59 14.37a6 6 0 01-5.84 7.38v-4.8m5.84-2.58a14.98 14.98 0 006.16-12.12A14.98 \
             14.98 0 009.631 8.41m5.96 5.96a14.926 14.926 0 01-5.841 2.58m-.119-8.54a6 6 0 \
             00-7.381 5.84h4.8m2.581-5.84a14.927 14.927 0 00-2.58 5.84m2.699 \
             2.7c-.103.021-.207.041-.311.06a15.09 15.09 0 01-2.448-2.448 14.9 14.9 0 \
             01.06-.312m-2.24 2.39a4.493 4.493 0 00-1.757 4.306 4.493 4.493 0 \
             004.306-1.758M16.5 9a1.5 1.5 0 11-3 0 1.5 1.5 0 013 0z"
        }
        Glyph::Users => {
            "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 \
             0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 \
             20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 \
             3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z"
        }
        Glyph::Chart => {
            "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 \
             012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 \
             012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z"
        }
        Glyph::Check => "M5 13l4 4L19 7",
        Glyph::ChevronDown => "M19 9l-7 7-7-7",
        Glyph::ChevronLeft => "M15 19l-7-7 7-7",
        Glyph::ChevronRight => "M9 5l7 7-7 7",
        Glyph::Star => {
            "M11.049 2.927c.3-.921 1.603-.921 1.902 0l1.519 4.674a1 1 0 00.95.69h4.915c.969 0 \
             1.371 1.24.588 1.81l-3.976 2.888a1 1 0 00-.363 1.118l1.518 4.674c.3.922-.755 \
             1.688-1.538 1.118l-3.976-2.888a1 1 0 00-1.176 0l-3.976 2.888c-.783.57-1.838-.197\
             -1.538-1.118l1.518-4.674a1 1 0 00-.363-1.118l-3.976-2.888c-.784-.57-.38-1.81.588\
             -1.81h4.914a1 1 0 00.951-.69l1.519-4.674z"
        }
        Glyph::Sun => {
            "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 \
             6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 \
             4 0 018 0z"
        }
        Glyph::Moon => {
            "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 \
             008.354-5.646z"
        }
        Glyph::Monitor => {
            "M9.75 17L9 20l-.75 1h7.5L15 20l-.75-3M3 13h18M5 17h14a2 2 0 002-2V6a2 2 0 \
             00-2-2H5a2 2 0 00-2 2v9a2 2 0 002 2z"
        }
        Glyph::ArrowRight => "M14 5l7 7m0 0l-7 7m7-7H3",
    }
}

/// Glyphs drawn as a filled shape instead of a stroked outline.
fn is_filled(glyph: Glyph) -> bool {
    matches!(glyph, Glyph::Star)
}

/// Inline SVG icon for a glyph, colored via `currentColor`.
#[component]
pub fn Icon(
    glyph: Glyph,
    /// CSS classes controlling size and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let fill = if is_filled(glyph) { "currentColor" } else { "none" };

    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=path_d(glyph) />
        </svg>
    }
}
