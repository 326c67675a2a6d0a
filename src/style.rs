//! Stylesheet injected at start-up for effects the page CSS does not ship.

use crate::reveal::REVEALED_CLASS;

/// Element id of the injected `<style>` block, so a second start-up does not
/// add it twice.
pub const STYLE_ELEMENT_ID: &str = "showcase-effects";

pub fn effects_css() -> String {
    format!(
        "@keyframes ripple {{ to {{ transform: scale(4); opacity: 0; }} }}\n\
         .{REVEALED_CLASS} {{ animation: fadeInUp 0.8s ease forwards !important; }}\n\
         @media (prefers-reduced-motion: reduce) {{\n\
         .{REVEALED_CLASS} {{ animation: none !important; opacity: 1 !important; transform: none !important; }}\n\
         }}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_defines_ripple_and_reveal() {
        let css = effects_css();
        assert!(css.contains("@keyframes ripple"));
        assert!(css.contains(".animate-in { animation: fadeInUp"));
        assert!(css.contains("prefers-reduced-motion: reduce"));
    }
}
