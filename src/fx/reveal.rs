use serde::{Deserialize, Serialize};

/// Distance hidden elements sit away from their resting place.
pub const REVEAL_OFFSET_REM: f32 = 2.5;
/// Length of the fade/slide transition.
pub const REVEAL_DURATION_MS: u32 = 1000;

/// Direction an element slides in from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slide {
    #[default]
    Up,
    Left,
    Right,
}

/// A per-element reveal declaration: where it slides from and how long it
/// waits after its section becomes visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    pub slide: Slide,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub translate_x_rem: f32,
    pub translate_y_rem: f32,
    pub delay_ms: u32,
}

impl Reveal {
    pub fn up(delay_ms: u32) -> Self {
        Self {
            slide: Slide::Up,
            delay_ms,
        }
    }

    pub fn left(delay_ms: u32) -> Self {
        Self {
            slide: Slide::Left,
            delay_ms,
        }
    }

    pub fn right(delay_ms: u32) -> Self {
        Self {
            slide: Slide::Right,
            delay_ms,
        }
    }

    /// Style for the given visibility. The hidden style is what every element
    /// renders first, so the transition plays even for sections that are
    /// already on screen when they mount.
    pub fn style(&self, visible: bool) -> RevealStyle {
        if visible {
            return RevealStyle {
                opacity: 1.0,
                translate_x_rem: 0.0,
                translate_y_rem: 0.0,
                delay_ms: self.delay_ms,
            };
        }
        let (x, y) = match self.slide {
            Slide::Up => (0.0, REVEAL_OFFSET_REM),
            Slide::Left => (-REVEAL_OFFSET_REM, 0.0),
            Slide::Right => (REVEAL_OFFSET_REM, 0.0),
        };
        RevealStyle {
            opacity: 0.0,
            translate_x_rem: x,
            translate_y_rem: y,
            delay_ms: self.delay_ms,
        }
    }
}

/// Reveal state for an element that can mount after its section has already
/// flipped, such as a card re-rendered by a filter. It reports hidden until the
/// element has painted once, so its hidden style always lands first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MountGate {
    painted: bool,
}

impl MountGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the first paint. Returns `true` only the first time.
    pub fn paint(&mut self) -> bool {
        !std::mem::replace(&mut self.painted, true)
    }

    pub fn shown(&self, section_visible: bool) -> bool {
        self.painted && section_visible
    }
}

impl RevealStyle {
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}rem, {}rem); transition: opacity {d}ms ease-out, transform {d}ms ease-out; transition-delay: {}ms;",
            self.opacity,
            self.translate_x_rem,
            self.translate_y_rem,
            self.delay_ms,
            d = REVEAL_DURATION_MS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_mount_starts_hidden_then_flips() {
        let reveal = Reveal::up(150);
        let mut gate = MountGate::new();

        // section already on screen, card only just created
        assert_eq!(reveal.style(gate.shown(true)), reveal.style(false));
        assert_eq!(reveal.style(gate.shown(true)).opacity, 0.0);

        assert!(gate.paint());
        assert!(!gate.paint());
        let shown = reveal.style(gate.shown(true));
        assert_eq!(shown.opacity, 1.0);
        assert_eq!(shown.translate_y_rem, 0.0);
        assert_eq!(shown.delay_ms, 150);
    }

    #[test]
    fn test_painted_card_waits_for_section() {
        let mut gate = MountGate::new();
        gate.paint();
        assert!(!gate.shown(false));
        assert!(gate.shown(true));
    }

    #[test]
    fn test_hidden_style_offsets_by_direction() {
        let up = Reveal::up(0).style(false);
        assert_eq!(up.opacity, 0.0);
        assert_eq!(up.translate_y_rem, 2.5);
        assert_eq!(up.translate_x_rem, 0.0);

        let left = Reveal::left(300).style(false);
        assert_eq!(left.translate_x_rem, -2.5);
        assert_eq!(left.translate_y_rem, 0.0);

        let right = Reveal::right(500).style(false);
        assert_eq!(right.translate_x_rem, 2.5);
    }

    #[test]
    fn test_visible_style_rests_at_origin() {
        for reveal in [Reveal::up(0), Reveal::left(300), Reveal::right(500)] {
            let style = reveal.style(true);
            assert_eq!(style.opacity, 1.0);
            assert_eq!(style.translate_x_rem, 0.0);
            assert_eq!(style.translate_y_rem, 0.0);
        }
    }

    #[test]
    fn test_delay_is_carried_in_both_states() {
        let reveal = Reveal::right(500);
        assert_eq!(reveal.style(false).delay_ms, 500);
        assert_eq!(reveal.style(true).delay_ms, 500);
    }

    #[test]
    fn test_staggered_delays_are_independent() {
        let styles = (0..4u32)
            .map(|i| Reveal::up(i * 50).style(true).delay_ms)
            .collect::<Vec<_>>();
        assert_eq!(styles, vec![0, 50, 100, 150]);
    }

    #[test]
    fn test_css_output() {
        let css = Reveal::up(300).style(false).to_css();
        assert!(css.contains("opacity: 0;"));
        assert!(css.contains("translate(0rem, 2.5rem)"));
        assert!(css.contains("transition-delay: 300ms;"));

        let css = Reveal::up(300).style(true).to_css();
        assert!(css.contains("opacity: 1;"));
        assert!(css.contains("translate(0rem, 0rem)"));
    }
}
