//! Entrance reveals, skill-bar fill animation and button ripples.

use std::collections::HashSet;
use std::time::Duration;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_CLASS: &str = "visible";
pub const REVEAL_SELECTOR: &str = ".section-title, .about-text, .stat, .timeline-item, .project-card, .skill-category, .contact-info, .contact-form";

pub const SKILL_BAR_THRESHOLD: f64 = 0.5;
pub const SKILL_BAR_DELAY: Duration = Duration::from_millis(200);

pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);
pub const RIPPLE_HOST_SELECTOR: &str = ".btn";
/// Inline styles the clicked button needs to clip its ripple.
pub const RIPPLE_HOST_STYLE: [(&str, &str); 2] = [("position", "relative"), ("overflow", "hidden")];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealChange {
    Revealed,
    Unchanged,
}

/// One-shot visibility record per observed element.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn observe(&mut self, key: &str, intersecting: bool) -> RevealChange {
        if !intersecting || self.revealed.contains(key) {
            return RevealChange::Unchanged;
        }
        self.revealed.insert(key.to_string());
        RevealChange::Revealed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillBarPhase {
    /// Initial render at the target width.
    Resting,
    Collapsed,
    Expanded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillBar {
    target: u8,
    phase: SkillBarPhase,
}

impl SkillBar {
    pub fn new(level: u8) -> Self {
        Self {
            target: level.min(100),
            phase: SkillBarPhase::Resting,
        }
    }

    /// Every entry into view restarts the fill from zero.
    pub fn on_intersect(&mut self) {
        self.phase = SkillBarPhase::Collapsed;
    }

    /// Called once [`SKILL_BAR_DELAY`] has elapsed after a collapse.
    pub fn on_delay_elapsed(&mut self) {
        if self.phase == SkillBarPhase::Collapsed {
            self.phase = SkillBarPhase::Expanded;
        }
    }

    pub fn rendered_width(&self) -> String {
        match self.phase {
            SkillBarPhase::Collapsed => "0%".to_string(),
            SkillBarPhase::Resting | SkillBarPhase::Expanded => format!("{}%", self.target),
        }
    }
}

/// Parses a `data-width` value such as `"85%"` or `"62.5%"`, clamped and
/// rounded to a whole percentage.
pub fn parse_width(value: &str) -> Option<u8> {
    let number = value.trim().strip_suffix('%')?.trim().parse::<f64>().ok()?;
    if !number.is_finite() {
        return None;
    }
    Some(number.clamp(0.0, 100.0).round() as u8)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn to_css(self) -> String {
        format!(
            "position: absolute; width: {size:.2}px; height: {size:.2}px; left: {left:.2}px; top: {top:.2}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s linear; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

/// Ripple centered on the click point, sized to cover the button.
pub fn ripple_geometry(
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
    client_x: f64,
    client_y: f64,
) -> Ripple {
    let size = rect_width.max(rect_height);
    Ripple {
        size,
        left: client_x - rect_left - size / 2.0,
        top: client_y - rect_top - size / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_shot() {
        let mut tracker = RevealTracker::default();
        assert_eq!(tracker.observe("stat-0", false), RevealChange::Unchanged);
        assert!(tracker.revealed.is_empty());

        assert_eq!(tracker.observe("stat-0", true), RevealChange::Revealed);
        assert_eq!(tracker.observe("stat-0", false), RevealChange::Unchanged);
        assert_eq!(tracker.observe("stat-0", true), RevealChange::Unchanged);
        assert!(tracker.revealed.contains("stat-0"));
        assert_eq!(tracker.revealed.len(), 1);
    }

    #[test]
    fn skill_bar_collapses_then_expands() {
        let mut bar = SkillBar::new(85);
        assert_eq!(bar.rendered_width(), "85%");

        bar.on_intersect();
        assert_eq!(bar.rendered_width(), "0%");
        bar.on_delay_elapsed();
        assert_eq!(bar.phase, SkillBarPhase::Expanded);
        assert_eq!(bar.rendered_width(), "85%");

        bar.on_intersect();
        assert_eq!(bar.rendered_width(), "0%");
    }

    #[test]
    fn stray_delay_does_not_expand_resting_bar() {
        let mut bar = SkillBar::new(70);
        bar.on_delay_elapsed();
        assert_eq!(bar.phase, SkillBarPhase::Resting);
    }

    #[test]
    fn levels_are_clamped() {
        assert_eq!(SkillBar::new(140).target, 100);
        assert_eq!(parse_width("90%"), Some(90));
        assert_eq!(parse_width(" 72 % "), Some(72));
        assert_eq!(parse_width("90"), None);
    }

    #[test]
    fn widths_beyond_the_scale_still_animate() {
        assert_eq!(parse_width("150%"), Some(100));
        assert_eq!(parse_width("256%"), Some(100));
        assert_eq!(parse_width("1000%"), Some(100));
        assert_eq!(parse_width("100.0%"), Some(100));
        assert_eq!(parse_width("62.5%"), Some(63));
        assert_eq!(parse_width("-5%"), Some(0));
        assert_eq!(parse_width("NaN%"), None);
        assert_eq!(parse_width("wide%"), None);
    }

    #[test]
    fn ripple_is_centered_on_click() {
        let ripple = ripple_geometry(100.0, 50.0, 160.0, 40.0, 180.0, 70.0);
        assert_eq!(ripple.size, 160.0);
        assert_eq!(ripple.left, 0.0);
        assert_eq!(ripple.top, -60.0);
    }

    #[test]
    fn ripple_style_is_self_contained() {
        let ripple = ripple_geometry(0.0, 0.0, 120.0, 40.0, 60.0, 20.0);
        assert_eq!(
            ripple.to_css(),
            "position: absolute; width: 120.00px; height: 120.00px; left: 0.00px; top: -40.00px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s linear; pointer-events: none;"
        );
        assert_eq!(RIPPLE_HOST_STYLE, [("position", "relative"), ("overflow", "hidden")]);
    }
}
