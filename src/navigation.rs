//! Navbar state: active section highlighting, the mobile overlay and the
//! scroll-dependent navbar density.

use crate::sections;
use crate::theme::Theme;

pub const DENSITY_THRESHOLD: f64 = 50.0;
const PARALLAX_FACTOR: f64 = 0.1;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub active_section_id: Option<&'static str>,
    pub is_mobile_menu_open: bool,
    pub scroll_y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    ToggleMenu,
    SelectSection(String),
    Scrolled {
        scroll_y: f64,
        active: Option<&'static str>,
    },
}

impl NavigationState {
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::ToggleMenu => self.is_mobile_menu_open = !self.is_mobile_menu_open,
            NavAction::SelectSection(id) => {
                self.select_section(&id);
            }
            NavAction::Scrolled { scroll_y, active } => {
                self.scroll_y = scroll_y;
                // A position between sections leaves the highlight where it was.
                if active.is_some() {
                    self.active_section_id = active;
                }
            }
        }
    }

    /// Closes the mobile overlay and returns the section to scroll to, if
    /// `id` names one.
    pub fn select_section(&mut self, id: &str) -> Option<&'static sections::Section> {
        self.is_mobile_menu_open = false;
        sections::find(id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section_id == Some(id)
    }

    pub fn density(&self) -> NavbarDensity {
        NavbarDensity::for_scroll(self.scroll_y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarDensity {
    Top,
    Scrolled,
}

impl NavbarDensity {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > DENSITY_THRESHOLD {
            Self::Scrolled
        } else {
            Self::Top
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    pub fn to_css(self) -> String {
        format!("background: {}; box-shadow: {};", self.background, self.box_shadow)
    }
}

pub fn navbar_style(theme: Theme, density: NavbarDensity) -> NavbarStyle {
    match (theme, density) {
        (Theme::Dark, NavbarDensity::Scrolled) => NavbarStyle {
            background: "rgba(26, 26, 26, 0.98)",
            box_shadow: "0 2px 20px rgba(0, 0, 0, 0.3)",
        },
        (Theme::Light, NavbarDensity::Scrolled) => NavbarStyle {
            background: "rgba(255, 255, 255, 0.98)",
            box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
        },
        (Theme::Dark, NavbarDensity::Top) => NavbarStyle {
            background: "rgba(26, 26, 26, 0.95)",
            box_shadow: "none",
        },
        (Theme::Light, NavbarDensity::Top) => NavbarStyle {
            background: "rgba(255, 255, 255, 0.95)",
            box_shadow: "none",
        },
    }
}

pub fn hero_parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

pub fn hero_parallax_css(scroll_y: f64) -> String {
    format!("transform: translateY({:.2}px);", hero_parallax_offset(scroll_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips() {
        let mut state = NavigationState::default();
        state.apply(NavAction::ToggleMenu);
        assert!(state.is_mobile_menu_open);
        state.apply(NavAction::ToggleMenu);
        assert!(!state.is_mobile_menu_open);
    }

    #[test]
    fn selecting_always_closes_menu() {
        for open in [true, false] {
            let mut state = NavigationState {
                is_mobile_menu_open: open,
                ..NavigationState::default()
            };
            let target = state.select_section("projects");
            assert_eq!(target.map(|section| section.id), Some("projects"));
            assert!(!state.is_mobile_menu_open);
        }
    }

    #[test]
    fn selecting_unknown_section_is_silent() {
        let mut state = NavigationState {
            is_mobile_menu_open: true,
            active_section_id: Some("about"),
            ..NavigationState::default()
        };
        assert_eq!(state.select_section("blog"), None);
        state.apply(NavAction::SelectSection("blog".to_string()));
        assert!(!state.is_mobile_menu_open);
        assert_eq!(state.active_section_id, Some("about"));
    }

    #[test]
    fn scroll_into_gap_keeps_previous_highlight() {
        let mut state = NavigationState::default();
        state.apply(NavAction::Scrolled {
            scroll_y: 900.0,
            active: Some("about"),
        });
        state.apply(NavAction::Scrolled {
            scroll_y: 2250.0,
            active: None,
        });
        assert!(state.is_active("about"));
        assert_eq!(state.scroll_y, 2250.0);
    }

    #[test]
    fn density_switches_strictly_above_threshold() {
        assert_eq!(NavbarDensity::for_scroll(0.0), NavbarDensity::Top);
        assert_eq!(NavbarDensity::for_scroll(50.0), NavbarDensity::Top);
        assert_eq!(NavbarDensity::for_scroll(50.5), NavbarDensity::Scrolled);
    }

    #[test]
    fn navbar_style_depends_on_theme_and_density() {
        let dark_top = navbar_style(Theme::Dark, NavbarDensity::Top);
        let light_scrolled = navbar_style(Theme::Light, NavbarDensity::Scrolled);
        assert_eq!(dark_top.box_shadow, "none");
        assert_eq!(light_scrolled.background, "rgba(255, 255, 255, 0.98)");
        assert_eq!(
            light_scrolled.to_css(),
            "background: rgba(255, 255, 255, 0.98); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);"
        );
    }

    #[test]
    fn parallax_is_a_tenth_of_scroll() {
        assert_eq!(hero_parallax_offset(300.0), 30.0);
        assert_eq!(hero_parallax_offset(-40.0), -4.0);
        assert_eq!(hero_parallax_css(25.0), "transform: translateY(2.50px);");
    }
}
