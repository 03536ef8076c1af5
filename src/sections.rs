//! Ordered registry of the page's anchor-addressable sections.

/// Lead added to the scroll offset so a section activates slightly before
/// its top reaches the viewport.
pub const ACTIVATION_OFFSET: f64 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub display_order: u8,
}

impl Section {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const SECTIONS: [Section; 6] = [
    Section {
        id: "home",
        label: "Home",
        display_order: 0,
    },
    Section {
        id: "about",
        label: "About",
        display_order: 1,
    },
    Section {
        id: "experience",
        label: "Experience",
        display_order: 2,
    },
    Section {
        id: "projects",
        label: "Projects",
        display_order: 3,
    },
    Section {
        id: "skills",
        label: "Skills",
        display_order: 4,
    },
    Section {
        id: "contact",
        label: "Contact",
        display_order: 5,
    },
];

pub fn find(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.id == id)
}

/// Resolves a URL fragment such as `#about` (leading `#` optional).
pub fn from_fragment(fragment: &str) -> Option<&'static Section> {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    if id.is_empty() {
        return None;
    }
    find(id)
}

/// Measured layout of one rendered section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

pub fn activation_position(scroll_y: f64) -> f64 {
    scroll_y + ACTIVATION_OFFSET
}

/// First section, in display order, whose `[top, top + height)` span holds
/// `position`. `bounds` may arrive in any order.
pub fn active_section(position: f64, bounds: &[SectionBounds]) -> Option<&'static str> {
    let mut ordered: Vec<(u8, &SectionBounds)> = bounds
        .iter()
        .filter_map(|bound| find(bound.id).map(|section| (section.display_order, bound)))
        .collect();
    ordered.sort_by_key(|(order, _)| *order);

    ordered
        .into_iter()
        .find(|(_, bound)| bound.contains(position))
        .map(|(_, bound)| bound.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "home", top: 0.0, height: 800.0 },
            SectionBounds { id: "about", top: 800.0, height: 600.0 },
            SectionBounds { id: "experience", top: 1400.0, height: 900.0 },
            // gap between 2300 and 2400
            SectionBounds { id: "projects", top: 2400.0, height: 1000.0 },
        ]
    }

    #[test]
    fn registry_is_ordered_and_unique() {
        let orders: Vec<u8> = SECTIONS.iter().map(|section| section.display_order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(find("skills").map(|section| section.label), Some("Skills"));
        assert_eq!(find("blog"), None);
    }

    #[test]
    fn position_inside_span_selects_that_section() {
        let bounds = layout();
        assert_eq!(active_section(0.0, &bounds), Some("home"));
        assert_eq!(active_section(799.9, &bounds), Some("home"));
        assert_eq!(active_section(800.0, &bounds), Some("about"));
        assert_eq!(active_section(2399.0, &bounds), None);
        assert_eq!(active_section(2400.0, &bounds), Some("projects"));
    }

    #[test]
    fn overlap_resolves_to_earliest_section() {
        let bounds = vec![
            SectionBounds { id: "about", top: 700.0, height: 600.0 },
            SectionBounds { id: "home", top: 0.0, height: 800.0 },
        ];
        assert_eq!(active_section(750.0, &bounds), Some("home"));
    }

    #[test]
    fn activation_position_leads_scroll() {
        assert_eq!(activation_position(650.0), 850.0);
        assert_eq!(active_section(activation_position(650.0), &layout()), Some("about"));
    }

    #[test]
    fn fragments_resolve_known_sections() {
        assert_eq!(from_fragment("#contact").map(|section| section.id), Some("contact"));
        assert_eq!(from_fragment("projects").map(|section| section.id), Some("projects"));
        assert_eq!(from_fragment("#"), None);
        assert_eq!(from_fragment("#nowhere"), None);
        assert_eq!(SECTIONS[1].href(), "#about");
    }
}
