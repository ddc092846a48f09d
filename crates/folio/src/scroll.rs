//! Page navigation and scroll-derived header state.

use serde::Serialize;

/// Scroll offset (px) after which the header turns opaque.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.;

/// Anchor targets of the single page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Resolves an in-page `#id` link.
    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        Section::NAV.into_iter().find(|section| section.id() == id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    scrolled: bool,
    menu_open: bool,
}

impl HeaderState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns `true` when the opaque/transparent state changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > HEADER_SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Navigation always closes the mobile menu.
    pub fn navigate(&mut self, section: Section) -> Section {
        self.menu_open = false;
        section
    }
}

/// Fraction of the page scrolled, clamped to `0.0..=1.0`.
pub fn progress(scroll_y: f64, scroll_height: f64, inner_height: f64) -> f64 {
    let scrollable = scroll_height - inner_height;
    if scrollable.is_nan() || scrollable <= 0. {
        return 0.;
    }
    (scroll_y / scrollable).clamp(0., 1.)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_opaque_past_threshold() {
        let mut header = HeaderState::default();
        assert!(!header.on_scroll(50.));
        assert!(header.on_scroll(51.));
        assert!(header.is_scrolled());
        assert!(!header.on_scroll(400.));
        assert!(header.on_scroll(0.));
        assert!(!header.is_scrolled());
    }

    #[test]
    fn navigation_closes_menu() {
        let mut header = HeaderState::default();
        header.toggle_menu();
        assert!(header.is_menu_open());
        assert_eq!(header.navigate(Section::Projects).id(), "projects");
        assert!(!header.is_menu_open());
    }

    #[test]
    fn hrefs_resolve_to_sections() {
        for section in Section::NAV {
            assert_eq!(Section::from_href(&section.href()), Some(section));
        }
        assert_eq!(Section::from_href("about"), None);
        assert_eq!(Section::from_href("#blog"), None);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(0., 3000., 1000.), 0.);
        assert_eq!(progress(1000., 3000., 1000.), 0.5);
        assert_eq!(progress(5000., 3000., 1000.), 1.);
        assert_eq!(progress(10., 800., 1000.), 0.);
        assert_eq!(progress(10., f64::NAN, 1000.), 0.);
    }
}
