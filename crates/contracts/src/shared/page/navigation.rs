use crate::shared::config::NavigationConfig;

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    pub expanded: bool,
}

impl NavMenu {
    /// Start from the `aria-expanded` attribute the markup ships with.
    pub fn from_aria(value: Option<&str>) -> Self {
        Self {
            expanded: value == Some("true"),
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Returns `true` if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.expanded, false)
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    /// Icon for the toggle button: what clicking it would do next.
    pub fn icon<'a>(&self, config: &'a NavigationConfig) -> &'a str {
        if self.expanded {
            &config.open_icon
        } else {
            &config.closed_icon
        }
    }

    /// Body `overflow` while the menu is in this state; `None` clears it.
    pub fn body_overflow(&self) -> Option<&'static str> {
        self.expanded.then_some("hidden")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let config = NavigationConfig::default();
        let mut menu = NavMenu::from_aria(Some("false"));
        assert_eq!(menu.icon(&config), "☰");
        assert_eq!(menu.body_overflow(), None);

        menu.toggle();
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.icon(&config), "✕");
        assert_eq!(menu.body_overflow(), Some("hidden"));

        assert!(menu.close());
        assert!(!menu.close());
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn test_from_aria() {
        assert!(NavMenu::from_aria(Some("true")).expanded);
        assert!(!NavMenu::from_aria(None).expanded);
        assert!(!NavMenu::from_aria(Some("yes")).expanded);
    }
}
