//! Responsive shell layout

/// Width of the expanded sidebar
pub const SIDEBAR_EXPANDED_PX: f64 = 240.0;

/// Width of the collapsed sidebar
pub const SIDEBAR_COLLAPSED_PX: f64 = 68.0;

/// Space kept free under the content for the bottom navigation bar
pub const BOTTOM_NAV_PX: f64 = 80.0;

/// Default width below which the compact layout is used
pub const DEFAULT_BREAKPOINT_PX: f64 = 900.0;

/// Which navigation surface is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
    Sidebar,
    BottomNav,
}

/// Offsets applied to the main content area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub nav: NavKind,
    pub margin_left: f64,
    pub padding_bottom: f64,
}

impl Layout {
    /// Compute the layout for a viewport width
    ///
    /// Below `breakpoint` the sidebar is replaced by a bottom bar and the
    /// expanded flag is ignored.
    pub fn for_viewport(width: f64, sidebar_expanded: bool, breakpoint: f64) -> Self {
        if width < breakpoint {
            return Self {
                nav: NavKind::BottomNav,
                margin_left: 0.0,
                padding_bottom: BOTTOM_NAV_PX,
            };
        }

        Self {
            nav: NavKind::Sidebar,
            margin_left: if sidebar_expanded {
                SIDEBAR_EXPANDED_PX
            } else {
                SIDEBAR_COLLAPSED_PX
            },
            padding_bottom: 0.0,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.nav == NavKind::BottomNav
    }

    /// Inline style for the content container
    pub fn content_style(&self) -> String {
        format!(
            "margin-left: {}px; padding-bottom: {}px;",
            self.margin_left, self.padding_bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wide_viewport_uses_sidebar() {
        let expanded = Layout::for_viewport(1280.0, true, DEFAULT_BREAKPOINT_PX);
        assert_eq!(expanded.nav, NavKind::Sidebar);
        assert_eq!(expanded.margin_left, 240.0);
        assert_eq!(expanded.padding_bottom, 0.0);

        let collapsed = Layout::for_viewport(1280.0, false, DEFAULT_BREAKPOINT_PX);
        assert_eq!(collapsed.margin_left, 68.0);
    }

    #[test]
    fn test_narrow_viewport_uses_bottom_nav() {
        for expanded in [true, false] {
            let layout = Layout::for_viewport(600.0, expanded, DEFAULT_BREAKPOINT_PX);
            assert!(layout.is_compact());
            assert_eq!(layout.margin_left, 0.0);
            assert_eq!(layout.padding_bottom, 80.0);
        }
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert!(!Layout::for_viewport(900.0, true, 900.0).is_compact());
        assert!(Layout::for_viewport(899.0, true, 900.0).is_compact());
    }

    #[test]
    fn test_content_style() {
        let layout = Layout::for_viewport(1000.0, false, 900.0);
        assert_eq!(layout.content_style(), "margin-left: 68px; padding-bottom: 0px;");
    }
}
