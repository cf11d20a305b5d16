// Navigation panel state - presentation-only, never feeds into the builder
use serde::Serialize;

/// Open/closed state of the navigation panel. A plain toggle; the view-model
/// build is independent of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavPanel {
    pub expanded: bool,
}

impl NavPanel {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        let mut panel = NavPanel::default();
        assert!(!panel.expanded);
        panel.toggle();
        assert!(panel.expanded);
        panel.toggle();
        assert!(!panel.expanded);
    }
}
