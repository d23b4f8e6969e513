//! Status icon classes for workflow and node phases.

use flowdeck_workflow::NodePhase;

/// Icon shown next to a workflow or node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Failed,
    Success,
    Running,
    Pending,
    /// Anything not yet reported, or a phase without its own icon.
    Init,
}

impl StatusIcon {
    /// Pick the icon for a phase.
    #[must_use]
    pub const fn for_phase(phase: NodePhase) -> Self {
        match phase {
            NodePhase::Error | NodePhase::Failed => Self::Failed,
            NodePhase::Succeeded => Self::Success,
            NodePhase::Running => Self::Running,
            NodePhase::Pending => Self::Pending,
            NodePhase::Skipped | NodePhase::Omitted | NodePhase::Unknown => Self::Init,
        }
    }

    /// CSS class tokens for this icon.
    #[must_use]
    pub const fn classes(self) -> &'static [&'static str] {
        match self {
            Self::Failed => &["fa-times-circle", "status-icon--failed"],
            Self::Success => &["fa-check-circle", "status-icon--success"],
            Self::Running => &["fa-circle-notch", "status-icon--running", "status-icon--spin"],
            Self::Pending => &["fa-clock", "status-icon--pending", "status-icon--slow-spin"],
            Self::Init => &["fa-clock", "status-icon--init"],
        }
    }
}

impl std::fmt::Display for StatusIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.classes().join(" "))
    }
}

/// Space-separated icon classes for a phase name.
///
/// Unknown phase names get the initial icon.
///
/// ```
/// use flowdeck_ui::status_icon_classes;
///
/// assert_eq!(status_icon_classes("Succeeded"), "fa-check-circle status-icon--success");
/// assert_eq!(status_icon_classes("whatever"), "fa-clock status-icon--init");
/// ```
#[inline]
#[must_use]
pub fn status_icon_classes(status: &str) -> String {
    StatusIcon::for_phase(NodePhase::parse(status)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_phases_share_icon() {
        assert_eq!(
            status_icon_classes("Error"),
            "fa-times-circle status-icon--failed"
        );
        assert_eq!(
            status_icon_classes("Failed"),
            "fa-times-circle status-icon--failed"
        );
    }

    #[test]
    fn test_running_spins() {
        assert_eq!(
            status_icon_classes("Running"),
            "fa-circle-notch status-icon--running status-icon--spin"
        );
    }

    #[test]
    fn test_pending_slow_spins() {
        assert_eq!(
            status_icon_classes("Pending"),
            "fa-clock status-icon--pending status-icon--slow-spin"
        );
    }

    #[test]
    fn test_other_phases_are_init() {
        for status in ["Skipped", "Omitted", "", "running", "Deferred"] {
            assert_eq!(status_icon_classes(status), "fa-clock status-icon--init");
        }
    }

    #[test]
    fn test_for_phase() {
        assert_eq!(StatusIcon::for_phase(NodePhase::Succeeded), StatusIcon::Success);
        assert_eq!(StatusIcon::for_phase(NodePhase::Unknown), StatusIcon::Init);
    }
}
