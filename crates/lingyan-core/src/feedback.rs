//! Visual state of a copy button.

/// Copy button state. Both outcomes revert to `Idle` after the feedback delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyFeedback {
    /// Button markup for this state.
    pub fn icon_html(self) -> &'static str {
        match self {
            CopyFeedback::Idle => r#"<i class="fas fa-copy"></i>"#,
            CopyFeedback::Copied => r#"<i class="fas fa-check"></i>"#,
            CopyFeedback::Failed => r#"<i class="fas fa-times"></i>"#,
        }
    }

    /// Class added to the button for this state.
    pub fn class(self) -> Option<&'static str> {
        match self {
            CopyFeedback::Idle => None,
            CopyFeedback::Copied => Some("copied"),
            CopyFeedback::Failed => Some("copy-failed"),
        }
    }

    /// Every class any state may add, for resetting.
    pub const CLASSES: [&'static str; 2] = ["copied", "copy-failed"];

    /// Whether this state is transient.
    pub fn reverts(self) -> bool {
        self != CopyFeedback::Idle
    }
}
