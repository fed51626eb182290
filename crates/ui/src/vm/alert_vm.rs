use std::time::Duration;

/// How long an alert stays visible.
pub const ALERT_DURATION: Duration = Duration::from_secs(5);

pub const UPDATE_SUCCESS_MESSAGE: &str = "Profile updated successfully!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertVm {
    pub message: String,
    pub kind: AlertKind,
}

impl AlertVm {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: AlertKind::Success,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: AlertKind::Error,
        }
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        format!("alert alert-{} show", self.kind.as_str())
    }
}

/// Single-slot alert holder. A new alert replaces the current one, and a
/// dismissal only applies to the alert it was scheduled for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertSlot {
    current: Option<(u64, AlertVm)>,
    next_id: u64,
}

impl AlertSlot {
    /// Show `alert`, returning the id to pass to [`AlertSlot::dismiss`].
    pub fn show(&mut self, alert: AlertVm) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some((id, alert));
        id
    }

    /// Hide the alert with `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if matches!(self.current, Some((current, _)) if current == id) {
            self.current = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn current(&self) -> Option<&AlertVm> {
        self.current.as_ref().map(|(_, alert)| alert)
    }
}
