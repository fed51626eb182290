use dioxus::prelude::*;

use crate::vm::{ALERT_DURATION, AlertSlot, AlertVm};

/// Page-local handle for showing transient alerts.
#[derive(Clone, Copy)]
pub struct AlertHandle {
    slot: Signal<AlertSlot>,
}

impl AlertHandle {
    /// Show `alert` now and hide it after [`ALERT_DURATION`], unless a newer
    /// alert has replaced it by then.
    pub fn show(&self, alert: AlertVm) {
        let mut slot = self.slot;
        let id = slot.write().show(alert);
        spawn(async move {
            tokio::time::sleep(ALERT_DURATION).await;
            slot.write().dismiss(id);
        });
    }

    #[must_use]
    pub fn current(&self) -> Option<AlertVm> {
        self.slot.read().current().cloned()
    }
}

pub fn use_alert() -> AlertHandle {
    let slot = use_signal(AlertSlot::default);
    AlertHandle { slot }
}

#[component]
pub fn AlertToast(alert: Option<AlertVm>) -> Element {
    match alert {
        Some(alert) => rsx! {
            div { id: "alertMessage", class: "{alert.class_name()}", role: "status",
                "{alert.message}"
            }
        },
        None => rsx! {
            div { id: "alertMessage", class: "alert" }
        },
    }
}
