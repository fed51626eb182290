mod alert;
mod entry;
mod profile;
mod state;

pub use alert::{AlertHandle, AlertToast, use_alert};
pub use entry::EntryView;
pub use profile::ProfileView;
#[cfg(test)]
pub(crate) use profile::ProfileTestHandles;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
