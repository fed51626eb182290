mod alert_vm;
mod avatar_vm;
mod profile_vm;
mod stats_vm;

pub use alert_vm::{ALERT_DURATION, AlertKind, AlertSlot, AlertVm, UPDATE_SUCCESS_MESSAGE};
pub use avatar_vm::{AvatarOptionVm, map_avatar_options};
pub use profile_vm::{PhotoVm, ProfileVm};
pub use stats_vm::StatsVm;
