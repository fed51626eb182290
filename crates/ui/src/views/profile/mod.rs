mod actions;
mod components;
mod state;
mod view;

pub use view::ProfileView;
#[cfg(test)]
pub(crate) use state::ProfileTestHandles;
