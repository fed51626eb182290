#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{InMemorySessionStore, SessionStore, Storage, StorageError, TOKEN_KEY, USER_KEY};
