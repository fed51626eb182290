use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionUserError {
    #[error("stored user record is not a JSON object")]
    NotAnObject,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The user record kept in the local session store.
///
/// Only `username` is interpreted; every other field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionUser(Map<String, Value>);

impl SessionUser {
    #[must_use]
    pub fn new(username: impl Into<String>, email: Option<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("username".into(), Value::String(username.into()));
        if let Some(email) = email {
            fields.insert("email".into(), Value::String(email));
        }
        Self(fields)
    }

    /// # Errors
    ///
    /// Returns `SessionUserError` if `raw` is not a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, SessionUserError> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(fields) => Ok(Self(fields)),
            _ => Err(SessionUserError::NotAnObject),
        }
    }

    /// # Errors
    ///
    /// Returns `SessionUserError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, SessionUserError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.0.get("username").and_then(Value::as_str)
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.0
            .insert("username".into(), Value::String(username.into()));
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}
