#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth_session;
pub mod error;
pub mod profile_service;

pub use api::{ApiConfig, HttpProfileApi, ProfileApi};
pub use app_services::AppServices;
pub use auth_session::{AuthSession, BearerToken};
pub use error::{ApiError, AppServicesError, AuthError, ProfileServiceError};
pub use profile_service::ProfileService;
pub use reqwest::StatusCode;
