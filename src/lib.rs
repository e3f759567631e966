//! Medicore: a role-scoped hospital portal service
//!
//! Medicore exposes the portal boundary of a hospital web app: role
//! resolution, a mock session with durable restore, an in-memory data
//! facade with simulated latency, and role-scoped dashboard composition.

pub mod api;
pub mod auth;
pub mod chat;
pub mod config;
pub mod error;
pub mod services;
pub mod view;

pub use auth::{Access, Role, SessionStore, User};
pub use error::PortalError;
pub use services::{DataError, DataServices};
pub use view::{DashboardLoader, ScopedView, ViewState, ViewerIdentity};
