//! AuditBridge client
//!
//! Headless client for the AuditBridge audit marketplace: organizations
//! publish audit requests, experts bid and execute audits, admins verify
//! experts. This crate holds the typed REST client and the per-screen
//! view-models a renderer binds to.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod screens;
pub mod ui;

pub use api::ApiClient;
pub use auth::{Role, Session};
pub use config::Settings;
pub use error::{ClientError, ClientResult};
pub use ui::{Toast, ToastKind, Toaster};
