//! Typed access to the marketplace REST backend
//!
//! `ApiClient` carries transport concerns; the resource modules add one
//! method per route.

pub mod admin;
pub mod bookings;
pub mod client;
pub mod envelope;
pub mod expert;
pub mod org;
pub mod requests;

pub use client::ApiClient;
pub use envelope::Envelope;
