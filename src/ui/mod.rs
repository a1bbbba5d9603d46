//! View-model building blocks shared by every screen

pub mod badge;
pub mod filter;
pub mod form;
pub mod list;
pub mod toast;

pub use badge::{status_badge, status_label, BadgeVariant};
pub use filter::{facet_options, Facet, Filterable, ListFilter, ALL};
pub use form::{validate_slot, FormErrors};
pub use list::ListState;
pub use toast::{Toast, ToastKind, Toaster};
