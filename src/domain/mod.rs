//! Domain types and DTOs
//!
//! Backend-owned records as the client sees them. The client never mutates
//! lifecycle state locally beyond mirroring a successful backend response.

pub mod bids;
pub mod bookings;
pub mod common;
pub mod organizations;
pub mod reports;
pub mod requests;
pub mod status;
pub mod users;

// Re-export commonly used types
pub use bids::*;
pub use bookings::*;
pub use common::*;
pub use organizations::*;
pub use reports::*;
pub use requests::*;
pub use status::{BidStatus, BookingStatus, RequestStatus, VerificationStatus};
pub use users::*;
