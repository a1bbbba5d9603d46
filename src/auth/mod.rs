pub mod claims;
pub mod session;

pub use claims::Claims;
pub use session::{Role, Session};
