//! Command implementations

pub mod reset;
pub mod share;
pub mod simple;
pub mod status;

pub use reset::reset_session;
pub use share::{share_link, state_share_link};
pub use simple::run_simple;
pub use status::{saved_state, viewed_state};
