//! apoteca-notify: outbound note announcements.
//!
//! When a note lands on the team board, the roster's valid addresses get
//! an email about it. Delivery is fire-and-forget: a failure is logged and
//! reported, but the note itself always stays on the board — posting and
//! announcing are independent.

pub mod announcement;
pub mod notifier;

#[cfg(feature = "smtp")]
pub mod smtp;

pub use announcement::*;
pub use notifier::*;

#[cfg(feature = "smtp")]
pub use smtp::SmtpNotifier;
