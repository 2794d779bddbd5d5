//! Mail transport implementations
//!
//! [`HttpMailer`] talks to the configured HTTP mail provider; [`MockMailer`]
//! captures messages in memory for development and tests.

pub mod http_mailer;
pub mod mock_mailer;

pub use http_mailer::HttpMailer;
pub use mock_mailer::{MockMailer, SentMail};
