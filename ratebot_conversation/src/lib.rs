#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Rate-browsing conversations.
//!
//! A user asks for the list with the `rate` keyword (or the menu), pages
//! through it ten currencies at a time with the "more" quick reply, and picks
//! a currency to see its buy, sell and transfer rates.
//!
//! # Key Features
//! - Per-user page tracking with idle expiry
//! - Each user pages through the snapshot they were shown, even when another
//!   user refreshes the list meanwhile
//! - Best-effort seen/typing indicators around every reply

mod controller;
mod render;
mod store;
pub mod texts;

pub use controller::{ConversationController, InboundEvent};
pub use render::{menu, rate_details};
pub use store::{ConversationStore, UserSession};
