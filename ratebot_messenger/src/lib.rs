#![deny(
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

//! Facebook Messenger glue: webhook server, Send API client and the wire
//! types both speak.

mod client;
mod error;
pub mod profile;
mod webhook;
pub mod wire;

pub use client::GraphClient;
pub use error::{Error, Result};
pub use profile::PageProfile;
pub use webhook::{AppState, create_router, serve};
