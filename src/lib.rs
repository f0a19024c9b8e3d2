//! # Scriptorium - Bible API Client
//!
//! A typed async client for a Bible reading HTTP API, plus the command line
//! that drives it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   args    ┌──────────────┐   calls   ┌─────────────────┐
//! │  cmd_args   │──────────▶│     cmd      │──────────▶│ BibleApiClient  │──▶ HTTP API
//! │ (clap)      │           │ (dispatch)   │           │ (reqwest)       │
//! └─────────────┘           └──────┬───────┘           └────────▲────────┘
//!                                  │ results                    │ base URL
//!                                  ▼                            │
//!                           ┌──────────────┐           ┌────────┴────────┐
//!                           │    output    │           │     config      │
//!                           │ (plain text) │           │ (env + profile) │
//!                           └──────────────┘           └─────────────────┘
//! ```
//!
//! The client holds no mutable state. Each operation is one GET round trip
//! whose failure, whatever its cause, is returned to the caller.

pub mod client;
pub mod cmd;
pub mod cmd_args;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

// Re-export main types for easy access
pub use client::BibleApiClient;
pub use config::{ApiBaseSource, ClientConfig};
pub use error::{Error, Result};
pub use models::{ChapterVerse, FullBookChapter, SearchResult};
