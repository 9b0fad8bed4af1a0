//! # Pastebox Architecture
//!
//! Pastebox is a **local paste manager library** with a small CLI client on
//! top. Pastes are short titled texts kept in one named slot of a local
//! key-value store; there is no server and no sync.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the PasteStore           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Search, view, messages; returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PasteStore: the authoritative in-memory list             │
//! │  - KvBackend: FsBackend (production), MemBackend (testing)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Store Contract
//!
//! - The store is loaded once when opened and written in full after every
//!   mutation.
//! - Updating or deleting an id that does not exist changes nothing and is
//!   not an error.
//! - A failed write keeps the in-memory change and is reported as a
//!   warning, never as a lost edit.
//! - A corrupt slot opens as an empty list with a warning.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`store`]: The paste store and its key-value backends
//! - [`model`]: Core data types (`Paste`, `PasteDraft`, `PasteUpdate`)
//! - [`id`]: Compact, collision-free id generation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod store;
