//! # Docfind Architecture
//!
//! Docfind is a **UI-agnostic doctor directory library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: fetch → ingest → session                    │
//! │  - Returns structured Result types plus diagnostics         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core Layer (session.rs, filter.rs, query.rs, ingest.rs)    │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source.rs)                                   │
//! │  - Abstract DoctorSource trait                              │
//! │  - RemoteSource (production), StaticSource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Core State Machine
//!
//! The interesting part of this crate is the filter/sort/search state
//! machine and its query-string synchronization:
//!
//! - [`model::FilterState`] is the complete persisted-state surface. It is
//!   owned by one [`session::DirectorySession`] per browsing session—no
//!   globals.
//! - [`filter`] derives the visible list as a pure function of (list,
//!   state); filters compose commutatively and the sort is stable.
//! - [`query`] maps state to and from a query string so views are
//!   shareable; `decode(encode(s)) == s` for every state.
//! - Search input is debounced through the `quiesce` crate so a typing
//!   burst costs one recomputation, never a stale mix of inputs.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, core, source), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<...>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a web UI, a TUI, or any other
//! client.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for loading a directory
//! - [`session`]: Session-scoped state owner; user intents live here
//! - [`filter`]: Pure filter/sort engine, suggestions, specialty options
//! - [`query`]: Query-string encode/decode (the URL sync protocol)
//! - [`ingest`]: Validation boundary for the untyped API payload
//! - [`source`]: Record source abstraction and implementations
//! - [`model`]: Core data types (`Doctor`, `FilterState`, enums)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod model;
pub mod query;
pub mod session;
pub mod source;
