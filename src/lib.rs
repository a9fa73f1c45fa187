//! Q&A knowledge-base dashboard (qkb)
//!
//! Terminal client for a Q&A knowledge-base backend: a public search/browse
//! view plus an authenticated admin area for managing entries, notes, and
//! user accounts. All persistence, auth, and validation live in the backend
//! HTTP API; this crate is state management and rendering.
//!
//! Layout follows a pure core / impure shell split: [`model`] and [`state`]
//! are plain data and transitions, [`api`] talks to the backend from a
//! worker thread, and [`view`] owns the terminal.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
