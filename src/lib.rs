//! Groove: session core for a privacy-flavoured browser shell.
//!
//! Tabs with per-tab back/forward history, URL bar resolution, simulated
//! shield counters and the session-wide registries (bookmarks, history,
//! reading list, downloads), persisted as key → JSON documents.
//! Page rendering is left to an external sandboxed frame.

pub mod app;
pub mod config;
pub mod database;
pub mod managers;
pub mod persistence;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
