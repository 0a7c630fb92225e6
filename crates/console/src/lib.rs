//! Forno Console library.
//!
//! This crate provides the console functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod remote;
pub mod routes;
pub mod state;
pub mod storage;
pub mod store;
