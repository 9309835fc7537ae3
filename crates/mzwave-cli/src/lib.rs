//! mzwave CLI library.
//!
//! This crate provides the core functionality for the `mzwave` binary:
//! loading requests from JSON or peak text files, and the `render`,
//! `validate` and `inspect` commands.

pub mod commands;
pub mod input;
