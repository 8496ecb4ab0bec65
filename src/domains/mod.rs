//! Domains module containing functionality organized by bounded context.
//!
//! `commands` is the shared foundation: tools and resources both build and
//! run their warrior command lines through it.

pub mod commands;
pub mod prompts;
pub mod resources;
pub mod tools;
