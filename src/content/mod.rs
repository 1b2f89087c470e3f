//! # Site Content
//!
//! Static content the core navigates over: the sidebar menu, page bodies,
//! code samples, release notes, and the path resolver for search targets.
//! Nothing here is mutable and nothing here knows about the terminal.

pub mod changelog;
pub mod menu;
pub mod pages;
pub mod routes;
pub mod samples;
pub mod toc;
