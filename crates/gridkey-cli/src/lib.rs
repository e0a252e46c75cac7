//! Command line front end for header-layout grid extraction.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
