//! readmegen: README generation from a repository tree
//!
//! Scans a workspace into a plain-text repository context, sends it with a
//! fixed instruction prompt to a hosted text-generation model, and writes the
//! returned Markdown as the workspace README.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod generation;
pub mod ignore;
pub mod logging;
pub mod output;
pub mod provider;
