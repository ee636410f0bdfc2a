//! # devdays - 100 Days of Web Development
//!
//! A command-line browser for a 100-day web development curriculum.
//!
//! ## Features
//!
//! - **Hand-authored Lessons**: built-in lessons plus optional extra lesson files
//! - **Placeholder Days**: templated lessons for every day from 3 to 100
//! - **Category Index**: lessons grouped by category, ordered by day
//! - **Coverage Audit**: duplicated and missing day numbers
//! - **Data Export**: lessons, exercises and index as CSV, JSON or Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use devdays::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod content;
pub mod libs;
