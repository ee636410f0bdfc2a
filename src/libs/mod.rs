//! Core library modules for devdays.
//!
//! ## Features
//!
//! - **Curriculum**: lesson model, placeholder generation, aggregation
//! - **Browsing**: category index, coverage audit, console rendering
//! - **Infrastructure**: configuration, data storage, messaging, errors
//! - **Export**: CSV, JSON and Excel snapshots
//!
//! ## Usage
//!
//! ```rust
//! use devdays::libs::curriculum::get_all_lessons;
//! use devdays::libs::index::group_by_category;
//!
//! let lessons = get_all_lessons();
//! let index = group_by_category(&lessons);
//! assert_eq!(index[0].first_day, 1);
//! ```

pub mod audit;
pub mod config;
pub mod curriculum;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod generator;
pub mod index;
pub mod lesson;
pub mod messages;
pub mod view;
