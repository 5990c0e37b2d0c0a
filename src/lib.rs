//! Site Kit command palette: fuzzy command matching over a fixed catalog,
//! plus the terminal surface that drives it.

pub mod actions;
pub mod app;
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod filter;
pub mod group;
pub mod matching;
pub mod palette;
pub mod state;
pub mod ui;

pub use catalog::{Catalog, Category, Command, CommandAction};
pub use filter::{filter_commands, FilterGeneration};
pub use group::group_commands;
pub use matching::{distance, fuzzy_match, Matcher};
