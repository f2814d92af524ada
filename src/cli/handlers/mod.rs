//! Shared command handlers

pub mod list;

pub use list::print_list;
