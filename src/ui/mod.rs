//! UI components

pub mod about;
pub mod chrome;
pub mod results;
pub mod search_bar;
pub mod shell;
pub mod theme;
