//! UI module - reusable widgets drawn by the main window

pub mod components;
