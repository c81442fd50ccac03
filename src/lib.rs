//! Core of the Newsdesk journalism assistant: upload validation, panel
//! controllers and the content-processing boundary. Nothing in here depends
//! on the GUI toolkit.

pub mod activity;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod export;
pub mod language;
pub mod navigation;
pub mod panels;
pub mod processor;
pub mod task;
pub mod upload;
