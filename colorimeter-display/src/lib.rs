//! Character-screen rendering for the colorimeter
//!
//! This crate provides:
//! - `Screen`, one frame of text rows with an optional inverted row
//! - `DisplayBackend` trait for the panel driver
//! - `Renderer`, which turns the core's per-mode `View` into screen lines
//!
//! Pixel layout and fonts belong to the backend; everything here is rows
//! and columns of characters.

#![no_std]

pub mod backend;
pub mod render;
pub mod screen;

// Re-export key types
pub use backend::{present, DisplayBackend, DisplayError};
pub use render::{format_reading, Renderer};
pub use screen::{Row, Screen, SCREEN_COLS, SCREEN_ROWS};
