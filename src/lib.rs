// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a small image gallery built with the Iced GUI framework.
//!
//! It scans a directory for images, presents them as a thumbnail grid, and
//! opens a lightbox overlay with keyboard, swipe, and slideshow navigation.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod lightbox;
pub mod ui;
