// SPDX-License-Identifier: MPL-2.0
//! Presentation layer: design tokens, shared styles, and the views composed
//! by the application (navbar, thumbnail grid, lightbox, empty state).

pub mod design_tokens;
pub mod empty_state;
pub mod grid;
pub mod lightbox_view;
pub mod navbar;
pub mod styles;
pub mod theme;
