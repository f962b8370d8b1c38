// SPDX-License-Identifier: MPL-2.0
//! User interface components, Elm-style: state down, messages up.
//!
//! - [`navbar`] - Navigation panel, sequence entries, and step controls
//! - [`sections`] - Static showcase sections and the frame view
//! - [`gallery_grid`] - Gallery filter row, media grid, scroll plumbing
//! - [`modal_overlay`] - Full-screen single-item overlay
//! - [`price_ticker`] - Token and ETH price widgets
//! - [`error_display`] - Inline error panel
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod error_display;
pub mod gallery_grid;
pub mod modal_overlay;
pub mod navbar;
pub mod price_ticker;
pub mod sections;
