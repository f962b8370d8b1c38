// SPDX-License-Identifier: MPL-2.0
//! Ether Showcase: a sectioned promo surface with a lazily loaded media
//! gallery, live price tickers, and an animated background scene.
//!
//! The crate splits into the state machines ([`navigation`], [`gallery`]),
//! the capability seam they drive ([`host`]), and the Iced surface that
//! implements it ([`app`], [`ui`]).

pub mod app;
pub mod background;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gallery;
pub mod host;
pub mod navigation;
pub mod price_feed;
pub mod ui;
