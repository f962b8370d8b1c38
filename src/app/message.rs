// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and launch flags.

use crate::error::Error;
use crate::gallery::catalog::MediaEntry;
use crate::navigation::Direction;
use crate::price_feed::PriceQuote;
use crate::ui::{gallery_grid, modal_overlay, navbar, sections};
use iced::Point;
use std::path::PathBuf;
use std::time::Instant;

/// Launch options resolved by `main.rs` from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Section to open instead of the configured home section.
    pub section: Option<String>,
    /// External page to open in the content frame, matched by its trailing
    /// path segment against the navigation sequence.
    pub page: Option<String>,
    /// Gallery listing endpoint override.
    pub gallery_url: Option<String>,
    /// Directory to read `settings.toml` from instead of the platform
    /// config directory.
    pub config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Component messages
    Navbar(navbar::Message),
    Gallery(gallery_grid::Message),
    Modal(modal_overlay::Message),
    Hero(sections::Message),

    // Transition phases, driven by timed tasks
    ExitFadeFinished,
    EntryFadeFinished,

    // Gallery plumbing
    CatalogFetched(Result<Vec<MediaEntry>, Error>),
    BatchSettled,
    MediaFetched {
        index: usize,
        path: String,
        result: Result<Vec<u8>, String>,
    },

    // Price polling
    PricePoll,
    TokenQuoteFetched(Result<PriceQuote, Error>),
    EthQuoteFetched(Result<PriceQuote, Error>),

    // Input routed from the event subscription
    ArrowPressed(Direction),
    EscapePressed,
    TouchStarted(Point),
    TouchEnded(Point),

    // Misc
    SceneTick(Instant),
    CopiedNoticeExpired,
}
