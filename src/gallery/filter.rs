// SPDX-License-Identifier: MPL-2.0
//! Gallery kind filter. Exactly one filter is active at a time.

use super::catalog::MediaKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaFilter {
    #[default]
    All,
    Image,
    Video,
}

impl MediaFilter {
    pub const ALL: [MediaFilter; 3] = [MediaFilter::All, MediaFilter::Image, MediaFilter::Video];

    pub fn matches(&self, kind: MediaKind) -> bool {
        match self {
            MediaFilter::All => true,
            MediaFilter::Image => kind == MediaKind::Image,
            MediaFilter::Video => kind == MediaKind::Video,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaFilter::All => "All",
            MediaFilter::Image => "Images",
            MediaFilter::Video => "Videos",
        }
    }
}
