// SPDX-License-Identifier: MPL-2.0
//! The ordered list of showcase views used for prev/next stepping.

/// How a sequence entry is presented: an in-page section or an external
/// page loaded into the embedded content frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Section,
    External,
}

/// One addressable stop in the showcase tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    /// Section id, or the URL loaded into the content frame for externals.
    pub id: String,
    pub kind: ViewKind,
    /// Display title for external entries; sections are titled by their markup.
    pub title: Option<String>,
}

impl ViewEntry {
    pub fn section(id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: ViewKind::Section,
            title: None,
        }
    }

    pub fn external(url: &str, title: &str) -> Self {
        Self {
            id: url.to_string(),
            kind: ViewKind::External,
            title: Some(title.to_string()),
        }
    }

    /// Trailing path segment of the entry id, used to match the entry
    /// against the URL currently loaded in the content frame.
    pub fn trailing_segment(&self) -> &str {
        self.id.rsplit('/').next().unwrap_or(&self.id)
    }
}

/// Static ordering of views for sequential navigation. Fixed for the
/// lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSequence {
    entries: Vec<ViewEntry>,
}

impl NavigationSequence {
    pub fn new(entries: Vec<ViewEntry>) -> Self {
        Self { entries }
    }

    /// The sequence shipped with the showcase.
    pub fn showcase() -> Self {
        Self::new(vec![
            ViewEntry::section("hero"),
            ViewEntry::section("timeline"),
            ViewEntry::section("gallery"),
            ViewEntry::external("regenerates/regenerates.html", "Regenerates"),
            ViewEntry::external("etherverse/etherverse.html", "Etherverse"),
            ViewEntry::external("lore/lore.html", "The Lore"),
            ViewEntry::section("prophecy"),
            ViewEntry::external("nfts/nft-gallery.html", "NFT Gallery"),
            ViewEntry::external("https://game.example.com/", "Play Game"),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ViewEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    /// Position of a section id in the sequence.
    pub fn index_of_section(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Position of the external entry whose id ends with the trailing path
    /// segment of `frame_url`.
    pub fn index_of_frame_url(&self, frame_url: &str) -> Option<usize> {
        let segment = frame_url.rsplit('/').next().unwrap_or(frame_url);
        if segment.is_empty() {
            // URLs with a trailing slash keep their last real segment.
            let trimmed = frame_url.trim_end_matches('/');
            return self
                .entries
                .iter()
                .position(|entry| entry.id.trim_end_matches('/') == trimmed);
        }
        self.entries
            .iter()
            .position(|entry| entry.kind == ViewKind::External && entry.id.ends_with(segment))
    }
}
