// SPDX-License-Identifier: MPL-2.0
//! Proximity-based lazy loading of gallery media.
//!
//! Rendered items start as placeholders; an item's media payload is
//! requested only once its bounding box comes within [`PREFETCH_MARGIN`]
//! of the gallery viewport. Once requested, an item is never observed
//! again. When no viewport geometry is available (the gallery has not been
//! laid out yet) a fallback requests everything pending.

use std::collections::BTreeSet;

/// Items within this many layout units of the viewport are prefetched
/// before they become visible.
pub const PREFETCH_MARGIN: f32 = 200.0;

/// Scroll distance from the gallery bottom at which the next batch loads.
pub const NEAR_BOTTOM_MARGIN: f32 = 300.0;

/// Vertical extent of one laid-out gallery item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBounds {
    pub index: usize,
    pub top: f32,
    pub bottom: f32,
}

/// Tracks which rendered items have had their media requested.
#[derive(Debug, Default, Clone)]
pub struct LazyLoader {
    requested: BTreeSet<usize>,
}

impl LazyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_requested(&self, index: usize) -> bool {
        self.requested.contains(&index)
    }

    /// Returns the indices whose media should be requested now: pending
    /// items whose bounds fall within the viewport extended by the
    /// prefetch margin. Each index is returned at most once, ever.
    pub fn observe(
        &mut self,
        viewport_top: f32,
        viewport_bottom: f32,
        items: &[ItemBounds],
    ) -> Vec<usize> {
        let reach_top = viewport_top - PREFETCH_MARGIN;
        let reach_bottom = viewport_bottom + PREFETCH_MARGIN;
        let mut due = Vec::new();
        for item in items {
            if self.requested.contains(&item.index) {
                continue;
            }
            if item.bottom >= reach_top && item.top <= reach_bottom {
                self.requested.insert(item.index);
                due.push(item.index);
            }
        }
        due
    }

    /// Fallback when no viewport geometry exists: requests every pending
    /// item up to `total`.
    pub fn request_all(&mut self, total: usize) -> Vec<usize> {
        let mut due = Vec::new();
        for index in 0..total {
            if self.requested.insert(index) {
                due.push(index);
            }
        }
        due
    }
}

/// Whether the gallery scroll position is close enough to the bottom to
/// pull in the next batch.
pub fn near_bottom(scroll_top: f32, viewport_height: f32, content_height: f32) -> bool {
    scroll_top + viewport_height >= content_height - NEAR_BOTTOM_MARGIN
}
