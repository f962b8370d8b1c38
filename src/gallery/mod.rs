// SPDX-License-Identifier: MPL-2.0
//! Gallery loading, pagination, filtering, and the modal overlay.
//!
//! The catalog is fetched once, then rendered in fixed-size batches as the
//! user scrolls near the bottom of the gallery view. Batch loading is
//! single-flight: the guard flag set by [`GalleryState::load_next_batch`]
//! stays up until the caller settles the batch with
//! [`GalleryState::finish_batch`], so triggers that pile up while a batch
//! renders collapse into one load.
//!
//! Filtering only touches already-rendered items; new batches render
//! unconditionally and the active filter is folded in right after each
//! append, which keeps the visible set consistent without an extra pass.

pub mod catalog;
pub mod filter;
pub mod lazy;
pub mod modal;

use crate::error::{Error, Result};
use crate::host::ViewHost;
use crate::navigation::Direction;
use catalog::{MediaEntry, MediaKind};
use filter::MediaFilter;
use lazy::LazyLoader;
use modal::{ModalState, VideoState};

/// Number of catalog entries rendered per batch.
pub const BATCH_SIZE: usize = 12;

/// Text shown in the inline error panel when the catalog cannot load.
pub const CATALOG_ERROR_TEXT: &str = "Failed to load gallery contents. Please try again later.";

/// One rendered gallery item.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub entry: MediaEntry,
    /// Hidden by the active filter; stays in the rendered window.
    pub hidden: bool,
    /// The media payload has arrived and replaced the placeholder.
    pub media_ready: bool,
}

impl GalleryItem {
    fn new(entry: MediaEntry) -> Self {
        Self {
            entry,
            hidden: false,
            media_ready: false,
        }
    }
}

/// All gallery state: the immutable catalog, the rendered window, the
/// filter and its visible set, lazy-load bookkeeping, and the modal.
#[derive(Debug, Default, Clone)]
pub struct GalleryState {
    catalog: Vec<MediaEntry>,
    catalog_loading: bool,
    catalog_failed: bool,
    items: Vec<GalleryItem>,
    loading_batch: bool,
    filter: MediaFilter,
    /// Indices into `items` passing the active filter, in render order.
    visible: Vec<usize>,
    pub lazy: LazyLoader,
    modal: Option<ModalState>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn rendered_len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn filter(&self) -> MediaFilter {
        self.filter
    }

    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn catalog_failed(&self) -> bool {
        self.catalog_failed
    }

    pub fn is_catalog_loading(&self) -> bool {
        self.catalog_loading
    }

    /// The catalog is fetched on first gallery entry and never refetched
    /// once populated. A failed fetch leaves it empty, so a later gallery
    /// re-entry retries.
    pub fn should_fetch_catalog(&self) -> bool {
        self.catalog.is_empty() && !self.catalog_loading
    }

    pub fn begin_catalog_load(&mut self, host: &mut dyn ViewHost) {
        self.catalog_loading = true;
        self.catalog_failed = false;
        host.set_gallery_loading(true);
    }

    /// Applies the fetch result whenever it arrives. The result is applied
    /// even if the user has navigated away in the meantime; the catalog
    /// outlives the view that requested it.
    ///
    /// On success the first batch renders immediately and is settled in
    /// place. On failure the gallery content is replaced by the inline
    /// error panel and the catalog stays empty; no retry is scheduled.
    pub fn apply_catalog(
        &mut self,
        result: Result<Vec<MediaEntry>>,
        host: &mut dyn ViewHost,
    ) -> std::result::Result<usize, Error> {
        self.catalog_loading = false;
        host.set_gallery_loading(false);
        match result {
            Ok(entries) => {
                self.catalog = entries;
                let appended = self.load_next_batch(host);
                self.finish_batch();
                Ok(appended)
            }
            Err(err) => {
                self.catalog_failed = true;
                host.show_gallery_error(CATALOG_ERROR_TEXT);
                Err(err)
            }
        }
    }

    /// Renders the next contiguous catalog slice, at most [`BATCH_SIZE`]
    /// entries. No-op while a batch is already in flight or once the
    /// rendered window covers the whole catalog. Returns the number of
    /// items appended; a non-zero return leaves the single-flight guard up
    /// until [`GalleryState::finish_batch`].
    pub fn load_next_batch(&mut self, host: &mut dyn ViewHost) -> usize {
        if self.loading_batch || self.items.len() >= self.catalog.len() {
            return 0;
        }
        self.loading_batch = true;

        let start = self.items.len();
        let end = (start + BATCH_SIZE).min(self.catalog.len());
        for (offset, entry) in self.catalog[start..end].iter().enumerate() {
            self.items.push(GalleryItem::new(entry.clone()));
            host.render_item(start + offset, entry);
        }

        // New items rendered unconditionally; fold the active filter in.
        if self.filter != MediaFilter::All {
            let filter = self.filter;
            self.set_filter_hidden(filter, host);
        }
        self.recompute_visible(host);

        end - start
    }

    /// Releases the single-flight guard once the batch has settled on the
    /// rendering surface.
    pub fn finish_batch(&mut self) {
        self.loading_batch = false;
    }

    pub fn is_loading_batch(&self) -> bool {
        self.loading_batch
    }

    /// Marks one item's media payload as arrived. Items whose payload
    /// fails stay in placeholder state; there is nothing to roll back.
    pub fn mark_media_ready(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.media_ready = true;
        }
    }

    /// Switches the active filter. Only already-rendered items are
    /// affected; unrendered catalog entries wait for their batch.
    pub fn apply_filter(&mut self, filter: MediaFilter, host: &mut dyn ViewHost) {
        self.filter = filter;
        self.set_filter_hidden(filter, host);
        self.recompute_visible(host);
    }

    fn set_filter_hidden(&mut self, filter: MediaFilter, host: &mut dyn ViewHost) {
        for (index, item) in self.items.iter_mut().enumerate() {
            let hidden = !filter.matches(item.entry.kind);
            item.hidden = hidden;
            host.set_item_hidden(index, hidden);
        }
    }

    fn recompute_visible(&mut self, host: &mut dyn ViewHost) {
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.hidden)
            .map(|(index, _)| index)
            .collect();
        host.set_modal_controls(self.visible.len() > 1);
    }

    pub fn modal(&self) -> Option<&ModalState> {
        self.modal.as_ref()
    }

    /// The item currently shown in the overlay, if any.
    pub fn modal_item(&self) -> Option<&GalleryItem> {
        let modal = self.modal.as_ref()?;
        let item_index = *self.visible.get(modal.cursor)?;
        self.items.get(item_index)
    }

    pub fn modal_caption(&self) -> Option<String> {
        self.modal_item().map(|item| item.entry.caption())
    }

    /// Opens the overlay on a rendered item. The item must belong to the
    /// visible set; opening a filtered-out item is refused.
    pub fn open_modal(&mut self, item_index: usize, host: &mut dyn ViewHost) -> bool {
        let Some(cursor) = self.visible.iter().position(|&i| i == item_index) else {
            return false;
        };
        let is_video = self
            .items
            .get(item_index)
            .map(|item| item.entry.kind == MediaKind::Video)
            .unwrap_or(false);
        self.modal = Some(ModalState {
            cursor,
            video: VideoState {
                playing: is_video,
                position_secs: 0.0,
            },
        });
        host.set_modal_controls(self.visible.len() > 1);
        true
    }

    /// Cyclic step over the visible set. No-op when the overlay is closed
    /// or fewer than two items are visible. The new item goes through the
    /// same open path as the initial open, so media swap and caption
    /// follow identically.
    pub fn modal_navigate(&mut self, direction: Direction, host: &mut dyn ViewHost) -> bool {
        let n = self.visible.len();
        if n <= 1 {
            return false;
        }
        let Some(modal) = self.modal.as_ref() else {
            return false;
        };
        let cursor = match direction {
            Direction::Prev => (modal.cursor + n - 1) % n,
            Direction::Next => (modal.cursor + 1) % n,
        };
        let item_index = self.visible[cursor];
        self.open_modal(item_index, host)
    }

    /// Closes the overlay. A playing video is paused and rewound first.
    pub fn close_modal(&mut self) {
        if let Some(modal) = self.modal.as_mut() {
            modal.video.playing = false;
            modal.video.position_secs = 0.0;
        }
        self.modal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleryError;

    /// Recording fake standing in for the rendering surface.
    #[derive(Debug, Default)]
    struct FakeHost {
        rendered: Vec<(usize, String)>,
        hidden: Vec<(usize, bool)>,
        loading: Option<bool>,
        error_panel: Option<String>,
        modal_controls: Option<bool>,
    }

    impl ViewHost for FakeHost {
        fn deactivate_all(&mut self) {}

        fn activate_view(&mut self, _id: &str) -> bool {
            true
        }

        fn set_fragment(&mut self, _id: &str) {}

        fn set_frame_source(&mut self, _url: &str) {}

        fn set_nav_highlight(&mut self, _id: &str) {}

        fn set_step_controls(&mut self, _prev_enabled: bool, _next_enabled: bool) {}

        fn render_item(&mut self, index: usize, entry: &MediaEntry) {
            self.rendered.push((index, entry.path.clone()));
        }

        fn set_item_hidden(&mut self, index: usize, hidden: bool) {
            self.hidden.push((index, hidden));
        }

        fn set_gallery_loading(&mut self, loading: bool) {
            self.loading = Some(loading);
        }

        fn show_gallery_error(&mut self, message: &str) {
            self.error_panel = Some(message.to_string());
        }

        fn set_modal_controls(&mut self, visible: bool) {
            self.modal_controls = Some(visible);
        }
    }

    fn entry(name: &str) -> MediaEntry {
        MediaEntry {
            path: format!("assets/gallery/{}", name),
            kind: catalog::MediaKind::from_extension(name),
        }
    }

    fn catalog_of(count: usize) -> Vec<MediaEntry> {
        (0..count).map(|i| entry(&format!("img-{:03}.png", i))).collect()
    }

    fn loaded_state(entries: Vec<MediaEntry>, host: &mut FakeHost) -> GalleryState {
        let mut gallery = GalleryState::new();
        gallery.begin_catalog_load(host);
        gallery.apply_catalog(Ok(entries), host).expect("catalog");
        gallery
    }

    #[test]
    fn catalog_load_renders_first_batch() {
        let mut host = FakeHost::default();
        let gallery = loaded_state(catalog_of(30), &mut host);

        assert_eq!(gallery.rendered_len(), BATCH_SIZE);
        assert_eq!(host.rendered.len(), BATCH_SIZE);
        assert_eq!(host.loading, Some(false));
    }

    #[test]
    fn failed_catalog_shows_error_panel_and_stays_empty() {
        let mut host = FakeHost::default();
        let mut gallery = GalleryState::new();
        gallery.begin_catalog_load(&mut host);

        let result = gallery.apply_catalog(Err(GalleryError::BadStatus(500).into()), &mut host);

        assert!(result.is_err());
        assert_eq!(host.error_panel.as_deref(), Some(CATALOG_ERROR_TEXT));
        assert_eq!(gallery.catalog_len(), 0);
        assert!(gallery.catalog_failed());
        // Re-entering the gallery may retry while the catalog is empty.
        assert!(gallery.should_fetch_catalog());
    }

    #[test]
    fn concurrent_batch_triggers_collapse_into_one() {
        let mut host = FakeHost::default();
        let mut gallery = loaded_state(catalog_of(40), &mut host);

        let first = gallery.load_next_batch(&mut host);
        let second = gallery.load_next_batch(&mut host);

        assert_eq!(first, BATCH_SIZE);
        assert_eq!(second, 0);
        assert_eq!(gallery.rendered_len(), 2 * BATCH_SIZE);
    }

    #[test]
    fn exactly_ceil_n_over_batch_loads_exhaust_the_catalog() {
        let mut host = FakeHost::default();
        let mut gallery = loaded_state(catalog_of(30), &mut host);

        let mut loads = 1; // first batch came with the catalog
        while gallery.rendered_len() < gallery.catalog_len() {
            assert!(gallery.load_next_batch(&mut host) > 0);
            gallery.finish_batch();
            loads += 1;
        }

        assert_eq!(loads, 3); // ceil(30 / 12)
        assert_eq!(gallery.rendered_len(), 30);
        assert_eq!(gallery.load_next_batch(&mut host), 0);
    }

    #[test]
    fn visible_set_matches_filter_and_order() {
        let mut host = FakeHost::default();
        let mut gallery = loaded_state(
            vec![entry("a.png"), entry("b.mp4"), entry("c.jpg")],
            &mut host,
        );

        assert_eq!(gallery.visible(), &[0, 1, 2]);

        gallery.apply_filter(MediaFilter::Video, &mut host);
        assert_eq!(gallery.visible(), &[1]);
        assert!(gallery.items()[0].hidden);
        assert!(!gallery.items()[1].hidden);

        gallery.apply_filter(MediaFilter::All, &mut host);
        assert_eq!(gallery.visible(), &[0, 1, 2]);
    }

    #[test]
    fn active_filter_is_folded_into_new_batches() {
        let mut host = FakeHost::default();
        let mut entries = catalog_of(12);
        entries.extend(vec![entry("clip-a.mp4"), entry("still.png")]);
        let mut gallery = loaded_state(entries, &mut host);

        gallery.apply_filter(MediaFilter::Video, &mut host);
        assert!(gallery.visible().is_empty());

        gallery.load_next_batch(&mut host);
        gallery.finish_batch();

        assert_eq!(gallery.rendered_len(), 14);
        assert_eq!(gallery.visible(), &[12]);
    }

    #[test]
    fn modal_wraps_around_the_visible_set() {
        let mut host = FakeHost::default();
        let mut gallery = loaded_state(
            vec![entry("a.png"), entry("b.mp4"), entry("c.jpg")],
            &mut host,
        );

        assert!(gallery.open_modal(1, &mut host));
        let n = gallery.visible().len();
        for _ in 0..n {
            assert!(gallery.modal_navigate(Direction::Next, &mut host));
        }
        assert_eq!(gallery.modal().map(|m| m.cursor), Some(1));
    }

    #[test]
    fn modal_navigate_is_noop_with_single_visible_item() {
        let mut host = FakeHost::default();
        let mut gallery = loaded_state(vec![entry("a.png"), entry("b.mp4")], &mut host);

        gallery.apply_filter(MediaFilter::Video, &mut host);
        assert!(gallery.open_modal(1, &mut host));
        assert_eq!(host.modal_controls, Some(false));
        assert!(!gallery.modal_navigate(Direction::Next, &mut host));
        assert_eq!(gallery.modal().map(|m| m.cursor), Some(0));
    }

    #[test]
    fn opening_a_filtered_out_item_is_refused() {
        let mut host = FakeHost::default();
        let mut gallery = loaded_state(vec![entry("a.png"), entry("b.mp4")], &mut host);

        gallery.apply_filter(MediaFilter::Video, &mut host);
        assert!(!gallery.open_modal(0, &mut host));
        assert!(gallery.modal().is_none());
    }

    #[test]
    fn closing_modal_rewinds_video() {
        let mut host = FakeHost::default();
        let mut gallery = loaded_state(vec![entry("a.mp4"), entry("b.png")], &mut host);

        assert!(gallery.open_modal(0, &mut host));
        assert!(gallery.modal().map(|m| m.video.playing).unwrap_or(false));
        gallery.close_modal();
        assert!(gallery.modal().is_none());
    }

    #[test]
    fn filter_round_trip_restores_full_visible_set_despite_modal_history() {
        let mut host = FakeHost::default();
        let mut gallery = loaded_state(
            vec![entry("a.png"), entry("b.mp4"), entry("c.jpg")],
            &mut host,
        );

        gallery.open_modal(0, &mut host);
        gallery.modal_navigate(Direction::Next, &mut host);
        gallery.apply_filter(MediaFilter::Video, &mut host);
        gallery.apply_filter(MediaFilter::All, &mut host);

        assert_eq!(gallery.visible(), &[0, 1, 2]);
    }

    #[test]
    fn caption_follows_the_modal_item() {
        let mut host = FakeHost::default();
        let mut gallery = loaded_state(vec![entry("helm_shot-01.png")], &mut host);

        gallery.open_modal(0, &mut host);
        assert_eq!(gallery.modal_caption().as_deref(), Some("helm shot 01"));
    }

    #[test]
    fn media_ready_marks_only_the_target_item() {
        let mut host = FakeHost::default();
        let mut gallery = loaded_state(vec![entry("a.png"), entry("b.png")], &mut host);

        gallery.mark_media_ready(1);
        assert!(!gallery.items()[0].media_ready);
        assert!(gallery.items()[1].media_ready);
        // Out-of-range indices are ignored.
        gallery.mark_media_ready(99);
    }
}
