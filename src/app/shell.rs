// SPDX-License-Identifier: MPL-2.0
//! The concrete rendering surface behind [`ViewHost`].
//!
//! The navigator and the gallery never touch widgets; they call the trait
//! and this shell records the outcome as plain state. `view()` reads that
//! state every frame, so a trait call and a repaint are the same thing.

use crate::gallery::catalog::MediaEntry;
use crate::host::ViewHost;
use crate::navigation::FRAME_VIEW;
use crate::ui::gallery_grid::ItemCard;
use iced::widget::image;

/// Last known gallery scroll geometry, absent until the first scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryViewport {
    pub scroll_top: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

#[derive(Debug)]
pub struct Shell {
    known_views: Vec<String>,
    active_view: Option<String>,
    /// Address-bar style fragment, `#id`.
    fragment: Option<String>,
    frame_source: String,
    nav_highlight: Option<String>,
    step_controls: (bool, bool),
    cards: Vec<ItemCard>,
    gallery_loading: bool,
    gallery_error: Option<String>,
    modal_controls_visible: bool,
    pub gallery_viewport: Option<GalleryViewport>,
}

impl Shell {
    /// A shell knowing the given section ids plus the frame view.
    pub fn with_sections(sections: &[&str]) -> Self {
        let mut known_views: Vec<String> = sections.iter().map(|s| s.to_string()).collect();
        known_views.push(FRAME_VIEW.to_string());
        Self {
            known_views,
            active_view: None,
            fragment: None,
            frame_source: String::new(),
            nav_highlight: None,
            step_controls: (false, true),
            cards: Vec::new(),
            gallery_loading: false,
            gallery_error: None,
            modal_controls_visible: false,
            gallery_viewport: None,
        }
    }

    pub fn active_view(&self) -> Option<&str> {
        self.active_view.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn frame_source(&self) -> &str {
        &self.frame_source
    }

    pub fn frame_open(&self) -> bool {
        !self.frame_source.is_empty()
    }

    pub fn nav_highlight(&self) -> Option<&str> {
        self.nav_highlight.as_deref()
    }

    pub fn step_controls(&self) -> (bool, bool) {
        self.step_controls
    }

    pub fn cards(&self) -> &[ItemCard] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&ItemCard> {
        self.cards.get(index)
    }

    pub fn is_gallery_loading(&self) -> bool {
        self.gallery_loading
    }

    pub fn gallery_error(&self) -> Option<&str> {
        self.gallery_error.as_deref()
    }

    pub fn modal_controls_visible(&self) -> bool {
        self.modal_controls_visible
    }

    /// Attaches a fetched media payload to its card.
    pub fn set_media_handle(&mut self, index: usize, handle: image::Handle) {
        if let Some(card) = self.cards.get_mut(index) {
            card.handle = Some(handle);
        }
    }
}

impl ViewHost for Shell {
    fn deactivate_all(&mut self) {
        self.active_view = None;
    }

    fn activate_view(&mut self, id: &str) -> bool {
        if self.known_views.iter().any(|known| known == id) {
            self.active_view = Some(id.to_string());
            true
        } else {
            false
        }
    }

    fn set_fragment(&mut self, id: &str) {
        self.fragment = Some(format!("#{}", id));
    }

    fn set_frame_source(&mut self, url: &str) {
        self.frame_source = url.to_string();
    }

    fn set_nav_highlight(&mut self, id: &str) {
        self.nav_highlight = Some(id.to_string());
    }

    fn set_step_controls(&mut self, prev_enabled: bool, next_enabled: bool) {
        self.step_controls = (prev_enabled, next_enabled);
    }

    fn render_item(&mut self, index: usize, entry: &MediaEntry) {
        // Batches append contiguously; anything else is a state machine bug
        // and the card is placed at the end regardless.
        debug_assert_eq!(index, self.cards.len());
        self.cards.push(ItemCard::new(entry.clone()));
    }

    fn set_item_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(card) = self.cards.get_mut(index) {
            card.hidden = hidden;
        }
    }

    fn set_gallery_loading(&mut self, loading: bool) {
        self.gallery_loading = loading;
        if loading {
            self.gallery_error = None;
        }
    }

    fn show_gallery_error(&mut self, message: &str) {
        self.gallery_error = Some(message.to_string());
    }

    fn set_modal_controls(&mut self, visible: bool) {
        self.modal_controls_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::catalog::MediaKind;

    fn shell() -> Shell {
        Shell::with_sections(&["hero", "gallery"])
    }

    fn entry(name: &str) -> MediaEntry {
        MediaEntry {
            path: format!("assets/gallery/{}", name),
            kind: MediaKind::from_extension(name),
        }
    }

    #[test]
    fn frame_view_is_always_known() {
        let mut shell = shell();
        assert!(shell.activate_view(FRAME_VIEW));
    }

    #[test]
    fn unknown_view_is_refused_and_nothing_stays_active() {
        let mut shell = shell();
        assert!(shell.activate_view("hero"));
        shell.deactivate_all();
        assert!(!shell.activate_view("vault"));
        assert_eq!(shell.active_view(), None);
    }

    #[test]
    fn fragment_carries_the_hash_prefix() {
        let mut shell = shell();
        shell.set_fragment("gallery");
        assert_eq!(shell.fragment(), Some("#gallery"));
    }

    #[test]
    fn rendered_cards_accumulate_and_hide_in_place() {
        let mut shell = shell();
        shell.render_item(0, &entry("a.png"));
        shell.render_item(1, &entry("b.mp4"));
        shell.set_item_hidden(0, true);

        assert_eq!(shell.cards().len(), 2);
        assert!(shell.cards()[0].hidden);
        assert!(!shell.cards()[1].hidden);
    }

    #[test]
    fn starting_a_load_clears_the_error_panel() {
        let mut shell = shell();
        shell.show_gallery_error("boom");
        shell.set_gallery_loading(true);
        assert_eq!(shell.gallery_error(), None);
        assert!(shell.is_gallery_loading());
    }
}
