// SPDX-License-Identifier: MPL-2.0
//! Message handling and task scheduling.
//!
//! Transitions are phased: arming one schedules an exit-fade timer, the
//! timer's message runs the exit phase, and a second timer finishes the
//! entrance. The gallery's batch settle delay works the same way, so the
//! single-flight guards in the state machines see the same pacing the
//! animations do.

use super::{App, GalleryViewport, Message};
use crate::diagnostics::DiagnosticEvent;
use crate::error::Result;
use crate::gallery::catalog::{self, MediaEntry, MediaKind};
use crate::gallery::lazy;
use crate::navigation::{Direction, SceneControl};
use crate::price_feed::{self, PriceQuote};
use crate::ui::price_ticker::PriceDisplay;
use crate::ui::{gallery_grid, modal_overlay, navbar, sections};
use iced::widget::image;
use iced::Task;
use std::time::Duration;

const EXIT_FADE: Duration = Duration::from_millis(500);
const ENTRY_FADE: Duration = Duration::from_millis(500);
/// How long a batch's stagger animation runs before the next batch may load.
const BATCH_SETTLE: Duration = Duration::from_millis(800);
const COPY_NOTICE: Duration = Duration::from_secs(2);

fn delayed(duration: Duration, message: Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(duration), move |_| message.clone())
}

pub(super) fn exit_fade_task() -> Task<Message> {
    delayed(EXIT_FADE, Message::ExitFadeFinished)
}

fn entry_fade_task() -> Task<Message> {
    delayed(ENTRY_FADE, Message::EntryFadeFinished)
}

/// Resolves a catalog path against the listing endpoint's directory.
fn media_url(listing_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = listing_url
        .rsplit_once('/')
        .map(|(base, _)| base)
        .unwrap_or(listing_url);
    format!("{}/{}", base, path.trim_start_matches('/'))
}

async fn fetch_media_bytes(
    client: reqwest::Client,
    url: String,
) -> std::result::Result<Vec<u8>, String> {
    let response = client.get(&url).send().await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("status {}", response.status().as_u16()));
    }
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(bytes.to_vec())
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => self.on_navbar(message),
            Message::Gallery(message) => self.on_gallery(message),
            Message::Modal(message) => self.on_modal(message),
            Message::Hero(message) => self.on_hero(message),

            Message::ExitFadeFinished => self.on_exit_fade_finished(),
            Message::EntryFadeFinished => {
                self.navigator.complete_entry();
                Task::none()
            }

            Message::CatalogFetched(result) => self.on_catalog_fetched(result),
            Message::BatchSettled => {
                self.gallery.finish_batch();
                Task::none()
            }
            Message::MediaFetched {
                index,
                path,
                result,
            } => self.on_media_fetched(index, path, result),

            Message::PricePoll => self.on_price_poll(),
            Message::TokenQuoteFetched(result) => {
                self.token_price = self.settle_quote("token", result, None);
                Task::none()
            }
            Message::EthQuoteFetched(result) => {
                self.eth_price = self.settle_quote("eth", result, Some(placeholder_change()));
                Task::none()
            }

            Message::ArrowPressed(direction) => self.on_directional(direction),
            Message::EscapePressed => {
                if self.gallery.modal().is_some() {
                    self.gallery.close_modal();
                }
                Task::none()
            }
            Message::TouchStarted(point) => {
                self.swipe.touch_start(point.x);
                Task::none()
            }
            Message::TouchEnded(point) => match self.swipe.touch_end(point.x) {
                Some(direction) => self.on_directional(direction),
                None => Task::none(),
            },

            Message::SceneTick(now) => {
                let delta = now.duration_since(self.last_tick).as_secs_f32();
                self.last_tick = now;
                if let Some(scene) = self.scene.as_mut() {
                    scene.tick(delta);
                }
                Task::none()
            }
            Message::CopiedNoticeExpired => {
                self.address_copied = false;
                Task::none()
            }
        }
    }

    fn on_navbar(&mut self, message: navbar::Message) -> Task<Message> {
        match message {
            navbar::Message::TogglePanel => {
                self.nav_panel_open = !self.nav_panel_open;
                Task::none()
            }
            navbar::Message::EntryPressed(index) => {
                self.nav_panel_open = false;
                let Some(entry) = self.navigator.sequence().get(index).cloned() else {
                    return Task::none();
                };
                let armed = match entry.kind {
                    crate::navigation::ViewKind::Section => self.navigator.navigate_to(
                        &entry.id,
                        self.scene.as_mut().map(|s| s as &mut dyn SceneControl),
                    ),
                    crate::navigation::ViewKind::External => self.navigator.open_external(
                        &entry.id,
                        &mut self.shell,
                        self.scene.as_mut().map(|s| s as &mut dyn SceneControl),
                    ),
                };
                if armed {
                    exit_fade_task()
                } else {
                    Task::none()
                }
            }
            navbar::Message::StepPressed(direction) => self.step(direction),
            navbar::Message::CloseFrame => {
                let armed = self.navigator.close_frame(
                    &mut self.shell,
                    self.scene.as_mut().map(|s| s as &mut dyn SceneControl),
                );
                if armed {
                    exit_fade_task()
                } else {
                    Task::none()
                }
            }
        }
    }

    fn step(&mut self, direction: Direction) -> Task<Message> {
        let armed = self.navigator.step(
            direction,
            &mut self.shell,
            self.scene.as_mut().map(|s| s as &mut dyn SceneControl),
        );
        if armed {
            exit_fade_task()
        } else {
            Task::none()
        }
    }

    /// Modal navigation when the overlay is open, sequence stepping
    /// otherwise. Arrow keys and swipes both land here.
    fn on_directional(&mut self, direction: Direction) -> Task<Message> {
        if self.gallery.modal().is_some() {
            self.gallery.modal_navigate(direction, &mut self.shell);
            Task::none()
        } else {
            self.step(direction)
        }
    }

    fn on_exit_fade_finished(&mut self) -> Task<Message> {
        let armed_target = self.navigator.pending_target().map(str::to_string);
        match self.navigator.complete_exit(&mut self.shell) {
            Some(view) => {
                let mut tasks = vec![entry_fade_task()];
                if view == "gallery" && self.gallery.should_fetch_catalog() {
                    self.gallery.begin_catalog_load(&mut self.shell);
                    tasks.push(self.fetch_catalog_task());
                }
                Task::batch(tasks)
            }
            None => {
                if let Some(target) = armed_target {
                    self.diagnostics
                        .record(DiagnosticEvent::NavigationAborted { target });
                }
                Task::none()
            }
        }
    }

    fn fetch_catalog_task(&self) -> Task<Message> {
        let client = self.http.clone();
        let url = self.config.gallery_url().to_string();
        let base = self.config.media_base().to_string();
        Task::perform(
            async move { catalog::fetch_catalog(&client, &url, &base).await },
            Message::CatalogFetched,
        )
    }

    fn on_catalog_fetched(&mut self, result: Result<Vec<MediaEntry>>) -> Task<Message> {
        match self.gallery.apply_catalog(result, &mut self.shell) {
            Ok(_) => self.lazy_media_tasks(),
            Err(err) => {
                self.diagnostics.record(DiagnosticEvent::CatalogLoadFailed {
                    detail: err.to_string(),
                });
                Task::none()
            }
        }
    }

    fn on_gallery(&mut self, message: gallery_grid::Message) -> Task<Message> {
        match message {
            gallery_grid::Message::FilterPressed(filter) => {
                self.gallery.apply_filter(filter, &mut self.shell);
                Task::none()
            }
            gallery_grid::Message::ItemPressed(index) => {
                self.gallery.open_modal(index, &mut self.shell);
                Task::none()
            }
            gallery_grid::Message::Scrolled(viewport) => {
                let geometry = GalleryViewport {
                    scroll_top: viewport.absolute_offset().y,
                    viewport_height: viewport.bounds().height,
                    content_height: viewport.content_bounds().height,
                };
                self.shell.gallery_viewport = Some(geometry);

                let mut tasks = Vec::new();
                if lazy::near_bottom(
                    geometry.scroll_top,
                    geometry.viewport_height,
                    geometry.content_height,
                ) && self.gallery.load_next_batch(&mut self.shell) > 0
                {
                    tasks.push(delayed(BATCH_SETTLE, Message::BatchSettled));
                }
                tasks.push(self.lazy_media_tasks());
                Task::batch(tasks)
            }
        }
    }

    /// Requests media for every item due under the current viewport, or for
    /// everything when no scroll geometry has been seen yet. Video items
    /// have no payload to prefetch and are marked ready on the spot.
    fn lazy_media_tasks(&mut self) -> Task<Message> {
        let due = match self.shell.gallery_viewport {
            Some(geometry) => {
                let bounds = gallery_grid::item_bounds(self.gallery.visible());
                self.gallery.lazy.observe(
                    geometry.scroll_top,
                    geometry.scroll_top + geometry.viewport_height,
                    &bounds,
                )
            }
            None => self.gallery.lazy.request_all(self.gallery.rendered_len()),
        };

        let mut tasks = Vec::new();
        for index in due {
            let Some(item) = self.gallery.items().get(index) else {
                continue;
            };
            match item.entry.kind {
                MediaKind::Video => self.gallery.mark_media_ready(index),
                MediaKind::Image => {
                    let client = self.http.clone();
                    let path = item.entry.path.clone();
                    let url = media_url(self.config.gallery_url(), &path);
                    tasks.push(Task::perform(
                        fetch_media_bytes(client, url),
                        move |result| Message::MediaFetched {
                            index,
                            path: path.clone(),
                            result,
                        },
                    ));
                }
            }
        }
        Task::batch(tasks)
    }

    fn on_media_fetched(
        &mut self,
        index: usize,
        path: String,
        result: std::result::Result<Vec<u8>, String>,
    ) -> Task<Message> {
        match result {
            Ok(bytes) => {
                self.shell
                    .set_media_handle(index, image::Handle::from_bytes(bytes));
                self.gallery.mark_media_ready(index);
            }
            Err(detail) => {
                // The item stays a placeholder; nothing to roll back.
                self.diagnostics
                    .record(DiagnosticEvent::MediaLoadFailed { path, detail });
            }
        }
        Task::none()
    }

    fn on_modal(&mut self, message: modal_overlay::Message) -> Task<Message> {
        match message {
            modal_overlay::Message::Close => self.gallery.close_modal(),
            modal_overlay::Message::Navigate(direction) => {
                self.gallery.modal_navigate(direction, &mut self.shell);
            }
        }
        Task::none()
    }

    fn on_hero(&mut self, message: sections::Message) -> Task<Message> {
        match message {
            sections::Message::CopyAddress => {
                self.address_copied = true;
                let address = self.config.contract_address().to_string();
                Task::batch([
                    iced::clipboard::write(address),
                    delayed(COPY_NOTICE, Message::CopiedNoticeExpired),
                ])
            }
        }
    }

    fn on_price_poll(&self) -> Task<Message> {
        let token = {
            let client = self.http.clone();
            let url = self.config.token_price_url().to_string();
            Task::perform(
                async move { price_feed::fetch_quote(&client, &url).await },
                Message::TokenQuoteFetched,
            )
        };
        let eth = {
            let client = self.http.clone();
            let url = self.config.eth_price_url().to_string();
            Task::perform(
                async move { price_feed::fetch_quote(&client, &url).await },
                Message::EthQuoteFetched,
            )
        };
        Task::batch([token, eth])
    }

    fn settle_quote(
        &mut self,
        ticker: &str,
        result: Result<PriceQuote>,
        change_24h: Option<f64>,
    ) -> PriceDisplay {
        match result {
            Ok(quote) => PriceDisplay::Ready { quote, change_24h },
            Err(err) => {
                self.diagnostics.record(DiagnosticEvent::PriceFetchFailed {
                    ticker: ticker.to_string(),
                    detail: err.to_string(),
                });
                PriceDisplay::Unavailable
            }
        }
    }
}

/// The token endpoint reports no 24h change; a small synthetic drift fills
/// the slot. TODO: fetch the real change from the token's top pool endpoint.
fn placeholder_change() -> f64 {
    let millis = chrono::Utc::now().timestamp_millis();
    ((millis % 601) as f64) / 100.0 - 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::gallery::BATCH_SIZE;

    fn booted_app() -> App {
        let (mut app, _task) = App::new(Flags::default());
        let _ = app.update(Message::ExitFadeFinished);
        let _ = app.update(Message::EntryFadeFinished);
        app
    }

    fn entries(count: usize) -> Vec<MediaEntry> {
        (0..count)
            .map(|i| MediaEntry {
                path: format!("assets/gallery/img-{:03}.png", i),
                kind: MediaKind::Image,
            })
            .collect()
    }

    fn enter_gallery(app: &mut App) {
        let index = app
            .navigator
            .sequence()
            .index_of_section("gallery")
            .expect("gallery in sequence");
        let _ = app.update(Message::Navbar(navbar::Message::EntryPressed(index)));
        let _ = app.update(Message::ExitFadeFinished);
        let _ = app.update(Message::EntryFadeFinished);
    }

    #[tokio::test]
    async fn boot_transition_lands_on_home() {
        let app = booted_app();
        assert_eq!(app.shell.active_view(), Some("hero"));
        assert_eq!(app.shell.fragment(), Some("#hero"));
        assert!(!app.navigator.is_transitioning());
    }

    #[tokio::test]
    async fn first_gallery_entry_starts_the_catalog_fetch() {
        let mut app = booted_app();
        enter_gallery(&mut app);
        assert!(app.gallery.is_catalog_loading());
        assert!(app.shell.is_gallery_loading());
    }

    #[tokio::test]
    async fn catalog_arrival_renders_cards_and_requests_media() {
        let mut app = booted_app();
        enter_gallery(&mut app);

        let _ = app.update(Message::CatalogFetched(Ok(entries(30))));

        assert_eq!(app.shell.cards().len(), BATCH_SIZE);
        // No viewport geometry yet: the fallback requested everything rendered.
        assert!(app.gallery.lazy.is_requested(BATCH_SIZE - 1));
    }

    #[tokio::test]
    async fn failed_catalog_surfaces_the_error_panel() {
        let mut app = booted_app();
        enter_gallery(&mut app);

        let _ = app.update(Message::CatalogFetched(Err(
            crate::error::GalleryError::BadStatus(502).into(),
        )));

        assert!(app.shell.gallery_error().is_some());
        assert!(!app.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn media_arrival_attaches_the_handle() {
        let mut app = booted_app();
        enter_gallery(&mut app);
        let _ = app.update(Message::CatalogFetched(Ok(entries(3))));

        let _ = app.update(Message::MediaFetched {
            index: 1,
            path: "assets/gallery/img-001.png".to_string(),
            result: Ok(vec![0u8; 8]),
        });

        assert!(app.shell.cards()[1].handle.is_some());
        assert!(app.gallery.items()[1].media_ready);
    }

    #[tokio::test]
    async fn failed_media_leaves_the_placeholder_and_logs() {
        let mut app = booted_app();
        enter_gallery(&mut app);
        let _ = app.update(Message::CatalogFetched(Ok(entries(3))));

        let _ = app.update(Message::MediaFetched {
            index: 0,
            path: "assets/gallery/img-000.png".to_string(),
            result: Err("status 404".to_string()),
        });

        assert!(app.shell.cards()[0].handle.is_none());
        assert!(!app.gallery.items()[0].media_ready);
        assert!(!app.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn escape_closes_the_modal() {
        let mut app = booted_app();
        enter_gallery(&mut app);
        let _ = app.update(Message::CatalogFetched(Ok(entries(3))));

        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemPressed(0)));
        assert!(app.gallery.modal().is_some());
        let _ = app.update(Message::EscapePressed);
        assert!(app.gallery.modal().is_none());
    }

    #[tokio::test]
    async fn arrows_drive_the_modal_when_open() {
        let mut app = booted_app();
        enter_gallery(&mut app);
        let _ = app.update(Message::CatalogFetched(Ok(entries(3))));

        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemPressed(0)));
        let _ = app.update(Message::ArrowPressed(Direction::Next));
        assert_eq!(app.gallery.modal().map(|m| m.cursor), Some(1));
    }

    #[tokio::test]
    async fn swipe_past_threshold_navigates_the_modal() {
        let mut app = booted_app();
        enter_gallery(&mut app);
        let _ = app.update(Message::CatalogFetched(Ok(entries(3))));
        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemPressed(1)));

        let _ = app.update(Message::TouchStarted(iced::Point::new(300.0, 10.0)));
        let _ = app.update(Message::TouchEnded(iced::Point::new(180.0, 12.0)));

        assert_eq!(app.gallery.modal().map(|m| m.cursor), Some(2));
    }

    #[tokio::test]
    async fn copy_address_flashes_the_notice() {
        let mut app = booted_app();
        let _ = app.update(Message::Hero(sections::Message::CopyAddress));
        assert!(app.address_copied);
        let _ = app.update(Message::CopiedNoticeExpired);
        assert!(!app.address_copied);
    }

    #[tokio::test]
    async fn unknown_boot_section_aborts_and_logs() {
        let flags = Flags {
            section: Some("vault".to_string()),
            ..Flags::default()
        };
        let (mut app, _task) = App::new(flags);
        let _ = app.update(Message::ExitFadeFinished);

        assert_eq!(app.shell.active_view(), None);
        assert!(!app.navigator.is_transitioning());
        assert_eq!(app.diagnostics.len(), 1);
    }

    #[tokio::test]
    async fn price_results_settle_both_tickers() {
        let mut app = booted_app();
        let quote = PriceQuote {
            price_usd: 0.0042,
            ..PriceQuote::default()
        };
        let _ = app.update(Message::TokenQuoteFetched(Ok(quote)));
        let _ = app.update(Message::EthQuoteFetched(Err(crate::error::Error::Http(
            "timeout".to_string(),
        ))));

        assert!(app.token_price.is_ready());
        assert!(matches!(app.eth_price, PriceDisplay::Unavailable));
    }

    #[test]
    fn media_url_resolves_relative_paths_against_the_endpoint() {
        assert_eq!(
            media_url(
                "https://captain.example.com/get-gallery-contents",
                "assets/gallery/a.png"
            ),
            "https://captain.example.com/assets/gallery/a.png"
        );
        assert_eq!(
            media_url(
                "https://captain.example.com/get-gallery-contents",
                "https://cdn.example.com/a.png"
            ),
            "https://cdn.example.com/a.png"
        );
    }
}
