// SPDX-License-Identifier: MPL-2.0
//! Application wiring: state, boot sequence, and the Iced run loop.

pub mod message;
pub mod shell;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use shell::{GalleryViewport, Shell};

use crate::background::BackgroundScene;
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsLog;
use crate::gallery::modal::SwipeTracker;
use crate::gallery::GalleryState;
use crate::navigation::{NavigationSequence, Navigator, SceneControl, ViewKind};
use crate::ui::price_ticker::PriceDisplay;
use iced::{Task, Theme};
use std::time::Instant;

pub struct App {
    config: Config,
    http: reqwest::Client,
    navigator: Navigator,
    gallery: GalleryState,
    shell: Shell,
    /// Advisory; everything tolerates its absence.
    scene: Option<BackgroundScene>,
    diagnostics: DiagnosticsLog,
    nav_panel_open: bool,
    address_copied: bool,
    token_price: PriceDisplay,
    eth_price: PriceDisplay,
    swipe: SwipeTracker,
    last_tick: Instant,
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = match flags.config_dir.as_deref() {
            Some(dir) => config::load_from_dir(dir),
            None => config::load(),
        }
        .unwrap_or_default();
        if let Some(url) = flags.gallery_url {
            config.gallery_url = Some(url);
        }

        let sequence = NavigationSequence::showcase();
        let sections: Vec<&str> = sequence
            .entries()
            .iter()
            .filter(|entry| entry.kind == ViewKind::Section)
            .map(|entry| entry.id.as_str())
            .collect();
        let shell = Shell::with_sections(&sections);
        let home = config.home_section().to_string();

        let mut app = App {
            config,
            http: reqwest::Client::new(),
            navigator: Navigator::new(sequence, &home),
            gallery: GalleryState::new(),
            shell,
            scene: Some(BackgroundScene::new()),
            diagnostics: DiagnosticsLog::default(),
            nav_panel_open: false,
            address_copied: false,
            token_price: PriceDisplay::default(),
            eth_price: PriceDisplay::default(),
            swipe: SwipeTracker::default(),
            last_tick: Instant::now(),
        };

        let initial_nav = app.boot_navigation(flags.section.as_deref(), flags.page.as_deref());
        let task = Task::batch([initial_nav, Task::done(Message::PricePoll)]);
        (app, task)
    }

    /// Arms the first transition: the flagged page, the flagged section,
    /// or the configured home section.
    fn boot_navigation(&mut self, section: Option<&str>, page: Option<&str>) -> Task<Message> {
        if let Some(page) = page {
            if let Some(index) = self.navigator.sequence().index_of_frame_url(page) {
                if let Some(entry) = self.navigator.sequence().get(index) {
                    let url = entry.id.clone();
                    self.navigator.open_external(
                        &url,
                        &mut self.shell,
                        self.scene.as_mut().map(|s| s as &mut dyn SceneControl),
                    );
                    return update::exit_fade_task();
                }
            }
        }
        let target = section
            .map(str::to_string)
            .unwrap_or_else(|| self.config.home_section().to_string());
        self.navigator.navigate_to(
            &target,
            self.scene.as_mut().map(|s| s as &mut dyn SceneControl),
        );
        update::exit_fade_task()
    }

    fn title(&self) -> String {
        "Ether Showcase".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn bound while only
    // consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}
