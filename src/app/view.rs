// SPDX-License-Identifier: MPL-2.0
//! View rendering: the scene canvas, the active section, and the overlay,
//! layered in that order.

use super::{App, Message};
use crate::navigation::FRAME_VIEW;
use crate::ui::gallery_grid;
use crate::ui::modal_overlay;
use crate::ui::navbar;
use crate::ui::sections;
use iced::widget::canvas::Canvas;
use iced::widget::{Container, Row, Space, Stack};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        if let Some(scene) = &self.scene {
            layers = layers.push(
                Canvas::new(scene)
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }

        layers = layers.push(self.main_content());

        if let Some(overlay) = self.modal_layer() {
            layers = layers.push(overlay);
        }

        layers.into()
    }

    fn main_content(&self) -> Element<'_, Message> {
        let (prev_enabled, next_enabled) = self.shell.step_controls();
        let nav = navbar::view(navbar::ViewContext {
            entries: self.navigator.sequence().entries(),
            active_index: self.navigator.current_index(),
            panel_open: self.nav_panel_open,
            prev_enabled,
            next_enabled,
            frame_open: self.shell.frame_open(),
        })
        .map(Message::Navbar);

        Row::new()
            .push(nav)
            .push(
                Container::new(self.active_section())
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .into()
    }

    fn active_section(&self) -> Element<'_, Message> {
        match self.shell.active_view() {
            Some("hero") => sections::hero(sections::HeroContext {
                contract_address: self.config.contract_address(),
                copied: self.address_copied,
                token_price: &self.token_price,
                eth_price: &self.eth_price,
            })
            .map(Message::Hero),
            Some("timeline") => sections::timeline(),
            Some("gallery") => gallery_grid::view(gallery_grid::ViewContext {
                cards: self.shell.cards(),
                filter: self.gallery.filter(),
                loading: self.shell.is_gallery_loading(),
                error: self.shell.gallery_error(),
            })
            .map(Message::Gallery),
            Some("prophecy") => sections::prophecy(),
            Some(FRAME_VIEW) => sections::frame_view(self.shell.frame_source()),
            // Mid-transition, or an aborted activation: nothing is active.
            _ => Space::new().width(Length::Fill).height(Length::Fill).into(),
        }
    }

    fn modal_layer(&self) -> Option<Element<'_, Message>> {
        let modal = self.gallery.modal()?;
        let item_index = *self.gallery.visible().get(modal.cursor)?;
        let card = self.shell.card(item_index)?;
        Some(
            modal_overlay::view(modal_overlay::ViewContext {
                card,
                caption: self.gallery.modal_caption().unwrap_or_default(),
                controls_visible: self.shell.modal_controls_visible(),
                video: Some(&modal.video),
            })
            .map(Message::Modal),
        )
    }
}
