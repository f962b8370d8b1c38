// SPDX-License-Identifier: MPL-2.0
//! Full-screen modal overlay for a single gallery item.
//!
//! The overlay dims everything behind it; clicking the backdrop closes it,
//! clicks inside the media card do not. Prev/next controls render only when
//! the caller says more than one item is visible.

use crate::gallery::catalog::MediaKind;
use crate::gallery::modal::VideoState;
use crate::navigation::Direction;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::gallery_grid::ItemCard;
use iced::widget::{
    button, center, container, image, mouse_area, opaque, Column, Container, Row, Space, Stack,
    Text,
};
use iced::{Border, Color, Element, Length, Theme};

/// Messages emitted by the overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Navigate(Direction),
}

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub card: &'a ItemCard,
    pub caption: String,
    pub controls_visible: bool,
    pub video: Option<&'a VideoState>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill)).style(backdrop_style),
    )
    .on_press(Message::Close);

    Stack::new()
        .push(backdrop)
        .push(center(opaque(build_card(ctx))))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn build_card<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let media: Element<'a, Message> = match (&ctx.card.handle, ctx.card.entry.kind) {
        (Some(handle), MediaKind::Image) => image::Image::new(handle.clone())
            .width(Length::Fill)
            .into(),
        (_, MediaKind::Video) => build_video_panel(ctx.video),
        (None, MediaKind::Image) => dim_panel("Loading media..."),
    };

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(
            Row::new()
                .push(Space::new().width(Length::Fill).height(Length::Shrink))
                .push(button(Text::new("✕")).on_press(Message::Close)),
        )
        .push(media)
        .push(
            Text::new(ctx.caption)
                .size(typography::BODY)
                .color(palette::TEXT),
        );

    if ctx.controls_visible {
        column = column.push(
            Row::new()
                .spacing(spacing::MD)
                .push(button(Text::new("◀")).on_press(Message::Navigate(Direction::Prev)))
                .push(Space::new().width(Length::Fill).height(Length::Shrink))
                .push(button(Text::new("▶")).on_press(Message::Navigate(Direction::Next))),
        );
    }

    Container::new(column)
        .padding(spacing::LG)
        .max_width(sizing::MODAL_MEDIA_MAX)
        .style(card_style)
        .into()
}

/// Stand-in panel while no video backend is wired to the overlay. The
/// playing flag still follows open/close so the state machine is exact.
fn build_video_panel<'a>(video: Option<&'a VideoState>) -> Element<'a, Message> {
    let playing = video.map(|v| v.playing).unwrap_or(false);
    dim_panel(if playing { "▶ Playing" } else { "⏸ Paused" })
}

fn dim_panel<'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::TITLE_MD)
            .color(palette::TEXT_DIM),
    )
    .center_x(Length::Fill)
    .center_y(sizing::GALLERY_CELL_HEIGHT)
    .into()
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            }
            .into(),
        ),
        ..Default::default()
    }
}

fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(palette::SURFACE_900.into()),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: palette::ACCENT_700,
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::catalog::MediaEntry;

    fn card(name: &str) -> ItemCard {
        ItemCard::new(MediaEntry {
            path: format!("assets/gallery/{}", name),
            kind: MediaKind::from_extension(name),
        })
    }

    #[test]
    fn overlay_renders_image_with_controls() {
        let card = card("a.png");
        let _element = view(ViewContext {
            card: &card,
            caption: "a".to_string(),
            controls_visible: true,
            video: None,
        });
    }

    #[test]
    fn overlay_renders_video_without_controls() {
        let card = card("clip.mp4");
        let video = VideoState {
            playing: true,
            position_secs: 0.0,
        };
        let _element = view(ViewContext {
            card: &card,
            caption: "clip".to_string(),
            controls_visible: false,
            video: Some(&video),
        });
    }
}
