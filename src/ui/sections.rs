// SPDX-License-Identifier: MPL-2.0
//! Static showcase sections: hero, timeline, prophecy, and the frame view.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::price_ticker::{self, PriceDisplay};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{Border, Element, Length, Theme};

/// Messages emitted by the hero section.
#[derive(Debug, Clone)]
pub enum Message {
    CopyAddress,
}

/// Contextual data needed to render the hero section.
pub struct HeroContext<'a> {
    pub contract_address: &'a str,
    /// The copy button flips to a confirmation for a moment after a copy.
    pub copied: bool,
    pub token_price: &'a PriceDisplay,
    pub eth_price: &'a PriceDisplay,
}

pub fn hero<'a>(ctx: HeroContext<'a>) -> Element<'a, Message> {
    let copy_label = if ctx.copied { "Copied!" } else { "Copy CA" };
    let copy_button = button(Text::new(copy_label)).on_press(Message::CopyAddress);

    let address_row = Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(ctx.contract_address)
                .size(typography::BODY)
                .color(palette::TEXT_DIM),
        )
        .push(copy_button);

    let tickers = Row::new()
        .spacing(spacing::MD)
        .push(price_ticker::token_ticker(ctx.token_price))
        .push(price_ticker::eth_ticker(ctx.eth_price));

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(
            Text::new("ETHER")
                .size(typography::TITLE_XL)
                .color(palette::ACCENT_400),
        )
        .push(
            Text::new("The spirit of the chain, made visible.")
                .size(typography::TITLE_MD)
                .color(palette::TEXT),
        )
        .push(address_row)
        .push(tickers)
        .into()
}

const TIMELINE_STOPS: [(&str, &str); 4] = [
    ("Awakening", "The ether stirs and takes its first form."),
    ("Manifestation", "Glyphs surface across the chain."),
    ("Convergence", "The scattered marks begin to align."),
    ("Ascension", "The full figure steps out of the noise."),
];

pub fn timeline<'a, M: 'a>() -> Element<'a, M> {
    let mut column = Column::new().spacing(spacing::MD).padding(spacing::XL).push(
        Text::new("Timeline")
            .size(typography::TITLE_LG)
            .color(palette::TEXT),
    );
    for (title, body) in TIMELINE_STOPS {
        column = column.push(milestone(title, body));
    }
    column.into()
}

fn milestone<'a, M: 'a>(title: &'a str, body: &'a str) -> Element<'a, M> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(title)
                    .size(typography::TITLE_MD)
                    .color(palette::ACCENT_400),
            )
            .push(Text::new(body).size(typography::BODY).color(palette::TEXT_DIM)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(panel_style)
    .into()
}

pub fn prophecy<'a, M: 'a>() -> Element<'a, M> {
    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .push(
            Text::new("The Prophecy")
                .size(typography::TITLE_LG)
                .color(palette::TEXT),
        )
        .push(
            Text::new(
                "When the last block settles and the mempool falls quiet, \
                 the ether will gather what was scattered and hold it whole.",
            )
            .size(typography::BODY)
            .color(palette::TEXT_DIM),
        )
        .into()
}

/// Placeholder surface for the embedded external page. The frame only
/// reports what it points at; the pages themselves live outside the app.
pub fn frame_view<'a, M: 'a>(url: &'a str) -> Element<'a, M> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new("External content")
                    .size(typography::TITLE_MD)
                    .color(palette::TEXT),
            )
            .push(Text::new(url).size(typography::BODY).color(palette::ACCENT_400)),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(panel_style)
    .into()
}

fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(palette::SURFACE_800.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette::SURFACE_700,
        },
        ..Default::default()
    }
}
