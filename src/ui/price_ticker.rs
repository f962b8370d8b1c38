// SPDX-License-Identifier: MPL-2.0
//! Price ticker widgets for the hero section.
//!
//! The token ticker shows the full stat block; the ETH ticker is a one-line
//! majors widget. Both render from [`PriceDisplay`], which the app updates
//! on every poll.

use crate::price_feed::{
    self, format_large_number, format_price, format_price_with_commas, PriceQuote,
};
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, Column, Container, Row, Text};
use iced::{Border, Element, Theme};

/// Display state of one ticker.
#[derive(Debug, Clone, Default)]
pub enum PriceDisplay {
    #[default]
    Loading,
    Ready {
        quote: PriceQuote,
        /// 24h change in percent, when the endpoint reports one.
        change_24h: Option<f64>,
    },
    Unavailable,
}

impl PriceDisplay {
    pub fn is_ready(&self) -> bool {
        matches!(self, PriceDisplay::Ready { .. })
    }
}

/// Full stat block for the showcase token.
pub fn token_ticker<'a, M: 'a>(display: &PriceDisplay) -> Element<'a, M> {
    let content: Element<'a, M> = match display {
        PriceDisplay::Loading => dim_text("Loading..."),
        PriceDisplay::Unavailable => dim_text(price_feed::UNAVAILABLE_TEXT),
        PriceDisplay::Ready { quote, .. } => {
            let mut column = Column::new().spacing(spacing::XXS).push(
                Text::new(format_price(quote.price_usd))
                    .size(typography::TITLE_MD)
                    .color(palette::ACCENT_400),
            );
            if let Some(volume) = quote.volume_24h_usd {
                column = column.push(stat_row("24h Vol", format_large_number(volume)));
            }
            if let Some(market_cap) = quote.market_cap_usd {
                column = column.push(stat_row("MCap", format_large_number(market_cap)));
            }
            if let Some(liquidity) = quote.liquidity_usd {
                column = column.push(stat_row("Liquidity", format_large_number(liquidity)));
            }
            column.into()
        }
    };

    Container::new(content)
        .padding(spacing::SM)
        .style(card_style)
        .into()
}

/// One-line ETH price with the 24h change beside it.
pub fn eth_ticker<'a, M: 'a>(display: &PriceDisplay) -> Element<'a, M> {
    let content: Element<'a, M> = match display {
        PriceDisplay::Loading => dim_text("Loading..."),
        PriceDisplay::Unavailable => dim_text(price_feed::UNAVAILABLE_TEXT),
        PriceDisplay::Ready { quote, change_24h } => {
            let mut row = Row::new().spacing(spacing::XS).push(
                Text::new(format!(
                    "ETH {}",
                    format_price_with_commas(quote.price_usd)
                ))
                .size(typography::BODY)
                .color(palette::TEXT),
            );
            if let Some(change) = change_24h {
                let color = if *change >= 0.0 {
                    palette::SUCCESS_500
                } else {
                    palette::ERROR_500
                };
                row = row.push(
                    Text::new(price_feed::format_percent_change(*change))
                        .size(typography::BODY)
                        .color(color),
                );
            }
            row.into()
        }
    };

    Container::new(content)
        .padding([spacing::XS, spacing::SM])
        .style(card_style)
        .into()
}

fn dim_text<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    Text::new(label)
        .size(typography::CAPTION)
        .color(palette::TEXT_DIM)
        .into()
}

fn stat_row<'a, M: 'a>(label: &'a str, value: String) -> Element<'a, M> {
    Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::TEXT_DIM),
        )
        .push(Text::new(value).size(typography::CAPTION).color(palette::TEXT))
        .into()
}

fn card_style(_theme: &Theme) -> container::Style {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> PriceQuote {
        PriceQuote {
            price_usd: 0.00000342,
            volume_24h_usd: Some(125_000.5),
            fdv_usd: Some(3_400_000.0),
            market_cap_usd: Some(3_400_000.0),
            liquidity_usd: Some(85_000.0),
        }
    }

    #[test]
    fn tickers_render_in_every_state() {
        for display in [
            PriceDisplay::Loading,
            PriceDisplay::Unavailable,
            PriceDisplay::Ready {
                quote: quote(),
                change_24h: Some(-1.25),
            },
        ] {
            let _token: Element<'_, ()> = token_ticker(&display);
            let _eth: Element<'_, ()> = eth_ticker(&display);
        }
    }

    #[test]
    fn only_ready_state_reports_ready() {
        assert!(!PriceDisplay::Loading.is_ready());
        assert!(!PriceDisplay::Unavailable.is_ready());
        assert!(PriceDisplay::Ready {
            quote: quote(),
            change_24h: None
        }
        .is_ready());
    }
}
