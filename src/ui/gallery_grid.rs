// SPDX-License-Identifier: MPL-2.0
//! The gallery view: filter row, media grid, and scroll plumbing.
//!
//! The grid lays visible cards out three per row in fixed-height cells, so
//! cell geometry can be recomputed from positions alone; [`item_bounds`]
//! feeds the same geometry to the lazy loader that the layout uses on
//! screen. Scroll offsets bubble up raw and the app decides whether a batch
//! or a prefetch is due.

use crate::gallery::catalog::{MediaEntry, MediaKind};
use crate::gallery::filter::MediaFilter;
use crate::gallery::lazy::ItemBounds;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::error_display::ErrorDisplay;
use iced::widget::{button, container, image, scrollable, Column, Container, Row, Text};
use iced::{Border, Element, Length, Theme};

pub const GRID_COLUMNS: usize = 3;

/// Widget-facing model of one rendered gallery item. The shell appends one
/// card per `render_item` call; the media handle arrives later.
#[derive(Debug, Clone)]
pub struct ItemCard {
    pub entry: MediaEntry,
    pub hidden: bool,
    pub handle: Option<image::Handle>,
}

impl ItemCard {
    pub fn new(entry: MediaEntry) -> Self {
        Self {
            entry,
            hidden: false,
            handle: None,
        }
    }
}

/// Messages emitted by the gallery view.
#[derive(Debug, Clone)]
pub enum Message {
    FilterPressed(MediaFilter),
    ItemPressed(usize),
    Scrolled(scrollable::Viewport),
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub cards: &'a [ItemCard],
    pub filter: MediaFilter,
    pub loading: bool,
    pub error: Option<&'a str>,
}

/// Cell geometry for the lazy loader, one entry per visible card in layout
/// order. Must stay in lockstep with the grid arithmetic in [`view`].
pub fn item_bounds(visible_indices: &[usize]) -> Vec<ItemBounds> {
    let row_stride = sizing::GALLERY_CELL_HEIGHT + spacing::MD;
    visible_indices
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            let top = (position / GRID_COLUMNS) as f32 * row_stride;
            ItemBounds {
                index,
                top,
                bottom: top + sizing::GALLERY_CELL_HEIGHT,
            }
        })
        .collect()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(build_filter_row(ctx.filter));

    if let Some(error) = ctx.error {
        column = column.push(
            ErrorDisplay::new("Gallery unavailable")
                .message(error)
                .view(),
        );
    } else if ctx.loading && ctx.cards.is_empty() {
        column = column.push(
            Text::new("Summoning the gallery...")
                .size(typography::BODY)
                .color(palette::TEXT_DIM),
        );
    } else {
        column = column.push(build_grid(ctx.cards));
    }

    scrollable(column.padding(spacing::MD))
        .on_scroll(Message::Scrolled)
        .height(Length::Fill)
        .into()
}

fn build_filter_row<'a>(active: MediaFilter) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for filter in MediaFilter::ALL {
        let text = Text::new(filter.label()).size(typography::BODY);
        let styled = if filter == active {
            button(text).style(active_filter_style)
        } else {
            button(text).style(filter_style)
        };
        row = row.push(styled.on_press(Message::FilterPressed(filter)));
    }
    row.into()
}

fn build_grid<'a>(cards: &'a [ItemCard]) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::MD);
    let mut row = Row::new().spacing(spacing::MD);
    let mut in_row = 0;

    for (index, card) in cards.iter().enumerate() {
        if card.hidden {
            continue;
        }
        row = row.push(build_cell(index, card));
        in_row += 1;
        if in_row == GRID_COLUMNS {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::MD);
            in_row = 0;
        }
    }
    if in_row > 0 {
        grid = grid.push(row);
    }

    grid.into()
}

fn build_cell<'a>(index: usize, card: &'a ItemCard) -> Element<'a, Message> {
    let media: Element<'a, Message> = match (&card.handle, card.entry.kind) {
        (Some(handle), MediaKind::Image) => image::Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        // Videos stay a poster cell with a play glyph; playback happens in
        // the modal.
        (_, MediaKind::Video) => centered_glyph("▶"),
        (None, MediaKind::Image) => centered_glyph("◆"),
    };

    let cell = Column::new()
        .spacing(spacing::XXS)
        .push(
            Container::new(media)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(cell_style),
        )
        .push(
            Text::new(card.entry.caption())
                .size(typography::CAPTION)
                .color(palette::TEXT_DIM),
        );

    button(cell)
        .on_press(Message::ItemPressed(index))
        .style(cell_button_style)
        .width(Length::Fill)
        .height(sizing::GALLERY_CELL_HEIGHT)
        .padding(0.0)
        .into()
}

fn centered_glyph<'a>(glyph: &'a str) -> Element<'a, Message> {
    Container::new(
        Text::new(glyph)
            .size(typography::TITLE_LG)
            .color(palette::ACCENT_500),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn cell_style(_theme: &Theme) -> container::Style {
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

fn cell_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => palette::ACCENT_400,
            _ => palette::TEXT,
        },
        ..Default::default()
    }
}

fn filter_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(palette::SURFACE_700.into()),
        text_color: palette::TEXT,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn active_filter_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(palette::ACCENT_700.into()),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::catalog::MediaKind;

    fn card(name: &str) -> ItemCard {
        ItemCard::new(MediaEntry {
            path: format!("assets/gallery/{}", name),
            kind: MediaKind::from_extension(name),
        })
    }

    #[test]
    fn bounds_advance_one_row_every_three_items() {
        let bounds = item_bounds(&[0, 1, 2, 3]);
        assert_eq!(bounds[0].top, bounds[2].top);
        assert!(bounds[3].top > bounds[0].bottom);
        assert_eq!(bounds[3].index, 3);
    }

    #[test]
    fn bounds_keep_item_indices_not_positions() {
        // With items 0..2 filtered out, position 0 belongs to item 3.
        let bounds = item_bounds(&[3, 5]);
        assert_eq!(bounds[0].index, 3);
        assert_eq!(bounds[0].top, 0.0);
        assert_eq!(bounds[1].index, 5);
    }

    #[test]
    fn gallery_renders_loading_error_and_grid_states() {
        let cards = vec![card("a.png"), card("b.mp4"), card("c.jpg"), card("d.png")];
        let _grid = view(ViewContext {
            cards: &cards,
            filter: MediaFilter::All,
            loading: false,
            error: None,
        });
        let _loading = view(ViewContext {
            cards: &[],
            filter: MediaFilter::All,
            loading: true,
            error: None,
        });
        let _error = view(ViewContext {
            cards: &[],
            filter: MediaFilter::Video,
            loading: false,
            error: Some("Failed to load gallery contents. Please try again later."),
        });
    }
}
