// SPDX-License-Identifier: MPL-2.0
//! Navigation panel and prev/next step controls.
//!
//! The panel slides over the left edge when toggled and lists every stop in
//! the navigation sequence. Below the entry list sit the sequential step
//! buttons; a close-frame button appears while external content fills the
//! content frame.

use crate::navigation::{Direction, ViewEntry, ViewKind};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{Border, Element, Length, Theme};

/// Contextual data needed to render the navigation panel.
pub struct ViewContext<'a> {
    pub entries: &'a [ViewEntry],
    /// Sequence position of the active view, when it has one.
    pub active_index: Option<usize>,
    pub panel_open: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// External content is loaded; offer the close-frame affordance.
    pub frame_open: bool,
}

/// Messages emitted by the navigation panel.
#[derive(Debug, Clone)]
pub enum Message {
    TogglePanel,
    EntryPressed(usize),
    StepPressed(Direction),
    CloseFrame,
}

/// Renders the toggle button, and the panel itself while open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let toggle = button(Text::new(if ctx.panel_open { "✕" } else { "☰" }))
        .on_press(Message::TogglePanel)
        .padding(spacing::XS);

    let mut column = Column::new().spacing(spacing::XS).push(toggle);

    if ctx.panel_open {
        column = column.push(build_panel(&ctx));
    }

    column.into()
}

fn build_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut entries = Column::new().spacing(spacing::XXS);
    for (index, entry) in ctx.entries.iter().enumerate() {
        let active = ctx.active_index == Some(index);
        entries = entries.push(build_entry(index, entry, active));
    }

    let mut panel = Column::new()
        .spacing(spacing::SM)
        .push(entries)
        .push(build_step_row(ctx));

    if ctx.frame_open {
        panel = panel.push(
            button(Text::new("Return Home"))
                .on_press(Message::CloseFrame)
                .width(Length::Fill),
        );
    }

    Container::new(panel)
        .width(sizing::NAV_PANEL_WIDTH)
        .padding(spacing::SM)
        .style(panel_style)
        .into()
}

fn build_entry<'a>(index: usize, entry: &ViewEntry, active: bool) -> Element<'a, Message> {
    let label = entry_label(entry);
    let text = Text::new(label).size(typography::BODY);
    let styled = if active {
        button(text).style(active_entry_style)
    } else {
        button(text).style(entry_style)
    };
    styled
        .on_press(Message::EntryPressed(index))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .into()
}

/// Section entries are titled from their id; externals carry a title.
fn entry_label(entry: &ViewEntry) -> String {
    match entry.kind {
        ViewKind::External => entry
            .title
            .clone()
            .unwrap_or_else(|| entry.trailing_segment().to_string()),
        ViewKind::Section => {
            let mut chars = entry.id.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}

fn build_step_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut prev = button(Text::new("◀ Prev")).width(Length::Fill);
    if ctx.prev_enabled {
        prev = prev.on_press(Message::StepPressed(Direction::Prev));
    }
    let mut next = button(Text::new("Next ▶")).width(Length::Fill);
    if ctx.next_enabled {
        next = next.on_press(Message::StepPressed(Direction::Next));
    }

    Row::new()
        .spacing(spacing::XS)
        .push(prev)
        .push(next)
        .into()
}

fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(palette::SURFACE_800.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette::SURFACE_500,
        },
        ..Default::default()
    }
}

fn entry_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette::SURFACE_700.into()),
            text_color: palette::TEXT,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette::TEXT,
            ..Default::default()
        },
    }
}

fn active_entry_style(_theme: &Theme, _status: button::Status) -> button::Style {
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
    use crate::navigation::NavigationSequence;

    #[test]
    fn navbar_renders_closed() {
        let sequence = NavigationSequence::showcase();
        let _element = view(ViewContext {
            entries: sequence.entries(),
            active_index: Some(0),
            panel_open: false,
            prev_enabled: false,
            next_enabled: true,
            frame_open: false,
        });
    }

    #[test]
    fn navbar_renders_open_with_frame_loaded() {
        let sequence = NavigationSequence::showcase();
        let _element = view(ViewContext {
            entries: sequence.entries(),
            active_index: None,
            panel_open: true,
            prev_enabled: true,
            next_enabled: true,
            frame_open: true,
        });
    }

    #[test]
    fn section_labels_are_capitalized() {
        assert_eq!(entry_label(&ViewEntry::section("hero")), "Hero");
    }

    #[test]
    fn external_labels_use_their_title() {
        let entry = ViewEntry::external("lore/lore.html", "The Lore");
        assert_eq!(entry_label(&entry), "The Lore");
    }
}
