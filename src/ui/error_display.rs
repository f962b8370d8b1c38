// SPDX-License-Identifier: MPL-2.0
//! Inline error panel shown in place of content that failed to load.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{button, container, Column, Container, Text};
use iced::{Border, Element, Length, Theme};

/// Builder for an inline error panel with an optional action button.
pub struct ErrorDisplay<Message> {
    title: String,
    message: Option<String>,
    action: Option<(String, Message)>,
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            action: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    pub fn view<'a>(self) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::SM).push(
            Text::new(self.title)
                .size(typography::TITLE_MD)
                .color(palette::ERROR_500),
        );

        if let Some(message) = self.message {
            column = column.push(
                Text::new(message)
                    .size(typography::BODY)
                    .color(palette::TEXT_DIM),
            );
        }

        if let Some((label, on_press)) = self.action {
            column = column.push(button(Text::new(label)).on_press(on_press));
        }

        Container::new(column)
            .padding(spacing::LG)
            .width(Length::Fill)
            .style(panel_style)
            .into()
    }
}

fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(palette::SURFACE_800.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette::ERROR_500,
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_renders_with_message_and_action() {
        let _element: Element<'_, ()> = ErrorDisplay::new("Gallery unavailable")
            .message("Failed to load gallery contents. Please try again later.")
            .action("Retry", ())
            .view();
    }

    #[test]
    fn panel_renders_title_only() {
        let _element: Element<'_, ()> = ErrorDisplay::new("Gallery unavailable").view();
    }
}
