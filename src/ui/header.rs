use crate::ui::app::Screen;
use crate::ui::theme::{ACCENT, BORDER, BREADCRUMB_SEPARATOR, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const ROOT_TITLE: &str = "State management";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Breadcrumb for the current screen.
    pub fn widget(&self, screen: Screen) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(BREADCRUMB_SEPARATOR);
        let current_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled("  ", text_style)];
        match screen {
            Screen::Menu => spans.push(Span::styled(ROOT_TITLE, current_style)),
            Screen::Counter => {
                spans.push(Span::styled(ROOT_TITLE, text_style));
                spans.push(Span::styled("  ›  ", separator_style));
                spans.push(Span::styled(screen.title(), current_style));
            }
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
