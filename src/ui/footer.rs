use crate::ui::app::Screen;
use crate::ui::theme::{BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(screen: Screen, dialog_open: bool) -> &'static str {
        if dialog_open {
            return " Esc/Enter: Close │ Q: Quit";
        }
        match screen {
            Screen::Menu => " Enter: Open │ Esc/Q: Quit",
            Screen::Counter => {
                " +/-: Count │ P: Is this prime? │ Tab: Focus │ Enter: Press │ Esc: Back │ Q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect, screen: Screen, dialog_open: bool) -> Paragraph<'static> {
        let hints = Self::hints(screen, dialog_open);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER)),
            )
    }
}
