//! Rendering for the prime verdict overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, TEXT, VERDICT_NOT_PRIME, VERDICT_PRIME};

use super::state::PrimeDialogState;

const DIALOG_MIN_WIDTH: u16 = 32;
const DIALOG_HEIGHT: u16 = 7;
const CLOSE_HINT: &str = "Esc: Close";

/// Render the verdict on top of whatever is in `area`.
pub fn render_prime_dialog(frame: &mut Frame, state: &PrimeDialogState, area: Rect) {
    let Some(verdict) = state.verdict() else {
        return;
    };

    let message = verdict.to_string();
    let width = dialog_width(&message);
    let area = centered_rect_by_size(area, width, DIALOG_HEIGHT);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" Is this prime? ", Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT));

    let color = if verdict.prime { VERDICT_PRIME } else { VERDICT_NOT_PRIME };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            CLOSE_HINT,
            Style::default().fg(TEXT).add_modifier(Modifier::DIM),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Wide enough for the message plus borders and a little padding.
fn dialog_width(message: &str) -> u16 {
    let content = Line::from(message).width() as u16;
    content.saturating_add(6).max(DIALOG_MIN_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_messages_use_min_width() {
        assert_eq!(dialog_width("7 is prime"), DIALOG_MIN_WIDTH);
    }

    #[test]
    fn long_messages_grow_the_dialog() {
        let message = "-9223372036854775808 is not prime :(";
        assert_eq!(dialog_width(message), message.len() as u16 + 6);
    }
}
