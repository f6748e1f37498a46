use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::counter::state::{Control, CounterViewState};
use crate::ui::theme::{ACCENT, BORDER, FOCUS_BG, TEXT};

/// Draws the counter screen. `count` is read from the store on every
/// frame; this view keeps no copy of it.
pub fn render_counter_view(frame: &mut Frame, state: &CounterViewState, count: i64, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Counter demo ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top_padding = inner.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(vec![
        control_span(Control::Decrement, state.focused),
        Span::styled(
            format!("   {}   ", count),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ),
        control_span(Control::Increment, state.focused),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(control_span(Control::IsPrime, state.focused)));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

fn control_span(control: Control, focused: Control) -> Span<'static> {
    let style = if control == focused {
        Style::default()
            .fg(ACCENT)
            .bg(FOCUS_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    };
    Span::styled(control.label(), style)
}
