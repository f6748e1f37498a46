use crate::ui::app::{App, Screen, MENU_ENTRIES};
use crate::ui::counter::render_counter_view;
use crate::ui::footer::Footer;
use crate::ui::header::{Header, ROOT_TITLE};
use crate::ui::layout::layout_regions;
use crate::ui::prime::render_prime_dialog;
use crate::ui::theme::{ACCENT, BORDER, FOCUS_BG, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.screen()), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Menu => draw_menu(frame, app, body),
        Screen::Counter => render_counter_view(frame, app.counter_view(), app.count(), body),
    }
    let dialog_open = app.prime_dialog().is_visible();
    frame.render_widget(
        Footer::new().widget(footer, app.screen(), dialog_open),
        footer,
    );

    render_prime_dialog(frame, app.prime_dialog(), body);
}

fn draw_menu(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let selected = app.menu_selection();
    let lines: Vec<Line> = MENU_ENTRIES
        .iter()
        .enumerate()
        .map(|(idx, screen)| {
            let line = Line::from(vec![
                Span::styled(format!("{:>2}. ", idx + 1), Style::default().fg(TEXT)),
                Span::styled(screen.title(), Style::default().fg(TEXT)),
                Span::styled("  ›", Style::default().fg(ACCENT)),
            ]);
            if idx == selected {
                line.style(
                    Style::default()
                        .bg(FOCUS_BG)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                line
            }
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", ROOT_TITLE),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
