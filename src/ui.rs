// src/ui.rs
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use title_animator::CursorVisibility;

const CURSOR_GLYPH: &str = "▌";

/// Snapshot of everything the title screen draws.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleView {
    pub label: String,
    pub text: String,
    pub cursor: CursorVisibility,
    pub active: bool,
    pub index: usize,
    pub count: usize,
}

impl Widget for &TitleView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let cursor = match self.cursor {
            CursorVisibility::Visible => Span::styled(CURSOR_GLYPH, Style::default().fg(Color::Cyan)),
            CursorVisibility::Hidden => Span::raw(" "),
        };
        let title = Line::from(vec![
            Span::styled(
                self.text.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            cursor,
        ]);

        Paragraph::new(title)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" #{} ", self.label))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(centered_columns(60, rows[1]), buf);

        let state = if self.active {
            Span::styled("visible", Style::default().fg(Color::Green))
        } else {
            Span::styled("hidden", Style::default().fg(Color::Yellow))
        };
        let status = Line::from(vec![
            Span::raw(format!(" title {}/{} | page ", self.index + 1, self.count)),
            state,
            Span::raw(" | v: toggle visibility  q: quit"),
        ]);
        Paragraph::new(status)
            .style(Style::default().fg(Color::Gray))
            .render(rows[3], buf);
    }
}

fn centered_columns(percent_x: u16, r: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(r)[1]
}
