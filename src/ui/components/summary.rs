use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::exercise::ExerciseSession;
use crate::ui::theme::Theme;

/// End-of-run card: percentage plus the raw score.
pub struct RunSummary<'a> {
    pub session: &'a ExerciseSession,
    pub theme: &'a Theme,
}

impl Widget for RunSummary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let score = self.session.score();
        let percentage = self.session.percentage();

        let block = Block::bordered()
            .title(" Exercise Complete! ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let grade_color = if percentage >= 80 {
            colors.success()
        } else if percentage >= 50 {
            colors.warning()
        } else {
            colors.error()
        };

        let lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                format!("{percentage}%"),
                Style::default().fg(grade_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("You got {} out of {} correct", score.correct, score.total),
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] Try another exercise  [ESC] Back",
                Style::default().fg(colors.muted()),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
