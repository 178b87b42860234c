use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::exercises::ExerciseKind;
use crate::ui::theme::Theme;

/// Exercise-type selection: the four formats with their candidate counts
/// under the current lesson filter.
pub struct TypeMenu<'a> {
    pub selected: usize,
    pub counts: [usize; 4],
    pub filter_label: &'a str,
    pub theme: &'a Theme,
}

impl Widget for TypeMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(inner);

        let title = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Training Mode",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Practice what you learned in the lessons",
                Style::default().fg(colors.fg()),
            )),
        ])
        .alignment(Alignment::Center);
        title.render(layout[0], buf);

        let filter = Paragraph::new(Line::from(vec![
            Span::styled("  Lesson Filter: ", Style::default().fg(colors.muted())),
            Span::styled(
                self.filter_label,
                Style::default().fg(colors.warning()),
            ),
            Span::styled("   [f/F] change", Style::default().fg(colors.muted())),
        ]));
        filter.render(layout[1], buf);

        let menu_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                ExerciseKind::ALL
                    .iter()
                    .map(|_| Constraint::Length(3))
                    .collect::<Vec<_>>(),
            )
            .split(layout[2]);

        for (i, kind) in ExerciseKind::ALL.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };

            let label_text = format!(
                " {indicator} [{key}] {title}  ({count} exercises)",
                key = i + 1,
                title = kind.title(),
                count = self.counts[i],
            );
            let desc_text = format!("     {}", kind.description());

            let label_style = Style::default()
                .fg(if is_selected { colors.accent() } else { colors.fg() })
                .add_modifier(if is_selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });

            let lines = vec![
                Line::from(Span::styled(label_text, label_style)),
                Line::from(Span::styled(
                    desc_text,
                    Style::default().fg(colors.muted()),
                )),
            ];

            if i < menu_layout.len() {
                Paragraph::new(lines).render(menu_layout[i], buf);
            }
        }
    }
}
