use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::content::exercises::Prompt;
use crate::session::exercise::{ExerciseSession, Phase};
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// The active question: prompt, hint, answer input or options, and the
/// post-grade feedback line.
pub struct ExerciseCard<'a> {
    pub session: &'a ExerciseSession,
    pub answer_input: &'a LineInput,
    pub theme: &'a Theme,
}

impl Widget for ExerciseCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let Some(exercise) = self.session.current_exercise() else {
            return;
        };
        let kind = exercise.kind();

        let block = Block::bordered()
            .title(format!(" {} ", kind.heading()))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // question + hint
                Constraint::Min(6),    // input / options
                Constraint::Length(3), // feedback
            ])
            .split(inner);

        let mut question_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                exercise.question(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(hint) = exercise.hint() {
            question_lines.push(Line::from(Span::styled(
                format!("Hint: {hint}"),
                Style::default().fg(colors.muted()),
            )));
        }
        Paragraph::new(question_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(layout[0], buf);

        match exercise.prompt {
            Prompt::Translation { .. } => self.render_answer_input(layout[1], buf),
            _ => self.render_options(exercise.options().unwrap(), exercise.expected(), layout[1], buf),
        }

        self.render_feedback(exercise.expected(), &exercise.prompt, layout[2], buf);
    }
}

impl ExerciseCard<'_> {
    fn render_answer_input(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let (before, cursor_ch, after) = self.answer_input.render_parts();

        let mut spans = vec![
            Span::styled("  > ", Style::default().fg(colors.accent())),
            Span::styled(before.to_string(), Style::default().fg(colors.fg())),
        ];
        match cursor_ch {
            Some(ch) => {
                spans.push(Span::styled(
                    ch.to_string(),
                    Style::default().fg(colors.bg()).bg(colors.fg()),
                ));
                spans.push(Span::styled(after.to_string(), Style::default().fg(colors.fg())));
            }
            None => {
                if self.session.phase() == Phase::InProgress {
                    spans.push(Span::styled("█", Style::default().fg(colors.muted())));
                }
            }
        }

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Type your translation:",
                Style::default().fg(colors.muted()),
            )),
            Line::from(spans),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn render_options(
        &self,
        options: &[&'static str; 4],
        answer: &str,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let colors = &self.theme.colors;
        let graded = self.session.phase() == Phase::Graded;
        let selected = self.session.selected();

        let mut lines = vec![Line::from("")];
        for (i, option) in options.iter().enumerate() {
            let is_selected = selected == Some(option);
            let marker = if is_selected { ">" } else { " " };

            // After grading, show the right answer green and a wrong pick red.
            let style = if graded && *option == answer {
                Style::default().fg(colors.success()).add_modifier(Modifier::BOLD)
            } else if graded && is_selected {
                Style::default().fg(colors.error())
            } else if is_selected {
                Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };

            lines.push(Line::from(Span::styled(
                format!("  {marker} [{key}] {option}", key = i + 1),
                style,
            )));
        }
        Paragraph::new(lines).render(area, buf);
    }

    fn render_feedback(&self, expected: &str, prompt: &Prompt, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        if self.session.phase() != Phase::Graded {
            return;
        }

        let lines = if self.session.last_correct() {
            vec![Line::from(Span::styled(
                "  ✓ Correct!",
                Style::default().fg(colors.success()).add_modifier(Modifier::BOLD),
            ))]
        } else {
            let reveal = match prompt {
                Prompt::Translation { english, .. } => *english,
                _ => expected,
            };
            vec![
                Line::from(Span::styled(
                    "  ✗ Not quite...",
                    Style::default().fg(colors.error()).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  Correct answer: {reveal}"),
                    Style::default().fg(colors.fg()),
                )),
            ]
        };
        Paragraph::new(lines).render(area, buf);
    }
}
