use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::content::grammar::{self, FoundationLesson};
use crate::ui::components::grammar_view;
use crate::ui::theme::Theme;

/// Lessons screen list: six foundation lessons followed by the two
/// reference trees.
pub struct LessonBrowser<'a> {
    pub selected: usize,
    pub theme: &'a Theme,
}

impl Widget for LessonBrowser<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Lessons ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for (i, lesson) in grammar::FOUNDATION_LESSONS.iter().enumerate() {
            let is_selected = i == self.selected;
            let marker = if is_selected { ">" } else { " " };
            let style = Style::default()
                .fg(if is_selected { colors.accent() } else { colors.fg() })
                .add_modifier(if is_selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });
            lines.push(Line::from(Span::styled(
                format!(" {marker} {}  [{} · {}]", lesson.title, lesson.level, lesson.duration),
                style,
            )));
            lines.push(Line::from(Span::styled(
                format!("     {}", lesson.description),
                Style::default().fg(colors.muted()),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Deep Dives",
            Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
        )));
        for (i, tree) in grammar::TREES.iter().enumerate() {
            let flat = grammar::FOUNDATION_LESSONS.len() + i;
            let is_selected = flat == self.selected;
            let marker = if is_selected { ">" } else { " " };
            let topic_count: usize = tree.branches.iter().map(|b| b.topics.len()).sum();
            let style = Style::default()
                .fg(if is_selected { colors.accent() } else { colors.fg() })
                .add_modifier(if is_selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });
            lines.push(Line::from(Span::styled(
                format!(" {marker} {}  ({topic_count} topics)", tree.title),
                style,
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Detail view of one foundation lesson, scrollable, with jump hints.
pub struct LessonDetail<'a> {
    pub lesson: &'static FoundationLesson,
    pub scroll: u16,
    pub theme: &'a Theme,
}

impl Widget for LessonDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.lesson.title))
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = grammar_view::content_lines(&self.lesson.content, self.theme);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  [t] train this lesson  [c] flashcards  [v] vocabulary",
            Style::default().fg(colors.muted()),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
