use std::collections::HashSet;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::vocabulary::{self, VocabEntry};
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// Scrollable vocabulary browser with the search box, category, and star
/// markers.
pub struct VocabList<'a> {
    pub entries: &'a [&'static VocabEntry],
    pub selected: usize,
    pub starred: &'a HashSet<u32>,
    pub search: &'a LineInput,
    pub search_active: bool,
    pub category_label: &'a str,
    pub filter_label: &'a str,
    pub theme: &'a Theme,
}

impl Widget for VocabList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" Vocabulary ({} words) ", self.entries.len()))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // search
                Constraint::Length(1), // category + lesson filter
                Constraint::Min(0),    // list
            ])
            .split(inner);

        self.render_search(layout[0], buf);

        let filters = Paragraph::new(Line::from(vec![
            Span::styled(" Category: ", Style::default().fg(colors.muted())),
            Span::styled(self.category_label, Style::default().fg(colors.accent())),
            Span::styled("  Lesson: ", Style::default().fg(colors.muted())),
            Span::styled(self.filter_label, Style::default().fg(colors.warning())),
        ]));
        filters.render(layout[1], buf);

        self.render_entries(layout[2], buf);
    }
}

impl VocabList<'_> {
    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let (before, cursor_ch, after) = self.search.render_parts();

        let mut spans = vec![Span::styled(
            " Search: ",
            Style::default().fg(if self.search_active {
                colors.accent()
            } else {
                colors.muted()
            }),
        )];
        spans.push(Span::styled(before.to_string(), Style::default().fg(colors.fg())));
        if self.search_active {
            match cursor_ch {
                Some(ch) => {
                    spans.push(Span::styled(
                        ch.to_string(),
                        Style::default().fg(colors.bg()).bg(colors.fg()),
                    ));
                    spans.push(Span::styled(after.to_string(), Style::default().fg(colors.fg())));
                }
                None => spans.push(Span::styled("█", Style::default().fg(colors.muted()))),
            }
        } else {
            if let Some(ch) = cursor_ch {
                spans.push(Span::styled(ch.to_string(), Style::default().fg(colors.fg())));
                spans.push(Span::styled(after.to_string(), Style::default().fg(colors.fg())));
            }
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_entries(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        if self.entries.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                " No words match. Try a different search or filter.",
                Style::default().fg(colors.muted()),
            )))
            .render(area, buf);
            return;
        }

        // Two rows per entry; keep the selection in view.
        let visible = (area.height as usize / 2).max(1);
        let first = self.selected.saturating_sub(visible.saturating_sub(1));

        let mut lines: Vec<Line> = Vec::new();
        for (i, entry) in self.entries.iter().enumerate().skip(first).take(visible) {
            let is_selected = i == self.selected;
            let marker = if is_selected { ">" } else { " " };
            let star = if self.starred.contains(&entry.id) { "★" } else { " " };

            let badge = match entry.article {
                Some(article) => format!("[{}]", article.as_str()),
                None => format!("[{}]", vocabulary::category_label(entry.category)),
            };

            let head_style = Style::default()
                .fg(if is_selected { colors.accent() } else { colors.fg() })
                .add_modifier(if is_selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });

            lines.push(Line::from(vec![
                Span::styled(format!(" {marker} "), head_style),
                Span::styled(star, Style::default().fg(colors.star())),
                Span::styled(format!(" {} ", entry.german), head_style),
                Span::styled(badge, Style::default().fg(colors.accent_dim())),
            ]));

            let mut detail = format!("      {}", entry.english);
            if !entry.note.is_empty() {
                detail.push_str(&format!("  ({})", entry.note));
            }
            lines.push(Line::from(Span::styled(
                detail,
                Style::default().fg(colors.muted()),
            )));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
