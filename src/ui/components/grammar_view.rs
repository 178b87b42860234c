use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::content::grammar::{Topic, TopicContent, TopicTable, Tree};
use crate::ui::theme::Theme;

/// Render a content table as fixed-width text lines.
pub fn table_lines<'a>(table: &TopicTable, theme: &'a Theme) -> Vec<Line<'a>> {
    let colors = &theme.colors;

    // Column width = widest cell (header included) + padding.
    let cols = table.headers.len();
    let mut widths = vec![0usize; cols];
    for (i, header) in table.headers.iter().enumerate() {
        widths[i] = widths[i].max(header.chars().count());
    }
    for row in table.rows {
        for (i, cell) in row.iter().enumerate() {
            if i < cols {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let pad = |text: &str, width: usize| {
        let len = text.chars().count();
        format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
    };

    let mut lines = Vec::new();
    if let Some(title) = table.title {
        lines.push(Line::from(Span::styled(
            format!("  {title}"),
            Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
        )));
    }

    let header_text = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(Line::from(Span::styled(
        format!("  {header_text}"),
        Style::default().fg(colors.accent()),
    )));
    lines.push(Line::from(Span::styled(
        format!("  {}", "─".repeat(header_text.chars().count())),
        Style::default().fg(colors.border()),
    )));

    for row in table.rows {
        let row_text = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(Line::from(Span::styled(
            format!("  {row_text}"),
            Style::default().fg(colors.fg()),
        )));
    }
    lines
}

/// Full topic content: concept, key points, table, examples, tip.
pub fn content_lines<'a>(content: &TopicContent, theme: &'a Theme) -> Vec<Line<'a>> {
    let colors = &theme.colors;
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        content.concept,
        Style::default().fg(colors.fg()),
    )));
    lines.push(Line::from(""));

    for point in content.key_points {
        lines.push(Line::from(Span::styled(
            format!("  • {point}"),
            Style::default().fg(colors.fg()),
        )));
    }
    lines.push(Line::from(""));

    lines.extend(table_lines(&content.table, theme));
    lines.push(Line::from(""));

    for example in content.examples {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", example.german), Style::default().fg(colors.success())),
            Span::styled(
                format!("({})", example.english),
                Style::default().fg(colors.muted()),
            ),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("  Tip: {}", content.tip),
        Style::default().fg(colors.warning()),
    )));
    lines
}

/// Left-hand topic list of a tree, grouped by branch, with the detail pane
/// handled by the caller.
pub struct TreeTopicList<'a> {
    pub tree: &'static Tree,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl Widget for TreeTopicList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.tree.title))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(Span::styled(
            self.tree.intro,
            Style::default().fg(colors.muted()),
        ))];
        lines.push(Line::from(""));

        let mut flat_index = 0usize;
        for branch in self.tree.branches {
            lines.push(Line::from(Span::styled(
                branch.title,
                Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
            )));
            for topic in branch.topics {
                let is_selected = flat_index == self.selected;
                let marker = if is_selected { ">" } else { " " };
                let style = Style::default()
                    .fg(if is_selected { colors.accent() } else { colors.fg() })
                    .add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    });
                lines.push(Line::from(Span::styled(
                    format!("  {marker} {}", topic.title),
                    style,
                )));
                flat_index += 1;
            }
            lines.push(Line::from(""));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Detail pane for one topic, scrollable.
pub struct TopicDetail<'a> {
    pub topic: &'static Topic,
    pub scroll: u16,
    pub theme: &'a Theme,
}

impl Widget for TopicDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.topic.title))
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(content_lines(&self.topic.content, self.theme))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
