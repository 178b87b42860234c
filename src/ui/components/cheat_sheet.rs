use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::content::grammar;
use crate::ui::components::grammar_view;
use crate::ui::theme::Theme;

/// All cheat-sheet tables stacked in one scrollable panel.
pub struct CheatSheet<'a> {
    pub scroll: u16,
    pub theme: &'a Theme,
}

impl Widget for CheatSheet<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Cheat Sheet ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for table in grammar::CHEAT_SHEET {
            lines.extend(grammar_view::table_lines(table, self.theme));
            lines.push(Line::from(""));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
