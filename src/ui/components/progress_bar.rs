use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

/// A labelled horizontal bar; `ratio` is clamped to 0..=1.
pub struct ProgressBar<'a> {
    label: &'a str,
    ratio: f64,
    theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    pub fn new(label: &'a str, ratio: f64, theme: &'a Theme) -> Self {
        Self { label, ratio: ratio.clamp(0.0, 1.0), theme }
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.label))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let filled = (width as f64 * self.ratio).round() as usize;
        let filled = filled.min(width);

        let bar = Line::from(vec![
            Span::styled(
                "█".repeat(filled),
                Style::default().fg(colors.bar_filled()),
            ),
            Span::styled(
                "░".repeat(width - filled),
                Style::default().fg(colors.bar_empty()),
            ),
        ]);
        Paragraph::new(bar).render(inner, buf);
    }
}
