use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::app::Screen;
use crate::ui::theme::Theme;

/// Top bar: the seven numbered screen tabs plus the signed-in user, if any.
pub struct TabBar<'a> {
    active: Screen,
    identity: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(active: Screen, identity: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { active, identity, theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Deutschmeister ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.header_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans: Vec<Span> = Screen::ALL
            .iter()
            .enumerate()
            .flat_map(|(i, screen)| {
                let style = if *screen == self.active {
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(colors.header_fg())
                };
                vec![
                    Span::styled(format!(" [{}] {} ", i + 1, screen.label()), style),
                    Span::raw(" "),
                ]
            })
            .collect();

        if let Some(name) = self.identity {
            let label = format!("  {name} ");
            let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            let gap = (inner.width as usize).saturating_sub(used + label.chars().count());
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::styled(label, Style::default().fg(colors.muted())));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
