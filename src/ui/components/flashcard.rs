use std::collections::HashSet;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::flashcards::FlashcardDeck;
use crate::ui::theme::Theme;

/// One flashcard, front or back, with deck position and star state.
pub struct FlashcardView<'a> {
    pub deck: &'a FlashcardDeck,
    pub starred: &'a HashSet<u32>,
    pub filter_label: &'a str,
    pub theme: &'a Theme,
}

impl Widget for FlashcardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let title = if self.deck.is_empty() {
            " Flashcards ".to_string()
        } else {
            format!(" Flashcards {}/{} ", self.deck.position() + 1, self.deck.len())
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(card) = self.deck.current() else {
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No cards for this lesson.",
                    Style::default().fg(colors.muted()),
                )),
                Line::from(Span::styled(
                    "[f] change lesson filter",
                    Style::default().fg(colors.muted()),
                )),
            ])
            .alignment(Alignment::Center)
            .render(inner, buf);
            return;
        };

        let star = if self.starred.contains(&card.id) { "★ " } else { "" };
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Lesson filter: {}", self.filter_label),
                Style::default().fg(colors.muted()),
            )),
            Line::from(""),
            Line::from(""),
        ];

        let front = match card.article {
            Some(article) => format!("{star}{} {}", article.as_str(), card.german),
            None => format!("{star}{}", card.german),
        };
        lines.push(Line::from(Span::styled(
            front,
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        )));

        if self.deck.revealed() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                card.english,
                Style::default().fg(colors.success()),
            )));
            if !card.note.is_empty() {
                lines.push(Line::from(Span::styled(
                    card.note,
                    Style::default().fg(colors.muted()),
                )));
            }
        } else {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "[Space] flip",
                Style::default().fg(colors.muted()),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
