use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::content::lessons;
use crate::net::chat_api::Role;
use crate::session::chat::{ChatMode, ChatSession};
use crate::ui::layout::wrap_text;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// Conversation screen: mode line, transcript, missing-backend warning,
/// and the input box.
pub struct ChatPanel<'a> {
    pub chat: &'a ChatSession,
    pub input: &'a LineInput,
    pub input_active: bool,
    pub api_base_missing: bool,
    pub theme: &'a Theme,
}

impl Widget for ChatPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Conversation Lab ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let warning_height = if self.api_base_missing { 2 } else { 0 };
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),              // mode line
                Constraint::Length(warning_height), // missing backend banner
                Constraint::Min(3),                 // transcript
                Constraint::Length(2),              // input
            ])
            .split(inner);

        self.render_mode_line(layout[0], buf);
        if self.api_base_missing {
            self.render_warning(layout[1], buf);
        }
        self.render_transcript(layout[2], buf);
        self.render_input(layout[3], buf);
    }
}

impl ChatPanel<'_> {
    fn render_mode_line(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let mode_label = match self.chat.mode {
            ChatMode::Lesson => "Lesson Mode",
            ChatMode::Free => "Free Chat",
        };
        let mut spans = vec![
            Span::styled(" Mode: ", Style::default().fg(colors.muted())),
            Span::styled(
                mode_label,
                Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD),
            ),
        ];
        if self.chat.mode == ChatMode::Lesson {
            spans.push(Span::styled("  Lesson: ", Style::default().fg(colors.muted())));
            spans.push(Span::styled(
                lessons::title_or_default(&self.chat.lesson_id),
                Style::default().fg(colors.warning()),
            ));
        }
        if self.chat.is_busy() {
            spans.push(Span::styled(
                "  sending...",
                Style::default().fg(colors.muted()),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_warning(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lines = vec![
            Line::from(Span::styled(
                " Missing API base: set DEUTSCHMEISTER_CHAT_API_BASE to your backend URL",
                Style::default().fg(colors.warning()),
            )),
            Line::from(Span::styled(
                " (for example: https://xxxx.ngrok-free.app/v1)",
                Style::default().fg(colors.muted()),
            )),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn render_transcript(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let width = area.width.saturating_sub(4) as usize;
        if width == 0 {
            return;
        }

        // Build newest-last, then keep the tail that fits.
        let mut lines: Vec<Line> = Vec::new();
        for message in self.chat.messages() {
            let (prefix, style) = match message.role {
                Role::User => ("you> ", Style::default().fg(colors.accent())),
                Role::Assistant => ("igel> ", Style::default().fg(colors.fg())),
                Role::System => continue,
            };
            for (i, wrapped) in wrap_text(&message.content, width).into_iter().enumerate() {
                let head = if i == 0 { prefix } else { "      " };
                lines.push(Line::from(vec![
                    Span::styled(head, Style::default().fg(colors.muted())),
                    Span::styled(wrapped, style),
                ]));
            }
        }

        let visible = area.height as usize;
        let skip = lines.len().saturating_sub(visible);
        let tail: Vec<Line> = lines.into_iter().skip(skip).collect();
        Paragraph::new(tail).render(area, buf);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let (before, cursor_ch, after) = self.input.render_parts();

        let prompt_style = if self.input_active {
            Style::default().fg(colors.accent())
        } else {
            Style::default().fg(colors.muted())
        };
        let mut spans = vec![Span::styled(" > ", prompt_style)];
        spans.push(Span::styled(before.to_string(), Style::default().fg(colors.fg())));
        if self.input_active {
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
        } else if let Some(ch) = cursor_ch {
            spans.push(Span::styled(ch.to_string(), Style::default().fg(colors.fg())));
            spans.push(Span::styled(after.to_string(), Style::default().fg(colors.fg())));
        }

        let hint = if self.input_active {
            " [Enter] send  [ESC] browse keys"
        } else {
            " [i] type  [m] mode  [,/.] lesson"
        };
        let lines = vec![
            Line::from(spans),
            Line::from(Span::styled(hint, Style::default().fg(colors.muted()))),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
