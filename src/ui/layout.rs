use ratatui::layout::{Constraint, Layout, Rect};

/// Responsive width classes. Screens with a detail pane (grammar) only get
/// the side-by-side arrangement in `Wide`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,
    Medium,
    Narrow,
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        match area.width {
            0..=59 => LayoutTier::Narrow,
            60..=99 => LayoutTier::Medium,
            _ => LayoutTier::Wide,
        }
    }

    pub fn show_sidebar(&self) -> bool {
        *self == LayoutTier::Wide
    }
}

/// Header / main / footer split shared by every screen.
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub sidebar: Option<Rect>,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        Self::with_sidebar(area, false)
    }

    pub fn with_sidebar(area: Rect, want_sidebar: bool) -> Self {
        let tier = LayoutTier::from_area(area);

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .areas(area);

        let (main, sidebar) = if want_sidebar && tier.show_sidebar() {
            let [main, side] =
                Layout::horizontal([Constraint::Percentage(68), Constraint::Percentage(32)])
                    .areas(body);
            (main, Some(side))
        } else {
            (body, None)
        };

        Self { header, main, sidebar, footer, tier }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 60;
    const MIN_POPUP_HEIGHT: u16 = 14;

    let clamp = |requested: u16, floor: u16, available: u16| {
        requested.max(floor).min(available)
    };
    let w = clamp(
        area.width.saturating_mul(percent_x.min(100)) / 100,
        MIN_POPUP_WIDTH,
        area.width,
    );
    let h = clamp(
        area.height.saturating_mul(percent_y.min(100)) / 100,
        MIN_POPUP_HEIGHT,
        area.height,
    );

    let [_, row, _] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(h), Constraint::Fill(1)])
            .areas(area);
    let [_, popup, _] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(w), Constraint::Fill(1)])
            .areas(row);
    popup
}

/// Word-wrap a string to `width` columns, breaking at spaces.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 120, 40)), LayoutTier::Wide);
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 99, 40)), LayoutTier::Medium);
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 59, 40)), LayoutTier::Narrow);
    }

    #[test]
    fn sidebar_only_when_wide_and_requested() {
        let wide = Rect::new(0, 0, 120, 40);
        assert!(AppLayout::with_sidebar(wide, true).sidebar.is_some());
        assert!(AppLayout::with_sidebar(wide, false).sidebar.is_none());
        let medium = Rect::new(0, 0, 80, 40);
        assert!(AppLayout::with_sidebar(medium, true).sidebar.is_none());
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 120, 40);
        let popup = centered_rect(50, 60, area);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
        assert!(popup.x >= area.x && popup.y >= area.y);

        // Tiny terminals: the minimums cap at the available space.
        let tiny = Rect::new(0, 0, 30, 8);
        let popup = centered_rect(50, 50, tiny);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 8);
    }

    #[test]
    fn wrap_text_breaks_at_spaces() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
        let empty = wrap_text("", 10);
        assert_eq!(empty, vec![String::new()]);
    }

    #[test]
    fn wrap_text_keeps_paragraphs() {
        let lines = wrap_text("a\nb", 10);
        assert_eq!(lines, vec!["a", "b"]);
    }
}
