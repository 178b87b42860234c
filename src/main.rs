mod app;
mod config;
mod content;
mod event;
mod net;
mod session;
mod ui;

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use app::{App, Screen};
use content::exercises::ExerciseKind;
use event::{AppEvent, EventHandler};
use session::exercise::Phase;
use ui::components::chat_panel::ChatPanel;
use ui::components::cheat_sheet::CheatSheet;
use ui::components::exercise_card::ExerciseCard;
use ui::components::flashcard::FlashcardView;
use ui::components::grammar_view::{TopicDetail, TreeTopicList};
use ui::components::lesson_browser::{LessonBrowser, LessonDetail};
use ui::components::progress_bar::ProgressBar;
use ui::components::summary::RunSummary;
use ui::components::tab_bar::TabBar;
use ui::components::type_menu::TypeMenu;
use ui::components::vocab_list::VocabList;
use ui::layout::AppLayout;
use ui::line_input::InputResult;

#[derive(Parser)]
#[command(name = "deutschmeister", version, about = "Terminal German learning companion")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Start tab (lessons, train, vocab, cards, grammar, cheat, conversation)")]
    tab: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();

    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
        }
    }
    if let Some(tab) = cli.tab.as_deref().and_then(Screen::from_name) {
        app.screen = tab;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let _ = app.config.save();

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key, events.sender()),
            AppEvent::ChatReply(outcome) => app.handle_chat_reply(outcome),
            AppEvent::Tick => {}
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent, tx: mpsc::Sender<AppEvent>) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Tab / Shift-Tab cycle screens everywhere, even from text inputs.
    match key.code {
        KeyCode::Tab => {
            app.set_screen(adjacent_screen(app.screen, 1));
            return;
        }
        KeyCode::BackTab => {
            app.set_screen(adjacent_screen(app.screen, -1));
            return;
        }
        _ => {}
    }

    match app.screen {
        Screen::Lessons => handle_lessons_key(app, key),
        Screen::Train => handle_train_key(app, key),
        Screen::Vocab => handle_vocab_key(app, key),
        Screen::Cards => handle_cards_key(app, key),
        Screen::Grammar => handle_grammar_key(app, key),
        Screen::Cheat => handle_cheat_key(app, key),
        Screen::Conversation => handle_conversation_key(app, key, tx),
    }
}

fn adjacent_screen(current: Screen, delta: i32) -> Screen {
    let len = Screen::ALL.len() as i32;
    let index = Screen::ALL.iter().position(|s| *s == current).unwrap_or(0) as i32;
    Screen::ALL[((index + delta).rem_euclid(len)) as usize]
}

/// Number keys switch tabs on screens that don't claim digits for
/// themselves. Returns true when the key was consumed.
fn handle_tab_digit(app: &mut App, key: KeyEvent) -> bool {
    if let KeyCode::Char(ch) = key.code {
        if let Some(digit) = ch.to_digit(10) {
            let index = digit as usize;
            if (1..=Screen::ALL.len()).contains(&index) {
                app.set_screen(Screen::ALL[index - 1]);
                return true;
            }
        }
    }
    false
}

fn handle_lessons_key(app: &mut App, key: KeyEvent) {
    if app.lessons_ui.detail {
        match key.code {
            KeyCode::Esc => {
                app.lessons_ui.detail = false;
                app.lessons_ui.scroll = 0;
            }
            KeyCode::Char('j') | KeyCode::Down => app.lessons_ui.scroll += 1,
            KeyCode::Char('k') | KeyCode::Up => {
                app.lessons_ui.scroll = app.lessons_ui.scroll.saturating_sub(1)
            }
            KeyCode::Char('t') => jump_from_lesson(app, Screen::Train),
            KeyCode::Char('c') => jump_from_lesson(app, Screen::Cards),
            KeyCode::Char('v') => jump_from_lesson(app, Screen::Vocab),
            _ => {}
        }
        return;
    }

    if handle_tab_digit(app, key) {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app::LessonsState::item_count() - 1;
            app.lessons_ui.selected = (app.lessons_ui.selected + 1).min(max);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.lessons_ui.selected = app.lessons_ui.selected.saturating_sub(1);
        }
        KeyCode::Enter => match app.lessons_ui.selected_tree() {
            Some(tree_index) => {
                app.grammar_ui.tree = tree_index;
                app.grammar_ui.selected = 0;
                app.grammar_ui.detail = false;
                app.set_screen(Screen::Grammar);
            }
            None => {
                app.lessons_ui.detail = true;
                app.lessons_ui.scroll = 0;
            }
        },
        KeyCode::Char('t') => jump_from_lesson(app, Screen::Train),
        KeyCode::Char('c') => jump_from_lesson(app, Screen::Cards),
        KeyCode::Char('v') => jump_from_lesson(app, Screen::Vocab),
        _ => {}
    }
}

/// Jump to another screen with the selected foundation lesson preselected.
fn jump_from_lesson(app: &mut App, screen: Screen) {
    if app.lessons_ui.selected_tree().is_some() {
        return;
    }
    let lesson_id = content::grammar::FOUNDATION_LESSONS[app.lessons_ui.selected].lesson_id;
    app.lessons_ui.detail = false;
    app.navigate_with_lesson(screen, lesson_id);
}

fn handle_train_key(app: &mut App, key: KeyEvent) {
    match app.train.phase() {
        Phase::Selecting => match key.code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                app.train_menu_selected = (app.train_menu_selected + 1) % ExerciseKind::ALL.len();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.train_menu_selected = (app.train_menu_selected + ExerciseKind::ALL.len() - 1)
                    % ExerciseKind::ALL.len();
            }
            KeyCode::Char('f') => app.cycle_lesson_filter(true),
            KeyCode::Char('F') => app.cycle_lesson_filter(false),
            KeyCode::Char(ch @ '1'..='4') => {
                let kind = ExerciseKind::ALL[ch as usize - '1' as usize];
                start_run(app, kind);
            }
            KeyCode::Enter => {
                let kind = ExerciseKind::ALL[app.train_menu_selected];
                start_run(app, kind);
            }
            KeyCode::Char(ch @ '5'..='7') => {
                // Digits past the type list still reach the tab bar.
                let index = ch as usize - '0' as usize;
                app.set_screen(Screen::ALL[index - 1]);
            }
            _ => {}
        },
        Phase::Empty => match key.code {
            KeyCode::Char('f') => app.cycle_lesson_filter(true),
            KeyCode::Char('F') => app.cycle_lesson_filter(false),
            KeyCode::Esc => app.train.reset(),
            _ => {}
        },
        Phase::InProgress => {
            let is_translation = app.train.kind() == Some(ExerciseKind::Translation);
            if is_translation {
                match key.code {
                    KeyCode::Esc => {
                        app.train.reset();
                        app.answer_input.clear();
                    }
                    KeyCode::Enter => {
                        app.train.grade();
                    }
                    _ => {
                        app.answer_input.handle(key);
                        app.train.set_answer(app.answer_input.value());
                    }
                }
            } else {
                match key.code {
                    KeyCode::Esc => app.train.reset(),
                    KeyCode::Char(ch @ '1'..='4') => {
                        app.train.select_option(ch as usize - '1' as usize);
                    }
                    KeyCode::Char('j') | KeyCode::Down => move_option(app, 1),
                    KeyCode::Char('k') | KeyCode::Up => move_option(app, -1),
                    KeyCode::Enter => {
                        app.train.grade();
                    }
                    _ => {}
                }
            }
        }
        Phase::Graded => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.train.advance();
                app.answer_input.clear();
            }
            KeyCode::Esc => {
                app.train.reset();
                app.answer_input.clear();
            }
            _ => {}
        },
        Phase::Completed => match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                app.train.reset();
                app.answer_input.clear();
            }
            _ => {}
        },
    }
}

fn start_run(app: &mut App, kind: ExerciseKind) {
    let filter = app.lesson_filter.clone();
    app.train.select_kind(kind, &filter);
    app.answer_input.clear();
}

/// Move the option highlight up or down, wrapping over the four options.
fn move_option(app: &mut App, delta: i32) {
    let Some(exercise) = app.train.current_exercise() else {
        return;
    };
    let Some(options) = exercise.options() else {
        return;
    };
    let current = app
        .train
        .selected()
        .and_then(|sel| options.iter().position(|o| *o == sel));
    let next = match current {
        None => 0,
        Some(i) => (i as i32 + delta).rem_euclid(options.len() as i32) as usize,
    };
    app.train.select_option(next);
}

fn handle_vocab_key(app: &mut App, key: KeyEvent) {
    if app.vocab_ui.search_active {
        match app.vocab_ui.search.handle(key) {
            InputResult::Submit | InputResult::Cancel => app.vocab_ui.search_active = false,
            InputResult::Continue => app.vocab_ui.selected = 0,
        }
        return;
    }

    if handle_tab_digit(app, key) {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('/') => app.vocab_ui.search_active = true,
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app.visible_vocab().len().saturating_sub(1);
            app.vocab_ui.selected = (app.vocab_ui.selected + 1).min(max);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.vocab_ui.selected = app.vocab_ui.selected.saturating_sub(1);
        }
        KeyCode::Char(']') => app.cycle_vocab_category(true),
        KeyCode::Char('[') => app.cycle_vocab_category(false),
        KeyCode::Char('f') => app.cycle_lesson_filter(true),
        KeyCode::Char('F') => app.cycle_lesson_filter(false),
        KeyCode::Char('s') | KeyCode::Char('*') => {
            if let Some(entry) = app.visible_vocab().get(app.vocab_ui.selected) {
                let id = entry.id;
                app.toggle_star(id);
            }
        }
        _ => {}
    }
}

fn handle_cards_key(app: &mut App, key: KeyEvent) {
    if handle_tab_digit(app, key) {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(' ') | KeyCode::Enter => app.cards.flip(),
        KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => app.cards.next(),
        KeyCode::Char('p') | KeyCode::Char('h') | KeyCode::Left => app.cards.prev(),
        KeyCode::Char('s') => app.cards.shuffle(),
        KeyCode::Char('*') => {
            if let Some(card) = app.cards.current() {
                let id = card.id;
                app.toggle_star(id);
            }
        }
        KeyCode::Char('f') => app.cycle_lesson_filter(true),
        KeyCode::Char('F') => app.cycle_lesson_filter(false),
        _ => {}
    }
}

fn handle_grammar_key(app: &mut App, key: KeyEvent) {
    if app.grammar_ui.detail {
        match key.code {
            KeyCode::Esc => {
                app.grammar_ui.detail = false;
                app.grammar_ui.scroll = 0;
            }
            KeyCode::Char('j') | KeyCode::Down => app.grammar_ui.scroll += 1,
            KeyCode::Char('k') | KeyCode::Up => {
                app.grammar_ui.scroll = app.grammar_ui.scroll.saturating_sub(1)
            }
            _ => {}
        }
        return;
    }

    if handle_tab_digit(app, key) {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app.grammar_ui.topic_count().saturating_sub(1);
            app.grammar_ui.selected = (app.grammar_ui.selected + 1).min(max);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.grammar_ui.selected = app.grammar_ui.selected.saturating_sub(1);
        }
        KeyCode::Char('[') | KeyCode::Char(']') | KeyCode::Char('t') => {
            app.grammar_ui.tree = (app.grammar_ui.tree + 1) % content::grammar::TREES.len();
            app.grammar_ui.selected = 0;
            app.grammar_ui.scroll = 0;
        }
        KeyCode::Enter => {
            if app.grammar_ui.selected_topic().is_some() {
                app.grammar_ui.detail = true;
                app.grammar_ui.scroll = 0;
            }
        }
        _ => {}
    }
}

fn handle_cheat_key(app: &mut App, key: KeyEvent) {
    if handle_tab_digit(app, key) {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.cheat_scroll += 1,
        KeyCode::Char('k') | KeyCode::Up => app.cheat_scroll = app.cheat_scroll.saturating_sub(1),
        _ => {}
    }
}

fn handle_conversation_key(app: &mut App, key: KeyEvent, tx: mpsc::Sender<AppEvent>) {
    if app.conversation_ui.input_active {
        match key.code {
            KeyCode::Esc => app.conversation_ui.input_active = false,
            KeyCode::Enter => app.send_chat_message(tx),
            _ => {
                app.conversation_ui.input.handle(key);
            }
        }
        return;
    }

    if handle_tab_digit(app, key) {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('i') | KeyCode::Enter => app.conversation_ui.input_active = true,
        KeyCode::Char('m') => {
            let next = match app.chat.mode {
                session::chat::ChatMode::Lesson => session::chat::ChatMode::Free,
                session::chat::ChatMode::Free => session::chat::ChatMode::Lesson,
            };
            app.chat.set_mode(next);
        }
        KeyCode::Char('.') => app.cycle_chat_lesson(true),
        KeyCode::Char(',') => app.cycle_chat_lesson(false),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area);
    frame.render_widget(
        TabBar::new(app.screen, app.identity_label(), app.theme),
        layout.header,
    );

    match app.screen {
        Screen::Lessons => render_lessons(frame, app, layout.main),
        Screen::Train => render_train(frame, app, layout.main),
        Screen::Vocab => render_vocab(frame, app, layout.main),
        Screen::Cards => render_cards(frame, app, layout.main),
        Screen::Grammar => render_grammar(frame, app, layout.main),
        Screen::Cheat => render_cheat(frame, app, layout.main),
        Screen::Conversation => render_conversation(frame, app, layout.main),
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        footer_hint(app),
        Style::default().fg(colors.muted()),
    )));
    frame.render_widget(footer, layout.footer);
}

fn footer_hint(app: &App) -> &'static str {
    match app.screen {
        Screen::Lessons => {
            if app.lessons_ui.detail {
                " [j/k] Scroll  [t] Train  [c] Cards  [v] Vocab  [ESC] Back"
            } else {
                " [j/k] Move  [Enter] Open  [t/c/v] Jump with lesson  [Tab] Next tab  [q] Quit"
            }
        }
        Screen::Train => match app.train.phase() {
            Phase::Selecting => " [j/k] Move  [1-4/Enter] Start  [f] Lesson filter  [Tab] Next tab",
            Phase::Empty => " No exercises here.  [f] Change lesson filter  [ESC] Back",
            Phase::InProgress => " [Enter] Check answer  [ESC] Back to selection",
            Phase::Graded => " [Enter] Next  [ESC] Back to selection",
            Phase::Completed => " [Enter] Try another exercise",
        },
        Screen::Vocab => {
            if app.vocab_ui.search_active {
                " Type to search  [Enter/ESC] Done"
            } else {
                " [/] Search  [[/]] Category  [f] Lesson  [j/k] Move  [s] Star  [Tab] Next tab"
            }
        }
        Screen::Cards => " [Space] Flip  [n/p] Next/Prev  [s] Shuffle  [*] Star  [f] Lesson filter",
        Screen::Grammar => {
            if app.grammar_ui.detail {
                " [j/k] Scroll  [ESC] Back"
            } else {
                " [j/k] Move  [Enter] Open  [t] Switch tree  [Tab] Next tab"
            }
        }
        Screen::Cheat => " [j/k] Scroll  [Tab] Next tab  [q] Quit",
        Screen::Conversation => {
            if app.conversation_ui.input_active {
                " [Enter] Send  [ESC] Browse keys  [Tab] Next tab"
            } else {
                " [i] Type  [m] Mode  [,/.] Lesson  [Tab] Next tab  [q] Quit"
            }
        }
    }
}

fn render_lessons(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    if app.lessons_ui.detail {
        if let Some(lesson) = content::grammar::FOUNDATION_LESSONS.get(app.lessons_ui.selected) {
            frame.render_widget(
                LessonDetail { lesson, scroll: app.lessons_ui.scroll, theme: app.theme },
                area,
            );
            return;
        }
    }
    frame.render_widget(
        LessonBrowser { selected: app.lessons_ui.selected, theme: app.theme },
        area,
    );
}

fn render_train(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;
    match app.train.phase() {
        Phase::Selecting => {
            frame.render_widget(
                TypeMenu {
                    selected: app.train_menu_selected,
                    counts: app.train_counts(),
                    filter_label: app.lesson_filter_label(),
                    theme: app.theme,
                },
                area,
            );
        }
        Phase::Empty => {
            let centered = ui::layout::centered_rect(60, 40, area);
            let block = Block::bordered()
                .title(" No exercises found ")
                .border_style(Style::default().fg(colors.warning()))
                .style(Style::default().bg(colors.bg()));
            let inner = block.inner(centered);
            block.render(centered, frame.buffer_mut());
            let msg = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Try a different lesson or switch back to All Lessons.",
                    Style::default().fg(colors.fg()),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("Current filter: {}", app.lesson_filter_label()),
                    Style::default().fg(colors.warning()),
                )),
            ])
            .alignment(ratatui::layout::Alignment::Center);
            msg.render(inner, frame.buffer_mut());
        }
        Phase::InProgress | Phase::Graded => {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(3),
                    Constraint::Min(10),
                ])
                .split(area);

            let position = Paragraph::new(Line::from(Span::styled(
                format!(
                    " Question {} of {}   Score {}/{}",
                    app.train.position() + 1,
                    app.train.len(),
                    app.train.score().correct,
                    app.train.score().total,
                ),
                Style::default().fg(colors.muted()).add_modifier(Modifier::BOLD),
            )));
            frame.render_widget(position, layout[0]);

            let ratio = (app.train.position() + 1) as f64 / app.train.len().max(1) as f64;
            frame.render_widget(ProgressBar::new("Progress", ratio, app.theme), layout[1]);

            frame.render_widget(
                ExerciseCard {
                    session: &app.train,
                    answer_input: &app.answer_input,
                    theme: app.theme,
                },
                layout[2],
            );
        }
        Phase::Completed => {
            let centered = ui::layout::centered_rect(50, 60, area);
            frame.render_widget(RunSummary { session: &app.train, theme: app.theme }, centered);
        }
    }
}

fn render_vocab(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let entries = app.visible_vocab();
    let category =
        content::vocabulary::CATEGORIES[app.vocab_ui.category.min(content::vocabulary::CATEGORIES.len() - 1)];
    frame.render_widget(
        VocabList {
            entries: &entries,
            selected: app.vocab_ui.selected.min(entries.len().saturating_sub(1)),
            starred: &app.starred,
            search: &app.vocab_ui.search,
            search_active: app.vocab_ui.search_active,
            category_label: category.label,
            filter_label: app.lesson_filter_label(),
            theme: app.theme,
        },
        area,
    );
}

fn render_cards(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let centered = ui::layout::centered_rect(70, 70, area);
    frame.render_widget(
        FlashcardView {
            deck: &app.cards,
            starred: &app.starred,
            filter_label: app.lesson_filter_label(),
            theme: app.theme,
        },
        centered,
    );
}

fn render_grammar(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let tree = app.grammar_ui.tree_data();
    let wide = ui::layout::LayoutTier::from_area(area).show_sidebar();

    if wide {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        frame.render_widget(
            TreeTopicList { tree, selected: app.grammar_ui.selected, theme: app.theme },
            split[0],
        );
        if let Some((_, topic)) = app.grammar_ui.selected_topic() {
            frame.render_widget(
                TopicDetail { topic, scroll: app.grammar_ui.scroll, theme: app.theme },
                split[1],
            );
        }
    } else if app.grammar_ui.detail {
        if let Some((_, topic)) = app.grammar_ui.selected_topic() {
            frame.render_widget(
                TopicDetail { topic, scroll: app.grammar_ui.scroll, theme: app.theme },
                area,
            );
        }
    } else {
        frame.render_widget(
            TreeTopicList { tree, selected: app.grammar_ui.selected, theme: app.theme },
            area,
        );
    }
}

fn render_cheat(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    frame.render_widget(CheatSheet { scroll: app.cheat_scroll, theme: app.theme }, area);
}

fn render_conversation(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    frame.render_widget(
        ChatPanel {
            chat: &app.chat,
            input: &app.conversation_ui.input,
            input_active: app.conversation_ui.input_active,
            api_base_missing: app.chat_api_base.is_empty(),
            theme: app.theme,
        },
        area,
    );
}
