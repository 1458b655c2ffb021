//! Root view: header, editor, side panel, footer and toast stack

use crate::app::App;
use crate::panels;
use crate::theme::UiTheme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use versevibe_core::keymap::Action;
use versevibe_core::stats;
use versevibe_core::toast::Toast;
use versevibe_core::types::Panel;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const TOAST_WIDTH: u16 = 44;

/// Spinner glyph for a tick count
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

pub fn render(frame: &mut Frame, app: &App) {
    let state = app.controller().state();
    let ui = UiTheme::new(state.theme(), state.settings());
    let area = frame.area();

    frame.render_widget(Block::default().style(ui.base()), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    render_header(frame, rows[0], app, &ui);
    render_editor(frame, columns[0], app, &ui);
    panels::render(frame, columns[1], app, &ui);
    render_footer(frame, rows[2], app, &ui);
    render_toasts(frame, area, app.controller().toasts().visible(), &ui);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, ui: &UiTheme) {
    let state = app.controller().state();
    let mut spans = vec![
        Span::styled(" VerseVibe ", ui.accent()),
        Span::styled("AI-Powered Manuscript Analysis", ui.muted()),
    ];

    if state.loading() {
        spans.push(Span::styled(
            format!("   {} Analyzing…", spinner_frame(app.spinner())),
            ui.accent(),
        ));
    } else if let Some(label) = state.result().and_then(|r| r.sentiment_label()) {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(format!(" {} ", label), ui.badge()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_editor(frame: &mut Frame, area: Rect, app: &App, ui: &UiTheme) {
    let state = app.controller().state();
    let settings = state.settings();
    let focused = state.panel() == Panel::Analysis;
    let editor = app.editor();
    let (line, column) = editor.line_and_column();

    let block = Block::default()
        .title(format!(
            " Manuscript · {} · Ln {}, Col {} ",
            settings.font_size_label(),
            line + 1,
            column + 1
        ))
        .borders(Borders::ALL)
        .border_style(ui.border(focused));
    let inner = block.inner(area);

    let wrap_width = settings.word_wrap.then_some(inner.width.max(1) as usize);
    let layout = editor.layout(wrap_width);
    let (row, column) = layout.cursor;
    let visible = inner.height.max(1) as usize;
    let scroll = row.saturating_sub(visible - 1);

    let paragraph = if editor.text().is_empty() {
        Paragraph::new(Span::styled("Pour your words here…", ui.muted()))
    } else {
        let rows: Vec<Line> = layout
            .rows
            .iter()
            .map(|range| Line::raw(&editor.text()[range.clone()]))
            .collect();
        Paragraph::new(rows).style(ui.editor(settings))
    };
    frame.render_widget(paragraph.block(block).scroll((scroll as u16, 0)), area);

    if inner.width > 0 && inner.height > 0 {
        let x = inner.x + column.min(inner.width as usize - 1) as u16;
        let y = inner.y + (row - scroll).min(inner.height as usize - 1) as u16;
        frame.set_cursor_position((x, y));
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, ui: &UiTheme) {
    let text = app.controller().state().text();
    let stats_line = format!(
        " {} words · {} chars · {}",
        stats::word_count(text),
        stats::char_count(text),
        stats::reading_label(text)
    );

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    frame.render_widget(Paragraph::new(stats_line).style(ui.muted()), halves[0]);
    frame.render_widget(
        Paragraph::new(format!(
            "{} analyze · F1-F3 panels · Ctrl+L clear · Ctrl+Q quit ",
            analyze_hint(app)
        ))
        .style(ui.muted())
            .alignment(Alignment::Right),
        halves[1],
    );
}

/// Shortcuts bound to analyze, e.g. `Cmd+Enter/Ctrl+Enter`
fn analyze_hint(app: &App) -> String {
    app.controller()
        .keymap()
        .chords_for(Action::Analyze)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

fn render_toasts<'a>(
    frame: &mut Frame,
    area: Rect,
    toasts: impl Iterator<Item = &'a Toast>,
    ui: &UiTheme,
) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;

    for (i, toast) in toasts.enumerate() {
        let y = area.y + 1 + (i as u16) * 3;
        if y + 3 > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, 3);
        let style = ui.toast(toast.severity());
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(toast.message())
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style)),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;
    use versevibe_core::config::ServiceConfig;
    use versevibe_core::service::HttpBackend;
    use versevibe_core::workflow::{Command, WorkflowController};

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let backend = HttpBackend::new(ServiceConfig::default()).unwrap();
        App::new(WorkflowController::new(Arc::new(backend)))
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER.len()));
    }

    #[tokio::test]
    async fn test_empty_workspace_renders() {
        let app = app();
        let text = screen(&app, 120, 30);
        assert!(text.contains("VerseVibe"));
        assert!(text.contains("Start writing…"));
        assert!(text.contains("Sentiment Analysis"));
    }

    #[tokio::test]
    async fn test_toast_is_drawn() {
        let mut app = app();
        app.controller_mut().dispatch(Command::Analyze);
        let text = screen(&app, 120, 30);
        assert!(text.contains("Please write something first"));
    }

    #[tokio::test]
    async fn test_footer_lists_analyze_shortcuts() {
        let app = app();
        assert_eq!(analyze_hint(&app), "Cmd+Enter/Ctrl+Enter");
        let text = screen(&app, 200, 30);
        assert!(text.contains("Cmd+Enter/Ctrl+Enter analyze"));
    }

    #[tokio::test]
    async fn test_wrapped_text_renders_on_separate_rows() {
        let mut app = app();
        for c in "word ".repeat(40).chars() {
            app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let text = screen(&app, 60, 20);
        let rows_with_words = text.lines().filter(|row| row.contains("word word")).count();
        assert!(rows_with_words > 1, "{text}");
    }

    #[tokio::test]
    async fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        for code in [KeyCode::Char('a'), KeyCode::Enter, KeyCode::Char('b'), KeyCode::Enter] {
            app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
        }
        assert_eq!(app.editor().text(), "a\nb\n");
        screen(&app, 8, 4);
        screen(&app, 30, 6);
    }
}
