//! Side panels: analysis, history and settings

use crate::app::App;
use crate::theme::UiTheme;
use crate::views::spinner_frame;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use versevibe_core::types::{AnalysisResult, HistoryEntry, Panel};
use versevibe_core::workflow::WorkspaceState;

/// Longest content preview shown per history entry
const PREVIEW_CHARS: usize = 60;

pub fn render(frame: &mut Frame, area: Rect, app: &App, ui: &UiTheme) {
    let state = app.controller().state();
    let panel = state.panel();

    let block = Block::default()
        .title(Span::styled(format!(" {} ", panel.title()), ui.accent()))
        .borders(Borders::ALL)
        .border_style(ui.border(panel != Panel::Analysis));

    let lines = match panel {
        Panel::Analysis => analysis_lines(state, app.spinner(), ui),
        Panel::History => history_lines(state, app.spinner(), ui),
        Panel::Settings => settings_lines(state, ui),
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn analysis_lines(state: &WorkspaceState, tick: usize, ui: &UiTheme) -> Vec<Line<'static>> {
    if state.loading() {
        return vec![Line::from(Span::styled(
            format!("{} Reading your manuscript…", spinner_frame(tick)),
            ui.accent(),
        ))];
    }

    let Some(result) = state.result() else {
        return vec![
            Line::from(Span::styled("Awaiting your words", ui.text())),
            Line::from(Span::styled(
                "Write something and press Ctrl+Enter to analyze.",
                ui.muted(),
            )),
        ];
    };

    result_lines(result, ui)
}

fn result_lines(result: &AnalysisResult, ui: &UiTheme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(label) = result.sentiment_label() {
        lines.push(Line::from(vec![
            Span::styled("Mood ", ui.muted()),
            Span::styled(format!(" {} ", label), ui.badge()),
        ]));
        lines.push(Line::default());
    }

    let sections = [
        ("Suggestions", result.suggestions.as_deref()),
        ("Pacing", result.pacing.as_deref()),
        ("Word Choice", result.word_choice_notes()),
        ("Tone", result.tone_notes()),
    ];
    for (heading, body) in sections {
        let Some(body) = body.filter(|b| !b.trim().is_empty()) else {
            continue;
        };
        lines.push(Line::from(Span::styled(heading, ui.accent())));
        lines.extend(
            body.lines()
                .map(|line| Line::from(Span::styled(line.to_string(), ui.text()))),
        );
        lines.push(Line::default());
    }
    lines
}

fn history_lines(state: &WorkspaceState, tick: usize, ui: &UiTheme) -> Vec<Line<'static>> {
    if state.history_loading() {
        return vec![Line::from(Span::styled(
            format!("{} Loading history…", spinner_frame(tick)),
            ui.muted(),
        ))];
    }
    if state.history().is_empty() {
        return vec![Line::from(Span::styled("No manuscripts yet", ui.muted()))];
    }

    let mut lines = Vec::new();
    for (i, entry) in state.history().iter().enumerate() {
        let key = if i < 9 {
            format!("{} ", i + 1)
        } else {
            "  ".to_string()
        };
        lines.push(Line::from(vec![
            Span::styled(key, ui.accent()),
            Span::styled(entry.display_title().to_string(), ui.text()),
            Span::styled(format!("  {}", entry.created_label()), ui.muted()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", preview(entry)),
            ui.muted(),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Press 1-9 to open", ui.muted())));
    lines
}

/// First line of the content, truncated
fn preview(entry: &HistoryEntry) -> String {
    let first = entry.content.lines().next().unwrap_or_default();
    if first.chars().count() > PREVIEW_CHARS {
        let cut: String = first.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut)
    } else {
        first.to_string()
    }
}

fn settings_lines(state: &WorkspaceState, ui: &UiTheme) -> Vec<Line<'static>> {
    let settings = state.settings();
    let on_off = |flag: bool| if flag { "On" } else { "Off" };
    let rows = [
        ("+/-", "Font size", settings.font_size_label()),
        ("f", "Font family", settings.font_family.display_name().to_string()),
        ("w", "Word wrap", on_off(settings.word_wrap).to_string()),
        ("a", "Auto-analyze", on_off(settings.auto_analyze).to_string()),
        (
            "m",
            "Color mode",
            if settings.color_mode.is_light() { "Light" } else { "Dark" }.to_string(),
        ),
    ];

    rows.into_iter()
        .map(|(key, label, value)| {
            Line::from(vec![
                Span::styled(format!("{:>4} ", key), ui.accent()),
                Span::styled(format!("{:<14}", label), ui.text()),
                Span::styled(value, ui.muted()),
            ])
        })
        .collect()
}
