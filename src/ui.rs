//! Terminal UI rendering for the todo TUI.
//!
//! Screen, top to bottom: title, add form, search field, filter selector,
//! summary counts, task list, status bar. The edit dialog is drawn on top
//! when a task is being edited.
//!
//! This module renders from RenderState (immutable snapshot) - it never
//! mutates application state.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::core::Filter;
use crate::render::{RenderState, TaskView};
use crate::tea::{InputKind, Mode};

// Color tokens (selection uses REVERSED modifier to adapt to terminal theme)
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;
const COLOR_SEPARATOR: Color = Color::Rgb(0x8D, 0x6E, 0x63);
const COLOR_TITLE: Color = Color::Rgb(0xFF, 0xE0, 0xB2);
const COLOR_HEADING: Color = Color::Rgb(0xFF, 0xCC, 0x80);

// Row tints: done rows are red-ish, open rows blue-ish
const COLOR_ROW_DONE: Color = Color::Rgb(0xFF, 0xCD, 0xD2);
const COLOR_ROW_OPEN: Color = Color::Rgb(0xB3, 0xE5, 0xFC);
const COLOR_ACTION_EDIT: Color = Color::Rgb(0xCE, 0x93, 0xD8);
const COLOR_ACTION_DELETE: Color = Color::Rgb(0xD3, 0x2F, 0x2F);

const APP_TITLE: &str = "📝 To-do App";
const LIST_HEADING: &str = "📌 Task List";

// Row layout: "[x] " + title + actions
const CHECKBOX_WIDTH: usize = 4;
const ACTIONS_WIDTH: usize = 6;

// Edit dialog size
const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 5;

// -----------------------------------------------------------------------------
// Context-sensitive keymap system
// -----------------------------------------------------------------------------

/// Context for determining which keybindings to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapContext {
    /// Normal list browsing. `selected_done` is None when nothing is selected.
    List { selected_done: Option<bool> },
    /// Typing a new task title
    NewTask,
    /// Typing a search query
    Search,
    /// Edit dialog open
    EditDialog,
}

impl KeymapContext {
    pub fn from_render_state(state: &RenderState) -> Self {
        match state.mode {
            Mode::Input(InputKind::NewTask) => KeymapContext::NewTask,
            Mode::Input(InputKind::Search) => KeymapContext::Search,
            Mode::Edit(_) => KeymapContext::EditDialog,
            Mode::List => KeymapContext::List {
                selected_done: state.selected_row().map(|r| r.is_done),
            },
        }
    }
}

/// A single keybinding entry for display.
struct Keybinding(&'static str, &'static str);

/// A group of related keybindings (separated by │).
struct KeybindingGroup(Vec<Keybinding>);

fn keybindings_for_context(ctx: KeymapContext) -> Vec<KeybindingGroup> {
    match ctx {
        KeymapContext::List { selected_done } => {
            let task_actions = match selected_done {
                Some(true) => vec![Keybinding("space", "undo"), Keybinding("d", "delete")],
                Some(false) => vec![
                    Keybinding("space", "done"),
                    Keybinding("e", "edit"),
                    Keybinding("d", "delete"),
                ],
                None => vec![],
            };

            vec![
                KeybindingGroup(vec![Keybinding("a", "add"), Keybinding("/", "search")]),
                KeybindingGroup(task_actions),
                KeybindingGroup(vec![Keybinding("f", "filter"), Keybinding("1-3", "pick")]),
                KeybindingGroup(vec![Keybinding("q", "quit")]),
            ]
        }
        KeymapContext::NewTask => vec![KeybindingGroup(vec![
            Keybinding("Enter", "add"),
            Keybinding("Esc", "cancel"),
        ])],
        KeymapContext::Search => vec![KeybindingGroup(vec![
            Keybinding("Enter", "keep"),
            Keybinding("Esc", "clear"),
        ])],
        KeymapContext::EditDialog => vec![KeybindingGroup(vec![
            Keybinding("Enter", "save"),
            Keybinding("Esc", "cancel"),
        ])],
    }
}

/// Main render function - entry point for all UI drawing.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    render_main_layout(frame, state);

    if let Mode::Edit(_) = state.mode {
        render_edit_dialog(frame, state, frame.area());
    }
}

fn render_main_layout(frame: &mut Frame, state: &RenderState) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // add form
        Constraint::Length(1), // search
        Constraint::Length(1), // filter selector
        Constraint::Length(1), // summary
        Constraint::Length(1), // heading
        Constraint::Length(1), // divider
        Constraint::Fill(1),   // rows
        Constraint::Length(1), // status bar
    ])
    .split(frame.area());

    frame.render_widget(
        Paragraph::new(Span::styled(
            APP_TITLE,
            Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(add_form_line(state)), chunks[1]);
    frame.render_widget(Paragraph::new(search_line(state)), chunks[2]);
    frame.render_widget(
        Paragraph::new(filter_selector_line(state.filter)).alignment(Alignment::Center),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(summary_text(state)).alignment(Alignment::Center),
        chunks[4],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            LIST_HEADING,
            Style::default()
                .fg(COLOR_HEADING)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[5],
    );
    render_separator(frame, chunks[6]);
    render_rows(frame, state, chunks[7]);
    render_statusbar(frame, state, chunks[8]);
}

fn cursor_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::SLOW_BLINK)
}

fn add_form_line(state: &RenderState) -> Line<'static> {
    let label_style = Style::default().fg(Color::Reset);
    match state.mode {
        Mode::Input(InputKind::NewTask) => Line::from(vec![
            Span::styled(format!("{}: ", InputKind::NewTask.label()), label_style),
            Span::styled(state.input_buffer.clone(), Style::default().fg(Color::White)),
            Span::styled("_", cursor_style()),
        ]),
        _ => Line::from(vec![
            Span::styled("a ", Style::default().fg(COLOR_TEXT_DIMMED)),
            Span::styled("add a task...", Style::default().fg(COLOR_TEXT_MUTED)),
        ]),
    }
}

fn search_line(state: &RenderState) -> Line<'static> {
    let searching = state.mode == Mode::Input(InputKind::Search);
    if !searching && state.search.is_empty() {
        return Line::from(vec![
            Span::styled("/ ", Style::default().fg(COLOR_TEXT_DIMMED)),
            Span::styled("search tasks...", Style::default().fg(COLOR_TEXT_MUTED)),
        ]);
    }

    let mut spans = vec![
        Span::styled(
            format!("{}: ", InputKind::Search.label()),
            Style::default().fg(Color::Reset),
        ),
        Span::styled(state.search.clone(), Style::default().fg(Color::White)),
    ];
    if searching {
        spans.push(Span::styled("_", cursor_style()));
    }
    Line::from(spans)
}

fn filter_selector_line(active: Filter) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, filter) in Filter::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *filter == active {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT_DIMMED)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }
    Line::from(spans)
}

fn summary_text(state: &RenderState) -> String {
    format!(
        "Completed: {}, Active: {}",
        state.summary.completed, state.summary.active
    )
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let solid = "─".repeat(area.width as usize);
    let line = Line::from(Span::styled(solid, Style::default().fg(COLOR_SEPARATOR)));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the task rows with scrolloff navigation.
fn render_rows(frame: &mut Frame, state: &RenderState, area: Rect) {
    if state.rows.is_empty() {
        let hint = if state.summary.total() == 0 {
            "No tasks yet. Press 'a' to add one."
        } else {
            "No tasks match."
        };
        let msg = Line::from(Span::styled(hint, Style::default().fg(COLOR_TEXT_DIMMED)));
        frame.render_widget(Paragraph::new(msg), area);
        return;
    }

    let content_height = area.height as usize;

    // Scrolloff implementation: keep selection centered
    let center = content_height / 2;
    let start = state.selected.saturating_sub(center);
    let end = (start + content_height).min(state.rows.len());
    let start = end.saturating_sub(content_height);

    let lines: Vec<Line> = state
        .rows
        .iter()
        .enumerate()
        .skip(start)
        .take(content_height)
        .map(|(idx, row)| render_task_row(row, idx == state.selected, area.width))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render a single task row.
/// Columns: CHECKBOX (4ch) | TITLE (flex) | ACTIONS (6ch)
fn render_task_row(row: &TaskView, is_selected: bool, width: u16) -> Line<'static> {
    let tint = if row.is_done {
        COLOR_ROW_DONE
    } else {
        COLOR_ROW_OPEN
    };
    let checkbox = if row.is_done { "[x] " } else { "[ ] " };

    let title_width = (width as usize).saturating_sub(CHECKBOX_WIDTH + ACTIONS_WIDTH);
    let title = truncate(&row.title, title_width);
    let title_padded = format!("{:<width$}", title, width = title_width);

    // Edit is hidden for done tasks
    let edit = if row.can_edit() { " ✎ " } else { "   " };
    let delete = " ✕ ";

    let (checkbox_style, title_style, edit_style, delete_style) = if is_selected {
        let selected = Style::default().add_modifier(Modifier::REVERSED);
        (selected, selected, selected, selected)
    } else if row.is_done {
        (
            Style::default().fg(tint),
            Style::default()
                .fg(COLOR_TEXT_MUTED)
                .add_modifier(Modifier::CROSSED_OUT),
            Style::default(),
            Style::default().fg(COLOR_ACTION_DELETE),
        )
    } else {
        (
            Style::default().fg(tint),
            Style::default(),
            Style::default().fg(COLOR_ACTION_EDIT),
            Style::default().fg(COLOR_ACTION_DELETE),
        )
    };

    // Selected done rows keep the strike-through
    let title_style = if is_selected && row.is_done {
        title_style.add_modifier(Modifier::CROSSED_OUT)
    } else {
        title_style
    };

    Line::from(vec![
        Span::styled(checkbox, checkbox_style),
        Span::styled(title_padded, title_style),
        Span::styled(edit, edit_style),
        Span::styled(delete, delete_style),
    ])
}

/// Render the bottom line: input hints while typing, otherwise the keymap.
fn render_statusbar(frame: &mut Frame, state: &RenderState, area: Rect) {
    frame.render_widget(Paragraph::new(render_keymap_line(state)), area);
}

/// When show_keymap is false: Shows just "?" (grayed out)
/// When show_keymap is true: Shows "? │ <full keymap legend>" with bright "?"
/// Input modes always show their hints.
fn render_keymap_line(state: &RenderState) -> Line<'static> {
    let ctx = KeymapContext::from_render_state(state);
    let groups = keybindings_for_context(ctx);

    let key_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let desc_style = Style::default().fg(COLOR_TEXT_MUTED);
    let sep_style = Style::default().fg(COLOR_TEXT_MUTED);

    let expanded = state.show_keymap || !matches!(ctx, KeymapContext::List { .. });

    let mut spans: Vec<Span> = Vec::new();
    let help_style = if state.show_keymap {
        Style::default()
    } else {
        Style::default().fg(COLOR_TEXT_MUTED)
    };
    spans.push(Span::styled("?", help_style));

    if expanded {
        for group in groups.iter() {
            if group.0.is_empty() {
                continue;
            }
            spans.push(Span::styled(" │ ", sep_style));
            for (key_idx, keybinding) in group.0.iter().enumerate() {
                if key_idx > 0 {
                    spans.push(Span::styled(" • ", sep_style));
                }
                spans.push(Span::styled(keybinding.0, key_style));
                spans.push(Span::styled(format!(" {}", keybinding.1), desc_style));
            }
        }
    }

    Line::from(spans)
}

/// Render the modal edit dialog centered over the screen.
fn render_edit_dialog(frame: &mut Frame, state: &RenderState, area: Rect) {
    let dialog = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, dialog);

    let block = Block::bordered()
        .title(" Edit Task ")
        .border_style(Style::default().fg(COLOR_SEPARATOR));

    let field_width = (dialog.width as usize).saturating_sub(2 + 1);
    let lines = vec![
        Line::from(Span::styled(
            "Change task text",
            Style::default().fg(COLOR_TEXT_DIMMED),
        )),
        Line::from(vec![
            Span::styled(
                truncate_left(&state.edit_buffer, field_width),
                Style::default().fg(Color::White),
            ),
            Span::styled("_", cursor_style()),
        ]),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(COLOR_TEXT_DIMMED)),
            Span::styled(" save • ", Style::default().fg(COLOR_TEXT_MUTED)),
            Span::styled("Esc", Style::default().fg(COLOR_TEXT_DIMMED)),
            Span::styled(" cancel", Style::default().fg(COLOR_TEXT_MUTED)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}

// Helper functions

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}~", truncated)
    }
}

/// Keep the tail of `s` so the cursor end of a long field stays visible.
fn truncate_left(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        s.chars().skip(count - max_len).collect()
    }
}
