use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    animation::blend,
    app::{App, CellVisual, Mode},
    container::CAPACITY,
    version,
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 14;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 6;

pub fn ui(f: &mut Frame, app: &mut App) {
    // Fill the whole frame with the theme background first
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        f.size(),
    );

    let constraints = if app.debug {
        vec![
            Constraint::Length(4), // Header
            Constraint::Min(10),   // Canvas
            Constraint::Length(5), // Buttons
            Constraint::Length(8), // Operation log
        ]
    } else {
        vec![
            Constraint::Length(4), // Header
            Constraint::Min(10),   // Canvas
            Constraint::Length(5), // Buttons
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.size());

    render_header(f, chunks[0], app);

    if app.show_help {
        render_help(f, chunks[1], app);
    } else {
        render_canvas(f, chunks[1], app);
    }

    render_buttons(f, chunks[2], app);

    if app.debug {
        render_op_log(f, chunks[3], app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut header_spans = vec![
        Span::styled(
            "Stack & Queue Visualizer",
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", version::get_version()),
            Style::default()
                .fg(theme.text_accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  —  {} {}/{}",
                app.mode.display_name(),
                app.structure.len(),
                CAPACITY
            ),
            Style::default().fg(theme.text_primary),
        ),
    ];

    // Report the element at the active end (stack top / queue tail)
    if let Some(digit) = app.structure.active_end() {
        let end_label = match app.mode {
            Mode::Stack => "top",
            Mode::Queue => "tail",
        };
        header_spans.push(Span::styled(
            format!("  {}: {}", end_label, digit),
            Style::default().fg(theme.text_secondary),
        ));
    }

    if app.structure.is_full() {
        header_spans.push(Span::styled(
            " [FULL]",
            Style::default()
                .fg(theme.outcome_rejected)
                .add_modifier(Modifier::BOLD),
        ));
    } else if app.structure.is_empty() {
        header_spans.push(Span::styled(
            " [EMPTY]",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let header_content = vec![
        Line::from(header_spans),
        Line::from(vec![Span::styled(
            format!(
                "Built: {} | Git: {}",
                version::get_build_time(),
                version::get_git_hash()
            ),
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::ITALIC),
        )]),
    ];

    let header = Paragraph::new(header_content)
        .style(Style::default().bg(theme.header_bg))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border_normal)),
        );

    f.render_widget(header, area);
}

fn render_canvas(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let title = match app.mode {
        Mode::Stack => "Stack (top first)",
        Mode::Queue => "Queue (head left)",
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_normal))
        .style(Style::default().bg(theme.background));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.mode {
        Mode::Stack => render_stack_cells(f, inner, app),
        Mode::Queue => render_queue_cells(f, inner, app),
    }
}

/// Bottom-anchored column, newest digit on top.
fn render_stack_cells(f: &mut Frame, area: Rect, app: &App) {
    let count = app.cells.len() as u16;
    if count == 0 {
        return;
    }

    let tower_height = count * CELL_HEIGHT;
    let top_y = area.y + area.height.saturating_sub(tower_height);
    let x = area.x + area.width.saturating_sub(CELL_WIDTH) / 2;

    // cells is oldest-first; display order is newest-first from the top
    for (display_index, cell) in app.cells.iter().rev().enumerate() {
        let y = top_y + display_index as u16 * CELL_HEIGHT;
        if y < area.y || y + CELL_HEIGHT > area.y + area.height {
            continue;
        }
        render_cell(f, Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT), cell, app);
    }
}

/// Centered row, head digit on the left.
fn render_queue_cells(f: &mut Frame, area: Rect, app: &App) {
    let count = app.cells.len() as u16;
    if count == 0 {
        return;
    }

    let row_width = count * CELL_WIDTH;
    let start_x = area.x + area.width.saturating_sub(row_width) / 2;
    let y = area.y + area.height.saturating_sub(CELL_HEIGHT) / 2;

    if y + CELL_HEIGHT > area.y + area.height {
        return;
    }

    for (display_index, cell) in app.cells.iter().enumerate() {
        let x = start_x + display_index as u16 * CELL_WIDTH;
        if x < area.x || x + CELL_WIDTH > area.x + area.width {
            continue;
        }
        render_cell(f, Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT), cell, app);
    }
}

fn render_cell(f: &mut Frame, area: Rect, cell: &CellVisual, app: &App) {
    let theme = &app.theme;

    // Fresh highlight follows the most recent insertion; fading-out cells
    // keep whatever highlight they had when removed
    let is_fresh = if cell.leaving {
        cell.was_fresh
    } else {
        app.last_inserted == Some(cell.digit)
    };

    let base_fill = if is_fresh {
        theme.cell_fresh
    } else {
        theme.cell_settled
    };

    let alpha = cell.fade.alpha();
    let fill = blend(theme.background, base_fill, alpha);
    let text = blend(theme.background, theme.cell_text, alpha);
    let border = blend(theme.background, theme.cell_border, alpha);

    let digit = Paragraph::new(cell.digit.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(text).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(fill)),
        );

    f.render_widget(digit, area);
}

fn render_buttons(f: &mut Frame, area: Rect, app: &mut App) {
    let total_width = BUTTON_WIDTH * 2 + BUTTON_GAP;
    let start_x = area.x + area.width.saturating_sub(total_width) / 2;

    let insert_area = Rect::new(start_x, area.y, BUTTON_WIDTH, BUTTON_HEIGHT);
    let remove_area = Rect::new(
        start_x + BUTTON_WIDTH + BUTTON_GAP,
        area.y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    );

    // Buttons that do not fit the footer are skipped entirely; rendering
    // outside the buffer panics, and a stale hitbox would dispatch clicks
    // for an invisible button
    let fits = |r: Rect| {
        r.x >= area.x
            && r.x + r.width <= area.x + area.width
            && r.y + r.height <= area.y + area.height
    };

    let row_fits = fits(insert_area) && fits(remove_area);
    app.insert_button_area = row_fits.then_some(insert_area);
    app.remove_button_area = row_fits.then_some(remove_area);

    let theme = &app.theme;
    let button_style = Style::default().fg(theme.button_fg).bg(theme.button_bg);
    let button_block = || {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.button_bg).bg(theme.button_bg))
    };

    if let Some(insert_area) = app.insert_button_area {
        let insert_button = Paragraph::new(app.mode.insert_label())
            .alignment(Alignment::Center)
            .style(button_style.add_modifier(Modifier::BOLD))
            .block(button_block());
        f.render_widget(insert_button, insert_area);
    }

    if let Some(remove_area) = app.remove_button_area {
        let remove_button = Paragraph::new(app.mode.remove_label())
            .alignment(Alignment::Center)
            .style(button_style.add_modifier(Modifier::BOLD))
            .block(button_block());
        f.render_widget(remove_button, remove_area);
    }

    // Key hints under the buttons
    if area.height > BUTTON_HEIGHT {
        let hint_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        let hints = Paragraph::new(format!(
            "a/Enter: {}  x/Backspace: {}  c: clear  m: mode  t: theme  d: log  h: help  q: quit",
            app.mode.insert_label().to_lowercase(),
            app.mode.remove_label().to_lowercase(),
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.text_secondary));
        f.render_widget(hints, hint_area);
    }
}

fn render_op_log(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let visible = area.height.saturating_sub(2) as usize;
    let total = app.op_log.len();
    let skip = total.saturating_sub(visible);

    let lines: Vec<Line> = app
        .op_log
        .entries()
        .skip(skip)
        .map(|record| {
            Line::from(vec![
                Span::styled(
                    format!("{}  ", record.timestamp()),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::styled(
                    record.describe(),
                    Style::default().fg(theme.get_outcome_color(&record.outcome)),
                ),
            ])
        })
        .collect();

    let title = format!(
        "Operation Log ({}/{}) - {} live cells",
        lines.len(),
        total,
        app.live_cell_count()
    );

    let log = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border_normal)),
        );

    f.render_widget(log, area);
}

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Stack & Queue Visualizer Help",
            Style::default()
                .fg(theme.text_accent)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Operations:",
            Style::default()
                .fg(theme.text_accent)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from("  a/Enter      - Insert a random digit (push/enqueue)"),
        Line::from("  x/Backspace  - Remove a digit (pop/dequeue)"),
        Line::from("  Mouse click  - Use the two buttons at the bottom"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Actions:",
            Style::default()
                .fg(theme.text_accent)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from("  m            - Switch between stack and queue (clears state)"),
        Line::from("  c            - Clear the structure and the operation log"),
        Line::from("  t            - Cycle color theme"),
        Line::from("  d            - Toggle the operation log panel"),
        Line::from("  Ctrl+L       - Refresh/redraw screen"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "General:",
            Style::default()
                .fg(theme.text_accent)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from("  h/F1         - Show/hide this help"),
        Line::from("  q/Esc        - Quit application"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Legend:",
            Style::default()
                .fg(theme.text_accent)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  ■", Style::default().fg(theme.cell_fresh)),
            Span::raw("  - Most recently inserted digit"),
        ]),
        Line::from(vec![
            Span::styled("  ■", Style::default().fg(theme.cell_settled)),
            Span::raw("  - Settled digit"),
        ]),
        Line::from(""),
        Line::from(
            "  Digits are distinct, drawn from 0-9; each structure holds at most 8.",
        ),
        Line::from("  Inserting into a full structure or removing from an empty one is"),
        Line::from("  silently ignored."),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .style(Style::default().fg(theme.text_primary).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border_normal)),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::ThemeName;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn test_app(mode: Mode) -> App {
        App::new(mode, Duration::from_millis(33), false, ThemeName::Default)
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
    }

    #[test]
    fn test_narrow_terminal_skips_buttons() {
        // Footer narrower than the two-button row: nothing may render
        // outside the buffer and no hitbox may be left behind
        let mut app = test_app(Mode::Stack);
        app.request_insert();

        draw(&mut app, 20, 24);

        assert_eq!(app.insert_button_area, None);
        assert_eq!(app.remove_button_area, None);
    }

    #[test]
    fn test_buttons_laid_out_within_footer() {
        let mut app = test_app(Mode::Queue);

        draw(&mut app, 80, 24);

        let insert = app.insert_button_area.expect("insert button laid out");
        let remove = app.remove_button_area.expect("remove button laid out");
        assert!(insert.x + insert.width <= 80);
        assert!(remove.x + remove.width <= 80);
        assert!(insert.x + insert.width <= remove.x);
    }

    #[test]
    fn test_op_log_panel_reports_live_cells() {
        let mut app = test_app(Mode::Stack);
        app.debug = true;
        app.request_insert();
        app.request_insert();
        app.request_remove();

        let terminal = draw(&mut app, 80, 30);

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("1 live cells"));
    }
}
