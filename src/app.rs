use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::time;

use crate::{
    animation::Fade,
    container::{DigitQueue, DigitStack, OpResult, Structure},
    history::OpLog,
    themes::{Theme, ThemeName},
    ui::ui,
};

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Running,
    Quitting,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Stack,
    Queue,
}

impl Mode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stack" => Some(Self::Stack),
            "queue" => Some(Self::Queue),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
        }
    }

    pub fn all_modes() -> &'static [Mode] {
        &[Mode::Stack, Mode::Queue]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Stack => "Stack",
            Self::Queue => "Queue",
        }
    }

    pub fn insert_label(&self) -> &'static str {
        match self {
            Self::Stack => "Push",
            Self::Queue => "Enqueue",
        }
    }

    pub fn remove_label(&self) -> &'static str {
        match self {
            Self::Stack => "Pop",
            Self::Queue => "Dequeue",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Stack => Self::Queue,
            Self::Queue => Self::Stack,
        }
    }
}

/// One on-screen box. Removed cells linger with `leaving` set until their
/// fade-out completes; the container has already forgotten them.
#[derive(Debug, Clone)]
pub struct CellVisual {
    pub digit: u8,
    pub fade: Fade,
    pub leaving: bool,
    /// Whether the cell still carried the fresh highlight when it was
    /// removed, so it fades out in the right color.
    pub was_fresh: bool,
}

pub struct App {
    pub state: AppState,
    pub mode: Mode,
    pub structure: Structure,
    pub cells: Vec<CellVisual>,
    pub op_log: OpLog,
    pub last_inserted: Option<u8>,
    pub update_interval: Duration,
    pub debug: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub theme_name: ThemeName,
    pub force_redraw: bool,
    pub insert_button_area: Option<Rect>,
    pub remove_button_area: Option<Rect>,
}

impl App {
    pub fn new(mode: Mode, update_interval: Duration, debug: bool, theme_name: ThemeName) -> Self {
        let structure = match mode {
            Mode::Stack => Structure::Stack(DigitStack::new()),
            Mode::Queue => Structure::Queue(DigitQueue::new()),
        };

        Self {
            state: AppState::Running,
            mode,
            structure,
            cells: Vec::new(),
            op_log: OpLog::default(),
            last_inserted: None,
            update_interval,
            debug,
            show_help: false,
            theme: Theme::new(theme_name),
            theme_name,
            force_redraw: false,
            insert_button_area: None,
            remove_button_area: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main application loop
        let result = self.run_app(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            // Handle forced redraw (like Ctrl+L)
            if self.force_redraw {
                let size = terminal.size()?;
                terminal.resize(Rect::new(0, 0, size.width, size.height))?;
                terminal.clear()?;
                self.force_redraw = false;
            }

            // Draw the UI
            terminal.draw(|f| ui(f, self))?;

            // Handle timeout for animation ticks
            let timeout = self.update_interval.saturating_sub(last_tick.elapsed());

            // Check for events
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        self.handle_key_event(key.code, key.modifiers);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_event(mouse);
                    }
                    Event::Resize(_, _) => {
                        // Terminal resize automatically triggers full redraw
                        let size = terminal.size()?;
                        terminal.resize(Rect::new(0, 0, size.width, size.height))?;
                    }
                    _ => {}
                }
            }

            // Advance animations on the tick
            if last_tick.elapsed() >= self.update_interval {
                self.advance_animations();
                last_tick = Instant::now();
            }

            // Check if we should quit
            if self.state == AppState::Quitting {
                break;
            }

            // Small delay to prevent busy waiting
            time::sleep(Duration::from_millis(5)).await;
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_code: KeyCode, modifiers: crossterm::event::KeyModifiers) {
        match key_code {
            KeyCode::Char('q') => {
                self.state = AppState::Quitting;
            }
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.state = AppState::Quitting;
                }
            }
            KeyCode::Char('h') | KeyCode::F(1) => {
                self.show_help = !self.show_help;
            }
            KeyCode::Char('a') | KeyCode::Enter => {
                self.request_insert();
            }
            KeyCode::Char('x') | KeyCode::Backspace => {
                self.request_remove();
            }
            KeyCode::Char('c') => {
                self.clear_all();
            }
            KeyCode::Char('m') => {
                self.switch_mode();
            }
            KeyCode::Char('t') => {
                self.cycle_theme();
            }
            KeyCode::Char('d') => {
                self.debug = !self.debug;
            }
            KeyCode::Char('\x0C') | KeyCode::Char('l')
                if modifiers.contains(crossterm::event::KeyModifiers::CONTROL) =>
            {
                // Ctrl+L - refresh/redraw screen (standard terminal convention)
                self.force_redraw = true;
            }
            _ => {
                // Other keys - no action needed
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if rect_contains(self.insert_button_area, mouse.column, mouse.row) {
            self.request_insert();
        } else if rect_contains(self.remove_button_area, mouse.column, mouse.row) {
            self.request_remove();
        }
    }

    /// User requested an insert (push/enqueue). The structure draws the
    /// digit itself; we only mirror the outcome visually.
    pub fn request_insert(&mut self) {
        let result = self.structure.insert(&mut rand::rng());

        if let OpResult::Inserted(digit) = result {
            self.cells.push(CellVisual {
                digit,
                fade: Fade::fade_in(),
                leaving: false,
                was_fresh: false,
            });
            self.last_inserted = Some(digit);
        }

        self.op_log.record(self.mode.insert_label(), result);
    }

    /// User requested a remove (pop/dequeue). The affected cell fades out
    /// in place instead of disappearing immediately.
    pub fn request_remove(&mut self) {
        let result = self.structure.remove();

        if let OpResult::Removed(digit) = result {
            let fresh_digit = self.last_inserted;
            let cell = match self.mode {
                // Stack removes the newest live cell, queue the oldest
                Mode::Stack => self.cells.iter_mut().rev().find(|c| !c.leaving),
                Mode::Queue => self.cells.iter_mut().find(|c| !c.leaving),
            };
            if let Some(cell) = cell {
                debug_assert_eq!(cell.digit, digit);
                cell.leaving = true;
                cell.was_fresh = fresh_digit == Some(digit);
                cell.fade = Fade::fade_out();
            }
            self.last_inserted = None;
        }

        self.op_log.record(self.mode.remove_label(), result);
    }

    pub fn clear_all(&mut self) {
        self.structure.clear();
        self.cells.clear();
        self.op_log.clear();
        self.last_inserted = None;
    }

    pub fn switch_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.structure = match self.mode {
            Mode::Stack => Structure::Stack(DigitStack::new()),
            Mode::Queue => Structure::Queue(DigitQueue::new()),
        };
        self.cells.clear();
        self.op_log.clear();
        self.last_inserted = None;
    }

    pub fn cycle_theme(&mut self) {
        self.theme_name = self.theme_name.next();
        self.theme = Theme::new(self.theme_name);
    }

    /// Drop cells whose fade-out has finished.
    pub fn advance_animations(&mut self) {
        self.cells.retain(|c| !(c.leaving && c.fade.is_complete()));
    }

    /// Number of cells still owned by the container (excludes fading-out
    /// leftovers).
    pub fn live_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.leaving).count()
    }
}

fn rect_contains(area: Option<Rect>, column: u16, row: u16) -> bool {
    match area {
        Some(r) => {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::CAPACITY;

    fn test_app(mode: Mode) -> App {
        App::new(mode, Duration::from_millis(33), false, ThemeName::Default)
    }

    #[test]
    fn test_insert_adds_cell_and_marks_fresh() {
        let mut app = test_app(Mode::Stack);

        app.request_insert();

        assert_eq!(app.structure.len(), 1);
        assert_eq!(app.cells.len(), 1);
        assert_eq!(app.last_inserted, Some(app.cells[0].digit));
        assert_eq!(app.structure.active_end(), app.last_inserted);
        assert_eq!(app.op_log.len(), 1);
    }

    #[test]
    fn test_insert_past_capacity_changes_nothing_but_logs() {
        let mut app = test_app(Mode::Queue);

        for _ in 0..CAPACITY {
            app.request_insert();
        }
        let digits_before = app.structure.digits();

        app.request_insert();

        assert_eq!(app.structure.digits(), digits_before);
        assert_eq!(app.cells.len(), CAPACITY);
        assert_eq!(app.op_log.len(), CAPACITY + 1);
        assert_eq!(
            app.op_log.entries().last().map(|r| r.outcome),
            Some(OpResult::Rejected)
        );
    }

    #[test]
    fn test_remove_keeps_cell_fading_until_complete() {
        let mut app = test_app(Mode::Stack);

        app.request_insert();
        app.request_remove();

        assert!(app.structure.is_empty());
        assert_eq!(app.cells.len(), 1);
        assert!(app.cells[0].leaving);
        assert_eq!(app.last_inserted, None);
        assert_eq!(app.live_cell_count(), 0);

        // Fade-out has not elapsed yet, so the cell survives a tick
        app.advance_animations();
        assert_eq!(app.cells.len(), 1);
    }

    #[test]
    fn test_remove_on_empty_is_logged_noop() {
        let mut app = test_app(Mode::Queue);

        app.request_remove();

        assert!(app.structure.is_empty());
        assert!(app.cells.is_empty());
        assert_eq!(
            app.op_log.entries().last().map(|r| r.outcome),
            Some(OpResult::Rejected)
        );
    }

    #[test]
    fn test_queue_remove_marks_oldest_cell() {
        let mut app = test_app(Mode::Queue);

        app.request_insert();
        app.request_insert();
        let head_digit = app.cells[0].digit;

        app.request_remove();

        assert!(app.cells[0].leaving);
        assert_eq!(app.cells[0].digit, head_digit);
        assert!(!app.cells[1].leaving);
    }

    #[test]
    fn test_stack_remove_marks_newest_cell() {
        let mut app = test_app(Mode::Stack);

        app.request_insert();
        app.request_insert();
        let top_digit = app.cells[1].digit;

        app.request_remove();

        assert!(!app.cells[0].leaving);
        assert!(app.cells[1].leaving);
        assert_eq!(app.cells[1].digit, top_digit);
    }

    #[test]
    fn test_switch_mode_resets_state() {
        let mut app = test_app(Mode::Stack);

        app.request_insert();
        app.switch_mode();

        assert_eq!(app.mode, Mode::Queue);
        assert!(matches!(app.structure, Structure::Queue(_)));
        assert!(app.structure.is_empty());
        assert!(app.cells.is_empty());
        assert!(app.op_log.is_empty());
    }

    #[test]
    fn test_button_hit_testing() {
        let mut app = test_app(Mode::Stack);
        app.insert_button_area = Some(Rect::new(10, 20, 14, 3));

        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 21,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        assert_eq!(app.structure.len(), 1);

        // Click outside both buttons does nothing
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        assert_eq!(app.structure.len(), 1);
    }
}
