//! Ratatui backend implementation for QuestionnaireBackend trait.
//!
//! Provides a terminal UI with a progress bar, one question per screen and
//! keyboard navigation. All state lives in a `Navigator`; this module only
//! translates key presses into navigator operations and draws the result.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use questionnaire::{
    AnswerMap, Navigator, QuestionKind, QuestionSet, QuestionnaireBackend, QuestionnaireError,
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use thiserror::Error;

const PLACEHOLDER: &str = "Type your answer here...";

/// Error type for the Ratatui backend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User cancelled the questionnaire (e.g., pressed Esc).
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RatatuiError> for QuestionnaireError {
    fn from(err: RatatuiError) -> Self {
        match err {
            RatatuiError::Cancelled => QuestionnaireError::Cancelled,
            other => QuestionnaireError::backend(other),
        }
    }
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Magenta,
            secondary: Color::Blue,
            text: Color::White,
            highlight: Color::Yellow,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Ratatui-based TUI backend.
///
/// Presents questions one at a time with a progress bar and keyboard
/// navigation. Finishes once every question is answered.
#[derive(Debug, Clone)]
pub struct RatatuiBackend {
    /// Title shown at the top of the screen.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiBackend {
    /// Create a new Ratatui backend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Questionnaire".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the screen.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut WizardState,
    ) -> Result<Flow, RatatuiError> {
        loop {
            terminal.draw(|frame| {
                if state.complete {
                    draw_completion(frame, state);
                } else {
                    draw_ui(frame, state);
                }
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match state.handle_key(key) {
                    Flow::Continue => {}
                    flow => return Ok(flow),
                }
            }
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Finish,
    Cancel,
}

/// Everything the screen needs besides the navigator itself.
struct WizardState {
    navigator: Navigator,
    /// Cursor position in the draft, counted in chars.
    cursor: usize,
    /// Highlighted option of the current choice question.
    highlighted: usize,
    /// Whether the completion screen is shown.
    complete: bool,
    theme: Theme,
    title: String,
}

impl WizardState {
    fn new(questions: &QuestionSet, theme: Theme, title: String) -> Self {
        let mut state = Self {
            navigator: Navigator::new(questions.clone()),
            cursor: 0,
            highlighted: 0,
            complete: false,
            theme,
            title,
        };
        state.reset_widgets();
        state
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Flow::Cancel;
        }

        if self.complete {
            match key.code {
                KeyCode::Enter => return Flow::Finish,
                KeyCode::PageUp | KeyCode::Backspace => self.complete = false,
                _ => {}
            }
            return Flow::Continue;
        }

        match key.code {
            KeyCode::PageUp => {
                self.navigator.go_previous();
                self.reset_widgets();
            }
            KeyCode::PageDown => {
                self.navigator.go_next();
                self.reset_widgets();
            }
            _ if self.navigator.current_question().is_text() => self.handle_text_key(key),
            _ => self.handle_choice_key(key.code),
        }

        Flow::Continue
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let typing = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        match key.code {
            KeyCode::Enter => {
                if self.navigator.can_submit() {
                    self.commit(Navigator::submit_text);
                }
            }
            KeyCode::Backspace if self.navigator.draft_text().is_empty() => {
                self.navigator.go_previous();
                self.reset_widgets();
            }
            KeyCode::Char(c) if typing => {
                let mut draft = self.navigator.draft_text().to_string();
                draft.insert(byte_offset(&draft, self.cursor), c);
                self.navigator.set_draft_text(draft);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let mut draft = self.navigator.draft_text().to_string();
                    self.cursor -= 1;
                    draft.remove(byte_offset(&draft, self.cursor));
                    self.navigator.set_draft_text(draft);
                }
            }
            KeyCode::Delete => {
                let mut draft = self.navigator.draft_text().to_string();
                if self.cursor < draft.chars().count() {
                    draft.remove(byte_offset(&draft, self.cursor));
                    self.navigator.set_draft_text(draft);
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.draft_len());
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.draft_len();
            }
            _ => {}
        }
    }

    fn handle_choice_key(&mut self, code: KeyCode) {
        let option_count = self.navigator.current_question().options().len();
        match code {
            KeyCode::Up => {
                self.highlighted = self.highlighted.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.highlighted + 1 < option_count {
                    self.highlighted += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < option_count {
                    self.highlighted = index;
                    self.choose_highlighted();
                }
            }
            KeyCode::Enter => self.choose_highlighted(),
            KeyCode::Backspace => {
                self.navigator.go_previous();
                self.reset_widgets();
            }
            _ => {}
        }
    }

    fn choose_highlighted(&mut self) {
        let Some(option) = self
            .navigator
            .current_question()
            .options()
            .get(self.highlighted)
            .cloned()
        else {
            return;
        };
        self.commit(|nav| nav.select_choice(&option));
    }

    /// Run an answering operation and show the completion screen when the
    /// last question was just answered and nothing is left open.
    fn commit(&mut self, answer: impl FnOnce(&mut Navigator)) {
        let was_last = self.navigator.is_last();
        answer(&mut self.navigator);
        if was_last && self.navigator.is_complete() {
            log::debug!("All questions answered");
            self.complete = true;
        }
        self.reset_widgets();
    }

    // Called whenever the navigator may have moved to another question.
    fn reset_widgets(&mut self) {
        self.cursor = self.draft_len();
        let question = self.navigator.current_question();
        self.highlighted = self
            .navigator
            .current_answer()
            .and_then(|answer| question.options().iter().position(|o| o == answer))
            .unwrap_or(0);
    }

    fn draft_len(&self) -> usize {
        self.navigator.draft_text().chars().count()
    }
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(offset, _)| offset)
}

fn draw_ui(frame: &mut Frame, state: &WizardState) {
    let area = frame.area();
    let nav = &state.navigator;

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Progress bar
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Help
        ])
        .split(area);

    // Header
    let header = Paragraph::new(state.title.clone())
        .style(Style::default().fg(state.theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(state.theme.border)),
        );
    frame.render_widget(header, chunks[0]);

    draw_progress(frame, state, chunks[1]);

    // Content area
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Question prompt
            Constraint::Min(5),    // Answer area
        ])
        .split(chunks[2]);

    let question = nav.current_question();
    let prompt = Paragraph::new(question.prompt().to_string())
        .style(Style::default().fg(state.theme.text).bold())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(state.theme.primary))
                .title(format!(" Question {} ", nav.current_index() + 1))
                .title_style(Style::default().fg(state.theme.highlight)),
        );
    frame.render_widget(prompt, content_chunks[0]);

    match question.kind() {
        QuestionKind::Text => draw_text_input(frame, state, content_chunks[1]),
        QuestionKind::Choice(options) => draw_options(frame, state, options, content_chunks[1]),
    }

    // Help bar
    let mut help = vec![];
    if question.is_text() {
        help.push("Enter: Submit");
    } else {
        help.push("↑/↓: Select");
        help.push("Enter: Choose");
    }
    if nav.can_go_previous() {
        help.push("PgUp: Previous");
    }
    if nav.can_go_next() {
        help.push("PgDn: Next");
    }
    help.push("Esc: Cancel");
    let help = Paragraph::new(help.join("  "))
        .style(Style::default().fg(state.theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(state.theme.border)),
        );
    frame.render_widget(help, chunks[3]);
}

/// Thin bar filled to `progress_fraction`, with a position label below it.
fn draw_progress(frame: &mut Frame, state: &WizardState, area: Rect) {
    let nav = &state.navigator;
    let progress_text = format!(
        " {} / {} ",
        nav.current_index() + 1,
        nav.questions().len()
    );

    let bar_width = area.width.saturating_sub(2); // Leave margin
    let text_width = progress_text.chars().count() as u16;
    let filled_width = (nav.progress_fraction() * f64::from(bar_width)) as u16;

    let bar_y = area.y;
    let bar_x = area.x + 1;

    // Background track
    let track = "─".repeat(bar_width as usize);
    let track_widget = Paragraph::new(track).style(Style::default().fg(state.theme.border));
    frame.render_widget(track_widget, Rect::new(bar_x, bar_y, bar_width, 1));

    // Filled portion
    if filled_width > 0 {
        let filled = "━".repeat(filled_width as usize);
        let filled_widget = Paragraph::new(filled).style(Style::default().fg(state.theme.primary));
        frame.render_widget(filled_widget, Rect::new(bar_x, bar_y, filled_width, 1));
    }

    let text_x = bar_x + (bar_width.saturating_sub(text_width)) / 2;
    let text_widget =
        Paragraph::new(progress_text).style(Style::default().fg(state.theme.secondary));
    frame.render_widget(
        text_widget,
        Rect::new(text_x, bar_y + 1, text_width.min(bar_width), 1),
    );
}

fn draw_text_input(frame: &mut Frame, state: &WizardState, area: Rect) {
    let nav = &state.navigator;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(state.theme.border))
        .title(" Answer ")
        .title_style(Style::default().fg(state.theme.secondary));

    let input_widget = if nav.draft_text().is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(state.theme.border).italic())
    } else {
        Paragraph::new(nav.draft_text().to_string()).style(Style::default().fg(state.theme.text))
    };
    frame.render_widget(input_widget.block(input_block), chunks[0]);

    // The input does not scroll, so the cursor stops at the right border.
    let inner_width = chunks[0].width.saturating_sub(2);
    let column = u16::try_from(state.cursor).unwrap_or(u16::MAX).min(inner_width);
    let cursor_x = chunks[0].x.saturating_add(1).saturating_add(column);
    let cursor_y = chunks[0].y + 1;
    frame.set_cursor_position((cursor_x, cursor_y));

    // Mirrors a submit button that is disabled until there is something to send.
    let hint_style = if nav.can_submit() {
        Style::default().fg(state.theme.highlight).bold()
    } else {
        Style::default().fg(state.theme.border).dim()
    };
    let hint = Paragraph::new("Press Enter ↵")
        .style(hint_style)
        .alignment(Alignment::Right);
    frame.render_widget(hint, chunks[1]);
}

fn draw_options(frame: &mut Frame, state: &WizardState, options: &[String], area: Rect) {
    let recorded = state.navigator.current_answer();
    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mark = if recorded == Some(option.as_str()) {
                "✓"
            } else {
                " "
            };
            let style = if i == state.highlighted {
                Style::default().fg(state.theme.highlight).bold()
            } else {
                Style::default().fg(state.theme.text)
            };
            ListItem::new(format!(" {mark} {}. {option}", i + 1)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(state.theme.border))
                .title(" Select Option ")
                .title_style(Style::default().fg(state.theme.secondary)),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.highlighted));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_completion(frame: &mut Frame, state: &WizardState) {
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(state.theme.success))
        .title(" Complete ")
        .title_style(Style::default().fg(state.theme.success).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = "All questions answered!\n\nPress Enter to finish, PgUp to review.";

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(state.theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Min(3),
            Constraint::Percentage(40),
        ])
        .split(inner);

    frame.render_widget(paragraph, centered[1]);
}

impl QuestionnaireBackend for RatatuiBackend {
    type Error = RatatuiError;

    fn collect(&self, questions: &QuestionSet) -> Result<AnswerMap, Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let mut state = WizardState::new(questions, self.theme.clone(), self.title.clone());

        // Restore the terminal even when the loop failed.
        let flow = self.event_loop(&mut terminal, &mut state);
        self.restore_terminal(&mut terminal)?;

        match flow? {
            Flow::Cancel => {
                log::info!("Questionnaire cancelled");
                Err(RatatuiError::Cancelled)
            }
            _ => Ok(state.navigator.into_answers()),
        }
    }
}
