//! Main TUI application state and logic

use crate::challenge::{Challenge, Verdict};
use crate::config::AppConfig;
use crate::errors::{Result, TraceError};
use crate::playback::timer::WallTimer;
use crate::playback::{Mode, Playback};
use crate::producer::input::{parse_sequence, parse_target, random_sequence};
use crate::producer::{build_trace, Algorithm, TraceRequest};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Upper bound on how long the loop blocks waiting for a key
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Step applied by `+`/`-` to the tick interval
const SPEED_STEP_MS: u64 = 100;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Sequence,
    Narration,
    Stack,
    Details,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: sequence -> narration -> stack -> details)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Sequence => FocusedPane::Narration,
            FocusedPane::Narration => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Details,
            FocusedPane::Details => FocusedPane::Sequence,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Sequence => FocusedPane::Details,
            FocusedPane::Narration => FocusedPane::Sequence,
            FocusedPane::Stack => FocusedPane::Narration,
            FocusedPane::Details => FocusedPane::Stack,
        }
    }
}

/// Text field being edited from the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Input,
    Target,
    RandomSize,
    /// Challenge guess: indices to toggle
    Guess,
}

impl EditField {
    fn prompt(self) -> &'static str {
        match self {
            EditField::Input => "Input",
            EditField::Target => "Target",
            EditField::RandomSize => "Random size",
            EditField::Guess => "Toggle indices",
        }
    }
}

/// The main application state
pub struct App {
    /// Playback over the current trace
    pub playback: Playback<WallTimer>,

    pub config: AppConfig,

    /// Algorithm of the current trace
    pub algorithm: Algorithm,

    /// Values for sorting and searching
    pub sequence_text: String,

    /// Argument for factorial
    pub argument_text: String,

    pub target_text: String,

    /// Seed for the next random input; bumped after each use
    pub seed: u64,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub sequence_scroll: usize,
    pub narration_scroll: usize,
    pub stack_scroll: usize,

    /// Field being edited and its buffer
    pub editing: Option<EditField>,
    pub edit_buffer: String,

    /// Quiz overlay, present while challenge mode is on
    pub challenge: Option<Challenge>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create the app and build the first trace from the given input.
    pub fn new(
        config: AppConfig,
        algorithm: Algorithm,
        input_text: String,
        target_text: String,
        seed: u64,
    ) -> Result<Self> {
        let (sequence_text, argument_text) = if algorithm.uses_sequence() {
            (input_text, "5".to_string())
        } else {
            (config.default_input.clone(), input_text)
        };

        let request = Self::request_for(algorithm, &sequence_text, &argument_text, &target_text)?;
        let trace = build_trace(&request, &config.limits)?;
        let playback = Playback::new(trace, config.tick_interval(), WallTimer::new());

        Ok(App {
            playback,
            config,
            algorithm,
            sequence_text,
            argument_text,
            target_text,
            seed,
            focused_pane: FocusedPane::Sequence,
            sequence_scroll: 0,
            narration_scroll: 0,
            stack_scroll: 0,
            editing: None,
            edit_buffer: String::new(),
            challenge: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        })
    }

    /// Parse the text fields into a request for `algorithm`
    fn request_for(
        algorithm: Algorithm,
        sequence_text: &str,
        argument_text: &str,
        target_text: &str,
    ) -> Result<TraceRequest> {
        let input = if algorithm.uses_sequence() {
            parse_sequence(sequence_text)?
        } else {
            parse_sequence(argument_text)?
        };
        let mut request = TraceRequest::new(algorithm, input);
        if algorithm.needs_target() {
            request = request.with_target(parse_target(target_text)?);
        }
        Ok(request)
    }

    /// Text of the input field for the current algorithm
    pub fn input_text(&self) -> &str {
        if self.algorithm.uses_sequence() {
            &self.sequence_text
        } else {
            &self.argument_text
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play ticks
            if self.playback.pump() > 0 {
                self.narration_scroll = usize::MAX;
                if self.playback.mode() == Mode::Finished {
                    self.set_status("Playback complete");
                } else {
                    self.set_status("Playing...");
                }
            }

            // Wake up for the next tick even if no key arrives
            let timeout = self
                .playback
                .timer()
                .next_deadline_in()
                .map_or(POLL_INTERVAL, |d| d.min(POLL_INTERVAL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Sequence (top) | Narration (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        // Right column: Call Stack (top) | Details (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        let step = self.playback.current_step();

        super::panes::render_bars_pane(
            frame,
            left_rows[0],
            super::panes::BarsRenderData {
                step,
                challenge: self.challenge.as_ref(),
            },
            self.focused_pane == FocusedPane::Sequence,
            &mut self.sequence_scroll,
        );

        super::panes::render_narration_pane(
            frame,
            left_rows[1],
            &self
                .playback
                .trace()
                .narration_until(self.playback.current_index()),
            self.focused_pane == FocusedPane::Narration,
            &mut self.narration_scroll,
        );

        super::panes::render_stack_pane(
            frame,
            right_rows[0],
            &step.frames,
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        let input = if self.algorithm.uses_sequence() {
            self.sequence_text.as_str()
        } else {
            self.argument_text.as_str()
        };
        super::panes::render_details_pane(
            frame,
            right_rows[1],
            super::panes::DetailsRenderData {
                algorithm: self.algorithm,
                input,
                target: self
                    .algorithm
                    .needs_target()
                    .then_some(self.target_text.as_str()),
                step,
                challenge: self.challenge.as_ref(),
            },
            self.focused_pane == FocusedPane::Details,
        );

        // Render status bar
        super::panes::render_status_bar(
            frame,
            status_area,
            super::panes::StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                current_step: self.playback.current_index(),
                total_steps: self.playback.len(),
                at_start: self.playback.is_at_start(),
                trace_bytes: self.playback.trace().estimated_size(),
                mode: self.playback.mode(),
                tick_ms: self.playback.tick_interval().as_millis() as u64,
                challenge: self.challenge.is_some(),
                editing: self
                    .editing
                    .map(|field| (field.prompt(), self.edit_buffer.as_str())),
            },
        );
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, err: &TraceError) {
        warn!(error = %err, "rejected input");
        self.status_message = err.to_string();
        self.status_is_error = true;
    }

    /// Build a trace for `algorithm` from the current text fields and install
    /// it. On invalid input the current trace and algorithm stay as they were.
    fn rebuild(&mut self, algorithm: Algorithm) -> bool {
        let built = Self::request_for(
            algorithm,
            &self.sequence_text,
            &self.argument_text,
            &self.target_text,
        )
        .and_then(|request| build_trace(&request, &self.config.limits));

        match built {
            Ok(trace) => {
                info!(algorithm = ?algorithm, steps = trace.len(), "installed new trace");
                let steps = trace.len();
                self.algorithm = algorithm;
                self.playback.replace_trace(trace);
                if let Some(challenge) = self.challenge.as_mut() {
                    challenge.reset();
                }
                self.sequence_scroll = 0;
                self.narration_scroll = 0;
                self.stack_scroll = 0;
                self.set_status(format!("{}: {} steps", algorithm.label(), steps));
                true
            }
            Err(err) => {
                self.set_error(&err);
                false
            }
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(field) = self.editing {
            self.handle_edit_key(field, key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Challenge mode: a digit opens the guess prompt with that digit typed
            KeyCode::Char(c @ '0'..='9') if self.challenge.is_some() => {
                self.begin_edit(EditField::Guess);
                self.edit_buffer.push(c);
            }
            KeyCode::Char('g') if self.challenge.is_some() => self.begin_edit(EditField::Guess),
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.playback.step() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.set_status(format!("Stepped forward {} step(s)", stepped));
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Char('s') if self.challenge.is_some() => self.submit_guess(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => self.step_backward(),
            KeyCode::Right => self.step_forward(),
            KeyCode::Up => {
                if let Some(scroll) = self.focused_scroll() {
                    *scroll = scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if let Some(scroll) = self.focused_scroll() {
                    *scroll = scroll.saturating_add(1);
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.playback.jump_to_end();
                self.set_status("Jumped to end");
                self.narration_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.playback.reset();
                self.set_status("Jumped to start");
                self.narration_scroll = 0;
            }
            KeyCode::Char('a') => {
                self.rebuild(self.algorithm.next());
            }
            KeyCode::Char('A') => {
                self.rebuild(self.algorithm.prev());
            }
            KeyCode::Char('i') => self.begin_edit(EditField::Input),
            KeyCode::Char('t') if self.algorithm.needs_target() => {
                self.begin_edit(EditField::Target)
            }
            KeyCode::Char('r') if self.algorithm.uses_sequence() => {
                self.begin_edit(EditField::RandomSize)
            }
            KeyCode::Char('c') => self.toggle_challenge(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_speed(false),
            KeyCode::Char('-') => self.change_speed(true),
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> Option<&mut usize> {
        match self.focused_pane {
            FocusedPane::Sequence => Some(&mut self.sequence_scroll),
            FocusedPane::Narration => Some(&mut self.narration_scroll),
            FocusedPane::Stack => Some(&mut self.stack_scroll),
            FocusedPane::Details => None,
        }
    }

    fn toggle_play(&mut self) {
        match self.playback.mode() {
            Mode::Playing => {
                self.playback.pause();
                self.set_status("Paused");
            }
            Mode::Finished => {
                self.set_status("Playback complete, press backspace to restart");
            }
            Mode::Idle | Mode::Paused => {
                self.playback.play();
                self.set_status("Playing...");
            }
        }
    }

    /// Step forward in playback
    fn step_forward(&mut self) {
        if self.playback.step() {
            self.set_status("Stepped forward");
            self.narration_scroll = usize::MAX;
        } else {
            self.set_status("Cannot step forward: already at the last step");
        }
    }

    /// Step backward in playback
    fn step_backward(&mut self) {
        if self.playback.step_back() {
            self.set_status("Stepped backward");
            self.narration_scroll = usize::MAX;
        } else {
            self.set_status("Cannot step backward: already at the first step");
        }
    }

    fn change_speed(&mut self, slower: bool) {
        let current = self.playback.tick_interval().as_millis() as u64;
        let next = if slower {
            current.saturating_add(SPEED_STEP_MS)
        } else {
            current.saturating_sub(SPEED_STEP_MS).max(SPEED_STEP_MS)
        };
        self.playback.set_tick_interval(Duration::from_millis(next));
        debug!(tick_ms = next, "changed playback speed");
        self.set_status(format!("Tick interval {}ms", next));
    }

    fn toggle_challenge(&mut self) {
        if self.challenge.take().is_some() {
            self.set_status("Challenge mode off");
        } else {
            self.playback.pause();
            self.challenge = Some(Challenge::new());
            self.set_status("Challenge mode: type indices (or g) then Enter, submit with s");
        }
    }

    /// Score the guess against the next step, then reveal it
    fn submit_guess(&mut self) {
        let upcoming = self.playback.upcoming_step();
        let Some(challenge) = self.challenge.as_mut() else {
            return;
        };
        let verdict = challenge.submit(upcoming);
        let message = match &verdict {
            Verdict::Correct => "Correct!".to_string(),
            Verdict::Incorrect { expected } => format!("Wrong, it compared {:?}", expected),
            Verdict::NothingToPredict => "Nothing to predict here".to_string(),
        };
        debug!(?verdict, "challenge guess scored");
        self.playback.step();
        self.narration_scroll = usize::MAX;
        self.set_status(message);
    }

    fn begin_edit(&mut self, field: EditField) {
        self.playback.pause();
        self.edit_buffer = match field {
            EditField::Input => self.input_text().to_string(),
            EditField::Target => self.target_text.clone(),
            EditField::RandomSize => String::from("10"),
            EditField::Guess => String::new(),
        };
        self.editing = Some(field);
    }

    fn handle_edit_key(&mut self, field: EditField, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.editing = None;
                self.set_status("Edit cancelled");
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Enter => {
                self.editing = None;
                let text = std::mem::take(&mut self.edit_buffer);
                self.commit_edit(field, text);
            }
            KeyCode::Char(c) => self.edit_buffer.push(c),
            _ => {}
        }
    }

    /// Apply an edited field. Rejected input leaves the previous text and
    /// trace in place.
    fn commit_edit(&mut self, field: EditField, text: String) {
        match field {
            EditField::Input => {
                let previous = if self.algorithm.uses_sequence() {
                    std::mem::replace(&mut self.sequence_text, text)
                } else {
                    std::mem::replace(&mut self.argument_text, text)
                };
                if !self.rebuild(self.algorithm) {
                    if self.algorithm.uses_sequence() {
                        self.sequence_text = previous;
                    } else {
                        self.argument_text = previous;
                    }
                }
            }
            EditField::Target => {
                let previous = std::mem::replace(&mut self.target_text, text);
                if !self.rebuild(self.algorithm) {
                    self.target_text = previous;
                }
            }
            EditField::RandomSize => {
                let generated = text
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| {
                        TraceError::invalid("size", format!("'{}' is not a positive number", text.trim()))
                    })
                    .and_then(|size| random_sequence(size, self.seed, &self.config.limits));
                match generated {
                    Ok(values) => {
                        self.seed = self.seed.wrapping_add(1);
                        let previous = std::mem::replace(
                            &mut self.sequence_text,
                            values
                                .iter()
                                .map(|v| v.to_string())
                                .collect::<Vec<_>>()
                                .join(", "),
                        );
                        if !self.rebuild(self.algorithm) {
                            self.sequence_text = previous;
                        }
                    }
                    Err(err) => self.set_error(&err),
                }
            }
            EditField::Guess => match self.parse_guess(&text) {
                Ok(indices) => {
                    let Some(challenge) = self.challenge.as_mut() else {
                        return;
                    };
                    for index in indices {
                        challenge.toggle(index);
                    }
                    let guess = challenge.guess_sorted();
                    self.set_status(format!("Guess: {:?}", guess));
                }
                Err(err) => self.set_error(&err),
            },
        }
    }

    /// Parse a comma or space separated list of indices into the current
    /// sequence. Nothing is toggled unless every index is valid.
    fn parse_guess(&self, text: &str) -> Result<Vec<usize>> {
        let len = self.playback.current_step().sequence.len();
        text.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| -> Result<usize> {
                let index = token.parse::<usize>().map_err(|_| {
                    TraceError::invalid("guess", format!("'{}' is not an index", token))
                })?;
                if index >= len {
                    return Err(TraceError::IndexOutOfRange { index, len });
                }
                Ok(index)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::StepKind;
    use crate::ui::panes::format_bytes;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app(algorithm: Algorithm, input: &str) -> App {
        App::new(
            AppConfig::default(),
            algorithm,
            input.to_string(),
            "4".to_string(),
            42,
        )
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(240, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_invalid_startup_input_is_rejected() {
        let result = App::new(
            AppConfig::default(),
            Algorithm::BubbleSort,
            "1, x".to_string(),
            String::new(),
            0,
        );
        assert!(matches!(result, Err(TraceError::InvalidInput { .. })));
    }

    #[test]
    fn test_render_shows_panes_and_status() {
        let mut app = app(Algorithm::BubbleSort, "5, 3, 1");
        let text = screen(&mut app);
        assert!(text.contains("Sequence"));
        assert!(text.contains("Narration"));
        assert!(text.contains("Call Stack"));
        assert!(text.contains("Start bubble sort on 3 values"));
        assert!(text.contains(&format!("Step 1/{}", app.playback.len())));
        assert!(text.contains("START"));
        assert!(text.contains(&format_bytes(app.playback.trace().estimated_size())));
    }

    #[test]
    fn test_details_show_highlight_and_final_step() {
        let mut app = app(Algorithm::LinearSearch, "8, 4, 2");
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        let text = screen(&mut app);
        assert!(text.contains("highlight {1}"));
        assert!(text.contains("compared  {1}"));

        press(&mut app, KeyCode::Enter);
        let text = screen(&mut app);
        assert!(text.contains("Found (final)"));
        assert!(!text.contains("START"));
    }

    #[test]
    fn test_arrow_keys_step() {
        let mut app = app(Algorithm::BubbleSort, "2, 1");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.playback.current_index(), 1);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.playback.current_index(), 0);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.playback.mode(), Mode::Finished);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.playback.mode(), Mode::Idle);
    }

    #[test]
    fn test_edit_input_rebuilds_trace() {
        let mut app = app(Algorithm::BubbleSort, "2, 1");
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('i'));
        for _ in 0..10 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "9 8 7");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.sequence_text, "9 8 7");
        assert_eq!(app.playback.current_index(), 0);
        assert_eq!(app.playback.trace().first().sequence, vec![9, 8, 7]);
        assert!(!app.status_is_error);
    }

    #[test]
    fn test_bad_edit_keeps_previous_trace() {
        let mut app = app(Algorithm::BubbleSort, "2, 1");
        let before = app.playback.trace().clone();
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, ", oops");
        press(&mut app, KeyCode::Enter);
        assert!(app.status_is_error);
        assert_eq!(app.sequence_text, "2, 1");
        assert_eq!(app.playback.trace(), &before);
    }

    #[test]
    fn test_cycle_algorithm_keeps_separate_inputs() {
        let mut app = app(Algorithm::BubbleSort, "3, 8, 4");
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.algorithm, Algorithm::LinearSearch);
        assert_eq!(app.playback.trace().last().kind, StepKind::Found);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.algorithm, Algorithm::Factorial);
        assert_eq!(app.input_text(), "5");
        assert_eq!(app.playback.trace().last().narration, "Done: 5! = 120");
    }

    #[test]
    fn test_random_input() {
        let mut app = app(Algorithm::BubbleSort, "1");
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "6");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.playback.trace().first().sequence.len(), 6);
        assert_eq!(app.seed, 43);

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "0");
        press(&mut app, KeyCode::Enter);
        assert!(app.status_is_error);
        assert_eq!(app.seed, 43);
    }

    #[test]
    fn test_challenge_round() {
        let mut app = app(Algorithm::BubbleSort, "2, 1, 3");
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "0 1");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.challenge.as_ref().unwrap().guess_sorted(), vec![0, 1]);
        press(&mut app, KeyCode::Char('s'));
        let challenge = app.challenge.as_ref().unwrap();
        assert_eq!(challenge.correct(), 1);
        assert_eq!(app.playback.current_index(), 1);
        assert!(screen(&mut app).contains("QUIZ"));
    }

    #[test]
    fn test_challenge_guess_with_two_digit_indices() {
        let mut app = app(Algorithm::BubbleSort, "1 2 3 4 5 6 7 8 9 10 11 12");
        // the compare of (9, 10) follows the step at index 9
        for _ in 0..9 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(
            app.playback.upcoming_step().and_then(|s| s.compared.clone()),
            Some(vec![9, 10])
        );

        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "9, 10");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.challenge.as_ref().unwrap().guess_sorted(), vec![9, 10]);

        press(&mut app, KeyCode::Char('s'));
        let challenge = app.challenge.as_ref().unwrap();
        assert_eq!(challenge.correct(), 1);
        assert_eq!(challenge.incorrect(), 0);
        assert_eq!(challenge.last_verdict(), Some(&Verdict::Correct));
    }

    #[test]
    fn test_challenge_guess_rejects_out_of_range_index() {
        let mut app = app(Algorithm::BubbleSort, "3, 2, 1");
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('g'));
        type_text(&mut app, "0 7");
        press(&mut app, KeyCode::Enter);
        assert!(app.status_is_error);
        assert!(app.challenge.as_ref().unwrap().guess_sorted().is_empty());

        // toggling again deselects
        type_text(&mut app, "1 2");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "2");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.challenge.as_ref().unwrap().guess_sorted(), vec![1]);
    }

    #[test]
    fn test_speed_keys() {
        let mut app = app(Algorithm::BubbleSort, "2, 1");
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.playback.tick_interval(), Duration::from_millis(600));
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.playback.tick_interval(), Duration::from_millis(100));
    }
}
