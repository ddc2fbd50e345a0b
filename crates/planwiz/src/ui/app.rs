//! Application loop for the TUI.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use crate::app::wizard::WizardFlow;
use crate::domain::catalog::option_for;
use crate::domain::model::{FieldUpdate, WizardData};
use crate::infra::config::Config;
use crate::ui::components::scope_selector::{ScopeSelector, ScopeSelectorState};

const TICK_RATE: Duration = Duration::from_millis(120);

/// Interactive host for the scope step of the planning wizard.
pub struct WizardApp {
    flow: WizardFlow,
    selector: ScopeSelector,
    selector_state: ScopeSelectorState,
    status: Option<StatusMessage>,
    confirmed: bool,
    should_quit: bool,
}

impl WizardApp {
    pub fn new(config: &Config, data: WizardData) -> Self {
        let appearance = &config.appearance;
        tracing::debug!(theme = %appearance.theme(), icons = %appearance.icons(), "building wizard");
        Self {
            selector_state: ScopeSelectorState::for_data(&data),
            flow: WizardFlow::new(data),
            selector: ScopeSelector::new(appearance.theme().theme(), appearance.icons()),
            status: None,
            confirmed: false,
            should_quit: false,
        }
    }

    /// Launch the terminal UI. Returns the answers if the step was confirmed.
    pub fn run(mut self) -> Result<Option<WizardData>> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to initialize terminal")?;
        terminal.hide_cursor().ok();

        let event_loop_result = self.event_loop(&mut terminal);

        disable_raw_mode().ok();
        let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        event_loop_result?;
        Ok(self.finish())
    }

    fn finish(self) -> Option<WizardData> {
        if self.confirmed {
            Some(self.flow.into_data())
        } else {
            tracing::info!("wizard closed without confirming");
            None
        }
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;
            self.tick();

            if self.should_quit {
                break;
            }

            if event::poll(TICK_RATE)? {
                let ev = event::read()?;
                self.handle_event(ev);
            }
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame<'_>) {
        let theme = self.selector.theme();
        let key_style = Style::default().fg(theme.accent);
        let size = frame.size();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .split(size);

        let header = Paragraph::new(vec![
            Line::styled(
                "Project Scope",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Line::styled("How much time will this project take?", theme.muted_style()),
        ])
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
        frame.render_widget(header, layout[0]);

        self.selector.render(
            frame,
            layout[1],
            self.flow.data(),
            self.flow.error(),
            &self.selector_state,
        );

        let hints = Paragraph::new(Line::from(vec![
            Span::styled("j/k", key_style),
            Span::raw(" move "),
            Span::styled("↵", key_style),
            Span::raw(" choose · "),
            Span::styled("1-3", key_style),
            Span::raw(" quick pick · "),
            Span::styled("tab", key_style),
            Span::raw(" continue · "),
            Span::styled("q", key_style),
            Span::raw(" quit"),
        ]))
        .wrap(Wrap { trim: true })
        .style(theme.muted_style());
        frame.render_widget(hints, layout[2]);

        self.render_status(frame, layout[3]);
    }

    fn render_status(&self, frame: &mut Frame<'_>, area: Rect) {
        let theme = self.selector.theme();
        let message = self.status.as_ref().map(|status| {
            let style = match status.level {
                StatusLevel::Info => theme.muted_style(),
                StatusLevel::Success => Style::default().fg(theme.accent),
            };
            Line::styled(status.text.clone(), style)
        });

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border));
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let line = message.unwrap_or_else(|| {
            Line::styled("Ready · pick a scope", Style::default().fg(theme.border))
        });
        frame.render_widget(Paragraph::new(line), inner);
    }

    fn tick(&mut self) {
        if let Some(status) = &self.status
            && status.is_expired()
        {
            self.status = None;
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Resize(..) => {}
            Event::Mouse(_) => {}
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab | KeyCode::Char('n') => {
                self.confirm();
                return;
            }
            _ => {}
        }

        let mut applied = None;
        let consumed = self.selector.handle_key(
            key,
            self.flow.data(),
            &mut self.selector_state,
            &mut |update| applied = Some(update),
        );
        if let Some(update) = applied {
            self.apply_update(update);
        }
        if !consumed {
            tracing::trace!(?key, "unhandled key");
        }
    }

    fn apply_update(&mut self, update: FieldUpdate) {
        self.flow.update_field(update);
        let FieldUpdate::Scope(scope) = update;
        let option = option_for(scope);
        self.set_status(
            StatusLevel::Success,
            format!("Scope set to {} ({})", option.label, option.duration),
        );
    }

    fn confirm(&mut self) {
        if self.flow.confirm() {
            self.confirmed = true;
            self.should_quit = true;
        } else {
            self.set_status(StatusLevel::Info, "Choose a scope before continuing");
        }
    }

    fn set_status<S: Into<String>>(&mut self, level: StatusLevel, message: S) {
        self.status = Some(StatusMessage::new(level, message.into()));
    }
}

#[derive(Debug)]
struct StatusMessage {
    level: StatusLevel,
    text: String,
    expires_at: Instant,
}

impl StatusMessage {
    fn new(level: StatusLevel, text: String) -> Self {
        Self {
            level,
            text,
            expires_at: Instant::now() + Duration::from_secs(4),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusLevel {
    Info,
    Success,
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::backend::TestBackend;

    use crate::app::wizard::SCOPE_REQUIRED;
    use crate::domain::model::Scope;
    use crate::ui::theme::ThemeKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn selecting_then_confirming_returns_answers() {
        let mut app = WizardApp::new(&Config::default(), WizardData::default());
        app.handle_key_event(key(KeyCode::Char('2')));
        assert_eq!(app.flow.data().scope, Some(Scope::Unit));

        app.handle_key_event(key(KeyCode::Tab));
        assert!(app.should_quit);
        assert_eq!(app.finish().and_then(|data| data.scope), Some(Scope::Unit));
    }

    #[test]
    fn confirming_without_scope_shows_error() {
        let mut app = WizardApp::new(&Config::default(), WizardData::default());
        app.handle_key_event(key(KeyCode::Char('n')));
        assert!(!app.should_quit);
        assert_eq!(app.flow.error(), Some(SCOPE_REQUIRED));

        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains(SCOPE_REQUIRED));
    }

    #[test]
    fn chrome_follows_configured_theme() {
        let mut config = Config::default();
        config.appearance.set_theme(ThemeKind::Sunrise);
        let app = WizardApp::new(&config, WizardData::default());

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();

        let sunrise = ThemeKind::Sunrise.theme();
        assert_eq!(buffer.get(0, 0).symbol(), "P");
        assert_eq!(buffer.get(0, 0).fg, sunrise.accent);
        assert_eq!(buffer.get(0, 1).fg, sunrise.muted);
    }

    #[test]
    fn quitting_discards_answers() {
        let mut app = WizardApp::new(&Config::default(), WizardData::with_scope(Scope::Lesson));
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);
        assert!(app.finish().is_none());
    }
}
