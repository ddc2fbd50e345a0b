//! Scope selection component.
//!
//! Renders the scope catalog as a vertical list of cards and reports
//! activations through the caller's update callback. The component never
//! stores the selection; it is derived from the caller's [`WizardData`] on
//! every render.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::domain::catalog::{SCOPE_TIP, ScopeOption, catalog};
use crate::domain::model::{FieldUpdate, WizardData};
use crate::ui::icons::IconSet;
use crate::ui::theme::{StyleToken, Theme, selection_style};

const CARD_HEIGHT: u16 = 4;

/// One catalog entry paired with its derived selection flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeCard {
    pub option: &'static ScopeOption,
    pub selected: bool,
}

impl ScopeCard {
    pub fn style_token(&self) -> StyleToken {
        selection_style(self.selected)
    }

    /// Forward this card's scope to the caller. Fires on every activation,
    /// including when the scope is already selected.
    pub fn activate<F>(&self, update_field: &mut F)
    where
        F: FnMut(FieldUpdate),
    {
        tracing::debug!(scope = %self.option.value, "scope option activated");
        update_field(FieldUpdate::Scope(self.option.value));
    }
}

/// Keyboard focus within the list. Tracks which card would be activated,
/// never which scope is selected.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScopeSelectorState {
    cursor: usize,
}

impl ScopeSelectorState {
    /// Start with the cursor on the currently selected scope, if any.
    pub fn for_data(data: &WizardData) -> Self {
        let cursor = data
            .scope
            .and_then(|scope| catalog().iter().position(|option| option.value == scope))
            .unwrap_or(0);
        Self { cursor }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < catalog().len() {
            self.cursor += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}

/// Visual component presenting the scope catalog.
#[derive(Debug, Clone, Default)]
pub struct ScopeSelector {
    theme: Theme,
    icons: IconSet,
}

impl ScopeSelector {
    pub fn new(theme: Theme, icons: IconSet) -> Self {
        Self { theme, icons }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Cards for every catalog entry in catalog order.
    pub fn cards(data: &WizardData) -> Vec<ScopeCard> {
        catalog()
            .iter()
            .map(|option| ScopeCard {
                option,
                selected: data.scope == Some(option.value),
            })
            .collect()
    }

    /// The error text to display, if any.
    pub fn visible_error(error: Option<&str>) -> Option<&str> {
        error.filter(|message| !message.is_empty())
    }

    /// Route a key press. Returns whether the key was consumed.
    pub fn handle_key<F>(
        &self,
        key: KeyEvent,
        data: &WizardData,
        state: &mut ScopeSelectorState,
        update_field: &mut F,
    ) -> bool
    where
        F: FnMut(FieldUpdate),
    {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        let cards = Self::cards(data);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => state.select_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(card) = cards.get(state.cursor) {
                    card.activate(update_field);
                }
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                match cards.get(index) {
                    Some(card) => {
                        state.cursor = index;
                        card.activate(update_field);
                    }
                    None => return false,
                }
            }
            _ => return false,
        }
        true
    }

    /// Render the cards, the error slot, and the tip inside `area`.
    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        data: &WizardData,
        error: Option<&str>,
        state: &ScopeSelectorState,
    ) {
        let cards = Self::cards(data);
        let error = Self::visible_error(error).map(|message| {
            Paragraph::new(Line::styled(format!("⚠ {message}"), self.theme.error_style()))
                .wrap(Wrap { trim: true })
        });
        let error_height = error
            .as_ref()
            .map(|paragraph| paragraph.line_count(area.width).max(1))
            .unwrap_or(1);

        let mut constraints: Vec<Constraint> = cards
            .iter()
            .map(|_| Constraint::Length(CARD_HEIGHT))
            .collect();
        constraints.push(Constraint::Length(
            u16::try_from(error_height).unwrap_or(u16::MAX),
        ));
        constraints.push(Constraint::Min(1));

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (index, card) in cards.iter().enumerate() {
            self.render_card(frame, layout[index], card, index == state.cursor);
        }

        if let Some(paragraph) = error {
            frame.render_widget(paragraph, layout[cards.len()]);
        }

        let tip = Paragraph::new(SCOPE_TIP)
            .style(self.theme.tip_style())
            .wrap(Wrap { trim: true });
        frame.render_widget(tip, layout[cards.len() + 1]);
    }

    fn render_card(&self, frame: &mut Frame<'_>, area: Rect, card: &ScopeCard, has_cursor: bool) {
        let style = self.theme.card_style(card.style_token());
        let option = card.option;

        let title = Line::from(vec![
            Span::styled(format!(" {} ", style.marker), style.title),
            Span::styled(format!("{} ", self.icons.glyph(option.icon)), style.icon),
            Span::styled(option.label, style.title),
            Span::styled(format!(" · {} ", option.duration), self.theme.muted_style()),
        ]);

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(if has_cursor {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(style.border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let body = vec![
            Line::styled(option.description, Style::default().fg(self.theme.text)),
            Line::from(vec![
                Span::styled("e.g. ", self.theme.muted_style()),
                Span::styled(
                    option.examples.join(" · "),
                    self.theme.muted_style().add_modifier(Modifier::ITALIC),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(body), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use crate::domain::model::Scope;

    fn render_lines(data: &WizardData, error: Option<&str>) -> Vec<String> {
        render_lines_sized(data, error, 100, 16)
    }

    fn render_lines_sized(
        data: &WizardData,
        error: Option<&str>,
        width: u16,
        height: u16,
    ) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let selector = ScopeSelector::default();
        let state = ScopeSelectorState::for_data(data);
        terminal
            .draw(|frame| {
                let area = frame.size();
                selector.render(frame, area, data, error, &state);
            })
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer.get(area.x + x, area.y + y).symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn title_row(lines: &[String], label: &str) -> usize {
        let needle = format!("{label} ·");
        lines
            .iter()
            .position(|line| line.contains(&needle))
            .unwrap_or_else(|| panic!("no card titled {label}"))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn cards_follow_catalog_order() {
        let lines = render_lines(&WizardData::default(), None);
        let lesson = title_row(&lines, "Lesson");
        let unit = title_row(&lines, "Unit");
        let course = title_row(&lines, "Course");
        assert!(lesson < unit && unit < course);
    }

    #[test]
    fn marks_only_the_selected_card() {
        let lines = render_lines(&WizardData::with_scope(Scope::Unit), None);
        assert!(lines[title_row(&lines, "Unit")].contains('●'));
        assert!(lines[title_row(&lines, "Lesson")].contains('○'));
        assert!(lines[title_row(&lines, "Course")].contains('○'));
        assert!(!lines.iter().any(|line| line.contains('⚠')));
    }

    #[test]
    fn renders_error_and_tip() {
        let lines = render_lines(&WizardData::default(), Some("Required"));
        assert!(lines.iter().any(|line| line.contains("⚠ Required")));
        assert!(lines.iter().any(|line| line.contains("Tip:")));
        assert!(!lines.iter().any(|line| line.contains('●')));
    }

    #[test]
    fn long_error_wraps_instead_of_truncating() {
        let lines = render_lines_sized(
            &WizardData::default(),
            Some("Please select a scope"),
            20,
            16,
        );
        let start = lines
            .iter()
            .position(|line| line.contains("⚠ Please select a"))
            .expect("error line rendered");
        assert_eq!(lines[start + 1].trim_end(), "scope");
    }

    #[test]
    fn empty_error_renders_nothing() {
        let lines = render_lines(&WizardData::default(), Some(""));
        assert!(!lines.iter().any(|line| line.contains('⚠')));
        assert!(lines.iter().any(|line| line.contains("Tip:")));
    }

    #[test]
    fn enter_activates_card_under_cursor() {
        let data = WizardData::with_scope(Scope::Lesson);
        let selector = ScopeSelector::default();
        let mut state = ScopeSelectorState::for_data(&data);
        let mut updates = Vec::new();

        assert!(selector.handle_key(press(KeyCode::Down), &data, &mut state, &mut |u| updates.push(u)));
        assert!(selector.handle_key(press(KeyCode::Enter), &data, &mut state, &mut |u| updates.push(u)));

        assert_eq!(updates, vec![FieldUpdate::Scope(Scope::Unit)]);
        assert_eq!(data.scope, Some(Scope::Lesson));
    }

    #[test]
    fn digit_keys_activate_directly() {
        let data = WizardData::default();
        let selector = ScopeSelector::default();
        let mut state = ScopeSelectorState::default();
        let mut updates = Vec::new();

        assert!(selector.handle_key(press(KeyCode::Char('3')), &data, &mut state, &mut |u| updates.push(u)));
        assert!(!selector.handle_key(press(KeyCode::Char('4')), &data, &mut state, &mut |u| updates.push(u)));

        assert_eq!(updates, vec![FieldUpdate::Scope(Scope::Course)]);
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn cursor_stays_within_catalog() {
        let mut state = ScopeSelectorState::default();
        state.select_previous();
        assert_eq!(state.cursor(), 0);
        for _ in 0..5 {
            state.select_next();
        }
        assert_eq!(state.cursor(), catalog().len() - 1);
    }
}
