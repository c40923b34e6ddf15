//! Autocomplete dropdown component
//!
//! A single-line input with a suggestion panel underneath. The component keeps its own
//! text, cursor and focus; everything the host needs to know leaves through a
//! [`DropdownEvent`] channel:
//!
//! - every text change sends `ChosenPerson(None)` right away and schedules the trimmed
//!   text as a debounced `AppliedQuery`,
//! - picking a suggestion sends `ChosenPerson(Some(..))`.
//!
//! The host owns the list of people and passes the current (filtered) slice into every
//! call that needs it.

use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

use crate::debounce::Debouncer;
use crate::logging;
use crate::tui::list::SuggestionCursor;
use crate::Person;

/// Quiet period before a typed query is committed
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

pub const PLACEHOLDER: &str = "Enter a part of the name";

pub const NO_SUGGESTIONS: &str = "No matching suggestions";

/// Messages from the dropdown to its host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The chosen person changed; `None` means the selection was cleared by typing
    ChosenPerson(Option<Person>),
    /// Debounced, trimmed query text
    AppliedQuery(String),
}

/// Focus state of the input.
///
/// `Pressing` is entered on pointer-down over a suggestion and left on pointer-up. It
/// holds the pressed person, so a refilter while the button is down cannot lose it.
/// A blur arriving in between completes the press first, so a click on a suggestion
/// always wins over the focus loss it causes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Blurred,
    Focused,
    Pressing {
        person: Person,
    },
}

impl Focus {
    pub fn is_focused(&self) -> bool {
        !matches!(self, Focus::Blurred)
    }
}

/// What the area under the input shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionPanel {
    Hidden,
    List,
    Empty,
}

impl SuggestionPanel {
    pub fn resolve(focused: bool, count: usize) -> Self {
        match (focused, count) {
            (false, _) => SuggestionPanel::Hidden,
            (true, 0) => SuggestionPanel::Empty,
            (true, _) => SuggestionPanel::List,
        }
    }
}

/// The one live debounced query commit for a `(sender, delay)` pair
pub struct DebouncedCommit {
    target: Sender<DropdownEvent>,
    debouncer: Debouncer<String>,
}

impl DebouncedCommit {
    pub fn new(target: Sender<DropdownEvent>, delay: Duration) -> Self {
        Self {
            target,
            debouncer: Debouncer::new(delay),
        }
    }

    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    /// Point the commit at a new sender and/or delay.
    /// Returns false (and changes nothing) when both are unchanged. Otherwise a
    /// pending query is kept and will be delivered to the new sender.
    pub fn rebind(&mut self, target: Sender<DropdownEvent>, delay: Duration) -> bool {
        if self.target.same_channel(&target) && self.debouncer.delay() == delay {
            return false;
        }
        self.target = target;
        self.debouncer.set_delay(delay);
        true
    }

    /// Schedule `value` (trimmed) for commit
    pub fn call(&mut self, value: &str, now: Instant) {
        self.debouncer.call(value.trim().to_string(), now);
    }

    /// Deliver the pending query if it is due. Returns true when one was sent.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(query) => {
                logging::log_query_commit(&query);
                let _ = self.target.send(DropdownEvent::AppliedQuery(query));
                true
            }
            None => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

impl Drop for DebouncedCommit {
    fn drop(&mut self) {
        if let Some(query) = self.debouncer.cancel() {
            logging::log_commit_cancelled(&query);
        }
    }
}

/// Autocomplete input state
pub struct Dropdown {
    query: String,
    /// Byte offset into `query`, always on a char boundary
    cursor_pos: usize,
    focus: Focus,
    events: Sender<DropdownEvent>,
    commit: DebouncedCommit,
    pub list: SuggestionCursor,
}

impl Dropdown {
    pub fn new(events: Sender<DropdownEvent>, delay: Duration) -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focus: Focus::Blurred,
            commit: DebouncedCommit::new(events.clone(), delay),
            events,
            list: SuggestionCursor::default(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    pub fn delay(&self) -> Duration {
        self.commit.delay()
    }

    /// Replace the host channel and/or the debounce delay
    pub fn rebind(&mut self, events: Sender<DropdownEvent>, delay: Duration) {
        if self.commit.rebind(events.clone(), delay) {
            logging::debug(
                "DROPDOWN",
                &format!("Rebound query commit (delay={}ms)", delay.as_millis()),
            );
        }
        self.events = events;
    }

    pub fn panel(&self, people: &[Person]) -> SuggestionPanel {
        SuggestionPanel::resolve(self.is_focused(), people.len())
    }

    pub fn focus_input(&mut self) {
        if self.focus == Focus::Blurred {
            self.focus = Focus::Focused;
        }
    }

    /// Lose focus. A press in progress on a suggestion is completed first.
    pub fn blur(&mut self) {
        if let Focus::Pressing { person } = std::mem::take(&mut self.focus) {
            self.select(&person);
        }
        self.focus = Focus::Blurred;
        self.list.reset();
    }

    /// Pick `person`: report it, show its name and close the panel
    pub fn select(&mut self, person: &Person) {
        logging::log_selection(person);
        let _ = self
            .events
            .send(DropdownEvent::ChosenPerson(Some(person.clone())));
        self.query = person.name.clone();
        self.cursor_pos = self.query.len();
        self.focus = Focus::Blurred;
        self.list.reset();
    }

    /// Pointer pressed on the suggestion with `slug`, one of `people`
    pub fn pointer_down(&mut self, slug: &str, people: &[Person]) {
        if !self.is_focused() {
            return;
        }
        if let Some(person) = people.iter().find(|p| p.slug == slug) {
            self.focus = Focus::Pressing {
                person: person.clone(),
            };
        }
    }

    /// Pointer released, over the suggestion with `slug` if any.
    ///
    /// Releasing over the pressed suggestion selects it. So does releasing after its row
    /// left `people`, since the pointer could not have been dragged off a row that is
    /// gone. Releasing anywhere else while the row is still listed cancels the press.
    pub fn pointer_up(&mut self, slug: Option<&str>, people: &[Person]) {
        let person = match &self.focus {
            Focus::Pressing { person } => person.clone(),
            _ => return,
        };

        let released_on_it = slug == Some(person.slug.as_str());
        let still_listed = people.iter().any(|p| p.slug == person.slug);

        if released_on_it || !still_listed {
            self.select(&person);
        } else {
            self.focus = Focus::Focused;
        }
    }

    /// Replace the whole text, as if the user had typed it
    pub fn set_text(&mut self, value: impl Into<String>, now: Instant) {
        self.query = value.into();
        self.cursor_pos = self.query.len();
        self.text_changed(now);
    }

    pub fn insert_char(&mut self, c: char, now: Instant) {
        self.query.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
        self.text_changed(now);
    }

    pub fn backspace(&mut self, now: Instant) {
        if self.cursor_pos == 0 {
            return;
        }
        let prev = self.prev_boundary();
        self.query.remove(prev);
        self.cursor_pos = prev;
        self.text_changed(now);
    }

    pub fn delete(&mut self, now: Instant) {
        if self.cursor_pos >= self.query.len() {
            return;
        }
        self.query.remove(self.cursor_pos);
        self.text_changed(now);
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.query.len() {
            self.cursor_pos = self.query[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.query.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.query.len();
    }

    /// Handle a key press. Returns false when the key means nothing to the dropdown.
    pub fn handle_key(&mut self, key: KeyEvent, people: &[Person], now: Instant) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        if !self.is_focused() {
            return self.handle_blurred_key(key, now);
        }

        match key.code {
            KeyCode::Char(c) => self.insert_char(c, now),
            KeyCode::Backspace => self.backspace(now),
            KeyCode::Delete => self.delete(now),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::Down => self.list.select_next(people.len()),
            KeyCode::Up => self.list.select_prev(people.len()),
            KeyCode::PageDown => self.list.select_last(people.len()),
            KeyCode::PageUp => self.list.select_first(people.len()),
            KeyCode::Enter => {
                if let Some(i) = self.list.highlighted_in(people.len()) {
                    let person = people[i].clone();
                    self.select(&person);
                }
            }
            KeyCode::Tab | KeyCode::Esc => self.blur(),
            _ => return false,
        }
        true
    }

    fn handle_blurred_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Char('/') => self.focus_input(),
            // Any other printable char focuses the input and types it
            KeyCode::Char(c) => {
                self.focus_input();
                self.insert_char(c, now);
            }
            _ => return false,
        }
        true
    }

    /// Deliver a due query commit. Returns true when one was sent.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.commit.tick(now)
    }

    /// When the pending query commit becomes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.commit.deadline()
    }

    pub fn has_pending_commit(&self) -> bool {
        self.commit.is_pending()
    }

    fn text_changed(&mut self, now: Instant) {
        let _ = self.events.send(DropdownEvent::ChosenPerson(None));
        self.commit.call(&self.query, now);
        self.list.reset();
    }

    fn prev_boundary(&self) -> usize {
        self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}
