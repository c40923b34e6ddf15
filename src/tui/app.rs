use crate::logging;
use crate::tui::dropdown::{Dropdown, DropdownEvent};
use crate::tui::hooks::{HitAreas, Hook};
use crate::tui::ui;
use crate::{AppConfig, PeopleDirectory, Person};
use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

/// Host of the dropdown: owns the people, the applied query and the chosen person
pub struct App {
    // Data
    pub directory: PeopleDirectory,
    pub visible: Vec<Person>,

    // State reported by the dropdown
    pub applied_query: String,
    pub chosen_person: Option<Person>,

    // Widget
    pub dropdown: Dropdown,
    pub hit_areas: HitAreas,
    pub status_message: String,

    tick_rate: Duration,

    // Channel
    sender: Sender<DropdownEvent>,
    receiver: Receiver<DropdownEvent>,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(directory: PeopleDirectory, config: &AppConfig) -> Self {
        let (sender, receiver) = unbounded();
        let visible = directory.people().to_vec();
        let status_message = format!("{} people loaded", directory.len());

        Self {
            directory,
            visible,
            applied_query: String::new(),
            chosen_person: None,
            dropdown: Dropdown::new(sender.clone(), config.delay),
            hit_areas: HitAreas::default(),
            status_message,
            tick_rate: config.tick_rate,
            sender,
            receiver,
            should_quit: false,
        }
    }

    /// Drive the picker until the user quits. Returns the chosen person, if any.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> crate::Result<Option<Person>> {
        logging::separator("PICK");

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = self.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                let event = event::read()?;
                self.handle_event(event, Instant::now());
            }

            self.tick(Instant::now());

            if self.should_quit {
                logging::flush();
                return Ok(self.chosen_person.clone());
            }
        }
    }

    /// Change the debounce delay of the query commit
    pub fn set_delay(&mut self, delay: Duration) {
        self.dropdown.rebind(self.sender.clone(), delay);
    }

    /// Deliver due commits and apply everything the dropdown reported
    pub fn tick(&mut self, now: Instant) {
        self.dropdown.tick(now);
        self.process_messages();
    }

    pub fn process_messages(&mut self) {
        while let Ok(msg) = self.receiver.try_recv() {
            match msg {
                DropdownEvent::ChosenPerson(person) => {
                    if let Some(ref person) = person {
                        self.status_message = format!("Chose {}", crate::describe_person(person));
                    }
                    self.chosen_person = person;
                }
                DropdownEvent::AppliedQuery(query) => {
                    self.applied_query = query;
                    self.apply_filter();
                }
            }
        }
    }

    fn apply_filter(&mut self) {
        self.visible = self.directory.filter(&self.applied_query);
        self.dropdown.list.reset();
        self.status_message = format!("{} matches", self.visible.len());
    }

    /// Time to wait for input before the next tick is needed
    fn poll_timeout(&self, now: Instant) -> Duration {
        match self.dropdown.next_deadline() {
            Some(deadline) => self
                .tick_rate
                .min(deadline.saturating_duration_since(now)),
            None => self.tick_rate,
        }
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc if !self.dropdown.is_focused() => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        self.dropdown.handle_key(key, &self.visible, now);
        self.process_messages();
    }

    // --- Mouse handling ---

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hook = self.hit_areas.hook_at(pos);
                logging::debug(
                    "APP",
                    &format!(
                        "Mouse down at {},{} on {}",
                        pos.x,
                        pos.y,
                        hook.map_or("nothing", |h| h.as_str())
                    ),
                );

                match hook {
                    Some(Hook::SuggestionItem) => {
                        if let Some(slug) = self.hit_areas.item_at(pos).map(str::to_owned) {
                            self.dropdown.pointer_down(&slug, &self.visible);
                        }
                    }
                    Some(Hook::SearchInput) => self.dropdown.focus_input(),
                    Some(Hook::SuggestionsList) | Some(Hook::NoSuggestionsMessage) => {}
                    None => self.dropdown.blur(),
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let slug = self.hit_areas.item_at(pos).map(str::to_owned);
                self.dropdown.pointer_up(slug.as_deref(), &self.visible);
            }
            _ => {}
        }

        self.process_messages();
    }
}
