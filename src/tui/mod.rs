pub mod app;
pub mod colors;
pub mod dropdown;
pub mod hooks;
pub mod list;
pub mod ui;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::{AppConfig, PeopleDirectory, Person};

/// Entry point: take over the terminal and run the interactive picker
pub fn run(directory: PeopleDirectory, config: &AppConfig) -> crate::Result<Option<Person>> {
    let mut terminal = ratatui::try_init()?;

    if let Err(e) = execute!(std::io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e.into());
    }

    let mut app = app::App::new(directory, config);
    let result = app.run(&mut terminal);

    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}
