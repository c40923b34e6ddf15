use crate::tui::app::App;
use crate::tui::colors;
use crate::tui::dropdown::{SuggestionPanel, NO_SUGGESTIONS, PLACEHOLDER};
use crate::tui::hooks::HitAreas;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Search input
            Constraint::Min(3),    // Suggestions
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let mut hit_areas = HitAreas {
        input: chunks[1],
        ..Default::default()
    };

    draw_title_bar(frame, chunks[0]);
    draw_search_input(frame, app, chunks[1]);

    match app.dropdown.panel(&app.visible) {
        SuggestionPanel::Hidden => {}
        SuggestionPanel::List => draw_suggestions(frame, app, chunks[2], &mut hit_areas),
        SuggestionPanel::Empty => draw_no_suggestions(frame, chunks[2], &mut hit_areas),
    }

    draw_status_bar(frame, app, chunks[3]);
    app.hit_areas = hit_areas;

    if app.dropdown.is_focused() {
        // Border (1) + leading space (1)
        let typed = &app.dropdown.query()[..app.dropdown.cursor_pos()];
        let max_x = chunks[1].right().saturating_sub(2);
        let cursor_x = (chunks[1].x + 2).saturating_add(typed.width() as u16).min(max_x);
        frame.set_cursor_position(Position::new(cursor_x, chunks[1].y + 1));
    }
}

fn draw_title_bar(frame: &mut Frame, area: Rect) {
    let title = Span::styled(
        " PeoplePick ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    let line = Line::from(vec![title]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors::BAR_BG)),
        area,
    );
}

fn draw_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::input_border(app.dropdown.is_focused()))
        .title(" Search ");

    let line = if app.dropdown.query().is_empty() {
        Line::from(Span::styled(
            format!(" {}", PLACEHOLDER),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(format!(" {}", app.dropdown.query()))
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_suggestions(frame: &mut Frame, app: &mut App, area: Rect, hit_areas: &mut HitAreas) {
    let total = app.visible.len();
    let height = (total as u16).saturating_add(2).min(area.height);
    let panel = Rect::new(area.x, area.y, area.width, height);

    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Suggestions ");
    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    hit_areas.list = Some(panel);

    app.dropdown.list.visible_rows = inner.height as usize;

    // Build visible rows only
    let start = app.dropdown.list.scroll_offset.min(total.saturating_sub(1));
    let end = (start + inner.height as usize).min(total);
    let highlighted = app.dropdown.list.highlighted_in(total);

    for (visual_idx, idx) in (start..end).enumerate() {
        let person = &app.visible[idx];
        let is_highlighted = highlighted == Some(idx);
        let row = Rect::new(inner.x, inner.y + visual_idx as u16, inner.width, 1);

        let row_style = if is_highlighted {
            Style::default().bg(colors::HIGHLIGHT_BG)
        } else {
            Style::default()
        };
        let name = Span::styled(
            format!(" {}", person.name),
            colors::name_style(person, is_highlighted),
        );

        frame.render_widget(Paragraph::new(Line::from(name)).style(row_style), row);
        hit_areas.items.push((row, person.slug.clone()));
    }
}

fn draw_no_suggestions(frame: &mut Frame, area: Rect, hit_areas: &mut HitAreas) {
    let alert_area = Rect::new(area.x, area.y, area.width, area.height.min(3));

    frame.render_widget(Clear, alert_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::alert());
    let paragraph = Paragraph::new(format!(" {}", NO_SUGGESTIONS))
        .block(block)
        .style(colors::alert());

    frame.render_widget(paragraph, alert_area);
    hit_areas.alert = Some(alert_area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chosen = app
        .chosen_person
        .as_ref()
        .map(|p| p.name.as_str())
        .unwrap_or("-");
    let left_text = format!(
        " {} | query: '{}' | chosen: {}",
        app.status_message, app.applied_query, chosen
    );

    let right_text = " Tab:Focus  \u{2191}\u{2193}:Move  Enter:Select  Esc:Close/Quit ";

    // Left-aligned text + padding + right-aligned text
    let available_width = area.width as usize;
    let left_len = left_text.width();
    let right_len = right_text.width();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        // Not enough space, just show left text
        left_text
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(colors::STATUS_BG));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::hooks::Hook;
    use crate::{AppConfig, PeopleDirectory, Person, Sex};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use std::time::{Duration, Instant};

    fn app_with(people: Vec<Person>) -> App {
        App::new(PeopleDirectory::new(people).unwrap(), &AppConfig::default())
    }

    fn family() -> Vec<Person> {
        vec![
            Person::new("Emma de Milliano", Sex::Female, "emma-de-milliano-1876"),
            Person::new("Emile Haverbeke", Sex::Male, "emile-haverbeke-1877"),
            Person::new("Clara Aernoudts", Sex::Female, "clara-aernoudts-1918"),
        ]
    }

    fn render(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Top-left cells of every occurrence of `text`
    fn occurrences(buf: &Buffer, text: &str) -> Vec<(u16, u16)> {
        let chars: Vec<String> = text.chars().map(|c| c.to_string()).collect();
        let area = buf.area;
        let mut found = Vec::new();
        for y in 0..area.height {
            for x in 0..area.width.saturating_sub(chars.len() as u16 - 1) {
                let hit = chars
                    .iter()
                    .enumerate()
                    .all(|(i, c)| buf[(x + i as u16, y)].symbol() == c.as_str());
                if hit {
                    found.push((x, y));
                }
            }
        }
        found
    }

    #[test]
    fn blurred_input_hides_the_panel() {
        let mut app = app_with(family());
        let buf = render(&mut app);

        assert_eq!(occurrences(&buf, PLACEHOLDER).len(), 1);
        assert!(occurrences(&buf, "Suggestions").is_empty());
        assert!(occurrences(&buf, NO_SUGGESTIONS).is_empty());
        assert!(app.hit_areas.regions(Hook::SuggestionItem).is_empty());
        assert!(app.hit_areas.regions(Hook::SuggestionsList).is_empty());
    }

    #[test]
    fn focused_input_lists_everyone_once() {
        let mut app = app_with(family());
        app.dropdown.focus_input();
        let buf = render(&mut app);

        for person in family() {
            assert_eq!(occurrences(&buf, &person.name).len(), 1, "{}", person.name);
        }
        let slugs: Vec<_> = app.hit_areas.items.iter().map(|(_, s)| s.as_str()).collect();
        assert_eq!(
            slugs,
            ["emma-de-milliano-1876", "emile-haverbeke-1877", "clara-aernoudts-1918"]
        );
        assert!(occurrences(&buf, NO_SUGGESTIONS).is_empty());
    }

    #[test]
    fn names_are_coloured_by_sex() {
        let mut app = app_with(family());
        app.dropdown.focus_input();
        let buf = render(&mut app);

        let (x, y) = occurrences(&buf, "Emma")[0];
        assert_eq!(buf[(x, y)].fg, Color::Red);
        let (x, y) = occurrences(&buf, "Emile")[0];
        assert_eq!(buf[(x, y)].fg, Color::Blue);
    }

    #[test]
    fn empty_results_show_alert_instead_of_list() {
        let mut app = app_with(family());
        let t0 = Instant::now();
        app.dropdown.focus_input();
        app.dropdown.set_text("nobody", t0);
        app.tick(t0 + Duration::from_millis(300));

        let buf = render(&mut app);

        assert_eq!(occurrences(&buf, NO_SUGGESTIONS).len(), 1);
        assert!(occurrences(&buf, "Suggestions").is_empty());
        assert_eq!(app.hit_areas.regions(Hook::NoSuggestionsMessage).len(), 1);
        assert!(app.hit_areas.items.is_empty());
    }

    #[test]
    fn typed_query_and_highlight_are_drawn() {
        let mut app = app_with(family());
        let t0 = Instant::now();
        app.dropdown.focus_input();
        app.dropdown.set_text("em", t0);
        app.tick(t0 + Duration::from_millis(300));
        app.dropdown.list.select_next(app.visible.len());

        let buf = render(&mut app);

        assert_eq!(occurrences(&buf, " em").len(), 1);
        let (x, y) = occurrences(&buf, "Emma")[0];
        assert_eq!(buf[(x, y)].bg, colors::HIGHLIGHT_BG);
        // "Emile" matches too; "Clara" does not
        assert_eq!(app.hit_areas.items.len(), 2);
        assert!(occurrences(&buf, "Clara").is_empty());
    }

    #[test]
    fn anna_example() {
        let mut app = app_with(vec![Person::new("Anna", Sex::Female, "anna")]);
        let t0 = Instant::now();
        app.dropdown.focus_input();
        app.dropdown.insert_char('a', t0);
        app.dropdown.insert_char('n', t0);
        app.tick(t0 + Duration::from_millis(300));

        assert_eq!(app.applied_query, "an");
        let buf = render(&mut app);

        let hits = occurrences(&buf, "Anna");
        assert_eq!(hits.len(), 1);
        assert_eq!(buf[hits[0]].fg, Color::Red);
        assert_eq!(app.hit_areas.items.len(), 1);
    }
}
