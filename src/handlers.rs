use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};
use crate::ui;

/// Routes a key to the handler for whatever currently has the keyboard.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.help_visible {
        handle_help_key(app, key.code);
    } else if app.detail_open() {
        handle_detail_key(app, key.code);
    } else {
        handle_normal_key(app, key.code);
    }
}

pub fn handle_help_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => app.toggle_help(),
        KeyCode::Down | KeyCode::Char('j') => {
            let visible_height = app.help_visible_height;
            app.scroll_help_down(ui::get_help_total_lines(), visible_height);
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_help_up(),
        _ => {}
    }
}

pub fn handle_detail_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.dismiss_detail(),
        KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::Right => app.step_detail(true),
        KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::Left => app.step_detail(false),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(number) = c.to_digit(10) {
                app.copy_link(number as usize);
            }
        }
        _ => {}
    }
}

pub fn handle_normal_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Tab | KeyCode::BackTab => app.switch_focus(),
        KeyCode::Char('c') => app.clear_filters(),
        KeyCode::Char(c @ '1'..='9') => app.toggle_favorite_tag(c),
        KeyCode::Char('g') => app.jump_to_first(),
        KeyCode::Char('G') => app.jump_to_last(),
        _ => match app.focus {
            Focus::Tags => handle_tags_key(app, key),
            Focus::Projects => handle_projects_key(app, key),
        },
    }
}

fn handle_tags_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            app.move_down();
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_current_tag(),
        KeyCode::Esc => app.clear_filters(),
        _ => {}
    }
}

fn handle_projects_key(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => app.open_current_project(),
        KeyCode::Esc => app.clear_filters(),
        _ => {}
    }
}
