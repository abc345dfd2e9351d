//! Input handling — maps key/mouse events to state mutations.
//!
//! Tab input goes through the widget's input operations with a callback that
//! records the requested label.  The host then applies it via
//! [`AppState::select_group`].

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::selection;

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // Digits jump straight to a tab (1-based).
    if let KeyCode::Char(c @ '1'..='9') = key.code {
        if key.modifiers.is_empty() {
            let idx = c as usize - '1' as usize;
            let mut requested = None;
            state
                .tab_state
                .activate(&state.groups, idx, |label| requested = Some(label.to_string()));
            apply_request(state, requested);
            return;
        }
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::PrevTab => step_selection(state, -1),
        Action::NextTab => step_selection(state, 1),
    }
}

/// Process a mouse event.  Only left clicks on the tab row do anything.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let mut requested = None;
    state.tab_state.click(&state.groups, mouse.column, mouse.row, |label| {
        requested = Some(label.to_string());
    });
    apply_request(state, requested);
}

fn step_selection(state: &mut AppState, step: isize) {
    let requested = selection::neighbour(&state.groups, &state.selected_group, step)
        .map(str::to_string);
    apply_request(state, requested);
}

fn apply_request(state: &mut AppState, requested: Option<String>) {
    if let Some(label) = requested {
        state.select_group(&label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::ui::photos_tab::PhotosTab;
    use crossterm::event::KeyEventState;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn render_tabs(state: &mut AppState) {
        let area = Rect::new(0, 10, 40, PhotosTab::HEIGHT);
        let mut buf = Buffer::empty(area);
        PhotosTab::new(&state.groups, &state.selected_group).render(
            area,
            &mut buf,
            &mut state.tab_state,
        );
    }

    #[test]
    fn arrows_cycle_through_groups() {
        let mut state = AppState::new(AppConfig::default());
        handle_key(&mut state, press(KeyCode::Right));
        assert_eq!(state.selected_group, "neon city");
        handle_key(&mut state, press(KeyCode::Right));
        assert_eq!(state.selected_group, "sports");
        handle_key(&mut state, press(KeyCode::Left));
        assert_eq!(state.selected_group, "neon city");
    }

    #[test]
    fn digits_jump_to_tab() {
        let mut state = AppState::new(AppConfig::default());
        handle_key(&mut state, press(KeyCode::Char('2')));
        assert_eq!(state.selected_group, "portrait");
        handle_key(&mut state, press(KeyCode::Char('9')));
        assert_eq!(state.selected_group, "portrait");
    }

    #[test]
    fn key_release_is_ignored() {
        let mut state = AppState::new(AppConfig::default());
        let release = KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut state, release);
        assert_eq!(state.selected_group, "b/w");
    }

    #[test]
    fn quit_bindings() {
        let mut state = AppState::new(AppConfig::default());
        handle_key(&mut state, press(KeyCode::Char('q')));
        assert!(state.should_quit);

        let mut state = AppState::new(AppConfig::default());
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(state.should_quit);
    }

    #[test]
    fn click_on_tab_selects_group() {
        let mut state = AppState::new(AppConfig::default());
        render_tabs(&mut state);

        handle_mouse(&mut state, click(4, 11));
        assert_eq!(state.selected_group, "sports");

        render_tabs(&mut state);
        assert_eq!(state.tab_state.selected_index(), Some(0));
        assert_eq!(state.tab_state.indicator_target(), Some(5.0));
        assert_eq!(state.tab_state.indicator_position(), Some(25.0));
    }

    #[test]
    fn click_outside_tab_row_does_nothing() {
        let mut state = AppState::new(AppConfig::default());
        render_tabs(&mut state);
        handle_mouse(&mut state, click(4, 2));
        assert_eq!(state.selected_group, "b/w");

        let mut right = click(4, 11);
        right.kind = MouseEventKind::Down(MouseButton::Right);
        handle_mouse(&mut state, right);
        assert_eq!(state.selected_group, "b/w");
    }
}
