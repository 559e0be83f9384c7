use crossword_game::{MoveDirection, is_valid_guess};
use eframe::egui::{Event, InputState, Key, Modifiers};

use crate::action::{Action, ActionRequestQueue, ModalKind};

struct Trigger {
    key: Key,
    command: bool,
    shift: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool, shift: bool) -> Self {
        Self {
            key,
            command,
            shift,
        }
    }

    fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        // `modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
        self.key == key && modifiers.command == self.command && modifiers.shift == self.shift
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn new(trigger: Trigger, action: Action) -> Self {
        Self { trigger, action }
    }

    const fn command_shift(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, true, true), action)
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, false, false), action)
    }
}

const SHORTCUTS: [Shortcut; 10] = [
    Shortcut::command_shift(
        Key::Backspace,
        Action::OpenModal(ModalKind::ClearGridConfirm),
    ),
    Shortcut::plain(Key::ArrowUp, Action::MoveSelection(MoveDirection::Up)),
    Shortcut::plain(Key::ArrowDown, Action::MoveSelection(MoveDirection::Down)),
    Shortcut::plain(Key::ArrowLeft, Action::MoveSelection(MoveDirection::Left)),
    Shortcut::plain(Key::ArrowRight, Action::MoveSelection(MoveDirection::Right)),
    Shortcut::plain(Key::Tab, Action::ToggleDirection),
    Shortcut::plain(Key::Space, Action::ToggleDirection),
    Shortcut::plain(Key::Escape, Action::ClearSelection),
    Shortcut::plain(Key::Delete, Action::ClearCell),
    Shortcut::plain(Key::Backspace, Action::Backspace),
];

fn shortcut_action(key: Key, modifiers: Modifiers) -> Option<Action> {
    SHORTCUTS
        .iter()
        .find(|shortcut| shortcut.trigger.matches(key, modifiers))
        .map(|shortcut| shortcut.action.clone())
}

/// Translates this frame's key and text events into actions, in arrival order.
pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    for event in &i.events {
        match event {
            Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => {
                if let Some(action) = shortcut_action(*key, *modifiers) {
                    action_queue.request(action);
                }
            }
            Event::Text(text) if !i.modifiers.command => {
                for ch in text.chars().filter(|&ch| is_valid_guess(ch)) {
                    action_queue.request(Action::InputChar(ch));
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Context, RawInput};

    use super::*;

    fn key(key: Key, modifiers: Modifiers) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    fn text(s: &str) -> Event {
        Event::Text(s.to_owned())
    }

    fn actions_for(events: Vec<Event>) -> Vec<Action> {
        let ctx = Context::default();
        let mut action_queue = ActionRequestQueue::default();
        let _ = ctx.run(
            RawInput {
                events,
                ..Default::default()
            },
            |ctx| ctx.input(|i| handle_input(i, &mut action_queue)),
        );
        action_queue.take_all()
    }

    #[test]
    fn test_text_and_keys_keep_arrival_order() {
        let actions = actions_for(vec![
            text("a"),
            key(Key::ArrowRight, Modifiers::NONE),
            text("b"),
        ]);
        assert_eq!(
            actions,
            [
                Action::InputChar('a'),
                Action::MoveSelection(MoveDirection::Right),
                Action::InputChar('b'),
            ]
        );
    }

    #[test]
    fn test_backspace_between_letters() {
        let actions = actions_for(vec![
            text("xy"),
            key(Key::Backspace, Modifiers::NONE),
            text("z"),
        ]);
        assert_eq!(
            actions,
            [
                Action::InputChar('x'),
                Action::InputChar('y'),
                Action::Backspace,
                Action::InputChar('z'),
            ]
        );
    }

    #[test]
    fn test_modifiers_select_shortcut() {
        let clear_all = Modifiers::COMMAND | Modifiers::SHIFT;
        assert_eq!(
            actions_for(vec![key(Key::Backspace, clear_all)]),
            [Action::OpenModal(ModalKind::ClearGridConfirm)]
        );
        assert!(actions_for(vec![key(Key::ArrowUp, Modifiers::SHIFT)]).is_empty());
    }

    #[test]
    fn test_invalid_text_and_key_releases_are_ignored() {
        let release = Event::Key {
            key: Key::Escape,
            physical_key: None,
            pressed: false,
            repeat: false,
            modifiers: Modifiers::NONE,
        };
        assert!(actions_for(vec![text(" -!"), release]).is_empty());
    }
}
