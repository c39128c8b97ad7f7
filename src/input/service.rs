//! High-level input service.
//!
//! Consumes coalesced raw events, runs the filter-editing state machine, and yields
//! domain-level `InputAction`s that the application loop consumes.

use crate::error::Result;
use crate::filter::{FilterField, FilterState};
use crate::input::raw::{RawInputCollector, RawInputEvent, ScrollDirection};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// High-level input actions emitted by the state machine/service.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// The text of a filter input changed; carries the full, untrimmed text.
    FieldEdited { field: FilterField, text: String },
    /// Keyboard focus moved to another filter input.
    FocusChanged(FilterField),
    Scroll {
        direction: ScrollDirection,
        lines: u64,
    },
    PageUp,
    PageDown,
    GoToStart,
    GoToEnd,
    Resize {
        width: u16,
        height: u16,
    },
    Quit,
    NoAction,
    InvalidInput,
}

/// Tracks the focused filter input and the text typed into each one.
pub struct InputStateMachine {
    focus: FilterField,
    buffers: FilterState,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self {
            focus: FilterField::Global,
            buffers: FilterState::new(),
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        let plain = !key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => InputAction::Quit,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.edit(String::clear),
            (KeyCode::Char(ch), _) if plain && !ch.is_control() => self.edit(|text| text.push(ch)),
            (KeyCode::Backspace, _) => self.edit(|text| {
                text.pop();
            }),
            (KeyCode::Tab, _) => {
                self.focus = self.focus.next();
                InputAction::FocusChanged(self.focus)
            }
            (KeyCode::BackTab, _) => {
                self.focus = self.focus.previous();
                InputAction::FocusChanged(self.focus)
            }
            (KeyCode::Down, _) => InputAction::Scroll {
                direction: ScrollDirection::Down,
                lines: 1,
            },
            (KeyCode::Up, _) => InputAction::Scroll {
                direction: ScrollDirection::Up,
                lines: 1,
            },
            (KeyCode::PageDown, _) => InputAction::PageDown,
            (KeyCode::PageUp, _) => InputAction::PageUp,
            (KeyCode::Home, _) => InputAction::GoToStart,
            (KeyCode::End, _) => InputAction::GoToEnd,
            _ => InputAction::InvalidInput,
        }
    }

    /// Apply `change` to the focused buffer, emitting an edit only when the
    /// text actually changed.
    fn edit(&mut self, change: impl FnOnce(&mut String)) -> InputAction {
        let mut text = self.buffers.get(self.focus).to_string();
        change(&mut text);
        if text == self.buffers.get(self.focus) {
            return InputAction::NoAction;
        }

        self.buffers.set(self.focus, text.clone());
        InputAction::FieldEdited {
            field: self.focus,
            text,
        }
    }

    pub fn buffer(&self, field: FilterField) -> &str {
        self.buffers.get(field)
    }

    pub fn focus(&self) -> FilterField {
        self.focus
    }
}

impl Default for InputStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Service responsible for producing high-level `InputAction`s from terminal events.
pub struct InputService {
    state_machine: InputStateMachine,
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            state_machine: InputStateMachine::new(),
            raw_input: RawInputCollector::new(),
        }
    }

    pub fn poll_actions(&mut self, timeout: Option<Duration>) -> Result<Vec<InputAction>> {
        let mut actions = Vec::new();

        if let Some(raw_event) = self.raw_input.poll_event(timeout)? {
            actions.extend(self.process_raw_event(raw_event));

            while let Some(extra_event) = self.raw_input.try_flush() {
                actions.extend(self.process_raw_event(extra_event));
            }
        }

        Ok(actions)
    }

    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        self.raw_input.process_event(event);
        let mut actions = Vec::new();
        while let Some(raw_event) = self.raw_input.try_flush() {
            actions.extend(self.process_raw_event(raw_event));
        }
        actions
    }

    fn process_raw_event(&mut self, event: RawInputEvent) -> Option<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => self.state_machine.handle_key_event(key_event),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
            RawInputEvent::Scroll { direction, lines } => InputAction::Scroll { direction, lines },
        };

        match action {
            InputAction::NoAction | InputAction::InvalidInput => None,
            _ => Some(action),
        }
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a blocking thread that polls for terminal events and forwards actions to the app loop.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut service = InputService::new();
        while !shutdown.load(Ordering::SeqCst) {
            match service.poll_actions(Some(poll_interval)) {
                Ok(actions) => {
                    for action in actions {
                        if tx.send(action).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    log::error!("input thread error: {}", err);
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(sm: &mut InputStateMachine, text: &str) -> Vec<InputAction> {
        text.chars()
            .map(|ch| sm.handle_key_event(key(KeyCode::Char(ch))))
            .collect()
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut sm = InputStateMachine::new();
        assert_eq!(sm.focus(), FilterField::Global);

        let actions = type_text(&mut sm, "ma");
        assert_eq!(
            actions,
            vec![
                InputAction::FieldEdited {
                    field: FilterField::Global,
                    text: "m".to_string()
                },
                InputAction::FieldEdited {
                    field: FilterField::Global,
                    text: "ma".to_string()
                },
            ]
        );
        assert_eq!(sm.buffer(FilterField::Global), "ma");
    }

    #[test]
    fn edits_carry_untrimmed_text() {
        let mut sm = InputStateMachine::new();
        let actions = type_text(&mut sm, " 3");
        assert_eq!(
            actions.last(),
            Some(&InputAction::FieldEdited {
                field: FilterField::Global,
                text: " 3".to_string()
            })
        );
    }

    #[test]
    fn shifted_characters_are_text() {
        let mut sm = InputStateMachine::new();
        let action = sm.handle_key_event(KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT));
        assert_eq!(
            action,
            InputAction::FieldEdited {
                field: FilterField::Global,
                text: "M".to_string()
            }
        );
    }

    #[test]
    fn tab_cycles_focus_and_buffers_are_independent() {
        let mut sm = InputStateMachine::new();
        type_text(&mut sm, "x");

        assert_eq!(
            sm.handle_key_event(key(KeyCode::Tab)),
            InputAction::FocusChanged(FilterField::Name)
        );
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Tab)),
            InputAction::FocusChanged(FilterField::Age)
        );
        type_text(&mut sm, "30");
        assert_eq!(sm.buffer(FilterField::Age), "30");
        assert_eq!(sm.buffer(FilterField::Global), "x");

        assert_eq!(
            sm.handle_key_event(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            InputAction::FocusChanged(FilterField::Name)
        );
    }

    #[test]
    fn backspace_and_clear() {
        let mut sm = InputStateMachine::new();
        type_text(&mut sm, "ab");

        assert_eq!(
            sm.handle_key_event(key(KeyCode::Backspace)),
            InputAction::FieldEdited {
                field: FilterField::Global,
                text: "a".to_string()
            }
        );
        assert_eq!(
            sm.handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            InputAction::FieldEdited {
                field: FilterField::Global,
                text: String::new()
            }
        );
        // Nothing left to delete: no change, no event.
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Backspace)),
            InputAction::NoAction
        );
    }

    #[test]
    fn quit_and_navigation_keys() {
        let mut sm = InputStateMachine::new();
        assert_eq!(sm.handle_key_event(key(KeyCode::Esc)), InputAction::Quit);
        assert_eq!(
            sm.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
        assert_eq!(
            sm.handle_key_event(key(KeyCode::PageDown)),
            InputAction::PageDown
        );
        assert_eq!(sm.handle_key_event(key(KeyCode::Home)), InputAction::GoToStart);
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Down)),
            InputAction::Scroll {
                direction: ScrollDirection::Down,
                lines: 1
            }
        );
        assert_eq!(
            sm.handle_key_event(key(KeyCode::F(5))),
            InputAction::InvalidInput
        );
    }

    #[test]
    fn service_filters_out_no_ops() {
        let mut service = InputService::new();
        assert!(service
            .process_event(Event::Key(key(KeyCode::Backspace)))
            .is_empty());
        assert!(service.process_event(Event::Key(key(KeyCode::F(2)))).is_empty());
        assert_eq!(
            service.process_event(Event::Key(key(KeyCode::Char('z')))),
            vec![InputAction::FieldEdited {
                field: FilterField::Global,
                text: "z".to_string()
            }]
        );
    }

    #[test]
    fn mouse_scroll_is_coalesced_before_resize() {
        let mut service = InputService {
            state_machine: InputStateMachine::new(),
            raw_input: RawInputCollector::with_window(Duration::from_secs(60)),
        };
        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert!(service.process_event(wheel.clone()).is_empty());
        assert!(service.process_event(wheel).is_empty());

        let actions = service.process_event(Event::Resize(100, 30));
        assert_eq!(
            actions,
            vec![
                InputAction::Scroll {
                    direction: ScrollDirection::Down,
                    lines: 6,
                },
                InputAction::Resize {
                    width: 100,
                    height: 30,
                },
            ]
        );
    }
}
