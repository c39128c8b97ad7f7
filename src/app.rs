//! Application orchestration layer
//!
//! Wires the input thread, the view controller and the renderer together. Actions are
//! handled one at a time and each runs to completion (edit, recompute, redraw) before
//! the next one is taken off the channel.

use crate::config::Config;
use crate::error::Result;
use crate::input::{spawn_input_thread, InputAction, ScrollDirection};
use crate::records::Record;
use crate::render::ui::{UIRenderer, ViewState};
use crate::view::TableView;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long the input thread blocks on each terminal poll.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

const KEY_HINT: &str = "Tab: next filter, Ctrl-U: clear, Esc: quit";

/// Application orchestrator - owns the view controller and the frame it draws from
pub struct Application {
    view: TableView,
    view_state: ViewState,
    ui_renderer: Box<dyn UIRenderer>,
}

impl Application {
    pub fn new(records: Vec<Record>, config: &Config, ui_renderer: Box<dyn UIRenderer>) -> Self {
        let view = TableView::new(records);
        let mut view_state = ViewState::new(
            view.total_count(),
            config.labels.clone(),
            config.placeholder.clone(),
            0,
            0,
        );
        view_state.hints = config.hints.clone();
        view_state.status_line.set_message(KEY_HINT.to_string());

        Self {
            view,
            view_state,
            ui_renderer,
        }
    }

    /// Run the interactive loop until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;

        let (action_tx, mut action_rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_thread =
            spawn_input_thread(action_tx, Arc::clone(&shutdown), INPUT_POLL_INTERVAL);

        let result = self.event_loop(&mut action_rx).await;

        shutdown.store(true, Ordering::SeqCst);
        if input_thread.join().is_err() {
            log::error!("input thread panicked");
        }
        self.ui_renderer.cleanup()?;
        result
    }

    async fn event_loop(
        &mut self,
        actions: &mut mpsc::UnboundedReceiver<InputAction>,
    ) -> Result<()> {
        self.start()?;
        while let Some(action) = actions.recv().await {
            if !self.handle_action(action)? {
                break;
            }
        }
        Ok(())
    }

    /// Size the view to the terminal, compute the initial rows and draw them.
    pub fn start(&mut self) -> Result<()> {
        let (width, height) = self.ui_renderer.get_terminal_size()?;
        self.view_state.update_terminal_size(width, height);
        self.view.recompute(&mut self.view_state);
        self.ui_renderer.render(&self.view_state)
    }

    /// Execute one action and redraw. Returns false when the app should quit.
    pub fn handle_action(&mut self, action: InputAction) -> Result<bool> {
        if !self.execute_action(action) {
            return Ok(false);
        }
        self.ui_renderer.render(&self.view_state)?;
        Ok(true)
    }

    fn execute_action(&mut self, action: InputAction) -> bool {
        let view_state = &mut self.view_state;
        match action {
            InputAction::Quit => return false,
            InputAction::FieldEdited { field, text } => {
                view_state.set_input(field, &text);
                self.view.on_field_input(field, &text, view_state);
            }
            InputAction::FocusChanged(field) => view_state.focus = field,
            InputAction::Scroll { direction, lines } => {
                let lines = usize::try_from(lines).unwrap_or(usize::MAX);
                match direction {
                    ScrollDirection::Up => view_state.scroll_up(lines),
                    ScrollDirection::Down => view_state.scroll_down(lines),
                }
            }
            InputAction::PageUp => view_state.scroll_up(view_state.lines_per_page()),
            InputAction::PageDown => view_state.scroll_down(view_state.lines_per_page()),
            InputAction::GoToStart => view_state.scroll_to_start(),
            InputAction::GoToEnd => view_state.scroll_to_end(),
            InputAction::Resize { width, height } => {
                view_state.update_terminal_size(width, height);
            }
            InputAction::NoAction | InputAction::InvalidInput => {}
        }
        true
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }
}
