//! Terminal application: event loop and key routing

use crate::editor::EditorBuffer;
use crate::input::{chord_from_key, intent_for, EditOp, Intent};
use crate::views;
use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;
use std::time::Duration;
use tracing::{debug, info};
use versevibe_core::workflow::{AppEvent, Command, WorkflowController};

/// Spinner redraw interval while work is in flight
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// One turn of the event loop
enum Step {
    Terminal(Event),
    App(AppEvent),
    Tick,
    Quit,
}

pub struct App {
    controller: WorkflowController,
    editor: EditorBuffer,
    spinner: usize,
    should_quit: bool,
}

impl App {
    pub fn new(controller: WorkflowController) -> Self {
        let mut editor = EditorBuffer::new();
        editor.set_text(controller.state().text());
        Self {
            controller,
            editor,
            spinner: 0,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &WorkflowController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut WorkflowController {
        &mut self.controller
    }

    pub fn editor(&self) -> &EditorBuffer {
        &self.editor
    }

    pub fn spinner(&self) -> usize {
        self.spinner
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run until the user quits
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(TICK_INTERVAL);

        loop {
            terminal.draw(|frame| views::render(frame, self))?;

            if self.should_quit {
                break;
            }

            let step = tokio::select! {
                event = events.next() => match event {
                    Some(Ok(event)) => Step::Terminal(event),
                    Some(Err(e)) => return Err(e),
                    None => Step::Quit,
                },
                event = self.controller.next_event() => match event {
                    Some(event) => Step::App(event),
                    None => Step::Quit,
                },
                _ = ticker.tick() => Step::Tick,
            };

            match step {
                Step::Terminal(Event::Key(key)) => self.handle_key_event(key),
                Step::Terminal(_) => {}
                Step::App(event) => {
                    self.controller.apply(event);
                    self.controller.try_pump();
                    self.sync_editor();
                }
                Step::Tick => {
                    self.spinner = self.spinner.wrapping_add(1);
                    self.controller.sweep_toasts();
                }
                Step::Quit => self.should_quit = true,
            }
        }

        info!("Leaving event loop");
        Ok(())
    }

    /// Route one key press: core shortcuts first, then front-end bindings
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let Some(chord) = chord_from_key(&key) else {
            return;
        };

        if self.controller.handle_key(&chord) {
            return;
        }

        match intent_for(&chord, self.controller.state().panel()) {
            Some(Intent::Quit) => self.should_quit = true,
            Some(Intent::Run(command)) => {
                self.controller.dispatch(command);
                self.sync_editor();
            }
            Some(Intent::DismissNewestToast) => {
                if let Some(id) = self.controller.toasts().newest().map(|t| t.id()) {
                    self.controller.dispatch(Command::DismissToast(id));
                }
            }
            Some(Intent::Edit(op)) => self.edit(op),
            None => debug!("Unbound key {}", chord),
        }
    }

    fn edit(&mut self, op: EditOp) {
        let changed = match op {
            EditOp::Insert(c) => {
                self.editor.insert(c);
                true
            }
            EditOp::Newline => {
                self.editor.insert('\n');
                true
            }
            EditOp::Backspace => self.editor.backspace(),
            EditOp::Delete => self.editor.delete(),
            EditOp::Left => {
                self.editor.move_left();
                false
            }
            EditOp::Right => {
                self.editor.move_right();
                false
            }
            EditOp::Home => {
                self.editor.move_home();
                false
            }
            EditOp::End => {
                self.editor.move_end();
                false
            }
        };

        if changed {
            self.controller
                .dispatch(Command::SetText(self.editor.text().to_string()));
        }
    }

    /// Pull text replaced by the controller (clear, history load) into the buffer
    fn sync_editor(&mut self) {
        if self.controller.state().text() != self.editor.text() {
            self.editor.set_text(self.controller.state().text());
        }
    }
}
