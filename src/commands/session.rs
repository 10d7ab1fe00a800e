//! The interactive branch list.
//!
//! Input is read in chunks from the raw-mode terminal. Each chunk is decoded
//! into keys and every key is handled to completion, including the repaint,
//! before the next one. Selecting an entry runs git and ends the session.

use crate::commands::{context::JumpContext, switch::switch_to_entry};
use crate::core::{
    config::{Config, RepositoryConfig},
    error::{JumpError, Result},
    keys::{decode, Key},
    list::{generate_list, quick_select_entries},
    output::{error_message, update_available_message},
    render::Renderer,
    state::{ListEntry, SessionState},
    update::{UpdateCheck, CURRENT_VERSION},
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, ErrorKind, Read, Write};

const INPUT_CHUNK_SIZE: usize = 1024;

/// What the session does after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// Keeps the terminal in raw mode while alive
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            log::warn!("Failed to restore the terminal mode: {e}");
        }
    }
}

pub struct Session<W: Write> {
    context: JumpContext,
    renderer: Renderer<W>,
}

impl<W: Write> Session<W> {
    pub fn new(context: JumpContext, renderer: Renderer<W>) -> Self {
        Self { context, renderer }
    }

    pub fn state(&self) -> &SessionState {
        &self.context.state
    }

    pub fn context(&self) -> &JumpContext {
        &self.context
    }

    pub fn into_renderer(self) -> Renderer<W> {
        self.renderer
    }

    /// Paint the list, then handle input until a key ends the session.
    /// End of input ends it with 0.
    pub fn run<R: Read>(&mut self, mut input: R) -> Result<i32> {
        self.renderer.view(&self.context.state)?;

        let mut buffer = [0u8; INPUT_CHUNK_SIZE];
        loop {
            let read = match input.read(&mut buffer) {
                Ok(0) => return Ok(0),
                Ok(read) => read,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if let Flow::Exit(status) = self.handle_input(&buffer[..read])? {
                return Ok(status);
            }
        }
    }

    pub fn handle_input(&mut self, data: &[u8]) -> Result<Flow> {
        for key in decode(data) {
            if let Flow::Exit(status) = self.handle_key(key)? {
                return Ok(Flow::Exit(status));
            }
        }
        Ok(Flow::Continue)
    }

    pub fn handle_key(&mut self, key: Key) -> Result<Flow> {
        let state = &mut self.context.state;

        let query_changed = match key {
            Key::CtrlC => {
                self.renderer.clear()?;
                self.renderer.flush()?;
                return Ok(Flow::Exit(0));
            }
            Key::Enter => {
                let entry = state.highlighted_entry().cloned();
                return self.select(entry);
            }
            Key::QuickSelect(index) => {
                let entry = quick_select_entries(&state.list)
                    .get(index)
                    .map(|entry| (*entry).clone());
                return self.select(entry);
            }
            Key::Up => return self.repaint_if(|state| state.highlight_previous()),
            Key::Down => return self.repaint_if(|state| state.highlight_next()),
            Key::Left => return self.repaint_if(|state| state.move_left()),
            Key::Right => return self.repaint_if(|state| state.move_right()),
            Key::Home => return self.repaint_if(|state| state.move_home()),
            Key::End => return self.repaint_if(|state| state.move_end()),
            Key::WordLeft => return self.repaint_if(|state| state.move_word_left()),
            Key::WordRight => return self.repaint_if(|state| state.move_word_right()),
            Key::Backspace => state.delete_backward(),
            Key::ForwardDelete => state.delete_forward(),
            Key::DeleteWordBackward => state.delete_word_backward(),
            Key::ClearQuery => state.clear_query(),
            Key::KillToEnd => state.kill_to_end(),
            Key::Text(text) => state.insert_text(&text),
            Key::Unknown(bytes) => {
                log::debug!("Ignoring key {bytes:02x?}");
                false
            }
        };

        if query_changed {
            state.list = generate_list(state);
            state.highlighted = 0;
            self.renderer.view(state)?;
        }

        Ok(Flow::Continue)
    }

    fn repaint_if(&mut self, action: impl FnOnce(&mut SessionState) -> bool) -> Result<Flow> {
        if action(&mut self.context.state) {
            self.renderer.view(&self.context.state)?;
        }
        Ok(Flow::Continue)
    }

    fn select(&mut self, entry: Option<ListEntry>) -> Result<Flow> {
        let Some(entry) = entry else {
            return Ok(Flow::Continue);
        };

        let status = switch_to_entry(&mut self.context, &entry)?;
        self.renderer.view(&self.context.state)?;
        Ok(Flow::Exit(status))
    }

    pub fn report_error(&mut self, error: &JumpError, repository: &RepositoryConfig) -> Result<()> {
        self.context
            .state
            .show_message(error_message(error, repository));
        self.renderer.view(&self.context.state)
    }

    /// Extend whatever is on screen with the new-version notice
    pub fn announce_update(&mut self, latest: &str, repository: &RepositoryConfig) -> Result<()> {
        let mut message = std::mem::take(&mut self.context.state.message);
        message.extend(update_available_message(CURRENT_VERSION, latest, repository));
        self.context.state.show_message(message);
        self.renderer.view(&self.context.state)
    }
}

/// `git jump` without arguments
pub fn execute_session(config: &Config) -> Result<i32> {
    let context = JumpContext::initialize()?;

    if !context.state.interactive {
        Renderer::plain(io::stdout()).view(&context.state)?;
        return Ok(0);
    }

    let update_check = config
        .update_check_enabled()
        .then(|| UpdateCheck::spawn(&config.repository));

    let _raw_mode = RawModeGuard::enable()?;
    let mut session = Session::new(context, Renderer::interactive(io::stdout()));

    let status = match session.run(io::stdin().lock()) {
        Ok(status) => status,
        Err(e) => {
            log::error!("Session failed: {e}");
            session.report_error(&e, &config.repository)?;
            1
        }
    };

    if let Some(latest) = update_check.and_then(|check| check.newer_version()) {
        session.announce_update(&latest, &config.repository)?;
    }

    Ok(status)
}
