//! Incremental terminal painting.
//!
//! The terminal is never cleared as a whole. Each paint starts by moving the
//! cursor back to the top-left of the previous paint and erasing everything
//! below it. How far to move up is not queried from the terminal: the engine
//! remembers on which row of its own output the cursor was left.
//!
//! # Public API
//! - [`Renderer`]: Paints scenes to any [`Write`] sink
//! - [`RenderState`]: The remembered cursor row

use crate::core::{
    error::Result,
    state::{Scene, SessionState},
    views,
};
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    terminal::{Clear, ClearType},
};
use std::io::Write;

/// Side effect of painting, kept apart from the session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    /// 1-based row of the cursor within the last paint
    pub cursor_y: usize,
}

impl Default for RenderState {
    fn default() -> Self {
        Self { cursor_y: 1 }
    }
}

pub struct Renderer<W: Write> {
    out: W,
    render_state: RenderState,
    newline: &'static str,
    interactive: bool,
}

impl<W: Write> Renderer<W> {
    /// Raw mode turns off output post-processing, so rows must end in `\r\n`
    pub fn interactive(out: W) -> Self {
        Self {
            out,
            render_state: RenderState::default(),
            newline: "\r\n",
            interactive: true,
        }
    }

    /// Plain line-feed output without erase sequences, for pipes
    pub fn plain(out: W) -> Self {
        Self {
            out,
            render_state: RenderState::default(),
            newline: "\n",
            interactive: false,
        }
    }

    pub fn render_state(&self) -> RenderState {
        self.render_state
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Paint the current scene of `state`
    pub fn view(&mut self, state: &SessionState) -> Result<()> {
        match state.scene {
            Scene::List if !state.interactive => {
                let lines = views::view_non_interactive_list(state);
                self.paint(&lines)?;
            }
            Scene::List => {
                let lines = views::view_list_scene(state);
                self.clear()?;
                self.paint(&lines)?;
                self.cursor_to(views::search_cursor_column(state), 1)?;
            }
            Scene::Message => return self.show_message(&state.message, state.columns),
        }

        self.out.flush()?;
        Ok(())
    }

    /// Paint the message scene without a session behind it
    pub fn show_message(&mut self, message: &[String], columns: usize) -> Result<()> {
        let lines = views::view_message(message, columns);
        self.clear()?;
        self.paint(&lines)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Move to the top-left of the previous paint and erase down from there
    pub fn clear(&mut self) -> Result<()> {
        if !self.interactive {
            return Ok(());
        }
        self.cursor_to(1, 1)?;
        queue!(self.out, Clear(ClearType::FromCursorDown))?;
        Ok(())
    }

    fn paint(&mut self, lines: &[String]) -> Result<()> {
        write!(self.out, "{}", lines.join(self.newline))?;
        self.render_state.cursor_y = lines.len();
        Ok(())
    }

    /// Move to 1-based column `x` and row `y` of the last paint. Rows can only
    /// be reached upwards from where the cursor was left.
    fn cursor_to(&mut self, x: usize, y: usize) -> Result<()> {
        let delta = self.render_state.cursor_y.saturating_sub(y);

        if delta > 0 {
            queue!(self.out, MoveUp(delta as u16))?;
        }
        queue!(self.out, MoveToColumn(x.saturating_sub(1) as u16))?;

        self.render_state.cursor_y = y;
        Ok(())
    }
}
