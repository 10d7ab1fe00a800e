use crate::commands::context::JumpContext;
use crate::core::{error::Result, render::Renderer};
use std::io;

/// `git jump --list`: the ranked names, one per line
pub fn execute_list() -> Result<i32> {
    let mut context = JumpContext::initialize()?;
    context.state.interactive = false;

    Renderer::plain(io::stdout()).view(&context.state)?;
    Ok(0)
}
