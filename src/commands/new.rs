use crate::commands::context::JumpContext;
use crate::core::{actions, error::Result, render::Renderer};
use std::io;

/// `git jump new <branch> [start point...]`
pub fn execute_new(args: Vec<String>) -> Result<i32> {
    let mut context = JumpContext::initialize()?;

    let result = actions::create_branch(&context.repo, &context.store, &args)?;
    context.state.show_message(result.message);

    Renderer::plain(io::stdout()).view(&context.state)?;
    Ok(result.status)
}
