use crate::commands::context::JumpContext;
use crate::core::{actions, error::Result, render::Renderer};
use std::io;

/// `git jump delete <branch names...>`
pub fn execute_delete(names: Vec<String>) -> Result<i32> {
    let mut context = JumpContext::initialize()?;

    let result = actions::delete_branches(&context.repo, &context.store, &names)?;
    context.state.show_message(result.message);

    Renderer::plain(io::stdout()).view(&context.state)?;
    Ok(result.status)
}
