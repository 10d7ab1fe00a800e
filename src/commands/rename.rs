use crate::commands::context::JumpContext;
use crate::core::{
    actions,
    colors::bold,
    error::{JumpError, Result},
    render::Renderer,
};
use std::io;

/// `git jump rename <old branch name> <new branch name>`
pub fn execute_rename(args: Vec<String>) -> Result<i32> {
    let [old_name, new_name, ..] = args.as_slice() else {
        return Err(JumpError::input(
            "Wrong Format.",
            format!(
                "You should specify both current and new branch name, {}.",
                bold("git jump rename <old branch name> <new branch name>")
            ),
        ));
    };

    let mut context = JumpContext::initialize()?;

    let result = actions::rename_branch(&context.repo, &context.store, old_name, new_name)?;
    context.state.show_message(result.message);

    Renderer::plain(io::stdout()).view(&context.state)?;
    Ok(result.status)
}
