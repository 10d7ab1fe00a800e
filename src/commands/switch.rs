use crate::commands::context::JumpContext;
use crate::core::{
    actions,
    error::Result,
    output::{no_match_message, staying_on_message},
    render::Renderer,
    state::{EntryKind, ListEntry},
};
use std::io;

/// Switch to a list entry and put the outcome into the message scene.
/// Returns the exit status: git's for a real switch, 0 for the head.
pub fn switch_to_entry(context: &mut JumpContext, entry: &ListEntry) -> Result<i32> {
    match &entry.kind {
        EntryKind::Head(head) => {
            log::debug!("Head selected, nothing to switch");
            context.state.show_message(staying_on_message(head.name()));
            Ok(0)
        }
        EntryKind::Branch(branch) => {
            let result = actions::switch_branch(&context.repo, &context.store, &[branch.name.clone()])?;
            context.state.show_message(result.message);
            Ok(result.status)
        }
    }
}

/// `git jump <switch args>`: try git first, then the best fuzzy match of the
/// first argument.
pub fn execute_switch(args: Vec<String>) -> Result<i32> {
    let mut context = JumpContext::initialize()?;
    let status = jump_to(&mut context, &args)?;

    let mut renderer = Renderer::plain(io::stdout());
    renderer.view(&context.state)?;

    Ok(status)
}

pub fn jump_to(context: &mut JumpContext, args: &[String]) -> Result<i32> {
    let result = actions::switch_branch(&context.repo, &context.store, args)?;

    if result.success() {
        context.state.show_message(result.message);
        return Ok(0);
    }

    let query = args.first().map(String::as_str).unwrap_or_default();
    log::debug!("git switch failed, searching for '{query}'");
    context.search(query);

    let best = context
        .state
        .list
        .first()
        .filter(|entry| entry.score > 0.0)
        .cloned();

    match best {
        Some(entry) => switch_to_entry(context, &entry),
        None => {
            context.state.show_message(no_match_message(query));
            Ok(1)
        }
    }
}
