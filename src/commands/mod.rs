pub mod context;
pub mod delete;
pub mod help;
pub mod list;
pub mod new;
pub mod rename;
pub mod session;
pub mod switch;
pub mod version;

pub use delete::*;
pub use help::*;
pub use list::*;
pub use new::*;
pub use rename::*;
pub use session::*;
pub use switch::*;
pub use version::*;

use crate::core::{config::Config, error::Result};

/// What the command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Interactive,
    List,
    Version,
    Help,
    New(Vec<String>),
    Rename(Vec<String>),
    Delete(Vec<String>),
    /// Anything else goes to `git switch` as is
    Switch(Vec<String>),
}

impl Invocation {
    /// `new`, `rename` and `delete` are sub-commands only when followed by
    /// more arguments; on their own they are branch names.
    pub fn from_args(args: &[String]) -> Self {
        let Some((first, rest)) = args.split_first() else {
            return Invocation::Interactive;
        };

        match first.as_str() {
            "--list" | "-l" => Invocation::List,
            "--version" | "-v" => Invocation::Version,
            "--help" | "-h" => Invocation::Help,
            "new" if !rest.is_empty() => Invocation::New(rest.to_vec()),
            "rename" if !rest.is_empty() => Invocation::Rename(rest.to_vec()),
            "delete" if !rest.is_empty() => Invocation::Delete(rest.to_vec()),
            _ => Invocation::Switch(args.to_vec()),
        }
    }

    /// Run the invocation and return the process exit status
    pub fn execute(self, config: &Config) -> Result<i32> {
        log::debug!("Executing {self:?}");

        match self {
            Invocation::Interactive => execute_session(config),
            Invocation::List => execute_list(),
            Invocation::Version => execute_version(),
            Invocation::Help => execute_help(),
            Invocation::New(args) => execute_new(args),
            Invocation::Rename(args) => execute_rename(args),
            Invocation::Delete(names) => execute_delete(names),
            Invocation::Switch(args) => execute_switch(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_is_interactive() {
        assert_eq!(Invocation::from_args(&[]), Invocation::Interactive);
    }

    #[test]
    fn test_informational_flags() {
        assert_eq!(Invocation::from_args(&args(&["-l"])), Invocation::List);
        assert_eq!(Invocation::from_args(&args(&["--list"])), Invocation::List);
        assert_eq!(Invocation::from_args(&args(&["-v"])), Invocation::Version);
        assert_eq!(Invocation::from_args(&args(&["--version"])), Invocation::Version);
        assert_eq!(Invocation::from_args(&args(&["-h"])), Invocation::Help);
        assert_eq!(Invocation::from_args(&args(&["--help"])), Invocation::Help);
    }

    #[test]
    fn test_sub_commands_need_arguments() {
        assert_eq!(
            Invocation::from_args(&args(&["new", "feature/x"])),
            Invocation::New(args(&["feature/x"]))
        );
        assert_eq!(
            Invocation::from_args(&args(&["rename", "a", "b"])),
            Invocation::Rename(args(&["a", "b"]))
        );
        assert_eq!(
            Invocation::from_args(&args(&["delete", "a", "b"])),
            Invocation::Delete(args(&["a", "b"]))
        );
        assert_eq!(
            Invocation::from_args(&args(&["new"])),
            Invocation::Switch(args(&["new"]))
        );
        assert_eq!(
            Invocation::from_args(&args(&["delete"])),
            Invocation::Switch(args(&["delete"]))
        );
    }

    #[test]
    fn test_everything_else_is_switch() {
        assert_eq!(
            Invocation::from_args(&args(&["--detach", "main"])),
            Invocation::Switch(args(&["--detach", "main"]))
        );
        assert_eq!(
            Invocation::from_args(&args(&["feat"])),
            Invocation::Switch(args(&["feat"]))
        );
    }
}
