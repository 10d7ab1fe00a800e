//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("You're not in Git repo.")
}

pub fn wrong_format() -> impl Predicate<str> {
    predicates::str::contains("Wrong Format.")
}

/// First line of the message block of a git invocation
pub fn git_command_line(command: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("‣ git {command}"))
}
