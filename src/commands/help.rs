use crate::commands::context::terminal_size;
use crate::core::{error::Result, templates::render_template};
use std::io::{self, Write};

const HELP_TEMPLATE: &str = include_str!("../help.txt");

pub fn execute_help() -> Result<i32> {
    let (_, columns) = terminal_size();
    write!(io::stdout(), "{}", render_template(HELP_TEMPLATE, columns))?;
    Ok(0)
}
