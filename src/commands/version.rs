use crate::core::{error::Result, update::CURRENT_VERSION};
use std::io::{self, Write};

pub fn execute_version() -> Result<i32> {
    writeln!(io::stdout(), "{CURRENT_VERSION}")?;
    Ok(0)
}
