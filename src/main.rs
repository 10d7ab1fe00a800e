use clap::Parser;
use git_jump::commands::{context::terminal_size, Invocation};
use git_jump::core::{
    config::{Config, RepositoryConfig},
    error::{JumpError, Result},
    output::error_message,
    render::Renderer,
};
use std::io;

/// Log filter variable, logging is off unless it is set
const LOG_ENV: &str = "GIT_JUMP_LOG";

#[derive(Parser)]
#[command(name = "git-jump")]
#[command(about = "Navigate git branches with fuzzy search and recency ranking")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Sub-command or `git switch` arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "off")).init();

    let status = match run(cli.args) {
        Ok(status) => status,
        Err((e, repository)) => {
            log::error!("{e}");
            report_error(&e, &repository);
            1
        }
    };

    std::process::exit(status);
}

fn run(args: Vec<String>) -> std::result::Result<i32, (JumpError, RepositoryConfig)> {
    let config = Config::load().map_err(|e| (e, RepositoryConfig::default()))?;
    let invocation = Invocation::from_args(&args);

    invocation
        .execute(&config)
        .map_err(|e| (e, config.repository.clone()))
}

fn report_error(error: &JumpError, repository: &RepositoryConfig) {
    let (_, columns) = terminal_size();
    let result: Result<()> =
        Renderer::plain(io::stdout()).show_message(&error_message(error, repository), columns);

    if let Err(e) = result {
        eprintln!("{e}");
    }
}
