mod arguments;
mod command;
mod console;
mod error;
mod log;
mod options;

use arguments::Arguments;
use clap::Parser;
use console::{Console, OsConsole};
use options::Options;
use std::process::exit;

#[tokio::main]
async fn main() {
    let arguments = Arguments::parse();
    let mut console = OsConsole::new();

    match command::execute(
        &arguments.command,
        &Options {
            debug: arguments.debug,
        },
        &mut console,
    )
    .await
    {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(error) => {
            let _ = console
                .write_stderr(
                    format!(
                        "{}{}\n",
                        arguments.log_prefix.as_deref().unwrap_or_default(),
                        error
                    )
                    .as_bytes(),
                )
                .await;

            exit(1)
        }
    }
}
