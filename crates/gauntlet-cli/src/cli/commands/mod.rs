pub mod generate;
pub mod run;
pub mod validate;
pub mod verify;

use super::args::{Cli, Command};

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::run(args).await,
        Command::Generate(args) => generate::run(args),
        Command::Verify(args) => verify::run(&args),
        Command::Validate(args) => validate::run(&args),
    }
}
