use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use run::CommandOutcome;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let outcome = run::run(args)?;
    report::print(&outcome);

    Ok(status_of(&outcome))
}

fn status_of(outcome: &CommandOutcome) -> ExitStatus {
    match outcome {
        CommandOutcome::Sync(result) if result.failure_count() > 0 => ExitStatus::Failure,
        _ => ExitStatus::Success,
    }
}
