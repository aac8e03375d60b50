mod cli;
mod commands;
mod errors;
mod installers;
mod libs;
mod reporter;
mod schema;

use clap::Parser;
use cli::args::Cli;
use errors::InstallError;
use schema::InstallConfig;

fn main() {
    let cli = Cli::parse();
    reporter::init(cli.debug);

    let install_config: InstallConfig = match cli.into_config() {
        Ok(install_config) => install_config,
        Err(err) => fail(err),
    };

    if let Err(err) = commands::install::run(&install_config) {
        fail(err);
    }
}

/// The single top-level failure handler: prints the red error line (plus
/// guidance where there is any) and terminates the process. No component
/// below this prints its own errors.
fn fail(err: InstallError) -> ! {
    crate::report_error!("{err}");
    if matches!(err, InstallError::HostNotPresent) {
        crate::report_notice!(
            "Please install argos from https://github.com/p-e-w/argos (or pass arg '-a' to skip this check)"
        );
    }
    std::process::exit(1);
}
