use flagcheck::arguments::{self, Action, USAGE};
use flagcheck::error;
use flagcheck::report;

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("FLAGCHECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cmd = match arguments::parse_args() {
        Ok(Action::Help) => {
            print!("{}", USAGE);
            return;
        }
        Ok(Action::Version) => {
            println!("flagcheck {}", arguments::tool_version());
            return;
        }
        Ok(Action::Run(cmd)) => cmd,
        Err(e) => error::fatal(&e),
    };

    tracing::info!(files = cmd.files.len(), "resolved command line");
    print!("{}", report::render(&cmd));
}
