#![forbid(unsafe_code)]

use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use textwall::App;
use textwall::cli::Opts;
use textwall_runtime::Program;

/// Route tracing to `./textwall.log` when `TEXTWALL_LOG` is set.
///
/// Stdout and stderr belong to the alternate screen while the program
/// runs, so log output must go to a file to be readable at all.
fn init_tracing() {
    let Ok(filter) = std::env::var("TEXTWALL_LOG") else {
        return;
    };
    match File::create("textwall.log") {
        Ok(file) => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new(filter))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
        Err(e) => eprintln!("textwall: could not open textwall.log: {e}"),
    }
}

fn main() -> ExitCode {
    let opts = match Opts::parse() {
        Ok(opts) => opts,
        Err(code) => return code,
    };

    init_tracing();

    let app = App::new(opts.size_class);
    let result = Program::new(app).and_then(|mut program| program.run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("textwall: {e}");
            ExitCode::FAILURE
        }
    }
}
