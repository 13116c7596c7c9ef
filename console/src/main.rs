// console/src/main.rs

mod session;

use session::Session;

use std::io;
use std::process::ExitCode;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    // Diagnostics go to stderr so the transcript on stdout stays clean.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {}", e);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Something wrong.");
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("👁️  IRIS CODE MATCHER");
    println!("{}", "=".repeat(70));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
