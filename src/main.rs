use std::io::{stdin, stdout};

use ray_chess::config::AppConfig;
use ray_chess::shell::Shell;

fn main() {
    // Initialize tracing (structured logging).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ray_chess=info".into()),
        )
        .init();

    let config = AppConfig::from_env();

    tracing::info!("ray-chess v{} starting", env!("CARGO_PKG_VERSION"));

    let mut shell = match Shell::new(config) {
        Ok(shell) => shell,
        Err(err) => {
            eprintln!("invalid CHESS_START_FEN: {err}");
            std::process::exit(2);
        }
    };

    let input = stdin();
    let mut output = stdout();
    if let Err(err) = shell.run(input.lock(), &mut output) {
        eprintln!("shell i/o error: {err}");
        std::process::exit(1);
    }
}
