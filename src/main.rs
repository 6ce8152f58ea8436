// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Turn on diagnostic logging (silent unless RUST_LOG asks for more)
// 2. Hand the real argument vector and standard streams to the CLI runner
// 3. Exit with the code it returns (0 = translated, 1 = usage or bad URL)
//
// Everything interesting lives in the library so it can be tested without
// spawning a process.
// =============================================================================

use ghlink2raw::{cli, logging};

fn main() {
    // Logging is optional; a failure here must not change what we print
    let _ = logging::init_logging();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    let result = cli::run_with_args(
        std::env::args_os(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            // Only reachable if writing to stdout/stderr failed
            eprintln!("Error: {}", e);
            cli::EXIT_FAILURE
        }
    };

    std::process::exit(exit_code);
}
