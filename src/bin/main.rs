use std::process::ExitCode;

use coregraph::{reset_stdout, start_coregraph};

fn main() -> ExitCode {
    let mut run_error_hook = false;

    match start_coregraph(&mut run_error_hook) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if run_error_hook {
                reset_stdout();
            }
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
