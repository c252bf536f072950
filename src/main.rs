use std::process::ExitCode;

fn main() -> ExitCode {
    match lessonart_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(code = err.code(), "{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
