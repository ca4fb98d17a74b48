use std::process::ExitCode;

fn main() -> ExitCode {
    match voxman::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
