use brle::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	match cli::run() {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {}", e);
			ExitCode::FAILURE
		}
	}
}
