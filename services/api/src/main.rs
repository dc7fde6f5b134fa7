use std::process::ExitCode;
use travel_safety_api::run;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("travel-safety-api: {err}");
            ExitCode::FAILURE
        }
    }
}
