use std::process::ExitCode;

use cryptopulse_core::models::settings::Settings;
use cryptopulse_server::{serve, telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();

    match serve(Settings::default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "cryptopulse exited with an error");
            ExitCode::FAILURE
        }
    }
}
