use std::process::ExitCode;

use fair_eval::{app_state::AppState, config::Config};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let state = match Config::from_env().and_then(AppState::new) {
        Ok(state) => state,
        Err(err) => {
            log::error!("[{}] {}", err.error_code(), err);
            return ExitCode::FAILURE;
        }
    };

    match state.run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("[{}] {}", err.error_code(), err);
            ExitCode::FAILURE
        }
    }
}
