//! Hare Chase entry point

use std::process::ExitCode;

use hare_chase::Settings;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Hare Chase starting...");

    let settings = Settings::from_env();
    log::debug!("Settings: {:?}", settings);

    let seed: u64 = rand::random();

    match hare_chase::platform::run(settings, seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("hare-chase: {}", e);
            ExitCode::FAILURE
        }
    }
}
