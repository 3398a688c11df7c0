use neura::config::{self, AppConfig};
use neura::logging;

fn main() {
    config::load_dotenv();
    let (app_config, config_error) = match AppConfig::from_env() {
        Ok(loaded) => (loaded, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::init(app_config.log_level);
    if let Some(err) = config_error {
        tracing::warn!(error = ?err, "invalid configuration, using defaults");
    }
    tracing::info!(
        reply_delay_ms = app_config.reply_delay.as_millis() as u64,
        particles = app_config.particle_count,
        "starting Neura"
    );
    config::install(app_config);

    #[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
    dioxus::launch(neura::ui::App);

    #[cfg(not(any(feature = "web", feature = "desktop", feature = "mobile")))]
    tracing::error!("no renderer enabled; build with --features web, desktop or mobile");
}
