use atlas_ballot_frontend::config;

fn main() {
    dioxus_logger::init(config::log_level()).expect("failed to init logger");
    console_error_panic_hook::set_once();

    if let Some(level) = config::invalid_log_level() {
        log::warn!(
            "ignoring invalid {}={level:?}, using {}",
            config::LOG_LEVEL_ENV,
            config::DEFAULT_LOG_LEVEL
        );
    }

    log::info!("starting app");
    dioxus_web::launch(atlas_ballot_frontend::app::App);
}
