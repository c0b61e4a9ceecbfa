fn main() {
    console_error_panic_hook::set_once();

    let config = gather_website::site_config();
    let level = config.log_level.parse().unwrap_or(log::Level::Info);
    console_log::init_with_level(level).expect("error initializing logger");

    gather_website::start(config);
}
