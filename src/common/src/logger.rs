#[cfg(target_os = "android")]
pub fn init() {
    use log::LevelFilter;

    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(if cfg!(debug_assertions) {
                LevelFilter::Trace
            } else {
                LevelFilter::Info
            })
            .with_tag("rcgate"),
    );
}

#[cfg(not(target_os = "android"))]
pub fn init() {
    let _ = env_logger::try_init();
}
