pub fn setup_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .try_init();
    // a second call keeps the subscriber that is already installed.
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
