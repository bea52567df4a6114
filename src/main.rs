fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(windows)]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use mciplay::MediaSession;
    use mciplay::mci::MciInterpreter;

    let Some(source) = std::env::args().nth(1) else {
        log::error!("usage: mciplay <source>");
        std::process::exit(2);
    };

    let session = MediaSession::new(MciInterpreter::default());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(session.open_and_play(&source))?;
    Ok(())
}

#[cfg(not(windows))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    Err("unsupported operating system (Windows only)".into())
}
