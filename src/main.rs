use anyhow::Result;
use hotel_booking_console::{BookingConfig, Console, Session};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logger()?;

    let mut session = Session::new(Console::stdio(), BookingConfig::default());
    session.run()?;

    Ok(())
}

// Logs go to stderr so they never interleave with the prompts on stdout
fn init_logger() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}
