use cutfreak_waitlist::configuration::get_configuration;
use cutfreak_waitlist::startup::Application;
use cutfreak_waitlist::telemetry::get_subscriber;
use cutfreak_waitlist::telemetry::init_subscriber;

/// Initialise telemetry, load config, and start the server
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // only logs at the specified level and higher are emitted; `RUST_LOG`
    // overrides
    let subscriber = get_subscriber("cutfreak-waitlist", "info", std::io::stdout);
    init_subscriber(subscriber);

    let cfg = get_configuration()?;
    let app = Application::build(cfg).await?;

    if let Err(e) = app.run_until_stopped().await {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Server failed"
        );
        return Err(e.into());
    }
    tracing::info!("Server exited gracefully");
    Ok(())
}
