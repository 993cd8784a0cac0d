use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::routes::health_check;
use crate::routes::home;
use crate::routes::join_waitlist;
use crate::waitlist_client::WaitlistClient;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the configured address and build the server. Port 0 gets a random
    /// free port from the OS; see `get_port`.
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(&addr)?;
        let port = listener.local_addr()?.port();

        let waitlist_client = cfg.waitlist.client();
        tracing::info!(
            address = %addr,
            waitlist_endpoint = %waitlist_client.endpoint(),
            "Starting landing page server"
        );

        let server = run(listener, waitlist_client)?;
        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call (or
    /// passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// The server is not responsible for binding to an address, it only listens to
/// an already bound address.
///
/// Declares all endpoints.
pub fn run(
    listener: TcpListener,
    waitlist_client: WaitlistClient,
) -> Result<Server, anyhow::Error> {
    // `Data` is an `Arc`; every worker gets a clone of the same client (and
    // its connection pool)
    let waitlist_client = web::Data::new(waitlist_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/waitlist", web::post().to(join_waitlist))
            .app_data(waitlist_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
