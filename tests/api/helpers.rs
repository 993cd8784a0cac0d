use cutfreak_waitlist::configuration::get_configuration;
use cutfreak_waitlist::startup::Application;
use cutfreak_waitlist::telemetry::get_subscriber;
use cutfreak_waitlist::telemetry::init_subscriber;
use once_cell::sync::Lazy;
use wiremock::MockServer;

/// Init the tracing subscriber once for the whole test binary.
///
/// To opt in to verbose logging, use the env var `TEST_LOG`:
///
/// ```sh
///      TEST_LOG=true cargo test [test_name] | bunyan
/// ```
static TRACING: Lazy<()> = Lazy::new(|| {
    // two different closure types can't share a variable, hence the match
    match std::env::var("TEST_LOG") {
        Ok(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::stdout);
            init_subscriber(subscriber);
        }
        Err(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::sink);
            init_subscriber(subscriber);
        }
    };
});

pub struct TestApp {
    pub addr: String,
    /// Stands in for the external waitlist service
    pub waitlist_server: MockServer,
}

impl TestApp {
    /// What the browser sends when the landing page form is submitted
    pub async fn post_waitlist(
        &self,
        body: String,
    ) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/waitlist", self.addr))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("execute request")
    }

    pub async fn get_home_html(&self) -> String {
        reqwest::get(format!("{}/", self.addr))
            .await
            .expect("execute request")
            .text()
            .await
            .unwrap()
    }
}

/// Form-encode a single `email` field
pub fn email_body(email: &str) -> String { serde_urlencoded::to_string([("email", email)]).unwrap() }

/// Spawn the app on a random port, with the waitlist endpoint pointed at a
/// fresh `MockServer`.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let waitlist_server = MockServer::start().await;

    let cfg = {
        let mut cfg = get_configuration().expect("read configuration");
        // port 0: the OS picks a free port, retrieved via `get_port`
        cfg.application.port = 0;
        cfg.waitlist.endpoint = format!("{}/waitlist", waitlist_server.uri());
        cfg
    };

    let app = Application::build(cfg).await.unwrap();
    let port = app.get_port();
    let addr = format!("http://127.0.0.1:{port}");
    tokio::spawn(app.run_until_stopped());

    TestApp {
        addr,
        waitlist_server,
    }
}
