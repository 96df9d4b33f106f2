use restapi_api::Application;
use restapi_infra::{Config, RestApiContext};
use restapi_sdk::RestApiSDK;

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, RestApiSDK, String) {
    let mut ctx = RestApiContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = RestApiSDK::new(address.clone());
    (app, sdk, address)
}
