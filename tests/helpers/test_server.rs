// Test Server Helpers
//
// Two ways to exercise the HTTP layer:
// - `call_users_api` runs one request through the user routes with an
//   injected service (usually a `MockUserService`).
// - `spawn_test_server` starts the full application over a fresh in-memory
//   store on a random port using actix-test.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, web::Bytes, App};
use user_management::database::MemoryDatabaseClient;
use user_management::middleware::RequestId;
use user_management::users::{controllers as user_controllers, UserService};
use user_management::AppState;

pub use actix_test::TestServer;

/// Application state over a fresh in-memory store
pub fn memory_state() -> AppState {
    AppState::new(Arc::new(MemoryDatabaseClient::new()), "users")
}

/// Send `req` through the user routes backed by `service`
///
/// # Returns
/// Status code and raw body of the response
pub async fn call_users_api(
    service: Arc<dyn UserService>,
    req: test::TestRequest,
) -> (StatusCode, Bytes) {
    let app = test::init_service(
        App::new()
            .wrap(RequestId)
            .app_data(web::Data::new(service))
            .configure(user_controllers::configure),
    )
    .await;

    let resp = test::call_service(&app, req.to_request()).await;
    let status = resp.status();
    (status, test::read_body(resp).await)
}

/// Spawn a real HTTP test server with the full application
///
/// # Behavior
/// - Starts actix-web server on random available port
/// - Wires repository, service and controllers over a fresh in-memory store
/// - Server stops automatically when TestServer drops
///
/// # Example
/// ```no_run
/// #[actix_web::test]
/// async fn test_health_endpoint() {
///     let srv = spawn_test_server();
///     let response = srv.get("/health").send().await.unwrap();
///     assert_eq!(response.status(), 200);
/// }
/// ```
pub fn spawn_test_server() -> TestServer {
    let state = memory_state();

    actix_test::start(move || {
        let state = state.clone();
        App::new()
            .wrap(RequestId)
            .configure(move |cfg| state.configure(cfg))
    })
}
