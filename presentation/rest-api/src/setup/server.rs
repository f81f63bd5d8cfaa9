use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const SERVICE_TITLE: &str = "Barcode Scanner API";

pub struct Server;

impl Server {
    /// Mounts the scanner, analytics and health APIs at `/`, Swagger UI at
    /// `/docs` and the OpenAPI document at `/openapi.json`.
    fn app(container: DependencyContainer, addr: &str, cors: Cors) -> impl Endpoint + 'static {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.scanner_api,
                container.analytics_api,
            ),
            SERVICE_TITLE,
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let openapi = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", openapi)
            .with(cors)
            .with(Tracing)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, &addr, config.cors);

        tracing::info!("{} listening on http://{} (docs at /docs)", SERVICE_TITLE, addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
