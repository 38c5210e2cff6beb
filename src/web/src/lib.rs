mod common;
mod error;
mod pdf;
mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::ServerRoutes;

use axum::response::IntoResponse;
use engine::PdfPipeline;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct MatchCardServer {
    data: AppData,
}

impl MatchCardServer {
    pub fn new(data: AppData) -> Self {
        MatchCardServer { data }
    }

    pub async fn run(&self) {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], 3000));

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                panic!("Cannot start server without binding to port");
            }
        };

        info!("listen at: http://localhost:3000");

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    }
}

pub struct AppData {
    pub pipeline: Arc<PdfPipeline>,
    /// Upper bound on one card generation, acquisition included.
    pub render_timeout: Duration,
}

impl Clone for AppData {
    fn clone(&self) -> Self {
        AppData {
            pipeline: Arc::clone(&self.pipeline),
            render_timeout: self.render_timeout,
        }
    }
}
