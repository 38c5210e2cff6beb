use crate::common::default_handler::default_handler;
use crate::pdf::pdf_routes;
use crate::AppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(pdf_routes())
            .fallback(default_handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use engine::mock::MockProvisioner;
    use engine::PdfPipeline;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Router {
        let data = AppData {
            pipeline: Arc::new(PdfPipeline::new(Arc::new(MockProvisioner::succeeding()))),
            render_timeout: Duration::from_secs(5),
        };
        ServerRoutes::create().with_state(data)
    }

    #[tokio::test]
    async fn test_root_serves_landing_page() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(axum::http::header::CONTENT_TYPE)
                .unwrap(),
            "text/html"
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
