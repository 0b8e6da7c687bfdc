use actix_web::{get, web, Responder};
use tracing::debug;

use crate::portfolio::adapter::incoming::web::error_pages;
use crate::portfolio::adapter::incoming::web::extractors::PortfolioHost;
use crate::portfolio::adapter::incoming::web::routes::portfolio_page::{
    load_renderable, page_or_unavailable,
};
use crate::AppState;

#[get("/projects/{id}")]
pub async fn get_project_page_handler(
    host: PortfolioHost,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    let page = match load_renderable(&data, &host.username).await {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    let Some(project) = page.data.find_project(&project_id) else {
        debug!(username = %host.username, project_id = %project_id, "Project not found");
        return error_pages::project_not_found();
    };

    page_or_unavailable(page.template.renderer.render_project(&page.data, project))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubLoadPortfolioUseCase;

    async fn get(template: &str, uri: &str) -> (StatusCode, String) {
        let app_state = TestAppStateBuilder::default()
            .with_load_portfolio(Arc::new(StubLoadPortfolioUseCase::loaded(Some(template))))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_project_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Host", "alice.cofounds.in"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_web::test]
    async fn test_project_page_success() {
        let (status, html) = get("template-03", "/projects/proj-1").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<h1>Looking Glass</h1>"));
        assert!(html.contains("Cut latency by 40%"));
    }

    #[actix_web::test]
    async fn test_project_page_unknown_id() {
        let (status, html) = get("template-04", "/projects/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Project not found"));
    }

    #[actix_web::test]
    async fn test_project_page_not_offered_by_template() {
        let (status, html) = get("template-01", "/projects/proj-1").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Page not available"));
    }
}
