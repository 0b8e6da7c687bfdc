use actix_web::{get, web, Responder};
use tracing::debug;

use crate::portfolio::adapter::incoming::web::error_pages;
use crate::portfolio::adapter::incoming::web::extractors::PortfolioHost;
use crate::portfolio::adapter::incoming::web::routes::portfolio_page::{
    load_renderable, page_or_unavailable,
};
use crate::AppState;

#[get("/experiences/{id}")]
pub async fn get_experience_page_handler(
    host: PortfolioHost,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = path.into_inner();

    let page = match load_renderable(&data, &host.username).await {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    let Some(work) = page.data.find_work(&experience_id) else {
        debug!(
            username = %host.username,
            experience_id = %experience_id,
            "Experience not found"
        );
        return error_pages::experience_not_found();
    };

    page_or_unavailable(page.template.renderer.render_experience(&page.data, work))
}
