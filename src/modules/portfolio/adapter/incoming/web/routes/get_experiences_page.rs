use actix_web::{get, web, Responder};

use crate::portfolio::adapter::incoming::web::extractors::PortfolioHost;
use crate::portfolio::adapter::incoming::web::routes::portfolio_page::{
    load_renderable, page_or_unavailable,
};
use crate::AppState;

#[get("/experiences")]
pub async fn get_experiences_page_handler(
    host: PortfolioHost,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = match load_renderable(&data, &host.username).await {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    page_or_unavailable(page.template.renderer.render_experiences(&page.data))
}
