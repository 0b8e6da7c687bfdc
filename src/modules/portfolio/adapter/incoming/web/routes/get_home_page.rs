use actix_web::{get, web, Responder};

use crate::portfolio::adapter::incoming::web::extractors::PortfolioHost;
use crate::portfolio::adapter::incoming::web::routes::portfolio_page::load_renderable;
use crate::shared::web::HtmlResponse;
use crate::AppState;

#[get("/")]
pub async fn get_home_page_handler(
    host: PortfolioHost,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = match load_renderable(&data, &host.username).await {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    HtmlResponse::ok(page.template.renderer.render_home(&page.data))
}
