use actix_web::{web, HttpResponse, Result};

use crate::services::NewsService;

pub async fn get_company_news(
    path: web::Path<String>,
    news: web::Data<NewsService>,
) -> Result<HttpResponse> {
    let company_name = path.into_inner();

    match news.company_news(&company_name).await {
        Ok(payload) => Ok(HttpResponse::Ok().json(payload)),
        Err(e) => Ok(e.to_response("Failed to fetch company news")),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/company-news/{company_name}", web::get().to(get_company_news));
}
