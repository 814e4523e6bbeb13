use actix_web::{web, HttpResponse, Result};

use crate::models::HealthStatus;

/// Liveness probe; succeeds regardless of configuration.
pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthStatus::running()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health_check));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn health_check_returns_fixed_message() {
        let app = test::init_service(App::new().configure(config)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: HealthStatus = test::read_body_json(resp).await;
        assert_eq!(body.message, "Company News API Server is running!");
    }
}
