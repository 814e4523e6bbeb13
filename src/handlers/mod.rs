pub mod company;
pub mod health;
pub mod news;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::config).service(
        web::scope("/api")
            .configure(news::config)
            .configure(company::config),
    );
}
