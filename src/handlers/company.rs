use actix_web::{web, HttpResponse, Result};

use crate::models::NoSymbolMatch;
use crate::services::MarketService;

pub async fn get_company_info(
    path: web::Path<String>,
    market: web::Data<MarketService>,
) -> Result<HttpResponse> {
    let symbol = path.into_inner();

    match market.company_overview(&symbol).await {
        Ok(info) => Ok(HttpResponse::Ok().json(info)),
        Err(e) => Ok(e.to_response("Failed to fetch company information")),
    }
}

pub async fn search_symbol(
    path: web::Path<String>,
    market: web::Data<MarketService>,
) -> Result<HttpResponse> {
    let company_name = path.into_inner();

    match market.symbol_search(&company_name).await {
        // An empty match list is a successful response, not an error.
        Ok(Some(top_match)) => Ok(HttpResponse::Ok().json(top_match)),
        Ok(None) => Ok(HttpResponse::Ok().json(NoSymbolMatch::default())),
        Err(e) => Ok(e.to_response("Failed to search for stock symbol")),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/company-info/{symbol}", web::get().to(get_company_info))
        .route("/search-symbol/{company_name}", web::get().to(search_symbol));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use httpmock::{Method::GET, MockServer};
    use serde_json::{json, Value};

    fn market_data(server: &MockServer, api_key: Option<&str>) -> web::Data<MarketService> {
        web::Data::new(MarketService::with_base_url(
            api_key.map(String::from),
            format!("{}/query", server.base_url()),
        ))
    }

    #[actix_web::test]
    async fn company_info_is_served_under_api_scope() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/query").query_param("symbol", "IBM");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "Symbol": "IBM",
                    "Name": "International Business Machines",
                    "Sector": "TECHNOLOGY",
                    "Industry": "COMPUTER & OFFICE EQUIPMENT",
                    "MarketCapitalization": "170000000000",
                    "Description": "desc"
                }));
        });

        // Full route tree, including the /api prefix.
        let app = test::init_service(
            App::new()
                .app_data(market_data(&server, Some("k")))
                .configure(crate::handlers::config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/company-info/ibm")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], "International Business Machines");
        assert_eq!(body["marketCap"], "170000000000");
        assert_eq!(body["annualReport"]["type"], "SEC 10-K Filing");
    }

    #[actix_web::test]
    async fn rate_limit_note_yields_429() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/query");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"Note": "API call frequency exceeded", "Name": "Acme"}));
        });

        let app = test::init_service(
            App::new()
                .app_data(market_data(&server, Some("k")))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/company-info/AAPL")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "API rate limit reached or invalid symbol");
        assert_eq!(
            body["suggestion"],
            "Try again in a minute or check the stock symbol"
        );
    }

    #[actix_web::test]
    async fn empty_search_returns_null_symbol_sentinel() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/query");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"bestMatches": []}));
        });

        let app = test::init_service(
            App::new()
                .app_data(market_data(&server, Some("k")))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/search-symbol/NoSuchCo")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["symbol"], Value::Null);
        assert_eq!(body["message"], "No matching stock symbol found");
    }

    #[actix_web::test]
    async fn search_maps_top_match() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/query")
                .query_param("function", "SYMBOL_SEARCH")
                .query_param("keywords", "Tesco");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "bestMatches": [{
                        "1. symbol": "TSCO.LON",
                        "2. name": "Tesco PLC",
                        "3. type": "Equity",
                        "4. region": "United Kingdom",
                        "8. currency": "GBX"
                    }]
                }));
        });

        let app = test::init_service(
            App::new()
                .app_data(market_data(&server, Some("k")))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/search-symbol/Tesco")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["symbol"], "TSCO.LON");
        assert_eq!(body["type"], "Equity");
        assert_eq!(body["currency"], "GBX");
    }

    #[actix_web::test]
    async fn missing_key_is_500_with_no_upstream_call() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/query");
            then.status(200).json_body(json!({}));
        });

        let app = test::init_service(
            App::new()
                .app_data(market_data(&server, None))
                .configure(config),
        )
        .await;

        for uri in ["/company-info/IBM", "/search-symbol/IBM"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "ALPHA_VANTAGE_KEY not configured");
        }
        assert_eq!(mock.hits(), 0);
    }
}
