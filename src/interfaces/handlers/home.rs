use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Studio Web API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "locales": ["en", "zh-TW"],
        "pages": "/api/v1/pages"
    }))
}
