use actix_web::HttpResponse;

/// `GET /health_check`
///
/// 200 with an empty body. Note: viewing the response requires `curl -v`
pub async fn health_check() -> HttpResponse { HttpResponse::Ok().finish() }
