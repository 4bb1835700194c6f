use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use actix_web::middleware::Compress;
use actix_web::http::header::{ContentType, ACCEPT_ENCODING, CONTENT_LENGTH, HOST};
use actix_web::http::StatusCode;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info, warn};
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::handler::structs::cache_handler::CacheHandler;
use crate::handler::structs::cache_middleware::CacheMiddleware;
use crate::http::structs::http_service_data::HttpServiceData;

pub const HOP_BY_HOP_HEADERS: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

pub fn http_is_hop_by_hop(name: &str) -> bool
{
    HOP_BY_HOP_HEADERS.iter().any(|header| header.eq_ignore_ascii_case(name))
}

pub fn http_service_client(config: &HttpServerConfig) -> reqwest::Result<reqwest::Client>
{
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout))
        .redirect(reqwest::redirect::Policy::none())
        .build()
}

pub fn http_service_upstream_url(upstream: &str, path_and_query: &str) -> String
{
    format!("{}{}", upstream.trim_end_matches('/'), path_and_query)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        if let Some(metrics_path) = data.http_server_config.metrics_path.as_ref().filter(|path| !path.is_empty()) {
            cfg.service(web::resource(metrics_path.clone()).route(web::get().to(http_service_metrics)));
        }
        cfg.service(
            web::scope("")
                .wrap(CacheMiddleware::new(data.cache_handler.clone()))
                .wrap(Compress::default())
                .default_service(web::to(http_service_proxy))
        );
    })
}

pub async fn http_service(
    addr: SocketAddr,
    cache_handler: Arc<CacheHandler>,
    config: Arc<HttpServerConfig>
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let client = http_service_client(&config).map_err(std::io::Error::other)?;
    let data = Arc::new(HttpServiceData {
        cache_handler,
        http_server_config: config.clone(),
        client,
    });

    info!("[HTTP] Starting server listener on {} (upstream {})", addr, config.upstream);
    let server = HttpServer::new(move || {
        App::new()
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_metrics(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(data.cache_handler.stats().prometheus())
}

pub async fn http_service_proxy(request: HttpRequest, body: web::Bytes, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let path_and_query = request.uri().path_and_query().map(|value| value.as_str()).unwrap_or("/");
    let url = http_service_upstream_url(&data.http_server_config.upstream, path_and_query);

    let method = match reqwest::Method::from_bytes(request.method().as_str().as_bytes()) {
        Ok(method) => method,
        Err(_) => return HttpResponse::MethodNotAllowed().finish(),
    };

    let (forwarded_host, forwarded_proto, forwarded_for) = {
        let connection = request.connection_info();
        (
            connection.host().to_string(),
            connection.scheme().to_string(),
            connection.realip_remote_addr().map(|addr| addr.to_string()),
        )
    };

    let mut upstream_request = data.client.request(method, &url);
    for (name, value) in request.headers().iter() {
        // Stored entries must stay identity encoded.
        if name == HOST || name == ACCEPT_ENCODING || http_is_hop_by_hop(name.as_str()) {
            continue;
        }
        upstream_request = upstream_request.header(name.as_str(), value.as_bytes());
    }
    upstream_request = upstream_request
        .header("x-forwarded-host", forwarded_host)
        .header("x-forwarded-proto", forwarded_proto);
    if let Some(forwarded_for) = forwarded_for {
        upstream_request = upstream_request.header("x-forwarded-for", forwarded_for);
    }

    let upstream_response = match upstream_request.body(body).send().await {
        Ok(response) => response,
        Err(error) => {
            warn!("[PROXY] {} {} failed: {}", request.method(), url, error);
            return HttpResponse::BadGateway().finish();
        }
    };

    let status = StatusCode::from_u16(upstream_response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = HttpResponse::build(status);
    for (name, value) in upstream_response.headers().iter() {
        if http_is_hop_by_hop(name.as_str()) || name.as_str() == CONTENT_LENGTH.as_str() {
            continue;
        }
        response.append_header((name.as_str(), value.as_bytes().to_vec()));
    }

    match upstream_response.bytes().await {
        Ok(bytes) => {
            debug!("[PROXY] {} {} -> {} ({} bytes)", request.method(), url, status.as_u16(), bytes.len());
            response.body(bytes)
        }
        Err(error) => {
            warn!("[PROXY] Reading body of {} {} failed: {}", request.method(), url, error);
            HttpResponse::BadGateway().finish()
        }
    }
}
