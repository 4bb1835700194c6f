/// Shared state handed to the proxy and metrics routes.
pub mod http_service_data;
