use axum::http::{
    HeaderMap, HeaderName,
    header::{CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT},
};

fn header_value<'a>(headers: &'a HeaderMap, name: &HeaderName) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
}

/// Logs the subset of inbound headers useful for diagnosing mobile clients.
pub fn log_request_headers(endpoint: &str, headers: &HeaderMap) {
    tracing::info!(
        endpoint,
        user_agent = header_value(headers, &USER_AGENT),
        content_type = header_value(headers, &CONTENT_TYPE),
        content_length = header_value(headers, &CONTENT_LENGTH),
        "Request received"
    );
}
