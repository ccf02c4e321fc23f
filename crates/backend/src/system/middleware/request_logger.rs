use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Log one line per HTTP request: duration, response size, status, method
/// and path. The body is buffered to measure its real size.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                status = parts.status.as_u16(),
                "{:>5}ms | {:>10} | {} {}: {}",
                start.elapsed().as_millis(),
                "error",
                method,
                path,
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    tracing::info!(
        status = parts.status.as_u16(),
        "{:>5}ms | {:>10} | {} {}",
        start.elapsed().as_millis(),
        format_size(bytes.len()),
        method,
        path
    );

    Response::from_parts(parts, Body::from(bytes))
}

/// Byte count with thousands separators, e.g. `12 345`
fn format_size(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_size;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0");
        assert_eq!(format_size(999), "999");
        assert_eq!(format_size(1000), "1 000");
        assert_eq!(format_size(1234567), "1 234 567");
    }
}
