use actix_web::HttpRequest;

/// Client address for logging. The first hop of `X-Forwarded-For` wins when
/// `trust_x_forwarded_for` is set and the header holds a non-empty value;
/// otherwise the socket peer is used.
pub fn get_client_ip(req: &HttpRequest, trust_x_forwarded_for: bool) -> String {
    if trust_x_forwarded_for {
        let forwarded = req
            .headers()
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|first| !first.is_empty());

        if let Some(first) = forwarded {
            return first.to_string();
        }
    }
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn request() -> HttpRequest {
        TestRequest::default()
            .insert_header(("x-forwarded-for", "203.0.113.7, 10.0.0.1"))
            .peer_addr("192.0.2.1:4000".parse().unwrap())
            .to_http_request()
    }

    #[test]
    fn forwarded_header_used_only_when_trusted() {
        assert_eq!(get_client_ip(&request(), true), "203.0.113.7");
        assert_eq!(get_client_ip(&request(), false), "192.0.2.1");
    }

    #[test]
    fn blank_forwarded_header_falls_back_to_peer() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", " "))
            .peer_addr("192.0.2.9:1".parse().unwrap())
            .to_http_request();
        assert_eq!(get_client_ip(&req, true), "192.0.2.9");
    }
}
