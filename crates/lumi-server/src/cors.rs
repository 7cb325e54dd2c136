use http::Method;
use http::header::HeaderName;
use lumi_config::{AnyOrList, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = match &config.origins {
        AnyOrList::Any => AllowOrigin::any(),
        AnyOrList::List(origins) => AllowOrigin::list(parse_all(origins)),
    };

    let methods = match &config.methods {
        AnyOrList::Any => AllowMethods::any(),
        AnyOrList::List(methods) => AllowMethods::list(parse_all::<Method>(methods)),
    };

    let headers = match &config.headers {
        AnyOrList::Any => AllowHeaders::any(),
        AnyOrList::List(headers) => AllowHeaders::list(parse_all::<HeaderName>(headers)),
    };

    let mut layer = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers);

    if !config.expose_headers.is_empty() {
        layer = layer.expose_headers(parse_all::<HeaderName>(&config.expose_headers));
    }

    if config.credentials {
        layer = layer.allow_credentials(true);
    }

    if let Some(max_age) = config.max_age_duration() {
        layer = layer.max_age(max_age);
    }

    if config.private_network {
        layer = layer.allow_private_network(true);
    }

    layer
}

/// Parse every entry, skipping (and logging) the ones that are invalid
fn parse_all<T: std::str::FromStr>(values: &[String]) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| {
            let parsed = value.parse().ok();
            if parsed.is_none() {
                tracing::warn!(value = %value, "ignoring invalid CORS entry");
            }
            parsed
        })
        .collect()
}
