//! Incoming `traceparent` extraction.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

/// The remote parent carried by `headers`, when it names a valid span.
///
/// Extraction starts from an empty context so a request without trace headers
/// never attaches to whatever span happens to be active.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    let context = global::get_text_map_propagator(|propagator| {
        propagator.extract_with_context(&Context::new(), &Headers(headers))
    });

    let valid = context.span().span_context().is_valid();

    valid.then_some(context)
}

struct Headers<'a>(&'a HeaderMap);

impl Extractor for Headers<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::header::HeaderValue;

    use super::*;

    #[test]
    fn headers_are_read_case_insensitively() {
        let mut headers = HeaderMap::new();

        headers.insert(
            "traceparent",
            HeaderValue::from_static("00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01"),
        );

        let extractor = Headers(&headers);

        assert!(extractor.get("TraceParent").is_some(), "expected traceparent");
        assert_eq!(extractor.keys(), ["traceparent"]);
    }

    #[test]
    fn missing_trace_headers_have_no_parent() {
        assert!(extract_parent_context(&HeaderMap::new()).is_none(), "expected no parent");
    }
}
