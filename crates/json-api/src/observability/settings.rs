//! Request-path settings captured once at startup.

use std::sync::OnceLock;

use crate::config::ServerConfig;

#[derive(Debug, Clone, Copy)]
struct RequestSettings {
    slow_request_threshold_ms: u64,
    otel_parent_propagation: bool,
}

impl RequestSettings {
    const DEFAULT: Self = Self {
        slow_request_threshold_ms: 1_000,
        otel_parent_propagation: false,
    };
}

static SETTINGS: OnceLock<RequestSettings> = OnceLock::new();

/// Only the first call takes effect.
pub(super) fn apply_runtime_config(config: &ServerConfig) {
    let observability = &config.observability;

    SETTINGS.get_or_init(|| RequestSettings {
        slow_request_threshold_ms: observability.slow_request_threshold_ms,
        otel_parent_propagation: observability.otel_enabled
            && observability.otel_parent_propagation_enabled,
    });
}

fn current() -> RequestSettings {
    SETTINGS.get().copied().unwrap_or(RequestSettings::DEFAULT)
}

pub(super) fn slow_request_threshold_ms() -> u64 {
    current().slow_request_threshold_ms
}

pub(super) fn otel_parent_propagation_enabled() -> bool {
    current().otel_parent_propagation
}
