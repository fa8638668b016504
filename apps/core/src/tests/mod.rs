//! Test Module
//!
//! Cross-component test suite for the Klarsyn analysis pipeline.
//!
//! ## Test Categories
//! - `pipeline_tests`: full-pipeline behaviour, bounds, determinism
//! - `scenario_tests`: canonical Swedish-language behaviour scenarios

pub mod pipeline_tests;
pub mod scenario_tests;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test subscriber once; respects RUST_LOG for noisy debugging.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
