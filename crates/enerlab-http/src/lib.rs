//! Plumbing shared by the calculator binaries: tracing setup, address
//! resolution, static-asset mounting and the serve loop, plus the
//! parse-or-default helper every form handler reads numbers through.

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

/// Resolve the listen address from `var`, falling back to the calculators'
/// stock port.
pub fn bind_addr_from_env(var: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| "0.0.0.0:8080".to_string())
}

/// Mount the asset directory under `/static/`, where every page links its
/// stylesheet from.
pub fn with_static_assets(router: Router, dir: &str) -> Router {
    router.nest_service("/static", ServeDir::new(dir))
}

pub async fn serve(router: Router, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

/// Read a numeric form field. Never fails: blank or unparsable input reads
/// as zero, and a decimal comma is accepted alongside a decimal point.
pub fn number_or_zero(raw: &str) -> f64 {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        return 0.0;
    }
    cleaned.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::number_or_zero;

    #[test]
    fn blank_and_garbage_read_as_zero() {
        assert_eq!(number_or_zero(""), 0.0);
        assert_eq!(number_or_zero("   "), 0.0);
        assert_eq!(number_or_zero("abc"), 0.0);
        assert_eq!(number_or_zero("1.2.3"), 0.0);
    }

    #[test]
    fn decimal_comma_is_accepted() {
        assert_eq!(number_or_zero("0,92"), 0.92);
        assert_eq!(number_or_zero(" 42.5 "), 42.5);
    }
}
