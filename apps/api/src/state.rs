use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::config::Config;
use crate::resume::ResumeScanner;
use crate::skills::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// User skills and target jobs. Default: PgProfileStore.
    pub store: Arc<dyn ProfileStore>,
    /// Pluggable resume scanner. Default: DemoResumeScanner.
    pub scanner: Arc<dyn ResumeScanner>,
    pub tokens: Arc<TokenVerifier>,
    pub config: Config,
}
