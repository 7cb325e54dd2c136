/// Liveness probe; answers without touching any upstream
pub async fn health_handler() -> &'static str {
    "ok"
}
