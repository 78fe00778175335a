/// Application configuration constants
pub struct AppConfig;

impl AppConfig {
    // Inventory service connection
    pub const DEFAULT_ENDPOINT: &'static str = "http://localhost:9090";
    pub const CONNECTION_TIMEOUT_SECS: u64 = 5;
    pub const POOL_IDLE_TIMEOUT_SECS: u64 = 60;
    pub const TCP_KEEPALIVE_SECS: u64 = 30;
}
