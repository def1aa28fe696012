use mongodb::{Client, bson::doc};
use std::time::{Duration, Instant};

/// Health check status for MongoDB
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Error details when unhealthy
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// Run the `ping` admin command.
pub async fn ping(client: &Client) -> mongodb::error::Result<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}

/// Ping with a deadline, reporting latency and the failure reason.
pub async fn check_health_detailed(client: &Client, timeout: Duration) -> HealthStatus {
    let start = Instant::now();
    let outcome = tokio::time::timeout(timeout, ping(client)).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    let message = match outcome {
        Ok(Ok(())) => None,
        Ok(Err(e)) => Some(e.to_string()),
        Err(_) => Some(format!("ping timed out after {:?}", timeout)),
    };

    HealthStatus {
        healthy: message.is_none(),
        message,
        response_time_ms,
    }
}
