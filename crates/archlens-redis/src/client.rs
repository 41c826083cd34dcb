//! Redis connection management.

use archlens_core::ArchLensError;
use redis::aio::ConnectionManager;
use thiserror::Error;

/// Redis error types.
#[derive(Error, Debug)]
pub enum RedisError {
    #[error("Redis connection error: {0}")]
    Connection(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for Redis operations.
pub type RedisResult<T> = Result<T, RedisError>;

/// ConnectionManager multiplexes internally and reconnects on failure.
/// It is Clone, so callers clone it to get a mutable handle for each operation.
pub type RedisPool = ConnectionManager;

/// Open a connection manager for a URL such as `redis://127.0.0.1:6379`.
pub async fn init_pool(redis_url: &str) -> RedisResult<RedisPool> {
    let client = redis::Client::open(redis_url)?;
    let manager = ConnectionManager::new(client).await?;
    Ok(manager)
}

impl From<RedisError> for ArchLensError {
    fn from(err: RedisError) -> Self {
        match err {
            RedisError::Serialization(e) => ArchLensError::Json(e),
            RedisError::Connection(e) => ArchLensError::storage(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error_maps_to_json() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ArchLensError = RedisError::Serialization(source).into();
        assert!(matches!(err, ArchLensError::Json(_)));
    }

    #[test]
    fn test_connection_error_maps_to_storage() {
        let source = redis::RedisError::from((redis::ErrorKind::IoError, "connection refused"));
        let err: ArchLensError = RedisError::Connection(source).into();
        assert!(matches!(err, ArchLensError::Storage(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
