//! Remote-then-fallback execution.

use std::future::Future;

use tracing::warn;

use crate::error::ClientError;

/// Which source produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Fallback,
}

/// A value tagged with the source that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Sourced<T> {
    pub fn remote(value: T) -> Self {
        Self {
            value,
            origin: Origin::Remote,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            origin: Origin::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Fallback
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            value: f(self.value),
            origin: self.origin,
        }
    }
}

/// Run `remote`; if it fails with a transport or status error, log the
/// failure and answer from `fallback` instead.
///
/// Errors that are not remote failures reach the caller unchanged. The
/// fallback is only constructed when it is needed.
pub async fn with_fallback<T, R, F, Fut>(
    operation: &str,
    remote: R,
    fallback: F,
) -> Result<Sourced<T>, ClientError>
where
    R: Future<Output = Result<T, ClientError>>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    match remote.await {
        Ok(value) => Ok(Sourced::remote(value)),
        Err(err) if err.is_remote_failure() => {
            warn!(operation = %operation, error = %err, "Remote API failed, using fallback data");
            fallback().await.map(Sourced::fallback)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable() -> ClientError {
        ClientError::Status {
            status: 503,
            url: "http://localhost/api/students".to_string(),
        }
    }

    #[tokio::test]
    async fn test_remote_success_skips_fallback() {
        let result = with_fallback(
            "list",
            async { Ok::<_, ClientError>(1) },
            || async { Err(ClientError::not_found("Student", "fallback")) },
        )
        .await
        .unwrap();
        assert_eq!(result, Sourced::remote(1));
    }

    #[tokio::test]
    async fn test_remote_failure_uses_fallback() {
        let result = with_fallback("list", async { Err(unavailable()) }, || async { Ok(2) })
            .await
            .unwrap();
        assert_eq!(result.value, 2);
        assert!(result.is_fallback());
    }

    #[tokio::test]
    async fn test_fallback_errors_propagate() {
        let err = with_fallback::<u8, _, _, _>(
            "update",
            async { Err(unavailable()) },
            || async { Err(ClientError::not_found("Student", "9")) },
        )
        .await
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_non_remote_errors_do_not_fall_back() {
        let err = with_fallback::<u8, _, _, _>(
            "get",
            async { Err(ClientError::not_found("Class", "3")) },
            || async { Ok(1) },
        )
        .await
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_map_keeps_origin() {
        let mapped = Sourced::fallback(vec![1, 2, 3]).map(|v| v.len());
        assert_eq!(mapped, Sourced::fallback(3));
    }
}
