//! Response classification for REST and SPARQL protocol calls

use {
    crate::{GraphDBError, GraphDBResult},
    ::tracing::{trace, warn},
    reqwest::Response,
    serde::de::DeserializeOwned,
};

/// Status code and body of a completed HTTP exchange, kept as text for the
/// caller to inspect or print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub(crate) async fn read(res: Response) -> GraphDBResult<Self> {
        let status = res.status().as_u16();
        let body = res.text().await?;
        trace!("[GraphDBHttpClient] {} response: {}", status, &body);
        Ok(Self { status, body })
    }

    /// REST rule: anything below 400 is a success.
    pub fn is_success(&self) -> bool {
        self.status < 400
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    /// Turns a REST response with status 400 or above into
    /// [`GraphDBError::Status`] naming the operation and resource.
    pub fn error_for_status(
        self,
        operation: &'static str,
        resource: impl Into<String>,
    ) -> GraphDBResult<Self> {
        if self.is_success() {
            return Ok(self);
        }

        let resource = resource.into();
        warn!(
            operation,
            resource = %resource,
            status = self.status,
            "GraphDB rejected request"
        );

        Err(GraphDBError::Status {
            operation,
            resource,
            status: self.status,
            body: self.body,
        })
    }

    /// SPARQL protocol rule: only 2xx answers carry a result.
    pub(crate) fn error_for_sparql(
        self,
        operation: &'static str,
        resource: impl Into<String>,
    ) -> GraphDBResult<Self> {
        if (200..300).contains(&self.status) {
            return Ok(self);
        }

        let resource = resource.into();
        warn!(
            operation,
            resource = %resource,
            status = self.status,
            "SPARQL endpoint rejected request"
        );

        Err(GraphDBError::Sparql {
            operation,
            resource,
            status: self.status,
            body: self.body,
        })
    }

    pub fn json<T: DeserializeOwned>(&self) -> GraphDBResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_399_is_success() {
        let res = RawResponse::new(399, "fine")
            .error_for_status("list repositories", "http://localhost:7200")
            .unwrap();
        assert_eq!(res.text(), "fine");
    }

    #[test]
    fn test_status_400_is_failure() {
        let err = RawResponse::new(400, "Missing parameter")
            .error_for_status("remove repository", "pets")
            .unwrap_err();
        match err {
            GraphDBError::Status {
                operation,
                resource,
                status,
                body,
            } => {
                assert_eq!(operation, "remove repository");
                assert_eq!(resource, "pets");
                assert_eq!(status, 400);
                assert_eq!(body, "Missing parameter");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_message_carries_diagnostic() {
        let err = RawResponse::new(500, "boom")
            .error_for_status("load data", "pets")
            .unwrap_err();
        assert_eq!(err.to_string(), "load data pets: 500: boom");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_sparql_requires_2xx() {
        assert!(RawResponse::new(204, "")
            .error_for_sparql("update", "pets")
            .is_ok());
        let err = RawResponse::new(399, "odd")
            .error_for_sparql("update", "pets")
            .unwrap_err();
        assert!(matches!(err, GraphDBError::Sparql { status: 399, .. }));
    }

    #[test]
    fn test_json_body() {
        let res = RawResponse::new(200, r#"[{"name": "a.ttl"}, {"name": "b.ttl"}]"#);
        let names: Vec<serde_json::Value> = res.json().unwrap();
        assert_eq!(names.len(), 2);
    }
}
