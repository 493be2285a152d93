//! Replayable request description

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::errors::ApiError;

/// Method, path, query and JSON body of one API call.
///
/// Everything is owned and already serialized so the client can send the
/// same request a second time after renewing the access token.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add query parameters from a flat struct or map. `None` fields are
    /// skipped; other scalars are sent in their JSON text form.
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self, ApiError> {
        let value = serde_json::to_value(query)
            .map_err(|e| ApiError::Config(format!("Failed to serialize query: {e}")))?;

        let Value::Object(fields) = value else {
            return Err(ApiError::Config("Query parameters must serialize to an object".into()));
        };

        for (key, value) in fields {
            match value {
                Value::Null => {}
                Value::String(text) => self.query.push((key, text)),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ApiError::Config(format!(
                        "Query parameter '{key}' is not a scalar"
                    )));
                }
                other => self.query.push((key, other.to_string())),
            }
        }

        Ok(self)
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Config(format!("Failed to serialize body: {e}")))?;
        self.body = Some(body);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}
