//! Form input helpers. Browser forms submit numbers either as JSON numbers
//! or as the raw text of an `<input type="number">`; both are accepted.

use crate::errors::{DashboardError, DashboardResult};
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON form body. An empty body is an empty form, so the handler reports
/// the missing fields; malformed JSON is a validation error.
#[derive(Debug, Clone)]
pub struct FormBody<T>(pub T);

impl<T> FormBody<T>
where
    T: DeserializeOwned + Default,
{
    pub fn parse(body: &[u8]) -> DashboardResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }
        Ok(Self(serde_json::from_slice(body)?))
    }
}

impl<S, T> FromRequest<S> for FormBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = DashboardError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| DashboardError::Validation(format!("invalid request body: {}", e.body_text())))?;
        Self::parse(&body)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum FormNumber {
    Number(f64),
    Text(String),
}

impl FormNumber {
    /// `Ok(None)` when the field is blank.
    fn parse(&self, field: &str) -> DashboardResult<Option<f64>> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| DashboardError::Validation(format!("{field} is not a number")))?
            }
        };
        if !value.is_finite() {
            return Err(DashboardError::Validation(format!("{field} is not a number")));
        }
        Ok(Some(value))
    }
}

impl From<f64> for FormNumber {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for FormNumber {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Collects the names of blank required fields so a single error can list
/// all of them, the way the dashboard reports "missing inputs".
pub struct RequiredFields {
    label: &'static str,
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new(label: &'static str) -> Self {
        Self { label, missing: Vec::new() }
    }

    pub fn number(&mut self, name: &'static str, field: Option<&FormNumber>) -> DashboardResult<f64> {
        let parsed = match field {
            Some(f) => f.parse(name)?,
            None => None,
        };
        // Placeholder value; `finish` rejects the form before it is used.
        Ok(parsed.unwrap_or_else(|| {
            self.missing.push(name);
            0.0
        }))
    }

    pub fn text(&mut self, name: &'static str, field: Option<&str>) -> String {
        match field.map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    pub fn finish(self) -> DashboardResult<()> {
        if self.missing.is_empty() {
            return Ok(());
        }
        Err(DashboardError::Validation(format!(
            "{}: {}",
            self.label,
            self.missing.join(", ")
        )))
    }
}
