//! Client for the remote Nussinov scoring service.
//!
//! The service fills the DP score table; this program never does. One
//! blocking GET per run:
//!
//! ```text
//! GET {base_url}/nussinov?rna=<sequence>&minloop=<n>
//! ```
//!
//! The JSON response carries the finished table plus presentation-only
//! pass-throughs (`maxScore`, `pairings`, `dashStructure`) shown in the
//! sidebar.

use serde::Deserialize;

/// Default scoring service endpoint (local development server).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Errors from talking to the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or returned a non-success status.
    #[error("scoring request failed: {0}")]
    Transport(#[from] Box<ureq::Error>),

    /// The response body was not the expected JSON shape.
    #[error("scoring service returned a malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Deserialized scoring service response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NussinovResponse {
    /// Square DP score table, side = sequence length
    pub dp_table: Vec<Vec<u32>>,
    /// Maximum number of base pairs achievable
    pub max_score: u32,
    /// `(i, j)` endpoints of the pairs in one optimal structure
    pub pairings: Vec<(usize, usize)>,
    /// Dot-bracket style rendering of that structure
    pub dash_structure: String,
}

/// Blocking client for the scoring service.
#[derive(Debug, Clone)]
pub struct ScoringClient {
    base_url: String,
}

impl ScoringClient {
    /// Create a client for the given base URL (trailing slashes stripped).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request the finished score table for `sequence` with the given
    /// minimum hairpin loop length.
    pub fn nussinov(&self, sequence: &str, min_loop: u32) -> Result<NussinovResponse, ApiError> {
        let url = format!(
            "{}/nussinov?rna={}&minloop={}",
            self.base_url, sequence, min_loop
        );
        tracing::debug!(%url, "requesting score table");
        let body = ureq::get(&url)
            .call()
            .map_err(Box::new)?
            .into_body()
            .read_to_string()
            .map_err(Box::new)?;
        let response: NussinovResponse = serde_json::from_str(&body)?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_deserializes_from_service_json() {
        let json = r#"{
            "dpTable": [[0, 1], [0, 0]],
            "maxScore": 1,
            "pairings": [[0, 1]],
            "dashStructure": "( )"
        }"#;
        let response: NussinovResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.dp_table, vec![vec![0, 1], vec![0, 0]]);
        assert_eq!(response.max_score, 1);
        assert_eq!(response.pairings, vec![(0, 1)]);
        assert_eq!(response.dash_structure, "( )");
    }

    #[test]
    fn response_rejects_missing_fields() {
        let json = r#"{ "dpTable": [[0]] }"#;
        assert!(serde_json::from_str::<NussinovResponse>(json).is_err());
    }

    #[test]
    fn client_strips_trailing_slash() {
        let client = ScoringClient::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
