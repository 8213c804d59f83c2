/// Request/response envelopes exchanged between the popup and the page
use serde::{Deserialize, Serialize};

use crate::analysis_data::AnalysisResult;
use crate::error::AnalyzerError;

/// Requests the content script understands, tagged by `action`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    Analyze,
}

/// Reply to a [`Request`].
///
/// On the wire this is `{success: true, data}` or `{success: false, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireResponse", try_from = "WireResponse")]
pub enum Response {
    Success(AnalysisResult),
    Failure(String),
}

impl Response {
    pub fn into_result(self) -> Result<AnalysisResult, AnalyzerError> {
        match self {
            Response::Success(data) => Ok(data),
            Response::Failure(error) => Err(AnalyzerError::Remote(error)),
        }
    }
}

impl From<Result<AnalysisResult, AnalyzerError>> for Response {
    fn from(result: Result<AnalysisResult, AnalyzerError>) -> Self {
        match result {
            Ok(data) => Response::Success(data),
            Err(e) => Response::Failure(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireResponse {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<Response> for WireResponse {
    fn from(response: Response) -> Self {
        match response {
            Response::Success(data) => WireResponse {
                success: true,
                data: Some(data),
                error: None,
            },
            Response::Failure(error) => WireResponse {
                success: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<WireResponse> for Response {
    type Error = String;

    fn try_from(wire: WireResponse) -> Result<Self, Self::Error> {
        match (wire.success, wire.data) {
            (true, Some(data)) => Ok(Response::Success(data)),
            (true, None) => Err("success response without data".to_string()),
            (false, _) => Ok(Response::Failure(
                wire.error.unwrap_or_else(|| "unknown error".to_string()),
            )),
        }
    }
}
