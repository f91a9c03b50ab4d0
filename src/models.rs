use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Severity of an event reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    Info,
    Warning,
    Error,
    #[serde(other)]
    Unknown,
}

/// Event attached to a response or to one of its results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub code: Option<i32>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub message: Option<String>,
}

/// Result of one query inside a [`RestResponse`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T = Value> {
    pub time: Option<i64>,
    #[serde(default)]
    pub events: Vec<Event>,
    pub num_results: Option<i64>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    pub result_type: Option<String>,
    pub num_total_results: Option<i64>,
    pub num_matches: Option<i64>,
    pub num_inserted: Option<i64>,
    pub num_updated: Option<i64>,
    pub num_deleted: Option<i64>,
    pub num_errors: Option<i64>,
    pub attributes: Option<Value>,
}

/// Response envelope returned by every OpenCGA web service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestResponse<T = Value> {
    pub api_version: Option<String>,
    pub time: Option<i64>,
    #[serde(default)]
    pub events: Vec<Event>,
    pub params: Option<Value>,
    #[serde(default = "Vec::new")]
    pub responses: Vec<QueryResult<T>>,
}

impl<T> RestResponse<T> {
    pub fn first_response(&self) -> Option<&QueryResult<T>> {
        self.responses.first()
    }

    /// First result of the first response
    pub fn first_result(&self) -> Option<&T> {
        self.first_response().and_then(|r| r.results.first())
    }

    /// Results of every response, in order
    pub fn all_results(&self) -> impl Iterator<Item = &T> {
        self.responses.iter().flat_map(|r| r.results.iter())
    }

    pub fn all_results_size(&self) -> usize {
        self.responses.iter().map(|r| r.results.len()).sum()
    }

    /// ERROR events of the envelope and of every response
    pub fn error_events(&self) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .chain(self.responses.iter().flat_map(|r| r.events.iter()))
            .filter(|e| e.event_type == EventType::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.error_events().next().is_some()
    }
}

/// Body of the `acl/{members}/update` endpoints.
///
/// The entity field (`study`, `cohort`, `panel`, `sample`, `file`) names the
/// ids whose permissions change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclUpdateParams {
    pub permissions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Permission template for studies: `admin`, `analyst` or `view_only`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Body of `studies/{study}/groups/update` and `.../groups/{group}/users/update`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub users: Vec<String>,
}

/// Permission rule applied automatically to new entries of a study
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionRule {
    pub id: String,
    pub query: Value,
    pub members: Vec<String>,
    pub permissions: Vec<String>,
}

/// Body of `operation/variant/score/index`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantScoreIndexParams {
    pub score_name: String,
    pub cohort1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohort2: Option<String>,
    pub input: Option<String>,
    /// e.g. `CHROM=0,POS=1,REF=3,ALT=4,SCORE=5,PVALUE=6` or `VAR=0,SCORE=1`
    pub input_columns: Option<String>,
    #[serde(default)]
    pub resume: bool,
}
