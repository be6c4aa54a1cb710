use crate::dto::prelude::*;

///
/// SubmissionInput
///
/// Institution fields are display names, copied as supplied.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SubmissionInput {
    pub student_name: Option<String>,
    pub contact: Option<String>,
    pub school: Option<String>,
    pub college: Option<String>,
    pub campus: Option<String>,
    pub batch: Option<String>,
    pub measurements: Vec<Measurement>,
}

///
/// Measurement
///

#[derive(CandidType, Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Measurement {
    pub label: String,
    pub value: f64,
}

///
/// SubmissionView
///

#[derive(CandidType, Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SubmissionView {
    pub id: String,
    pub student_name: String,
    pub contact: Option<String>,
    pub school: Option<String>,
    pub college: Option<String>,
    pub campus: Option<String>,
    pub batch: Option<String>,
    pub measurements: Vec<Measurement>,
    pub created_at: u64,
}
