//! Directory views and inputs.
//!
//! Every id crosses the public surface as a string. Inputs carry every field
//! as optional so the same shape serves create (required fields checked) and
//! update (supplied fields overwritten).

use crate::dto::prelude::*;

///
/// SchoolView
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SchoolView {
    pub id: String,
    pub name: String,
    pub created_at: u64,
}

///
/// CollegeView
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CollegeView {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub campuses: Vec<CampusView>,
    pub created_at: u64,
}

///
/// CampusView
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CampusView {
    pub id: String,
    pub name: String,
    pub city: String,
    pub logo_url: Option<String>,
    pub address: Option<String>,
}

///
/// BatchView
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BatchView {
    pub id: String,
    pub name: String,
    pub college_id: String,
    pub created_at: u64,
}

///
/// SchoolInput
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SchoolInput {
    pub name: Option<String>,
}

///
/// CollegeInput
///
/// On update, `logo_url: Some("")` clears the stored logo.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CollegeInput {
    pub name: Option<String>,
    pub logo_url: Option<String>,
}

///
/// BatchInput
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct BatchInput {
    pub name: Option<String>,
    pub college_id: Option<String>,
}

///
/// CampusInput
///
/// Campus updates write all four fields; an omitted field clears the
/// stored value.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CampusInput {
    pub name: Option<String>,
    pub city: Option<String>,
    pub logo_url: Option<String>,
    pub address: Option<String>,
}

///
/// OrphanBatchReport
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrphanBatchReport {
    pub removed: Vec<String>,
}
