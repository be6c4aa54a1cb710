use crate::{
    dto::directory::{BatchView, CampusView, CollegeView, SchoolView},
    storage::stable::{
        batch::BatchRecord,
        college::{CampusRecord, CollegeRecord},
        school::SchoolRecord,
    },
};

///
/// SchoolMapper
///

pub struct SchoolMapper;

impl SchoolMapper {
    #[must_use]
    pub fn record_to_view(record: SchoolRecord) -> SchoolView {
        SchoolView {
            id: record.id.to_string(),
            name: record.name,
            created_at: record.created_at,
        }
    }
}

///
/// CollegeMapper
///

pub struct CollegeMapper;

impl CollegeMapper {
    #[must_use]
    pub fn record_to_view(record: CollegeRecord) -> CollegeView {
        CollegeView {
            id: record.id.to_string(),
            name: record.name,
            logo_url: record.logo_url,
            campuses: record
                .campuses
                .into_iter()
                .map(Self::campus_to_view)
                .collect(),
            created_at: record.created_at,
        }
    }

    #[must_use]
    pub fn campus_to_view(record: CampusRecord) -> CampusView {
        CampusView {
            id: record.id.to_string(),
            name: record.name,
            city: record.city,
            logo_url: record.logo_url,
            address: record.address,
        }
    }
}

///
/// BatchMapper
///

pub struct BatchMapper;

impl BatchMapper {
    #[must_use]
    pub fn record_to_view(record: BatchRecord) -> BatchView {
        BatchView {
            id: record.id.to_string(),
            name: record.name,
            college_id: record.college_id,
            created_at: record.created_at,
        }
    }
}
