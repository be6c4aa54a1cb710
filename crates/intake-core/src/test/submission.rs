use crate::{
    api::{BatchApi, CollegeApi, SubmissionApi},
    dto::{
        directory::{BatchInput, CampusInput, CollegeInput},
        error::ErrorCode,
        submission::{Measurement, SubmissionInput},
    },
    test::{ADMIN, reset_state},
};

#[test]
fn submissions_keep_names_after_directory_changes() {
    reset_state();
    let college = CollegeApi::create(
        ADMIN,
        &CollegeInput {
            name: Some("Acme University".to_string()),
            logo_url: None,
        },
    )
    .expect("college");
    let campus = CollegeApi::add_campus(
        ADMIN,
        &college.id,
        &CampusInput {
            name: Some("North".to_string()),
            city: Some("Springfield".to_string()),
            ..CampusInput::default()
        },
    )
    .expect("campus");
    let batch = BatchApi::create(
        ADMIN,
        &BatchInput {
            name: Some("2024".to_string()),
            college_id: Some(college.id.clone()),
        },
    )
    .expect("batch");

    let submitted = SubmissionApi::submit(SubmissionInput {
        student_name: Some("Jordan Lee".to_string()),
        college: Some(college.name.clone()),
        campus: Some(campus.name.clone()),
        batch: Some(batch.name.clone()),
        measurements: vec![Measurement {
            label: "chest".to_string(),
            value: 91.0,
        }],
        ..SubmissionInput::default()
    })
    .expect("public submit");

    CollegeApi::update(
        ADMIN,
        &college.id,
        &CollegeInput {
            name: Some("Acme Institute".to_string()),
            logo_url: None,
        },
    )
    .expect("rename");
    CollegeApi::delete(ADMIN, &college.id).expect("delete");

    let stored = SubmissionApi::get(ADMIN, &submitted.id).expect("get");
    assert_eq!(stored, submitted);
    assert_eq!(stored.college.as_deref(), Some("Acme University"));
    assert_eq!(stored.campus.as_deref(), Some("North"));
    assert_eq!(stored.batch.as_deref(), Some("2024"));
}

#[test]
fn reading_submissions_is_admin_only() {
    reset_state();
    let submitted = SubmissionApi::submit(SubmissionInput {
        student_name: Some("Sam Park".to_string()),
        ..SubmissionInput::default()
    })
    .expect("submit");

    assert_eq!(SubmissionApi::list(None).unwrap_err().code, ErrorCode::Unauthorized);
    assert_eq!(
        SubmissionApi::get(Some("guess"), &submitted.id).unwrap_err().code,
        ErrorCode::Unauthorized
    );

    assert_eq!(SubmissionApi::list(ADMIN).expect("list").len(), 1);
    SubmissionApi::delete(ADMIN, &submitted.id).expect("delete");
    SubmissionApi::delete(ADMIN, &submitted.id).expect("repeat delete is a no-op");
    assert_eq!(
        SubmissionApi::get(ADMIN, &submitted.id).unwrap_err().code,
        ErrorCode::NotFound
    );
}
