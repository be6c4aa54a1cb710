// Category B - public api driven end to end with a TOML config.

use intake_core::{
    api::{BatchApi, CollegeApi, LogApi, SchoolApi, SubmissionApi},
    dto::{
        directory::{BatchInput, CampusInput, CollegeInput, SchoolInput},
        error::ErrorCode,
        log::LogQuery,
        submission::{Measurement, SubmissionInput},
    },
    init_config,
    utils::digest::sha256_hex,
};

const TOKEN: &str = "ops-token";

fn setup() -> Option<&'static str> {
    let toml = format!(
        "[auth]\ntoken_sha256 = [\"{}\"]\n\n[directory]\nmax_campuses_per_college = 4\n",
        sha256_hex(TOKEN.as_bytes())
    );
    init_config(&toml).expect("config");

    Some(TOKEN)
}

fn named<T: Default>(build: impl FnOnce(&mut T)) -> T {
    let mut value = T::default();
    build(&mut value);
    value
}

#[test]
fn intake_directory_round() {
    let admin = setup();

    let school = SchoolApi::create(
        admin,
        &SchoolInput {
            name: Some("Riverside High".to_string()),
        },
    )
    .expect("school");

    let college = CollegeApi::create(
        admin,
        &named(|c: &mut CollegeInput| {
            c.name = Some("Acme University".to_string());
            c.logo_url = Some("https://acme.example/logo.png".to_string());
        }),
    )
    .expect("college");
    assert_eq!(college.logo_url.as_deref(), Some("https://acme.example/logo.png"));
    assert!(college.campuses.is_empty());

    let north = CollegeApi::add_campus(
        admin,
        &college.id,
        &named(|c: &mut CampusInput| {
            c.name = Some("North".to_string());
            c.city = Some("Springfield".to_string());
        }),
    )
    .expect("campus");

    let batch = BatchApi::create(
        admin,
        &named(|b: &mut BatchInput| {
            b.name = Some("2024".to_string());
            b.college_id = Some(college.id.clone());
        }),
    )
    .expect("batch");

    // the public form reads without a token
    let picker = BatchApi::list_for_college(&college.id).expect("picker");
    assert_eq!(picker, vec![batch.clone()]);
    assert_eq!(CollegeApi::get(&college.id).expect("college").campuses, vec![north.clone()]);

    let submitted = SubmissionApi::submit(SubmissionInput {
        student_name: Some("Jordan Lee".to_string()),
        school: Some(school.name.clone()),
        college: Some(college.name.clone()),
        campus: Some(north.name.clone()),
        batch: Some(batch.name.clone()),
        measurements: vec![Measurement {
            label: "shoulder".to_string(),
            value: 44.5,
        }],
        ..SubmissionInput::default()
    })
    .expect("submit");

    CollegeApi::delete(admin, &college.id).expect("delete college");

    assert!(CollegeApi::list().expect("colleges").is_empty());
    assert!(BatchApi::list().expect("batches").is_empty());
    assert_eq!(SchoolApi::list().expect("schools"), vec![school]);

    let kept = SubmissionApi::get(admin, &submitted.id).expect("submission");
    assert_eq!(kept.college.as_deref(), Some("Acme University"));
    assert_eq!(kept.campus.as_deref(), Some("North"));

    let cascade_log = LogApi::page(
        admin,
        &LogQuery {
            topic: Some("cascade".to_string()),
            ..LogQuery::default()
        },
    )
    .expect("log");
    assert_eq!(cascade_log.total, 1);
}

#[test]
fn configured_campus_limit_is_enforced() {
    let admin = setup();
    let college = CollegeApi::create(
        admin,
        &named(|c: &mut CollegeInput| c.name = Some("Beta College".to_string())),
    )
    .expect("college");

    for i in 0..4 {
        CollegeApi::add_campus(
            admin,
            &college.id,
            &named(|c: &mut CampusInput| {
                c.name = Some(format!("Campus {i}"));
                c.city = Some("Shelbyville".to_string());
            }),
        )
        .expect("within limit");
    }

    let err = CollegeApi::add_campus(
        admin,
        &college.id,
        &named(|c: &mut CampusInput| {
            c.name = Some("One Too Many".to_string());
            c.city = Some("Shelbyville".to_string());
        }),
    )
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceExhausted);
}

#[test]
fn config_is_rendered_back_as_toml() {
    setup();

    let rendered = intake_core::config_toml().expect("toml");

    assert!(rendered.contains("max_campuses_per_college = 4"));
    assert!(init_config(&rendered).is_err(), "config initializes once");
}
