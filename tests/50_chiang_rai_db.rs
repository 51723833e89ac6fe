//! Database-backed checks for the faculty importer and the lazy seeding of
//! the Chiang Rai tables.
//!
//! These need Postgres and are skipped by default. Run them against a
//! disposable database with:
//!
//!     DATABASE_URL=postgres://... cargo test --test 50_chiang_rai_db -- --ignored

use anyhow::Result;
use uuid::Uuid;

use soc_faculty_api::database::manager::DatabaseManager;
use soc_faculty_api::database::models::chiang_rai::StaffGroup;
use soc_faculty_api::database::models::staff::{AcademicPosition, StaffType};
use soc_faculty_api::services::chiang_rai_service::{self, ImportSiteStaff};
use soc_faculty_api::services::department_service::{self, CreateDepartment};
use soc_faculty_api::services::staff_service::{self, CreateStaff};
use soc_faculty_api::services::ServiceError;

async fn setup() -> Result<()> {
    DatabaseManager::run_migrations().await?;
    Ok(())
}

async fn site_staff_count() -> Result<i64> {
    let pool = DatabaseManager::pool().await?;
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM chiang_rai_staff")
        .fetch_one(&pool)
        .await?;
    Ok(count)
}

fn import_request(faculty_staff_id: Uuid) -> ImportSiteStaff {
    ImportSiteStaff {
        faculty_staff_id,
        staff_group: StaffGroup::Executive,
        position: Some("หัวหน้าฝ่ายวิชาการ".to_string()),
        sort_order: 0,
    }
}

#[tokio::test]
#[ignore = "requires a Postgres database via DATABASE_URL"]
async fn import_with_unknown_faculty_id_creates_nothing() -> Result<()> {
    setup().await?;
    let before = site_staff_count().await?;

    let err = chiang_rai_service::import_site_staff(import_request(Uuid::new_v4()))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(_)), "expected NotFound, got {err}");
    assert_eq!(site_staff_count().await?, before, "a row was created for a missing profile");
    Ok(())
}

#[tokio::test]
#[ignore = "requires a Postgres database via DATABASE_URL"]
async fn importing_the_same_profile_twice_creates_two_rows() -> Result<()> {
    setup().await?;

    let department = department_service::create(CreateDepartment {
        name_th: "สาขาวิชาทดสอบ".to_string(),
        name_en: None,
        is_academic_unit: true,
    })
    .await?;

    let profile = staff_service::create(CreateStaff {
        user_id: None,
        department_id: department.id,
        prefix_th: Some("ดร.".to_string()),
        first_name_th: "สมชาย".to_string(),
        last_name_th: "ใจดี".to_string(),
        prefix_en: None,
        first_name_en: None,
        last_name_en: None,
        staff_type: StaffType::Academic,
        academic_position: Some(AcademicPosition::AssociateProf),
        admin_position: None,
        education: None,
        contact_email: Some("somchai@crru.ac.th".to_string()),
        expertise: None,
        image_url: None,
        bio: None,
        sort_order: 0,
        is_executive: false,
    })
    .await?;

    let first = chiang_rai_service::import_site_staff(import_request(profile.id)).await?;
    let second = chiang_rai_service::import_site_staff(import_request(profile.id)).await?;

    // No uniqueness constraint: the second import is an independent record
    assert_ne!(first.id, second.id);
    assert_eq!(first.faculty_staff_id, Some(profile.id));
    assert_eq!(second.faculty_staff_id, Some(profile.id));

    assert_eq!(first.title.as_deref(), Some("ดร."));
    assert_eq!(first.academic_title.as_deref(), Some("รศ."));
    assert_eq!(first.position.as_deref(), Some("หัวหน้าฝ่ายวิชาการ"));
    assert!(first.is_active);

    let pool = DatabaseManager::pool().await?;
    sqlx::query("DELETE FROM chiang_rai_staff WHERE faculty_staff_id = $1")
        .bind(profile.id)
        .execute(&pool)
        .await?;
    staff_service::remove(profile.id).await?;
    department_service::remove(department.id).await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a Postgres database via DATABASE_URL"]
async fn listing_seeds_an_empty_table_exactly_once() -> Result<()> {
    setup().await?;
    let pool = DatabaseManager::pool().await?;

    sqlx::query("DELETE FROM chiang_rai_identities").execute(&pool).await?;

    let first = chiang_rai_service::find_identities().await?;
    assert_eq!(first.len(), 5, "empty table should receive the full seed batch");

    // Second listing must not top the table up again
    let second = chiang_rai_service::find_identities().await?;
    assert_eq!(second.len(), 5);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chiang_rai_identities")
        .fetch_one(&pool)
        .await?;
    assert_eq!(count, 5);
    Ok(())
}
