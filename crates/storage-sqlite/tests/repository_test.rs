//! End-to-end repository tests against a real migrated SQLite file.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use tributo_core::auth::{AuthContext, ProfileRepositoryTrait, Role};
use tributo_core::classifications::{ClassificationRepositoryTrait, NewClassification};
use tributo_core::ingest::{ImportMode, IngestService, IngestServiceTrait};
use tributo_core::qualifications::{
    FactorSet, Market, NewTaxQualification, QualificationRepositoryTrait, QualificationService,
    QualificationServiceTrait, COPY_SEQUENCE_MARKER,
};
use tributo_core::tax_data::TaxDataRepositoryTrait;
use tributo_core::users::{NewRegistration, NewUser, UserRepositoryTrait};

use tributo_storage_sqlite::classifications::ClassificationRepository;
use tributo_storage_sqlite::profiles::ProfileRepository;
use tributo_storage_sqlite::qualifications::QualificationRepository;
use tributo_storage_sqlite::tax_data::TaxDataRepository;
use tributo_storage_sqlite::users::UserRepository;
use tributo_storage_sqlite::{create_pool, init, run_migrations, spawn_writer, DbPool, WriteHandle};

fn setup() -> (TempDir, Arc<DbPool>, WriteHandle) {
    let dir = tempfile::tempdir().unwrap();
    let db_path = init(dir.path().to_str().unwrap()).expect("init database");
    let pool = create_pool(&db_path).expect("create pool");
    run_migrations(&pool).expect("run migrations");
    let writer = spawn_writer((*pool).clone());
    (dir, pool, writer)
}

fn admin_ctx() -> AuthContext {
    AuthContext::new("admin-1", "admin@example.com", true, Role::Admin)
}

#[tokio::test]
async fn registration_lands_user_registration_and_profile_atomically() {
    let (_dir, pool, writer) = setup();
    let users = UserRepository::new(pool.clone(), writer.clone());
    let profiles = ProfileRepository::new(pool.clone(), writer.clone());

    let user = users
        .create_with_registration(
            NewUser {
                email: "ana@example.com".to_string(),
                full_name: "Ana Contreras".to_string(),
                password_hash: "hash".to_string(),
                is_staff: false,
            },
            NewRegistration {
                full_name: "Ana Contreras".to_string(),
                email: "ana@example.com".to_string(),
                country: "chile".to_string(),
                tax_identifier: "12.345.678-9".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            },
            Role::Broker,
        )
        .await
        .unwrap();

    let found = users.find_by_email("ana@example.com").unwrap().unwrap();
    assert_eq!(found.id, user.id);

    let profile = profiles.get_by_user_id(&user.id).unwrap().unwrap();
    assert_eq!(profile.role, Role::Broker);

    let registrations = users.recent_registrations(10).unwrap();
    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].country, "chile");
}

#[tokio::test]
async fn deleting_a_classification_cascades_to_its_records() {
    let (_dir, pool, writer) = setup();
    let classifications = ClassificationRepository::new(pool.clone(), writer.clone());
    let tax_data = TaxDataRepository::new(pool.clone(), writer.clone());

    let classification = classifications
        .create(NewClassification {
            name: "Renta Fija".to_string(),
        })
        .await
        .unwrap();

    let record = tax_data
        .create(tributo_core::tax_data::NewTaxData {
            classification_id: classification.id.clone(),
            name: "Bono A".to_string(),
            amount: Some(dec!(1000.50)),
            factor: Some(dec!(1.05)),
            record_date: NaiveDate::from_ymd_opt(2024, 1, 15),
        })
        .await
        .unwrap();

    assert_eq!(
        classifications.list_with_counts().unwrap()[0].data_count,
        1
    );

    classifications.delete(&classification.id).await.unwrap();

    assert!(tax_data.get_by_id(&record.id).is_err());
    let response = tax_data.search(1, 50, None, None).unwrap();
    assert_eq!(response.meta.total_row_count, 0);
}

#[tokio::test]
async fn update_mode_ingestion_is_idempotent_against_sqlite() {
    let (_dir, pool, writer) = setup();
    let classifications = Arc::new(ClassificationRepository::new(pool.clone(), writer.clone()));
    let tax_data = Arc::new(TaxDataRepository::new(pool.clone(), writer.clone()));

    let classification = classifications
        .create(NewClassification {
            name: "X".to_string(),
        })
        .await
        .unwrap();

    let service = IngestService::new(classifications.clone(), tax_data.clone());
    let csv = b"Nombre,Monto,Factor,Fecha\nA,100.50,1.05,2024-01-15\n,,,\nB,bad,2.0,2024-02-01\n";

    let first = service
        .import_file(
            &admin_ctx(),
            &classification.id,
            "datos.csv",
            csv,
            ImportMode::Update,
        )
        .await
        .unwrap();
    assert_eq!((first.created, first.updated, first.skipped), (2, 0, 1));

    let second = service
        .import_file(
            &admin_ctx(),
            &classification.id,
            "datos.csv",
            csv,
            ImportMode::Update,
        )
        .await
        .unwrap();
    assert_eq!((second.created, second.updated), (0, 2));

    let response = tax_data.search(1, 50, None, None).unwrap();
    assert_eq!(response.meta.total_row_count, 2);

    let a = tax_data
        .find_by_classification_and_name(&classification.id, "A")
        .unwrap()
        .unwrap();
    assert_eq!(a.amount, Some(dec!(100.50)));
    assert_eq!(a.factor, Some(dec!(1.05)));
    assert_eq!(a.record_date, NaiveDate::from_ymd_opt(2024, 1, 15));
}

async fn register_user(
    users: &UserRepository,
    email: &str,
    is_staff: bool,
    role: Role,
) -> tributo_core::users::User {
    users
        .create_with_registration(
            NewUser {
                email: email.to_string(),
                full_name: email.to_string(),
                password_hash: "hash".to_string(),
                is_staff,
            },
            NewRegistration {
                full_name: email.to_string(),
                email: email.to_string(),
                country: "chile".to_string(),
                tax_identifier: "1-9".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            },
            role,
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn qualification_copy_persists_with_a_fresh_unique_sequence() {
    let (_dir, pool, writer) = setup();
    let users = UserRepository::new(pool.clone(), writer.clone());
    let repository = Arc::new(QualificationRepository::new(pool.clone(), writer.clone()));
    let service = QualificationService::new(repository.clone());

    let broker_user = register_user(&users, "broker@example.com", false, Role::Broker).await;
    let admin_user = register_user(&users, "admin2@example.com", true, Role::Admin).await;

    let broker = AuthContext::new(
        broker_user.id.clone(),
        broker_user.email.clone(),
        false,
        Role::Broker,
    );
    let admin = AuthContext::new(
        admin_user.id.clone(),
        admin_user.email.clone(),
        true,
        Role::Admin,
    );
    let original = service
        .create_qualification(
            &broker,
            NewTaxQualification {
                market: Market::Acciones,
                instrument: "FALABELLA".to_string(),
                description: "Dividendo definitivo".to_string(),
                payment_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                event_sequence: "100000807".to_string(),
                dividend: dec!(55.12),
                historical_value: dec!(120.5),
                update_factor: dec!(1.013),
                year: 2024,
                is_fut: false,
                pending_flag: true,
                commercial_period: Some(2023),
                capital_event: dec!(0),
                factors: FactorSet {
                    factor_08: dec!(0.12345678),
                    factor_198: dec!(0.00000001),
                    ..Default::default()
                },
            },
        )
        .await
        .unwrap();

    let copy = service.copy_qualification(&admin, &original.id).await.unwrap();

    let prefix = format!("{}{}", original.event_sequence, COPY_SEQUENCE_MARKER);
    assert!(copy.event_sequence.starts_with(&prefix));

    // Round-trip through SQLite keeps the factor precision.
    let reloaded = repository.get_by_id(&copy.id).unwrap();
    assert_eq!(reloaded.factors.factor_08, dec!(0.12345678));
    assert_eq!(reloaded.factors.factor_198, dec!(0.00000001));
    assert_eq!(reloaded.origin, original.origin);
    assert_eq!(reloaded.created_by.as_deref(), Some(admin_user.id.as_str()));

    let stats = repository.creator_stats(&broker_user.id).unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.by_market[0].key, "ACCIONES");
}
