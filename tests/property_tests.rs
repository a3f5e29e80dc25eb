//! Property-based tests for warehouse payload validation, image merging and
//! search filters run against SQLite.

mod common;

use common::TestApp;
use proptest::{prelude::*, test_runner::TestCaseError};
use std::future::Future;
use warehouse_directory::{
    db::{PageRequest, WarehouseFilter},
    dto::{warehouse::REQUIRED_FIELDS, WarehousePayload},
    errors::ServiceError,
    models::{WarehouseImages, MAX_WAREHOUSE_IMAGES},
};

fn complete_payload() -> WarehousePayload {
    WarehousePayload {
        warehouse_name: Some("North Hub".into()),
        address1: Some("12 Dock Road".into()),
        area_locality: Some("Peenya".into()),
        state: Some("Karnataka".into()),
        city: Some("Bengaluru".into()),
        total_lot_area: Some("1200".into()),
        covered_area: Some(800.0.into()),
        ..Default::default()
    }
}

fn drop_field(payload: &mut WarehousePayload, field: &str) {
    match field {
        "warehouse_name" => payload.warehouse_name = None,
        "address1" => payload.address1 = None,
        "areaLocality" => payload.area_locality = None,
        "state" => payload.state = None,
        "city" => payload.city = None,
        "totalLotArea" => payload.total_lot_area = None,
        "coveredArea" => payload.covered_area = None,
        other => panic!("unknown field {other}"),
    }
}

fn image_refs(prefix: &'static str, max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{1,8}", 0..=max)
        .prop_map(move |names| names.into_iter().map(|n| format!("/{prefix}/{n}.jpg")).collect())
}

fn block_on(test: impl Future<Output = Result<(), TestCaseError>>) -> Result<(), TestCaseError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime")
        .block_on(test)
}

async fn search_total(app: &TestApp, filter: WarehouseFilter) -> u64 {
    app.service()
        .search(filter, PageRequest::new(1, 50))
        .await
        .expect("search")
        .total
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn missing_fields_are_reported_exactly_and_in_order(mask in prop::collection::vec(any::<bool>(), 7)) {
        let mut payload = complete_payload();
        let mut expected = Vec::new();
        for (field, drop) in REQUIRED_FIELDS.iter().zip(&mask) {
            if *drop {
                drop_field(&mut payload, field);
                expected.push(field.to_string());
            }
        }

        match payload.validate_for_create() {
            Ok(_) => prop_assert!(expected.is_empty()),
            Err(ServiceError::ValidationError(v)) => {
                prop_assert_eq!(v.missing, expected);
                prop_assert!(v.invalid.is_empty());
            }
            Err(other) => prop_assert!(false, "unexpected error {other:?}"),
        }
    }

    #[test]
    fn merged_images_keep_existing_first_and_never_exceed_four(
        existing in image_refs("old", MAX_WAREHOUSE_IMAGES),
        new in image_refs("new", 6),
    ) {
        let current = WarehouseImages::for_create(existing.clone()).unwrap();
        let merged = current.appended(new.clone());

        prop_assert!(merged.as_slice().len() <= MAX_WAREHOUSE_IMAGES);
        prop_assert_eq!(&merged.as_slice()[..existing.len()], existing.as_slice());

        let expected: Vec<String> = existing
            .iter()
            .chain(new.iter())
            .take(MAX_WAREHOUSE_IMAGES)
            .cloned()
            .collect();
        if new.is_empty() {
            prop_assert_eq!(merged, current);
        } else {
            prop_assert_eq!(merged.as_slice(), expected.as_slice());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn state_filter_is_case_insensitive_equality(
        state in "[A-Za-z]{1,10}",
        other in "[A-Za-z]{1,10}",
        delete in any::<bool>(),
    ) {
        block_on(async move {
            let app = TestApp::new().await;
            let seeded = app.seed("Depot", "Central", "Austin", &state).await;
            if delete {
                app.service().soft_delete(seeded.id).await.expect("soft delete");
            }

            let same = search_total(&app, WarehouseFilter::new(None, Some(&state.to_uppercase()), None)).await;
            prop_assert_eq!(same, u64::from(!delete));

            if other.to_lowercase() != state.to_lowercase() {
                let different = search_total(&app, WarehouseFilter::new(None, Some(&other), None)).await;
                prop_assert_eq!(different, 0);
            }
            Ok(())
        })?;
    }

    #[test]
    fn q_matches_any_substring_of_the_name(
        prefix in "[a-z]{0,5}",
        needle in "[a-z]{1,5}",
        suffix in "[a-z]{0,5}",
    ) {
        block_on(async move {
            let app = TestApp::new().await;
            app.seed(&format!("{prefix}{needle}{suffix}"), "1", "2", "3").await;

            let found = search_total(&app, WarehouseFilter::new(Some(&needle.to_uppercase()), None, None)).await;
            prop_assert_eq!(found, 1);
            Ok(())
        })?;
    }
}
