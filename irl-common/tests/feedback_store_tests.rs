//! Integration tests for database bootstrap and the feedback store

use irl_common::db::{add_feedback, delete_feedback, init_database, list_feedback};
use irl_common::section::{derive_section_key, TaxonomySelection};
use irl_common::session::SessionIdentity;
use irl_common::wizard::WizardStep;
use irl_common::Error;
use std::path::PathBuf;

fn test_db(name: &str) -> PathBuf {
    PathBuf::from(format!("/tmp/irl-test-{}-{}.db", name, std::process::id()))
}

#[tokio::test]
async fn test_database_creation_when_missing() {
    let db_path = test_db("create");
    let _ = std::fs::remove_file(&db_path);

    let result = init_database(&db_path).await;
    assert!(
        result.is_ok(),
        "Database initialization failed: {:?}",
        result.err()
    );
    assert!(db_path.exists(), "Database file was not created");

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_database_bootstrap_is_idempotent() {
    // Schema creation runs on every start; a second open must succeed
    // against the already-populated file.
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("feedback.db");

    let pool1 = init_database(&db_path).await.expect("first init");
    add_feedback(
        &pool1,
        "user-1",
        "First",
        WizardStep::Introduction,
        "GeneralIntro",
        "survives reopen",
    )
    .await
    .expect("insert");
    drop(pool1);

    let pool2 = init_database(&db_path).await.expect("second init");
    let records = list_feedback(&pool2, WizardStep::Introduction, None)
        .await
        .expect("list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body, "survives reopen");
}

#[tokio::test]
async fn test_list_filters_by_step_and_section_in_order() {
    let db_path = test_db("list-filter");
    let _ = std::fs::remove_file(&db_path);
    let pool = init_database(&db_path).await.unwrap();

    add_feedback(
        &pool,
        "u1",
        "One",
        WizardStep::MethodCategories,
        "Simulations",
        "first",
    )
    .await
    .unwrap();
    add_feedback(
        &pool,
        "u1",
        "One",
        WizardStep::MethodCategories,
        "Modeling",
        "other section",
    )
    .await
    .unwrap();
    add_feedback(
        &pool,
        "u2",
        "Two",
        WizardStep::ParentAttributes,
        "Simulations",
        "other step, same section label",
    )
    .await
    .unwrap();
    add_feedback(
        &pool,
        "u2",
        "Two",
        WizardStep::MethodCategories,
        "Simulations",
        "second",
    )
    .await
    .unwrap();

    let records = list_feedback(&pool, WizardStep::MethodCategories, Some("Simulations"))
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.step, "Method Categories");
        assert_eq!(record.section, "Simulations");
    }
    // Chronological, id as tie-break within timestamp resolution
    assert_eq!(records[0].body, "first");
    assert_eq!(records[1].body, "second");
    assert!(records[0].id < records[1].id);
    assert!(records[0].created_at <= records[1].created_at);

    // No section filter: everything under the step, all sections
    let all = list_feedback(&pool, WizardStep::MethodCategories, None)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_whitespace_body_rejected_without_insert() {
    let db_path = test_db("empty-body");
    let _ = std::fs::remove_file(&db_path);
    let pool = init_database(&db_path).await.unwrap();

    for body in ["", "   ", "\t\n  "] {
        let result = add_feedback(
            &pool,
            "u1",
            "One",
            WizardStep::Introduction,
            "GeneralIntro",
            body,
        )
        .await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    let records = list_feedback(&pool, WizardStep::Introduction, None)
        .await
        .unwrap();
    assert!(records.is_empty(), "rejected bodies must not create records");

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_body_is_stored_trimmed() {
    let db_path = test_db("trim");
    let _ = std::fs::remove_file(&db_path);
    let pool = init_database(&db_path).await.unwrap();

    let record = add_feedback(
        &pool,
        "u1",
        "One",
        WizardStep::FinalComments,
        "OverallFinal",
        "  padded remark  ",
    )
    .await
    .unwrap();
    assert_eq!(record.body, "padded remark");

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_delete_requires_matching_id_and_author() {
    let db_path = test_db("delete-auth");
    let _ = std::fs::remove_file(&db_path);
    let pool = init_database(&db_path).await.unwrap();

    let record = add_feedback(
        &pool,
        "owner",
        "Owner",
        WizardStep::Introduction,
        "GeneralIntro",
        "mine",
    )
    .await
    .unwrap();

    // Wrong author: no-op
    assert!(!delete_feedback(&pool, record.id, "intruder").await.unwrap());
    // Wrong id: no-op
    assert!(!delete_feedback(&pool, record.id + 999, "owner").await.unwrap());
    // Record is still there
    let remaining = list_feedback(&pool, WizardStep::Introduction, Some("GeneralIntro"))
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);

    // Matching pair deletes
    assert!(delete_feedback(&pool, record.id, "owner").await.unwrap());
    // Already deleted: no-op again
    assert!(!delete_feedback(&pool, record.id, "owner").await.unwrap());

    let remaining = list_feedback(&pool, WizardStep::Introduction, Some("GeneralIntro"))
        .await
        .unwrap();
    assert!(remaining.is_empty());

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_blank_stored_name_reads_as_anonymous() {
    let db_path = test_db("anon-read");
    let _ = std::fs::remove_file(&db_path);
    let pool = init_database(&db_path).await.unwrap();

    // The store substitutes at read time regardless of what was written
    let record = add_feedback(
        &pool,
        "u1",
        "",
        WizardStep::Introduction,
        "GeneralIntro",
        "nameless",
    )
    .await
    .unwrap();
    assert_eq!(record.display_name, "Anonymous");

    let records = list_feedback(&pool, WizardStep::Introduction, Some("GeneralIntro"))
        .await
        .unwrap();
    assert_eq!(records[0].display_name, "Anonymous");

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_scenario_named_partner_submits_on_introduction() {
    let db_path = test_db("scenario-intro");
    let _ = std::fs::remove_file(&db_path);
    let pool = init_database(&db_path).await.unwrap();

    let identity = SessionIdentity::new("A. Partner");
    add_feedback(
        &pool,
        &identity.user_id,
        &identity.display_name,
        WizardStep::Introduction,
        "GeneralIntro",
        "Looks good",
    )
    .await
    .unwrap();

    let records = list_feedback(&pool, WizardStep::Introduction, Some("GeneralIntro"))
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display_name, "A. Partner");
    assert_eq!(records[0].body, "Looks good");

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_scenario_two_sessions_share_a_section() {
    let db_path = test_db("scenario-two");
    let _ = std::fs::remove_file(&db_path);
    let pool = init_database(&db_path).await.unwrap();

    let first = SessionIdentity::new("First Partner");
    let second = SessionIdentity::new("Second Partner");

    add_feedback(
        &pool,
        &first.user_id,
        &first.display_name,
        WizardStep::MethodCategories,
        "Simulations",
        "from the first session",
    )
    .await
    .unwrap();
    add_feedback(
        &pool,
        &second.user_id,
        &second.display_name,
        WizardStep::MethodCategories,
        "Simulations",
        "from the second session",
    )
    .await
    .unwrap();

    let records = list_feedback(&pool, WizardStep::MethodCategories, Some("Simulations"))
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].body, "from the first session");
    assert_eq!(records[1].body, "from the second session");
    assert_eq!(records[0].user_id, first.user_id);
    assert_eq!(records[1].user_id, second.user_id);
    assert_ne!(records[0].user_id, records[1].user_id);

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_scenario_cross_user_delete_refused_on_composite_section() {
    let db_path = test_db("scenario-cross");
    let _ = std::fs::remove_file(&db_path);
    let pool = init_database(&db_path).await.unwrap();

    let author = SessionIdentity::new("X");
    let other = SessionIdentity::new("Y");

    let selection = TaxonomySelection::Child {
        category: "Testing".to_string(),
        parent: "Utility".to_string(),
        child: None,
    };
    let section = derive_section_key(WizardStep::ChildAttributes, &selection);
    assert_eq!(section, "Testing | Utility | General");

    let record = add_feedback(
        &pool,
        &author.user_id,
        &author.display_name,
        WizardStep::ChildAttributes,
        &section,
        "a remark on the general child bucket",
    )
    .await
    .unwrap();

    assert!(!delete_feedback(&pool, record.id, &other.user_id)
        .await
        .unwrap());

    let records = list_feedback(&pool, WizardStep::ChildAttributes, Some(&section))
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, record.id);

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_concurrent_appends_do_not_corrupt_the_ordered_view() {
    let db_path = test_db("concurrent");
    let _ = std::fs::remove_file(&db_path);
    let pool = init_database(&db_path).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            let identity = SessionIdentity::new(&format!("Partner {i}"));
            add_feedback(
                &pool,
                &identity.user_id,
                &identity.display_name,
                WizardStep::FinalComments,
                "OverallFinal",
                &format!("comment {i}"),
            )
            .await
        }));
    }
    for handle in handles {
        handle.await.expect("task").expect("insert");
    }

    let records = list_feedback(&pool, WizardStep::FinalComments, Some("OverallFinal"))
        .await
        .unwrap();
    assert_eq!(records.len(), 8);
    // ids are unique and the view is sorted
    for pair in records.windows(2) {
        assert!(pair[0].id < pair[1].id || pair[0].created_at < pair[1].created_at);
    }

    let _ = std::fs::remove_file(&db_path);
}
