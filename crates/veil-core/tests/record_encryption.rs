use std::sync::Arc;

use veil_core::{
    DecryptionOutcome, PassphraseSession, Record, RecordEncryptor, RecordKind,
    CANNOT_DECRYPT_PLACEHOLDER,
};

fn encryptor_with(session: &Arc<PassphraseSession>) -> RecordEncryptor {
    RecordEncryptor::new(Arc::clone(session))
}

#[tokio::test]
async fn test_write_fetch_round_trip() {
    let session = Arc::new(PassphraseSession::new());
    session.set("Harbor-Knight-Sunset-Valley-7-42");
    let encryptor = encryptor_with(&session);

    let note = Record::new(RecordKind::Note)
        .with_field("content", "therapy appointment moved to thursday")
        .with_data(serde_json::json!({"category": "personal", "tags": ["health"]}));

    let stored = encryptor
        .encrypt_record_fields(&note, RecordKind::Note.encryptable_fields())
        .await;

    // The persisted shape carries all four attributes for the sealed field
    let content = stored.field("content").expect("content should exist");
    assert!(content.is_encrypted);
    assert!(content.nonce.is_some());
    assert!(content.salt.is_some());
    assert_ne!(content.value, "therapy appointment moved to thursday");

    // Non-encryptable attributes are untouched
    assert_eq!(stored.data["category"], "personal");

    let views = encryptor.decrypt_records(vec![stored]).await;
    assert_eq!(
        views[0].field("content").expect("content should exist").value,
        "therapy appointment moved to thursday"
    );
}

#[tokio::test]
async fn test_mixed_collection_decrypts_in_order() {
    let session = Arc::new(PassphraseSession::new());
    session.set("Harbor-Knight-Sunset-Valley-7-42");
    let encryptor = encryptor_with(&session);

    // A plaintext legacy record, an encrypted record, and a corrupted one
    let legacy = Record::new(RecordKind::Task).with_field("description", "water the plants");

    let task = Record::new(RecordKind::Task).with_field("description", "renew passport");
    let task = encryptor
        .encrypt_record_fields(&task, RecordKind::Task.encryptable_fields())
        .await;

    let broken_source =
        Record::new(RecordKind::Task).with_field("description", "secret errand");
    let mut broken = encryptor
        .encrypt_record_fields(&broken_source, RecordKind::Task.encryptable_fields())
        .await;
    let field = broken
        .fields
        .get_mut("description")
        .expect("description should exist");
    field.value = format!("x{}", field.value);

    let ids = [legacy.id, task.id, broken.id];
    let views = encryptor.decrypt_records(vec![legacy, task, broken]).await;

    assert_eq!(views.len(), 3);
    assert_eq!([views[0].id, views[1].id, views[2].id], ids);

    assert_eq!(
        views[0]
            .field("description")
            .expect("description should exist")
            .value,
        "water the plants"
    );
    assert_eq!(
        views[1]
            .field("description")
            .expect("description should exist")
            .value,
        "renew passport"
    );
    assert_eq!(
        views[2]
            .field("description")
            .expect("description should exist")
            .value,
        CANNOT_DECRYPT_PLACEHOLDER
    );
}

#[tokio::test]
async fn test_toggle_asymmetry_old_data_needs_old_passphrase() {
    let session = Arc::new(PassphraseSession::new());
    session.set("original-passphrase-Abc123");
    let encryptor = encryptor_with(&session);

    let goal = Record::new(RecordKind::Goal)
        .with_field("title", "Run a marathon")
        .with_field("description", "Train four times a week");
    let stored = encryptor
        .encrypt_record_fields(&goal, RecordKind::Goal.encryptable_fields())
        .await;

    // Disabling encryption alters nothing already stored
    encryptor.toggle_encryption(false);
    assert!(!session.is_active());
    let locked_views = encryptor.decrypt_records(vec![stored.clone()]).await;
    assert_eq!(
        locked_views[0].field("title").expect("title should exist"),
        stored.field("title").expect("title should exist")
    );

    // A different passphrase cannot read the old record
    session.set("replacement-passphrase-Xyz789");
    let wrong_views = encryptor.decrypt_records(vec![stored.clone()]).await;
    assert_eq!(
        wrong_views[0].field("title").expect("title should exist").value,
        CANNOT_DECRYPT_PLACEHOLDER
    );

    // The original passphrase still can
    session.set("original-passphrase-Abc123");
    let views = encryptor.decrypt_records(vec![stored]).await;
    assert_eq!(
        views[0].field("title").expect("title should exist").value,
        "Run a marathon"
    );
}

#[tokio::test]
async fn test_rotation_mid_batch_yields_mixed_outcomes() {
    let session = Arc::new(PassphraseSession::new());
    session.set("first-passphrase-Abc123");
    let encryptor = encryptor_with(&session);

    let before = Record::new(RecordKind::Note).with_field("content", "written under first");
    let before = encryptor
        .encrypt_record_fields(&before, RecordKind::Note.encryptable_fields())
        .await;

    session.set("second-passphrase-Xyz789");
    let after = Record::new(RecordKind::Note).with_field("content", "written under second");
    let after = encryptor
        .encrypt_record_fields(&after, RecordKind::Note.encryptable_fields())
        .await;

    // Under the second passphrase, the first record is unreadable and the
    // second is fine: a tolerated mix, not an error
    let views = encryptor.decrypt_records(vec![before, after]).await;
    assert_eq!(
        views[0].field("content").expect("content should exist").value,
        CANNOT_DECRYPT_PLACEHOLDER
    );
    assert_eq!(
        views[1].field("content").expect("content should exist").value,
        "written under second"
    );
}

#[test]
fn test_single_field_boundary_outcomes() {
    let session = Arc::new(PassphraseSession::new());
    let encryptor = encryptor_with(&session);
    let codec = encryptor.codec();

    // Inactive session: encryption declines, encrypted data reads as Locked
    assert!(codec.encrypt_field("secret").is_none());

    session.set("my-secure-passphrase-123");
    let field = codec
        .encrypt_field("secret")
        .expect("encryption should succeed");

    session.clear();
    assert_eq!(codec.decrypt_field(&field), DecryptionOutcome::Locked);

    session.set("my-secure-passphrase-123");
    assert_eq!(
        codec.decrypt_field(&field),
        DecryptionOutcome::Plaintext("secret".to_string())
    );
}
