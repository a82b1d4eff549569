// tests/types_tests.rs
use appointment_schema::crypto::CryptoCodec;
use appointment_schema::enums::*;
use appointment_schema::error::CryptoError;
use appointment_schema::types::{EncryptedEnum, EncryptedString};
use appointment_schema::db::open_in_memory;
use rusqlite::params;

mod support;
use support::codec;

#[test]
fn test_null_passes_through_both_directions() {
    let codec = codec();
    let column = EncryptedString::new(&codec, 255);
    assert_eq!(column.bind(None).unwrap(), None);
    assert_eq!(column.result(None).unwrap(), None);
}

#[test]
fn test_null_needs_no_secret() {
    let codec = CryptoCodec::unavailable();
    let column = EncryptedString::new(&codec, 255);
    assert_eq!(column.bind(None).unwrap(), None);
    assert!(matches!(
        column.bind(Some("x")),
        Err(CryptoError::SecretUnavailable)
    ));
}

#[test]
fn test_bind_then_result_roundtrip() {
    let codec = codec();
    let column = EncryptedString::new(&codec, 255);
    let stored = column.bind(Some("alice@example.com")).unwrap();
    assert_eq!(
        stored.as_deref(),
        Some("yBReHT8laalKaMJyQhBtsjvaem8XnepKYmy8YcuVhRY=")
    );
    assert_eq!(
        column.result(stored.as_deref()).unwrap().as_deref(),
        Some("alice@example.com")
    );
}

#[test]
fn test_sql_type_uses_length_formula() {
    let codec = codec();
    assert_eq!(EncryptedString::new(&codec, 255).sql_type(), "VARCHAR(344)");
    assert_eq!(EncryptedString::new(&codec, 255).column_length(), Some(344));
    assert_eq!(EncryptedString::new(&codec, 2048).sql_type(), "VARCHAR(2752)");
    assert_eq!(EncryptedString::text(&codec).sql_type(), "TEXT");
    assert_eq!(EncryptedString::text(&codec).column_length(), None);
}

#[test]
fn test_encrypted_enum_roundtrip() {
    let codec = codec();
    let column = EncryptedEnum::<MeetingLinkProviderType>::new(&codec, 255);
    let stored = column.bind(Some(MeetingLinkProviderType::GoogleMeet)).unwrap();
    assert_eq!(
        column.result(stored.as_deref()).unwrap(),
        Some(MeetingLinkProviderType::GoogleMeet)
    );
}

#[test]
fn test_encrypted_enum_stores_member_name() {
    let codec = codec();
    let column = EncryptedEnum::<MeetingLinkProviderType>::new(&codec, 255);
    let stored = column.bind(Some(MeetingLinkProviderType::None)).unwrap().unwrap();
    assert_eq!(codec.decode(&stored).unwrap(), "none");
    assert_eq!(column.sql_type(), "VARCHAR(344)");
}

#[test]
fn test_encrypted_enum_rejects_unknown_member_on_write() {
    let codec = codec();
    let column = EncryptedEnum::<MeetingLinkProviderType>::new(&codec, 255);
    let err = column.bind_str(Some("teams")).unwrap_err();
    match err {
        CryptoError::InvalidEnumMember { enum_name, value } => {
            assert_eq!(enum_name, "MeetingLinkProviderType");
            assert_eq!(value, "teams");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(column.bind_str(None).unwrap(), None);
}

#[test]
fn test_encrypted_enum_rejects_unknown_member_on_read() {
    let codec = codec();
    let column = EncryptedEnum::<MeetingLinkProviderType>::new(&codec, 255);
    let stored = codec.encode("teams").unwrap();
    assert!(matches!(
        column.result(Some(stored.as_str())),
        Err(CryptoError::InvalidEnumMember { .. })
    ));
}

#[test]
fn test_equality_lookup_on_encrypted_column() {
    let codec = codec();
    let email = EncryptedString::new(&codec, 255);
    let conn = open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "CREATE TABLE subscribers (id INTEGER PRIMARY KEY, email {} NOT NULL)",
        email.sql_type()
    ))
    .unwrap();

    for address in ["alice@example.com", "bob@example.com", "carol@example.com"] {
        conn.execute(
            "INSERT INTO subscribers (email) VALUES (?1)",
            params![email.bind(Some(address)).unwrap()],
        )
        .unwrap();
    }

    let lookup = email.bind(Some("bob@example.com")).unwrap();
    let id: i64 = conn
        .query_row(
            "SELECT id FROM subscribers WHERE email = ?1",
            params![lookup],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(id, 2);
}

#[test]
fn test_stored_enum_parse_and_members() {
    assert_eq!(BookingStatus::parse("cancelled"), Some(BookingStatus::Cancelled));
    assert_eq!(BookingStatus::parse("Cancelled"), None);
    assert_eq!(
        ExternalConnectionType::member_names(),
        vec!["zoom", "google", "fxa", "caldav"]
    );
    assert_eq!(SubscriberLevel::MEMBERS.len(), 3);
    assert_eq!(LocationType::InPerson.to_string(), "inperson");
}

#[test]
fn test_stored_enum_serde_uses_member_names() {
    let json = serde_json::to_string(&MeetingLinkProviderType::GoogleMeet).unwrap();
    assert_eq!(json, "\"google_meet\"");
    let back: InviteStatus = serde_json::from_str("\"revoked\"").unwrap();
    assert_eq!(back, InviteStatus::Revoked);
}
