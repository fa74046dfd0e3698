use audience_builder::audience::{
    participants_from_source_config, source_config_from_participants, AudienceParticipant,
    RosterImporter,
};
use serde_json::{json, Value};

fn participant(user_id: &str) -> AudienceParticipant {
    AudienceParticipant::new(user_id).expect("non-blank user id")
}

#[test]
fn decodes_legacy_aliases_and_drops_records_without_ids() {
    let source = json!({
        "participants": [
            {"id": "u1"},
            {"userId": "u2", "managerId": "m1"},
            {}
        ]
    });

    assert_eq!(
        participants_from_source_config(&source),
        vec![participant("u1"), participant("u2").with_supervisor("m1")]
    );
}

#[test]
fn trims_whitespace_and_reads_nested_department() {
    let source = json!({
        "participants": [{"userId": " u3 ", "attributes": {"department": " Eng "}}]
    });

    assert_eq!(
        participants_from_source_config(&source),
        vec![participant("u3").with_department("Eng")]
    );
}

#[test]
fn integral_float_ids_decode_as_integers() {
    let source = json!({
        "participants": [
            {"id": 10.0, "managerId": 7.0},
            {"userId": 12.5, "attributes": {"department": 400}}
        ]
    });

    assert_eq!(
        participants_from_source_config(&source),
        vec![
            participant("10").with_supervisor("7"),
            participant("12.5").with_department("400"),
        ]
    );
}

#[test]
fn malformed_sources_yield_no_participants() {
    for source in [
        Value::Null,
        json!([{"userId": "u1"}]),
        json!("participants"),
        json!({}),
        json!({"participants": {"userId": "u1"}}),
        json!({"participants": "u1,u2"}),
    ] {
        assert!(
            participants_from_source_config(&source).is_empty(),
            "expected no participants from {source}"
        );
    }
}

#[test]
fn keeps_order_and_duplicates_and_skips_non_object_entries() {
    let source = json!({
        "participants": [
            "u0",
            {"userId": "u2"},
            null,
            {"userId": "u1", "department": "Ops"},
            {"userId": "u2", "supervisorId": "  "},
            42
        ]
    });

    assert_eq!(
        participants_from_source_config(&source),
        vec![
            participant("u2"),
            participant("u1").with_department("Ops"),
            participant("u2"),
        ]
    );
}

#[test]
fn encoder_omits_blank_optionals() {
    let participants = vec![AudienceParticipant {
        user_id: "u1".to_string(),
        supervisor_id: Some(String::new()),
        department: None,
    }];

    assert_eq!(
        source_config_from_participants(&participants),
        json!({"participants": [{"userId": "u1"}]})
    );
}

#[test]
fn encoder_revalidates_caller_held_values() {
    let participants = vec![
        AudienceParticipant {
            user_id: "   ".to_string(),
            supervisor_id: Some("m1".to_string()),
            department: None,
        },
        AudienceParticipant {
            user_id: " u2 ".to_string(),
            supervisor_id: Some(" m2 ".to_string()),
            department: Some(" Eng ".to_string()),
        },
    ];

    let encoded = source_config_from_participants(&participants);
    assert_eq!(
        encoded,
        json!({
            "participants": [
                {"userId": "u2", "supervisorId": "m2", "department": "Eng"}
            ]
        })
    );
    let keys: Vec<&String> = encoded
        .as_object()
        .expect("object payload")
        .keys()
        .collect();
    assert_eq!(keys, vec!["participants"]);
}

#[test]
fn decoding_an_encoded_list_is_identity() {
    let source = json!({
        "version": 3,
        "participants": [
            {"id": " u1 ", "managerId": "m1", "attributes": {"department": "Eng"}},
            {"userId": "u2"},
            {"userId": "u3", "supervisorId": "u1", "department": " Sales "},
            {"department": "Nobody"}
        ]
    });

    let decoded = participants_from_source_config(&source);
    let reencoded = source_config_from_participants(&decoded);
    assert_eq!(participants_from_source_config(&reencoded), decoded);
    assert!(reencoded.get("version").is_none());
}

#[test]
fn roster_import_feeds_the_encoder() {
    let csv = "userId,managerId,department\nu1,,Eng\nu2,u1,Eng\n";
    let participants = RosterImporter::from_reader(csv.as_bytes()).expect("roster imports");

    assert_eq!(
        source_config_from_participants(&participants),
        json!({
            "participants": [
                {"userId": "u1", "department": "Eng"},
                {"userId": "u2", "supervisorId": "u1", "department": "Eng"}
            ]
        })
    );
}
