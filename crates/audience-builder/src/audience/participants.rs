use super::coerce::{field, field_or_alias, text};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

const PARTICIPANTS_KEY: &str = "participants";
const USER_ID_KEY: &str = "userId";
const SUPERVISOR_ID_KEY: &str = "supervisorId";
const DEPARTMENT_KEY: &str = "department";
const ATTRIBUTES_KEY: &str = "attributes";

/// Legacy spelling of `userId` accepted on read.
const USER_ID_ALIAS: &str = "id";
/// Legacy spelling of `supervisorId` accepted on read.
const SUPERVISOR_ID_ALIAS: &str = "managerId";

/// Member of a campaign audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceParticipant {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl AudienceParticipant {
    /// Returns `None` when the user id is blank.
    pub fn new(user_id: &str) -> Option<Self> {
        non_blank(user_id).map(|user_id| Self {
            user_id,
            supervisor_id: None,
            department: None,
        })
    }

    pub fn with_supervisor(mut self, supervisor_id: &str) -> Self {
        self.supervisor_id = non_blank(supervisor_id);
        self
    }

    pub fn with_department(mut self, department: &str) -> Self {
        self.department = non_blank(department);
        self
    }

    /// Canonical form of a caller-held participant; `None` when the id is blank.
    fn canonical(&self) -> Option<Self> {
        let participant = Self::new(&self.user_id)?;
        Some(Self {
            supervisor_id: self.supervisor_id.as_deref().and_then(non_blank),
            department: self.department.as_deref().and_then(non_blank),
            ..participant
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Extracts the participant list from a source configuration payload.
///
/// Records without a usable user id are dropped; order and duplicates are
/// preserved.
pub fn participants_from_source_config(source: &Value) -> Vec<AudienceParticipant> {
    let Some(records) = field(source, PARTICIPANTS_KEY).and_then(Value::as_array) else {
        return Vec::new();
    };

    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let participant = decode_participant(record);
            if participant.is_none() {
                debug!(index, "dropping participant record without a user id");
            }
            participant
        })
        .collect()
}

/// Decodes a single loosely-typed participant record. Non-object records are
/// treated as empty and therefore dropped.
pub(crate) fn decode_participant(record: &Value) -> Option<AudienceParticipant> {
    let user_id = text(field_or_alias(record, USER_ID_KEY, USER_ID_ALIAS))?;
    let supervisor_id = text(field_or_alias(record, SUPERVISOR_ID_KEY, SUPERVISOR_ID_ALIAS));
    let nested_department = || {
        field(record, ATTRIBUTES_KEY).and_then(|attributes| field(attributes, DEPARTMENT_KEY))
    };
    let department = text(
        field(record, DEPARTMENT_KEY)
            .filter(|value| !value.is_null())
            .or_else(nested_department),
    );

    Some(AudienceParticipant {
        user_id,
        supervisor_id,
        department,
    })
}

/// Regenerates the source configuration payload from a participant list.
///
/// Only the `participants` key is produced. Optional fields are emitted only
/// when non-blank, and participants whose id trims to nothing are skipped.
pub fn source_config_from_participants(participants: &[AudienceParticipant]) -> Value {
    let records: Vec<Value> = participants
        .iter()
        .filter_map(AudienceParticipant::canonical)
        .map(|participant| encode_participant(&participant))
        .collect();

    let mut payload = Map::new();
    payload.insert(PARTICIPANTS_KEY.to_string(), Value::Array(records));
    Value::Object(payload)
}

fn encode_participant(participant: &AudienceParticipant) -> Value {
    let mut record = Map::new();
    record.insert(
        USER_ID_KEY.to_string(),
        Value::String(participant.user_id.clone()),
    );
    if let Some(supervisor_id) = &participant.supervisor_id {
        record.insert(
            SUPERVISOR_ID_KEY.to_string(),
            Value::String(supervisor_id.clone()),
        );
    }
    if let Some(department) = &participant.department {
        record.insert(
            DEPARTMENT_KEY.to_string(),
            Value::String(department.clone()),
        );
    }
    Value::Object(record)
}
