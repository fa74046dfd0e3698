use crate::io::{print_json, read_json};
use audience_builder::audience::{
    normalize_rule_config, participants_from_source_config, source_config_from_participants,
    AssignmentRuleType, AudienceParticipant, AudienceSourceType, RosterImporter, RuleConfig,
};
use audience_builder::config::AudienceConfig;
use audience_builder::error::AppError;
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct PayloadArgs {
    /// JSON file to read (defaults to stdin)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DecodeArgs {
    /// Audience source type the payload was authored for (INLINE or DIRECTORY_SNAPSHOT)
    #[arg(long, default_value = "INLINE")]
    pub(crate) source_type: AudienceSourceType,
    #[command(flatten)]
    pub(crate) payload: PayloadArgs,
}

#[derive(Args, Debug)]
pub(crate) struct NormalizeArgs {
    /// Assignment rule type tag (ALL_TO_ALL, ROUND_ROBIN, MANAGER_HIERARCHY, ATTRIBUTE_MATCH)
    #[arg(long)]
    pub(crate) rule_type: String,
    #[command(flatten)]
    pub(crate) payload: PayloadArgs,
}

#[derive(Args, Debug)]
pub(crate) struct RosterImportArgs {
    /// CSV roster with a header row (userId/id, supervisorId/managerId, department)
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleTypeEntry {
    rule_type: AssignmentRuleType,
    defaults: RuleConfig,
}

fn rule_catalog() -> Vec<RuleTypeEntry> {
    AssignmentRuleType::all()
        .iter()
        .map(|rule_type| RuleTypeEntry {
            rule_type: *rule_type,
            defaults: RuleConfig::defaults(*rule_type),
        })
        .collect()
}

/// Strict mode refuses unknown tags; otherwise the lenient fallback applies.
fn normalize(
    rule_type: &str,
    raw: &Value,
    settings: &AudienceConfig,
) -> Result<RuleConfig, AppError> {
    if settings.strict_rule_types {
        rule_type.parse::<AssignmentRuleType>()?;
    }
    Ok(normalize_rule_config(rule_type, raw))
}

fn encode(raw: Value) -> Result<Value, AppError> {
    let participants: Vec<AudienceParticipant> = serde_json::from_value(raw)?;
    Ok(source_config_from_participants(&participants))
}

pub(crate) fn run_rules(settings: &AudienceConfig) -> Result<(), AppError> {
    print_json(&rule_catalog(), settings.output_format)
}

pub(crate) fn run_normalize(
    args: NormalizeArgs,
    settings: &AudienceConfig,
) -> Result<(), AppError> {
    let raw = read_json(args.payload.input.as_deref())?;
    let config = normalize(&args.rule_type, &raw, settings)?;
    print_json(&config, settings.output_format)
}

pub(crate) fn run_decode(args: DecodeArgs, settings: &AudienceConfig) -> Result<(), AppError> {
    let source = read_json(args.payload.input.as_deref())?;
    let participants = participants_from_source_config(&source);
    info!(
        count = participants.len(),
        source_type = %args.source_type,
        "decoded participants"
    );
    print_json(&participants, settings.output_format)
}

pub(crate) fn run_encode(args: PayloadArgs, settings: &AudienceConfig) -> Result<(), AppError> {
    let raw = read_json(args.input.as_deref())?;
    print_json(&encode(raw)?, settings.output_format)
}

pub(crate) fn run_roster_import(
    args: RosterImportArgs,
    settings: &AudienceConfig,
) -> Result<(), AppError> {
    let participants = RosterImporter::from_path(&args.csv)?;
    info!(
        count = participants.len(),
        roster = %args.csv.display(),
        "imported roster"
    );
    print_json(
        &source_config_from_participants(&participants),
        settings.output_format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use audience_builder::config::OutputFormat;
    use serde_json::json;

    fn settings(strict_rule_types: bool) -> AudienceConfig {
        AudienceConfig {
            output_format: OutputFormat::Compact,
            strict_rule_types,
        }
    }

    #[test]
    fn catalog_lists_every_rule_with_defaults() {
        let catalog = serde_json::to_value(rule_catalog()).expect("serialize catalog");
        let entries = catalog.as_array().expect("array");
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1]["ruleType"], json!("ROUND_ROBIN"));
        assert_eq!(entries[1]["defaults"]["evaluatorsPerEvaluatee"], json!(2));
        assert_eq!(entries[2]["defaults"]["evaluatorRole"], json!("SUPERVISOR"));
    }

    #[test]
    fn lenient_mode_falls_back_for_unknown_tags() {
        let config = normalize("PAIRWISE", &json!({}), &settings(false)).expect("lenient");
        assert_eq!(config.rule_type(), AssignmentRuleType::AttributeMatch);
    }

    #[test]
    fn strict_mode_rejects_unknown_tags() {
        let err = normalize("PAIRWISE", &json!({}), &settings(true)).expect_err("strict");
        assert!(matches!(err, AppError::RuleType(_)));

        let config =
            normalize("ALL_TO_ALL", &json!({"maxEvaluatorsPerEvaluatee": 0}), &settings(true))
                .expect("known tag");
        assert_eq!(config.to_value()["maxEvaluatorsPerEvaluatee"], json!(1));
    }

    #[test]
    fn encode_requires_a_participant_list() {
        let encoded = encode(json!([{"userId": " u1 ", "department": ""}])).expect("encode");
        assert_eq!(encoded, json!({"participants": [{"userId": "u1"}]}));

        assert!(matches!(
            encode(json!({"participants": []})),
            Err(AppError::Json(_))
        ));
    }
}
