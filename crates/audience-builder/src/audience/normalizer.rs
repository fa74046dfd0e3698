use super::coerce::{field, parse_bool, parse_count, parse_string};
use super::rule_config::{
    AllToAllConfig, AttributeMatchConfig, ManagerHierarchyConfig, RoundRobinConfig, RuleConfig,
};
use super::rule_type::AssignmentRuleType;
use serde_json::Value;

/// Builds a fully-populated configuration for `rule_type` from an untrusted
/// payload. Each field is coerced on its own and falls back to the rule's
/// default; non-object payloads yield the defaults unchanged.
pub fn normalize_rule_config(rule_type: &str, raw: &Value) -> RuleConfig {
    let rule_type = AssignmentRuleType::resolve(rule_type).rule_type();
    match rule_type {
        AssignmentRuleType::AllToAll => RuleConfig::AllToAll(all_to_all(raw)),
        AssignmentRuleType::RoundRobin => RuleConfig::RoundRobin(round_robin(raw)),
        AssignmentRuleType::ManagerHierarchy => {
            RuleConfig::ManagerHierarchy(manager_hierarchy(raw))
        }
        AssignmentRuleType::AttributeMatch => RuleConfig::AttributeMatch(attribute_match(raw)),
    }
}

fn all_to_all(raw: &Value) -> AllToAllConfig {
    let defaults = AllToAllConfig::default();
    AllToAllConfig {
        evaluator_role: parse_string(field(raw, "evaluatorRole"), &defaults.evaluator_role),
        allow_self_evaluation: parse_bool(
            field(raw, "allowSelfEvaluation"),
            defaults.allow_self_evaluation,
        ),
        max_evaluators_per_evaluatee: parse_count(
            field(raw, "maxEvaluatorsPerEvaluatee"),
            defaults.max_evaluators_per_evaluatee,
        ),
    }
}

fn round_robin(raw: &Value) -> RoundRobinConfig {
    let defaults = RoundRobinConfig::default();
    RoundRobinConfig {
        evaluator_role: parse_string(field(raw, "evaluatorRole"), &defaults.evaluator_role),
        allow_self_evaluation: parse_bool(
            field(raw, "allowSelfEvaluation"),
            defaults.allow_self_evaluation,
        ),
        evaluators_per_evaluatee: parse_count(
            field(raw, "evaluatorsPerEvaluatee"),
            defaults.evaluators_per_evaluatee,
        ),
    }
}

fn manager_hierarchy(raw: &Value) -> ManagerHierarchyConfig {
    let defaults = ManagerHierarchyConfig::default();
    ManagerHierarchyConfig {
        evaluator_role: parse_string(field(raw, "evaluatorRole"), &defaults.evaluator_role),
        include_self_evaluation: parse_bool(
            field(raw, "includeSelfEvaluation"),
            defaults.include_self_evaluation,
        ),
        require_known_manager: parse_bool(
            field(raw, "requireKnownManager"),
            defaults.require_known_manager,
        ),
    }
}

fn attribute_match(raw: &Value) -> AttributeMatchConfig {
    let defaults = AttributeMatchConfig::default();
    AttributeMatchConfig {
        match_attribute: parse_string(field(raw, "matchAttribute"), &defaults.match_attribute),
        evaluator_role: parse_string(field(raw, "evaluatorRole"), &defaults.evaluator_role),
        allow_self_evaluation: parse_bool(
            field(raw, "allowSelfEvaluation"),
            defaults.allow_self_evaluation,
        ),
        max_evaluators_per_evaluatee: parse_count(
            field(raw, "maxEvaluatorsPerEvaluatee"),
            defaults.max_evaluators_per_evaluatee,
        ),
    }
}
