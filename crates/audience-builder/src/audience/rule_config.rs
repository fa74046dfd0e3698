use super::rule_type::AssignmentRuleType;
use serde::Serialize;
use serde_json::Value;

/// Everyone in the audience may evaluate everyone else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllToAllConfig {
    pub evaluator_role: String,
    pub allow_self_evaluation: bool,
    pub max_evaluators_per_evaluatee: u32,
}

/// Evaluators are rotated across evaluatees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRobinConfig {
    pub evaluator_role: String,
    pub allow_self_evaluation: bool,
    pub evaluators_per_evaluatee: u32,
}

/// Supervisors evaluate their direct reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerHierarchyConfig {
    pub evaluator_role: String,
    pub include_self_evaluation: bool,
    pub require_known_manager: bool,
}

/// Participants sharing an attribute value evaluate each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeMatchConfig {
    pub match_attribute: String,
    pub evaluator_role: String,
    pub allow_self_evaluation: bool,
    pub max_evaluators_per_evaluatee: u32,
}

impl Default for AllToAllConfig {
    fn default() -> Self {
        Self {
            evaluator_role: "PEER".to_string(),
            allow_self_evaluation: false,
            max_evaluators_per_evaluatee: 10,
        }
    }
}

impl Default for RoundRobinConfig {
    fn default() -> Self {
        Self {
            evaluator_role: "PEER".to_string(),
            allow_self_evaluation: false,
            evaluators_per_evaluatee: 2,
        }
    }
}

impl Default for ManagerHierarchyConfig {
    fn default() -> Self {
        Self {
            evaluator_role: "SUPERVISOR".to_string(),
            include_self_evaluation: false,
            require_known_manager: true,
        }
    }
}

impl Default for AttributeMatchConfig {
    fn default() -> Self {
        Self {
            match_attribute: "department".to_string(),
            evaluator_role: "PEER".to_string(),
            allow_self_evaluation: false,
            max_evaluators_per_evaluatee: 3,
        }
    }
}

/// Configuration whose shape is selected by the assignment rule type.
///
/// Serializes to the flat camelCase record stored alongside the rule type;
/// the rule type itself is not embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RuleConfig {
    AllToAll(AllToAllConfig),
    RoundRobin(RoundRobinConfig),
    ManagerHierarchy(ManagerHierarchyConfig),
    AttributeMatch(AttributeMatchConfig),
}

impl RuleConfig {
    pub fn defaults(rule_type: AssignmentRuleType) -> Self {
        match rule_type {
            AssignmentRuleType::AllToAll => RuleConfig::AllToAll(AllToAllConfig::default()),
            AssignmentRuleType::RoundRobin => RuleConfig::RoundRobin(RoundRobinConfig::default()),
            AssignmentRuleType::ManagerHierarchy => {
                RuleConfig::ManagerHierarchy(ManagerHierarchyConfig::default())
            }
            AssignmentRuleType::AttributeMatch => {
                RuleConfig::AttributeMatch(AttributeMatchConfig::default())
            }
        }
    }

    pub fn rule_type(&self) -> AssignmentRuleType {
        match self {
            RuleConfig::AllToAll(_) => AssignmentRuleType::AllToAll,
            RuleConfig::RoundRobin(_) => AssignmentRuleType::RoundRobin,
            RuleConfig::ManagerHierarchy(_) => AssignmentRuleType::ManagerHierarchy,
            RuleConfig::AttributeMatch(_) => AssignmentRuleType::AttributeMatch,
        }
    }

    pub fn evaluator_role(&self) -> &str {
        match self {
            RuleConfig::AllToAll(config) => &config.evaluator_role,
            RuleConfig::RoundRobin(config) => &config.evaluator_role,
            RuleConfig::ManagerHierarchy(config) => &config.evaluator_role,
            RuleConfig::AttributeMatch(config) => &config.evaluator_role,
        }
    }

    /// JSON record in the storage shape.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Default configuration for a free-form rule-type tag. Unknown tags get the
/// attribute-match defaults.
pub fn default_rule_config(rule_type: &str) -> RuleConfig {
    RuleConfig::defaults(AssignmentRuleType::resolve(rule_type).rule_type())
}
