use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Strategy used to pair evaluators with evaluatees in a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentRuleType {
    AllToAll,
    RoundRobin,
    ManagerHierarchy,
    AttributeMatch,
}

const ASSIGNMENT_RULES: &[AssignmentRuleType] = &[
    AssignmentRuleType::AllToAll,
    AssignmentRuleType::RoundRobin,
    AssignmentRuleType::ManagerHierarchy,
    AssignmentRuleType::AttributeMatch,
];

impl AssignmentRuleType {
    /// Every rule type, in presentation order.
    pub fn all() -> &'static [AssignmentRuleType] {
        ASSIGNMENT_RULES
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentRuleType::AllToAll => "ALL_TO_ALL",
            AssignmentRuleType::RoundRobin => "ROUND_ROBIN",
            AssignmentRuleType::ManagerHierarchy => "MANAGER_HIERARCHY",
            AssignmentRuleType::AttributeMatch => "ATTRIBUTE_MATCH",
        }
    }

    /// Rule type used for tags that are not recognized.
    pub fn fallback() -> Self {
        AssignmentRuleType::AttributeMatch
    }

    /// Lenient lookup. Unknown tags resolve to [`AssignmentRuleType::fallback`]
    /// and emit a warning so mistyped tags remain visible in the logs.
    pub fn resolve(tag: &str) -> RuleTypeResolution {
        match tag.parse::<AssignmentRuleType>() {
            Ok(rule_type) => RuleTypeResolution::Recognized(rule_type),
            Err(_) => {
                warn!(
                    rule_type = tag,
                    fallback = Self::fallback().as_str(),
                    "unrecognized assignment rule type"
                );
                RuleTypeResolution::Fallback {
                    requested: tag.to_string(),
                }
            }
        }
    }
}

impl fmt::Display for AssignmentRuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignmentRuleType {
    type Err = UnknownRuleType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ASSIGNMENT_RULES
            .iter()
            .copied()
            .find(|rule_type| rule_type.as_str() == value)
            .ok_or_else(|| UnknownRuleType(value.to_string()))
    }
}

/// Outcome of resolving a free-form rule-type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTypeResolution {
    Recognized(AssignmentRuleType),
    Fallback { requested: String },
}

impl RuleTypeResolution {
    /// The rule type whose configuration shape applies.
    pub fn rule_type(&self) -> AssignmentRuleType {
        match self {
            RuleTypeResolution::Recognized(rule_type) => *rule_type,
            RuleTypeResolution::Fallback { .. } => AssignmentRuleType::fallback(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RuleTypeResolution::Fallback { .. })
    }
}

/// Raised by strict parsing when a tag is not one of the known rule types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown assignment rule type '{0}'")]
pub struct UnknownRuleType(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_rule_types_in_table_order() {
        let tags: Vec<&str> = AssignmentRuleType::all()
            .iter()
            .map(AssignmentRuleType::as_str)
            .collect();
        assert_eq!(
            tags,
            vec![
                "ALL_TO_ALL",
                "ROUND_ROBIN",
                "MANAGER_HIERARCHY",
                "ATTRIBUTE_MATCH"
            ]
        );
    }

    #[test]
    fn strict_parse_rejects_unknown_and_differently_cased_tags() {
        assert_eq!(
            "ROUND_ROBIN".parse::<AssignmentRuleType>(),
            Ok(AssignmentRuleType::RoundRobin)
        );
        let err = "round_robin"
            .parse::<AssignmentRuleType>()
            .expect_err("tags are case-sensitive");
        assert_eq!(err.to_string(), "unknown assignment rule type 'round_robin'");
        assert!(" ALL_TO_ALL".parse::<AssignmentRuleType>().is_err());
    }

    #[test]
    fn resolve_falls_back_to_attribute_match() {
        let resolution = AssignmentRuleType::resolve("NOT_A_REAL_TYPE");
        assert!(resolution.is_fallback());
        assert_eq!(resolution.rule_type(), AssignmentRuleType::AttributeMatch);
        assert_eq!(
            resolution,
            RuleTypeResolution::Fallback {
                requested: "NOT_A_REAL_TYPE".to_string()
            }
        );

        let recognized = AssignmentRuleType::resolve("MANAGER_HIERARCHY");
        assert!(!recognized.is_fallback());
        assert_eq!(recognized.rule_type(), AssignmentRuleType::ManagerHierarchy);
    }

    #[test]
    fn serializes_as_tag() {
        let value = serde_json::to_value(AssignmentRuleType::ManagerHierarchy).expect("serialize");
        assert_eq!(value, serde_json::json!("MANAGER_HIERARCHY"));
    }
}
