//! Rule-type registry, rule configuration normalizer, and participant codec.

pub mod coerce;
mod normalizer;
mod participants;
pub mod roster;
mod rule_config;
mod rule_type;
mod source;

pub use normalizer::normalize_rule_config;
pub use participants::{
    participants_from_source_config, source_config_from_participants, AudienceParticipant,
};
pub use roster::{RosterImportError, RosterImporter};
pub use rule_config::{
    default_rule_config, AllToAllConfig, AttributeMatchConfig, ManagerHierarchyConfig,
    RoundRobinConfig, RuleConfig,
};
pub use rule_type::{AssignmentRuleType, RuleTypeResolution, UnknownRuleType};
pub use source::{AudienceSourceType, UnknownSourceType};
