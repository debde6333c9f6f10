use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use st_cloudflare_provider::{RatePlan, ZoneKind};

/// Paid plan a zone must be on before its type can leave `full`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ZonePlan {
    Business,
    Enterprise,
}

impl ZonePlan {
    /// Accepted attribute values.
    pub const VALUES: [&'static str; 2] = ["business", "enterprise"];

    pub fn rate_plan(self) -> RatePlan {
        match self {
            Self::Business => RatePlan::Business,
            Self::Enterprise => RatePlan::Enterprise,
        }
    }
}

impl fmt::Display for ZonePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rate_plan().as_str())
    }
}

impl FromStr for ZonePlan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "business" => Ok(Self::Business),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(format!(
                "value must be one of: {}, got: \"{other}\"",
                Self::VALUES.join(", ")
            )),
        }
    }
}

/// Zone type a binding converts to. `full` is only ever a revert target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetZoneType {
    Partial,
    Secondary,
    Internal,
}

impl TargetZoneType {
    /// Accepted attribute values.
    pub const VALUES: [&'static str; 3] = ["partial", "secondary", "internal"];

    pub fn kind(self) -> ZoneKind {
        match self {
            Self::Partial => ZoneKind::Partial,
            Self::Secondary => ZoneKind::Secondary,
            Self::Internal => ZoneKind::Internal,
        }
    }
}

impl fmt::Display for TargetZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().as_str())
    }
}

impl FromStr for TargetZoneType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "partial" => Ok(Self::Partial),
            "secondary" => Ok(Self::Secondary),
            "internal" => Ok(Self::Internal),
            other => Err(format!(
                "value must be one of: {}, got: \"{other}\"",
                Self::VALUES.join(", ")
            )),
        }
    }
}

/// Local state of one `zone_type` resource.
///
/// `zone_type` holds whatever the API last reported, so it can drift to
/// `full` if the zone was changed outside this resource. `verification_key`
/// is only ever written from a conversion result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZoneTypeBinding {
    pub zone_id: String,
    pub zone_plan: ZonePlan,
    pub zone_type: ZoneKind,
    #[serde(default)]
    pub verification_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_maps_to_rate_plan() {
        assert_eq!(ZonePlan::Enterprise.rate_plan(), RatePlan::Enterprise);
        assert_eq!(ZonePlan::Business.to_string(), "business");
    }

    #[test]
    fn full_is_not_a_target() {
        let err = "full".parse::<TargetZoneType>().unwrap_err();
        assert_eq!(
            err,
            "value must be one of: partial, secondary, internal, got: \"full\""
        );
    }

    #[test]
    fn target_maps_to_zone_kind() {
        assert_eq!(TargetZoneType::Secondary.kind(), ZoneKind::Secondary);
    }

    #[test]
    fn binding_state_json() {
        let binding = ZoneTypeBinding {
            zone_id: "zone-1".into(),
            zone_plan: ZonePlan::Business,
            zone_type: ZoneKind::Partial,
            verification_key: "abc123".into(),
        };
        let value = serde_json::to_value(&binding).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "zone_id": "zone-1",
                "zone_plan": "business",
                "zone_type": "partial",
                "verification_key": "abc123"
            })
        );
    }
}
