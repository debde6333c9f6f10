//! The `zone_type` resource
//!
//! Lifecycle hooks over [`ZoneTypeService`]:
//!
//! | Hook | Workflow | State afterwards |
//! |------|----------|------------------|
//! | `create` / `update` | convert | replaced on success, untouched on failure |
//! | `read` | refresh | `zone_type` overwritten with the live value |
//! | `delete` | revert | always dropped, failures reported |

use serde::Deserialize;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::CoreError;
use crate::services::ZoneTypeService;
use crate::types::{TargetZoneType, ZonePlan, ZoneTypeBinding};

/// Suffix appended to the provider type name.
const TYPE_NAME_SUFFIX: &str = "_zone_type";

// ===== Schema =====

/// One attribute of the resource schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub computed: bool,
    /// Accepted values; empty means unrestricted.
    pub one_of: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSchema {
    pub description: &'static str,
    pub attributes: Vec<AttributeSchema>,
}

impl ResourceSchema {
    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

// ===== Planned configuration =====

/// Attribute values as written by the user, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ZoneTypeConfig {
    pub zone_id: String,
    pub zone_plan: String,
    pub zone_type: String,
}

/// A configuration that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub zone_id: String,
    pub zone_plan: ZonePlan,
    pub zone_type: TargetZoneType,
}

impl ZoneTypeConfig {
    /// Decode a configuration object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, Diagnostics> {
        serde_json::from_value(value).map_err(|e| {
            Diagnostic::error("Invalid zone_type configuration", e.to_string()).into()
        })
    }

    /// Check every attribute, reporting all problems at once.
    pub fn validate(&self) -> Result<ValidatedConfig, Diagnostics> {
        let mut diags = Diagnostics::new();

        if self.zone_id.trim().is_empty() {
            diags.extend(invalid("zone_id", "zone_id must not be empty"));
        }
        let zone_plan = self
            .zone_plan
            .parse::<ZonePlan>()
            .map_err(|detail| diags.extend(invalid("zone_plan", &detail)))
            .ok();
        let zone_type = self
            .zone_type
            .parse::<TargetZoneType>()
            .map_err(|detail| diags.extend(invalid("zone_type", &detail)))
            .ok();

        match (zone_plan, zone_type) {
            (Some(zone_plan), Some(zone_type)) if diags.is_empty() => Ok(ValidatedConfig {
                zone_id: self.zone_id.clone(),
                zone_plan,
                zone_type,
            }),
            _ => Err(diags),
        }
    }
}

fn invalid(field: &str, detail: &str) -> Diagnostics {
    Diagnostics::from(&CoreError::Validation {
        field: field.to_string(),
        detail: detail.to_string(),
    })
}

/// Log at the level matching the error, then convert.
fn report(operation: &str, err: &CoreError) -> Diagnostics {
    if err.is_expected() {
        log::warn!("zone_type {operation}: {err}");
    } else {
        log::error!("zone_type {operation}: {err}");
    }
    Diagnostics::from(err)
}

// ===== Resource =====

pub struct ZoneTypeResource {
    service: ZoneTypeService,
}

impl ZoneTypeResource {
    #[must_use]
    pub fn new(service: ZoneTypeService) -> Self {
        Self { service }
    }

    /// Full resource type name, e.g. `st-cloudflare_zone_type`.
    pub fn type_name(provider_type_name: &str) -> String {
        format!("{provider_type_name}{TYPE_NAME_SUFFIX}")
    }

    pub fn schema() -> ResourceSchema {
        ResourceSchema {
            description: "Provide a Cloudflare zone plan resource.",
            attributes: vec![
                AttributeSchema {
                    name: "zone_id",
                    description: "Cloudflare zone ID.",
                    required: true,
                    computed: false,
                    one_of: &[],
                },
                AttributeSchema {
                    name: "zone_type",
                    description: "Zone type. Valid value: partial, secondary, internal.",
                    required: true,
                    computed: false,
                    one_of: &TargetZoneType::VALUES,
                },
                AttributeSchema {
                    name: "zone_plan",
                    description: "Zone rate plan. Valid value: business, enterprise.",
                    required: true,
                    computed: false,
                    one_of: &ZonePlan::VALUES,
                },
                AttributeSchema {
                    name: "verification_key",
                    description: "Verification key for partial zone setup.",
                    required: false,
                    computed: true,
                    one_of: &[],
                },
            ],
        }
    }

    /// Confirm the provider credentials before any zone is touched.
    pub async fn verify(&self) -> Diagnostics {
        match self.service.verify_credentials().await {
            Ok(()) => Diagnostics::new(),
            Err(e) => report("configure", &e),
        }
    }

    pub async fn create(&self, plan: &ZoneTypeConfig) -> Result<ZoneTypeBinding, Diagnostics> {
        self.apply("create", plan).await
    }

    /// Re-runs the conversion with the planned values.
    pub async fn update(&self, plan: &ZoneTypeConfig) -> Result<ZoneTypeBinding, Diagnostics> {
        self.apply("update", plan).await
    }

    async fn apply(
        &self,
        operation: &str,
        plan: &ZoneTypeConfig,
    ) -> Result<ZoneTypeBinding, Diagnostics> {
        let plan = plan.validate()?;
        let verification_key = self
            .service
            .convert(&plan.zone_id, plan.zone_plan, plan.zone_type)
            .await
            .map_err(|e| report(operation, &e))?;

        Ok(ZoneTypeBinding {
            zone_id: plan.zone_id,
            zone_plan: plan.zone_plan,
            zone_type: plan.zone_type.kind(),
            verification_key,
        })
    }

    /// Refresh `zone_type` from the API; other fields are kept.
    pub async fn read(&self, state: &ZoneTypeBinding) -> Result<ZoneTypeBinding, Diagnostics> {
        let zone_type = self
            .service
            .refresh(&state.zone_id)
            .await
            .map_err(|e| report("read", &e))?;
        if zone_type != state.zone_type {
            log::info!(
                "[{}] zone type drifted from {} to {zone_type}",
                state.zone_id,
                state.zone_type
            );
        }
        Ok(ZoneTypeBinding {
            zone_type,
            ..state.clone()
        })
    }

    /// Revert the zone. The binding is consumed whether or not this succeeds.
    #[allow(clippy::needless_pass_by_value)]
    pub async fn delete(&self, state: ZoneTypeBinding) -> Diagnostics {
        match self.service.revert(&state.zone_id).await {
            Ok(()) => Diagnostics::new(),
            Err(e) => report("delete", &e),
        }
    }
}
