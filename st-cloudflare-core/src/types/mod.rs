//! Data model of the `zone_type` resource.

mod binding;

pub use binding::{TargetZoneType, ZonePlan, ZoneTypeBinding};
pub use st_cloudflare_provider::{RatePlan, ZoneKind};
