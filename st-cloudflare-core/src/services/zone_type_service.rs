//! Zone type conversion workflow
//!
//! A zone may only leave the `full` type while it is on a business or
//! enterprise plan, so converting is a two-step unit (subscription, then
//! type) that is retried as a whole. Reverting runs the inverse steps once
//! each and reports every failure.

use std::sync::Arc;

use st_cloudflare_provider::{ProviderError, RatePlan, SubscriptionFrequency, ZoneApi, ZoneKind};

use crate::error::{CoreError, CoreResult, RevertError, RevertFailure, RevertStep};
use crate::retry::{RetryPolicy, retry_until_ceiling};
use crate::types::{TargetZoneType, ZonePlan};

/// Conversion retries every failure; flag the ones a retry is unlikely to fix.
fn note_failure(zone_id: &str, attempt: u32, err: &ProviderError) {
    if !err.is_transient() {
        log::warn!("[{zone_id}] attempt {attempt} hit a non-transient error: {err}");
    }
}

/// Zone type conversion service
pub struct ZoneTypeService {
    api: Arc<dyn ZoneApi>,
    retry: RetryPolicy,
}

impl ZoneTypeService {
    /// Create a service with the fixed 30s conversion ceiling.
    #[must_use]
    pub fn new(api: Arc<dyn ZoneApi>) -> Self {
        Self {
            api,
            retry: RetryPolicy::default(),
        }
    }

    /// Put the zone on `zone_plan` and switch it to `zone_type`.
    ///
    /// Returns the verification key issued by the successful attempt (empty
    /// when the API issued none).
    pub async fn convert(
        &self,
        zone_id: &str,
        zone_plan: ZonePlan,
        zone_type: TargetZoneType,
    ) -> CoreResult<String> {
        log::info!("[{zone_id}] converting to {zone_type} on {zone_plan} plan");
        let api = self.api.as_ref();

        let outcome = retry_until_ceiling(&self.retry, |attempt| async move {
            log::debug!("[{zone_id}] conversion attempt {attempt}");

            // The type change is rejected until the plan change has applied,
            // so a failed subscription ends the attempt here.
            api.set_subscription(
                zone_id,
                zone_plan.rate_plan(),
                SubscriptionFrequency::Monthly,
            )
            .await
            .map_err(|source| {
                note_failure(zone_id, attempt, &source);
                CoreError::Subscription {
                    zone_id: zone_id.to_string(),
                    rate_plan: zone_plan.rate_plan(),
                    source,
                }
            })?;

            let zone = api
                .set_zone_type(zone_id, zone_type.kind())
                .await
                .map_err(|source| {
                    note_failure(zone_id, attempt, &source);
                    CoreError::ZoneType {
                        zone_id: zone_id.to_string(),
                        zone_type: zone_type.kind(),
                        source,
                    }
                })?;

            Ok::<_, CoreError>(zone.verification_key.unwrap_or_default())
        })
        .await;

        outcome.map_err(|exhausted| {
            let err = CoreError::ConversionExhausted {
                zone_id: zone_id.to_string(),
                attempts: exhausted.attempts,
                elapsed: exhausted.elapsed,
                source: Box::new(exhausted.last_error),
            };
            log::error!("[{zone_id}] {err}");
            err
        })
    }

    /// Return the zone to `full` and the Free plan.
    ///
    /// Both steps always run; failures are collected, not retried.
    pub async fn revert(&self, zone_id: &str) -> CoreResult<()> {
        log::info!("[{zone_id}] reverting to {} on {} plan", ZoneKind::Full, RatePlan::Free);
        let mut failures = Vec::new();

        if let Err(source) = self.api.set_zone_type(zone_id, ZoneKind::Full).await {
            log::warn!("[{zone_id}] zone type reset failed: {source}");
            failures.push(RevertFailure {
                zone_id: zone_id.to_string(),
                step: RevertStep::ResetZoneType,
                source,
            });
        }

        if let Err(source) = self
            .api
            .set_subscription(zone_id, RatePlan::Free, SubscriptionFrequency::Monthly)
            .await
        {
            log::warn!("[{zone_id}] subscription reset failed: {source}");
            failures.push(RevertFailure {
                zone_id: zone_id.to_string(),
                step: RevertStep::ResetSubscription,
                source,
            });
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(RevertError {
                zone_id: zone_id.to_string(),
                failures,
            }
            .into())
        }
    }

    /// Check that the API accepts the configured credentials.
    pub async fn verify_credentials(&self) -> CoreResult<()> {
        if self.api.validate_credentials().await? {
            Ok(())
        } else {
            Err(CoreError::Configuration(format!(
                "{} rejected the configured credentials",
                self.api.id()
            )))
        }
    }

    /// Current zone type as reported by the API.
    pub async fn refresh(&self, zone_id: &str) -> CoreResult<ZoneKind> {
        let zone = self
            .api
            .get_zone(zone_id)
            .await
            .map_err(|source| CoreError::Read {
                zone_id: zone_id.to_string(),
                source,
            })?;
        log::debug!("[{zone_id}] zone type is {}", zone.zone_type);
        Ok(zone.zone_type)
    }
}
