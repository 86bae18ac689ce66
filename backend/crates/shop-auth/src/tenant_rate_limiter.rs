use crate::{AuthError, Result as AuthErrorResult, SendQuota};

use shop_core::TenantId;

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{Quota, RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};

/// Message-send limiter keyed by tenant.
///
/// Allows a burst of `max_messages` and replenishes evenly across the
/// window, so one tenant cannot starve the others.
pub struct TenantRateLimiter {
    limiter: RateLimiter<TenantId, DefaultKeyedStateStore<TenantId>, DefaultClock>,
    quota: SendQuota,
}

impl TenantRateLimiter {
    pub fn new(quota: SendQuota) -> Self {
        let burst = NonZeroU32::new(quota.max_messages).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(quota.window_secs.max(1)) / burst.get();
        let governor_quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(governor_quota),
            quota,
        }
    }

    /// Check if a send is allowed for the tenant, returns error if rate limited
    #[track_caller]
    pub fn check(&self, tenant_id: TenantId) -> AuthErrorResult<()> {
        self.limiter
            .check_key(&tenant_id)
            .map_err(|_| AuthError::RateLimitExceeded {
                tenant_id: tenant_id.get(),
                limit: self.quota.max_messages,
                window_secs: self.quota.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Quota the limiter was built from
    pub fn quota(&self) -> &SendQuota {
        &self.quota
    }
}

impl Default for TenantRateLimiter {
    fn default() -> Self {
        Self::new(SendQuota::default())
    }
}
