//! NGSI9 (context availability) response envelopes

use ctxbroker_core::ErrorCode;
use ctxbroker_wire::JsonObjectBuilder;

use crate::render::{add_error_code, is_failure, Render};

/// Reply to registerContext
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterContextResponse {
    pub registration_id: String,
    pub duration: Option<String>,
    pub error_code: ErrorCode,
}

impl RegisterContextResponse {
    pub fn new(registration_id: impl Into<String>, error_code: ErrorCode) -> Self {
        Self {
            registration_id: registration_id.into(),
            duration: None,
            error_code,
        }
    }
}

impl Render for RegisterContextResponse {
    fn render(&self) -> String {
        let mut obj = JsonObjectBuilder::new();
        if let Some(duration) = &self.duration {
            obj.add_string("duration", duration);
        }
        obj.add_string("registrationId", &self.registration_id);
        if is_failure(&self.error_code) {
            add_error_code(&mut obj, &self.error_code);
        }
        obj.finalize()
    }
}

/// Reply to discoverContextAvailability
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverContextAvailabilityResponse {
    pub error_code: ErrorCode,
}

impl DiscoverContextAvailabilityResponse {
    pub fn new(error_code: ErrorCode) -> Self {
        Self { error_code }
    }
}

impl Render for DiscoverContextAvailabilityResponse {
    fn render(&self) -> String {
        let mut obj = JsonObjectBuilder::new();
        add_error_code(&mut obj, &self.error_code);
        obj.finalize()
    }
}

/// Reply to subscribeContextAvailability
#[derive(Debug, Clone, PartialEq)]
pub struct SubscribeContextAvailabilityResponse {
    pub subscription_id: String,
    pub duration: Option<String>,
    pub error_code: ErrorCode,
}

impl SubscribeContextAvailabilityResponse {
    pub fn new(subscription_id: impl Into<String>, error_code: ErrorCode) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            duration: None,
            error_code,
        }
    }
}

impl Render for SubscribeContextAvailabilityResponse {
    fn render(&self) -> String {
        let mut obj = JsonObjectBuilder::new();
        obj.add_string("subscriptionId", &self.subscription_id);
        if let Some(duration) = &self.duration {
            obj.add_string("duration", duration);
        }
        if is_failure(&self.error_code) {
            add_error_code(&mut obj, &self.error_code);
        }
        obj.finalize()
    }
}

/// Reply to updateContextAvailabilitySubscription
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateContextAvailabilitySubscriptionResponse {
    /// Empty when the update failed before a subscription was resolved
    pub subscription_id: String,
    pub error_code: ErrorCode,
}

impl UpdateContextAvailabilitySubscriptionResponse {
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            subscription_id: String::new(),
            error_code,
        }
    }
}

impl Render for UpdateContextAvailabilitySubscriptionResponse {
    fn render(&self) -> String {
        let mut obj = JsonObjectBuilder::new();
        if !self.subscription_id.is_empty() {
            obj.add_string("subscriptionId", &self.subscription_id);
        }
        if is_failure(&self.error_code) {
            add_error_code(&mut obj, &self.error_code);
        }
        obj.finalize()
    }
}

/// Reply to unsubscribeContextAvailability
///
/// Reports under `statusCode` whatever the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsubscribeContextAvailabilityResponse {
    pub subscription_id: String,
    pub status_code: ErrorCode,
}

impl UnsubscribeContextAvailabilityResponse {
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            subscription_id: String::new(),
            status_code: error_code.with_key_name("statusCode"),
        }
    }
}

impl Render for UnsubscribeContextAvailabilityResponse {
    fn render(&self) -> String {
        let mut obj = JsonObjectBuilder::new();
        obj.add_string("subscriptionId", &self.subscription_id);
        add_error_code(&mut obj, &self.status_code);
        obj.finalize()
    }
}

/// Reply to notifyContextAvailability
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyContextAvailabilityResponse {
    pub response_code: ErrorCode,
}

impl NotifyContextAvailabilityResponse {
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            response_code: error_code.with_key_name("responseCode"),
        }
    }
}

impl Render for NotifyContextAvailabilityResponse {
    fn render(&self) -> String {
        let mut obj = JsonObjectBuilder::new();
        add_error_code(&mut obj, &self.response_code);
        obj.finalize()
    }
}
