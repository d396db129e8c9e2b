//! NGSI10 (context information) response envelopes

use ctxbroker_core::{ApiVersion, ErrorCode};
use ctxbroker_wire::JsonObjectBuilder;

use crate::context::{render_context_responses, ContextElement};
use crate::render::{add_error_code, Render, RenderVersioned};

/// Reply to queryContext
#[derive(Debug, Clone, PartialEq)]
pub struct QueryContextResponse {
    pub context_elements: Vec<ContextElement>,
    pub error_code: ErrorCode,
}

impl QueryContextResponse {
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            context_elements: Vec::new(),
            error_code,
        }
    }
}

impl RenderVersioned for QueryContextResponse {
    fn render_versioned(&self, api_version: ApiVersion, attrs_as_object: bool) -> String {
        render_context_responses(
            &self.context_elements,
            &self.error_code,
            api_version,
            attrs_as_object,
        )
    }
}

/// Reply to updateContext
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateContextResponse {
    pub context_elements: Vec<ContextElement>,
    pub error_code: ErrorCode,
}

impl UpdateContextResponse {
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            context_elements: Vec::new(),
            error_code,
        }
    }
}

impl RenderVersioned for UpdateContextResponse {
    fn render_versioned(&self, api_version: ApiVersion, attrs_as_object: bool) -> String {
        render_context_responses(
            &self.context_elements,
            &self.error_code,
            api_version,
            attrs_as_object,
        )
    }
}

/// Failure part of subscribe and update-subscription replies
#[derive(Debug, Clone, PartialEq)]
pub struct SubscribeError {
    pub subscription_id: Option<String>,
    pub error_code: ErrorCode,
}

impl SubscribeError {
    fn render(&self) -> String {
        let mut obj = JsonObjectBuilder::new();
        if let Some(id) = &self.subscription_id {
            obj.add_string("subscriptionId", id);
        }
        add_error_code(&mut obj, &self.error_code);
        obj.finalize()
    }
}

/// Reply to subscribeContext
#[derive(Debug, Clone, PartialEq)]
pub struct SubscribeContextResponse {
    pub subscribe_error: SubscribeError,
}

impl SubscribeContextResponse {
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            subscribe_error: SubscribeError {
                subscription_id: None,
                error_code,
            },
        }
    }
}

impl Render for SubscribeContextResponse {
    fn render(&self) -> String {
        let mut obj = JsonObjectBuilder::new();
        obj.add_raw("subscribeError", &self.subscribe_error.render());
        obj.finalize()
    }
}

/// Reply to updateContextSubscription
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateContextSubscriptionResponse {
    pub subscribe_error: SubscribeError,
}

impl UpdateContextSubscriptionResponse {
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            subscribe_error: SubscribeError {
                subscription_id: None,
                error_code,
            },
        }
    }
}

impl Render for UpdateContextSubscriptionResponse {
    fn render(&self) -> String {
        let mut obj = JsonObjectBuilder::new();
        obj.add_raw("subscribeError", &self.subscribe_error.render());
        obj.finalize()
    }
}

/// Reply to unsubscribeContext
#[derive(Debug, Clone, PartialEq)]
pub struct UnsubscribeContextResponse {
    pub subscription_id: String,
    pub status_code: ErrorCode,
}

impl UnsubscribeContextResponse {
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            subscription_id: String::new(),
            status_code: error_code.with_key_name("statusCode"),
        }
    }
}

impl Render for UnsubscribeContextResponse {
    fn render(&self) -> String {
        let mut obj = JsonObjectBuilder::new();
        obj.add_string("subscriptionId", &self.subscription_id);
        add_error_code(&mut obj, &self.status_code);
        obj.finalize()
    }
}

/// Reply to notifyContext
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyContextResponse {
    pub response_code: ErrorCode,
}

impl NotifyContextResponse {
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            response_code: error_code.with_key_name("responseCode"),
        }
    }
}

impl Render for NotifyContextResponse {
    fn render(&self) -> String {
        let mut obj = JsonObjectBuilder::new();
        add_error_code(&mut obj, &self.response_code);
        obj.finalize()
    }
}
