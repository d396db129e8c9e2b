//! Request type enumeration
//!
//! Every request the broker accepts is classified into one of the NGSI
//! operations below before it is served. The classification decides which
//! response envelope an error reply has to use.
//!
//! ## The Twelve Operations
//!
//! | RequestType | API family | Envelope on error |
//! |-------------|------------|-------------------|
//! | RegisterContext | NGSI9 | registrationId + errorCode |
//! | DiscoverContextAvailability | NGSI9 | errorCode |
//! | SubscribeContextAvailability | NGSI9 | subscriptionId + errorCode |
//! | UpdateContextAvailabilitySubscription | NGSI9 | errorCode |
//! | UnsubscribeContextAvailability | NGSI9 | subscriptionId + statusCode |
//! | NotifyContextAvailability | NGSI9 | responseCode |
//! | QueryContext | NGSI10 | errorCode |
//! | SubscribeContext | NGSI10 | subscribeError |
//! | UpdateContextSubscription | NGSI10 | subscribeError |
//! | UnsubscribeContext | NGSI10 | subscriptionId + statusCode |
//! | UpdateContext | NGSI10 | errorCode |
//! | NotifyContext | NGSI10 | responseCode |
//!
//! Anything else is [`RequestType::Unrecognized`] and gets the generic error
//! envelope.

/// The logical operation a request was classified as.
///
/// Adding an operation requires a variant here and a response variant in the
/// error renderer; the renderer matches exhaustively so the compiler points at
/// the missing branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    RegisterContext,
    DiscoverContextAvailability,
    SubscribeContextAvailability,
    UpdateContextAvailabilitySubscription,
    UnsubscribeContextAvailability,
    NotifyContextAvailability,
    QueryContext,
    SubscribeContext,
    UpdateContextSubscription,
    UnsubscribeContext,
    UpdateContext,
    NotifyContext,
    /// No operation matched (V2 resources, unknown URLs, ...)
    Unrecognized,
}

impl RequestType {
    /// All request types (for iteration)
    pub const ALL: [RequestType; 13] = [
        RequestType::RegisterContext,
        RequestType::DiscoverContextAvailability,
        RequestType::SubscribeContextAvailability,
        RequestType::UpdateContextAvailabilitySubscription,
        RequestType::UnsubscribeContextAvailability,
        RequestType::NotifyContextAvailability,
        RequestType::QueryContext,
        RequestType::SubscribeContext,
        RequestType::UpdateContextSubscription,
        RequestType::UnsubscribeContext,
        RequestType::UpdateContext,
        RequestType::NotifyContext,
        RequestType::Unrecognized,
    ];

    /// Operation name as it appears in NGSI payload tags
    pub const fn name(&self) -> &'static str {
        match self {
            RequestType::RegisterContext => "registerContext",
            RequestType::DiscoverContextAvailability => "discoverContextAvailability",
            RequestType::SubscribeContextAvailability => "subscribeContextAvailability",
            RequestType::UpdateContextAvailabilitySubscription => {
                "updateContextAvailabilitySubscription"
            }
            RequestType::UnsubscribeContextAvailability => "unsubscribeContextAvailability",
            RequestType::NotifyContextAvailability => "notifyContextAvailability",
            RequestType::QueryContext => "queryContext",
            RequestType::SubscribeContext => "subscribeContext",
            RequestType::UpdateContextSubscription => "updateContextSubscription",
            RequestType::UnsubscribeContext => "unsubscribeContext",
            RequestType::UpdateContext => "updateContext",
            RequestType::NotifyContext => "notifyContext",
            RequestType::Unrecognized => "unrecognized",
        }
    }

    /// Parse from the operation name
    ///
    /// Unknown names map to [`RequestType::Unrecognized`]; classification
    /// never fails.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == name)
            .unwrap_or(RequestType::Unrecognized)
    }

    /// NGSI9 (context availability) operations
    pub const fn is_ngsi9(&self) -> bool {
        matches!(
            self,
            RequestType::RegisterContext
                | RequestType::DiscoverContextAvailability
                | RequestType::SubscribeContextAvailability
                | RequestType::UpdateContextAvailabilitySubscription
                | RequestType::UnsubscribeContextAvailability
                | RequestType::NotifyContextAvailability
        )
    }

    /// NGSI10 (context information) operations
    pub const fn is_ngsi10(&self) -> bool {
        !self.is_ngsi9() && !matches!(self, RequestType::Unrecognized)
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================
