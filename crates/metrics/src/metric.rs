//! Metric kinds

use std::fmt;

/// One kind of incoming-transaction counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// Requests received
    Transactions,
    /// Request payload bytes
    RequestSize,
    /// Response payload bytes
    ResponseSize,
    /// Requests that could not be answered
    Errors,
    /// Time spent serving requests
    ServiceTime,
}

impl Metric {
    /// All metric kinds, in report order
    pub const ALL: [Metric; 5] = [
        Metric::Transactions,
        Metric::RequestSize,
        Metric::ResponseSize,
        Metric::Errors,
        Metric::ServiceTime,
    ];

    /// Name used in metric reports
    pub const fn name(&self) -> &'static str {
        match self {
            Metric::Transactions => "incomingTransactions",
            Metric::RequestSize => "incomingTransactionRequestSize",
            Metric::ResponseSize => "incomingTransactionResponseSize",
            Metric::Errors => "incomingTransactionErrors",
            Metric::ServiceTime => "serviceTime",
        }
    }

    pub(crate) const fn index(&self) -> usize {
        match self {
            Metric::Transactions => 0,
            Metric::RequestSize => 1,
            Metric::ResponseSize => 2,
            Metric::Errors => 3,
            Metric::ServiceTime => 4,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
