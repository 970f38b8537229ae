//! UI/backend events and error modeling for desktop GUI controller.

use client_core::{DirectoryError, DirectoryErrorKind};
use shared::{
    domain::{CustomerId, CustomerRecord},
    error::ValidationError,
};

/// Every event that changes the list carries the worker's full snapshot.
pub enum UiEvent {
    CustomersLoaded {
        customers: Vec<CustomerRecord>,
    },
    CustomerCreated {
        customer: CustomerRecord,
        customers: Vec<CustomerRecord>,
    },
    CustomerDeleted {
        id: CustomerId,
        customers: Vec<CustomerRecord>,
    },
    DeleteFailed {
        id: CustomerId,
        error: UiError,
        /// Present when the follow-up reload succeeded.
        customers: Option<Vec<CustomerRecord>>,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Configuration,
    Transport,
    Server,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadCustomers,
    CreateCustomer,
    DeleteCustomer,
    Registration,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Unknown,
            context,
            message: message.into(),
        }
    }

    pub fn from_directory(context: UiErrorContext, err: &DirectoryError) -> Self {
        let category = match err.kind() {
            DirectoryErrorKind::Configuration => UiErrorCategory::Configuration,
            DirectoryErrorKind::Transport => UiErrorCategory::Transport,
            DirectoryErrorKind::Rejected | DirectoryErrorKind::Decode => UiErrorCategory::Server,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn from_validation(err: &ValidationError) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context: UiErrorContext::Registration,
            message: format!("Fill in the {} field before registering.", err.field()),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line text for the status banner.
    pub fn banner_text(&self) -> String {
        let action = match self.context {
            UiErrorContext::BackendStartup => "Backend startup failed",
            UiErrorContext::LoadCustomers => "Could not load customers",
            UiErrorContext::CreateCustomer => "Could not register customer",
            UiErrorContext::DeleteCustomer => "Could not delete customer",
            UiErrorContext::Registration => return self.message.clone(),
        };
        let hint = match self.category {
            UiErrorCategory::Transport => "server unreachable; check the API url and network",
            UiErrorCategory::Configuration => "invalid API url",
            UiErrorCategory::Server => "the server rejected the request",
            UiErrorCategory::Validation | UiErrorCategory::Unknown => "unexpected error",
        };
        format!("{action}: {hint} ({})", self.message)
    }
}
