use async_trait::async_trait;
use shared::{
    domain::{CustomerId, CustomerRecord},
    protocol::CreateCustomerRequest,
};

pub mod config;
pub mod customer_list;
pub mod error;
pub mod registration;
pub mod session_timer;
pub mod transport;

pub use customer_list::{CustomerList, CustomerListController, DeleteOutcome};
pub use error::{DirectoryError, DirectoryErrorKind};
pub use registration::{submit, RegistrationForm, SubmitOutcome};
pub use session_timer::{format_hms, SessionTimer, TimerState, SESSION_LENGTH_SECS};
pub use transport::HttpDirectoryClient;

/// Remote customer directory. Implementations do not retry or cache.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, DirectoryError>;
    async fn create_customer(
        &self,
        request: &CreateCustomerRequest,
    ) -> Result<CustomerRecord, DirectoryError>;
    async fn delete_customer(&self, id: &CustomerId) -> Result<(), DirectoryError>;
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
