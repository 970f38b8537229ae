//! Backend commands queued from UI to backend worker.

use shared::{domain::CustomerId, protocol::CreateCustomerRequest};

pub enum BackendCommand {
    LoadCustomers,
    CreateCustomer { request: CreateCustomerRequest },
    DeleteCustomer { id: CustomerId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadCustomers => "load_customers",
            Self::CreateCustomer { .. } => "create_customer",
            Self::DeleteCustomer { .. } => "delete_customer",
        }
    }
}
