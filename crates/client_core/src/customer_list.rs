//! Owned customer collection and the controller that keeps it in step with
//! the directory.

use std::sync::Arc;

use shared::{
    domain::{CustomerId, CustomerRecord},
    protocol::CreateCustomerRequest,
};
use tracing::{info, warn};

use crate::{error::DirectoryError, DirectoryClient};

/// Ordered customer records with unique identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerList {
    records: Vec<CustomerRecord>,
}

impl CustomerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every record. Later duplicates of an identifier are dropped.
    pub fn replace_all(&mut self, records: Vec<CustomerRecord>) {
        let mut unique: Vec<CustomerRecord> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|existing| existing.id == record.id) {
                warn!(customer_id = %record.id, "dropping duplicate customer id from listing");
                continue;
            }
            unique.push(record);
        }
        self.records = unique;
    }

    /// Appends at the end, or replaces in place if the identifier is already present.
    pub fn append(&mut self, record: CustomerRecord) {
        match self.position(&record.id) {
            Some(index) => {
                warn!(customer_id = %record.id, "created customer id already listed; replacing");
                self.records[index] = record;
            }
            None => self.records.push(record),
        }
    }

    pub fn remove(&mut self, id: &CustomerId) -> Option<CustomerRecord> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: &CustomerId) -> Option<&CustomerRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn contains(&self, id: &CustomerId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomerRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[CustomerRecord] {
        &self.records
    }

    fn position(&self, id: &CustomerId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }
}

#[derive(Debug)]
pub enum DeleteOutcome {
    Removed,
    /// The directory call failed. `resynced` reports whether the follow-up
    /// reload succeeded and replaced the local list.
    Failed {
        error: DirectoryError,
        resynced: bool,
    },
}

impl DeleteOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed)
    }
}

pub struct CustomerListController {
    directory: Arc<dyn DirectoryClient>,
    customers: CustomerList,
}

impl CustomerListController {
    pub fn new(directory: Arc<dyn DirectoryClient>) -> Self {
        Self {
            directory,
            customers: CustomerList::new(),
        }
    }

    pub fn customers(&self) -> &CustomerList {
        &self.customers
    }

    /// Replaces the list with the directory's. On failure the list is untouched.
    pub async fn load(&mut self) -> Result<usize, DirectoryError> {
        match self.directory.list_customers().await {
            Ok(records) => {
                self.customers.replace_all(records);
                info!(count = self.customers.len(), "loaded customers");
                Ok(self.customers.len())
            }
            Err(err) => {
                warn!("failed to load customers: {err}");
                Err(err)
            }
        }
    }

    /// Appends the server echo once the directory confirms the create.
    pub async fn create(
        &mut self,
        request: &CreateCustomerRequest,
    ) -> Result<CustomerRecord, DirectoryError> {
        let created = self.directory.create_customer(request).await?;
        info!(customer_id = %created.id, computer = %created.computer_label, "registered customer");
        self.customers.append(created.clone());
        Ok(created)
    }

    /// Removes the record after the directory confirms. A failed delete leaves
    /// the list as is and then reloads it, since the server may have applied
    /// the delete anyway.
    pub async fn delete(&mut self, id: &CustomerId) -> DeleteOutcome {
        match self.directory.delete_customer(id).await {
            Ok(()) => {
                if self.customers.remove(id).is_none() {
                    warn!(customer_id = %id, "deleted customer was not in the local list");
                }
                info!(customer_id = %id, "removed customer");
                DeleteOutcome::Removed
            }
            Err(error) => {
                warn!(customer_id = %id, "failed to delete customer: {error}");
                let resynced = self.load().await.is_ok();
                DeleteOutcome::Failed { error, resynced }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/customer_list_tests.rs"]
mod tests;
