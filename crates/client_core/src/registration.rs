use shared::{
    domain::CustomerRecord,
    error::{FormField, ValidationError},
    protocol::CreateCustomerRequest,
};
use tracing::debug;

use crate::{customer_list::CustomerListController, error::DirectoryError};

/// Input state of the registration form, one field per input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub computer_label: String,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the create request from the raw field values. Blank fields count
    /// as missing; the first one in form order is reported.
    ///
    /// Whitespace-only input is rejected as well, not just the empty string.
    pub fn validate(&self) -> Result<CreateCustomerRequest, ValidationError> {
        let fields = [
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::ComputerLabel, &self.computer_label),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }
        Ok(CreateCustomerRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            computer_label: self.computer_label.clone(),
        })
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.computer_label.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.computer_label.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Dropped(FormField),
    Created(CustomerRecord),
}

/// Submits the form through the controller and clears it once the customer
/// is created. Incomplete forms never reach the directory.
pub async fn submit(
    form: &mut RegistrationForm,
    controller: &mut CustomerListController,
) -> Result<SubmitOutcome, DirectoryError> {
    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => {
            debug!("registration dropped: {err}");
            return Ok(SubmitOutcome::Dropped(err.field()));
        }
    };
    let created = controller.create(&request).await?;
    form.clear();
    Ok(SubmitOutcome::Created(created))
}
