//! Applies backend events to the UI-thread view state.

use std::collections::HashMap;

use client_core::{RegistrationForm, SessionTimer};
use shared::domain::{CustomerId, CustomerRecord};

use crate::controller::events::{UiErrorContext, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub message: String,
}

impl StatusBanner {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Error,
            message: message.into(),
        }
    }
}

/// A rendered customer and the countdown that belongs to its card.
#[derive(Debug)]
pub struct CustomerCard {
    pub customer: CustomerRecord,
    pub timer: SessionTimer,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    pub cards: Vec<CustomerCard>,
    pub banner: Option<StatusBanner>,
    pub submitting: bool,
    pub pending_deletes: Vec<CustomerId>,
    pub loaded: bool,
}

impl AppState {
    pub fn is_delete_pending(&self, id: &CustomerId) -> bool {
        self.pending_deletes.contains(id)
    }
}

pub fn reduce(state: &mut AppState, event: UiEvent) {
    match event {
        UiEvent::CustomersLoaded { customers } => {
            state.loaded = true;
            sync_cards(&mut state.cards, customers);
        }
        UiEvent::CustomerCreated {
            customer,
            customers,
        } => {
            state.submitting = false;
            state.form.clear();
            sync_cards(&mut state.cards, customers);
            state.banner = Some(StatusBanner::info(format!(
                "Registered {} on {}",
                customer.name, customer.computer_label
            )));
        }
        UiEvent::CustomerDeleted { id, customers } => {
            state.pending_deletes.retain(|pending| pending != &id);
            sync_cards(&mut state.cards, customers);
        }
        UiEvent::DeleteFailed {
            id,
            error,
            customers,
        } => {
            state.pending_deletes.retain(|pending| pending != &id);
            if let Some(customers) = customers {
                sync_cards(&mut state.cards, customers);
            }
            state.banner = Some(StatusBanner::error(error.banner_text()));
        }
        UiEvent::Error(error) => {
            // Commands run in order, so only the create's own failure (or a dead
            // worker) means no registration is still queued.
            if matches!(
                error.context(),
                UiErrorContext::CreateCustomer | UiErrorContext::BackendStartup
            ) {
                state.submitting = false;
            }
            state.banner = Some(StatusBanner::error(error.banner_text()));
        }
    }
}

/// Rebuilds the cards in snapshot order. Surviving customers keep their timer,
/// new ones start idle, and timers of removed customers are dropped.
fn sync_cards(cards: &mut Vec<CustomerCard>, customers: Vec<CustomerRecord>) {
    let mut timers: HashMap<CustomerId, SessionTimer> = cards
        .drain(..)
        .map(|card| (card.customer.id, card.timer))
        .collect();
    cards.extend(customers.into_iter().map(|customer| {
        let timer = timers.remove(&customer.id).unwrap_or_default();
        CustomerCard { customer, timer }
    }));
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use client_core::{DirectoryError, SESSION_LENGTH_SECS};

    use super::*;
    use crate::controller::events::UiError;

    fn customer(id: &str, name: &str) -> CustomerRecord {
        CustomerRecord {
            id: CustomerId::from(id),
            name: name.into(),
            email: format!("{id}@example.com"),
            computer_label: format!("PC-{id}"),
            active: true,
            created_at: "2024-03-13T18:02:11.000Z".into(),
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        reduce(
            &mut state,
            UiEvent::CustomersLoaded {
                customers: vec![customer("a", "Ana"), customer("b", "Bruno")],
            },
        );
        state
    }

    #[test]
    fn load_creates_idle_cards_in_order() {
        let state = loaded_state();
        assert!(state.loaded);
        let names: Vec<&str> = state.cards.iter().map(|c| c.customer.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bruno"]);
        assert!(state.cards.iter().all(|c| !c.timer.is_running()));
    }

    #[test]
    fn surviving_cards_keep_their_running_timer() {
        let t0 = Instant::now();
        let mut state = loaded_state();
        state.cards[1].timer.start(t0);
        state.cards[1].timer.advance(t0 + Duration::from_secs(5));

        reduce(
            &mut state,
            UiEvent::CustomerDeleted {
                id: CustomerId::from("a"),
                customers: vec![customer("b", "Bruno")],
            },
        );

        assert_eq!(state.cards.len(), 1);
        assert!(state.cards[0].timer.is_running());
        assert_eq!(state.cards[0].timer.remaining_secs(), SESSION_LENGTH_SECS - 5);
    }

    #[test]
    fn created_customer_clears_form_and_adds_idle_card() {
        let mut state = loaded_state();
        state.form.name = "Carla".into();
        state.form.email = "carla@example.com".into();
        state.form.computer_label = "PC-c".into();
        state.submitting = true;

        let created = customer("c", "Carla");
        reduce(
            &mut state,
            UiEvent::CustomerCreated {
                customer: created.clone(),
                customers: vec![customer("a", "Ana"), customer("b", "Bruno"), created],
            },
        );

        assert!(state.form.is_blank());
        assert!(!state.submitting);
        assert_eq!(state.cards.len(), 3);
        assert!(!state.cards[2].timer.is_running());
    }

    #[test]
    fn failed_create_keeps_form_and_shows_banner() {
        let mut state = loaded_state();
        state.form.name = "Carla".into();
        state.submitting = true;

        let err = DirectoryError::Rejected {
            status: 500,
            body: "boom".into(),
        };
        reduce(
            &mut state,
            UiEvent::Error(UiError::from_directory(UiErrorContext::CreateCustomer, &err)),
        );

        assert_eq!(state.form.name, "Carla");
        assert!(!state.submitting);
        let banner = state.banner.expect("banner");
        assert_eq!(banner.severity, StatusBannerSeverity::Error);
        assert_eq!(state.cards.len(), 2);
    }

    #[test]
    fn failed_delete_without_resync_keeps_cards() {
        let mut state = loaded_state();
        state.pending_deletes.push(CustomerId::from("a"));
        let err = DirectoryError::Rejected {
            status: 503,
            body: String::new(),
        };
        reduce(
            &mut state,
            UiEvent::DeleteFailed {
                id: CustomerId::from("a"),
                error: UiError::from_directory(UiErrorContext::DeleteCustomer, &err),
                customers: None,
            },
        );
        assert_eq!(state.cards.len(), 2);
        assert!(!state.is_delete_pending(&CustomerId::from("a")));
        assert!(state.banner.is_some());
    }

    #[test]
    fn load_error_keeps_register_disabled_while_create_is_queued() {
        let mut state = AppState::default();
        state.form.name = "Carla".into();
        state.submitting = true;

        let err = DirectoryError::Rejected {
            status: 503,
            body: String::new(),
        };
        reduce(
            &mut state,
            UiEvent::Error(UiError::from_directory(UiErrorContext::LoadCustomers, &err)),
        );

        assert!(state.submitting);
        assert_eq!(state.form.name, "Carla");
        assert!(state.banner.is_some());
    }

    #[test]
    fn startup_failure_releases_register() {
        let mut state = AppState::default();
        state.submitting = true;
        reduce(
            &mut state,
            UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                "backend worker startup failure",
            )),
        );
        assert!(!state.submitting);
    }

    #[test]
    fn resynced_delete_failure_keeps_surviving_timers() {
        let t0 = Instant::now();
        let mut state = loaded_state();
        state.cards[0].timer.start(t0);
        state.cards[0].timer.advance(t0 + Duration::from_secs(3));
        state.pending_deletes.push(CustomerId::from("b"));

        let err = DirectoryError::Rejected {
            status: 500,
            body: String::new(),
        };
        reduce(
            &mut state,
            UiEvent::DeleteFailed {
                id: CustomerId::from("b"),
                error: UiError::from_directory(UiErrorContext::DeleteCustomer, &err),
                customers: Some(vec![
                    customer("a", "Ana"),
                    customer("b", "Bruno"),
                    customer("c", "Carla"),
                ]),
            },
        );

        let ids: Vec<&str> = state.cards.iter().map(|c| c.customer.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(state.cards[0].timer.is_running());
        assert_eq!(state.cards[0].timer.remaining_secs(), SESSION_LENGTH_SECS - 3);
        assert!(!state.cards[2].timer.is_running());
        assert!(!state.is_delete_pending(&CustomerId::from("b")));
        assert_eq!(state.banner.map(|b| b.severity), Some(StatusBannerSeverity::Error));
    }
}
