use anyhow::Result;
use std::sync::Arc;

use crate::models::Customer;
use crate::store::CustomerStore;

/// Existence-gated CRUD over a [`CustomerStore`]
///
/// "Not found" and "already exists" are reported as `None` / `false`;
/// `Err` is reserved for store failures.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

/// A value counts as set only when present and non-empty. No trimming.
fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Check that the underlying store is reachable
    pub async fn ping(&self) -> Result<()> {
        self.store.ping().await
    }

    pub async fn list(&self) -> Result<Vec<Customer>> {
        self.store.scan().await
    }

    pub async fn read(&self, name: &str) -> Result<Option<Customer>> {
        self.store.get(name).await
    }

    /// Store `customer` verbatim unless its name is taken
    pub async fn create(&self, customer: Customer) -> Result<Option<Customer>> {
        if self.store.get(&customer.name).await?.is_some() {
            tracing::warn!("Customer {} already exists", customer.name);
            return Ok(None);
        }
        self.store.put(&customer).await?;
        Ok(Some(customer))
    }

    /// Overwrite address and phone number unconditionally, blanks included
    pub async fn replace(&self, incoming: Customer) -> Result<Option<Customer>> {
        let Some(mut customer) = self.store.get(&incoming.name).await? else {
            tracing::warn!("Customer {} not found", incoming.name);
            return Ok(None);
        };
        customer.address = incoming.address;
        customer.phone_number = incoming.phone_number;
        self.store.put(&customer).await?;
        Ok(Some(customer))
    }

    /// Overwrite only the fields that are set in `incoming`
    pub async fn update(&self, incoming: Customer) -> Result<Option<Customer>> {
        let Some(mut customer) = self.store.get(&incoming.name).await? else {
            tracing::warn!("Customer {} not found", incoming.name);
            return Ok(None);
        };
        if is_set(&incoming.address) {
            customer.address = incoming.address;
        }
        if is_set(&incoming.phone_number) {
            customer.phone_number = incoming.phone_number;
        }
        self.store.put(&customer).await?;
        Ok(Some(customer))
    }

    /// Returns `false` when there was nothing to delete
    pub async fn delete(&self, name: &str) -> Result<bool> {
        if self.store.get(name).await?.is_none() {
            tracing::warn!("Customer {} not found", name);
            return Ok(false);
        }
        self.store.delete(name).await?;
        Ok(true)
    }
}
