use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CustomerStore;
use crate::models::Customer;

/// Process-local store, used by tests and `STORE_BACKEND=memory`
#[derive(Default)]
pub struct InMemoryCustomerStore {
    records: RwLock<HashMap<String, Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn scan(&self) -> Result<Vec<Customer>> {
        let records = self.records.read().await;
        tracing::debug!("Scanned {} customers from memory", records.len());
        Ok(records.values().cloned().collect())
    }

    async fn get(&self, name: &str) -> Result<Option<Customer>> {
        Ok(self.records.read().await.get(name).cloned())
    }

    async fn put(&self, customer: &Customer) -> Result<()> {
        self.records
            .write()
            .await
            .insert(customer.name.clone(), customer.clone());
        tracing::debug!("Stored customer in memory: {}", customer.name);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.records.write().await.remove(name);
        tracing::debug!("Removed customer from memory: {}", name);
        Ok(())
    }
}
