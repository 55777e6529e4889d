use anyhow::Result;
use async_trait::async_trait;

use crate::models::Customer;

pub mod memory;

pub use memory::InMemoryCustomerStore;

/// Key-value persistence for customer records, keyed by customer name
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Every stored record, in whatever order the backend returns them
    async fn scan(&self) -> Result<Vec<Customer>>;

    async fn get(&self, name: &str) -> Result<Option<Customer>>;

    /// Insert or overwrite the record stored under `customer.name`
    async fn put(&self, customer: &Customer) -> Result<()>;

    async fn delete(&self, name: &str) -> Result<()>;

    /// Verify the backend is reachable
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
