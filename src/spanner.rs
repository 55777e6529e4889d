use anyhow::{Context, Result};
use async_trait::async_trait;
use gcloud_spanner::client::{Client, ClientConfig};
use gcloud_spanner::key::Key;
use gcloud_spanner::mutation::{delete, insert_or_update};
use gcloud_spanner::row::Row;
use gcloud_spanner::statement::Statement;
use std::sync::Arc;

use crate::config::Config;
use crate::models::Customer;
use crate::store::CustomerStore;

/// Column names of the customer table
const COLUMNS: [&str; 3] = ["Name", "Address", "PhoneNumber"];

/// Shareable Spanner-backed customer store for use across async handlers
#[derive(Clone)]
pub struct SpannerCustomerStore {
    inner: Arc<Client>,
    table: String,
}

impl SpannerCustomerStore {
    /// Create a new Spanner client from configuration
    ///
    /// The gcloud-spanner library automatically detects the
    /// SPANNER_EMULATOR_HOST environment variable and connects to
    /// the emulator when set, or production Spanner otherwise.
    ///
    /// The table is expected to exist already; see [`crate::provision`].
    pub async fn from_config(config: &Config) -> Result<Self> {
        let database_path = format!(
            "projects/{}/instances/{}/databases/{}",
            config.spanner_project, config.spanner_instance, config.spanner_database
        );

        match &config.spanner_emulator_host {
            Some(host) => tracing::info!("Connecting to Spanner emulator at: {}", host),
            None => tracing::info!("Connecting to production Spanner"),
        }

        // ClientConfig::default() automatically uses SPANNER_EMULATOR_HOST if set
        let client = Client::new(&database_path, ClientConfig::default())
            .await
            .context("Failed to create Spanner client")?;

        tracing::info!(
            "Successfully connected to Spanner database: {}",
            database_path
        );

        Ok(Self {
            inner: Arc::new(client),
            table: config.spanner_table.clone(),
        })
    }

    fn select_sql(&self) -> String {
        format!("SELECT {} FROM {}", COLUMNS.join(", "), self.table)
    }
}

fn customer_from_row(row: &Row) -> Result<Customer> {
    Ok(Customer {
        name: row.column_by_name("Name")?,
        address: row.column_by_name("Address")?,
        phone_number: row.column_by_name("PhoneNumber")?,
    })
}

#[async_trait]
impl CustomerStore for SpannerCustomerStore {
    /// Read every row of the customer table
    ///
    /// # Errors
    /// Returns an error if the Spanner query fails or a row cannot be decoded
    async fn scan(&self) -> Result<Vec<Customer>> {
        let statement = Statement::new(self.select_sql());

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create read transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to scan customers from Spanner")?;

        let mut customers = Vec::new();
        while let Some(row) = result_set.next().await? {
            customers.push(customer_from_row(&row)?);
        }

        tracing::debug!("Scanned {} customers", customers.len());
        Ok(customers)
    }

    /// Read a customer by name
    ///
    /// # Returns
    /// * `Ok(Some(customer))` - Customer found
    /// * `Ok(None)` - No row with that name
    /// * `Err(_)` - Spanner operation failed
    async fn get(&self, name: &str) -> Result<Option<Customer>> {
        let name = name.to_string();

        let mut statement = Statement::new(format!("{} WHERE Name = @name", self.select_sql()));
        statement.add_param("name", &name);

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create read transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to query customer from Spanner")?;

        if let Some(row) = result_set.next().await? {
            tracing::debug!("Read customer: {}", name);
            Ok(Some(customer_from_row(&row)?))
        } else {
            tracing::debug!("Customer not found: {}", name);
            Ok(None)
        }
    }

    /// Upsert (insert or update) a customer row keyed by its name
    async fn put(&self, customer: &Customer) -> Result<()> {
        let mutation = insert_or_update(
            self.table.as_str(),
            &COLUMNS,
            &[&customer.name, &customer.address, &customer.phone_number],
        );

        self.inner
            .apply(vec![mutation])
            .await
            .context("Failed to upsert customer to Spanner")?;

        tracing::debug!("Upserted customer: {}", customer.name);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let name = name.to_string();
        let mutation = delete(self.table.as_str(), Key::new(&name));

        self.inner
            .apply(vec![mutation])
            .await
            .context("Failed to delete customer from Spanner")?;

        tracing::debug!("Deleted customer: {}", name);
        Ok(())
    }

    /// Perform a health check by executing a lightweight `SELECT 1`
    async fn ping(&self) -> Result<()> {
        let statement = Statement::new("SELECT 1");

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create health check transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to execute health check query")?;

        if result_set.next().await?.is_some() {
            tracing::debug!("Health check query succeeded");
            Ok(())
        } else {
            Err(anyhow::anyhow!("Health check query returned no results"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreBackend;
    use crate::provision;
    use uuid::Uuid;

    /// Connect to the emulator named by SPANNER_EMULATOR_HOST, provisioning
    /// a dedicated instance and database first. `None` when no emulator is configured.
    async fn emulator_store(instance: &str) -> Option<SpannerCustomerStore> {
        let Ok(host) = std::env::var("SPANNER_EMULATOR_HOST") else {
            println!("Spanner test skipped (SPANNER_EMULATOR_HOST not set)");
            return None;
        };

        let config = Config {
            store_backend: StoreBackend::Spanner,
            spanner_emulator_host: Some(host),
            spanner_project: "test-project".to_string(),
            spanner_instance: instance.to_string(),
            spanner_database: format!("{}-db", instance),
            spanner_table: "Customer".to_string(),
            service_port: 8080,
            service_host: "0.0.0.0".to_string(),
        };

        provision::provision(&config)
            .await
            .expect("Failed to provision emulator");
        Some(
            SpannerCustomerStore::from_config(&config)
                .await
                .expect("Failed to create Spanner client"),
        )
    }

    #[test]
    fn test_store_is_clonable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<SpannerCustomerStore>();
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpannerCustomerStore>();
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let Some(store) = emulator_store("customer-crud-test").await else {
            return;
        };

        let name = format!("customer-{}", Uuid::new_v4());
        let customer = Customer::new(name.clone()).with_phone_number("123");

        store.put(&customer).await.unwrap();
        assert_eq!(store.get(&name).await.unwrap(), Some(customer));

        // Upsert replaces the row, including clearing columns
        let replaced = Customer::new(name.clone()).with_address("NZ");
        store.put(&replaced).await.unwrap();
        assert_eq!(store.get(&name).await.unwrap(), Some(replaced));

        let missing = format!("customer-{}", Uuid::new_v4());
        assert_eq!(store.get(&missing).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_scan_and_delete() {
        let Some(store) = emulator_store("customer-scan-test").await else {
            return;
        };

        let first = Customer::new(format!("customer-{}", Uuid::new_v4()));
        let second = Customer::new(format!("customer-{}", Uuid::new_v4())).with_address("NZ");
        store.put(&first).await.unwrap();
        store.put(&second).await.unwrap();

        let scanned = store.scan().await.unwrap();
        assert!(scanned.contains(&first));
        assert!(scanned.contains(&second));

        store.delete(&first.name).await.unwrap();
        assert_eq!(store.get(&first.name).await.unwrap(), None);
        assert!(!store.scan().await.unwrap().contains(&first));
    }

    #[tokio::test]
    async fn test_ping() {
        let Some(store) = emulator_store("customer-ping-test").await else {
            return;
        };

        assert!(store.ping().await.is_ok());
    }
}
