use crate::core::Storage;
use crate::domain::model::Customer;
use crate::utils::error::{EtlError, Result};

/// Writes one line per entry, replacing `path`.
///
/// Failures are logged and reported as `false`.
pub async fn export_list<S: Storage>(storage: &S, lines: &[String], path: &str) -> bool {
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }

    match storage.write_file(path, content.as_bytes()).await {
        Ok(()) => {
            tracing::debug!("Exported {} lines to {}", lines.len(), path);
            true
        }
        Err(e) => {
            tracing::error!("❌ Failed to export {}: {}", path, e);
            false
        }
    }
}

/// Writes the parsed customers as CSV with a header row, replacing `path`.
pub async fn export_customers<S: Storage>(storage: &S, customers: &[Customer], path: &str) -> bool {
    let result = match customers_to_csv(customers) {
        Ok(data) => storage.write_file(path, &data).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            tracing::debug!("Exported {} customers to {}", customers.len(), path);
            true
        }
        Err(e) => {
            tracing::error!("❌ Failed to export {}: {}", path, e);
            false
        }
    }
}

fn customers_to_csv(customers: &[Customer]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for customer in customers {
        writer.serialize(customer)?;
    }
    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        read_only: bool,
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| EtlError::InputNotFound {
                path: path.to_string(),
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.read_only {
                return Err(EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only storage",
                )));
            }
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_export_list_writes_lines() {
        let storage = MockStorage::default();
        let lines = vec!["Bobi : 1".to_string(), "Alex : 2".to_string()];

        assert!(export_list(&storage, &lines, "output1.txt").await);

        let data = storage.read_file("output1.txt").await.unwrap();
        assert_eq!(String::from_utf8(data).unwrap(), "Bobi : 1\nAlex : 2\n");
    }

    #[tokio::test]
    async fn test_export_list_replaces_existing() {
        let storage = MockStorage::default();
        storage
            .write_file("output2.txt", b"old content that is longer\n")
            .await
            .unwrap();

        assert!(export_list(&storage, &["new".to_string()], "output2.txt").await);

        let data = storage.read_file("output2.txt").await.unwrap();
        assert_eq!(data, b"new\n");
    }

    #[tokio::test]
    async fn test_export_failure_returns_false() {
        let storage = MockStorage {
            read_only: true,
            ..Default::default()
        };

        assert!(!export_list(&storage, &["x".to_string()], "output1.txt").await);
        assert!(!export_customers(&storage, &[Customer::default()], "customers.csv").await);
    }

    #[tokio::test]
    async fn test_export_customers_csv() {
        let storage = MockStorage::default();
        let customers = vec![Customer::new("Jo", "Bloggs", "12 High Street", "0123456")];

        assert!(export_customers(&storage, &customers, "customers.csv").await);

        let data = storage.read_file("customers.csv").await.unwrap();
        assert_eq!(
            String::from_utf8(data).unwrap(),
            "first_name,last_name,address,phone_number\nJo,Bloggs,12 High Street,0123456\n"
        );
    }
}
