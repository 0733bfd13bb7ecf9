// src/services/store.rs
use chrono::Utc;
use log::{debug, info, warn};
use std::fmt;
use std::io;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;

use crate::models::{Bank, BankData, Certificate};

#[derive(Debug)]
pub enum StoreError {
    NotFound(String),
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::NotFound(what) => write!(f, "{} not found", what),
            StoreError::Io(e) => write!(f, "catalog file error: {}", e),
            StoreError::Parse(e) => write!(f, "catalog parse error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::NotFound(_) => None,
            StoreError::Io(e) => Some(e),
            StoreError::Parse(e) => Some(e),
        }
    }
}

/// File-backed catalog of banks and their certificates.
///
/// The whole document lives in memory behind an RwLock; every mutation
/// writes it back to disk before returning, so the file is the source
/// of truth across restarts.
pub struct BankStore {
    path: PathBuf,
    data: RwLock<BankData>,
}

impl BankStore {
    /// Read and parse the catalog file. A missing file starts an empty
    /// catalog rather than failing, so first boot needs no setup step.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let data = match fs::read_to_string(&path).await {
            Ok(contents) => {
                let data: BankData =
                    serde_json::from_str(&contents).map_err(StoreError::Parse)?;
                info!(
                    "Loaded catalog from {} ({} banks)",
                    path.display(),
                    data.banks.len()
                );
                data
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "Catalog file {} not found, starting with an empty catalog",
                    path.display()
                );
                BankData::default()
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        Ok(BankStore {
            path,
            data: RwLock::new(data),
        })
    }

    /// The full catalog document, delivered wholesale.
    pub async fn get_data(&self) -> BankData {
        self.data.read().await.clone()
    }

    /// First certificate with the given id across all banks.
    pub async fn find_certificate(&self, id: &str) -> Option<Certificate> {
        self.data
            .read()
            .await
            .banks
            .iter()
            .flat_map(|bank| bank.certificates.iter())
            .find(|cert| cert.id == id)
            .cloned()
    }

    /// Replace the whole document. Backs the admin save and import flows.
    pub async fn replace(&self, new_data: BankData) -> Result<(), StoreError> {
        let mut data = self.data.write().await;
        self.persist(&new_data).await?;
        *data = new_data;
        Ok(())
    }

    pub async fn add_bank(&self, mut bank: Bank) -> Result<Bank, StoreError> {
        if bank.id.is_empty() {
            bank.id = format!("bank-{}", Utc::now().timestamp_millis());
        }
        let mut data = self.data.write().await;
        let mut next = data.clone();
        next.banks.push(bank.clone());
        self.persist(&next).await?;
        *data = next;
        Ok(bank)
    }

    /// Replace a stored bank. The path id wins over any id in the body.
    pub async fn update_bank(&self, id: &str, mut bank: Bank) -> Result<Bank, StoreError> {
        let mut data = self.data.write().await;
        let mut next = data.clone();
        let slot = next
            .banks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("bank {}", id)))?;
        bank.id = id.to_string();
        *slot = bank.clone();
        self.persist(&next).await?;
        *data = next;
        Ok(bank)
    }

    pub async fn delete_bank(&self, id: &str) -> Result<(), StoreError> {
        let mut data = self.data.write().await;
        let mut next = data.clone();
        let before = next.banks.len();
        next.banks.retain(|b| b.id != id);
        if next.banks.len() == before {
            return Err(StoreError::NotFound(format!("bank {}", id)));
        }
        self.persist(&next).await?;
        *data = next;
        Ok(())
    }

    pub async fn add_certificate(
        &self,
        bank_id: &str,
        mut cert: Certificate,
    ) -> Result<Certificate, StoreError> {
        if cert.id.is_empty() {
            cert.id = format!("cert-{}", Utc::now().timestamp_millis());
        }
        let mut data = self.data.write().await;
        let mut next = data.clone();
        let bank = next
            .banks
            .iter_mut()
            .find(|b| b.id == bank_id)
            .ok_or_else(|| StoreError::NotFound(format!("bank {}", bank_id)))?;
        bank.certificates.push(cert.clone());
        self.persist(&next).await?;
        *data = next;
        Ok(cert)
    }

    pub async fn update_certificate(
        &self,
        bank_id: &str,
        cert_id: &str,
        mut cert: Certificate,
    ) -> Result<Certificate, StoreError> {
        let mut data = self.data.write().await;
        let mut next = data.clone();
        let bank = next
            .banks
            .iter_mut()
            .find(|b| b.id == bank_id)
            .ok_or_else(|| StoreError::NotFound(format!("bank {}", bank_id)))?;
        let slot = bank
            .certificates
            .iter_mut()
            .find(|c| c.id == cert_id)
            .ok_or_else(|| StoreError::NotFound(format!("certificate {}", cert_id)))?;
        cert.id = cert_id.to_string();
        *slot = cert.clone();
        self.persist(&next).await?;
        *data = next;
        Ok(cert)
    }

    pub async fn delete_certificate(
        &self,
        bank_id: &str,
        cert_id: &str,
    ) -> Result<(), StoreError> {
        let mut data = self.data.write().await;
        let mut next = data.clone();
        let bank = next
            .banks
            .iter_mut()
            .find(|b| b.id == bank_id)
            .ok_or_else(|| StoreError::NotFound(format!("bank {}", bank_id)))?;
        let before = bank.certificates.len();
        bank.certificates.retain(|c| c.id != cert_id);
        if bank.certificates.len() == before {
            return Err(StoreError::NotFound(format!("certificate {}", cert_id)));
        }
        self.persist(&next).await?;
        *data = next;
        Ok(())
    }

    /// Write the document to a sibling temp file, then rename over the
    /// real path. A crash mid-write leaves the old catalog intact.
    async fn persist(&self, data: &BankData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(StoreError::Io)?;
            }
        }

        let json = serde_json::to_string_pretty(data).map_err(StoreError::Parse)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).await.map_err(StoreError::Io)?;
        fs::rename(&tmp, &self.path).await.map_err(StoreError::Io)?;
        debug!("Persisted catalog to {}", self.path.display());
        Ok(())
    }
}
