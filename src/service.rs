use anyhow::Result;
use std::sync::Arc;

use crate::phone::PhoneNumber;
use crate::store::AddressStore;

/// Result of a write against the address records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No address existed for the number, one was written
    Created,
    /// An address existed and was overwritten by a create
    Replaced,
    /// An existing address was overwritten by an update
    Updated,
    /// Create was called with an empty address, nothing was written
    AddressRequired,
}

impl WriteOutcome {
    pub fn message(self) -> &'static str {
        match self {
            WriteOutcome::Created => "address written",
            WriteOutcome::Replaced => "number existed, address replaced",
            WriteOutcome::Updated => "address updated",
            WriteOutcome::AddressRequired => "address required",
        }
    }
}

/// Phone -> address operations over an `AddressStore`
///
/// Writes are a plain read followed by a set with no compare-and-swap.
/// Two requests racing on the same number can both observe the number as
/// absent; the stored value is whichever set lands last.
#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn AddressStore>,
}

impl RecordService {
    pub fn new(store: Arc<dyn AddressStore>) -> Self {
        Self { store }
    }

    /// Look up the address for a phone number
    ///
    /// # Returns
    /// * `Ok(Some(address))` - Record found
    /// * `Ok(None)` - No record, or an empty one
    /// * `Err(_)` - Store operation failed
    pub async fn lookup(&self, phone: &str) -> Result<Option<String>> {
        self.current(phone).await
    }

    /// Write an address, creating the record or replacing an existing one
    ///
    /// An empty address yields `AddressRequired` without touching the store.
    pub async fn create_or_replace(
        &self,
        phone: &PhoneNumber,
        address: &str,
    ) -> Result<WriteOutcome> {
        if address.is_empty() {
            return Ok(WriteOutcome::AddressRequired);
        }

        let existed = self.current(phone.as_str()).await?.is_some();
        self.store.set(phone.as_str(), address).await?;

        Ok(if existed {
            WriteOutcome::Replaced
        } else {
            WriteOutcome::Created
        })
    }

    /// Overwrite the address of an existing record
    ///
    /// Returns `Ok(None)` without writing when the number has no record.
    pub async fn update_existing(
        &self,
        phone: &PhoneNumber,
        address: &str,
    ) -> Result<Option<WriteOutcome>> {
        if self.current(phone.as_str()).await?.is_none() {
            return Ok(None);
        }

        self.store.set(phone.as_str(), address).await?;
        Ok(Some(WriteOutcome::Updated))
    }

    pub async fn health_check(&self) -> Result<()> {
        self.store.ping().await
    }

    // An empty stored value counts as no record.
    async fn current(&self, phone: &str) -> Result<Option<String>> {
        Ok(self.store.get(phone).await?.filter(|address| !address.is_empty()))
    }
}
