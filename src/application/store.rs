use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::billing::{
    grand_total, validate_title, zero_amount, BillingList, LineItemInput, SortOrder,
    DEFAULT_CURRENCY,
};
use crate::domain::errors::{DomainError, ValidationError};
use crate::domain::ports::BlobStore;

use super::document;
use super::persist::{PersistQueue, STORAGE_KEY};

/// Canonical in-memory collection of billing lists.
///
/// The store is the sole writer of persisted state: every mutation updates
/// the collection synchronously, then hands the full serialized document to
/// the persist queue. Readers only ever see immutable borrows of the live
/// collection.
pub struct BillingStore {
    lists: Vec<BillingList>,
    queue: PersistQueue,
}

impl BillingStore {
    /// Read the persisted document from the adapter and start the writer.
    ///
    /// An absent or undecodable document yields an empty collection.
    pub async fn load(adapter: Arc<dyn BlobStore>) -> Self {
        let lists = match adapter.get(STORAGE_KEY).await {
            Ok(Some(bytes)) => match document::decode(&bytes) {
                Ok(lists) => lists,
                Err(err) => {
                    log::warn!("unreadable billing document, starting empty: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("failed to read billing document, starting empty: {err}");
                Vec::new()
            }
        };
        Self {
            lists,
            queue: PersistQueue::spawn(adapter),
        }
    }

    pub fn lists(&self) -> &[BillingList] {
        &self.lists
    }

    pub fn get(&self, id: Uuid) -> Option<&BillingList> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// Filter by a case-insensitive title substring and order the result.
    pub fn select(&self, search: Option<&str>, order: SortOrder) -> Vec<&BillingList> {
        let needle = search
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());
        let mut out: Vec<&BillingList> = self
            .lists
            .iter()
            .filter(|l| match &needle {
                Some(q) => l.title.to_lowercase().contains(q),
                None => true,
            })
            .collect();
        match order {
            SortOrder::Recent => out.sort_by(|a, b| b.date_created.cmp(&a.date_created)),
            SortOrder::TitleAsc => {
                out.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
            }
            SortOrder::TitleDesc => {
                out.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()));
            }
        }
        out
    }

    /// Create a new list from a raw title and optional address.
    ///
    /// The title must be 3–50 characters of letters, digits, spaces, dashes,
    /// or underscores after trimming, and unique among all lists ignoring
    /// case. The new list is visible to reads as soon as this returns.
    pub fn create_list(
        &mut self,
        title: &str,
        address: Option<String>,
    ) -> Result<Uuid, DomainError> {
        let title = validate_title(title)?;
        let needle = title.to_lowercase();
        if self.lists.iter().any(|l| l.title.to_lowercase() == needle) {
            return Err(ValidationError::DuplicateTitle.into());
        }

        let id = Uuid::new_v4();
        self.lists.push(BillingList {
            id,
            title,
            currency: DEFAULT_CURRENCY.to_string(),
            timezone: local_timezone(),
            date_created: Utc::now(),
            address,
            items: Vec::new(),
            grand_total: zero_amount(),
        });
        self.persist();
        Ok(id)
    }

    /// Remove the list with the given id.
    pub fn delete_list(&mut self, id: Uuid) -> Result<(), DomainError> {
        let before = self.lists.len();
        self.lists.retain(|l| l.id != id);
        if self.lists.len() == before {
            return Err(DomainError::NotFound);
        }
        self.persist();
        Ok(())
    }

    /// Append a line item to the list with the given id.
    ///
    /// The item's total is fixed here from its price and quantity, and the
    /// list's grand total is recomputed from the stored item totals.
    pub fn add_item(&mut self, list_id: Uuid, input: &LineItemInput) -> Result<(), DomainError> {
        let item = input.parse()?;
        let list = self
            .lists
            .iter_mut()
            .find(|l| l.id == list_id)
            .ok_or(DomainError::NotFound)?;
        list.items.push(item);
        list.grand_total = grand_total(&list.items);
        self.persist();
        Ok(())
    }

    /// Drain pending writes and stop the persist queue.
    pub async fn close(self) {
        self.queue.close().await;
    }

    fn persist(&self) {
        match document::encode(&self.lists) {
            Ok(bytes) => self.queue.enqueue(bytes),
            Err(err) => log::warn!("failed to serialize billing document: {err}"),
        }
    }
}

/// UTC offset of the host clock at creation time, e.g. `+05:30`.
fn local_timezone() -> String {
    chrono::Local::now().format("%:z").to_string()
}
