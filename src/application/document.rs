//! Serialized form of the billing collection.
//!
//! The whole collection is stored as one JSON array under a single key. Field
//! names are camelCase, matching the document layout the app has always
//! written; decimals are encoded as strings to avoid floating-point issues.
//! The format carries no schema version field.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::billing::{zero_amount, BillingList, LineItem};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListRecord {
    pub id: Uuid,
    pub title: String,
    pub currency: String,
    pub timezone: String,
    pub date_created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub items: Vec<ItemRecord>,
    // Absent in documents written before the first item was added.
    #[serde(default)]
    pub grand_total: Option<BigDecimal>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ItemRecord {
    pub name: String,
    pub price: BigDecimal,
    pub quantity: u32,
    pub total: BigDecimal,
}

pub(crate) fn encode(lists: &[BillingList]) -> Result<Vec<u8>, serde_json::Error> {
    let records: Vec<ListRecord> = lists.iter().map(ListRecord::from).collect();
    serde_json::to_vec(&records)
}

pub(crate) fn decode(bytes: &[u8]) -> Result<Vec<BillingList>, serde_json::Error> {
    let records: Vec<ListRecord> = serde_json::from_slice(bytes)?;
    Ok(records.into_iter().map(BillingList::from).collect())
}

impl From<&BillingList> for ListRecord {
    fn from(list: &BillingList) -> Self {
        Self {
            id: list.id,
            title: list.title.clone(),
            currency: list.currency.clone(),
            timezone: list.timezone.clone(),
            date_created: list.date_created,
            address: list.address.clone(),
            items: list.items.iter().map(ItemRecord::from).collect(),
            grand_total: Some(list.grand_total.clone()),
        }
    }
}

impl From<ListRecord> for BillingList {
    fn from(record: ListRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            currency: record.currency,
            timezone: record.timezone,
            date_created: record.date_created,
            address: record.address,
            items: record.items.into_iter().map(LineItem::from).collect(),
            grand_total: record.grand_total.unwrap_or_else(zero_amount),
        }
    }
}

impl From<&LineItem> for ItemRecord {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.clone(),
            quantity: item.quantity,
            total: item.total.clone(),
        }
    }
}

impl From<ItemRecord> for LineItem {
    fn from(record: ItemRecord) -> Self {
        Self {
            name: record.name,
            price: record.price,
            quantity: record.quantity,
            total: record.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::{LineItemInput, DEFAULT_CURRENCY};
    use serde_json::Value;

    fn sample_list() -> BillingList {
        let item = LineItemInput {
            name: "Milk".to_string(),
            price: "2.50".to_string(),
            quantity: "2".to_string(),
        }
        .parse()
        .unwrap();
        BillingList {
            id: Uuid::new_v4(),
            title: "Groceries".to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            timezone: "+05:30".to_string(),
            date_created: Utc::now(),
            address: Some("12 Main Road".to_string()),
            items: vec![item],
            grand_total: crate::domain::billing::grand_total(&[]),
        }
    }

    #[test]
    fn encode_then_decode_reproduces_the_collection() {
        let mut list = sample_list();
        list.grand_total = crate::domain::billing::grand_total(&list.items);
        let bytes = encode(std::slice::from_ref(&list)).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, vec![list]);
    }

    #[test]
    fn document_uses_camel_case_keys_and_string_decimals() {
        let list = sample_list();
        let bytes = encode(std::slice::from_ref(&list)).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        let record = &value[0];
        assert!(record.get("dateCreated").is_some());
        assert!(record.get("grandTotal").is_some());
        assert_eq!(record["items"][0]["total"], Value::from("5.00"));
        assert_eq!(record["items"][0]["price"], Value::from("2.50"));
    }

    #[test]
    fn missing_grand_total_reads_as_zero() {
        let json = format!(
            r#"[{{
                "id": "{}",
                "title": "Groceries",
                "currency": "INR",
                "timezone": "+05:30",
                "dateCreated": "2024-01-01T00:00:00Z",
                "items": []
            }}]"#,
            Uuid::new_v4()
        );
        let decoded = decode(json.as_bytes()).unwrap();
        assert_eq!(decoded[0].grand_total.to_string(), "0.00");
        assert_eq!(decoded[0].address, None);
    }
}
