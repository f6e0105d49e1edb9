use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ValidationError;

/// Every list is priced in INR; the field is stored but not user-editable.
pub const DEFAULT_CURRENCY: &str = "INR";

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 50;

/// Monetary amounts are kept at two decimal places.
const AMOUNT_SCALE: i64 = 2;

/// Raw, unvalidated line-item input as collected by the surface layer.
#[derive(Debug, Clone)]
pub struct LineItemInput {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

/// One priced, quantified entry within a billing list.
///
/// `total` is fixed when the item is appended and never recomputed from
/// `price` and `quantity` afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub price: BigDecimal,
    pub quantity: u32,
    pub total: BigDecimal,
}

/// A named, user-created collection of line items representing one bill.
#[derive(Debug, Clone, PartialEq)]
pub struct BillingList {
    pub id: Uuid,
    pub title: String,
    pub currency: String,
    pub timezone: String,
    pub date_created: DateTime<Utc>,
    pub address: Option<String>,
    pub items: Vec<LineItem>,
    pub grand_total: BigDecimal,
}

/// Ordering choices for presenting the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first, by creation time.
    Recent,
    TitleAsc,
    TitleDesc,
}

impl LineItemInput {
    /// Validate and convert raw input into a `LineItem` with its fixed total.
    pub fn parse(&self) -> Result<LineItem, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::ItemNameEmpty);
        }

        let price = BigDecimal::from_str(self.price.trim())
            .map_err(|_| ValidationError::ItemPriceInvalid)?;
        if price < BigDecimal::zero() {
            return Err(ValidationError::ItemPriceInvalid);
        }

        let quantity: u32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| ValidationError::ItemQuantityInvalid)?;

        let total = line_total(&price, quantity);
        Ok(LineItem {
            name: name.to_string(),
            price,
            quantity,
            total,
        })
    }
}

/// Check a raw title against the shape rules and return it trimmed.
///
/// Case-insensitive uniqueness is checked by the store, which owns the
/// collection.
pub fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len < TITLE_MIN_CHARS {
        return Err(ValidationError::TitleTooShort);
    }
    if len > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || c == ' ' || c == '_' || c == '-';
    if !trimmed.chars().all(allowed) {
        return Err(ValidationError::TitleInvalidChars);
    }
    Ok(trimmed.to_string())
}

/// `price × quantity`, rounded half-up to two decimal places.
pub fn line_total(price: &BigDecimal, quantity: u32) -> BigDecimal {
    (price * BigDecimal::from(u64::from(quantity)))
        .with_scale_round(AMOUNT_SCALE, RoundingMode::HalfUp)
}

/// Sum of the stored item totals; the persisted `grand_total` formula.
pub fn grand_total(items: &[LineItem]) -> BigDecimal {
    items
        .iter()
        .fold(BigDecimal::zero(), |acc, item| acc + &item.total)
        .with_scale(AMOUNT_SCALE)
}

/// Running total recomputed from each item's price and quantity.
///
/// This is the read-path formula used for on-screen display; it ignores the
/// stored `total` fields and must agree with [`grand_total`].
pub fn live_total(list: &BillingList) -> BigDecimal {
    list.items
        .iter()
        .fold(BigDecimal::zero(), |acc, item| {
            acc + line_total(&item.price, item.quantity)
        })
        .with_scale(AMOUNT_SCALE)
}

/// Zero at the display scale, i.e. `0.00`.
pub fn zero_amount() -> BigDecimal {
    BigDecimal::zero().with_scale(AMOUNT_SCALE)
}
