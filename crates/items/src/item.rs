use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity, ItemId};

use crate::code::ItemCode;
use crate::price::Price;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 255;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;
pub const CATEGORY_MAX_CHARS: usize = 100;

/// A sellable catalog item.
///
/// Every field is private. The only ways in are [`CatalogItem::new`] and
/// [`CatalogItem::rehydrate`], and the only ways to change state are the
/// named mutations, each of which re-validates what it touches before
/// writing anything.
///
/// Equality and hashing use `id` and `code` only.
#[derive(Debug, Clone)]
pub struct CatalogItem {
    id: Option<ItemId>,
    name: String,
    code: ItemCode,
    description: Option<String>,
    price: Price,
    category: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CatalogItem {
    /// Build a new, active, not-yet-persisted item.
    ///
    /// Rules are checked in order (name, code, price, description, category)
    /// and the first violation is returned.
    pub fn new(
        name: &str,
        code: &str,
        description: Option<&str>,
        price: Decimal,
        category: Option<&str>,
    ) -> DomainResult<Self> {
        let name = validate_name(name)?;
        let code = ItemCode::parse(code)?;
        let price = Price::new(price)?;
        let description = normalize_optional("description", description, DESCRIPTION_MAX_CHARS)?;
        let category = normalize_optional("category", category, CATEGORY_MAX_CHARS)?;

        let now = Utc::now();
        Ok(Self {
            id: None,
            name,
            code,
            description,
            price,
            category,
            active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore an item from a persisted snapshot, re-running every field rule.
    pub fn rehydrate(record: ItemRecord) -> DomainResult<Self> {
        let name = validate_name(&record.name)?;
        let code = ItemCode::parse(&record.code)?;
        let price = Price::new(record.price)?;
        let description =
            normalize_optional("description", record.description.as_deref(), DESCRIPTION_MAX_CHARS)?;
        let category = normalize_optional("category", record.category.as_deref(), CATEGORY_MAX_CHARS)?;

        if record.updated_at < record.created_at {
            return Err(DomainError::invariant(
                "updated_at must not precede created_at",
            ));
        }

        Ok(Self {
            id: record.id,
            name,
            code,
            description,
            price,
            category,
            active: record.active,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    pub fn id(&self) -> Option<ItemId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &ItemCode {
        &self.code
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Decimal {
        self.price.amount()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Price for display, e.g. `R$ 19,99`.
    pub fn formatted_price(&self) -> String {
        self.price.formatted()
    }

    /// `CATEGORY-CODE` when a category is set, otherwise just the code.
    pub fn category_qualified_code(&self) -> String {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => {
                format!("{}-{}", category.to_uppercase(), self.code)
            }
            _ => self.code.to_string(),
        }
    }

    /// Record the store-assigned identifier. Ids are immutable once set.
    pub fn assign_id(&mut self, id: ItemId) -> DomainResult<()> {
        match self.id {
            None => {
                self.id = Some(id);
                Ok(())
            }
            Some(existing) if existing == id => Ok(()),
            Some(existing) => Err(DomainError::invariant(format!(
                "item {existing} cannot be re-identified as {id}"
            ))),
        }
    }

    pub fn update_price(&mut self, new_price: Decimal) -> DomainResult<()> {
        let price = Price::new(new_price)?;
        self.price = price;
        self.touch();
        Ok(())
    }

    /// Replace name, description, price and category. The code never changes.
    pub fn update_fields(
        &mut self,
        name: &str,
        description: Option<&str>,
        price: Decimal,
        category: Option<&str>,
    ) -> DomainResult<()> {
        let name = validate_name(name)?;
        let price = Price::new(price)?;
        let description = normalize_optional("description", description, DESCRIPTION_MAX_CHARS)?;
        let category = normalize_optional("category", category, CATEGORY_MAX_CHARS)?;

        self.name = name;
        self.description = description;
        self.price = price;
        self.category = category;
        self.touch();
        Ok(())
    }

    pub fn activate(&mut self) {
        self.active = true;
        self.touch();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.touch();
    }

    // Clock may step backwards; updated_at must not.
    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

impl Entity for CatalogItem {
    type Key<'a>
        = (Option<ItemId>, &'a str)
    where
        Self: 'a;

    fn identity(&self) -> Self::Key<'_> {
        (self.id, self.code.as_str())
    }
}

impl PartialEq for CatalogItem {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for CatalogItem {}

impl core::hash::Hash for CatalogItem {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

/// Plain snapshot of an item, used to move items across storage and
/// transport boundaries.
///
/// A record carries no guarantees; turn it back into an item with
/// [`CatalogItem::rehydrate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: Option<ItemId>,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&CatalogItem> for ItemRecord {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            code: item.code.to_string(),
            description: item.description.clone(),
            price: item.price.amount(),
            category: item.category.clone(),
            active: item.active,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

fn validate_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("name", "name is required"));
    }
    let len = trimmed.chars().count();
    if len < NAME_MIN_CHARS {
        return Err(DomainError::validation(
            "name",
            format!("name must have at least {NAME_MIN_CHARS} characters"),
        ));
    }
    if len > NAME_MAX_CHARS {
        return Err(DomainError::validation(
            "name",
            format!("name must have at most {NAME_MAX_CHARS} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; blank input becomes `None`.
fn normalize_optional(
    field: &'static str,
    value: Option<&str>,
    max_chars: usize,
) -> DomainResult<Option<String>> {
    let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if trimmed.chars().count() > max_chars {
        return Err(DomainError::validation(
            field,
            format!("{field} must have at most {max_chars} characters"),
        ));
    }
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn sample_item() -> CatalogItem {
        CatalogItem::new(
            "Wireless Mouse",
            "prod-001",
            Some("Ergonomic mouse"),
            dec("49.90"),
            Some("peripherals"),
        )
        .unwrap()
    }

    #[test]
    fn new_item_is_active_and_normalized() {
        let item = CatalogItem::new(
            "  Wireless Mouse  ",
            "  prod-001 ",
            Some("  Ergonomic mouse "),
            dec("49.90"),
            Some(" peripherals "),
        )
        .unwrap();

        assert_eq!(item.id(), None);
        assert_eq!(item.name(), "Wireless Mouse");
        assert_eq!(item.code().as_str(), "PROD-001");
        assert_eq!(item.description(), Some("Ergonomic mouse"));
        assert_eq!(item.category(), Some("peripherals"));
        assert_eq!(item.price(), dec("49.90"));
        assert!(item.is_active());
        assert_eq!(item.created_at(), item.updated_at());
    }

    #[test]
    fn name_must_have_two_characters() {
        let err = CatalogItem::new("A", "ABC-1", None, dec("1.00"), None).unwrap_err();
        assert_eq!(err.field(), Some("name"));

        assert!(CatalogItem::new("AB", "ABC-1", None, dec("1.00"), None).is_ok());
    }

    #[test]
    fn name_longer_than_limit_is_rejected() {
        let long = "n".repeat(NAME_MAX_CHARS + 1);
        let err = CatalogItem::new(&long, "ABC-1", None, dec("1.00"), None).unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn price_must_not_be_negative() {
        let err = CatalogItem::new("Mouse", "ABC-1", None, dec("-1.00"), None).unwrap_err();
        assert_eq!(err.field(), Some("price"));

        assert!(CatalogItem::new("Mouse", "ABC-1", None, dec("0.00"), None).is_ok());
    }

    #[test]
    fn first_violated_rule_is_reported() {
        let err = CatalogItem::new("A", "x", None, dec("-1"), None).unwrap_err();
        assert_eq!(err.field(), Some("name"));

        let err = CatalogItem::new("Mouse", "x", None, dec("-1"), None).unwrap_err();
        assert_eq!(err.field(), Some("code"));

        let err = CatalogItem::new("Mouse", "ABC", None, dec("-1"), None).unwrap_err();
        assert_eq!(err.field(), Some("price"));
    }

    #[test]
    fn optional_fields_are_length_checked() {
        let long_description = "d".repeat(DESCRIPTION_MAX_CHARS + 1);
        let err = CatalogItem::new("Mouse", "ABC", Some(&long_description), dec("1"), None)
            .unwrap_err();
        assert_eq!(err.field(), Some("description"));

        let long_category = "c".repeat(CATEGORY_MAX_CHARS + 1);
        let err =
            CatalogItem::new("Mouse", "ABC", None, dec("1"), Some(&long_category)).unwrap_err();
        assert_eq!(err.field(), Some("category"));
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let item = CatalogItem::new("Mouse", "ABC", Some("   "), dec("1"), Some("")).unwrap();
        assert_eq!(item.description(), None);
        assert_eq!(item.category(), None);
    }

    #[test]
    fn update_price_refreshes_timestamp() {
        let mut item = sample_item();
        let before = item.updated_at();

        item.update_price(dec("39.90")).unwrap();

        assert_eq!(item.price(), dec("39.90"));
        assert!(item.updated_at() >= before);
        assert!(item.updated_at() >= item.created_at());
    }

    #[test]
    fn invalid_price_update_leaves_item_unchanged() {
        let mut item = sample_item();
        let before = item.updated_at();

        let err = item.update_price(dec("1.234")).unwrap_err();

        assert_eq!(err.field(), Some("price"));
        assert_eq!(item.price(), dec("49.90"));
        assert_eq!(item.updated_at(), before);
    }

    #[test]
    fn update_fields_replaces_everything_but_code() {
        let mut item = sample_item();

        item.update_fields(" Gaming Mouse ", None, dec("99.00"), Some("gaming"))
            .unwrap();

        assert_eq!(item.name(), "Gaming Mouse");
        assert_eq!(item.description(), None);
        assert_eq!(item.price(), dec("99.00"));
        assert_eq!(item.category(), Some("gaming"));
        assert_eq!(item.code().as_str(), "PROD-001");
    }

    #[test]
    fn failed_update_fields_is_not_partially_applied() {
        let mut item = sample_item();

        let err = item
            .update_fields("Gaming Mouse", None, dec("-5"), Some("gaming"))
            .unwrap_err();

        assert_eq!(err.field(), Some("price"));
        assert_eq!(item.name(), "Wireless Mouse");
        assert_eq!(item.category(), Some("peripherals"));
    }

    #[test]
    fn activation_is_idempotent() {
        let mut item = sample_item();

        item.deactivate();
        assert!(!item.is_active());
        item.deactivate();
        assert!(!item.is_active());

        let before = item.updated_at();
        item.activate();
        item.activate();
        assert!(item.is_active());
        assert!(item.updated_at() >= before);
    }

    #[test]
    fn derived_views() {
        let item = sample_item();
        assert_eq!(item.formatted_price(), "R$ 49,90");
        assert_eq!(item.category_qualified_code(), "PERIPHERALS-PROD-001");

        let plain = CatalogItem::new("Mouse", "ABC", None, dec("1"), None).unwrap();
        assert_eq!(plain.category_qualified_code(), "ABC");
    }

    #[test]
    fn id_is_assigned_once() {
        let mut item = sample_item();
        item.assign_id(ItemId::new(1)).unwrap();
        item.assign_id(ItemId::new(1)).unwrap();

        let err = item.assign_id(ItemId::new(2)).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(item.id(), Some(ItemId::new(1)));
    }

    #[test]
    fn equality_ignores_mutable_fields() {
        let mut a = sample_item();
        a.assign_id(ItemId::new(1)).unwrap();
        let mut b = a.clone();
        b.update_price(dec("1.00")).unwrap();
        b.deactivate();
        assert_eq!(a, b);

        let mut c = sample_item();
        c.assign_id(ItemId::new(2)).unwrap();
        assert_ne!(a, c);

        let set: HashSet<CatalogItem> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn record_round_trip_preserves_state() {
        let mut item = sample_item();
        item.assign_id(ItemId::new(3)).unwrap();
        item.deactivate();

        let record = ItemRecord::from(&item);
        let restored = CatalogItem::rehydrate(record.clone()).unwrap();

        assert_eq!(ItemRecord::from(&restored), record);
    }

    #[test]
    fn rehydrate_rejects_invalid_records() {
        let mut record = ItemRecord::from(&sample_item());
        record.code = "bad code".to_string();
        assert_eq!(
            CatalogItem::rehydrate(record).unwrap_err().field(),
            Some("code")
        );

        let mut record = ItemRecord::from(&sample_item());
        record.updated_at = record.created_at - chrono::Duration::seconds(1);
        assert!(matches!(
            CatalogItem::rehydrate(record).unwrap_err(),
            DomainError::InvariantViolation(_)
        ));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: valid input always yields a normalized, active item.
            #[test]
            fn creation_normalizes_input(
                name in "[A-Za-z][A-Za-z0-9 ]{1,60}[A-Za-z0-9]",
                code in "[a-zA-Z0-9_-]{3,50}",
                pad in " {0,3}",
                cents in 0i64..10_000_000,
            ) {
                let price = Decimal::new(cents, 2);
                let raw_code = format!("{pad}{code}{pad}");
                let item = CatalogItem::new(&name, &raw_code, None, price, None).unwrap();

                prop_assert!(item.is_active());
                prop_assert_eq!(item.created_at(), item.updated_at());
                prop_assert_eq!(item.code().as_str(), code.to_uppercase());
                prop_assert_eq!(item.name(), name.trim());
                prop_assert_eq!(item.price(), price);
            }

            /// Property: updated_at never decreases, whatever the mutation outcome.
            #[test]
            fn updated_at_is_monotonic(ops in proptest::collection::vec(0u8..4, 1..20), cents in -500i64..500) {
                let mut item = CatalogItem::new("Item", "ABC", None, Decimal::ONE, None).unwrap();
                let mut previous = item.updated_at();

                for op in ops {
                    match op {
                        0 => { let _ = item.update_price(Decimal::new(cents, 2)); }
                        1 => { let _ = item.update_fields("Renamed", None, Decimal::new(cents, 2), None); }
                        2 => item.activate(),
                        _ => item.deactivate(),
                    }
                    prop_assert!(item.updated_at() >= previous);
                    prop_assert!(item.updated_at() >= item.created_at());
                    previous = item.updated_at();
                }
            }
        }
    }
}
