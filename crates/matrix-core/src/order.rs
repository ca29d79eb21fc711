//! Category display order.

use std::collections::BTreeSet;

use matrix_model::{CategoryOrder, RecordStore};

/// Merge the preferred order with the categories actually present.
///
/// Preferred categories come first, in preferred order, but only if present;
/// present categories missing from the preferred list follow in
/// lexicographic order. Each present category appears exactly once.
pub fn resolve_category_order<'a, I>(present: I, preferred: &[String]) -> CategoryOrder
where
    I: IntoIterator<Item = &'a str>,
{
    let present: BTreeSet<&str> = present.into_iter().collect();
    let mut placed: BTreeSet<&str> = BTreeSet::new();
    let mut order = Vec::with_capacity(present.len());

    for category in preferred {
        let category = category.as_str();
        if present.contains(category) && placed.insert(category) {
            order.push(category.to_string());
        }
    }
    for category in &present {
        if !placed.contains(category) {
            order.push((*category).to_string());
        }
    }
    CategoryOrder::new(order)
}

/// Category order for every category key of `store`.
pub fn order_for_store(store: &RecordStore, preferred: &[String]) -> CategoryOrder {
    resolve_category_order(store.categories(), preferred)
}
