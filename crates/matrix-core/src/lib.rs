//! Pure engines behind the market matrix directory.
//!
//! Nothing here holds state or performs I/O: every function maps a record
//! store plus view controls to an ordered result.

pub mod filter;
pub mod order;
pub mod sort;
pub mod view;

pub use filter::{
    CategorySection, EmptyReason, Selection, filter_store, matches_search, matches_states, select,
};
pub use order::{order_for_store, resolve_category_order};
pub use sort::{TableRow, compare_rows, flatten, sort_table, sort_value, sort_verified_first};
pub use view::{GridSection, RenderModel, ViewBody, derive_view};
