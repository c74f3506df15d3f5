pub mod models;
pub mod cart;
pub mod sorting;

pub use models::{CartItem, CartLine, CartListing};
pub use cart::{CartError, CartResult, share_catalog, SharedCatalog, ShoppingCart};
pub use sorting::{
    merge_sort, quick_sort, KeyValue, Keyed, SortAlgorithm, SortDirection, SortError, SortKey,
};
