use proptest::prelude::*;
use shop_cart::{CartItem, Keyed, SortAlgorithm, SortDirection, SortKey};
use shop_catalog::{NewProduct, ProductCatalog, ProductId};

const DIRECTIONS: [SortDirection; 2] = [SortDirection::Ascending, SortDirection::Descending];

/// Small value pools so that generated carts contain plenty of ties,
/// including `0.0` against `-0.0`.
fn arb_draft() -> impl Strategy<Value = (NewProduct, u32)> {
    (
        prop::sample::select(vec!["Apples", "Bread", "Cheese", "Milk", "Water"]),
        prop::sample::select(vec!["Bakery", "Dairy", "Drinks", "Fruit"]),
        prop::sample::select(vec![-0.0, 0.0, 0.5, 0.8, 1.2, 1.5, 3.0]),
        0u32..5,
        1u32..10,
    )
        .prop_map(|(name, category, price, weight_step, quantity)| {
            let weight = f64::from(weight_step) * 100.0;
            (NewProduct::new(name, category, price, weight), quantity)
        })
}

fn arb_items() -> impl Strategy<Value = Vec<CartItem>> {
    prop::collection::vec(arb_draft(), 0..40).prop_map(|drafts| {
        let mut catalog = ProductCatalog::new();
        drafts
            .into_iter()
            .map(|(draft, quantity)| CartItem::new(catalog.add_product(draft), quantity))
            .collect()
    })
}

fn ids(items: &[CartItem]) -> Vec<ProductId> {
    items.iter().map(CartItem::product_id).collect()
}

fn items_with_prices(prices: &[f64]) -> Vec<CartItem> {
    let mut catalog = ProductCatalog::new();
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| {
            let draft = NewProduct::new(format!("Item {i}"), "Misc", price, 1.0);
            CartItem::new(catalog.add_product(draft), 1)
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_quick_and_merge_agree(items in arb_items()) {
        for key in SortKey::ALL {
            for direction in DIRECTIONS {
                let quick = SortAlgorithm::Quick.sort(&items, key, direction);
                let merge = SortAlgorithm::Merge.sort(&items, key, direction);
                prop_assert_eq!(
                    ids(&quick),
                    ids(&merge),
                    "key={} direction={}",
                    key,
                    direction
                );
            }
        }
    }

    #[test]
    fn prop_sorted_and_stable(items in arb_items()) {
        // Ids are assigned in input order, so tied items must keep ascending ids.
        for algorithm in SortAlgorithm::ALL {
            for key in SortKey::ALL {
                for direction in DIRECTIONS {
                    let sorted = algorithm.sort(&items, key, direction);
                    prop_assert_eq!(sorted.len(), items.len());

                    for pair in sorted.windows(2) {
                        let (a, b) = (pair[0].key_value(key), pair[1].key_value(key));
                        if direction.is_descending() {
                            prop_assert!(a >= b);
                        } else {
                            prop_assert!(a <= b);
                        }
                        if a == b {
                            prop_assert!(
                                pair[0].product_id() < pair[1].product_id(),
                                "{} {} {}: tie order broken",
                                algorithm, key, direction
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn prop_sorting_is_idempotent(items in arb_items()) {
        for algorithm in SortAlgorithm::ALL {
            for key in SortKey::ALL {
                for direction in DIRECTIONS {
                    let once = algorithm.sort(&items, key, direction);
                    let twice = algorithm.sort(&once, key, direction);
                    prop_assert_eq!(ids(&once), ids(&twice));
                }
            }
        }
    }

    #[test]
    fn prop_reverse_matches_descending_without_ties(
        prices in prop::collection::btree_set(0u32..10_000, 0..30)
    ) {
        let mut prices: Vec<f64> = prices
            .into_iter()
            .map(|cents| f64::from(cents) / 100.0)
            .collect();
        // Shuffle deterministically so the input is not already ordered.
        prices.sort_by_key(|p| {
            ((p * 100.0) as u64).wrapping_mul(2_654_435_761) % 10_007
        });
        let items = items_with_prices(&prices);

        for algorithm in SortAlgorithm::ALL {
            let mut ascending = algorithm.sort(&items, SortKey::Price, SortDirection::Ascending);
            ascending.reverse();
            let descending = algorithm.sort(&items, SortKey::Price, SortDirection::Descending);
            prop_assert_eq!(ids(&ascending), ids(&descending));
        }
    }

    #[test]
    fn prop_catalog_ids_are_dense(count in 0usize..60) {
        let mut catalog = ProductCatalog::new();
        let ids: Vec<ProductId> = (0..count)
            .map(|i| {
                let draft = NewProduct::new(format!("Item {i}"), "Misc", 1.0, 1.0);
                catalog.add_product(draft).id()
            })
            .collect();

        prop_assert_eq!(ids, (1..=count as ProductId).collect::<Vec<_>>());
        prop_assert_eq!(catalog.next_id(), count as ProductId + 1);
    }
}

#[test]
fn reverse_differs_from_descending_with_ties() {
    // Items 2 and 3 share a price.
    let items = items_with_prices(&[1.2, 0.5, 0.5, 3.0]);

    for algorithm in SortAlgorithm::ALL {
        let mut reversed = algorithm.sort(&items, SortKey::Price, SortDirection::Ascending);
        reversed.reverse();
        let descending = algorithm.sort(&items, SortKey::Price, SortDirection::Descending);

        assert_eq!(ids(&reversed), vec![4, 1, 3, 2]);
        assert_eq!(ids(&descending), vec![4, 1, 2, 3]);
    }
}

#[test]
fn already_sorted_input_is_unchanged() {
    let items = items_with_prices(&[0.5, 0.5, 0.8, 1.2, 1.5, 3.0]);

    for algorithm in SortAlgorithm::ALL {
        let sorted = algorithm.sort(&items, SortKey::Price, SortDirection::Ascending);
        assert_eq!(ids(&sorted), ids(&items));
    }
}
