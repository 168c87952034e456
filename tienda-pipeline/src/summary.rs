//! Inventory roll-up metrics for the dashboard view.

use serde::Serialize;

use crate::catalog_loader::ProductRecord;

/// Quantities strictly below this count as low stock in the dashboard.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Headline numbers shown at the top of the inventory view.
#[derive(Clone, Debug, Serialize)]
pub struct InventorySummary {
    pub total_products: usize,
    /// Sum of price x quantity over the catalog.
    pub total_value: f64,
    pub out_of_stock: usize,
    pub average_price: f64,
}

/// Compute the headline metrics over a set of catalog records.
pub fn summarize(records: &[ProductRecord]) -> InventorySummary {
    let total_products = records.len();
    let total_value = records
        .iter()
        .map(|r| r.price * r.quantity.max(0) as f64)
        .sum();
    let out_of_stock = records.iter().filter(|r| r.quantity <= 0).count();
    let average_price = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.price).sum::<f64>() / total_products as f64
    };

    InventorySummary {
        total_products,
        total_value,
        out_of_stock,
        average_price,
    }
}

/// The `n` highest-priced products, descending.
pub fn top_expensive(records: &[ProductRecord], n: usize) -> Vec<ProductRecord> {
    let mut sorted: Vec<ProductRecord> = records.to_vec();
    sorted.sort_by(|a, b| {
        b.price
            .partial_cmp(&a.price)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Products whose on-hand quantity is below the threshold, including the
/// ones already at zero.
pub fn low_stock(records: &[ProductRecord], threshold: i64) -> Vec<ProductRecord> {
    records
        .iter()
        .filter(|r| r.quantity < threshold)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str, quantity: i64, price: f64) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            reference: format!("{}-REF", name),
            code: format!("{}-COD", name),
            quantity,
            price,
        }
    }

    #[test]
    fn summary_over_mixed_catalog() {
        let records = vec![
            make_record("A", 10, 1_000.0),
            make_record("B", 0, 5_000.0),
            make_record("C", 2, 3_000.0),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total_products, 3);
        // 10 x 1000 + 0 x 5000 + 2 x 3000
        assert!((summary.total_value - 16_000.0).abs() < 0.01);
        assert_eq!(summary.out_of_stock, 1);
        assert!((summary.average_price - 3_000.0).abs() < 0.01);
    }

    #[test]
    fn summary_of_empty_catalog_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_products, 0);
        assert_eq!(summary.out_of_stock, 0);
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.average_price, 0.0);
    }

    #[test]
    fn negative_quantities_do_not_inflate_value() {
        let records = vec![make_record("A", -4, 1_000.0)];
        let summary = summarize(&records);
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.out_of_stock, 1);
    }

    #[test]
    fn top_expensive_sorts_descending_and_truncates() {
        let records = vec![
            make_record("cheap", 1, 100.0),
            make_record("mid", 1, 5_000.0),
            make_record("dear", 1, 90_000.0),
        ];
        let top = top_expensive(&records, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "dear");
        assert_eq!(top[1].name, "mid");
    }

    #[test]
    fn low_stock_includes_out_of_stock_rows() {
        let records = vec![
            make_record("empty", 0, 100.0),
            make_record("scarce", 4, 100.0),
            make_record("plenty", 40, 100.0),
        ];
        let low = low_stock(&records, LOW_STOCK_THRESHOLD);
        let names: Vec<&str> = low.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["empty", "scarce"]);
    }
}
