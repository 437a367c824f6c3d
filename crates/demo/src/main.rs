//! Headless walkthrough of the dashboard data core.
//!
//! Seeds a registry with small sample datasets, hydrates the stores over the
//! file-backed boundary (memory-only when no data directory exists), drives a
//! table session through a search/page interaction, and edits the cart —
//! the same call sequence a dashboard frontend would make.

use std::sync::Arc;

use opsdeck_core::{Scalar, format_currency};
use opsdeck_datasets::{DatasetDescriptor, DatasetRegistry, Row, RowStore};
use opsdeck_infra::{FileKv, InMemoryKv, KeyValueStore};
use opsdeck_procurement::{CartCandidate, ProcurementCart, StockStatus};
use opsdeck_tables::TableSession;

fn main() -> anyhow::Result<()> {
    opsdeck_observability::init();

    let kv: Arc<dyn KeyValueStore> = match FileKv::open_default() {
        Some(kv) => Arc::new(kv),
        None => {
            tracing::warn!("running memory-only; nothing will persist");
            Arc::new(InMemoryKv::new())
        }
    };

    let registry = sample_registry()?;
    let mut store = RowStore::hydrate(registry, kv.clone());
    let changes = store.subscribe();

    // Browse the catalog the way the data-hub table does.
    let mut session = TableSession::new("catalog", 50);
    let page = session.page_view(&store);
    tracing::info!(
        total_rows = page.paging.total_filtered,
        total_pages = page.paging.total_pages,
        "catalog loaded"
    );

    session.set_search("bearing");
    session.set_page(3);
    let page = session.page_view(&store);
    tracing::info!(
        matches = page.paging.total_filtered,
        page = page.paging.current_page,
        from = page.paging.range_start,
        to = page.paging.range_end,
        "filtered view"
    );

    // Edit through a displayed row; the store receives the source index.
    if let Some(display) = page.rows.first() {
        let mut patch = Row::new();
        patch.insert("stock".to_string(), Scalar::Number(18.0));
        session.edit_row(&mut store, display, patch);
    }
    while let Ok(change) = changes.try_recv() {
        tracing::info!(dataset = change.dataset_id.as_str(), "rows changed");
    }

    // Reorder shortlist.
    let mut cart = ProcurementCart::hydrate(kv);
    cart.add(CartCandidate {
        id: "SKU-4401".to_string(),
        name: "Deep-groove bearing 6204".to_string(),
        category: "Bearings".to_string(),
        manufacturer: "Nordbear".to_string(),
        current_stock: 6,
        suggested_order: 40,
        status: StockStatus::High,
        price: 3.85,
    });
    cart.add(CartCandidate {
        id: "SKU-1173".to_string(),
        name: "Hex bolt M8x40".to_string(),
        category: "Fasteners".to_string(),
        manufacturer: "Acme".to_string(),
        current_stock: 410,
        suggested_order: 0,
        status: StockStatus::Overstock,
        price: 0.12,
    });
    cart.update_order_qty("SKU-1173", 250.0);

    tracing::info!(
        items = cart.len(),
        quantity = cart.total_quantity(),
        amount = %format_currency(&Scalar::Number(cart.total_amount())),
        "cart totals"
    );

    Ok(())
}

fn sample_registry() -> anyhow::Result<DatasetRegistry> {
    let catalog = DatasetDescriptor::new(
        "catalog",
        "Parts catalog",
        "Stocked parts with current levels",
        vec![
            "sku".to_string(),
            "name".to_string(),
            "category".to_string(),
            "stock".to_string(),
            "unit_price".to_string(),
        ],
        vec!["sku".to_string(), "name".to_string(), "category".to_string()],
        vec![
            catalog_row("SKU-4401", "Deep-groove bearing 6204", "Bearings", 6, 3.85),
            catalog_row("SKU-1173", "Hex bolt M8x40", "Fasteners", 410, 0.12),
            catalog_row("SKU-2088", "Shaft seal 25x40", "Seals", 57, 1.40),
        ],
    )?;

    let sales = DatasetDescriptor::new(
        "sales",
        "Monthly sales",
        "Rolled-up sales per month",
        vec!["month".to_string(), "amount".to_string()],
        vec!["month".to_string()],
        vec![
            sales_row("Jan", 18_250.0),
            sales_row("Feb", 16_900.0),
            sales_row("Mar", 21_430.0),
        ],
    )?;

    Ok(DatasetRegistry::new(vec![catalog, sales])?)
}

fn catalog_row(sku: &str, name: &str, category: &str, stock: i64, unit_price: f64) -> Row {
    let mut row = Row::new();
    row.insert("sku".to_string(), sku.into());
    row.insert("name".to_string(), name.into());
    row.insert("category".to_string(), category.into());
    row.insert("stock".to_string(), stock.into());
    row.insert("unit_price".to_string(), unit_price.into());
    row
}

fn sales_row(month: &str, amount: f64) -> Row {
    let mut row = Row::new();
    row.insert("month".to_string(), month.into());
    row.insert("amount".to_string(), amount.into());
    row
}
