use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use shopdesk_core::{DomainError, DomainResult, Entity, Money, ValueObject};
use shopdesk_products::{Product, ProductId};

shopdesk_core::sequential_id!(SaleId, "SaleId");

/// Number of units on a line item. Always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl ValueObject for Quantity {}

impl Quantity {
    pub fn new(units: i64) -> DomainResult<Self> {
        if units <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        u32::try_from(units)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("quantity {units} is too large")))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One product/quantity pair on a sale.
///
/// The product id is a lookup key only: name and unit price are captured when
/// the line is added, so removing or re-pricing the product later does not
/// change a sale that was already recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: Quantity,
}

impl LineItem {
    pub fn subtotal(&self) -> Money {
        self.unit_price.times(self.quantity.get())
    }
}

impl core::fmt::Display for LineItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:<20} {:>10} x {:>5} = {:>10}",
            self.product_name,
            self.unit_price,
            self.quantity,
            self.subtotal()
        )
    }
}

fn render_lines(out: &mut String, lines: &[LineItem], total: Money) {
    for line in lines {
        let _ = writeln!(out, "  {line}");
    }
    let _ = write!(out, "TOTAL: {total}");
}

/// A sale being assembled at the counter.
///
/// Not visible anywhere until it is committed to the sale repository, at
/// which point it becomes a [`Sale`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleDraft {
    opened_at: DateTime<Utc>,
    lines: Vec<LineItem>,
    total: Money,
}

impl SaleDraft {
    pub fn new() -> Self {
        Self::open(Utc::now())
    }

    /// Start an empty draft stamped with `opened_at`.
    pub fn open(opened_at: DateTime<Utc>) -> Self {
        Self {
            opened_at,
            lines: Vec::new(),
            total: Money::ZERO,
        }
    }

    /// Append a line and grow the running total by its subtotal.
    pub fn add_item(&mut self, product: &Product, quantity: Quantity) {
        let line = LineItem {
            product_id: product.id(),
            product_name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
        };
        self.total = self.total + line.subtotal();
        self.lines.push(line);
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Receipt body: one row per line, then the total.
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        render_lines(&mut out, &self.lines, self.total);
        out
    }
}

impl Default for SaleDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate root: a committed sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    id: SaleId,
    recorded_at: DateTime<Utc>,
    lines: Vec<LineItem>,
    total: Money,
}

impl Sale {
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Header with id and timestamp, then the receipt body.
    pub fn render_summary(&self) -> String {
        let mut out = format!(
            "Sale #{}  {}\n",
            self.id,
            self.recorded_at.format("%Y-%m-%d %H:%M:%S")
        );
        render_lines(&mut out, &self.lines, self.total);
        out
    }
}

impl Entity for Sale {
    type Id = SaleId;
    type Draft = SaleDraft;
    const KIND: &'static str = "sale";

    fn id(&self) -> SaleId {
        self.id
    }

    fn from_draft(id: SaleId, draft: SaleDraft) -> Self {
        Self {
            id,
            recorded_at: draft.opened_at,
            lines: draft.lines,
            total: draft.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shopdesk_core::Repository;
    use shopdesk_products::NewProduct;

    fn catalog() -> Repository<Product> {
        let mut products = Repository::new();
        products.add(NewProduct::new("Widget", Money::from_cents(1000)).unwrap());
        products.add(NewProduct::new("Gadget", Money::from_cents(250)).unwrap());
        products
    }

    fn qty(n: i64) -> Quantity {
        Quantity::new(n).unwrap()
    }

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn quantity_must_be_positive() {
        assert!(Quantity::new(0).is_err());
        assert!(Quantity::new(-3).is_err());
        assert!(Quantity::new(i64::from(u32::MAX) + 1).is_err());
        assert_eq!(qty(7).get(), 7);
    }

    #[test]
    fn empty_draft_has_zero_total() {
        let draft = SaleDraft::open(test_time());
        assert!(draft.is_empty());
        assert_eq!(draft.total(), Money::ZERO);
        assert_eq!(draft.render_summary(), "TOTAL: 0.00");
    }

    #[test]
    fn add_item_grows_total_by_subtotal() {
        let products = catalog();
        let widget = products.find(ProductId::new(1)).unwrap();
        let gadget = products.find(ProductId::new(2)).unwrap();

        let mut draft = SaleDraft::open(test_time());
        draft.add_item(widget, qty(3));
        assert_eq!(draft.total(), Money::from_cents(3000));
        draft.add_item(gadget, qty(2));
        assert_eq!(draft.total(), Money::from_cents(3500));

        let names: Vec<_> = draft.lines().iter().map(|l| l.product_name.as_str()).collect();
        assert_eq!(names, ["Widget", "Gadget"]);
        assert_eq!(draft.lines()[0].subtotal(), Money::from_cents(3000));
    }

    #[test]
    fn summary_lists_each_line_then_total() {
        let products = catalog();
        let mut draft = SaleDraft::open(test_time());
        draft.add_item(products.find(ProductId::new(1)).unwrap(), qty(3));

        let summary = draft.render_summary();
        let rows: Vec<_> = summary.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("Widget"));
        assert!(rows[0].contains("10.00 x     3 =      30.00"));
        assert_eq!(rows[1], "TOTAL: 30.00");
    }

    #[test]
    fn committed_sale_keeps_lines_total_and_timestamp() {
        let products = catalog();
        let mut draft = SaleDraft::open(test_time());
        draft.add_item(products.find(ProductId::new(1)).unwrap(), qty(3));

        let mut sales = Repository::<Sale>::new();
        let id = sales.add(draft);
        assert_eq!(id, SaleId::new(1));

        let sale = sales.find(id).unwrap();
        assert_eq!(sale.total(), Money::from_cents(3000));
        assert_eq!(sale.lines().len(), 1);
        assert_eq!(sale.recorded_at(), test_time());
        assert!(sale.render_summary().starts_with("Sale #1  2024-03-01 09:30:00\n"));
        assert!(sale.render_summary().ends_with("TOTAL: 30.00"));
    }

    #[test]
    fn removing_product_does_not_change_recorded_sale() {
        let mut products = catalog();
        let mut draft = SaleDraft::open(test_time());
        draft.add_item(products.find(ProductId::new(2)).unwrap(), qty(4));

        let mut sales = Repository::<Sale>::new();
        let id = sales.add(draft);
        products.remove(ProductId::new(2)).unwrap();

        let sale = sales.find(id).unwrap();
        assert_eq!(sale.lines()[0].product_name, "Gadget");
        assert_eq!(sale.total(), Money::from_cents(1000));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: each add grows the total by exactly price * quantity.
            #[test]
            fn total_tracks_sum_of_subtotals(
                items in proptest::collection::vec((0u64..1_000_000, 1i64..1_000), 0..20)
            ) {
                let mut products = Repository::<Product>::new();
                let mut draft = SaleDraft::open(test_time());

                for (cents, units) in items {
                    let id = products.add(NewProduct::new("Item", Money::from_cents(cents)).unwrap());
                    let product = products.find(id).unwrap();
                    let before = draft.total();

                    draft.add_item(product, qty(units));

                    let expected = Money::from_cents(cents * units as u64);
                    prop_assert_eq!(draft.total(), before + expected);
                    let last = draft.lines().last().unwrap();
                    prop_assert_eq!(last.subtotal(), expected);
                    let expected_text = expected.to_string();
                    prop_assert!(draft.render_summary().contains(&expected_text));
                }

                let recomputed: Money = draft.lines().iter().map(LineItem::subtotal).sum();
                prop_assert_eq!(draft.total(), recomputed);
            }
        }
    }
}
