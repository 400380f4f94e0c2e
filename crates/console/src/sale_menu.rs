use std::io::{BufRead, Write};

use shopdesk_core::{DomainError, Repository};
use shopdesk_products::{Product, ProductCatalog};
use shopdesk_sales::{Quantity, Sale, SaleDraft, SaleId};

use crate::console::Console;
use crate::error::ConsoleResult;
use crate::menu::{read_id, show_listing, EntityMenu};

pub const ADD_ANOTHER_PROMPT: &str = "\nAdd another product to this sale (1-YES/0-NO)? ";

/// Sales desk: record sales against the catalog, list and remove them.
///
/// Borrows the product repository read-only for name lookups.
pub struct SaleMenu<'a> {
    sales: &'a mut Repository<Sale>,
    products: &'a Repository<Product>,
}

impl<'a> SaleMenu<'a> {
    pub fn new(sales: &'a mut Repository<Sale>, products: &'a Repository<Product>) -> Self {
        Self { sales, products }
    }

    /// Ask for a product name and a quantity until both are acceptable.
    fn read_line_item<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> ConsoleResult<(&'a Product, Quantity)> {
        let products = self.products;
        loop {
            let name = console.read_text("\nProduct name: ")?;
            let quantity = console.read_i64("Quantity: ")?.and_then(Quantity::new);
            let product = name.and_then(|name| {
                products
                    .find_by_name(&name)
                    .map_err(|_| DomainError::validation(format!("product '{name}' not found")))
            });

            match (product, quantity) {
                (Ok(product), Ok(quantity)) => return Ok((product, quantity)),
                (Err(err), _) | (_, Err(err)) => {
                    tracing::debug!(error = %err, "rejected line item");
                    console.report(&err)?;
                }
            }
        }
    }
}

impl EntityMenu for SaleMenu<'_> {
    fn title(&self) -> &str {
        "SALES MENU"
    }

    fn list<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        let summaries = self
            .sales
            .list()
            .map(|sale| format!("{}\n", sale.render_summary()));
        show_listing(console, "SALES", summaries)
    }

    /// Build a sale line by line, print the receipt, then commit it.
    fn add<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        let mut draft = SaleDraft::new();

        loop {
            let (product, quantity) = self.read_line_item(console)?;
            draft.add_item(product, quantity);

            if !matches!(console.read_text(ADD_ANOTHER_PROMPT)?.as_deref(), Ok("1")) {
                break;
            }
        }

        console.say(format_args!("\n\nRECEIPT\n{}", draft.render_summary()))?;

        let total = draft.total();
        let lines = draft.lines().len();
        let id = self.sales.add(draft);
        tracing::info!(sale_id = %id, %total, lines, "sale recorded");
        console.say(format_args!("Sale {id} recorded."))
    }

    fn remove<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        let id: SaleId = read_id(console, "\nSale id: ")?;
        match self.sales.remove(id) {
            Ok(_) => {
                tracing::info!(sale_id = %id, "sale removed");
                console.say(format_args!("Sale {id} removed."))
            }
            Err(DomainError::NotFound) => console.say(format_args!("No sale with id {id}.")),
            Err(err) => console.report(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuFlow;
    use shopdesk_core::Money;
    use shopdesk_products::NewProduct;
    use std::io::Cursor;

    fn catalog() -> Repository<Product> {
        let mut products = Repository::new();
        products.add(NewProduct::new("Widget", Money::from_cents(1000)).unwrap());
        products.add(NewProduct::new("Gadget", Money::from_cents(250)).unwrap());
        products
    }

    fn run(sales: &mut Repository<Sale>, products: &Repository<Product>, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        MenuFlow::new(SaleMenu::new(sales, products))
            .run(&mut console)
            .unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn add_builds_multi_line_sale_and_commits_it() {
        let products = catalog();
        let mut sales = Repository::new();
        let out = run(&mut sales, &products, "2\nWidget\n3\n1\nGadget\n2\n0\n0\n");

        assert_eq!(out.matches(ADD_ANOTHER_PROMPT).count(), 2);
        assert!(out.contains("RECEIPT"));
        assert!(out.contains("TOTAL: 35.00"));
        assert!(out.contains("Sale 1 recorded."));

        let sale = sales.find(SaleId::new(1)).unwrap();
        assert_eq!(sale.lines().len(), 2);
        assert_eq!(sale.total(), Money::from_cents(3500));
    }

    #[test]
    fn unknown_product_is_rejected_and_reprompted() {
        let products = catalog();
        let mut sales = Repository::new();
        let out = run(&mut sales, &products, "2\nSprocket\n1\nWidget\n1\n0\n0\n");

        assert!(out.contains("Invalid input: product 'Sprocket' not found."));
        assert_eq!(out.matches(ADD_ANOTHER_PROMPT).count(), 1);
        assert_eq!(sales.find(SaleId::new(1)).unwrap().lines().len(), 1);
    }

    #[test]
    fn answers_other_than_one_finish_the_sale() {
        let products = catalog();
        let mut sales = Repository::new();
        run(&mut sales, &products, "2\nWidget\n1\nyes\n0\n");

        assert_eq!(sales.len(), 1);
        assert_eq!(sales.find(SaleId::new(1)).unwrap().total(), Money::from_cents(1000));
    }

    #[test]
    fn remove_reports_missing_sales_without_failing() {
        let products = catalog();
        let mut sales = Repository::new();
        run(&mut sales, &products, "2\nGadget\n4\n0\n0\n");

        let out = run(&mut sales, &products, "3\n2\n3\n1\n1\n0\n");
        assert!(out.contains("No sale with id 2."));
        assert!(out.contains("Sale 1 removed."));
        assert!(out.contains("SALES:\n(none)\n"));
        assert!(sales.is_empty());
    }
}
