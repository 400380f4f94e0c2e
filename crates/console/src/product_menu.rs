use std::io::{BufRead, Write};

use shopdesk_core::{DomainError, Money, Repository};
use shopdesk_products::{NewProduct, Product, ProductId};

use crate::console::Console;
use crate::error::ConsoleResult;
use crate::menu::{read_id, show_listing, EntityMenu};

/// Catalog maintenance: list, add and remove products.
pub struct ProductMenu<'a> {
    products: &'a mut Repository<Product>,
}

impl<'a> ProductMenu<'a> {
    pub fn new(products: &'a mut Repository<Product>) -> Self {
        Self { products }
    }
}

impl EntityMenu for ProductMenu<'_> {
    fn title(&self) -> &str {
        "PRODUCTS MENU"
    }

    fn list<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        show_listing(console, "PRODUCTS", self.products.list())
    }

    /// Ask for name and price until both are valid, then store the product.
    fn add<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        loop {
            let name = console.read_text("\nName: ")?;
            let price = console.read_parsed::<Money>("Price: ")?;

            match name.and_then(|name| price.and_then(|price| NewProduct::new(name, price))) {
                Ok(draft) => {
                    let id = self.products.add(draft);
                    tracing::info!(product_id = %id, "product added");
                    return console.say(format_args!("Product {id} added."));
                }
                Err(err) => {
                    tracing::debug!(error = %err, "rejected product entry");
                    console.report(&err)?;
                }
            }
        }
    }

    fn remove<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        let id: ProductId = read_id(console, "\nProduct id: ")?;
        match self.products.remove(id) {
            Ok(product) => {
                tracing::info!(product_id = %id, name = product.name(), "product removed");
                console.say(format_args!("Product {id} removed."))
            }
            Err(DomainError::NotFound) => console.say(format_args!("No product with id {id}.")),
            Err(err) => console.report(&err),
        }
    }
}
