use std::io::{BufRead, Write};

use shopdesk_core::Repository;
use shopdesk_products::Product;
use shopdesk_sales::Sale;

use crate::console::Console;
use crate::error::ConsoleResult;
use crate::menu::{parse_choice, show_menu, MenuFlow, CHOOSE_PROMPT, INVALID_OPTION};
use crate::product_menu::ProductMenu;
use crate::sale_menu::SaleMenu;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum MainOption {
    Exit,
    Products,
    Sales,
}

const OPTIONS: [(u8, MainOption); 3] = [
    (0, MainOption::Exit),
    (1, MainOption::Products),
    (2, MainOption::Sales),
];

const LABELS: [(u8, &str); 3] = [(0, "EXIT"), (1, "PRODUCTS"), (2, "SALES")];

/// Top-level menu. Owns one repository per entity kind for the whole run and
/// lends them to the entity menus.
#[derive(Debug, Default)]
pub struct MainMenu {
    products: Repository<Product>,
    sales: Repository<Sale>,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &Repository<Product> {
        &self.products
    }

    pub fn sales(&self) -> &Repository<Sale> {
        &self.sales
    }

    /// Loop until the user picks exit.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        loop {
            show_menu(console, "MAIN MENU", &LABELS)?;
            let choice = console
                .read_text(CHOOSE_PROMPT)?
                .and_then(|text| parse_choice(&text, &OPTIONS));

            match choice {
                Ok(MainOption::Exit) => return console.say("Goodbye."),
                Ok(MainOption::Products) => {
                    MenuFlow::new(ProductMenu::new(&mut self.products)).run(console)?
                }
                Ok(MainOption::Sales) => {
                    MenuFlow::new(SaleMenu::new(&mut self.sales, &self.products)).run(console)?
                }
                Err(err) => {
                    tracing::debug!(error = %err, "invalid main menu selection");
                    console.say(INVALID_OPTION)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(menu: &mut MainMenu, script: &str) -> (ConsoleResult<()>, String) {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let result = menu.run(&mut console);
        (result, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn exit_says_goodbye() {
        let (result, out) = run(&mut MainMenu::new(), "0\n");
        assert!(result.is_ok());
        assert!(out.starts_with("\nMAIN MENU\n0 -> EXIT\n1 -> PRODUCTS\n2 -> SALES\n"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn invalid_selection_is_reported_and_menu_repeats() {
        let (result, out) = run(&mut MainMenu::new(), "7\nsales\n0\n");
        assert!(result.is_ok());
        assert_eq!(out.matches(INVALID_OPTION).count(), 2);
        assert_eq!(out.matches("MAIN MENU").count(), 3);
    }

    #[test]
    fn repositories_outlive_entity_menu_visits() {
        let mut menu = MainMenu::new();
        let (result, _) = run(
            &mut menu,
            "1\n2\nWidget\n10\n0\n2\n2\nWidget\n2\n0\n0\n0\n",
        );
        assert!(result.is_ok());
        assert_eq!(menu.products().len(), 1);
        assert_eq!(menu.sales().len(), 1);
    }
}
