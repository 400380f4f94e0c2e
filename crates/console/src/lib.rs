//! `shopdesk-console` — interactive product catalog and sales desk.
//!
//! Everything lives in memory for one run. [`run_session`] wires a
//! [`Console`] over any reader/writer pair to a fresh [`MainMenu`].

pub mod config;
pub mod console;
pub mod error;
pub mod main_menu;
pub mod menu;
pub mod product_menu;
pub mod sale_menu;

use std::io::{BufRead, Write};

pub use config::ConsoleConfig;
pub use console::Console;
pub use error::{ConsoleError, ConsoleResult};
pub use main_menu::MainMenu;
pub use menu::{EntityMenu, FlowState, MenuFlow, MenuOption};

/// Run one interactive session and hand back its final state.
///
/// Running out of input ends the session normally; only I/O failures are
/// errors.
pub fn run_session<R: BufRead, W: Write>(input: R, output: W) -> ConsoleResult<MainMenu> {
    let mut console = Console::new(input, output);
    let mut menu = MainMenu::new();

    tracing::info!("session started");
    match menu.run(&mut console) {
        Ok(()) => tracing::info!("session ended by user"),
        Err(ConsoleError::InputClosed) => tracing::info!("session ended: input closed"),
        Err(err) => return Err(err),
    }

    Ok(menu)
}
