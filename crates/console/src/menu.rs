//! Generic list / add / remove menu shared by every entity kind.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use shopdesk_core::{DomainError, DomainResult, SequentialId};

use crate::console::Console;
use crate::error::ConsoleResult;

/// Per-kind behaviour plugged into [`MenuFlow`].
///
/// Handlers report their own validation failures to the console; an `Err`
/// return means the session itself cannot continue (I/O failure or closed
/// input).
pub trait EntityMenu {
    fn title(&self) -> &str;

    fn list<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> ConsoleResult<()>;

    fn add<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> ConsoleResult<()>;

    fn remove<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> ConsoleResult<()>;
}

/// Selections offered by every entity menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuOption {
    Back,
    List,
    Add,
    Remove,
}

impl MenuOption {
    pub const ALL: [MenuOption; 4] = [Self::Back, Self::List, Self::Add, Self::Remove];

    pub fn code(self) -> u8 {
        match self {
            Self::Back => 0,
            Self::List => 1,
            Self::Add => 2,
            Self::Remove => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Back => "BACK",
            Self::List => "LIST",
            Self::Add => "ADD",
            Self::Remove => "REMOVE",
        }
    }
}

impl FromStr for MenuOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, &Self::ALL.map(|option| (option.code(), option)))
    }
}

/// Print a menu title followed by `code -> LABEL` rows.
pub fn show_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
    options: &[(u8, &str)],
) -> ConsoleResult<()> {
    console.say(format_args!("\n{title}"))?;
    for (code, label) in options {
        console.say(format_args!("{code} -> {label}"))?;
    }
    Ok(())
}

/// Print a listing header followed by one entry per item, or `(none)`.
pub fn show_listing<R, W, I>(
    console: &mut Console<R, W>,
    header: &str,
    items: I,
) -> ConsoleResult<()>
where
    R: BufRead,
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    console.say(format_args!("\n{header}:"))?;
    let mut any = false;
    for item in items {
        console.say(item)?;
        any = true;
    }
    if !any {
        console.say("(none)")?;
    }
    Ok(())
}

pub const CHOOSE_PROMPT: &str = "Choose an option: ";
pub const INVALID_OPTION: &str = "INVALID OPTION";

/// Read an id that could have been issued, asking again until one is given.
pub fn read_id<I, R, W>(console: &mut Console<R, W>, prompt: &str) -> ConsoleResult<I>
where
    I: SequentialId + FromStr<Err = DomainError>,
    R: BufRead,
    W: Write,
{
    loop {
        let id = console.read_parsed::<I>(prompt)?.and_then(|id: I| {
            if id.is_issuable() {
                Ok(id)
            } else {
                Err(DomainError::invalid_id("id must be a positive number"))
            }
        });
        match id {
            Ok(id) => return Ok(id),
            Err(err) => {
                tracing::debug!(error = %err, "rejected id");
                console.report(&err)?;
            }
        }
    }
}

/// Where a [`MenuFlow`] is in its loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlowState {
    ShowingMenu,
    Dispatching,
    Listing,
    Adding,
    Removing,
    Exiting,
    Exited,
}

impl From<MenuOption> for FlowState {
    fn from(option: MenuOption) -> Self {
        match option {
            MenuOption::Back => FlowState::Exiting,
            MenuOption::List => FlowState::Listing,
            MenuOption::Add => FlowState::Adding,
            MenuOption::Remove => FlowState::Removing,
        }
    }
}

/// Drives one entity menu until the user backs out.
///
/// `ShowingMenu -> Dispatching -> {Listing, Adding, Removing, Exiting}`, and
/// every handler state returns to `ShowingMenu`. `Exiting` leads to the
/// terminal `Exited`. An unrecognised selection goes straight back to
/// `ShowingMenu`.
pub struct MenuFlow<M> {
    menu: M,
    state: FlowState,
}

impl<M: EntityMenu> MenuFlow<M> {
    pub fn new(menu: M) -> Self {
        Self {
            menu,
            state: FlowState::ShowingMenu,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Perform one transition and return the new state.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> ConsoleResult<FlowState> {
        self.state = match self.state {
            FlowState::ShowingMenu => {
                let options: Vec<(u8, &str)> = MenuOption::ALL
                    .into_iter()
                    .map(|o| (o.code(), o.label()))
                    .collect();
                show_menu(console, self.menu.title(), &options)?;
                FlowState::Dispatching
            }
            FlowState::Dispatching => match console.read_parsed::<MenuOption>(CHOOSE_PROMPT)? {
                Ok(option) => option.into(),
                Err(err) => {
                    tracing::debug!(menu = self.menu.title(), error = %err, "invalid selection");
                    console.say(INVALID_OPTION)?;
                    FlowState::ShowingMenu
                }
            },
            FlowState::Listing => {
                self.menu.list(console)?;
                FlowState::ShowingMenu
            }
            FlowState::Adding => {
                self.menu.add(console)?;
                FlowState::ShowingMenu
            }
            FlowState::Removing => {
                self.menu.remove(console)?;
                FlowState::ShowingMenu
            }
            FlowState::Exiting | FlowState::Exited => FlowState::Exited,
        };
        Ok(self.state)
    }

    /// Step until `Exited`.
    pub fn run<R: BufRead, W: Write>(mut self, console: &mut Console<R, W>) -> ConsoleResult<()> {
        while self.step(console)? != FlowState::Exited {}
        Ok(())
    }
}

/// Parse a selection, accepting only codes present in `options`.
pub fn parse_choice<T: Copy>(text: &str, options: &[(u8, T)]) -> DomainResult<T> {
    let code: u8 = text
        .trim()
        .parse()
        .map_err(|_| DomainError::validation(format!("'{text}' is not a menu option")))?;
    options
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, value)| *value)
        .ok_or_else(|| DomainError::validation(format!("{code} is not a menu option")))
}
