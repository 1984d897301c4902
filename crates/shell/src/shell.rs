use std::io::{self, BufRead, Write};

use shopinv_catalog as catalog;
use shopinv_core::{DomainError, ItemId};
use shopinv_inventory::{
    FieldError, Inventory, ItemDetails, parse_category, parse_category_id, parse_model_code,
    parse_price, parse_quantity, table,
};

use crate::config::ShellConfig;
use crate::menu::{MenuOption, SearchMode};

pub const BANNER: &str = "Shop Inventory v0.1";

const INVALID_OPTION: &str = "Invalid option selected. Please try again.";
const NOT_FOUND: &str = "Item not found. Try adding an item.";
const NOT_UTF8: &str = "text must be valid UTF-8";

/// Where the shell is in its menu flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    MainMenu,
    AddFlow,
    SearchFlow,
    FoundItemMenu(ItemId),
    Exit,
}

/// Interactive menu over one [`Inventory`].
///
/// Reads operator lines from `input` and writes prompts and tables to
/// `output`. End of input at any prompt ends the session like `q`.
pub struct Shell<R, W> {
    config: ShellConfig,
    inventory: Inventory,
    input: R,
    output: W,
}

impl<R, W> Shell<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(config: ShellConfig, input: R, output: W) -> Self {
        Self {
            inventory: Inventory::with_capacity(config.capacity),
            config,
            input,
            output,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Drive the menu until the operator quits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", BANNER)?;

        let mut state = State::MainMenu;
        while state != State::Exit {
            state = match state {
                State::MainMenu => self.main_menu()?,
                State::AddFlow => self.add_flow()?,
                State::SearchFlow => self.search_flow()?,
                State::FoundItemMenu(id) => self.found_item_menu(id)?,
                State::Exit => State::Exit,
            };
        }

        self.output.flush()
    }

    fn main_menu(&mut self) -> io::Result<State> {
        self.list_options(&MenuOption::MAIN)?;
        let Some(line) = self.prompt("Select operation: ")? else {
            return Ok(State::Exit);
        };

        let next = match MenuOption::parse(&line, &MenuOption::MAIN) {
            Some(MenuOption::AddItem) => State::AddFlow,
            Some(MenuOption::SearchItem) => State::SearchFlow,
            Some(MenuOption::ListProducts) => {
                catalog::list_all(&mut self.output)?;
                State::MainMenu
            }
            Some(MenuOption::ListItems) => {
                self.inventory.list(&mut self.output)?;
                State::MainMenu
            }
            Some(MenuOption::Quit) => State::Exit,
            _ => {
                tracing::debug!(input = %line.trim(), "unrecognized main menu option");
                writeln!(self.output, "{}", INVALID_OPTION)?;
                State::MainMenu
            }
        };
        Ok(next)
    }

    fn add_flow(&mut self) -> io::Result<State> {
        let Some(details) = self.collect_item()? else {
            return Ok(State::Exit);
        };
        self.inventory.add(details);
        writeln!(self.output, "Added item\n")?;
        Ok(State::MainMenu)
    }

    fn search_flow(&mut self) -> io::Result<State> {
        let Some(line) = self.prompt("Search by (n) Name, (p) Product Category: ")? else {
            return Ok(State::Exit);
        };

        let found = match SearchMode::parse(&line) {
            Some(SearchMode::ByName) => {
                let Some(name) = self.prompt("Enter model name: ")? else {
                    return Ok(State::Exit);
                };
                self.inventory.find_by_model_code(name.trim())
            }
            Some(SearchMode::ByCategory) => {
                catalog::list_all(&mut self.output)?;
                let Some(raw) = self.prompt("Select product id: ")? else {
                    return Ok(State::Exit);
                };
                match parse_category_id(&raw) {
                    Ok(id) => self.inventory.find_by_category(id),
                    Err(err) => {
                        self.report_invalid(&err)?;
                        return Ok(State::MainMenu);
                    }
                }
            }
            None => {
                tracing::debug!(input = %line.trim(), "unrecognized search mode");
                writeln!(self.output, "{}", INVALID_OPTION)?;
                return Ok(State::MainMenu);
            }
        };

        match found {
            Some(id) => Ok(State::FoundItemMenu(id)),
            None => {
                writeln!(self.output, "{}", NOT_FOUND)?;
                Ok(State::MainMenu)
            }
        }
    }

    fn found_item_menu(&mut self, id: ItemId) -> io::Result<State> {
        if let Some(item) = self.inventory.get(id) {
            table::write_table(&mut self.output, [item])?;
        }

        loop {
            self.list_options(&MenuOption::FOUND_ITEM)?;
            let Some(line) = self.prompt("Select operation: ")? else {
                return Ok(State::Exit);
            };

            match MenuOption::parse(&line, &MenuOption::FOUND_ITEM) {
                Some(MenuOption::RemoveItem) => {
                    match self.inventory.remove(id) {
                        Ok(_) => writeln!(self.output, "Removed item\n")?,
                        Err(err) => self.report_stale(id, &err)?,
                    }
                    return Ok(State::MainMenu);
                }
                Some(MenuOption::EditItem) => {
                    let Some(details) = self.collect_item()? else {
                        return Ok(State::Exit);
                    };
                    match self.inventory.edit(id, details) {
                        Ok(_) => writeln!(self.output, "Updated item\n")?,
                        Err(err) => self.report_stale(id, &err)?,
                    }
                    return Ok(State::MainMenu);
                }
                Some(MenuOption::Quit) => return Ok(State::MainMenu),
                _ => writeln!(self.output, "{}", INVALID_OPTION)?,
            }
        }
    }

    /// Prompt for every field of an item, re-asking until each one parses.
    ///
    /// `None` means input ended before the item was complete.
    fn collect_item(&mut self) -> io::Result<Option<ItemDetails>> {
        let category = loop {
            catalog::list_all(&mut self.output)?;
            let Some(raw) = self.prompt("Select product category to add: ")? else {
                return Ok(None);
            };
            match parse_category(&raw) {
                Ok(category) => break category,
                Err(err) => {
                    tracing::debug!(error = %err, "category rejected");
                    writeln!(self.output, "{}", INVALID_OPTION)?;
                }
            }
        };

        let policy = self.config.policy;
        let Some(model_code) = self.prompt_field("Enter model code: ", parse_model_code)? else {
            return Ok(None);
        };
        let Some(price) = self.prompt_field("Enter price: ", |raw| parse_price(raw, &policy))? else {
            return Ok(None);
        };
        let Some(quantity) =
            self.prompt_field("Enter quantity: ", |raw| parse_quantity(raw, &policy))?
        else {
            return Ok(None);
        };

        Ok(Some(ItemDetails::new(category, model_code, price, quantity)))
    }

    fn prompt_field<T, F>(&mut self, prompt: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, FieldError>,
    {
        loop {
            let Some(raw) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.report_invalid(&err)?,
            }
        }
    }

    fn report_invalid(&mut self, err: &FieldError) -> io::Result<()> {
        tracing::debug!(error = %err, "field rejected");
        writeln!(self.output, "Invalid input: {}. Please try again.", err)
    }

    fn report_stale(&mut self, id: ItemId, err: &DomainError) -> io::Result<()> {
        tracing::warn!(item_id = %id, error = %err, "located item is gone");
        writeln!(self.output, "{}", NOT_FOUND)
    }

    fn list_options(&mut self, options: &[MenuOption]) -> io::Result<()> {
        for option in options {
            writeln!(self.output, "({}) {}", option.key(), option.label())?;
        }
        Ok(())
    }

    /// Print `text` without a newline and read one line back.
    ///
    /// Lines that are not UTF-8 are rejected and the prompt is repeated.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{}", text)?;
            self.output.flush()?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                return Ok(None);
            }
            match String::from_utf8(raw) {
                Ok(line) => return Ok(Some(line)),
                Err(err) => {
                    tracing::debug!(error = %err, "input line is not utf-8");
                    writeln!(self.output, "Invalid input: {}. Please try again.", NOT_UTF8)?;
                }
            }
        }
    }
}
