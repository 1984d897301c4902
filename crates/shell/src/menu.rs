//! Single-key commands accepted at the shell prompts.

/// Menu commands. Which ones a prompt accepts depends on the menu shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddItem,
    RemoveItem,
    EditItem,
    SearchItem,
    ListProducts,
    ListItems,
    Quit,
}

impl MenuOption {
    /// Options offered at the main menu, in display order.
    pub const MAIN: [MenuOption; 5] = [
        MenuOption::AddItem,
        MenuOption::SearchItem,
        MenuOption::ListProducts,
        MenuOption::ListItems,
        MenuOption::Quit,
    ];

    /// Options offered once a search has located an item.
    pub const FOUND_ITEM: [MenuOption; 3] =
        [MenuOption::RemoveItem, MenuOption::EditItem, MenuOption::Quit];

    pub const fn key(self) -> char {
        match self {
            MenuOption::AddItem => 'a',
            MenuOption::RemoveItem => 'r',
            MenuOption::EditItem => 'e',
            MenuOption::SearchItem => 's',
            MenuOption::ListProducts => 'p',
            MenuOption::ListItems => 'l',
            MenuOption::Quit => 'q',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MenuOption::AddItem => "Add Item",
            MenuOption::RemoveItem => "Remove Item",
            MenuOption::EditItem => "Edit Item",
            MenuOption::SearchItem => "Search Item",
            MenuOption::ListProducts => "List Product Categories",
            MenuOption::ListItems => "List Items in Stock",
            MenuOption::Quit => "Quit",
        }
    }

    /// Resolve an input line against `allowed`, using its first non-blank character.
    pub fn parse(input: &str, allowed: &[MenuOption]) -> Option<Self> {
        let key = first_key(input)?;
        allowed.iter().copied().find(|option| option.key() == key)
    }
}

/// How the operator wants to look an item up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    ByName,
    ByCategory,
}

impl SearchMode {
    pub fn parse(input: &str) -> Option<Self> {
        match first_key(input)? {
            'n' => Some(SearchMode::ByName),
            'p' => Some(SearchMode::ByCategory),
            _ => None,
        }
    }
}

fn first_key(input: &str) -> Option<char> {
    input.trim_start().chars().next()
}
