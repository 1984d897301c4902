use std::io::{self, Write};

/// Raw category identifier as entered by the operator (a zero-based index).
///
/// Carries the two sentinels of the catalog: [`CategoryId::INVALID`] (nothing
/// selected yet) and [`CategoryId::COUNT`] (one past the last category).
/// Only ids strictly between them name a real [`Category`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(i32);

impl CategoryId {
    pub const INVALID: Self = Self(-1);
    pub const COUNT: Self = Self(Category::ALL.len() as i32);

    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> i32 {
        self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product category stocked in the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Category {
    Dresses = 0,
    CropTops,
    SweatshirtsHoodies,
    Blouses,
    Skirts,
    Shorts,
    Jeans,
    MatchingSets,
    Swimwear,
    Accessories,
}

impl Category {
    /// Every category, in declaration (and menu) order.
    pub const ALL: [Category; 10] = [
        Category::Dresses,
        Category::CropTops,
        Category::SweatshirtsHoodies,
        Category::Blouses,
        Category::Skirts,
        Category::Shorts,
        Category::Jeans,
        Category::MatchingSets,
        Category::Swimwear,
        Category::Accessories,
    ];

    pub const fn id(self) -> CategoryId {
        CategoryId(self as i32)
    }

    /// Display name shown in menus and tables.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Dresses => "Dresses",
            Category::CropTops => "Crop Tops",
            Category::SweatshirtsHoodies => "Sweatshirts & Hoodies",
            Category::Blouses => "Blouses",
            Category::Skirts => "Skirts",
            Category::Shorts => "Shorts",
            Category::Jeans => "Jeans",
            Category::MatchingSets => "MatchingSets",
            Category::Swimwear => "Swimwear",
            Category::Accessories => "Accessories",
        }
    }

    pub fn from_id(id: CategoryId) -> Option<Self> {
        if !is_valid(id) {
            return None;
        }
        Self::ALL.get(id.0 as usize).copied()
    }
}

impl TryFrom<CategoryId> for Category {
    type Error = CategoryId;

    fn try_from(id: CategoryId) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(id)
    }
}

impl From<Category> for CategoryId {
    fn from(value: Category) -> Self {
        value.id()
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// True iff `id` lies strictly inside `(INVALID, COUNT)`.
pub fn is_valid(id: CategoryId) -> bool {
    id > CategoryId::INVALID && id < CategoryId::COUNT
}

/// Display name for `id`, or `""` when it does not name a category.
pub fn name_of(id: CategoryId) -> &'static str {
    Category::from_id(id).map(Category::name).unwrap_or("")
}

/// `(index, category)` pairs in declaration order.
pub fn entries() -> impl Iterator<Item = (usize, Category)> {
    Category::ALL.into_iter().enumerate()
}

/// Print the indexed category list the operator picks from.
pub fn list_all<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Product list: ")?;
    for (index, category) in entries() {
        writeln!(out, "({}) {}", index, category.name())?;
    }
    writeln!(out, "---------------")
}
