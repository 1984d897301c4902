//! Fixed-width rendering of inventory rows.

use std::io::{self, Write};

use crate::item::Item;

pub const PRODUCT_WIDTH: usize = 32;
pub const MODEL_CODE_WIDTH: usize = 64;
pub const PRICE_WIDTH: usize = 16;
pub const QUANTITY_WIDTH: usize = 8;

pub const FOOTER: &str = "---------------";

pub fn write_header<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:>pw$}{:>mw$}{:>cw$}{:>qw$}",
        "Product",
        "Model Code",
        "Price (GBP)",
        "Qty.",
        pw = PRODUCT_WIDTH,
        mw = MODEL_CODE_WIDTH,
        cw = PRICE_WIDTH,
        qw = QUANTITY_WIDTH,
    )
}

pub fn write_row<W: Write + ?Sized>(out: &mut W, item: &Item) -> io::Result<()> {
    writeln!(
        out,
        "{:>pw$}{:>mw$}{:>cw$.2}{:>qw$}",
        item.category().name(),
        item.model_code(),
        item.price(),
        item.quantity(),
        pw = PRODUCT_WIDTH,
        mw = MODEL_CODE_WIDTH,
        cw = PRICE_WIDTH,
        qw = QUANTITY_WIDTH,
    )
}

/// Header, one row per item, footer.
pub fn write_table<'a, W, I>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Item>,
{
    write_header(out)?;
    for item in items {
        write_row(out, item)?;
    }
    writeln!(out, "{}", FOOTER)
}
