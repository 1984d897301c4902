use shopinv_catalog::Category;
use shopinv_inventory::{Inventory, ValidationPolicy};
use shopinv_shell::{BANNER, Shell, ShellConfig};

/// Run one shell session over `script` and return what it printed plus the final store.
fn session_with(config: ShellConfig, script: &str) -> (String, Inventory) {
    let mut out = Vec::new();
    let mut shell = Shell::new(config, script.as_bytes(), &mut out);
    shell.run().expect("in-memory streams never fail");
    let inventory = shell.inventory().clone();
    drop(shell);
    (String::from_utf8(out).expect("shell writes utf-8"), inventory)
}

fn session(script: &str) -> (String, Inventory) {
    session_with(ShellConfig::default(), script)
}

/// Whitespace-split cells of every table row (lines between header and footer).
fn table_rows(output: &str) -> Vec<Vec<Vec<String>>> {
    let mut tables = Vec::new();
    let mut current: Option<Vec<Vec<String>>> = None;
    for line in output.lines() {
        if line.trim_start().starts_with("Product") && line.contains("Model Code") {
            current = Some(Vec::new());
        } else if line == "---------------" {
            if let Some(rows) = current.take() {
                tables.push(rows);
            }
        } else if let Some(rows) = current.as_mut() {
            rows.push(line.split_whitespace().map(str::to_string).collect());
        }
    }
    tables
}

fn models(inventory: &Inventory) -> Vec<String> {
    inventory.iter().map(|i| i.model_code().to_string()).collect()
}

#[test]
fn quit_prints_banner_and_menu() {
    let (out, inventory) = session("q\n");
    assert!(out.starts_with(BANNER));
    assert!(out.contains("(a) Add Item\n"));
    assert!(out.contains("(s) Search Item\n"));
    assert!(out.contains("(p) List Product Categories\n"));
    assert!(out.contains("(l) List Items in Stock\n"));
    assert!(out.contains("(q) Quit\n"));
    assert!(inventory.is_empty());
}

#[test]
fn end_of_input_ends_session() {
    let (out, inventory) = session("a\n4\nSK-1\n");
    assert!(inventory.is_empty());
    assert!(out.ends_with("Enter price: "));
}

#[test]
fn add_list_search_remove_skirt() {
    let script = "a\n4\nSK-100\n24.99\n12\n\
                  l\n\
                  s\nn\nSK-100\nr\n\
                  l\n\
                  q\n";
    let (out, inventory) = session(script);

    assert!(out.contains("Added item"));
    assert!(out.contains("Removed item"));

    let tables = table_rows(&out);
    // list, found-item echo, list after removal
    assert_eq!(tables.len(), 3);
    assert_eq!(tables[0], vec![vec!["Skirts", "SK-100", "24.99", "12"]]);
    assert_eq!(tables[1], tables[0]);
    assert!(tables[2].is_empty());
    assert!(inventory.is_empty());
}

#[test]
fn duplicate_model_codes_resolve_to_first_added() {
    let script = "a\n0\nDUP\n10\n1\n\
                  a\n6\nDUP\n20\n2\n\
                  s\nn\nDUP\nr\n\
                  s\nn\nDUP\nq\n\
                  q\n";
    let (out, inventory) = session(script);

    let tables = table_rows(&out);
    assert_eq!(tables[0], vec![vec!["Dresses", "DUP", "10.00", "1"]]);
    assert_eq!(tables[1], vec![vec!["Jeans", "DUP", "20.00", "2"]]);
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.iter().next().unwrap().category(), Category::Jeans);
}

#[test]
fn edit_replaces_fields_in_place() {
    let script = "a\n0\nA\n1\n1\n\
                  a\n1\nB\n2\n2\n\
                  a\n2\nC\n3\n3\n\
                  s\nn\nB\ne\n3\nB2\n9.5\n7\n\
                  q\n";
    let (out, inventory) = session(script);

    assert!(out.contains("Updated item"));
    assert_eq!(models(&inventory), vec!["A", "B2", "C"]);
    let edited = inventory.iter().nth(1).unwrap();
    assert_eq!(edited.category(), Category::Blouses);
    assert_eq!(edited.price(), 9.5);
    assert_eq!(edited.quantity(), 7);
}

#[test]
fn search_by_category_finds_first_in_category() {
    let script = "a\n6\nJ-1\n40\n1\n\
                  a\n4\nSK-1\n20\n1\n\
                  a\n4\nSK-2\n21\n1\n\
                  s\np\n4\nr\n\
                  q\n";
    let (out, inventory) = session(script);

    assert!(out.contains("Select product id: "));
    assert_eq!(models(&inventory), vec!["J-1", "SK-2"]);
}

#[test]
fn search_misses_report_not_found() {
    let (out, _) = session("s\nn\nNOPE\ns\np\n10\nq\n");
    assert_eq!(out.matches("Item not found. Try adding an item.").count(), 2);
}

#[test]
fn unknown_search_mode_returns_to_main_menu() {
    let (out, _) = session("s\nx\nq\n");
    assert_eq!(out.matches("Invalid option selected. Please try again.").count(), 1);
    assert_eq!(out.matches("Select operation: ").count(), 2);
}

#[test]
fn unknown_main_command_repeats_menu() {
    let (out, _) = session("z\n\nq\n");
    assert_eq!(out.matches("Invalid option selected. Please try again.").count(), 2);
    assert_eq!(out.matches("Select operation: ").count(), 3);
}

#[test]
fn found_item_menu_loops_on_unknown_choice_and_quits_without_change() {
    let script = "a\n9\nBAG\n5\n1\n\
                  s\nn\nBAG\nx\nq\n\
                  q\n";
    let (out, inventory) = session(script);

    assert!(out.contains("(r) Remove Item\n(e) Edit Item\n(q) Quit\n"));
    assert_eq!(out.matches("Invalid option selected. Please try again.").count(), 1);
    assert_eq!(models(&inventory), vec!["BAG"]);
}

#[test]
fn add_flow_retries_invalid_category_and_fields() {
    let script = "a\n10\n-1\nskirts\n4\n   \nSK-9\nabc\n-2\n3.25\n1.5\n-4\nq\n";
    let (out, inventory) = session(script);

    // 10, -1 and "skirts" are rejected before 4 is accepted
    assert_eq!(out.matches("Invalid option selected. Please try again.").count(), 3);
    assert_eq!(out.matches("Select product category to add: ").count(), 4);
    assert!(out.contains("Invalid input: model code cannot be empty. Please try again."));
    assert!(out.contains("Invalid input: price must be a number"));
    assert!(out.contains("Invalid input: price cannot be negative. Please try again."));
    assert!(out.contains("Invalid input: quantity must be a number"));

    let item = inventory.iter().next().unwrap();
    assert_eq!(item.model_code(), "SK-9");
    assert_eq!(item.price(), 3.25);
    assert_eq!(item.quantity(), -4);
}

#[test]
fn strict_policy_rejects_negative_quantity() {
    let config = ShellConfig {
        policy: ValidationPolicy {
            allow_negative_price: false,
            allow_negative_quantity: false,
        },
        ..ShellConfig::default()
    };
    let (out, inventory) = session_with(config, "a\n0\nD-1\n5\n-1\n3\nq\n");

    assert!(out.contains("Invalid input: quantity cannot be negative. Please try again."));
    assert_eq!(inventory.iter().next().unwrap().quantity(), 3);
}

#[test]
fn list_products_prints_catalog() {
    let (out, _) = session("p\nq\n");
    assert!(out.contains("Product list: \n(0) Dresses\n(1) Crop Tops\n"));
    assert!(out.contains("(9) Accessories\n---------------\n"));
}

/// Run a session over raw bytes, which need not be valid UTF-8.
fn session_bytes(script: &[u8]) -> (String, Inventory) {
    let mut out = Vec::new();
    let mut shell = Shell::new(ShellConfig::default(), script, &mut out);
    shell.run().expect("bad bytes are reported, not fatal");
    let inventory = shell.inventory().clone();
    drop(shell);
    (String::from_utf8(out).expect("shell writes utf-8"), inventory)
}

#[test]
fn non_utf8_line_is_rejected_and_reprompted() {
    let mut script = b"a\n4\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"SK-1\n1\n1\nl\nq\n");
    let (out, inventory) = session_bytes(&script);

    assert!(out.contains("Invalid input: text must be valid UTF-8. Please try again."));
    assert_eq!(out.matches("Enter model code: ").count(), 2);
    assert_eq!(models(&inventory), vec!["SK-1"]);
    assert_eq!(table_rows(&out)[0], vec![vec!["Skirts", "SK-1", "1.00", "1"]]);
}

#[test]
fn non_utf8_main_menu_command_keeps_session_alive() {
    let mut script = b"a\n0\nD-1\n5\n2\n".to_vec();
    script.extend_from_slice(&[b'C', b'a', b'f', 0xe9, b'\n']);
    script.extend_from_slice(b"q\n");
    let (out, inventory) = session_bytes(&script);

    assert_eq!(out.matches("Invalid input: text must be valid UTF-8").count(), 1);
    assert_eq!(inventory.len(), 1);
}
