//! Order form driving a text screen, end to end.

use std::fs::File;
use std::io::{BufReader, Cursor};

use clients_interfaces::batch::{process_orders, BatchReport};
use clients_interfaces::generate_orders::generate_orders;
use clients_interfaces::screen::OrderForm;
use clients_interfaces::summary::{INCOMPLETE_ORDER_PROMPT, RESET_PLACEHOLDER};
use clients_interfaces::terminal_screen::TerminalScreen;
use orders::{OrderSelection, Price, NO_SWEETENER};

fn form() -> OrderForm<TerminalScreen<Vec<u8>>> {
    OrderForm::new(TerminalScreen::new(Vec::new()))
}

fn output(form: OrderForm<TerminalScreen<Vec<u8>>>) -> String {
    String::from_utf8(form.into_screen().into_inner()).unwrap()
}

#[test]
fn complete_order_prints_summary_and_fills_cup() {
    let mut form = form();
    let selection = OrderSelection::new()
        .with_size("large")
        .with_base("yogurt")
        .with_fruit("apple")
        .with_extras(["protein", "oats"])
        .with_sweetener(NO_SWEETENER)
        .with_customer_name("Chen")
        .with_notes("no ice");
    let priced = form.submit(&selection).unwrap();
    assert_eq!(priced.price(), Price::from_cents(835));

    assert_eq!(
        output(form),
        "cup [..........] 0%\n\
         Thanks, Chen! Large smoothie with yogurt, featuring apple; protein, oats; \
         and no added sweetener. Your total is $8.35. Special instructions: \"no ice\".\n\
         cup [########..] 80% linear-gradient(180deg, #c5e1a5, #8bc34a)\n"
    );
}

#[test]
fn incomplete_order_prompts_without_touching_cup() {
    let mut form = form();
    let selection = OrderSelection::new().with_base("water").with_fruit("kiwi");
    assert!(form.submit(&selection).is_err());
    assert_eq!(
        output(form),
        format!("cup [..........] 0%\n{INCOMPLETE_ORDER_PROMPT}\n")
    );
}

#[test]
fn reset_after_order_empties_cup() {
    let mut form = form();
    let selection = OrderSelection::new()
        .with_size("small")
        .with_base("oat milk")
        .with_fruit("banana");
    form.submit(&selection).unwrap();
    form.reset();

    let text = output(form);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[3], RESET_PLACEHOLDER);
    assert_eq!(lines[4], "cup [..........] 0%");
}

#[test]
fn batch_counts_accepted_incomplete_and_skipped() {
    let input = [
        r#"{"size":"small","base":"oat milk","fruits":["banana"],"sweetener":"none"}"#,
        r#"{"size":"medium","base":"water","fruits":["mango","kiwi"],"extras":["chia"],"sweetener":"honey"}"#,
        "",
        r#"{"size":"medium","base":"water"}"#,
        "not json",
    ]
    .join("\n");

    let mut form = form();
    let report = process_orders(&mut form, Cursor::new(input)).unwrap();
    assert_eq!(
        report,
        BatchReport {
            accepted: 2,
            incomplete: 1,
            skipped: 1,
            total: Price::from_cents(475 + 760),
        }
    );
}

#[test]
fn generated_file_can_be_ordered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.jsonl");
    generate_orders(&path, 25, Some(3)).unwrap();

    let mut form = form();
    let reader = BufReader::new(File::open(&path).unwrap());
    let report = process_orders(&mut form, reader).unwrap();
    assert_eq!(report.skipped, 0);
    assert_eq!(report.accepted + report.incomplete, 25);
}

#[test]
fn batch_line_with_null_size_reaches_prompt() {
    let input = r#"{"size":null,"base":"water","fruits":["kiwi"],"extras":null}"#;

    let mut form = form();
    let report = process_orders(&mut form, Cursor::new(input)).unwrap();
    assert_eq!(report.incomplete, 1);
    assert_eq!(report.skipped, 0);
    assert_eq!(
        output(form),
        format!("cup [..........] 0%\n{INCOMPLETE_ORDER_PROMPT}\n")
    );
}
