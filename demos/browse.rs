//! Browsing demo with built-in sample data.
//!
//! Run with: cargo run --example browse
//!
//! Shows the library API: schema configuration, record population, an
//! injected back callback, and interpreting the run result.

use comfy_table::Color;

use table_pager::browser::{BackError, TableBrowser};
use table_pager::console::TermConsole;
use table_pager::types::{Column, ColumnSchema, InputMode, Record};

fn main() {
    let schema: ColumnSchema = [
        Column::new("Index"),
        Column::with_color("Title", Color::Blue),
        Column::with_color("Year", Color::Cyan),
        Column::with_color("Seeders", Color::Green),
    ]
    .into_iter()
    .collect();

    let titles = [
        ("Dune", "2021", "812"),
        ("Alien", "1979", "455"),
        ("Blade Runner", "1982", "390"),
        ("Arrival", "2016", "270"),
        ("Solaris", "1972", "88"),
        ("Moon", "2009", "154"),
        ("Sunshine", "2007", "97"),
        ("Annihilation", "2018", "201"),
        ("Stalker", "1979", "76"),
        ("Gattaca", "1997", "142"),
        ("Primer", "2004", "63"),
        ("Coherence", "2013", "51"),
    ];

    let console = TermConsole::with_banner("sample media search");
    let mut browser = TableBrowser::new(console);
    browser.configure_columns(schema);
    browser.set_page_size(5);

    for (i, (title, year, seeders)) in titles.iter().enumerate() {
        let mut record = Record::new();
        record.set("Index", i.to_string());
        record.set("Title", *title);
        record.set("Year", *year);
        record.set("Seeders", *seeders);
        browser.append(record);
    }

    // Stand-in for the upstream search flow.
    let mut back = |term: Option<&str>| -> Result<(), BackError> {
        println!("(would re-enter search, term: {:?})", term);
        Ok(())
    };

    match browser.run(InputMode::FreeForm, Some(&mut back)) {
        Ok(last) if last.eq_ignore_ascii_case("q") => println!("Bye."),
        Ok(last) => println!("Selection: {last}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}
