use std::fs::File;

use blind::{construct, state, BlindOptions};
use blind_dom::{Document, Element};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("toggle.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let mut doc = Document::new();
    let page = doc.mount(
        Element::section()
            .id("page")
            .child(
                Element::div()
                    .title("Shipping details")
                    .child(Element::p().text("Orders ship within two business days."))
                    .child(Element::p().text("Tracking numbers are sent by email.")),
            ),
    );
    let details = doc.first_child(page).ok_or("page has no children")?;

    let blind = construct(&mut doc, details)?;
    doc.append_child(page, blind)?;
    let title = doc
        .query_class(blind, "blind__title")
        .ok_or("blind has no title bar")?;

    let options = BlindOptions::default();
    for _ in 0..3 {
        println!("{:?}: {}", state(&doc, blind, &options), doc.outer_html(page).unwrap_or_default());
        doc.click(title)?;
    }

    Ok(())
}
