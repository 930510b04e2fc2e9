//! CLI tool for sitekit - resolves layout fixtures and renders review panels
//!
//! Usage:
//!   sitekit_cli resolve <layout.json> <scroll>          # Print the active section as JSON
//!   sitekit_cli reviews <place.json>                    # Print the reviews HTML to stdout
//!   sitekit_cli reviews <place.json> -o reviews.html    # Write the reviews HTML to a file
//!
//! The layout file looks like:
//!   {"config": {"headerOffset": 100}, "sections": [{"id": "about", "top": 500, "height": 300}]}
//! `config` is optional. `<scroll>` is the raw window scroll offset; the
//! configured header offset is added before resolving.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::Deserialize;
use sitekit::reviews::{format_iso_date, render_error, render_place};
use sitekit::{resolve_active_section, PlaceDetails, Section, SiteConfig};

const USAGE: &str = "Usage: sitekit_cli resolve <layout.json> <scroll>\n       sitekit_cli reviews <place.json> [-o output.html]";

#[derive(Deserialize)]
struct LayoutFile {
    #[serde(default)]
    config: SiteConfig,
    sections: Vec<Section>,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn read(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => fail(&format!("Error reading {}: {}", path, e)),
    }
}

fn resolve(layout_path: &str, scroll: &str) {
    let layout: LayoutFile = match serde_json::from_str(&read(layout_path)) {
        Ok(l) => l,
        Err(e) => fail(&format!("Error parsing {}: {}", layout_path, e)),
    };
    if let Err(e) = layout.config.validate() {
        fail(&format!("Error in {}: {}", layout_path, e));
    }
    let scroll_y: f64 = match scroll.parse() {
        Ok(v) => v,
        Err(e) => fail(&format!("Invalid scroll offset {}: {}", scroll, e)),
    };

    let active = resolve_active_section(
        scroll_y + layout.config.header_offset,
        &layout.sections,
        &layout.config.merge_rules,
    );
    println!("{}", serde_json::to_string(&active).unwrap());
}

fn reviews(place_path: &str, output_path: Option<&String>) {
    let config = SiteConfig::default();
    // Anything that does not decode gets the fallback panel, like the live widget
    let html = match serde_json::from_str::<PlaceDetails>(&read(place_path)) {
        Ok(place) => render_place(&place, &config.reviews, &format_iso_date),
        Err(e) => {
            eprintln!("Error parsing {}: {}", place_path, e);
            render_error(&config.reviews)
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &html) {
                fail(&format!("Error writing {}: {}", path, e));
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(html.as_bytes()).unwrap();
            println!();
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("resolve") if args.len() == 4 => resolve(&args[2], &args[3]),
        Some("reviews") if args.len() >= 3 => {
            let output_path = if args.len() > 4 && args[3] == "-o" {
                Some(&args[4])
            } else {
                None
            };
            reviews(&args[2], output_path);
        }
        _ => fail(USAGE),
    }
}
