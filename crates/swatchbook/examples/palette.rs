#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::fs::File;
use std::process::ExitCode;

use swatchbook::{
    Catalog, ColorFormat, Engine, EngineConfig, FilterSet, SchemeType, SearchQuery,
};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Err("usage: palette <catalog.json> [query] [config.toml]".into());
    };
    let search_query = SearchQuery::new(args.next().unwrap_or_default());
    let config = match args.next() {
        Some(path) => EngineConfig::load_from_file(path)?,
        None => EngineConfig::default(),
    };

    let ingestion = Catalog::from_reader(File::open(path)?)?;
    for skipped in &ingestion.skipped {
        eprintln!("skipped record {}: {}", skipped.index, skipped.reason);
    }

    let catalog = ingestion.catalog;
    let engine = Engine::new(config);
    let view = engine.query(&catalog, &search_query, &FilterSet::default(), None);
    let stats = catalog.stats(&view);
    println!(
        "{} of {} colors, {} in the catalog with traditional names",
        stats.filtered, stats.total, stats.with_guofeng
    );

    for record in view.iter().take(10) {
        println!(
            "{}  {}  {} / {}",
            record.hex(),
            record.rgb().to_string_as(ColorFormat::Hsl),
            record.chinese(),
            record.english()
        );
    }

    if let Some(first) = view.first() {
        println!("\nsimilar to {}:", first.chinese());
        for candidate in engine.similar(*first, &catalog) {
            println!("  {}  {:5.1}", candidate.record.hex(), candidate.score);
        }

        for scheme in SchemeType::all() {
            let colors: Vec<String> = scheme
                .generate(first.rgb())
                .iter()
                .map(|c| c.color().to_string())
                .collect();
            println!("{:>20}: {}", scheme.name(), colors.join(" "));
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
