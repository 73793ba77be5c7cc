use std::env;
use std::path::PathBuf;

use orderseed_core::Entity;
use orderseed_generate::{GenerateOptions, GenerationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut options = GenerateOptions::default();
    let mut selection = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => {
                options.out_dir = args.next().map(PathBuf::from).ok_or("missing --out path")?
            }
            "--rows" => options.rows = args.next().ok_or("missing --rows value")?.parse()?,
            "--seed" => options.seed = Some(args.next().ok_or("missing --seed value")?.parse()?),
            other => selection.push(other.parse::<Entity>()?),
        }
    }

    if selection.is_empty() {
        selection.extend([Entity::Workers, Entity::Users, Entity::Orders]);
    }

    let engine = GenerationEngine::new(options);
    let result = engine.run(&selection)?;

    println!("out_dir={}", result.out_dir.display());
    for table in &result.report.tables {
        println!("{}={}", table.entity, table.path.display());
    }
    Ok(())
}
