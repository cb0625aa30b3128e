mod display;
mod error;
mod form;
mod schedule;
mod web;

use std::path::Path;

use display::{print_statistics, print_timetable, write_grid_to_csv};
use form::FormState;
use schedule::{aggregate, generate, generate_seeded};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args
            .get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        println!("Starting web server on port {}...", port);
        println!("Access the site at http://localhost:{}", port);

        web::start_server(port).await?;
        return Ok(());
    }

    // CLI mode: generate a timetable from a form snapshot file
    let seed_pos = args.iter().position(|a| a == "--seed");
    let seed = seed_pos
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<u64>().ok());
    let form_path = args
        .iter()
        .enumerate()
        .skip(1)
        .find(|(i, a)| !a.starts_with("--") && seed_pos.map_or(true, |sp| *i != sp + 1))
        .map(|(_, a)| a.as_str())
        .unwrap_or("data/sample_form.json");

    println!("Loading form snapshot from {}...", form_path);
    let contents = std::fs::read_to_string(form_path)?;
    let form: FormState = serde_json::from_str(&contents)?;

    let grid = match seed {
        Some(seed) => generate_seeded(&form, seed)?,
        None => generate(&form)?,
    };
    let stats = aggregate(&form);

    print_timetable(&form, &grid);
    print_statistics(&stats);

    let csv_path = Path::new("timetable.csv");
    write_grid_to_csv(&grid, csv_path)?;
    println!("\nTimetable saved to {}", csv_path.display());

    Ok(())
}
