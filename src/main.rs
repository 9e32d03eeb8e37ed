mod core;
mod data;
mod graph;
mod platform;

use std::path::PathBuf;
use std::process::exit;

use data::dataset::Dataset;
use data::table::parse_delimited;
use graph::controller::GraphController;
use platform::surface_json::JsonSurface;

struct Args {
    data_path: Option<PathBuf>,
    table_path: Option<PathBuf>,
    delimiter: char,
    pretty: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        data_path: None,
        table_path: None,
        delimiter: ',',
        pretty: false,
    };

    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--data" if i + 1 < argv.len() => {
                i += 1;
                args.data_path = Some(PathBuf::from(&argv[i]));
            }
            "--table" if i + 1 < argv.len() => {
                i += 1;
                args.table_path = Some(PathBuf::from(&argv[i]));
            }
            "--delimiter" if i + 1 < argv.len() => {
                i += 1;
                args.delimiter = argv[i].chars().next().unwrap_or(',');
            }
            "--pretty" => args.pretty = true,
            _ => {}
        }
        i += 1;
    }

    args
}

fn load_dataset(args: &Args) -> Result<Dataset, String> {
    if let Some(path) = &args.data_path {
        return Dataset::load(path).map_err(|e| format!("{}: {}", path.display(), e));
    }
    if let Some(path) = &args.table_path {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        let table = parse_delimited(&text, args.delimiter);
        return Dataset::from_table(&table).map_err(|e| format!("{}: {}", path.display(), e));
    }
    Err(String::new())
}

fn main() {
    env_logger::init();

    let args = parse_args();

    let dataset = match load_dataset(&args) {
        Ok(ds) => ds,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("error: {}", msg);
            }
            eprintln!("Usage: depot-map --data <dataset.json> [--pretty]");
            eprintln!("       depot-map --table <file> [--delimiter <c>] [--pretty]");
            exit(1);
        }
    };

    let stdout = std::io::stdout();
    let surface = JsonSurface::new(stdout.lock(), args.pretty);
    let mut controller = GraphController::new(surface);

    let resources = dataset.resources();
    let outcome = controller.update(|inputs| {
        inputs.coordinates = dataset.coordinates.clone();
        inputs.resources = resources;
    });

    match outcome {
        Ok(graph::controller::RebuildOutcome::Rebuilt) => {}
        Ok(_) => {
            log::warn!("dataset is empty; nothing to render");
        }
        Err(e) => {
            eprintln!("error: {}", e);
            exit(1);
        }
    }

    controller.dispose();
}
