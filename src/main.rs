use clap::{Parser, Subcommand};
use outlet_locator::outlet::{find_by_id, search_by_name};
use outlet_locator::proximity::{detect_proximity, outlets_within};
use outlet_locator::query::answer;
use outlet_locator::{logging, server, Coordinates, Outlet, OutletClient, Settings};

/// Outlet Locator — outlet neighbours and canned outlet questions.
///
/// Every command fetches the outlet list fresh from `{api}/outlets`.
///
/// Examples:
///   outlets ask "Which outlets close the latest?"
///   outlets ask how many outlets are in Bangsar
///   outlets proximity --radius 3
///   outlets nearby --lat 3.1185 --lon 101.6772 --radius 2
///   outlets --api http://10.0.0.5:8000 serve --port 8080
#[derive(Parser)]
#[command(name = "outlets", version, about, long_about = None)]
struct Cli {
    /// Base URL of the outlet API (overrides settings and OUTLETS_API_URL).
    #[arg(long, global = true)]
    api: Option<String>,

    /// Debug logging.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a question about the outlets.
    Ask {
        /// Free-text question; words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// List outlet pairs within the proximity radius of each other.
    Proximity {
        /// Radius in km. Defaults to the configured radius (5 km).
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Outlets within a radius of a point, closest first.
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Radius in km. Defaults to the configured radius (5 km).
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Outlets whose name contains the given text.
    Search { name: String },
    /// Show one outlet by id.
    Show { id: i64 },
    /// Serve the map page and JSON API.
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long, short = 'p')]
        port: Option<u16>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = Settings::load()
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        })
        .with_api_base(cli.api.clone());
    tracing::debug!("Settings: {:?}", settings);

    let client = OutletClient::new(settings.api_base.clone());

    match cli.command {
        Command::Ask { ref query } => {
            let query = query.join(" ");
            let outlets = fetch(&client);
            let answer = answer(&query, &outlets);
            if cli.json {
                print_json(&answer);
            } else {
                println!("{}", answer.render_text());
            }
        }
        Command::Proximity { radius } => {
            let radius = radius_or_default(radius, &settings);
            let flags = detect_proximity(&fetch(&client), radius);
            if cli.json {
                print_json(&flags);
            } else if flags.is_empty() {
                println!("No outlets within {} km of each other.", radius);
            } else {
                for f in &flags {
                    println!(
                        "{} (#{}) is {:.2} km from {} (#{})",
                        f.near_name, f.near_id, f.distance_km, f.anchor_name, f.anchor_id
                    );
                }
            }
        }
        Command::Nearby { lat, lon, radius } => {
            let point = Coordinates::new(lat, lon);
            if !point.in_range() {
                eprintln!("Error: Invalid coordinates. Lat: -90..90, Lon: -180..180");
                std::process::exit(1);
            }
            let radius = radius_or_default(radius, &settings);
            let found = outlets_within(&fetch(&client), point, radius);
            if cli.json {
                print_json(&found);
            } else if found.is_empty() {
                println!("No results found.");
            } else {
                for n in &found {
                    println!("{:>6.2} km  {}  ({})", n.distance_km, n.outlet.name, n.outlet.address);
                }
            }
        }
        Command::Search { ref name } => {
            let outlets = fetch(&client);
            let hits = search_by_name(&outlets, name);
            if cli.json {
                print_json(&hits);
            } else if hits.is_empty() {
                println!("No results found.");
            } else {
                for o in hits {
                    println!("#{} {}", o.id, o.name);
                }
            }
        }
        Command::Show { id } => {
            let outlets = fetch(&client);
            let Some(outlet) = find_by_id(&outlets, id) else {
                eprintln!("Error: Outlet not found");
                std::process::exit(1);
            };
            if cli.json {
                print_json(outlet);
            } else {
                print_outlet(outlet);
            }
        }
        Command::Serve { ref host, port } => {
            let settings = Settings {
                host: host.clone().unwrap_or(settings.host.clone()),
                port: port.unwrap_or(settings.port),
                ..settings
            };
            let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
                eprintln!("Error: Cannot start runtime: {}", e);
                std::process::exit(1);
            });
            if let Err(e) = runtime.block_on(server::start(&settings)) {
                eprintln!("Server error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn fetch(client: &OutletClient) -> Vec<Outlet> {
    client.fetch_outlets().unwrap_or_else(|e| {
        tracing::debug!("Fetch from {} failed: {:?}", client.endpoint(), e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    })
}

fn radius_or_default(radius: Option<f64>, settings: &Settings) -> f64 {
    match radius {
        Some(r) if r.is_finite() && r >= 0.0 => r,
        Some(r) => {
            eprintln!("Error: Invalid radius '{}'", r);
            std::process::exit(1);
        }
        None => settings.proximity_radius_km,
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_outlet(o: &Outlet) {
    println!("{}", o.name);
    println!("  Address:         {}", o.address);
    println!("  Operating Hours: {}", o.operating_hours);
    match o.coordinates() {
        Some(c) => println!("  Coordinates:     {:.4}, {:.4}", c.lat, c.lon),
        None => println!("  Coordinates:     (not geocoded)"),
    }
    if !o.waze_link.is_empty() {
        println!("  Waze:            {}", o.waze_link);
    }
}
