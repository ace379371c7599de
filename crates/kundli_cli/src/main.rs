use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use kundli_bodies::Body;
use kundli_place::Gazetteer;
use kundli_rs::{BirthInput, ChartConfig, ChartContext, generate_chart};
use kundli_time::{civil_to_utc, parse_clock_time, parse_date};
use kundli_vedic_base::{
    ChartSystem, ayanamsha_at_jd, celestial_longitude, deg_to_dms, nakshatra_from_longitude,
    rashi_from_longitude,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kundli", about = "Kundli birth-chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full birth chart as JSON
    Chart {
        /// Name of the native
        #[arg(long, required_unless_present = "input")]
        name: Option<String>,
        /// Birth date (YYYY-MM-DD)
        #[arg(long, required_unless_present = "input")]
        date: Option<String>,
        /// Local birth time (HH:MM); omit when unknown
        #[arg(long, default_value = "")]
        time: String,
        /// Birth place, e.g. "Madhubani, Bihar, India"
        #[arg(long, required_unless_present = "input")]
        place: Option<String>,
        /// Zodiac: vedic (default) or western
        #[arg(long, default_value = "vedic")]
        system: ChartSystem,
        /// Read birth details from a JSON file instead
        #[arg(long, conflicts_with_all = ["name", "date", "place"])]
        input: Option<PathBuf>,
        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Rashi from a longitude
    Rashi {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from a longitude
    Nakshatra {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// Lahiri ayanamsha at a Julian Date
    Ayanamsha {
        /// Julian Date (UT)
        #[arg(long)]
        jd: f64,
    },
    /// Longitude of one body at a UTC date and time
    Longitude {
        /// Body name, English or Sanskrit (e.g. Mars, Mangal)
        body: Body,
        /// UTC date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// UTC time (HH:MM)
        #[arg(long, default_value = "00:00")]
        time: String,
        /// Zodiac: vedic (default) or western
        #[arg(long, default_value = "vedic")]
        system: ChartSystem,
    },
    /// Resolve a birth place to coordinates and timezone
    Place {
        /// Free-text place name
        name: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            name,
            date,
            time,
            place,
            system,
            input,
            config,
            pretty,
        } => {
            let input = match input {
                Some(path) => {
                    let text = read_file(&path);
                    serde_json::from_str::<BirthInput>(&text)
                        .unwrap_or_else(|e| fail(&format!("{}: {e}", path.display())))
                }
                None => BirthInput::new(
                    name.unwrap_or_default(),
                    date.unwrap_or_default(),
                    time,
                    place.unwrap_or_default(),
                    system,
                ),
            };
            let config = match config {
                Some(path) => {
                    ChartConfig::from_json(&read_file(&path)).unwrap_or_else(|e| fail(&e.to_string()))
                }
                None => ChartConfig::default(),
            };
            let ctx = ChartContext::new(config, Gazetteer::builtin());
            let chart = generate_chart(&input, &ctx).unwrap_or_else(|e| fail(&e.to_string()));
            for w in &chart.warnings {
                eprintln!("warning: {w}");
            }
            let json = if pretty {
                serde_json::to_string_pretty(&chart)
            } else {
                serde_json::to_string(&chart)
            };
            match json {
                Ok(s) => println!("{s}"),
                Err(e) => fail(&e.to_string()),
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let r = info.rashi;
            println!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                r.name(),
                r.western_name(),
                info.dms,
                info.degrees_in_rashi
            );
            println!(
                "Element: {}, Quality: {}, Lord: {}",
                r.element().name(),
                r.quality().name(),
                r.lord().name()
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (#{}) - Pada {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index + 1,
                info.pada,
                info.degrees_in_nakshatra
            );
            println!(
                "Lord: {}, Deity: {}",
                info.nakshatra.lord().name(),
                info.nakshatra.deity()
            );
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            let sign = if deg < 0.0 { "-" } else { "" };
            println!(
                "{sign}{}° {}' {:.4}\"",
                dms.degrees, dms.minutes, dms.seconds
            );
        }

        Commands::Ayanamsha { jd } => {
            let aya = ayanamsha_at_jd(jd);
            println!("Lahiri ayanamsha: {aya:.6} deg ({})", deg_to_dms(aya));
        }

        Commands::Longitude {
            body,
            date,
            time,
            system,
        } => {
            let date = parse_date(&date).unwrap_or_else(|e| fail(&e.to_string()));
            let time = parse_clock_time(&time).unwrap_or_else(|e| fail(&e.to_string()));
            let utc = civil_to_utc(date, time, chrono_tz::UTC).unwrap_or_else(|e| fail(&e.to_string()));
            let jd = utc.to_julian_day();
            let lon = celestial_longitude(body, jd, system);
            let info = rashi_from_longitude(lon.degrees);
            println!("{} ({}) at {utc}, JD {jd:.6}", body.name(), system);
            println!(
                "Longitude: {:.4} deg {} - {} {}",
                lon.degrees,
                lon.zodiac,
                info.rashi.name(),
                info.dms
            );
        }

        Commands::Place { name } => {
            let resolved = Gazetteer::builtin().resolve(&name);
            println!("Matched:    {}", resolved.matched_name);
            println!("Resolution: {}", resolved.resolution);
            println!(
                "Location:   {:.4}, {:.4}",
                resolved.coordinate.latitude, resolved.coordinate.longitude
            );
            println!("Timezone:   {}", resolved.timezone.name());
        }
    }
}

fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("cannot read {}: {e}", path.display())))
}

fn fail(msg: &str) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}
