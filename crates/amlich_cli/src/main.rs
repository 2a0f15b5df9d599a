use std::path::PathBuf;

use amlich_rs::{
    ALL_ELEMENTS, Calendar, CalendarConfig, CivilDate, DayInfo, Element, LunarDate, SolarTermEvent,
    element_compatibility, new_moon_time, solar_term_crossing, winter_solstice,
};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "amlich", about = "Vietnamese lunisolar calendar (âm lịch) CLI")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// UTC offset in hours (overrides the config; default 7)
    #[arg(long, global = true, allow_hyphen_values = true)]
    tz: Option<f64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lunar date of a civil date
    Convert {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (hh:mm), default noon
        #[arg(long)]
        time: Option<String>,
    },
    /// Civil date of a lunar date
    ToSolar {
        /// Lunar year
        #[arg(long)]
        year: i32,
        /// Lunar month (1-12)
        #[arg(long)]
        month: u8,
        /// Lunar day (1-30)
        #[arg(long)]
        day: u8,
        /// The leap repetition of the month
        #[arg(long)]
        leap: bool,
    },
    /// Lunar date, Can Chi, solar term, mansion and moon phase of a day
    Day {
        /// Civil date (YYYY-MM-DD or YYYY-MM-DDThh:mm)
        #[arg(long)]
        date: String,
    },
    /// One line per day for consecutive days
    Scan {
        /// First civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Number of days
        #[arg(long, default_value = "30")]
        days: u32,
    },
    /// Winter solstice of a year
    Solstice {
        #[arg(long)]
        year: i32,
    },
    /// Crossing of a solar term in a year
    Term {
        #[arg(long)]
        year: i32,
        /// Term index (0 = Xuân phân at 0 deg, 18 = Đông chí at 270 deg)
        #[arg(long)]
        index: u8,
    },
    /// New Moon of a lunation index (0 = January 2000)
    NewMoon {
        #[arg(long, allow_hyphen_values = true)]
        k: i64,
    },
    /// Relation between two elements (Kim, Mộc, Thủy, Hỏa, Thổ or English)
    Compat { a: String, b: String },
}

fn build_calendar(config: Option<&PathBuf>, tz: Option<f64>) -> Calendar {
    let mut cfg = match config {
        Some(path) => CalendarConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }),
        None => CalendarConfig::default(),
    };
    if let Some(tz) = tz {
        cfg.timezone_offset_hours = tz;
    }
    info!(?cfg, "calendar config");
    Calendar::new(cfg).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_date(s: &str) -> CivilDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_element(s: &str) -> Element {
    let lower = s.to_lowercase();
    ALL_ELEMENTS
        .into_iter()
        .find(|e| {
            e.name().to_lowercase() == lower || format!("{e:?}").to_lowercase() == lower
        })
        .unwrap_or_else(|| {
            eprintln!("Invalid element: {s}");
            eprintln!("Valid: Kim, Mộc, Thủy, Hỏa, Thổ (or Metal, Wood, Water, Fire, Earth)");
            std::process::exit(1);
        })
}

fn print_event(label: &str, ev: &SolarTermEvent, tz: f64) {
    let local = CivilDate::from_julian_day(ev.jd, tz);
    println!("{label}: {local} (UTC{tz:+}), JD {:.5} UT", ev.jd);
    println!(
        "  {} at {:.0} deg{}",
        ev.term.name(),
        ev.term.longitude_deg(),
        if ev.approximate { " (approximate)" } else { "" }
    );
}

fn print_day(info: &DayInfo) {
    let lunar = &info.lunar;
    let cc = &info.sexagenary;
    println!("Civil:         {}", info.civil);
    println!(
        "Lunar:         {} ({} days in month{})",
        lunar.date,
        lunar.month_length,
        if lunar.low_confidence { ", low confidence" } else { "" }
    );
    println!("Year:          {} ({})", cc.year, cc.zodiac.name());
    println!(
        "Nạp Âm:        {} ({})",
        cc.year_na_am.name(),
        cc.year_na_am.element().name()
    );
    println!("Month:         {}", cc.month);
    println!("Day:           {}", cc.day);
    println!("Hour:          {}", cc.hour);
    println!("Solar term:    {}", info.solar_term.name());
    println!(
        "Mansion:       {} ({})",
        info.constellation.name(),
        if info.constellation.is_auspicious() { "auspicious" } else { "inauspicious" }
    );
    println!("Moon:          {}", info.moon_phase.name());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let calendar = build_calendar(cli.config.as_ref(), cli.tz);
    let tz = calendar.config().timezone_offset_hours;

    match cli.command {
        Commands::Convert { date, time } => {
            let text = match time {
                Some(t) => format!("{date}T{t}"),
                None => date,
            };
            let civil = parse_date(&text);
            match calendar.convert_date(&civil) {
                Ok(info) => {
                    println!("{civil} -> {}", info.date);
                    println!(
                        "  month starts day {} ({} days), JD {:.5} UT",
                        info.month_start, info.month_length, info.julian_day
                    );
                    if info.low_confidence {
                        println!("  outside the confident year range");
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::ToSolar {
            year,
            month,
            day,
            leap,
        } => {
            let lunar = LunarDate::new(year, month, day, leap);
            match calendar.to_solar(&lunar) {
                Ok(civil) => println!(
                    "{lunar} -> {:04}-{:02}-{:02}",
                    civil.year, civil.month, civil.day
                ),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Day { date } => match calendar.day_info(&parse_date(&date)) {
            Ok(info) => print_day(&info),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },

        Commands::Scan { date, days } => {
            for result in calendar.scan(&parse_date(&date), days) {
                match result {
                    Ok(info) => println!(
                        "{:04}-{:02}-{:02}  {:>10}  {:<12} {:<12} {}",
                        info.civil.year,
                        info.civil.month,
                        info.civil.day,
                        info.lunar.date.to_string(),
                        info.sexagenary.day.to_string(),
                        info.solar_term.name(),
                        info.constellation.name()
                    ),
                    Err(e) => {
                        eprintln!("{e}");
                        std::process::exit(1);
                    }
                }
            }
        }

        Commands::Solstice { year } => {
            print_event("Winter solstice", &winter_solstice(year), tz);
        }

        Commands::Term { year, index } => match solar_term_crossing(year, index) {
            Ok(ev) => print_event("Solar term", &ev, tz),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },

        Commands::NewMoon { k } => {
            let jd = new_moon_time(k);
            let local = CivilDate::from_julian_day(jd, tz);
            println!("New Moon k={k}: {local} (UTC{tz:+}), JD {jd:.5} UT");
        }

        Commands::Compat { a, b } => {
            let (a, b) = (parse_element(&a), parse_element(&b));
            let relation = element_compatibility(a, b);
            println!("{} -> {}: {}", a.name(), b.name(), relation.name());
        }
    }
}
