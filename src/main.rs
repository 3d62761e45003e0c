// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{NaiveDate, Utc};
use std::env;

use jakal::{all_possible_wetons, is_valid_weton, CalendarEngine, JavaneseDate};

const USAGE: &str = "\
jakal - Javanese calendar

USAGE:
    jakal today
    jakal date <YYYY-MM-DD>
    jakal month <YYYY> <MM>
    jakal wetons
    jakal next <weton> [YYYY-MM-DD]
    jakal good-days <birth YYYY-MM-DD> <year>
    jakal ui";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(err) = run(&args) {
        eprintln!("❌ {:#}", err);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let engine = CalendarEngine::new();
    let today = Utc::now().date_naive();

    let cmd = match args.first() {
        Some(cmd) => cmd.as_str(),
        None => return run_ui_mode(engine, today),
    };

    match (cmd, &args[1..]) {
        ("today", []) => print_date(&engine.convert(today)),
        ("date", [date]) => print_date(&engine.convert(parse_date(date)?)),
        ("month", [year, month]) => {
            let year: i32 = year.parse().with_context(|| format!("Invalid year: {}", year))?;
            let month: u32 = month.parse().with_context(|| format!("Invalid month: {}", month))?;
            let data = engine.month_data(year, month)?;

            println!("📅 {}-{:02} ({} days)", data.year, data.month, data.total_days);
            for jd in &data.dates {
                print_row(jd);
            }
        }
        ("wetons", []) => {
            for weton in all_possible_wetons() {
                println!("{:<16} neptu {:>2}", weton.to_string(), weton.neptu());
            }
        }
        ("next", [weton, rest @ ..]) if rest.len() <= 1 => {
            let from = match rest.first() {
                Some(d) => parse_date(d)?,
                None => today,
            };
            let query = weton.replace('-', " ");
            if !is_valid_weton(&query) {
                bail!("Unknown weton: {}", weton);
            }
            let occ = engine
                .next_occurrence(from, &query)
                .ok_or_else(|| anyhow!("No occurrence of {} found", weton))?;

            println!("🔎 Next {} from {}", occ.weton, occ.from);
            println!("   {} ({} days)", occ.date, occ.days_until);
        }
        ("good-days", [birth, year]) => {
            let birth = parse_date(birth)?;
            let year: i32 = year.parse().with_context(|| format!("Invalid year: {}", year))?;
            let result = engine.good_days(birth, year)?;

            println!(
                "✨ {} good days in {} for {} (neptu {})",
                result.total_days,
                result.year,
                result.birth_weton,
                result.birth_weton.neptu()
            );
            for day in &result.good_days {
                print_row(&engine.convert(*day));
            }
        }
        ("ui", []) => run_ui_mode(engine, today)?,
        ("help" | "-h" | "--help", _) => println!("{}", USAGE),
        _ => bail!("Unrecognized command\n\n{}", USAGE),
    }

    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date (expected YYYY-MM-DD): {}", s))
}

fn print_date(jd: &JavaneseDate) {
    println!("📅 {}", jd.gregorian_date);
    println!("   Weton:       {}", jd.weton);
    println!("   Neptu:       {} ({} + {})", jd.neptu, jd.day.neptu(), jd.pasaran.neptu());
    println!("   Tahun Jawa:  {}", jd.javanese_year);
}

fn print_row(jd: &JavaneseDate) {
    println!(
        "{}  {:<7} {:<7} {:>2}",
        jd.gregorian_date,
        jd.day.name(),
        jd.pasaran.name(),
        jd.neptu
    );
}

#[cfg(feature = "tui")]
fn run_ui_mode(engine: CalendarEngine, today: NaiveDate) -> Result<()> {
    let mut app = ui::App::new(engine, today)?;
    ui::run_ui(&mut app)
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_engine: CalendarEngine, _today: NaiveDate) -> Result<()> {
    println!("{}", USAGE);
    eprintln!("\nTUI mode not available. Rebuild with: cargo build --features tui");
    Ok(())
}
