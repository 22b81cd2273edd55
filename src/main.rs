// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::convert::Infallible;
use std::io::Write;

use clap::Parser;
use jdlocal::{adjust, convert, night_of, JulianDate};

#[derive(Parser, Debug)]
#[command(
    name = "jdlocal",
    version,
    about = "Local calendar date (YYYY-MM-DD) of a UTC Julian Date at a given longitude",
    allow_negative_numbers = true
)]
struct Cli {
    /// Julian Date (UTC)
    #[arg(default_value_t = 2_451_552.540_97, value_parser = parse_leading_number)]
    julian_date: f64,

    /// Geographic longitude in degrees, east positive, within [-180, 180]
    #[arg(default_value_t = 17.045_35, value_parser = parse_leading_number)]
    longitude: f64,

    /// Print the date on which the observing night began (local noon to noon)
    #[arg(long)]
    night: bool,

    /// Print the full local date and time instead of the date only
    #[arg(short, long, conflicts_with = "night")]
    verbose: bool,
}

/// Longest leading prefix of `arg` that reads as a number, or `0.0`.
///
/// Mirrors C `atof`: `"17.03deg"` is `17.03` and `"abc"` is `0.0`.
fn parse_leading_number(arg: &str) -> Result<f64, Infallible> {
    let arg = arg.trim_start();
    let value = (1..=arg.len())
        .rev()
        .filter_map(|end| arg.get(..end))
        .find_map(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(0.0);
    Ok(value)
}

fn run(cli: &Cli) -> jdlocal::Result<String> {
    let jd = JulianDate::new(cli.julian_date);
    if cli.night {
        return Ok(night_of(jd, cli.longitude)?.to_string());
    }
    let local = convert(adjust(jd, cli.longitude)?);
    if cli.verbose {
        Ok(local.to_string())
    } else {
        Ok(jdlocal::format(&local))
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("off"));

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    // Invalid input is reported on stdout and still exits with status 0.
    let text = match run(&cli) {
        Ok(text) => text,
        Err(err) => err.to_string(),
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = write!(stdout, "{text}").and_then(|()| stdout.flush()) {
        log::error!("failed to write result: {err}");
    }
}
