use anyhow::Context;
use clap::Parser;

use orbframe::conversion::{parse_dec, parse_ra};
use orbframe::converter::convert_elements;

fn parse_finite_angle(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("`{raw}` is not a finite angle"))
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert plane-of-sky orbital elements to the ecliptic frame"
)]
struct Cli {
    /// Right ascension of the reference pole (decimal degrees or `HH MM SS.SS`)
    #[arg(long, allow_hyphen_values = true)]
    ra: String,

    /// Declination of the reference pole (decimal degrees or `±DD MM SS.S`)
    #[arg(long, allow_hyphen_values = true)]
    dec: String,

    /// Plane-of-sky inclination in degrees (defaults to the pole's own value)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_finite_angle)]
    inclination: Option<f64>,

    /// Plane-of-sky ascending node in degrees (defaults to the pole's own value)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_finite_angle)]
    node: Option<f64>,

    /// Plane-of-sky argument of periapsis in degrees (defaults to the pole's own value)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_finite_angle)]
    arg_peri: Option<f64>,

    /// Apply the 180° periapsis convention shift used in exoplanet catalogues
    #[arg(long, default_value_t = false)]
    exoplanet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let ra = parse_ra(&cli.ra).with_context(|| format!("invalid right ascension `{}`", cli.ra))?;
    let dec = parse_dec(&cli.dec).with_context(|| format!("invalid declination `{}`", cli.dec))?;

    let (inclination, node, arg_peri) =
        convert_elements(ra, dec, cli.inclination, cli.node, cli.arg_peri, cli.exoplanet);

    println!("Pole: RA {ra:.6}°  Dec {dec:.6}°");
    println!("Ecliptic elements:");
    println!("  Inclination:           {inclination:.6}");
    println!("  Ascending node:        {node:.6}");
    println!("  Argument of periapsis: {arg_peri:.6}");

    Ok(())
}
