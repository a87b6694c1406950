//! Prints a color gradient as a row of truecolor blocks.
//!
//! Usage:
//!   cargo run --bin gradient_echo -- --begin '#231d2f' --end '#15ff0c' --steps 12
//!
//! Add `--model hsv` or `--model hsl` to interpolate in another color model,
//! and `--print` to list the hex code of every step. Set `RUST_LOG=debug` to
//! see the resolved options.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use heapless::Vec;
use rgb_gradient::{ColorModel, Rgb, gradient_steps_in};

/// Largest gradient the tool renders.
const MAX_STEPS: usize = 1024;

/// Print a color gradient to a truecolor terminal.
#[derive(Parser, Debug)]
#[command(name = "gradient_echo")]
#[command(about = "Print a color gradient as ANSI truecolor blocks")]
struct Args {
    /// First color, as #RGB or #RRGGBB
    #[arg(long, value_parser = parse_color)]
    begin: Rgb,

    /// Last color, as #RGB or #RRGGBB
    #[arg(long, value_parser = parse_color)]
    end: Rgb,

    /// Number of steps after the first color (default: 1)
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    steps: i32,

    /// Color model to interpolate in
    #[arg(long, value_enum, default_value_t = Model::Rgb)]
    model: Model,

    /// Also print the hex code of every step
    #[arg(long)]
    print: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Model {
    Rgb,
    Hsv,
    Hsl,
}

impl From<Model> for ColorModel {
    fn from(model: Model) -> Self {
        match model {
            Model::Rgb => ColorModel::Rgb,
            Model::Hsv => ColorModel::Hsv,
            Model::Hsl => ColorModel::Hsl,
        }
    }
}

fn parse_color(s: &str) -> Result<Rgb, String> {
    s.parse().map_err(|e| format!("Invalid color: {}", e))
}

/// One `█` per color in its own foreground color, then an attribute reset.
fn render_blocks(colors: &[Rgb]) -> String {
    let mut line: String = colors
        .iter()
        .map(|c| format!("\x1b[38;2;{};{};{}m█", c.r(), c.g(), c.b()))
        .collect();
    line.push_str("\x1b[m");
    line
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!(
        "{} -> {} in {} steps ({:?})",
        args.begin,
        args.end,
        args.steps,
        args.model
    );

    let steps: Vec<Rgb, MAX_STEPS> =
        gradient_steps_in(args.model.into(), args.begin, args.end, args.steps)
            .context("failed to generate gradient")?;
    log::info!("generated {} colors", steps.len());

    println!("{}", render_blocks(&steps));
    if args.print {
        for color in &steps {
            println!("{}", color);
        }
    }

    Ok(())
}
