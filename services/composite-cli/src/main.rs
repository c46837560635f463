//! AHI RGB composite tool.
//!
//! Lists the composite catalog, describes recipes and evaluates a recipe
//! on constant band values, e.g.
//!
//! ```text
//! ahi-rgb eval night-microphysics --band 7=281 --band 13=291 --band 15=290
//! ```

mod commands;

use anyhow::Result;
use band_grid::InterpolationMethod;
use clap::{Parser, Subcommand};
use rgb_composite::{AhiBand, CompositeConfig, Compositor, Recipe};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ahi-rgb")]
#[command(about = "False-color RGB composites from Himawari AHI bands")]
struct Args {
    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Interpolation for resampling coarse bands (nearest, bilinear, cubic)
    #[arg(long, env = "COMPOSITE_INTERPOLATION", default_value = "bilinear")]
    interpolation: String,

    /// Let rescaled values run past 0 and 255 (overrides COMPOSITE_CLAMP)
    #[arg(long)]
    no_clamp: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all composite recipes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the band formulas of one recipe
    Describe {
        /// Recipe name or slug (e.g. AHIDustRGB or dust)
        recipe: Recipe,
    },

    /// Evaluate a recipe on constant band values
    Eval {
        /// Recipe name or slug
        recipe: Recipe,

        /// Band value as BAND=VALUE (reflectance % or brightness temperature K)
        #[arg(short, long = "band", value_parser = commands::parse_band_value, required = true)]
        bands: Vec<(AhiBand, f32)>,

        /// Grid width for the constant bands
        #[arg(long, default_value = "1")]
        width: usize,

        /// Grid height for the constant bands
        #[arg(long, default_value = "1")]
        height: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Args {
    /// Composite settings from the command line, with `COMPOSITE_CLAMP`
    /// read from the environment unless `--no-clamp` is given.
    fn composite_config(&self) -> CompositeConfig {
        let mut config = CompositeConfig::from_env();
        config.interpolation = InterpolationMethod::from_str(&self.interpolation);
        if self.no_clamp {
            config.clamp = false;
        }
        config
    }
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = args.composite_config();
    debug!(
        interpolation = %config.interpolation,
        clamp = config.clamp,
        "Loaded composite configuration"
    );

    let compositor = Compositor::new(config);

    let output = match args.command {
        Command::List { json } => commands::list(json)?,
        Command::Describe { recipe } => commands::describe(recipe)?,
        Command::Eval {
            recipe,
            bands,
            width,
            height,
            json,
        } => commands::eval(&compositor, recipe, &bands, width, height, json)?,
    };

    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation_flag() {
        let args =
            Args::try_parse_from(["ahi-rgb", "--interpolation", "cubic", "--no-clamp", "list"])
                .unwrap();
        let config = args.composite_config();
        assert_eq!(config.interpolation, InterpolationMethod::Cubic);
        assert!(!config.clamp);
    }

    #[test]
    fn test_eval_bands_parsed() {
        let args =
            Args::try_parse_from(["ahi-rgb", "eval", "dust", "-b", "11=276", "--band", "B13=279"])
                .unwrap();
        match args.command {
            Command::Eval { recipe, bands, .. } => {
                assert_eq!(recipe, Recipe::Dust);
                assert_eq!(bands, vec![(AhiBand::B11, 276.0), (AhiBand::B13, 279.0)]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
