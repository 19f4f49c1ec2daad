use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use voronoi_raster::{
    Error, VoronoiRasterBuilder, DEFAULT_HEIGHT, DEFAULT_OUTPUT_PATH, DEFAULT_SEED_COUNT, DEFAULT_SEED_RADIUS, DEFAULT_WIDTH,
};

/// Renders a random Voronoi diagram to a binary PPM image.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Opts {
    /// Image width in pixels
    #[clap(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Image height in pixels
    #[clap(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Number of Voronoi sites
    #[clap(long = "seeds", default_value_t = DEFAULT_SEED_COUNT)]
    seed_count: usize,

    /// Radius of the disc marking each site
    #[clap(long, default_value_t = DEFAULT_SEED_RADIUS)]
    radius: u16,

    /// Destination file
    #[clap(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Seed for site placement, the current time is used when absent
    #[clap(long)]
    rng_seed: Option<u64>,

    /// Spread rasterization across all cores
    #[clap(long)]
    parallel: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    log::debug!("{:?}", opts);

    let mut builder = VoronoiRasterBuilder::default()
        .set_dimensions(opts.width, opts.height)
        .set_seed_count(opts.seed_count)
        .set_seed_radius(opts.radius)
        .set_parallel(opts.parallel);

    if let Some(rng_seed) = opts.rng_seed {
        builder = builder.set_rng_seed(rng_seed);
    }

    match builder.build().and_then(|raster| raster.save(&opts.output)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            // stderr gets the reason even when the log filter is off
            let _ = report_failure(&e, io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}

fn report_failure<W: Write>(e: &Error, mut out: W) -> io::Result<()> {
    writeln!(out, "error: {}", e)
}

#[cfg(test)]
mod test {
    use voronoi_raster::ConfigError;

    use super::*;

    #[test]
    fn failure_is_reported_test() {
        let mut out = vec![];
        report_failure(&Error::Config(ConfigError::NoSeeds), &mut out).expect("Write expected");
        assert_eq!(String::from_utf8(out).expect("UTF-8 expected"), "error: invalid configuration: at least one seed is required\n");
    }

    #[test]
    fn options_reach_builder_test() {
        let opts = Opts::parse_from(["voronoi-raster", "--seeds", "0"]);
        assert_eq!(opts.seed_count, 0);
        assert!(matches!(
            VoronoiRasterBuilder::default().set_seed_count(opts.seed_count).build(),
            Err(Error::Config(ConfigError::NoSeeds))
        ));
    }
}
