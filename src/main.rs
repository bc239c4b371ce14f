// Entry point: runs one firefly population or a radius sweep and writes plots.
use std::error::Error;
use std::fs::create_dir_all;
use std::path::Path;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use fireflies::cli::Args;
use fireflies::config::AppConfig;
use fireflies::life::metrics::{CollectionMode, amplitude};
use fireflies::life::population::Population;
use fireflies::{plot, sweep};

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("fireflies failed: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut cfg = AppConfig::load_or_default(&args.config);
    if let Some(seed) = args.seed {
        cfg.simulation.seed = seed;
    }
    if let Some(radius) = args.radius {
        cfg.simulation.radius = radius;
    }

    let out_dir = Path::new(&args.out);
    if !args.no_plot {
        create_dir_all(out_dir)?;
    }

    if args.sweep {
        run_sweep(&cfg, out_dir, !args.no_plot)
    } else {
        run_single(&cfg, out_dir, !args.no_plot)
    }
}

fn run_single(cfg: &AppConfig, out_dir: &Path, plots: bool) -> Result<(), Box<dyn Error>> {
    let sim = &cfg.simulation;
    let mut pop = Population::new(sim.population_params())?;
    info!(
        "Running {} fireflies, radius={} horizon={} seed={}",
        pop.len(),
        pop.radius(),
        pop.horizon(),
        pop.seed()
    );

    let series = pop.run_to_horizon(CollectionMode::All)?;
    // Same samples LastWindow(window) would have kept; whole run if it is shorter.
    let window = CollectionMode::LastWindow(sim.window)
        .sample_count(series.len())
        .unwrap_or(series.len());
    let steady = series.tail(window);
    info!(
        "Finished at tick {}: on_count range [{}, {}], last-window amplitude {:.2}",
        pop.tick(),
        series.min().unwrap_or(0),
        series.max().unwrap_or(0),
        amplitude(&steady.counts).unwrap_or(0.0)
    );

    if plots {
        let on_count_path = out_dir.join("on_count.png");
        plot::render_on_count(&on_count_path, &series, pop.len())?;
        let field_path = out_dir.join("field_final.png");
        plot::render_field(&field_path, &pop)?;
        info!("Saved plots to {}", out_dir.display());
    }
    Ok(())
}

fn run_sweep(cfg: &AppConfig, out_dir: &Path, plots: bool) -> Result<(), Box<dyn Error>> {
    let params = cfg.sweep_params();
    let report = sweep::run_sweep(&params)?;
    if let Some(best) = report.best() {
        info!(
            "Best radius {:.2} (mean amplitude {:.3})",
            best.radius, best.mean_amplitude
        );
    }
    if plots {
        let path = out_dir.join("sweep_amplitude.png");
        plot::render_sweep(&path, &report)?;
        info!("Saved sweep plot to {}", path.display());
    }
    Ok(())
}
