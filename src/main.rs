use pokemon_set_generator::{run, CliOptions, GeneratorOptions, OutputFormat};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- --input candidates.json [--registry registry.json] [--seed SEED] \
[--output sets.json] [--format json|showdown] [--team N] [--max-attempts N] [--no-ev-cap]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut input_path = PathBuf::from("candidates.json");
    let mut registry_path = None;
    let mut seed = 0u64;
    let mut output_path = PathBuf::from("sets.json");
    let mut format = OutputFormat::Json;
    let mut team_size = None;
    let mut generator = GeneratorOptions::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                input_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--input requires a path (e.g. --input candidates.json)")
                })?;
            }
            "--registry" => {
                registry_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--registry requires a path (e.g. --registry registry.json)")
                })?);
            }
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                seed = val.parse()?;
            }
            "--output" => {
                output_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output sets.json)")
                })?;
            }
            "--format" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--format requires json or showdown"))?;
                format = match val.to_ascii_lowercase().as_str() {
                    "json" => OutputFormat::Json,
                    "showdown" => OutputFormat::Showdown,
                    other => anyhow::bail!("Unknown format {other} (use json or showdown)"),
                };
            }
            "--team" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--team requires a number"))?;
                team_size = Some(val.parse()?);
            }
            "--max-attempts" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--max-attempts requires a number"))?;
                generator.max_attempts = val.parse()?;
            }
            "--no-ev-cap" => generator.enforce_ev_total = false,
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(CliOptions {
        input_path,
        registry_path,
        seed,
        output_path,
        format,
        team_size,
        generator,
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pokemon_set_generator=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    let opts = parse_args()?;
    run(opts)
}
