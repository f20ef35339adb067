//! PackBuilder command line front end.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use packbuilder_lib::commands::hud_cmds::{self, FeaturePick};
use packbuilder_lib::commands::{error_response, preview_cmds, validate_cmds};
use packbuilder_lib::services::config::ValidateConfig;
use packbuilder_lib::services::preview::PreviewRequest;
use packbuilder_lib::types::errors::CommandError;
use packbuilder_lib::types::pack::{FeatureKey, PackUpload};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "packbuilder")]
#[command(about = "Inspect resource packs, report conflicts and export HUD packs")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build manifests for the given pack archives and report conflicts
    Validate {
        #[arg(required = true)]
        packs: Vec<PathBuf>,
    },
    /// List HUD feature sources, or export a HUD pack when picks are given
    Hud {
        #[arg(required = true)]
        packs: Vec<PathBuf>,

        /// Feature choice as `feature=pack.zip`, repeatable
        #[arg(short, long = "pick", value_parser = parse_pick)]
        picks: Vec<FeaturePick>,

        /// Output archive for the exported pack
        #[arg(short, long, default_value = "hud-pack.zip")]
        output: PathBuf,
    },
    /// Request a preview build
    Preview {
        #[arg(long)]
        branch: Option<String>,

        #[arg(long)]
        bundle_id: Option<String>,
    },
}

fn parse_pick(s: &str) -> Result<FeaturePick, String> {
    let (feature, pack) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid pick '{s}'. Expected feature=pack.zip"))?;
    let feature = FeatureKey::parse(feature).ok_or_else(|| {
        let known: Vec<&str> = FeatureKey::ALL.iter().map(|f| f.as_str()).collect();
        format!("Unknown feature '{feature}'. Valid options: {}", known.join(", "))
    })?;
    if pack.trim().is_empty() {
        return Err(format!("Invalid pick '{s}'. Missing pack name"));
    }
    Ok(FeaturePick {
        feature,
        source_pack: pack.trim().to_string(),
    })
}

fn read_uploads(paths: &[PathBuf]) -> Result<Vec<PackUpload>> {
    paths
        .iter()
        .map(|path| {
            let bytes =
                std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| anyhow!("Invalid file name: {}", path.display()))?;
            Ok(PackUpload::new(filename, bytes))
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the failure the way the HTTP front end would and bail.
fn report(error: CommandError) -> anyhow::Error {
    let (status, body) = error_response(&error);
    match serde_json::to_string(&body) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{}", body.error),
    }
    anyhow!("request failed with status {status}")
}

async fn run_hud(
    packs: &[PathBuf],
    picks: Vec<FeaturePick>,
    output: &Path,
    config: &ValidateConfig,
) -> Result<()> {
    let uploads = read_uploads(packs)?;

    if picks.is_empty() {
        let options = hud_cmds::hud_candidates_cmd(uploads, config)
            .await
            .map_err(report)?;
        return print_json(&options);
    }

    let bytes = hud_cmds::export_hud_pack_cmd(uploads, picks, config)
        .await
        .map_err(report)?;
    std::fs::write(output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!("Wrote {} bytes to {}", bytes.len(), output.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = ValidateConfig::from_env();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let result = runtime.block_on(run(args.command, config));

    // Workers abandoned at the request deadline must not keep the process alive
    runtime.shutdown_background();
    result
}

async fn run(command: Command, config: ValidateConfig) -> Result<()> {
    match command {
        Command::Validate { packs } => {
            let uploads = read_uploads(&packs)?;
            let bundle = validate_cmds::validate_packs_cmd(uploads, &config)
                .await
                .map_err(report)?;
            print_json(&bundle)
        }
        Command::Hud {
            packs,
            picks,
            output,
        } => run_hud(&packs, picks, &output, &config).await,
        Command::Preview { branch, bundle_id } => {
            let body = serde_json::to_string(&PreviewRequest { branch, bundle_id })?;
            let build = preview_cmds::create_preview_cmd(&body)
                .await
                .map_err(report)?;
            print_json(&build)
        }
    }
}
