use crate::cli::args::{Cli, Commands, ExtractArgs};
use crate::extractor::{region_name, BoundsExtractor, ExtractionOutcome, SelectionPolicy};
use crate::models::BoundsRecord;
use crate::pbf::PbfReader;
use crate::settings::ExtractorConfig;
use crate::utils::Console;
use anyhow::Context;
use std::process::ExitCode;
use tracing::{debug, error};

/// How a command ended.
///
/// Extraction never blocks the surrounding pipeline: its failures are
/// `SoftFailure` and still exit with success. Only the inspection commands
/// report `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    SoftFailure,
    Failed,
}

impl RunStatus {
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunStatus::Completed | RunStatus::SoftFailure => ExitCode::SUCCESS,
            RunStatus::Failed => ExitCode::FAILURE,
        }
    }
}

impl ExtractArgs {
    /// Environment configuration with command line overrides applied.
    pub fn resolve(&self) -> crate::Result<ExtractorConfig> {
        let mut config = ExtractorConfig::from_env()?;

        if let Some(dir) = &self.pbf_dir {
            config.pbf_dir = dir.clone();
        }
        if let Some(file) = &self.bounds_file {
            config.bounds_file = file.clone();
        }
        if self.require_single {
            config.selection = SelectionPolicy::RequireSingle;
        }

        Ok(config)
    }
}

pub fn run(cli: Cli) -> RunStatus {
    let console = Console::new(cli.quiet);
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Extract(ExtractArgs::default()));
    let soft = matches!(command, Commands::Extract(_));

    match execute(command, console) {
        Ok(()) => RunStatus::Completed,
        Err(e) => {
            console.failure(format_args!("{:#}", e));
            error!(error = ?e, "command failed");
            if soft {
                RunStatus::SoftFailure
            } else {
                RunStatus::Failed
            }
        }
    }
}

fn execute(command: Commands, console: Console) -> anyhow::Result<()> {
    match command {
        Commands::Extract(args) => {
            let config = args
                .resolve()
                .context("Failed to extract bounds: invalid configuration")?;
            debug!(?config, "resolved configuration");

            let extractor = BoundsExtractor::new(config).with_console(console);
            let outcome = extractor
                .extract()
                .context("Failed to extract bounds")?;

            match outcome {
                ExtractionOutcome::Written { .. } => debug!("extraction complete"),
                ExtractionOutcome::NoInput { .. } | ExtractionOutcome::NoValidBox { .. } => {
                    debug!("extraction finished without writing a bounds file")
                }
            }
        }

        Commands::Inspect { file, json } => {
            let mut reader = PbfReader::open(&file)
                .with_context(|| format!("Failed to open {}", file.display()))?;
            let header = reader
                .header()
                .with_context(|| format!("Failed to read PBF header of {}", file.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(header)?);
            } else {
                println!("File: {}", file.display());
                println!("Region: {}", region_name(&file));
                print!("{}", header.summary());
            }
        }

        Commands::Show { bounds_file } => {
            let path = match bounds_file {
                Some(path) => path,
                None => ExtractorConfig::from_env()?.bounds_file,
            };

            let record = BoundsRecord::load(&path)
                .with_context(|| format!("Failed to read bounds file {}", path.display()))?;
            let bbox = record
                .bounding_box()
                .with_context(|| format!("Bounds file {} has an invalid viewbox", path.display()))?;

            println!("{}", record.to_pretty_json()?);
            let (lon, lat) = bbox.center();
            console.step(format_args!("Center: {},{}", lon, lat));
        }
    }

    Ok(())
}
