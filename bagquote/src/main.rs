use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bagquote::config::QuoteConfig;
use bagquote::io;
use bagquote::io::cli::Cli;
use bagquote::io::output::QuoteOutput;
use bagquote::io::{format_amount, read_config, read_order};
use bagquote::quote_job::QuoteJob;
use clap::Parser as ClapParser;
use log::{error, info, warn};

fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(e) = io::init_logger(args.log_level) {
        eprintln!("could not initialize logger: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[MAIN] {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<()> {
    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            QuoteConfig::default()
        }
        Some(config_file) => read_config(&config_file)?,
    };

    info!("Successfully parsed QuoteConfig: {config:?}");

    let ext_order = read_order(&args.input_file)?;
    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let job = QuoteJob::import(&ext_order, &config)?;
    let outcome = job.run()?;
    let ext_quote = outcome.export(job.unit);

    info!(
        "[MAIN] {} pcs: production cost {}, profit {} ({:.1}%), total {}, per piece {}",
        ext_quote.qty,
        format_amount(ext_quote.total_cost),
        format_amount(ext_quote.profit),
        ext_quote.margin_ratio * 100.0,
        format_amount(ext_quote.selling_price),
        format_amount(ext_quote.unit_price)
    );
    info!(
        "[MAIN] {} pcs per plano, {} plano sheets needed",
        ext_quote.layout.n_pieces, ext_quote.sheets_required
    );

    {
        let output = QuoteOutput {
            order: ext_order,
            quote: ext_quote,
            config: config.clone(),
        };
        let quote_path = args.solution_folder.join(format!("quote_{input_stem}.json"));
        io::write_json(&output, Path::new(&quote_path))?;
    }

    {
        let svg_path = args.solution_folder.join(format!("layout_{input_stem}.svg"));
        let svg = outcome.layout_svg(&job, &config);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
