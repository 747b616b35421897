use anyhow::{Context, Result};
use colstats::{
    config::{init_tracing, ConfigError, RunConfig},
    extract::{extract_column, ExtractError},
    stats::{summarize, ColumnReport},
};
use std::{env, io::Write};
use tracing::{error, info};

fn print_usage_and_exit(err: &ConfigError) -> ! {
    if let ConfigError::InvalidColumn { .. } = err {
        eprintln!("{}", err);
    }
    eprintln!("{}", err.usage());
    std::process::exit(1);
}

fn main() -> Result<()> {
    init_tracing();

    let cfg = match RunConfig::from_args(env::args()) {
        Ok(cfg) => cfg,
        Err(e) => print_usage_and_exit(&e),
    };
    info!(input = %cfg.input.display(), column = cfg.column, "startup");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let column = match extract_column(&cfg.input, cfg.column, &mut out) {
        Ok(column) => column,
        Err(e @ ExtractError::ColumnIndex { .. }) => {
            error!(column = cfg.column, "column missing, aborting");
            writeln!(out, "{}", e)?;
            out.flush()?;
            std::process::exit(1);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to read column {} of {}", cfg.column, cfg.input.display())
            })
        }
    };

    let outcome = summarize(column.values());
    write!(
        out,
        "{}",
        ColumnReport {
            column: cfg.column,
            outcome: &outcome,
        }
    )?;
    out.flush()?;

    info!("done");
    Ok(())
}
