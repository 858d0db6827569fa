//! `skillnet [config.toml]` — one batch run.
//!
//! Without an argument the defaults apply (`skills-data.csv` in the current
//! directory). Set `RUST_LOG` to change verbosity.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use skillnet::NetworkConfig;

fn main() -> skillnet::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args_os().nth(1) {
        Some(arg) => {
            let path = Path::new(&arg);
            let base = path.parent().unwrap_or(Path::new("."));
            NetworkConfig::from_file(path)?.relative_to(base)
        }
        None => NetworkConfig::default(),
    };

    let summary = skillnet::run(&config)?;
    tracing::info!(
        nodes = summary.nodes,
        edges = summary.edges,
        unresolved = summary.unresolved_relations,
        json = %config.json_output.display(),
        obj = %config.obj_output.display(),
        "done"
    );
    Ok(())
}
