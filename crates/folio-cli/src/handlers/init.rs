use crate::context::ExecutionContext;
use anyhow::{Result, bail};
use folio_runtime::Config;

pub fn handle(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let config_path = ctx.config_path();

    if config_path.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");
    println!("Wrote {}", config_path.display());
    Ok(())
}
