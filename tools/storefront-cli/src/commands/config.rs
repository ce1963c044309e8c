//! Configuration commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::CliConfig;
use crate::context::Context;

const CONFIG_FILE: &str = "storefront.toml";

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(ConfigCommand::Show) {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(force, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }
    ctx.output.header("Configuration");
    ctx.output.kv("base_url", &ctx.config.base_url);
    ctx.output.kv("token_file", &ctx.config.token_file);
    ctx.output.kv("page_size", &ctx.config.page_size.to_string());
    Ok(())
}

fn init(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!("{CONFIG_FILE} already exists (use --force to overwrite)");
    }
    CliConfig::default().save(path.to_str().unwrap_or(CONFIG_FILE))?;
    ctx.output
        .success(&format!("Wrote {}", path.display()));
    Ok(())
}
