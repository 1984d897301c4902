use std::io;

use anyhow::Context;

use shopinv_shell::{Shell, ShellConfig};

fn main() -> anyhow::Result<()> {
    shopinv_observability::init();

    let config = ShellConfig::from_env();
    tracing::info!(?config, "starting shop inventory shell");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(config, stdin.lock(), stdout.lock());

    shell.run().context("terminal I/O failed")?;

    tracing::info!(items = shell.inventory().len(), "session ended");
    Ok(())
}
