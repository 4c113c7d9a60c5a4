use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let config = stockroom_demo::Config::from_env().context("invalid configuration")?;
    stockroom_observability::init(config.log_format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    stockroom_demo::run(&config, &mut out)?;
    Ok(())
}
