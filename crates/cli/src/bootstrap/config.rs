use cascade_dns_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    Ok(config)
}
