use anyhow::Context;

/// Bundled config for builds that ship without a .env file
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() -> anyhow::Result<()> {
    // A .env file wins during desktop development
    if dotenvy::dotenv().is_ok() {
        return Ok(());
    }

    load_bundled_config()
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() -> anyhow::Result<()> {
    load_bundled_config()
}

fn load_bundled_config() -> anyhow::Result<()> {
    for entry in dotenvy::from_read_iter(BUNDLED_CONFIG.as_bytes()) {
        let (key, value) = entry.context("parsing bundled assets/config.env")?;
        if std::env::var_os(&key).is_some() {
            continue;
        }
        // SAFETY: called from main before the runtime or any other thread starts
        unsafe {
            std::env::set_var(&key, &value);
        }
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {}", err))
}

fn main() -> anyhow::Result<()> {
    load_dotenv()?;
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing()?;
    tracing::info!(api = %tool_trainer::config::settings().api.base_url, "starting tool trainer");
    dioxus::launch(tool_trainer::ui::App);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_keeps_existing_keys() {
        // SAFETY: the only test in this binary touching the environment
        unsafe {
            std::env::set_var("TRAINER_API_URL", "http://override.test/api");
        }
        load_bundled_config().unwrap();
        assert_eq!(
            std::env::var("TRAINER_API_URL").unwrap(),
            "http://override.test/api"
        );
    }
}
