//! crypto_watchlist - registry inspection CLI
//!
//! ```text
//! crypto_watchlist [--env <name>]                  print registry + default selection
//! crypto_watchlist [--env <name>] --check SYMBOL   membership check (exit 1 if not allowed)
//! crypto_watchlist [--env <name>] --payload JSON   validate a stored selection payload
//! ```

use anyhow::{Context, bail};
use crypto_watchlist::logging::{TRACE_TARGET, init_logging};
use crypto_watchlist::{
    ALLOWED_SYMBOLS, AllowedSymbol, AppConfig, STORAGE_KEY_SYMBOLS, SelectedSymbols, is_allowed,
};

/// Value following any of `names`; a trailing flag with no value is a usage error
fn flag_value(args: &[String], names: &[&str]) -> anyhow::Result<Option<String>> {
    for i in 0..args.len() {
        if names.contains(&args[i].as_str()) {
            match args.get(i + 1) {
                Some(value) if !value.starts_with("--") => return Ok(Some(value.clone())),
                _ => bail!("{} requires a value\n\n{}", args[i], USAGE),
            }
        }
    }
    Ok(None)
}

const USAGE: &str = "usage: crypto_watchlist [--env <name>] [--check <SYMBOL> | --payload <JSON>]";

/// Returns true if `symbol` is allowed
fn run_check(symbol: &str) -> bool {
    let allowed = is_allowed(symbol);
    tracing::debug!(target: TRACE_TARGET, symbol, allowed, "membership check");

    match symbol.parse::<AllowedSymbol>() {
        Ok(_) => println!("{} is allowed", symbol),
        Err(e) => println!("{:?} is not allowed: {}", symbol, e),
    }
    allowed
}

fn run_payload(payload: &str) -> anyhow::Result<()> {
    let selection = SelectedSymbols::from_payload(payload)
        .with_context(|| format!("value under '{}' is invalid", STORAGE_KEY_SYMBOLS))?;
    tracing::debug!(target: TRACE_TARGET, count = selection.len(), "payload validated");
    println!(
        "{} -> {} symbol(s): {}",
        STORAGE_KEY_SYMBOLS,
        selection.len(),
        selection
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}

fn print_registry(config: &AppConfig) -> anyhow::Result<()> {
    println!("Allowed symbols:");
    for (i, symbol) in ALLOWED_SYMBOLS.iter().enumerate() {
        println!("  {}. {}", i + 1, symbol);
    }
    println!("Storage key: {}", STORAGE_KEY_SYMBOLS);

    let default_selection = config.default_selection()?;
    println!("Default selection payload: {}", default_selection.to_payload()?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let env = flag_value(&args, &["--env", "-e"])?.unwrap_or_else(|| "dev".to_string());
    let check = flag_value(&args, &["--check"])?;
    let payload = flag_value(&args, &["--payload"])?;

    let app_config = AppConfig::load(&env).with_context(|| format!("loading '{}' config", env))?;
    let log_guard = init_logging(&app_config);

    tracing::info!(
        "Starting crypto_watchlist ({}) in {} mode",
        env!("GIT_HASH"),
        env
    );

    if let Some(symbol) = check {
        let allowed = run_check(&symbol);
        drop(log_guard);
        if !allowed {
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Some(payload) = payload {
        return run_payload(&payload);
    }

    print_registry(&app_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flag_value_present_and_absent() {
        let argv = args(&["crypto_watchlist", "-e", "prod", "--check", "SOL-USD"]);
        assert_eq!(
            flag_value(&argv, &["--env", "-e"]).unwrap(),
            Some("prod".to_string())
        );
        assert_eq!(
            flag_value(&argv, &["--check"]).unwrap(),
            Some("SOL-USD".to_string())
        );
        assert_eq!(flag_value(&argv, &["--payload"]).unwrap(), None);
    }

    #[test]
    fn test_flag_without_value_is_usage_error() {
        let argv = args(&["crypto_watchlist", "--check"]);
        let err = flag_value(&argv, &["--check"]).unwrap_err();
        assert!(err.to_string().contains("--check requires a value"));

        let argv = args(&["crypto_watchlist", "--payload", "--env", "dev"]);
        assert!(flag_value(&argv, &["--payload"]).is_err());
    }

    #[test]
    fn test_run_check_is_exact() {
        assert!(run_check("ETH-USD"));
        assert!(!run_check(" ETH-USD"));
        assert!(!run_check("BTC-USD"));
    }
}
