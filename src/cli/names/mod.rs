//! Name commands - list the registered names, canonicalize a name offline

use clap::Args;

use crate::config::AppConfig;
use crate::domain::TeamName;
use crate::infrastructure::logging;

#[derive(Args)]
pub struct CanonicalizeArgs {
    /// Raw team name
    pub name: String,
}

/// Fetch the current names from JotForm and print one per line
pub async fn list() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let client = crate::create_jotform_client(&config)?;
    let registry = crate::create_registry(&config, client);

    for name in registry.list_names().await? {
        println!("{}", name);
    }

    Ok(())
}

/// Print the canonical form of `args.name`
pub fn canonicalize(args: CanonicalizeArgs) -> anyhow::Result<()> {
    let name = TeamName::parse(&args.name)?;
    println!("{}", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_valid() {
        let args = CanonicalizeArgs {
            name: "walk tall".to_string(),
        };
        assert!(canonicalize(args).is_ok());
    }

    #[test]
    fn test_canonicalize_blank_fails() {
        let args = CanonicalizeArgs {
            name: "   ".to_string(),
        };
        let err = canonicalize(args).unwrap_err();
        assert_eq!(err.to_string(), "No name supplied");
    }
}
