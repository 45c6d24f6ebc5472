use anyhow::{Context, Result};
use locale_kit::config::Config;
use locale_kit::i18n::{self, Language, LanguageLoader, LanguageValidator, OptionBag};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_kit=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    // Usage: preview [PATH] [name=value ...]
    let mut args = std::env::args().skip(1);
    let path = args.next();
    let options: OptionBag = args
        .map(|arg| parse_option(&arg))
        .collect::<Result<_>>()?;

    if !config.uses_builtin_language() {
        let mut loader = LanguageLoader::new(&config.locales_dir);
        let language = loader
            .load(&config.default_language)
            .with_context(|| format!("Failed to load language '{}'", config.default_language))?;

        let report = LanguageValidator::validate(&Language::builtin_default(), &language);
        for error in &report.errors {
            warn!("{}", error);
        }
        for warning in &report.warnings {
            warn!("{}", warning);
        }

        i18n::use_language(Some(language));
    }

    let translator = i18n::global();
    info!("Active language: '{}'", translator.active_language().name());

    match path {
        Some(path) => {
            let resolution = translator.lookup(&path, &options);
            if !resolution.is_resolved() {
                warn!("No translation for '{}'", path);
            }
            println!("{}", resolution.value);
        }
        None => {
            let today = chrono::Local::now();
            let formatted = i18n::global_date_locale()
                .format(&today, &config.date_format)
                .context("Failed to format the current date")?;
            println!("{}", formatted);
            println!("{}", serde_json::to_string_pretty(&translator.metrics().report())?);
        }
    }

    Ok(())
}

/// Parse a `name=value` command-line argument.
fn parse_option(arg: &str) -> Result<(String, String)> {
    let (name, value) = arg
        .split_once('=')
        .with_context(|| format!("Expected name=value, got '{}'", arg))?;
    Ok((name.to_string(), value.to_string()))
}
