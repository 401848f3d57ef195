use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use purpose_map_core::config::{Config, CONFIG_FILE};
use purpose_map_core::purpose::{Locale, Purpose, PurposeClassifier};
use purpose_map_core::{PurposeMapError, Report, Result};

mod args;
use args::{Cli, Commands, ConfigAction, LocaleArg, OutputFormat, Shell};

const ROOT_ENV: &str = "PURPOSE_MAP_ROOT";
const CONFIG_ENV: &str = "PURPOSE_MAP_CONFIG";

/// Diagnostics on stderr, gated by --verbose / --quiet
#[derive(Clone, Copy)]
struct Log {
    verbose: bool,
    quiet: bool,
}

impl Log {
    fn info(&self, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{} {}", "[INFO]".cyan(), message.as_ref());
        }
    }

    fn warn(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{} {}", "[WARN]".yellow(), message.as_ref());
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log = Log {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };
    let config_path = resolve_config_path(cli.config);

    let result = match cli.command {
        Some(Commands::Scan {
            root,
            format,
            locale,
            summary,
            extensions,
            exclude,
        }) => handle_scan(
            log,
            &config_path,
            root,
            format,
            locale,
            summary,
            extensions,
            exclude,
        ),
        Some(Commands::Classify {
            paths,
            locale,
            explain,
        }) => handle_classify(&config_path, &paths, locale, explain),
        Some(Commands::Rules { locale }) => handle_rules(&config_path, locale),
        Some(Commands::Config { action }) => handle_config(action, &config_path),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn resolve_config_path(cli_config: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_config {
        return path;
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    PathBuf::from(CONFIG_FILE)
}

fn resolve_root(cli_root: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = cli_root {
        return Ok(root);
    }

    match std::env::var(ROOT_ENV) {
        Ok(root) if !root.is_empty() => Ok(PathBuf::from(root)),
        _ => Err(PurposeMapError::RootNotSpecified),
    }
}

fn resolve_locale(config: &Config, arg: Option<LocaleArg>) -> Locale {
    match arg {
        Some(LocaleArg::En) => Locale::En,
        Some(LocaleArg::Zh) => Locale::Zh,
        None => config.output.locale,
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_scan(
    log: Log,
    config_path: &Path,
    root: Option<PathBuf>,
    format: OutputFormat,
    locale: Option<LocaleArg>,
    summary: bool,
    extensions: Vec<String>,
    exclude: Vec<String>,
) -> Result<()> {
    let root = resolve_root(root)?;
    let config = Config::load(config_path)?;
    let locale = resolve_locale(&config, locale);

    if config_path.exists() {
        log.info(format!("Config: {}", config_path.display()));
    } else {
        log.info("Config: defaults");
    }

    let mut options = config.to_scan_options();
    options.extensions.extend(
        extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_string()),
    );
    options.exclude_patterns.extend(exclude);
    log.info(format!(
        "Extensions: {}",
        options
            .extensions
            .iter()
            .map(|e| format!(".{}", e))
            .collect::<Vec<_>>()
            .join(", ")
    ));

    let report = Report::generate(&root, options)?;
    log.info(format!("Root: {}", report.root.display()));

    let skipped = report.skipped;
    log.info(format!(
        "Skipped {} files (extension: {}, excluded dir: {}, declaration: {}, pattern: {})",
        skipped.total(),
        skipped.foreign_extension,
        skipped.excluded_dir,
        skipped.declaration,
        skipped.pattern
    ));
    if report.count() == 0 {
        log.warn(format!(
            "No candidate files under {}",
            report.root.display()
        ));
    }

    let output = match format {
        OutputFormat::Text => report.render_text(locale, summary),
        OutputFormat::Json => {
            let mut json = report.to_json(locale, summary)?;
            json.push('\n');
            json
        }
    };
    write_stdout(&output)
}

fn handle_classify(
    config_path: &Path,
    paths: &[String],
    locale: Option<LocaleArg>,
    explain: bool,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let locale = resolve_locale(&config, locale);
    let classifier = PurposeClassifier::builtin();

    let mut output = String::new();
    for path in paths {
        let matched = classifier.matching_rule(path);
        let purpose = matched
            .map(|(_, rule)| rule.purpose)
            .unwrap_or(Purpose::Module);

        output.push_str(&format!("{} - {}", path, purpose.label(locale)));
        if explain {
            match matched {
                Some((index, rule)) => output.push_str(&format!(
                    "  (rule {}: {})",
                    index + 1,
                    rule.matcher.keywords().join(" + ")
                )),
                None => output.push_str("  (no rule matched)"),
            }
        }
        output.push('\n');
    }

    write_stdout(&output)
}

fn handle_rules(config_path: &Path, locale: Option<LocaleArg>) -> Result<()> {
    let config = Config::load(config_path)?;
    let locale = resolve_locale(&config, locale);
    let classifier = PurposeClassifier::builtin();

    println!();
    for (i, rule) in classifier.rules().iter().enumerate() {
        let keywords = rule.matcher.keywords().join(" + ");
        println!(
            "{:>3}. {:<24} {}",
            i + 1,
            keywords.cyan(),
            rule.purpose.label(locale)
        );
    }
    println!(
        "{:>3}. {:<24} {}",
        classifier.rules().len() + 1,
        "(anything else)".dimmed(),
        Purpose::Module.label(locale)
    );
    println!();

    Ok(())
}

fn handle_config(action: ConfigAction, config_path: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(config_path)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(PurposeMapError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(config_path)?;
            config.set(&key, &value)?;
            config.save(config_path)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(config_path)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
        ConfigAction::Init => {
            if Config::init(config_path)? {
                println!("{} {}", "Initialized:".green(), config_path.display());
            } else {
                println!(
                    "{} {}",
                    "Already exists:".yellow(),
                    config_path.display()
                );
            }
        }
    }

    Ok(())
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "purpose-map", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_prefers_argument() {
        let root = resolve_root(Some(PathBuf::from("/work/src"))).unwrap();
        assert_eq!(root, PathBuf::from("/work/src"));
    }

    #[test]
    fn test_resolve_config_path_prefers_argument() {
        let path = resolve_config_path(Some(PathBuf::from("custom.toml")));
        assert_eq!(path, PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_resolve_locale_argument_overrides_config() {
        let mut config = Config::default();
        config.output.locale = Locale::Zh;

        assert_eq!(resolve_locale(&config, None), Locale::Zh);
        assert_eq!(resolve_locale(&config, Some(LocaleArg::En)), Locale::En);
    }
}
