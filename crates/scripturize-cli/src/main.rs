use anyhow::{Context, Result, bail};
use scripturize_config::{Config, TRANSLATIONS, translations};
use scripturize_engine::{Scripturizer, TextFilter, TranslationCode};
use std::{
    env,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Filter {
        translation: Option<String>,
        input: Option<PathBuf>,
    },
    ListTranslations,
    SetDefault {
        translation: String,
    },
    Help,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--translation CODE] [FILE]\n       \
         {program} --list-translations\n       \
         {program} --set-default CODE\n\n\
         Reads FILE (or stdin when FILE is missing or '-'), links every Bible\n\
         reference to the chosen translation and writes the result to stdout.\n\
         The translation defaults to the config file at {}, then {}.",
        Config::config_path().display(),
        TranslationCode::DEFAULT
    )
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut translation = None;
    let mut input = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-l" | "--list-translations" => return Ok(Command::ListTranslations),
            "-s" | "--set-default" => match iter.next() {
                Some(code) => {
                    return Ok(Command::SetDefault {
                        translation: code.clone(),
                    });
                }
                None => bail!("{arg} needs a translation code"),
            },
            "-t" | "--translation" => match iter.next() {
                Some(code) => translation = Some(code.clone()),
                None => bail!("{arg} needs a translation code"),
            },
            "-" => input = None,
            flag if flag.starts_with('-') => bail!("Unknown option '{flag}'"),
            path => {
                if input.is_some() {
                    bail!("Only one input file may be given");
                }
                input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Command::Filter { translation, input })
}

/// Flag beats config file beats the built-in default.
fn resolve_translation(flag: Option<String>, config: Option<&Config>) -> TranslationCode {
    let code = match (flag, config) {
        (Some(code), _) => TranslationCode::from(code),
        (None, Some(config)) => config.translation.clone(),
        (None, None) => TranslationCode::default(),
    };
    if !translations::is_offered(code.as_str()) {
        log::warn!("Translation '{code}' is not in the offered list; linking to it anyway");
    }
    code
}

fn list_translations(current: &TranslationCode) -> String {
    TRANSLATIONS
        .iter()
        .map(|t| {
            let marker = if t.code == current.as_str() {
                " (default)"
            } else {
                ""
            };
            format!("{:<8} {}{marker}\n", t.code, t.label)
        })
        .collect()
}

/// Applies a new default translation, keeping the rest of an existing config.
fn set_default(config: Option<Config>, code: &str) -> Config {
    let mut config = config.unwrap_or_default();
    config.translation = TranslationCode::from(code);
    config
}

fn describe_default(config: &Config) -> String {
    match config.translation_label() {
        Some(label) => format!("Default translation is now {} ({label})", config.translation),
        None => format!(
            "Default translation is now {} (not in the offered list)",
            config.translation
        ),
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn load_config_or_exit() -> Option<Config> {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("scripturize-cli", String::as_str);

    let command = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(program));
            process::exit(2);
        }
    };

    match command {
        Command::Help => println!("{}", usage(program)),
        Command::ListTranslations => {
            let config = load_config_or_exit();
            let current = resolve_translation(None, config.as_ref());
            print!("{}", list_translations(&current));
        }
        Command::SetDefault { translation } => {
            let config = set_default(load_config_or_exit(), &translation);
            config.save().with_context(|| {
                format!(
                    "Failed to save config file '{}'",
                    Config::config_path().display()
                )
            })?;
            println!("{}", describe_default(&config));
        }
        Command::Filter { translation, input } => {
            let config = if translation.is_none() {
                load_config_or_exit()
            } else {
                None
            };
            let translation = resolve_translation(translation, config.as_ref());
            log::info!("Linking references to translation {translation}");

            let text = read_input(input.as_deref())?;
            let output = Scripturizer::new().process(&text, translation.as_str());
            io::stdout()
                .write_all(output.as_bytes())
                .context("Failed to write output")?;
        }
    }

    Ok(())
}
