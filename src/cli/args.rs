//! Command-line argument parsing.

use crate::models::{MovieCategory, ThemeConfig, TvCategory};

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// List one page of movies
    Movies { category: MovieCategory, page: u32 },
    /// Show one movie with its cast
    Movie { id: u64 },
    /// List one page of popular people
    People { page: u32 },
    /// Show one person with their filmography
    Person { id: u64 },
    /// List one page of TV shows
    Tv { category: TvCategory, page: u32 },
    Login { username: String },
    Logout,
    /// Show stored preferences
    Settings,
    Theme(ThemeConfig),
    DynamicColor(bool),
    Version,
    Help,
}

/// Argument errors, shown with the usage text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgsError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument: {0}")]
    Missing(&'static str),
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

pub const USAGE: &str = "\
Usage: cinescope <command>

Commands:
  movies [popular|now-playing|top-rated|upcoming] [page]
  movie <id>
  people [page]
  person <id>
  tv [popular|top-rated|on-the-air|airing-today] [page]
  login <username>
  logout
  settings
  theme <light|dark|system>
  dynamic-color <on|off>
  --version";

/// Parse command-line arguments, skipping the program name.
///
/// # Examples
///
/// ```
/// use cinescope::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["cinescope".to_string(), "movie".to_string(), "550".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Movie { id: 550 }));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);
    let Some(command) = args.next() else {
        return Ok(CliCommand::Help);
    };

    match command.as_str() {
        "--version" | "-V" => Ok(CliCommand::Version),
        "--help" | "-h" | "help" => Ok(CliCommand::Help),
        "movies" => {
            let (category, page) = category_and_page(&mut args, MovieCategory::parse)?;
            Ok(CliCommand::Movies {
                category: category.unwrap_or_default(),
                page,
            })
        }
        "movie" => Ok(CliCommand::Movie {
            id: parse_number(args.next(), "movie id")?,
        }),
        "people" => Ok(CliCommand::People {
            page: page(args.next())?,
        }),
        "person" => Ok(CliCommand::Person {
            id: parse_number(args.next(), "person id")?,
        }),
        "tv" => {
            let (category, page) = category_and_page(&mut args, TvCategory::parse)?;
            Ok(CliCommand::Tv {
                category: category.unwrap_or_default(),
                page,
            })
        }
        "login" => args
            .next()
            .map(|username| CliCommand::Login { username })
            .ok_or(ArgsError::Missing("username")),
        "logout" => Ok(CliCommand::Logout),
        "settings" => Ok(CliCommand::Settings),
        "theme" => {
            let value = args.next().ok_or(ArgsError::Missing("theme"))?;
            ThemeConfig::parse(&value)
                .map(CliCommand::Theme)
                .ok_or(ArgsError::Invalid {
                    name: "theme",
                    value,
                })
        }
        "dynamic-color" => {
            let value = args.next().ok_or(ArgsError::Missing("on|off"))?;
            match value.as_str() {
                "on" | "true" | "yes" => Ok(CliCommand::DynamicColor(true)),
                "off" | "false" | "no" => Ok(CliCommand::DynamicColor(false)),
                _ => Err(ArgsError::Invalid {
                    name: "dynamic color",
                    value,
                }),
            }
        }
        other => Err(ArgsError::UnknownCommand(other.to_string())),
    }
}

/// `[category] [page]`, where a leading number is taken as the page.
fn category_and_page<C, I>(
    args: &mut I,
    parse: fn(&str) -> Option<C>,
) -> Result<(Option<C>, u32), ArgsError>
where
    I: Iterator<Item = String>,
{
    let Some(first) = args.next() else {
        return Ok((None, 1));
    };
    if first.chars().all(|c| c.is_ascii_digit()) {
        return Ok((None, page(Some(first))?));
    }
    let category = parse(&first).ok_or(ArgsError::Invalid {
        name: "category",
        value: first,
    })?;
    Ok((Some(category), page(args.next())?))
}

fn page(value: Option<String>) -> Result<u32, ArgsError> {
    match value {
        None => Ok(1),
        Some(value) => match value.parse::<u32>() {
            Ok(page) if page >= 1 => Ok(page),
            _ => Err(ArgsError::Invalid { name: "page", value }),
        },
    }
}

fn parse_number(value: Option<String>, name: &'static str) -> Result<u64, ArgsError> {
    let value = value.ok_or(ArgsError::Missing(name))?;
    value.parse().map_err(|_| ArgsError::Invalid { name, value })
}
