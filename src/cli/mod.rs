//! Command-line interface.
//!
//! Parse the arguments with [`parse_args`], build an [`AppContext`] and hand
//! both to [`run_cli_command`]:
//!
//! ```ignore
//! use cinescope::cli::{parse_args, run_cli_command, AppContext};
//!
//! let command = parse_args(std::env::args())?;
//! let context = AppContext::new(http, &api_config, store).await?;
//! run_cli_command(command, &context).await?;
//! ```

pub mod args;
mod context;
pub mod output;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, USAGE};
pub use context::AppContext;
pub use version::{version_line, VERSION};

use color_eyre::eyre::{eyre, Result, WrapErr};
use futures::StreamExt;

use crate::viewmodel::{LoginViewModel, MovieDetailsViewModel, PersonDetailsViewModel};

/// Run `command`, printing its result to stdout.
pub async fn run_cli_command(command: CliCommand, context: &AppContext) -> Result<()> {
    match command {
        CliCommand::Version => println!("{}", version_line()),
        CliCommand::Help => println!("{}", USAGE),
        CliCommand::Movies { category, page } => {
            let movies = context.movies.movies(category, page).await.into_result()?;
            println!("{} movies", category.label());
            for movie in &movies.results {
                println!("{}", output::movie_line(movie));
            }
            println!("{}", output::page_footer(&movies));
        }
        CliCommand::Movie { id } => {
            let vm = MovieDetailsViewModel::new(context.movie_details.clone(), id);
            let mut states = vm.state();
            let state = loop {
                let state = states.next().await.ok_or_else(|| eyre!("state stream ended"))?;
                if !state.is_loading() {
                    break state;
                }
            };
            match state.details {
                Some(details) => {
                    print!("{}", output::movie_details(&details, state.credits.as_ref()))
                }
                None => {
                    return Err(eyre!(state
                        .error_message
                        .unwrap_or_else(|| "Movie not available".to_string())))
                }
            }
        }
        CliCommand::People { page } => {
            let people = context.people.popular_people(page).await.into_result()?;
            for person in &people.results {
                println!("{}", output::person_line(person));
            }
            println!("{}", output::page_footer(&people));
        }
        CliCommand::Person { id } => {
            let vm = PersonDetailsViewModel::new(context.people_details.clone(), id);
            let mut states = vm.state();
            let state = loop {
                let state = states.next().await.ok_or_else(|| eyre!("state stream ended"))?;
                if !state.is_loading() {
                    break state;
                }
            };
            let details = state.details.ok_or_else(|| {
                eyre!(state
                    .error_message
                    .unwrap_or_else(|| "Person not available".to_string()))
            })?;
            let today = chrono::Local::now().date_naive();
            print!("{}", output::person_details(&details, &state.credits, today));
        }
        CliCommand::Tv { category, page } => {
            let shows = context.tv_shows.tv_shows(category, page).await.into_result()?;
            for show in &shows.results {
                println!("{}", output::tv_line(show));
            }
            println!("{}", output::page_footer(&shows));
        }
        CliCommand::Login { username } => {
            let password = tokio::task::spawn_blocking(|| rpassword::prompt_password("Password: "))
                .await?
                .wrap_err("Failed to read password")?;

            let vm = LoginViewModel::new(context.auth.clone());
            vm.set_username(username);
            vm.set_password(password);
            let mut states = vm.state();
            vm.login();
            let state = loop {
                let state = states.next().await.ok_or_else(|| eyre!("state stream ended"))?;
                if !state.is_loading && (state.user.is_some() || state.error_message.is_some()) {
                    break state;
                }
            };
            match (state.user, state.error_message) {
                (Some(user), _) => println!("Signed in as {}", user.display_name()),
                (None, Some(message)) => return Err(eyre!(message)),
                (None, None) => return Err(eyre!("Login did not complete")),
            }
        }
        CliCommand::Logout => {
            context.auth.logout().await.into_result()?;
            println!("Signed out");
        }
        CliCommand::Settings => println!("{}", output::settings(&context.preferences.current())),
        CliCommand::Theme(theme) => {
            context.user_data.set_theme_config(theme).await.into_result()?;
            println!("Theme set to {}", theme.label());
        }
        CliCommand::DynamicColor(enabled) => {
            context
                .user_data
                .set_use_dynamic_color(enabled)
                .await
                .into_result()?;
            println!("Dynamic color {}", if enabled { "on" } else { "off" });
        }
    }
    Ok(())
}
