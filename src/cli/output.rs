//! Plain-text rendering of domain records for the terminal.

use crate::models::{
    Credit, Movie, MovieDetails, Paged, Person, PersonCredit, PersonDetails, TvShow, UserData,
};

/// Cast members listed under a movie.
const TOP_CAST: usize = 10;

fn year(date: Option<chrono::NaiveDate>) -> String {
    use chrono::Datelike;
    date.map(|d| d.year().to_string())
        .unwrap_or_else(|| "----".to_string())
}

pub fn page_footer<T>(page: &Paged<T>) -> String {
    format!(
        "page {} of {} ({} results)",
        page.page, page.total_pages, page.total_results
    )
}

pub fn movie_line(movie: &Movie) -> String {
    format!(
        "{:>8}  {}  {:>4.1}  {}",
        movie.id,
        year(movie.release_date),
        movie.vote_average,
        movie.title
    )
}

pub fn tv_line(show: &TvShow) -> String {
    format!(
        "{:>8}  {}  {:>4.1}  {}",
        show.id,
        year(show.first_air_date),
        show.vote_average,
        show.name
    )
}

pub fn person_line(person: &Person) -> String {
    let mut line = format!("{:>8}  {}", person.id, person.name);
    if !person.known_for.is_empty() {
        line.push_str(&format!("  ({})", person.known_for.join(", ")));
    }
    line
}

pub fn movie_details(details: &MovieDetails, credits: Option<&Credit>) -> String {
    let mut out = format!("{} ({})\n", details.title, year(details.release_date));
    if let Some(tagline) = &details.tagline {
        out.push_str(&format!("\"{}\"\n", tagline));
    }

    let mut facts = vec![format!("{:.1}/10 from {} votes", details.vote_average, details.vote_count)];
    if let Some(runtime) = details.runtime_label() {
        facts.push(runtime);
    }
    if !details.genres.is_empty() {
        let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
        facts.push(genres.join(", "));
    }
    out.push_str(&facts.join(" | "));
    out.push('\n');

    if !details.overview.is_empty() {
        out.push('\n');
        out.push_str(&details.overview);
        out.push('\n');
    }

    if let Some(credits) = credits {
        let directors: Vec<&str> = credits.directors().map(|d| d.name.as_str()).collect();
        if !directors.is_empty() {
            out.push_str(&format!("\nDirected by {}\n", directors.join(", ")));
        }
        if !credits.cast.is_empty() {
            out.push_str("\nCast:\n");
            for member in credits.cast.iter().take(TOP_CAST) {
                out.push_str(&format!("  {} as {}\n", member.name, member.character));
            }
        }
    }
    out
}

pub fn person_details(details: &PersonDetails, credits: &[PersonCredit], today: chrono::NaiveDate) -> String {
    let mut out = details.name.clone();
    if let Some(age) = details.age_on(today) {
        out.push_str(&format!(" ({})", age));
    }
    out.push('\n');
    if let Some(place) = &details.place_of_birth {
        out.push_str(&format!("Born in {}\n", place));
    }
    if !details.biography.is_empty() {
        out.push('\n');
        out.push_str(&details.biography);
        out.push('\n');
    }
    if !credits.is_empty() {
        out.push_str("\nFilmography:\n");
        for credit in credits {
            out.push_str(&format!(
                "  {}  {} ({})\n",
                year(credit.release_date),
                credit.title,
                credit.role
            ));
        }
    }
    out
}

pub fn settings(data: &UserData) -> String {
    let account = if data.is_logged_in {
        format!("signed in as {}", data.display_name())
    } else {
        "signed out".to_string()
    };
    format!(
        "account:        {}\ntheme:          {}\ndynamic color:  {}",
        account,
        data.theme_config.label(),
        if data.use_dynamic_color { "on" } else { "off" }
    )
}
