//! JSON payloads shaped like the movie database API.

use serde_json::{json, Value};

/// A movie list entry.
pub fn movie_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "original_title": title,
        "overview": format!("{} overview", title),
        "poster_path": format!("/poster-{}.jpg", id),
        "backdrop_path": null,
        "release_date": "1999-10-15",
        "vote_average": 8.4,
        "vote_count": 26000,
        "popularity": 61.4,
        "genre_ids": [18],
        "adult": false
    })
}

/// A popular-people entry named `Person {id}`.
pub fn person_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("Person {}", id),
        "profile_path": format!("/p{}.jpg", id),
        "popularity": 10.0,
        "known_for_department": "Acting",
        "known_for": [
            {"title": "Fight Club"},
            {"name": "Friends"}
        ]
    })
}

/// A page envelope around `results`.
pub fn page_json(page: u32, results: Vec<Value>, total_pages: u32, total_results: u32) -> Value {
    json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": total_results
    })
}

/// Page `page` of a popular-people list holding `total` people, `page_size`
/// per page.
pub fn people_page(page: u32, page_size: u32, total: u32) -> Value {
    let total_pages = total.div_ceil(page_size);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);
    let results = (start..end).map(|i| person_json(u64::from(i) + 1)).collect();
    page_json(page, results, total_pages, total)
}

/// Full record for `/movie/{id}`.
pub fn movie_details_json(id: u64) -> Value {
    json!({
        "id": id,
        "title": "Fight Club",
        "tagline": "Mischief. Mayhem. Soap.",
        "overview": "A ticking-time-bomb insomniac...",
        "runtime": 139,
        "genres": [{"id": 18, "name": "Drama"}],
        "release_date": "1999-10-15",
        "status": "Released",
        "budget": 63000000,
        "revenue": 100853753,
        "vote_average": 8.4,
        "vote_count": 26280,
        "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
        "backdrop_path": null,
        "homepage": "",
        "imdb_id": "tt0137523"
    })
}

/// Credits for `/movie/{id}/credits`, cast deliberately out of order.
pub fn credits_json(id: u64) -> Value {
    json!({
        "id": id,
        "cast": [
            {"id": 287, "name": "Brad Pitt", "character": "Tyler Durden", "profile_path": null, "order": 1},
            {"id": 819, "name": "Edward Norton", "character": "The Narrator", "profile_path": "/en.jpg", "order": 0}
        ],
        "crew": [
            {"id": 7467, "name": "David Fincher", "job": "Director", "department": "Directing", "profile_path": null}
        ]
    })
}

/// The standard error envelope.
pub fn error_json(status_code: i32, message: &str) -> Value {
    json!({
        "status_code": status_code,
        "status_message": message,
        "success": false
    })
}

pub fn request_token_json(token: &str) -> Value {
    json!({
        "success": true,
        "expires_at": "2026-10-19 12:00:00 UTC",
        "request_token": token
    })
}

pub fn session_json(session_id: &str) -> Value {
    json!({"success": true, "session_id": session_id})
}

pub fn account_json(id: u64, name: &str, username: &str) -> Value {
    json!({"id": id, "name": name, "username": username})
}
