use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::state::GameKind;

// Malformed or absent values read as no score.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<u32> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() == name {
            value.trim().parse().ok()
        } else {
            None
        }
    })
}

// Only a strictly higher score displaces the stored one.
fn beats(stored: u32, score: u32) -> bool {
    score > stored
}

fn html_document() -> HtmlDocument {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .unchecked_into::<HtmlDocument>()
}

pub fn load(kind: GameKind) -> u32 {
    let cookies = html_document().cookie().unwrap_or_default();
    parse_cookie(&cookies, kind.cookie_name()).unwrap_or(0)
}

fn store(kind: GameKind, score: u32) {
    let expires = js_sys::Date::new_0();
    expires.set_full_year(expires.get_full_year() + 1);
    let cookie = format!(
        "{}={}; expires={}; path=/; SameSite=Strict",
        kind.cookie_name(),
        score,
        String::from(expires.to_utc_string())
    );
    if let Err(err) = html_document().set_cookie(&cookie) {
        web_sys::console::warn_1(&err);
    }
}

pub fn save_if_best(kind: GameKind, score: u32) -> bool {
    if beats(load(kind), score) {
        store(kind, score);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_cookie_among_others() {
        let cookies = "theme=dark; cookieCatcherHighScore=120; session=abc";
        assert_eq!(parse_cookie(cookies, "cookieCatcherHighScore"), Some(120));
    }

    #[test]
    fn handles_whitespace_around_pairs() {
        let cookies = " spaceShooterHighScore = 450 ";
        assert_eq!(parse_cookie(cookies, "spaceShooterHighScore"), Some(450));
    }

    #[test]
    fn absent_cookie_reads_as_none() {
        assert_eq!(parse_cookie("theme=dark", "spaceShooterHighScore"), None);
    }

    #[test]
    fn malformed_value_reads_as_none() {
        let cookies = "cookieCatcherHighScore=not-a-number";
        assert_eq!(parse_cookie(cookies, "cookieCatcherHighScore"), None);
    }

    #[test]
    fn empty_cookie_jar_reads_as_none() {
        assert_eq!(parse_cookie("", "cookieCatcherHighScore"), None);
    }

    #[test]
    fn higher_score_displaces_the_stored_one() {
        assert!(beats(30, 50));
    }

    #[test]
    fn lower_score_leaves_the_stored_one() {
        assert!(!beats(50, 20));
    }

    #[test]
    fn equal_score_is_not_a_new_best() {
        assert!(!beats(50, 50));
    }
}
