use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::store::normalize_title;

// keyed by normalized title
static RECOMMENDATIONS: Lazy<HashMap<String, &'static [&'static str]>> = Lazy::new(|| {
    let table: [(&str, &'static [&'static str]); 6] = [
        ("Inception", &["Interstellar", "Tenet", "The Prestige"]),
        ("Avengers", &["Iron Man", "Captain America", "Thor"]),
        ("3 Idiots", &["PK", "Taare Zameen Par", "Munna Bhai MBBS"]),
        ("Interstellar", &["Inception", "Arrival", "Gravity"]),
        ("Dune", &["Blade Runner 2049", "Arrival", "Sicario"]),
        ("The Dark Knight", &["Batman Begins", "Joker", "Memento"]),
    ];
    table
        .into_iter()
        .map(|(title, recs)| (normalize_title(title), recs))
        .collect()
});

pub fn recommendations_for(title: &str) -> &'static [&'static str] {
    RECOMMENDATIONS
        .get(&normalize_title(title))
        .copied()
        .unwrap_or(&[])
}

/// Text for the recommendations notice.
pub fn recommendation_text(title: &str) -> String {
    let recs = recommendations_for(title);
    if recs.is_empty() {
        "No recommendations.".to_string()
    } else {
        recs.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(
            recommendations_for("  inception "),
            ["Interstellar", "Tenet", "The Prestige"]
        );
        assert_eq!(recommendations_for("3 IDIOTS")[0], "PK");
    }

    #[test]
    fn unknown_title_has_none() {
        assert!(recommendations_for("Paddington 2").is_empty());
        assert_eq!(recommendation_text("Paddington 2"), "No recommendations.");
        assert_eq!(recommendation_text("Avengers"), "Iron Man\nCaptain America\nThor");
    }
}
