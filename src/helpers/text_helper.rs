/// Replaces every literal `&amp;` with `&`.
pub fn unescape_ampersand(value: &str) -> String {
    value.replace("&amp;", "&")
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescapes_ampersand_entities() {
        assert_eq!(
            unescape_ampersand("Entertainment: Music &amp; Stuff"),
            "Entertainment: Music & Stuff"
        );
        assert_eq!(unescape_ampersand("A &amp; B &amp; C"), "A & B & C");
        assert_eq!(unescape_ampersand("Science & Nature"), "Science & Nature");
    }

    #[test]
    fn leaves_other_entities_alone() {
        assert_eq!(unescape_ampersand("&quot;Quoted&quot;"), "&quot;Quoted&quot;");
    }

    #[test]
    fn capitalizes_first_character() {
        assert_eq!(capitalize("easy"), "Easy");
        assert_eq!(capitalize("Hard"), "Hard");
        assert_eq!(capitalize("élite"), "Élite");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn percentage_handles_empty_total() {
        assert_eq!(percentage(3, 0), 0.0);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
