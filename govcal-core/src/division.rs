//! Display names for the UK divisions.

/// Maps a division slug to its display name.
///
/// Exactly three slugs are recognised; anything else is `None`, not
/// an error.
pub fn formatted_division_name(slug: &str) -> Option<&'static str> {
    match slug {
        "england-and-wales" => Some("England and Wales"),
        "scotland" => Some("Scotland"),
        "northern-ireland" => Some("Northern Ireland"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_slugs_map_to_display_names() {
        assert_eq!(
            formatted_division_name("england-and-wales"),
            Some("England and Wales")
        );
        assert_eq!(formatted_division_name("scotland"), Some("Scotland"));
        assert_eq!(
            formatted_division_name("northern-ireland"),
            Some("Northern Ireland")
        );
    }

    #[test]
    fn unknown_slug_is_none() {
        assert_eq!(formatted_division_name("narnia"), None);
        assert_eq!(formatted_division_name(""), None);
        assert_eq!(formatted_division_name("Scotland"), None);
    }
}
