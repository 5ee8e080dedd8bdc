/// Decorative backdrop keyed off the current condition text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    Clouds,
    Rain,
    Sun,
    #[default]
    Plain,
}

impl Background {
    /// Case-insensitive keyword scan over the condition text. A string
    /// like "Partly Cloudy Rain" matches several keywords; the scan
    /// order is fixed (cloud, rain, then sun/clear) and the first hit
    /// wins.
    pub fn for_condition(condition: Option<&str>) -> Self {
        let Some(condition) = condition else {
            return Self::Plain;
        };
        let condition = condition.to_lowercase();
        if condition.contains("cloud") {
            Self::Clouds
        } else if condition.contains("rain") {
            Self::Rain
        } else if condition.contains("sun") || condition.contains("clear") {
            Self::Sun
        } else {
            Self::Plain
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Background::Clouds => "backdrop-clouds",
            Background::Rain => "backdrop-rain",
            Background::Sun => "backdrop-sun",
            Background::Plain => "backdrop-plain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_keyword_wins() {
        assert_eq!(
            Background::for_condition(Some("Partly Cloudy Rain")),
            Background::Clouds
        );
        assert_eq!(
            Background::for_condition(Some("Rain, clear later")),
            Background::Rain
        );
    }

    #[test]
    fn test_sun_and_clear_share_a_backdrop() {
        assert_eq!(Background::for_condition(Some("Sunny")), Background::Sun);
        assert_eq!(Background::for_condition(Some("Clear")), Background::Sun);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(
            Background::for_condition(Some("OVERCAST CLOUDS")),
            Background::Clouds
        );
    }

    #[test]
    fn test_unknown_or_missing_condition_is_plain() {
        assert_eq!(Background::for_condition(Some("Foggy")), Background::Plain);
        assert_eq!(Background::for_condition(None), Background::Plain);
        assert_eq!(Background::default(), Background::Plain);
    }

    #[test]
    fn test_css_classes_are_distinct() {
        let classes = [
            Background::Clouds.css_class(),
            Background::Rain.css_class(),
            Background::Sun.css_class(),
            Background::Plain.css_class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
