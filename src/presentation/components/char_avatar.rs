/// Round badge showing a user's initials, used when there is no profile image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharAvatar {
    full_name: String,
    width: Option<String>,
    height: Option<String>,
    style: Option<String>,
}

impl CharAvatar {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            width: None,
            height: None,
            style: None,
        }
    }

    pub fn size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self.height = Some(height.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn initials(&self) -> String {
        initials(&self.full_name)
    }

    pub fn class_name(&self) -> String {
        format!(
            "{} {} {} flex items-center justify-center rounded-full text-gray-900 font-medium bg-gray-100",
            self.width.as_deref().unwrap_or("w-12"),
            self.height.as_deref().unwrap_or("h-12"),
            self.style.as_deref().unwrap_or(""),
        )
    }

    pub fn render(&self) -> String {
        format!("({})", self.initials())
    }
}

/// First letter of the first word plus first letter of the last word, uppercased
pub fn initials(name: &str) -> String {
    fn first_char(word: &str) -> Option<char> {
        word.chars().next()
    }

    let words: Vec<&str> = name.split_whitespace().collect();

    let letters: Vec<char> = match words.as_slice() {
        [] => Vec::new(),
        [only] => first_char(only).into_iter().collect(),
        [first, .., last] => first_char(first).into_iter().chain(first_char(last)).collect(),
    };
    letters.into_iter().flat_map(char::to_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "")]
    #[case("   ", "")]
    #[case("alex", "A")]
    #[case("alex doe", "AD")]
    #[case("  alex   maria  doe ", "AD")]
    #[case("émile zola", "ÉZ")]
    fn test_initials_positive(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(initials(name), expected);
    }

    #[test]
    fn test_class_name_uses_defaults_positive() {
        let avatar = CharAvatar::new("Alex");
        assert!(avatar.class_name().starts_with("w-12 h-12 "));
    }

    #[test]
    fn test_class_name_uses_overrides_positive() {
        let avatar = CharAvatar::new("Alex").size("w-20", "h-20").style("text-xl");
        assert!(avatar.class_name().starts_with("w-20 h-20 text-xl "));
        assert_eq!(avatar.render(), "(A)");
    }
}
