use serde::Deserialize;

/// Contact details and profile links shown across the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    pub email_work: String,
    pub email_private: String,
    pub github: String,
    pub linkedin: String,
    pub x: String,
    pub instagram: String,
    #[serde(default = "default_resume_url")]
    pub resume_url: String,
}

fn default_resume_url() -> String {
    "#".to_string()
}

/// Which address the header shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EmailMode {
    #[default]
    Work,
    Private,
}

impl EmailMode {
    pub fn toggled(self) -> Self {
        match self {
            EmailMode::Work => EmailMode::Private,
            EmailMode::Private => EmailMode::Work,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmailMode::Work => "Work",
            EmailMode::Private => "Private",
        }
    }

    /// Label shown briefly after the address was copied.
    pub fn copied_label(&self) -> String {
        format!("{} ✓", self.label())
    }
}

impl Identity {
    pub fn email(&self, mode: EmailMode) -> &str {
        match mode {
            EmailMode::Work => &self.email_work,
            EmailMode::Private => &self.email_private,
        }
    }

    /// `@handle` taken from the last path segment of the GitHub profile URL.
    pub fn github_handle(&self) -> String {
        let handle = self
            .github
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty() && !s.contains(':'))
            .unwrap_or("YOURNAME");
        format!("@{}", handle)
    }
}

pub fn mailto(email: &str) -> String {
    format!("mailto:{}", email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(github: &str) -> Identity {
        Identity {
            email_work: "work@example.com".into(),
            email_private: "me@example.com".into(),
            github: github.into(),
            linkedin: String::new(),
            x: String::new(),
            instagram: String::new(),
            resume_url: "#".into(),
        }
    }

    #[test]
    fn test_email_toggle() {
        let id = identity("");
        let mode = EmailMode::default();
        assert_eq!(id.email(mode), "work@example.com");
        assert_eq!(mode.label(), "Work");
        let mode = mode.toggled();
        assert_eq!(id.email(mode), "me@example.com");
        assert_eq!(mode.copied_label(), "Private ✓");
        assert_eq!(mode.toggled(), EmailMode::Work);
    }

    #[test]
    fn test_github_handle() {
        assert_eq!(identity("https://github.com/octocat").github_handle(), "@octocat");
        assert_eq!(identity("https://github.com/octocat/").github_handle(), "@octocat");
        assert_eq!(identity("").github_handle(), "@YOURNAME");
        assert_eq!(identity("https://").github_handle(), "@YOURNAME");
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto("a@b.c"), "mailto:a@b.c");
    }
}
