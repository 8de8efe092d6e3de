// Cookie-backed CSRF token lookup
use crate::application::toggle_gateway::CsrfTokenProvider;

/// Cookies as a browser exposes them: `name=value` pairs joined by `; `.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    raw: String,
}

impl CookieJar {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn header_value(&self) -> &str {
        &self.raw
    }

    /// Value of `name` when it occurs exactly once, otherwise `None`.
    pub fn get(&self, name: &str) -> Option<&str> {
        let mut matches = self
            .raw
            .split(';')
            .map(str::trim_start)
            .filter_map(|pair| pair.split_once('='))
            .filter(|(key, _)| *key == name)
            .map(|(_, value)| value);

        let value = matches.next()?;
        match matches.next() {
            Some(_) => None,
            None => Some(value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CookieCsrfProvider {
    jar: CookieJar,
    cookie_name: String,
}

impl CookieCsrfProvider {
    pub fn new(jar: CookieJar, cookie_name: impl Into<String>) -> Self {
        Self {
            jar,
            cookie_name: cookie_name.into(),
        }
    }
}

impl CsrfTokenProvider for CookieCsrfProvider {
    fn csrf_token(&self) -> String {
        self.jar
            .get(&self.cookie_name)
            .unwrap_or_default()
            .to_string()
    }
}
