use folio::theme::PrefStore;
use tower_cookies::{Cookie, Cookies, cookie::time::Duration};

const PREF_MAX_AGE_DAYS: i64 = 365;

/// Preference storage backed by long-lived browser cookies
pub struct CookieStore {
    cookies: Cookies,
    secure: bool,
}

impl CookieStore {
    pub fn new(cookies: Cookies, secure: bool) -> Self {
        Self { cookies, secure }
    }
}

impl PrefStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cookies.get(key).map(|c| c.value().to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_string(), value.to_string()))
            .http_only(true)
            .max_age(Duration::days(PREF_MAX_AGE_DAYS))
            .secure(self.secure)
            .path("/")
            .build();

        self.cookies.add(cookie);
    }
}
