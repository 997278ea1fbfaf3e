//! Blocking client for the puzzle input endpoint

use crate::error::AocError;
use reqwest::Url;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{COOKIE, HeaderValue};
use reqwest::redirect::Policy;
use zeroize::Zeroizing;

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Downloads personal puzzle inputs
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let input = client.fetch_input(2022, 1, "your_session_cookie")?;
/// println!("{} bytes", input.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    http: Client,
    base_url: Url,
}

impl AocClient {
    /// Client for the public site
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::default()
    }

    /// `<base>/<year>/day/<day>/input`
    fn input_url(&self, year: u16, day: u8) -> Result<Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit(format!("{} cannot be a base URL", self.base_url)))?
            .clear()
            .extend([year.to_string().as_str(), "day", day.to_string().as_str(), "input"]);
        Ok(url)
    }

    /// Fetch the raw input of one puzzle day
    ///
    /// The site answers an unknown or expired session with a redirect, which
    /// is never followed and surfaces as `AocError::InvalidStatus` like any
    /// other non-2xx status.
    pub fn fetch_input(&self, year: u16, day: u8, session: &str) -> Result<Vec<u8>, AocError> {
        let url = self.input_url(year, day)?;
        let response = self
            .http
            .get(url)
            .header(COOKIE, session_cookie(session)?)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AocError::InvalidStatus { status });
        }
        Ok(response.bytes()?.to_vec())
    }
}

/// `session=<token>` as a sensitive header; the formatted copy is wiped
fn session_cookie(session: &str) -> Result<HeaderValue, AocError> {
    let cookie = Zeroizing::new(format!("session={}", session.trim()));
    let mut header = HeaderValue::from_bytes(cookie.as_bytes())
        .map_err(|_| AocError::InvalidSession("not a valid cookie value".into()))?;
    header.set_sensitive(true);
    Ok(header)
}

/// Configures an [`AocClient`]
///
/// Whatever `ClientBuilder` is supplied, redirects are switched off.
#[derive(Debug, Default)]
pub struct AocClientBuilder {
    base_url: Option<Url>,
    http: Option<ClientBuilder>,
}

impl AocClientBuilder {
    /// Point the client somewhere else, e.g. a local mock server
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Start from a custom `reqwest` builder (timeouts, proxies)
    pub fn client_builder(mut self, builder: ClientBuilder) -> Self {
        self.http = Some(builder);
        self
    }

    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let http = self
            .http
            .unwrap_or_else(|| Client::builder().use_rustls_tls().user_agent(USER_AGENT))
            .redirect(Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient { http, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use proptest::prelude::*;
    use std::time::Duration;

    fn client_for(server: &mockito::Server) -> AocClient {
        AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_site() {
        let client = AocClient::new().unwrap();
        assert_eq!(
            client.input_url(2022, 7).unwrap().as_str(),
            "https://adventofcode.com/2022/day/7/input"
        );
    }

    #[test]
    fn test_base_path_is_replaced() {
        let client = AocClient::builder()
            .base_url("http://localhost:8080/some/prefix")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            client.input_url(2022, 11).unwrap().as_str(),
            "http://localhost:8080/2022/day/11/input"
        );
    }

    #[test]
    fn test_custom_http_builder() {
        let http = Client::builder().timeout(Duration::from_secs(30));
        assert!(AocClient::builder().client_builder(http).build().is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(AocClient::builder().base_url("not a valid url").is_err());
    }

    #[test]
    fn test_cookie_is_trimmed_and_sensitive() {
        let header = session_cookie("  abc123\n").unwrap();
        assert_eq!(header.to_str().unwrap(), "session=abc123");
        assert!(header.is_sensitive());
    }

    #[test]
    fn test_session_with_inner_newline_never_sent() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", Matcher::Any).expect(0).create();

        let result = client_for(&server).fetch_input(2022, 1, "abc\ndef");

        assert!(matches!(result, Err(AocError::InvalidSession(_))));
        mock.assert();
    }

    #[test]
    fn test_expired_session_redirect_is_an_error() {
        let mut server = mockito::Server::new();
        let landing = server.mock("GET", "/").expect(0).create();
        let input = server
            .mock("GET", "/2022/day/1/input")
            .with_status(302)
            .with_header("location", "/")
            .expect(1)
            .create();

        let result = client_for(&server).fetch_input(2022, 1, "expired");

        match result {
            Err(AocError::InvalidStatus { status }) => assert_eq!(status.as_u16(), 302),
            other => panic!("expected a 302, got {:?}", other),
        }
        landing.assert();
        input.assert();
    }

    #[test]
    fn test_sends_user_agent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2022/day/2/input")
            .match_header("user-agent", Matcher::Regex("^aoc-http-client/".into()))
            .with_body("A Y\n")
            .create();

        assert_eq!(client_for(&server).fetch_input(2022, 2, "s").unwrap(), b"A Y\n");
        mock.assert();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_body_returned_verbatim(
            year in 2015u16..2030,
            day in 1u8..=25,
            session in "[a-f0-9]{32,128}",
            body in "[0-9a-z \n]{0,64}",
        ) {
            let mut server = mockito::Server::new();
            let mock = server
                .mock("GET", format!("/{}/day/{}/input", year, day).as_str())
                .match_header("cookie", format!("session={}", session).as_str())
                .with_body(&body)
                .expect(1)
                .create();

            let fetched = client_for(&server).fetch_input(year, day, &session);

            mock.assert();
            prop_assert_eq!(fetched.unwrap(), body.into_bytes());
        }

        #[test]
        fn prop_failure_status_is_reported(
            day in 1u8..=25,
            code in prop::sample::select(vec![400u16, 401, 404, 429, 500, 503]),
        ) {
            let mut server = mockito::Server::new();
            let mock = server
                .mock("GET", format!("/2022/day/{}/input", day).as_str())
                .with_status(usize::from(code))
                .with_body("Please don't repeatedly request this endpoint")
                .create();

            let result = client_for(&server).fetch_input(2022, day, "session");

            mock.assert();
            match result {
                Err(AocError::InvalidStatus { status }) => prop_assert_eq!(status.as_u16(), code),
                other => prop_assert!(false, "expected status {}, got {:?}", code, other),
            }
        }
    }
}
