// src/core/net.rs
// HTTPS GET against the schedule site, plus URL building.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use tracing::debug;

use crate::config::consts::DATE_PARAM_FMT;
use crate::config::options::NetOptions;
use crate::data::Route;
use crate::error::{Result, TrainError};

/// Where listing pages come from. The website in production; fixtures in tests.
pub trait PageSource {
    fn get(&self, url: &str) -> Result<String>;
}

/// `https://etrain.info/trains/Howrah-Jn-HWH-to-Chittaranjan-CRJ?date=20250521`
pub fn build_url(base: &str, route: &Route, date: Option<NaiveDate>) -> String {
    let mut url = format!(
        "{}/trains/{}-to-{}",
        base.trim_end_matches('/'),
        route.origin.slug(),
        route.destination.slug()
    );
    if let Some(d) = date {
        url.push_str("?date=");
        url.push_str(&d.format(DATE_PARAM_FMT).to_string());
    }
    url
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(net: &NetOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value(&net.accept)?);
        headers.insert(ACCEPT_LANGUAGE, header_value(&net.accept_language)?);

        let client = Client::builder()
            .user_agent(net.user_agent.as_str())
            .default_headers(headers)
            .timeout(net.timeout())
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn get(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TrainError::Status { status: status.as_u16(), url: s!(url) });
        }
        let body = resp.text()?;
        debug!(bytes = body.len(), "response body read");
        Ok(body)
    }
}

fn header_value(v: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(v).map_err(|e| TrainError::Config(format!("bad header value {v:?}: {e}")))
}
