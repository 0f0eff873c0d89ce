use crate::domain::error::WdError;
use crate::domain::traits::DictSource;
use crate::infrastructure::config::CaiyunAuth;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Write;
use tracing::debug;

const DICT_URL: &str = "https://api.interpreter.caiyunai.com/v1/dict";

/// Request body for the dict endpoint. The translation direction is fixed
/// to English-to-Chinese and the endpoint accepts an empty user id.
#[derive(Debug, Serialize)]
pub struct CaiyunDictRequest<'a> {
    pub trans_type: &'a str,
    pub source: &'a str,
    pub user_id: &'a str,
}

impl<'a> CaiyunDictRequest<'a> {
    pub fn new(word: &'a str) -> Self {
        Self {
            trans_type: "en2zh",
            source: word,
            user_id: "",
        }
    }
}

// Response schema. Only the fields that get printed are typed; the upstream
// shape is not ours, so everything else is kept opaquely in `extra` and any
// absent field decodes to its empty value.
#[derive(Debug, Default, Deserialize)]
pub struct CaiyunDictResponse {
    #[serde(default)]
    pub rc: i64,
    #[serde(default)]
    pub dictionary: CaiyunDictionary,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CaiyunDictionary {
    #[serde(default)]
    pub prons: CaiyunProns,
    #[serde(default)]
    pub explanations: Vec<String>,
    #[serde(default)]
    pub synonym: Vec<String>,
    #[serde(default)]
    pub antonym: Vec<String>,
    #[serde(default)]
    pub wqx_example: Vec<Vec<String>>,
    #[serde(default)]
    pub entry: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CaiyunProns {
    #[serde(default)]
    pub en: String,
    #[serde(rename = "en-us", default)]
    pub en_us: String,
}

pub struct CaiyunClient {
    client: Client,
    auth: CaiyunAuth,
}

impl CaiyunClient {
    pub fn new(client: Client, auth: CaiyunAuth) -> Self {
        Self { client, auth }
    }

    pub async fn lookup(&self, word: &str) -> Result<CaiyunDictResponse, WdError> {
        debug!(word, "querying caiyun dict");

        let request = CaiyunDictRequest::new(word);
        let response = self
            .client
            .post(DICT_URL)
            .header("Connection", "keep-alive")
            .header("DNT", "1")
            .header("os-version", "")
            .header("sec-ch-ua-mobile", "?0")
            .header("User-Agent", &self.auth.user_agent)
            .header("app-name", &self.auth.app_name)
            .header("Content-Type", "application/json;charset=UTF-8")
            .header("Accept", "application/json, text/plain, */*")
            .header("device-id", "")
            .header("os-type", "web")
            .header("X-Authorization", &self.auth.token)
            .header("Origin", "https://fanyi.caiyunapp.com")
            .header("Sec-Fetch-Site", "cross-site")
            .header("Sec-Fetch-Mode", "cors")
            .header("Sec-Fetch-Dest", "empty")
            .header("Referer", "https://fanyi.caiyunapp.com/")
            .header("Accept-Language", "zh-CN,zh;q=0.9")
            .header("Cookie", &self.auth.cookie)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(WdError::Response { status, body });
        }
        debug!(len = body.len(), "caiyun response received");

        Ok(serde_json::from_str(&body)?)
    }
}

/// Render the pronunciation line and one line per explanation, in
/// response order.
pub fn render(word: &str, response: &CaiyunDictResponse) -> String {
    let mut output = String::new();
    writeln!(
        output,
        "{} UK: {} US: {}",
        word, response.dictionary.prons.en, response.dictionary.prons.en_us
    )
    .ok();
    for explanation in &response.dictionary.explanations {
        writeln!(output, "{}", explanation).ok();
    }
    output
}

#[async_trait]
impl DictSource for CaiyunClient {
    fn name(&self) -> &'static str {
        "caiyun"
    }

    async fn query(&self, word: &str) -> Result<String, WdError> {
        let response = self.lookup(word).await?;
        Ok(render(word, &response))
    }
}
