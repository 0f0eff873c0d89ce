use crate::domain::error::WdError;
use crate::domain::traits::DictSource;
use crate::infrastructure::config::BaiduSession;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt::Write;
use tracing::debug;

const TRANS_URL: &str = "https://fanyi.baidu.com/v2transapi?from=en&to=zh";

/// Form pairs for v2transapi, in the order the web client sends them.
pub fn form_params<'a>(word: &'a str, session: &'a BaiduSession) -> [(&'static str, &'a str); 8] {
    [
        ("from", "en"),
        ("to", "zh"),
        ("query", word),
        ("transtype", "realtime"),
        ("simple_means_flag", "3"),
        ("sign", session.sign.as_str()),
        ("token", session.token.as_str()),
        ("domain", "common"),
    ]
}

// Response schema. The response bundles several dictionary sub-providers;
// only the edict branch is typed all the way down. The other sections vary
// by word and are preserved opaquely in `extra`, so a shape change there
// cannot break decoding.
#[derive(Debug, Default, Deserialize)]
pub struct BaiduDictResponse {
    #[serde(default)]
    pub dict_result: BaiduDictResult,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BaiduDictResult {
    #[serde(default)]
    pub edict: Edict,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// 按词性分组的词条
#[derive(Debug, Default, Deserialize)]
pub struct Edict {
    #[serde(default)]
    pub item: Vec<EdictEntry>,
    #[serde(default)]
    pub word: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EdictEntry {
    #[serde(default)]
    pub tr_group: Vec<TrGroup>,
    #[serde(default)]
    pub pos: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrGroup {
    #[serde(default)]
    pub tr: Vec<String>,
    #[serde(default)]
    pub example: Vec<String>,
    #[serde(default)]
    pub similar_word: Vec<String>,
}

pub struct BaiduClient {
    client: Client,
    session: BaiduSession,
}

impl BaiduClient {
    pub fn new(client: Client, session: BaiduSession) -> Self {
        Self { client, session }
    }

    pub async fn lookup(&self, word: &str) -> Result<BaiduDictResponse, WdError> {
        debug!(word, "querying baidu translate");

        let params = form_params(word, &self.session);
        let response = self
            .client
            .post(TRANS_URL)
            .header("Connection", "keep-alive")
            .header(
                "sec-ch-ua",
                r#"" Not A;Brand";v="99", "Chromium";v="99", "Google Chrome";v="99""#,
            )
            .header("Accept", "*/*")
            .header(
                "Content-Type",
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .header("X-Requested-With", "XMLHttpRequest")
            .header("sec-ch-ua-mobile", "?0")
            .header("User-Agent", &self.session.user_agent)
            .header("sec-ch-ua-platform", "\"macOS\"")
            .header("Origin", "https://fanyi.baidu.com")
            .header("Sec-Fetch-Site", "same-origin")
            .header("Sec-Fetch-Mode", "cors")
            .header("Sec-Fetch-Dest", "empty")
            .header(
                "Referer",
                "https://fanyi.baidu.com/translate?aldtype=16047&query=&keyfrom=baidu&smartresult=dict&lang=auto2zh",
            )
            .header("Accept-Language", "zh-CN,zh;q=0.9")
            .header("Cookie", &self.session.cookie)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(WdError::Response { status, body });
        }
        debug!(len = body.len(), "baidu response received");

        Ok(serde_json::from_str(&body)?)
    }
}

/// Render one line per translation group, entries outer, groups inner.
pub fn render(response: &BaiduDictResponse) -> String {
    let mut output = String::new();
    for item in &response.dict_result.edict.item {
        for group in &item.tr_group {
            writeln!(output, "by baidu [{}]", group.example.join(" ")).ok();
        }
    }
    output
}

#[async_trait]
impl DictSource for BaiduClient {
    fn name(&self) -> &'static str {
        "baidu"
    }

    async fn query(&self, word: &str) -> Result<String, WdError> {
        let response = self.lookup(word).await?;
        Ok(render(&response))
    }
}
