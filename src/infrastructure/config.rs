//! Static provider credentials
//!
//! Both upstream endpoints only accept requests that look like their own web
//! clients, so every identity value here was captured from a live browser
//! session. They are isolated in one place so an expired token or cookie can
//! be refreshed without touching request-building code.

/// Desktop browser identity both providers expect.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/99.0.4844.51 Safari/537.36";

/// Identity values for the Caiyun dict endpoint.
#[derive(Debug, Clone)]
pub struct CaiyunAuth {
    /// Bearer-style token sent as X-Authorization
    pub token: String,
    /// Fixed app identity expected by the endpoint
    pub app_name: String,
    /// Analytics cookie pair
    pub cookie: String,
    pub user_agent: String,
}

impl Default for CaiyunAuth {
    fn default() -> Self {
        Self {
            token: "token:qgemv4jr1y38jyq6vhvi".to_string(),
            app_name: "xy".to_string(),
            cookie: "_ym_uid=16456948721020430059; _ym_d=1645694872".to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}

/// Form-signing and session values for the Baidu v2transapi endpoint.
///
/// sign and token are time-limited. When they expire upstream answers with
/// an error document, which surfaces here as a bad status code or a decode
/// failure carrying the raw response.
#[derive(Debug, Clone)]
pub struct BaiduSession {
    pub sign: String,
    pub token: String,
    /// Multi-field session/tracking cookie header
    pub cookie: String,
    pub user_agent: String,
}

impl Default for BaiduSession {
    fn default() -> Self {
        Self {
            sign: "54706.276099".to_string(),
            token: "db0e12e7028abbe6b85fa5d468713b54".to_string(),
            cookie: BAIDU_SESSION_COOKIE.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}

const BAIDU_SESSION_COOKIE: &str = "BIDUPSID=3F29A27AD86E55057CD97637A802E1E6; PSTM=1647253296; BAIDUID=3F29A27AD86E5505706D23E2DA4011D8:FG=1; REALTIME_TRANS_SWITCH=1; FANYI_WORD_SWITCH=1; HISTORY_SWITCH=1; SOUND_SPD_SWITCH=1; SOUND_PREFER_SWITCH=1; APPGUIDE_10_0_2=1; BDSFRCVID=J-FOJeC624dLGOnD_vjJupsQxxvg0f5TH6aozZ6YD1l0A_6Yu0TYEG0P-M8g0Ku-KA06ogKK0eOTHkCF_2uxOjjg8UtVJeC6EG0Ptf8g0f5; H_BDCLCKID_SF=tR-tVCtatCI3HnRv5t8_5-LH-UoX-I62aKDsLRI2BhcqEIL4hjjoej5yQ-PfK-5t-T7IXUcNB-TpSMbSj4Qo24POhxQn-hjIWnILbhRT5p5nhMJN3j7JDMP0-xPfa5Oy523ion5vQpnOEpQ3DRoWXPIqbN7P-p5Z5mAqKl0MLPbtbb0xXj_0Djb-Datttjna--oa3RTeb6rjDnCr-UDVXUI82h5y05OO3JrNKpA55bQhq-Oh2-cvynKZDnORXx74B5vvbPOMthRnOlRKbpJ8DUL1Db3J2-ox5TTdsR7yfp5oepvoD-oc3MkfLPjdJJQOBKQB0KnGbUQkeq8CQft20b0EeMtjW6LEtRk8oI0aJDvDqTrP-trf5DCShUFs0fCJB2Q-XPoO3KJWsCo-QMPb3UD0KhbIhPriW5cpoMbgylRp8P3y0bb2DUA1y4vpKhbBt2TxoUJ2abjne-53qtnWeMLebPRiJPQ9QgbW5hQ7tt5W8ncFbT7l5hKpbt-q0x-jLTnhVn0MBCK0hI_GjTL2j6QMMhKX2tRfKKOb04_8Kb7VbnAwQxnkbfJBDxcUX6bfJ2neahONb4J5VtP6LT_Vytt7yajK2MvbLarnKloY5Un_VqOw0bJpQT8rKn_OK5OibCrQMKTzab3vOIJNXpO1MUtzBN5thURB2DkO-4bCWJ5TMl5jDh3Mb6ksDMDtqj-etJCe_K-Qb-3bK4TYhR7E-tCsqxby26nZHmc9aJ5nJD_MehRjXPTUBnKqylojbhoOMTcMonLaQpP-HJ7uW6jZQ5_jD-QdtqcttNnkKl0MLT6Ybb0xyn_VyUoQjxnMBMPj5mOnanvn3fAKftnOM46JehL3346-35543bRTLnLy5KJtMDcnK4-XjT3QDM5; BDSFRCVID_BFESS=J-FOJeC624dLGOnD_vjJupsQxxvg0f5TH6aozZ6YD1l0A_6Yu0TYEG0P-M8g0Ku-KA06ogKK0eOTHkCF_2uxOjjg8UtVJeC6EG0Ptf8g0f5; H_BDCLCKID_SF_BFESS=tR-tVCtatCI3HnRv5t8_5-LH-UoX-I62aKDsLRI2BhcqEIL4hjjoej5yQ-PfK-5t-T7IXUcNB-TpSMbSj4Qo24POhxQn-hjIWnILbhRT5p5nhMJN3j7JDMP0-xPfa5Oy523ion5vQpnOEpQ3DRoWXPIqbN7P-p5Z5mAqKl0MLPbtbb0xXj_0Djb-Datttjna--oa3RTeb6rjDnCr-UDVXUI82h5y05OO3JrNKpA55bQhq-Oh2-cvynKZDnORXx74B5vvbPOMthRnOlRKbpJ8DUL1Db3J2-ox5TTdsR7yfp5oepvoD-oc3MkfLPjdJJQOBKQB0KnGbUQkeq8CQft20b0EeMtjW6LEtRk8oI0aJDvDqTrP-trf5DCShUFs0fCJB2Q-XPoO3KJWsCo-QMPb3UD0KhbIhPriW5cpoMbgylRp8P3y0bb2DUA1y4vpKhbBt2TxoUJ2abjne-53qtnWeMLebPRiJPQ9QgbW5hQ7tt5W8ncFbT7l5hKpbt-q0x-jLTnhVn0MBCK0hI_GjTL2j6QMMhKX2tRfKKOb04_8Kb7VbnAwQxnkbfJBDxcUX6bfJ2neahONb4J5VtP6LT_Vytt7yajK2MvbLarnKloY5Un_VqOw0bJpQT8rKn_OK5OibCrQMKTzab3vOIJNXpO1MUtzBN5thURB2DkO-4bCWJ5TMl5jDh3Mb6ksDMDtqj-etJCe_K-Qb-3bK4TYhR7E-tCsqxby26nZHmc9aJ5nJD_MehRjXPTUBnKqylojbhoOMTcMonLaQpP-HJ7uW6jZQ5_jD-QdtqcttNnkKl0MLT6Ybb0xyn_VyUoQjxnMBMPj5mOnanvn3fAKftnOM46JehL3346-35543bRTLnLy5KJtMDcnK4-XjT3QDM5; BDORZ=B490B5EBF6F3CD402E515D22BCDA1598; JAPAN_PINYIN_SWITCH=1; delPer=0; PSINO=5; H_PS_PSSID=36309_31254_36004_35910_36167_34584_35979_36074_36235_26350_36303_36312_36061; BA_HECTOR=20al85ak21ak0584ab1h7cb820q; Hm_lvt_64ecd82404c51e03dc91cb9e8c025574=1651912098; Hm_lpvt_64ecd82404c51e03dc91cb9e8c025574=1651912098; ab_sr=1.0.1_ZjRkMTE2ZDEyYjYzYmExODk0ZDAwYmY3NTBjOWQ4MjdmYmFlODM1NjcxNjA3YTYxYTA2N2ExM2U0YzcxZTdmNTM1ZmYzNGUyNDE2MGRlZmM3MmFmNWYxYmI4NmE4ODMxMDc0OGUwZmY2OGQzYzI2ODc4MmFmOGNiMzJjYTA1N2VjMTlmZTAwZDhmOTY2MGFmNTEzMTk3MGExOWZiMDRkMQ==";
