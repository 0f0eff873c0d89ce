//! 彩云词典客户端测试

use serde_json::json;
use wd_rust::infrastructure::network::caiyun::{render, CaiyunDictRequest, CaiyunDictResponse};

#[test]
fn test_request_body_shape() {
    let request = CaiyunDictRequest::new("hello");
    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(
        body,
        json!({"trans_type": "en2zh", "source": "hello", "user_id": ""})
    );
}

#[test]
fn test_render_pronunciation_and_explanations() {
    let body = json!({
        "rc": 0,
        "dictionary": {
            "prons": {"en": "/hə'ləʊ/", "en-us": "/həˈloʊ/"},
            "explanations": ["int. 喂；哈罗"]
        }
    });
    let response: CaiyunDictResponse = serde_json::from_value(body).unwrap();

    assert_eq!(
        render("hello", &response),
        "hello UK: /hə'ləʊ/ US: /həˈloʊ/\nint. 喂；哈罗\n"
    );
}

#[test]
fn test_explanations_keep_response_order() {
    let body = json!({
        "dictionary": {
            "explanations": ["n. 第一", "v. 第二", "adj. 第三"]
        }
    });
    let response: CaiyunDictResponse = serde_json::from_value(body).unwrap();
    let output = render("word", &response);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines, ["word UK:  US: ", "n. 第一", "v. 第二", "adj. 第三"]);
}

#[test]
fn test_decode_tolerates_missing_fields() {
    // Upstream may omit any field; an empty document must still decode
    let response: CaiyunDictResponse = serde_json::from_str("{}").unwrap();

    assert!(response.dictionary.explanations.is_empty());
    assert!(response.dictionary.prons.en.is_empty());
    assert_eq!(render("word", &response), "word UK:  US: \n");
}

#[test]
fn test_unknown_branches_are_preserved() {
    let body = json!({
        "rc": 0,
        "wiki": {"id": "abc", "sitelink": "https://example.org"},
        "dictionary": {
            "entry": "hello",
            "synonym": ["hi"],
            "belongs_to": "cald"
        }
    });
    let response: CaiyunDictResponse = serde_json::from_value(body).unwrap();

    assert!(response.extra.contains_key("wiki"));
    assert!(response.dictionary.extra.contains_key("belongs_to"));
    assert_eq!(response.dictionary.entry, "hello");
    assert_eq!(response.dictionary.synonym, ["hi"]);
}
