//! 错误类型测试

use wd_rust::domain::error::WdError;

#[test]
fn test_response_error_surfaces_status_and_body() {
    let err = WdError::Response {
        status: reqwest::StatusCode::FORBIDDEN,
        body: r#"{"errno":997,"errmsg":"未登录状态"}"#.to_string(),
    };
    let message = err.to_string();

    assert!(message.contains("403"));
    assert!(message.contains("errno"));
}

#[test]
fn test_decode_error_wraps_serde() {
    let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err = WdError::from(parse_err);

    assert!(matches!(err, WdError::Decode(_)));
    assert!(err.to_string().starts_with("JSON decode error"));
}
