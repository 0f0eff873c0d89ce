//! 静态凭据测试

use wd_rust::infrastructure::config::{BaiduSession, CaiyunAuth, BROWSER_USER_AGENT};

#[test]
fn test_caiyun_auth_defaults() {
    let auth = CaiyunAuth::default();

    assert_eq!(auth.token, "token:qgemv4jr1y38jyq6vhvi");
    assert_eq!(auth.app_name, "xy");
    assert_eq!(auth.cookie, "_ym_uid=16456948721020430059; _ym_d=1645694872");
    assert_eq!(auth.user_agent, BROWSER_USER_AGENT);
}

#[test]
fn test_baidu_session_defaults() {
    let session = BaiduSession::default();

    assert_eq!(session.sign, "54706.276099");
    assert_eq!(session.token, "db0e12e7028abbe6b85fa5d468713b54");
    assert!(session.cookie.contains("BIDUPSID="));
    assert!(session.cookie.contains("BAIDUID="));
    assert_eq!(session.user_agent, BROWSER_USER_AGENT);
}

#[test]
fn test_browser_user_agent_is_desktop_chrome() {
    assert!(BROWSER_USER_AGENT.starts_with("Mozilla/5.0 (Macintosh"));
    assert!(BROWSER_USER_AGENT.contains("Chrome/99"));
}
