pub mod baidu;
pub mod caiyun;
pub mod http;

// Re-export for convenience
pub use baidu::BaiduClient;
pub use caiyun::CaiyunClient;
