use folio_shared::{config::DEFAULT_API_BASE, ApiConfig, BodyTrust};

// API base URL - 编译时从环境变量读取，默认本地开发地址
// 生产环境通过 workflow 设置 FOLIO_API_BASE 环境变量
pub const API_BASE: &str = match option_env!("FOLIO_API_BASE") {
    Some(url) => url,
    None => DEFAULT_API_BASE,
};

/// Any non-empty value other than `0`/`false` turns on body sanitizing.
const SANITIZE_BODY: Option<&str> = option_env!("FOLIO_SANITIZE_BODY");

/// Build the client configuration once at startup.
pub fn app_config() -> ApiConfig {
    let trust = match SANITIZE_BODY.map(str::trim) {
        None | Some("") | Some("0") | Some("false") => BodyTrust::Trusted,
        Some(_) => BodyTrust::Sanitized,
    };
    ApiConfig::new(API_BASE).with_body_trust(trust)
}
