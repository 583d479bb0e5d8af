//! User-facing strings, zh-CN.
//!
//! Collected here rather than scattered through the controllers so a
//! locale pass touches one file.

pub mod search {
    pub const NO_RESULTS: &str = "未找到相关内容";
}

pub mod share {
    pub const COPIED: &str = "链接已复制到剪贴板";
    pub const COPY_FAILED: &str = "复制失败，请手动复制";
    pub const WECHAT_TITLE: &str = "微信分享";
    pub const WECHAT_SCAN_HINT: &str = "扫描二维码分享到微信";

    /// Cooldown toast: "retry in {}s".
    pub fn retry_in(seconds: u32) -> String {
        format!("{}s后再试", seconds)
    }
}
