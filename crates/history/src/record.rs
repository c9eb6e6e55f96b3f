use genui_core::TargetFormat;
use serde::{Deserialize, Serialize};

/// 一条转换历史记录（对应持久化存储的一行）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    /// 不透明的稳定 id（`h_` + 12 位 hex）
    pub id: String,
    pub format: TargetFormat,
    /// 原始样式的 JSON 字符串（前端展示时再解析）
    pub input_styles: String,
    pub output_code: String,
    pub user_agent: String,
    /// 匿名用户记为 "0"
    pub creator_id: String,
    /// 毫秒时间戳，由持有 I/O 的调用方提供
    pub created_at: u64,
}

/// 新记录的输入（id 由 store 派生）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConversion {
    pub format: TargetFormat,
    pub input_styles: String,
    pub output_code: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub creator_id: Option<String>,
    pub created_at: u64,
}

impl NewConversion {
    /// 构造完整记录
    ///
    /// 缺省 user_agent 记为 "Unknown"，未认证用户记为 "0"，
    /// 与持久化行的缺省值约定一致。
    pub fn into_record(self, seq: u64) -> ConversionRecord {
        let id = record_id(seq, self.format, &self.input_styles, self.created_at);

        ConversionRecord {
            id,
            format: self.format,
            input_styles: self.input_styles,
            output_code: self.output_code,
            user_agent: self
                .user_agent
                .filter(|ua| !ua.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            creator_id: self
                .creator_id
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "0".to_string()),
            created_at: self.created_at,
        }
    }
}

/// 基于内容生成稳定的记录 id
///
/// blake3(seq + format + input + created_at)，取前 12 位 hex。
/// seq 保证同一毫秒内的重复提交也得到不同 id。
pub fn record_id(seq: u64, format: TargetFormat, input_styles: &str, created_at: u64) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&seq.to_le_bytes());
    hasher.update(format.as_str().as_bytes());
    hasher.update(input_styles.as_bytes());
    hasher.update(&created_at.to_le_bytes());

    let hex = hasher.finalize().to_hex();
    format!("h_{}", &hex.as_str()[..12])
}
