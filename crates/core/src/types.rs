use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 样式映射：属性名（camelCase 语义键）→ 字符串值
///
/// 保持插入顺序——CSS 与 JSX 输出都按原始顺序逐条生成。
/// 值可以是带单位的长度、关键字或 rgb()/rgba()/hex 颜色，
/// 未识别的键由各转换器自行透传或忽略。
pub type StyleMap = IndexMap<String, String>;

/// 目标输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    /// CSS 声明块
    Css,
    /// Tailwind 工具类序列
    Tailwind,
    /// JSX 内联 style 对象
    Jsx,
}

impl TargetFormat {
    /// 请求/响应中使用的格式名
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFormat::Css => "css",
            TargetFormat::Tailwind => "tailwind",
            TargetFormat::Jsx => "jsx",
        }
    }
}

impl Default for TargetFormat {
    fn default() -> Self {
        TargetFormat::Css
    }
}

impl std::str::FromStr for TargetFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "css" => Ok(TargetFormat::Css),
            "tailwind" => Ok(TargetFormat::Tailwind),
            "jsx" => Ok(TargetFormat::Jsx),
            other => Err(FormatError::Unsupported(other.to_string())),
        }
    }
}

impl std::fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 格式解析错误
///
/// 字符串到 `TargetFormat` 的转换只发生在调用边界，
/// 引擎内部对格式做穷举匹配，不存在运行时的未知分支。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// 不在 css / tailwind / jsx 之内的格式名
    Unsupported(String),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::Unsupported(got) => write!(
                f,
                "Invalid format \"{}\". Use \"css\", \"tailwind\", or \"jsx\".",
                got
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// 输入：样式映射 + 目标格式
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub styles: StyleMap,
    /// 缺省为 css
    #[serde(default)]
    pub format: TargetFormat,
    /// 仅对 css 格式生效，缺省开启
    #[serde(default = "default_use_rem")]
    pub use_rem: bool,
}

fn default_use_rem() -> bool {
    true
}

impl ConversionRequest {
    pub fn new(styles: StyleMap, format: TargetFormat) -> Self {
        Self {
            styles,
            format,
            use_rem: true,
        }
    }

    /// 关闭 px → rem 换算
    pub fn with_raw_units(mut self) -> Self {
        self.use_rem = false;
        self
    }
}

/// 输出：生成的代码 + 原样回传的样式（供前端展示）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub success: bool,
    pub format: TargetFormat,
    pub code: String,
    pub original_styles: StyleMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("css".parse::<TargetFormat>(), Ok(TargetFormat::Css));
        assert_eq!(
            "tailwind".parse::<TargetFormat>(),
            Ok(TargetFormat::Tailwind)
        );
        assert_eq!("jsx".parse::<TargetFormat>(), Ok(TargetFormat::Jsx));
    }

    #[test]
    fn test_format_from_str_unsupported() {
        let err = "svg".parse::<TargetFormat>().unwrap_err();
        assert_eq!(err, FormatError::Unsupported("svg".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid format \"svg\". Use \"css\", \"tailwind\", or \"jsx\"."
        );
    }

    #[test]
    fn test_format_case_sensitive() {
        // 大小写敏感，与请求协议一致
        assert!("CSS".parse::<TargetFormat>().is_err());
        assert!("Tailwind".parse::<TargetFormat>().is_err());
    }

    #[test]
    fn test_request_defaults() {
        let json = r#"{ "styles": { "width": "100px" } }"#;
        let request: ConversionRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.format, TargetFormat::Css);
        assert!(request.use_rem);
        assert_eq!(request.styles.get("width"), Some(&"100px".to_string()));
    }

    #[test]
    fn test_request_explicit_fields() {
        let json = r#"{
            "styles": { "color": "rgb(0, 0, 0)" },
            "format": "tailwind",
            "useRem": false
        }"#;
        let request: ConversionRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.format, TargetFormat::Tailwind);
        assert!(!request.use_rem);
    }

    #[test]
    fn test_format_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&TargetFormat::Tailwind).unwrap(),
            "\"tailwind\""
        );
        let parsed: TargetFormat = serde_json::from_str("\"jsx\"").unwrap();
        assert_eq!(parsed, TargetFormat::Jsx);
    }

    #[test]
    fn test_style_map_preserves_insertion_order() {
        let mut styles = StyleMap::new();
        styles.insert("width".to_string(), "100px".to_string());
        styles.insert("color".to_string(), "red".to_string());
        styles.insert("display".to_string(), "flex".to_string());

        let keys: Vec<&str> = styles.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["width", "color", "display"]);
    }
}
