use genui_core::StyleMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// design token 值：图像分析返回的 JSON 里字符串和数字混用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Text(String),
}

impl TokenValue {
    pub fn number(n: f64) -> Self {
        TokenValue::Number(n)
    }

    pub fn text(s: impl Into<String>) -> Self {
        TokenValue::Text(s.into())
    }
}

/// 数字值需要补 px 后缀的属性关键字
///
/// 子串匹配且大小写敏感：`fontSize` 命中，`borderWidth`（大写 W）不命中，
/// 与既有行为保持一致
const PX_KEYS: &[&str] = &[
    "width",
    "height",
    "padding",
    "margin",
    "fontSize",
    "borderRadius",
];

fn is_px_key(key: &str) -> bool {
    PX_KEYS.iter().any(|k| key.contains(k))
}

/// 将 design token 规范化为 CSS 兼容的字符串值
///
/// - 尺寸类属性的数字值补 px 后缀
/// - 其余数字值直接转字符串（fontWeight: 400 → "400"）
/// - 字符串值原样透传
///
/// 输出保持输入顺序，可直接作为 StyleMap 交给转换引擎。
pub fn normalize_tokens(tokens: &IndexMap<String, TokenValue>) -> StyleMap {
    let mut normalized = StyleMap::new();

    for (key, value) in tokens {
        let text = match value {
            TokenValue::Number(n) => {
                if is_px_key(key) {
                    format!("{}px", n)
                } else {
                    format!("{}", n)
                }
            }
            TokenValue::Text(s) => s.clone(),
        };
        normalized.insert(key.clone(), text);
    }

    normalized
}
