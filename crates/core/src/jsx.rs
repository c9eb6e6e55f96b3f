use crate::types::StyleMap;

/// 将样式映射序列化为 JSX 内联 style 字符串
///
/// 结构性透传，不是语义转换：键保持 camelCase，值保持原始字符串，
/// 不做单位/颜色规范化。输出为 `style={` + 2 空格缩进的 JSON + `}`，
/// JSON 自身的花括号紧贴外层花括号（`style={{ ... }}`）。
pub fn to_jsx(styles: &StyleMap) -> String {
    // 字符串键值对的序列化不可能失败
    let json =
        serde_json::to_string_pretty(styles).expect("StyleMap serialization is infallible");
    format!("style={{{}}}", json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles_from(entries: &[(&str, &str)]) -> StyleMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_single_entry() {
        let styles = styles_from(&[("width", "10px")]);
        assert_eq!(to_jsx(&styles), "style={{\n  \"width\": \"10px\"\n}}");
    }

    #[test]
    fn test_keys_stay_camel_case() {
        let styles = styles_from(&[("backgroundColor", "rgb(0, 0, 0)")]);
        assert_eq!(
            to_jsx(&styles),
            "style={{\n  \"backgroundColor\": \"rgb(0, 0, 0)\"\n}}"
        );
    }

    #[test]
    fn test_insertion_order_and_indent() {
        let styles = styles_from(&[("width", "100px"), ("height", "50px")]);
        assert_eq!(
            to_jsx(&styles),
            "style={{\n  \"width\": \"100px\",\n  \"height\": \"50px\"\n}}"
        );
    }

    #[test]
    fn test_no_normalization() {
        // px 值与 "auto" 都原样进入输出
        let styles = styles_from(&[("margin", "auto"), ("padding", "16px")]);
        assert_eq!(
            to_jsx(&styles),
            "style={{\n  \"margin\": \"auto\",\n  \"padding\": \"16px\"\n}}"
        );
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(to_jsx(&StyleMap::new()), "style={{}}");
    }
}
