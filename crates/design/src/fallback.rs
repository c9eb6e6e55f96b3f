use genui_core::StyleMap;

/// 图像分析不可用时的缺省 design token
///
/// 与来源的启发式兜底一致：常见 UI 卡片的典型属性组合。
/// 真正的像素级分析由外部采集端完成，这里只保证转换链路有输入可用。
pub fn fallback_tokens() -> StyleMap {
    let mut styles = StyleMap::new();
    for (key, value) in [
        ("width", "100%"),
        ("height", "auto"),
        ("backgroundColor", "#ffffff"),
        ("color", "#000000"),
        ("fontSize", "16px"),
        ("fontWeight", "400"),
        ("padding", "16px"),
        ("borderRadius", "8px"),
        ("border", "1px solid #e5e7eb"),
    ] {
        styles.insert(key.to_string(), value.to_string());
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_stable() {
        assert_eq!(fallback_tokens(), fallback_tokens());
    }

    #[test]
    fn test_fallback_shape() {
        let styles = fallback_tokens();
        assert_eq!(styles.len(), 9);
        assert_eq!(styles.get("backgroundColor"), Some(&"#ffffff".to_string()));
        // 所有值都已是字符串形式，可直接进转换引擎
        assert!(styles.values().all(|v| !v.is_empty()));
    }
}
