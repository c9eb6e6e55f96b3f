use crate::types::StyleMap;
use crate::unit::px_to_rem;

/// camelCase → kebab-case：每个大写字母前插入连字符并转小写
///
/// `backgroundColor` → `background-color`，
/// 首字母大写的键也会得到前导连字符（`WebkitMask` → `-webkit-mask`）
fn to_kebab_case(property: &str) -> String {
    let mut result = String::with_capacity(property.len() + 4);

    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            result.push('-');
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}

/// 将样式映射格式化为 CSS 声明块
///
/// - 按插入顺序逐条输出；值为空、`"none"`、`"auto"` 的条目被过滤
/// - `use_rem` 开启且值包含 `px` 子串时经单位规范化
/// - 每行两空格缩进 `<kebab-属性>: <值>;`，整体包在 `{\n` 与 `}` 之间
///
/// 颜色值在这条路径上不做规范化（rgb() 原样输出）——
/// 与 Tailwind 路径的不对称是刻意保留的既有行为。
pub fn format_css(styles: &StyleMap, use_rem: bool) -> String {
    let mut css = String::new();

    for (property, value) in styles {
        if value.is_empty() || value == "none" || value == "auto" {
            continue;
        }

        let css_value = if use_rem && value.contains("px") {
            px_to_rem(value)
        } else {
            value.clone()
        };

        css.push_str("  ");
        css.push_str(&to_kebab_case(property));
        css.push_str(": ");
        css.push_str(&css_value);
        css.push_str(";\n");
    }

    format!("{{\n{}}}", css)
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
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("backgroundColor"), "background-color");
        assert_eq!(to_kebab_case("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(to_kebab_case("width"), "width");
    }

    #[test]
    fn test_format_basic() {
        let styles = styles_from(&[("backgroundColor", "red"), ("fontSize", "1.5rem")]);
        assert_eq!(
            format_css(&styles, false),
            "{\n  background-color: red;\n  font-size: 1.5rem;\n}"
        );
    }

    #[test]
    fn test_filters_empty_none_auto() {
        let styles = styles_from(&[
            ("width", "auto"),
            ("boxShadow", "none"),
            ("margin", ""),
            ("color", "rgb(0, 0, 0)"),
        ]);
        // 被过滤的条目整行消失，颜色值原样保留（CSS 路径不做颜色规范化）
        assert_eq!(format_css(&styles, true), "{\n  color: rgb(0, 0, 0);\n}");
    }

    #[test]
    fn test_rem_conversion() {
        let styles = styles_from(&[("fontSize", "16px"), ("padding", "8px")]);
        assert_eq!(
            format_css(&styles, true),
            "{\n  font-size: 1.000rem;\n  padding: 0.500rem;\n}"
        );
    }

    #[test]
    fn test_rem_disabled() {
        let styles = styles_from(&[("fontSize", "16px")]);
        assert_eq!(format_css(&styles, false), "{\n  font-size: 16px;\n}");
    }

    #[test]
    fn test_rem_only_for_px_values() {
        // 不含 px 子串的值不换算
        let styles = styles_from(&[("width", "50%"), ("lineHeight", "1.4")]);
        assert_eq!(
            format_css(&styles, true),
            "{\n  width: 50%;\n  line-height: 1.4;\n}"
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let styles = styles_from(&[("zIndex", "10"), ("display", "block"), ("color", "red")]);
        assert_eq!(
            format_css(&styles, false),
            "{\n  z-index: 10;\n  display: block;\n  color: red;\n}"
        );
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(format_css(&StyleMap::new(), true), "{\n}");
    }
}
