use phf::phf_map;

use crate::color::rgb_to_hex;
use crate::types::StyleMap;
use crate::unit::leading_float;

/// font-weight 关键字映射
///
/// 未覆盖的值（400 / normal 等）不产生 token，与既有行为一致
static FONT_WEIGHT_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "700" => "font-bold",
    "bold" => "font-bold",
    "600" => "font-semibold",
    "500" => "font-medium",
};

/// justify-content 关键字映射（未覆盖的值静默跳过）
static JUSTIFY_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "center" => "justify-center",
    "space-between" => "justify-between",
    "flex-start" => "justify-start",
    "flex-end" => "justify-end",
};

/// align-items 关键字映射（未覆盖的值静默跳过）
static ALIGN_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "center" => "items-center",
    "flex-start" => "items-start",
    "flex-end" => "items-end",
};

/// 取非空样式值（空字符串视为缺失）
fn present<'a>(styles: &'a StyleMap, key: &str) -> Option<&'a str> {
    styles
        .get(key)
        .map(|v| v.as_str())
        .filter(|v| !v.is_empty())
}

/// 将样式映射转换为 Tailwind 工具类序列
///
/// 按固定顺序逐属性求值：尺寸 → 颜色 → 排版 → 间距 → 边框 → flex 族。
/// 各 token 互不排斥，缺失的属性直接跳过；
/// 输出为空格连接的 class 列表，顺序稳定以便断言。
pub fn css_to_tailwind(styles: &StyleMap) -> String {
    let mut classes: Vec<String> = Vec::new();

    // 尺寸：数字前缀为 0 或解析失败时不产生 token
    if let Some(width) = present(styles, "width") {
        if leading_float(width).is_some_and(|w| w != 0.0) {
            classes.push(format!("w-[{}]", width));
        }
    }
    if let Some(height) = present(styles, "height") {
        if leading_float(height).is_some_and(|h| h != 0.0) {
            classes.push(format!("h-[{}]", height));
        }
    }

    // 颜色：经 rgb_to_hex 规范化
    if let Some(bg) = present(styles, "backgroundColor") {
        classes.push(format!("bg-[{}]", rgb_to_hex(bg)));
    }
    if let Some(color) = present(styles, "color") {
        classes.push(format!("text-[{}]", rgb_to_hex(color)));
    }

    // 排版：字号原样进任意值，字重查关键字表
    if let Some(size) = present(styles, "fontSize") {
        classes.push(format!("text-[{}]", size));
    }
    if let Some(weight) = present(styles, "fontWeight") {
        if let Some(&class) = FONT_WEIGHT_MAP.get(weight) {
            classes.push(class.to_string());
        }
    }

    // 间距：原样透传，不做单位处理
    if let Some(padding) = present(styles, "padding") {
        classes.push(format!("p-[{}]", padding));
    }
    if let Some(margin) = present(styles, "margin") {
        classes.push(format!("m-[{}]", margin));
    }

    // 边框
    if let Some(radius) = present(styles, "borderRadius") {
        classes.push(format!("rounded-[{}]", radius));
    }
    if let Some(border_width) = present(styles, "borderWidth") {
        if leading_float(border_width).is_some_and(|w| w > 0.0) {
            classes.push(format!("border-[{}]", border_width));
            // 颜色 token 只在宽度 token 存在时跟随其后
            if let Some(border_color) = present(styles, "borderColor") {
                classes.push(format!("border-[{}]", rgb_to_hex(border_color)));
            }
        }
    }

    // 布局：仅 display: flex 时展开 flex 族
    if present(styles, "display") == Some("flex") {
        classes.push("flex".to_string());

        match present(styles, "flexDirection") {
            Some("column") => classes.push("flex-col".to_string()),
            Some("row") => classes.push("flex-row".to_string()),
            _ => {}
        }
        if let Some(justify) = present(styles, "justifyContent") {
            if let Some(&class) = JUSTIFY_MAP.get(justify) {
                classes.push(class.to_string());
            }
        }
        if let Some(align) = present(styles, "alignItems") {
            if let Some(&class) = ALIGN_MAP.get(align) {
                classes.push(class.to_string());
            }
        }
    }

    classes.join(" ")
}
