/// 基本使用示例：展示三种目标格式的转换输出
///
/// 运行示例：
/// ```bash
/// cargo run --example convert_styles -p genui-core
/// ```
use genui_core::{convert, StyleMap, TargetFormat};

fn main() {
    println!("=== GenUI 样式转换示例 ===\n");

    // 1. 准备样式映射（模拟浏览器扩展提取的结果）
    let mut styles = StyleMap::new();
    for (key, value) in [
        ("width", "320px"),
        ("height", "auto"),
        ("backgroundColor", "rgb(59, 130, 246)"),
        ("color", "rgb(255, 255, 255)"),
        ("fontSize", "14px"),
        ("fontWeight", "700"),
        ("padding", "16px"),
        ("borderRadius", "8px"),
        ("display", "flex"),
        ("justifyContent", "center"),
        ("alignItems", "center"),
    ] {
        styles.insert(key.to_string(), value.to_string());
    }
    println!("✓ 输入样式：{} 条属性", styles.len());

    // 2. 示例 1：CSS 输出（px → rem）
    println!("\n--- 示例 1: CSS（useRem 开启） ---");
    let css = convert(&styles, TargetFormat::Css, true);
    println!("{}", css);

    // 3. 示例 2：CSS 输出（原始单位）
    println!("\n--- 示例 2: CSS（原始单位） ---");
    let css_raw = convert(&styles, TargetFormat::Css, false);
    println!("{}", css_raw);

    // 4. 示例 3：Tailwind 输出
    println!("\n--- 示例 3: Tailwind ---");
    let tailwind = convert(&styles, TargetFormat::Tailwind, true);
    println!("{}", tailwind);

    // 5. 示例 4：JSX 输出（结构性透传）
    println!("\n--- 示例 4: JSX ---");
    let jsx = convert(&styles, TargetFormat::Jsx, true);
    println!("{}", jsx);

    // 6. 示例 5：未知格式在边界处被拒绝
    println!("\n--- 示例 5: 未知格式 ---");
    match "svg".parse::<TargetFormat>() {
        Ok(_) => unreachable!(),
        Err(err) => println!("解析失败（预期内）: {}", err),
    }

    println!("\n=== 示例完成 ===");
}
