/// 每 rem 对应的像素数（固定基准）
const PX_PER_REM: f64 = 16.0;

/// 将像素值字符串转换为 rem 字符串
///
/// 尽力而为契约：永不报错
/// - 数字前缀解析失败时原样返回输入（`"auto"` → `"auto"`）
/// - 成功时计算 value / 16，保留 3 位小数，追加 `rem` 后缀
///
/// 已知缺陷：`"50%"` 会解析出 50 并按像素处理（→ `"3.125rem"`）。
/// 下游调用方依赖现有输出，保持该行为不修正，
/// 由 test_percent_treated_as_px 钉住。
pub fn px_to_rem(value: &str) -> String {
    match leading_float(value) {
        Some(n) => format!("{:.3}rem", round_to_3(n / PX_PER_REM)),
        None => value.to_string(),
    }
}

/// 保留 3 位小数；恰好落在 .5 上的值向正无穷进位
/// （1/16 = 0.0625 → 0.063，而不是银行家舍入的 0.062）
fn round_to_3(n: f64) -> f64 {
    (n * 1000.0 + 0.5).floor() / 1000.0
}

/// 解析字符串开头的浮点数（parseFloat 语义）
///
/// - 跳过前导空白，允许符号位
/// - 读取数字与至多一个小数点，在首个无效字符处停止
/// - 指数部分仅在 e/E 后面确实有数字时才消费（`"1e"` → 1）
/// - 未读到任何数字时返回 None
pub fn leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    // 符号位
    if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
        pos += 1;
    }

    // 整数/小数部分
    let mut seen_digit = false;
    let mut seen_dot = false;
    while pos < bytes.len() {
        match bytes[pos] {
            b'0'..=b'9' => {
                seen_digit = true;
                pos += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                pos += 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }

    // 指数部分
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_end = pos + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        if exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            pos = exp_end;
        }
    }

    s[..pos].parse().ok()
}
