/// 提取字符串中的连续数字段（等价于按 `\d+` 匹配）
///
/// 饱和解析：病态的超长数字段截断到 u64 上限而不是回绕
fn digit_runs(input: &str) -> Vec<u64> {
    let mut runs = Vec::new();
    let mut current: Option<u64> = None;

    for ch in input.chars() {
        match ch.to_digit(10) {
            Some(d) => {
                let acc = current.unwrap_or(0);
                current = Some(acc.saturating_mul(10).saturating_add(u64::from(d)));
            }
            None => {
                if let Some(n) = current.take() {
                    runs.push(n);
                }
            }
        }
    }
    if let Some(n) = current {
        runs.push(n);
    }

    runs
}

/// 将 rgb()/rgba() 字符串转换为 6 位 hex 颜色
///
/// 尽力而为契约：永不报错
/// - 数字段不足 3 个时原样返回（hex 短写、命名颜色直接通过）
/// - 取前 3 段作为 R/G/B，alpha 分量被丢弃
/// - 不做 0-255 范围校验，越界输入产生越界 hex
pub fn rgb_to_hex(value: &str) -> String {
    let runs = digit_runs(value);
    if runs.len() < 3 {
        return value.to_string();
    }

    let (r, g, b) = (runs[0], runs[1], runs[2]);
    let packed = 0x1000000u64
        .saturating_add(r.saturating_mul(0x10000))
        .saturating_add(g.saturating_mul(0x100))
        .saturating_add(b);

    // 最高位的 1 只是进位哨兵，丢掉首个 hex 字符
    let hex = format!("{:x}", packed);
    format!("#{}", &hex[1..])
}
