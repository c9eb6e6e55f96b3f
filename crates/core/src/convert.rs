use crate::css::format_css;
use crate::jsx::to_jsx;
use crate::tailwind::css_to_tailwind;
use crate::types::{ConversionRequest, ConversionResult, StyleMap, TargetFormat};

/// 样式转换入口
///
/// 纯函数：同一输入总是产生逐字节相同的输出，
/// 无 I/O、无共享状态，可被任意多个调用方并发调用。
/// `use_rem` 只影响 css 格式。
pub fn convert(styles: &StyleMap, format: TargetFormat, use_rem: bool) -> String {
    match format {
        TargetFormat::Css => format_css(styles, use_rem),
        TargetFormat::Tailwind => css_to_tailwind(styles),
        TargetFormat::Jsx => to_jsx(styles),
    }
}

/// 处理一次转换请求，原样回传输入样式（供前端展示）
pub fn convert_request(request: &ConversionRequest) -> ConversionResult {
    let code = convert(&request.styles, request.format, request.use_rem);

    ConversionResult {
        success: true,
        format: request.format,
        code,
        original_styles: request.styles.clone(),
    }
}
