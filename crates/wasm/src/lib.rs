use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

use genui_core::{convert, ConversionResult, StyleMap, TargetFormat};
use genui_design::{normalize_tokens, DesignDocument, TokenValue};
use genui_history::{paginate, ConversionRecord, HistoryQuery, NewConversion, Pagination};

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsConvertOptions {
    /// 格式以字符串传入，未知值在这里被拒绝（400 语义）
    #[serde(default)]
    format: Option<String>,
    #[serde(default = "default_use_rem")]
    use_rem: bool,
}

impl Default for JsConvertOptions {
    fn default() -> Self {
        Self {
            format: None,
            use_rem: true,
        }
    }
}

fn default_use_rem() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct JsHistoryOptions {
    limit: usize,
    offset: usize,
    format: Option<String>,
}

impl Default for JsHistoryOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
            format: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsNewConversion {
    format: String,
    styles: StyleMap,
    output_code: String,
    #[serde(default)]
    user_agent: Option<String>,
    #[serde(default)]
    creator_id: Option<String>,
    /// 毫秒时间戳由 JS 侧提供（引擎自身不读时钟）
    created_at: u64,
    #[serde(default)]
    seq: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsHistoryPage {
    success: bool,
    data: Vec<ConversionRecord>,
    pagination: Pagination,
}

// ── 解析与序列化辅助 ──────────────────────────────────────────

fn parse_styles(styles: JsValue) -> Result<StyleMap, JsError> {
    if styles.is_undefined() || styles.is_null() {
        return Err(JsError::new("Invalid request. \"styles\" object is required."));
    }
    serde_wasm_bindgen::from_value(styles)
        .map_err(|_| JsError::new("Invalid request. \"styles\" object is required."))
}

fn parse_convert_options(options: JsValue) -> Result<JsConvertOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(JsConvertOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

/// 字符串格式名 → TargetFormat；缺省 css
fn parse_format(format: Option<&str>) -> Result<TargetFormat, JsError> {
    match format {
        None => Ok(TargetFormat::default()),
        Some(s) => s
            .parse::<TargetFormat>()
            .map_err(|_| JsError::new("Invalid format. Use \"css\", \"tailwind\", or \"jsx\".")),
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 转换样式映射
///
/// @param styles  - 扁平的样式对象（camelCase 键 → 字符串值）
/// @param options - `{ format?, useRem? }`，可选
/// @returns `{ success, format, code, originalStyles }`
#[wasm_bindgen(js_name = "convertStyles")]
pub fn convert_styles(styles: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let style_map = parse_styles(styles)?;
    let opts = parse_convert_options(options)?;
    let format = parse_format(opts.format.as_deref())?;

    let code = convert(&style_map, format, opts.use_rem);
    let result = ConversionResult {
        success: true,
        format,
        code,
        original_styles: style_map,
    };
    to_js(&result)
}

/// 将嵌套 design.json 文档压平为样式对象
///
/// @param document - `{ meta?, colors?, layout?, typography?, components? }`
/// @returns 可直接传给 convertStyles 的扁平样式对象
#[wasm_bindgen(js_name = "flattenDesign")]
pub fn flatten_design(document: JsValue) -> Result<JsValue, JsError> {
    let doc: DesignDocument = serde_wasm_bindgen::from_value(document)
        .map_err(|e| JsError::new(&format!("Invalid design document: {}", e)))?;
    to_js(&doc.flatten())
}

/// 规范化扁平 design token（数字值补 px 后缀）
///
/// @param tokens - `{ key: string | number }` 对象
#[wasm_bindgen(js_name = "normalizeTokens")]
pub fn normalize_design_tokens(tokens: JsValue) -> Result<JsValue, JsError> {
    let map: IndexMap<String, TokenValue> = serde_wasm_bindgen::from_value(tokens)
        .map_err(|_| JsError::new("Invalid request. \"designJson\" object is required."))?;
    to_js(&normalize_tokens(&map))
}

/// 构造待持久化的历史记录行
///
/// 持久化本身由 JS 胶水层完成；这里只负责缺省值、
/// input_styles 的 JSON 序列化和稳定 id 的派生。
#[wasm_bindgen(js_name = "prepareHistoryRow")]
pub fn prepare_history_row(conversion: JsValue) -> Result<JsValue, JsError> {
    let input: JsNewConversion = serde_wasm_bindgen::from_value(conversion)
        .map_err(|e| JsError::new(&format!("Invalid conversion payload: {}", e)))?;
    let format = parse_format(Some(&input.format))?;

    // 字符串键值对的序列化不可能失败
    let input_styles =
        serde_json::to_string(&input.styles).expect("StyleMap serialization is infallible");

    let record = NewConversion {
        format,
        input_styles,
        output_code: input.output_code,
        user_agent: input.user_agent,
        creator_id: input.creator_id,
        created_at: input.created_at,
    }
    .into_record(input.seq);

    to_js(&record)
}

/// 过滤 + 排序 + 分页历史记录
///
/// @param rows    - 持久层取回的记录数组
/// @param options - `{ limit?, offset?, format? }`，可选
/// @returns `{ success, data, pagination }`
#[wasm_bindgen(js_name = "paginateHistory")]
pub fn paginate_history(rows: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let records: Vec<ConversionRecord> = serde_wasm_bindgen::from_value(rows)
        .map_err(|e| JsError::new(&format!("Invalid history rows: {}", e)))?;

    let opts: JsHistoryOptions = if options.is_undefined() || options.is_null() {
        JsHistoryOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?
    };

    let format = match opts.format.as_deref() {
        Some(s) => Some(parse_format(Some(s))?),
        None => None,
    };

    let query = HistoryQuery {
        limit: opts.limit,
        offset: opts.offset,
        format,
    };
    let page = paginate(records, &query);

    to_js(&JsHistoryPage {
        success: true,
        data: page.data,
        pagination: page.pagination,
    })
}
