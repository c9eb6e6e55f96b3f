use genui_core::TargetFormat;
use serde::{Deserialize, Serialize};

use crate::record::{ConversionRecord, NewConversion};

/// 历史查询参数
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryQuery {
    pub limit: usize,
    pub offset: usize,
    /// 可选的格式过滤
    pub format: Option<TargetFormat>,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
            format: None,
        }
    }
}

impl HistoryQuery {
    pub fn with_format(mut self, format: TargetFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn page(mut self, limit: usize, offset: usize) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }
}

/// 分页信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
    pub total: usize,
    pub has_more: bool,
}

/// 一页查询结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPage {
    pub data: Vec<ConversionRecord>,
    pub pagination: Pagination,
}

/// 历史存储接口
///
/// 使用 trait 而不是具体类型：外层胶水（托管数据表）与
/// 内存实现都通过它接入，转换结果的产生不依赖任何一种实现。
pub trait HistoryStore {
    /// 追加一条记录，返回派生出的记录 id
    fn append(&mut self, conversion: NewConversion) -> String;

    /// 过滤 + 排序 + 分页查询
    fn query(&self, query: &HistoryQuery) -> HistoryPage;
}

/// 内存实现（测试与单机场景）
#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Vec<ConversionRecord>,
    next_seq: u64,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, conversion: NewConversion) -> String {
        let seq = self.next_seq;
        self.next_seq += 1;

        let record = conversion.into_record(seq);
        let id = record.id.clone();
        self.records.push(record);
        id
    }

    fn query(&self, query: &HistoryQuery) -> HistoryPage {
        paginate(self.records.clone(), query)
    }
}

/// 过滤、排序并分页历史记录
///
/// - 可选按格式过滤
/// - 按创建时间倒序（最新在前；同刻记录保持插入顺序，排序稳定）
/// - offset/limit 截取窗口；`has_more = offset + limit < total`
pub fn paginate(mut records: Vec<ConversionRecord>, query: &HistoryQuery) -> HistoryPage {
    if let Some(format) = query.format {
        records.retain(|r| r.format == format);
    }

    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = records.len();
    let data: Vec<ConversionRecord> = records
        .into_iter()
        .skip(query.offset)
        .take(query.limit)
        .collect();

    HistoryPage {
        data,
        pagination: Pagination {
            limit: query.limit,
            offset: query.offset,
            total,
            has_more: query.offset + query.limit < total,
        },
    }
}
