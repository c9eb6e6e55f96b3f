use genui_core::StyleMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_tokens, TokenValue};

/// design.json 文档
///
/// 图像分析 / Figma 导出产出的嵌套设计描述。
/// 转换引擎只认扁平的 StyleMap，调用前先经 `flatten()` 压平。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignDocument {
    pub meta: DesignMeta,
    pub colors: DesignColors,
    pub layout: IndexMap<String, TokenValue>,
    pub typography: IndexMap<String, TokenValue>,
    pub components: Vec<DesignComponent>,
}

/// 文档来源信息（不参与样式输出）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignMeta {
    pub name: String,
    /// 提取来源（"image-analysis" / "figma" / "chrome-extension"）
    pub source: String,
}

/// 语义色槽 → StyleMap 的颜色键
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignColors {
    pub background: Option<String>,
    pub text: Option<String>,
    pub border: Option<String>,
}

/// 组件级样式覆盖
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignComponent {
    pub name: String,
    pub styles: IndexMap<String, TokenValue>,
}

impl DesignDocument {
    /// 将嵌套文档压平为 StyleMap
    ///
    /// 固定顺序：颜色 → 布局 → 排版 → 组件覆盖（后者覆盖前者的同名键），
    /// 保证同一文档总是产生相同的转换输出。
    pub fn flatten(&self) -> StyleMap {
        let mut styles = StyleMap::new();

        if let Some(bg) = &self.colors.background {
            styles.insert("backgroundColor".to_string(), bg.clone());
        }
        if let Some(text) = &self.colors.text {
            styles.insert("color".to_string(), text.clone());
        }
        if let Some(border) = &self.colors.border {
            styles.insert("borderColor".to_string(), border.clone());
        }

        merge_section(&mut styles, &self.layout);
        merge_section(&mut styles, &self.typography);
        for component in &self.components {
            merge_section(&mut styles, &component.styles);
        }

        styles
    }
}

/// 将一节 token 规范化后并入目标映射（同名键更新值、保持首次插入位置）
fn merge_section(styles: &mut StyleMap, section: &IndexMap<String, TokenValue>) {
    for (key, value) in normalize_tokens(section) {
        styles.insert(key, value);
    }
}
