//! Plot Context - Entities
//!
//! 纯数据记录，字段公开，供使用方自行构造、校验与扩展。
//! 各处的 id 引用（如 `related_plot`）只是约定俗成的字符串，不做引用完整性检查。

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::{
    ConflictStatus, ConflictType, ForeshadowingStatus, ForeshadowingType, PlotLineStatus,
    PlotLineType, Priority,
};

/// 追踪数据元信息
///
/// 不变量: 模板创建时 `created` 与 `last_updated` 为同一时刻
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(serialize_with = "serialize_millis")]
    pub created: DateTime<Utc>,
    #[serde(serialize_with = "serialize_millis")]
    pub last_updated: DateTime<Utc>,
    pub version: String,
    pub description: String,
}

impl Metadata {
    /// 以同一时刻填充两个时间戳，精度截断到毫秒
    pub fn stamped(
        now: DateTime<Utc>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = now.trunc_subsecs(3);
        Self {
            created: now,
            last_updated: now,
            version: version.into(),
            description: description.into(),
        }
    }
}

/// 时间戳固定输出三位毫秒，如 `2024-01-01T08:30:00.000Z`
fn serialize_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// 情节线上的关键事件，只属于所在的 PlotLine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotEvent {
    pub chapter_id: u32,
    pub event: String,
    pub impact: String,
}

/// 情节线
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotLine {
    /// 在 plotLines 中唯一
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlotLineType,
    pub priority: Priority,
    pub status: PlotLineStatus,
    /// None 表示尚未确定
    pub start_chapter: Option<u32>,
    pub end_chapter: Option<u32>,
    pub description: String,
    pub key_events: Vec<PlotEvent>,
}

/// 伏笔
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Foreshadowing {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ForeshadowingType,
    pub description: String,
    pub planted_chapter: u32,
    pub hinted_chapters: Vec<u32>,
    pub revealed_chapter: Option<u32>,
    pub priority: Priority,
    pub status: ForeshadowingStatus,
    /// 关联情节线的 id
    pub related_plot: String,
    pub notes: String,
}

/// 冲突
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ConflictType,
    pub description: String,
    pub participants: Vec<String>,
    pub start_chapter: u32,
    pub peak_chapter: Option<u32>,
    pub resolved_chapter: Option<u32>,
    pub resolution: Option<String>,
    pub status: ConflictStatus,
}

/// 章节摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub chapter_number: u32,
    pub title: String,
    pub word_count: u64,
    pub plot_lines: Vec<String>,
    pub key_events: Vec<String>,
    pub foreshadowing_planted: Vec<String>,
    pub foreshadowing_revealed: Vec<String>,
    pub conflicts_advanced: Vec<String>,
    pub new_characters: Vec<String>,
    pub important_dialogues: Vec<String>,
    pub notes: String,
}

/// 检查点：预期结果与实际结果的对照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    pub chapter_number: u32,
    pub description: String,
    pub expected_outcomes: Vec<String>,
    /// None 表示尚未评估
    pub actual_outcomes: Option<Vec<String>>,
    pub deviations: Option<String>,
}

impl Checkpoint {
    /// 是否已经做过结果评估
    pub fn is_evaluated(&self) -> bool {
        self.actual_outcomes.is_some()
    }
}
