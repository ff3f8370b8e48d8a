//! Plot Context - Value Objects
//!
//! 情节追踪数据中所有的枚举取值，序列化值与作者工具约定的字符串一致

use serde::{Deserialize, Serialize};

/// 情节线类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotLineType {
    /// 主线
    Main,
    /// 支线
    Subplot,
    /// 番外/旁支
    Side,
}

impl PlotLineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Subplot => "subplot",
            Self::Side => "side",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "main" => Some(Self::Main),
            "subplot" => Some(Self::Subplot),
            "side" => Some(Self::Side),
            _ => None,
        }
    }
}

/// 优先级（情节线与伏笔共用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// 情节线状态
///
/// 只定义取值集合，状态流转由使用方负责
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotLineStatus {
    Planning,
    Active,
    Completed,
    Paused,
}

impl PlotLineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "planning" => Some(Self::Planning),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "paused" => Some(Self::Paused),
            _ => None,
        }
    }
}

/// 伏笔类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForeshadowingType {
    /// 悬念
    Mystery,
    /// 暗示
    Hint,
    /// 铺垫
    Setup,
    /// 呼应
    Callback,
}

impl ForeshadowingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mystery => "mystery",
            Self::Hint => "hint",
            Self::Setup => "setup",
            Self::Callback => "callback",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mystery" => Some(Self::Mystery),
            "hint" => Some(Self::Hint),
            "setup" => Some(Self::Setup),
            "callback" => Some(Self::Callback),
            _ => None,
        }
    }
}

/// 伏笔状态: 计划 -> 埋设 -> 暗示 -> 揭晓
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForeshadowingStatus {
    Planned,
    Planted,
    Hinted,
    Revealed,
}

impl ForeshadowingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Planted => "planted",
            Self::Hinted => "hinted",
            Self::Revealed => "revealed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "planned" => Some(Self::Planned),
            "planted" => Some(Self::Planted),
            "hinted" => Some(Self::Hinted),
            "revealed" => Some(Self::Revealed),
            _ => None,
        }
    }
}

/// 冲突类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictType {
    CharacterVsCharacter,
    CharacterVsSelf,
    CharacterVsSociety,
    CharacterVsNature,
}

impl ConflictType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CharacterVsCharacter => "character-vs-character",
            Self::CharacterVsSelf => "character-vs-self",
            Self::CharacterVsSociety => "character-vs-society",
            Self::CharacterVsNature => "character-vs-nature",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "character-vs-character" => Some(Self::CharacterVsCharacter),
            "character-vs-self" => Some(Self::CharacterVsSelf),
            "character-vs-society" => Some(Self::CharacterVsSociety),
            "character-vs-nature" => Some(Self::CharacterVsNature),
            _ => None,
        }
    }
}

/// 冲突状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictStatus {
    Building,
    Peak,
    Resolved,
}

impl ConflictStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Peak => "peak",
            Self::Resolved => "resolved",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "building" => Some(Self::Building),
            "peak" => Some(Self::Peak),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }
}
