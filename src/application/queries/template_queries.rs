//! Template Queries

/// 可用的模板种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// 情节追踪模板
    PlotTracker,
}

impl TemplateKind {
    /// 所有模板，按展示顺序
    pub const ALL: &'static [TemplateKind] = &[TemplateKind::PlotTracker];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlotTracker => "plot-tracker",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "plot-tracker" => Some(Self::PlotTracker),
            _ => None,
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 按名称获取模板查询
#[derive(Debug, Clone)]
pub struct GetTemplate {
    pub name: String,
}

/// 列出所有模板查询
#[derive(Debug, Clone)]
pub struct ListTemplates;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_kind_names() {
        assert_eq!(
            TemplateKind::from_str("plot-tracker"),
            Some(TemplateKind::PlotTracker)
        );
        assert_eq!(TemplateKind::from_str("plot_tracker"), None);
        assert_eq!(TemplateKind::PlotTracker.to_string(), "plot-tracker");
    }

    #[test]
    fn test_all_kinds_round_trip() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::from_str(kind.as_str()), Some(*kind));
        }
    }
}
