//! Plot Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{ChapterSummary, Checkpoint, Conflict, Foreshadowing, Metadata, PlotLine};

/// PlotTracker 聚合根
///
/// 独占元信息与五个有序列表，不共享任何嵌套容器。
/// 本模块只负责构造，之后的增删改由使用方负责。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotTracker {
    pub metadata: Metadata,
    pub plot_lines: Vec<PlotLine>,
    pub foreshadowing: Vec<Foreshadowing>,
    pub conflicts: Vec<Conflict>,
    pub chapter_summaries: Vec<ChapterSummary>,
    pub checkpoints: Vec<Checkpoint>,
}

impl PlotTracker {
    pub fn plot_line(&self, id: &str) -> Option<&PlotLine> {
        self.plot_lines.iter().find(|line| line.id == id)
    }

    pub fn foreshadowing_for_plot<'a>(
        &'a self,
        plot_id: &'a str,
    ) -> impl Iterator<Item = &'a Foreshadowing> + 'a {
        self.foreshadowing
            .iter()
            .filter(move |f| f.related_plot == plot_id)
    }

    pub fn checkpoint_at(&self, chapter_number: u32) -> Option<&Checkpoint> {
        self.checkpoints
            .iter()
            .find(|c| c.chapter_number == chapter_number)
    }
}
