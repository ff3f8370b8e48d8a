//! 情节追踪模板
//!
//! 用于追踪故事情节的发展、伏笔的埋设和回收。
//! 方括号内的文本为占位内容，由作者自行补充。

use chrono::Utc;

use super::{
    ChapterSummary, Checkpoint, Conflict, ConflictStatus, ConflictType, Foreshadowing,
    ForeshadowingStatus, ForeshadowingType, Metadata, PlotEvent, PlotLine, PlotLineStatus,
    PlotLineType, PlotTracker, Priority,
};

/// 模板版本
pub const TEMPLATE_VERSION: &str = "1.0";

/// 模板描述
pub const TEMPLATE_DESCRIPTION: &str = "故事情节追踪数据";

/// 主线 id，伏笔与章节摘要通过它引用主线
pub const MAIN_PLOT_ID: &str = "main-plot";

/// 创建情节追踪模板
///
/// 每次调用都构造全新的实例，两个时间戳来自同一次时钟读取。
pub fn create_plot_tracker_template() -> PlotTracker {
    PlotTracker {
        metadata: Metadata::stamped(Utc::now(), TEMPLATE_VERSION, TEMPLATE_DESCRIPTION),
        plot_lines: vec![
            PlotLine {
                id: MAIN_PLOT_ID.to_string(),
                name: "[主线名称，如：复仇之路]".to_string(),
                kind: PlotLineType::Main,
                priority: Priority::High,
                status: PlotLineStatus::Active,
                start_chapter: Some(1),
                end_chapter: None,
                description: "[待补充主线情节简述]".to_string(),
                key_events: vec![PlotEvent {
                    chapter_id: 1,
                    event: "[待补充关键事件描述]".to_string(),
                    impact: "[待补充事件影响]".to_string(),
                }],
            },
            PlotLine {
                id: "subplot-1".to_string(),
                name: "[支线名称]".to_string(),
                kind: PlotLineType::Subplot,
                priority: Priority::Medium,
                status: PlotLineStatus::Planning,
                start_chapter: None,
                end_chapter: None,
                description: "[待补充支线情节简述]".to_string(),
                key_events: Vec::new(),
            },
        ],
        foreshadowing: vec![Foreshadowing {
            id: "foreshadow-1".to_string(),
            kind: ForeshadowingType::Mystery,
            description: "[待补充伏笔内容描述]".to_string(),
            planted_chapter: 0,
            hinted_chapters: Vec::new(),
            revealed_chapter: None,
            priority: Priority::High,
            status: ForeshadowingStatus::Planned,
            related_plot: MAIN_PLOT_ID.to_string(),
            notes: "[待补充伏笔设计思路]".to_string(),
        }],
        conflicts: vec![Conflict {
            id: "conflict-1".to_string(),
            kind: ConflictType::CharacterVsCharacter,
            description: "[待补充冲突描述]".to_string(),
            participants: vec!["[角色1]".to_string(), "[角色2]".to_string()],
            start_chapter: 0,
            peak_chapter: None,
            resolved_chapter: None,
            resolution: None,
            status: ConflictStatus::Building,
        }],
        chapter_summaries: vec![ChapterSummary {
            chapter_number: 1,
            title: "[待补充章节标题]".to_string(),
            word_count: 0,
            plot_lines: vec![MAIN_PLOT_ID.to_string()],
            key_events: vec!["[待补充本章关键事件]".to_string()],
            foreshadowing_planted: Vec::new(),
            foreshadowing_revealed: Vec::new(),
            conflicts_advanced: Vec::new(),
            new_characters: Vec::new(),
            important_dialogues: Vec::new(),
            notes: "[待补充创作笔记]".to_string(),
        }],
        checkpoints: vec![Checkpoint {
            chapter_number: 10,
            description: "第一卷结束".to_string(),
            expected_outcomes: vec![
                "[待补充预期达成的目标1]".to_string(),
                "[待补充预期达成的目标2]".to_string(),
            ],
            actual_outcomes: None,
            deviations: None,
        }],
    }
}

/// 获取情节追踪模板，等同于 [`create_plot_tracker_template`]
pub fn get_plot_tracker_template() -> PlotTracker {
    create_plot_tracker_template()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_timestamps_share_one_instant() {
        let tracker = create_plot_tracker_template();
        assert_eq!(tracker.metadata.created, tracker.metadata.last_updated);
        assert_eq!(tracker.metadata.version, "1.0");
        assert_eq!(tracker.metadata.description, "故事情节追踪数据");
    }

    #[test]
    fn test_plot_lines() {
        let tracker = create_plot_tracker_template();
        assert_eq!(tracker.plot_lines.len(), 2);

        let main = &tracker.plot_lines[0];
        assert_eq!(main.id, "main-plot");
        assert_eq!(main.kind, PlotLineType::Main);
        assert_eq!(main.status, PlotLineStatus::Active);
        assert_eq!(main.start_chapter, Some(1));
        assert_eq!(main.end_chapter, None);
        assert_eq!(main.key_events.len(), 1);
        assert_eq!(main.key_events[0].chapter_id, 1);

        let sub = &tracker.plot_lines[1];
        assert_eq!(sub.id, "subplot-1");
        assert_eq!(sub.kind, PlotLineType::Subplot);
        assert_eq!(sub.priority, Priority::Medium);
        assert_eq!(sub.start_chapter, None);
        assert!(sub.key_events.is_empty());
    }

    #[test]
    fn test_foreshadowing_refers_to_main_plot() {
        let tracker = create_plot_tracker_template();
        assert_eq!(tracker.foreshadowing.len(), 1);

        let f = &tracker.foreshadowing[0];
        assert_eq!(f.id, "foreshadow-1");
        assert_eq!(f.status, ForeshadowingStatus::Planned);
        assert_eq!(f.related_plot, "main-plot");
        assert!(f.hinted_chapters.is_empty());
        assert_eq!(f.revealed_chapter, None);

        assert!(tracker.plot_line(&f.related_plot).is_some());
        assert_eq!(tracker.foreshadowing_for_plot("main-plot").count(), 1);
        assert_eq!(tracker.foreshadowing_for_plot("subplot-1").count(), 0);
    }

    #[test]
    fn test_conflict() {
        let tracker = create_plot_tracker_template();
        assert_eq!(tracker.conflicts.len(), 1);

        let c = &tracker.conflicts[0];
        assert_eq!(c.id, "conflict-1");
        assert_eq!(c.kind, ConflictType::CharacterVsCharacter);
        assert_eq!(c.status, ConflictStatus::Building);
        assert_eq!(c.participants.len(), 2);
        assert!(c.resolution.is_none());
    }

    #[test]
    fn test_chapter_summary_and_checkpoint() {
        let tracker = create_plot_tracker_template();

        assert_eq!(tracker.chapter_summaries.len(), 1);
        let summary = &tracker.chapter_summaries[0];
        assert_eq!(summary.chapter_number, 1);
        assert_eq!(summary.word_count, 0);
        assert_eq!(summary.plot_lines, vec!["main-plot".to_string()]);

        assert_eq!(tracker.checkpoints.len(), 1);
        let checkpoint = tracker.checkpoint_at(10).unwrap();
        assert_eq!(checkpoint.description, "第一卷结束");
        assert_eq!(checkpoint.expected_outcomes.len(), 2);
        assert_eq!(checkpoint.actual_outcomes, None);
        assert_eq!(checkpoint.deviations, None);
        assert!(tracker.checkpoint_at(1).is_none());
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut first = create_plot_tracker_template();
        let second = create_plot_tracker_template();

        first.plot_lines.clear();
        first.conflicts[0].participants.push("[角色3]".to_string());
        first.checkpoints[0].actual_outcomes = Some(vec!["done".to_string()]);

        assert_eq!(second.plot_lines.len(), 2);
        assert_eq!(second.conflicts[0].participants.len(), 2);
        assert!(second.checkpoints[0].actual_outcomes.is_none());
    }

    #[test]
    fn test_alias_matches_factory_except_timestamps() {
        let created = create_plot_tracker_template();
        let mut fetched = get_plot_tracker_template();

        fetched.metadata.created = created.metadata.created;
        fetched.metadata.last_updated = created.metadata.last_updated;
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(create_plot_tracker_template()).unwrap();

        assert_eq!(value["metadata"]["created"], value["metadata"]["lastUpdated"]);
        let created = value["metadata"]["created"].as_str().unwrap();
        assert_eq!(created.len(), "2024-01-01T00:00:00.000Z".len());
        assert!(NaiveDateTime::parse_from_str(created, "%Y-%m-%dT%H:%M:%S%.3fZ").is_ok());
        assert_eq!(value["plotLines"][1]["type"], "subplot");
        assert_eq!(value["plotLines"][1]["startChapter"], serde_json::Value::Null);
        assert_eq!(value["foreshadowing"][0]["relatedPlot"], "main-plot");
        assert_eq!(value["conflicts"][0]["type"], "character-vs-character");
        assert_eq!(value["chapterSummaries"][0]["wordCount"], 0);
        assert_eq!(value["checkpoints"][0]["actualOutcomes"], serde_json::Value::Null);
        assert_eq!(value["checkpoints"][0]["chapterNumber"], 10);
    }

    #[test]
    fn test_json_round_trip_preserves_template() {
        let tracker = create_plot_tracker_template();
        let json = serde_json::to_string(&tracker).unwrap();
        let parsed: PlotTracker = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tracker);
    }
}
