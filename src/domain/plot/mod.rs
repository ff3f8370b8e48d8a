//! Plot Context - 情节追踪限界上下文
//!
//! 职责:
//! - 情节线、伏笔、冲突、章节摘要、检查点的数据形状
//! - 情节追踪模板工厂

mod aggregate;
mod entities;
mod template;
mod value_objects;

pub use aggregate::PlotTracker;
pub use entities::{
    ChapterSummary, Checkpoint, Conflict, Foreshadowing, Metadata, PlotEvent, PlotLine,
};
pub use template::{
    create_plot_tracker_template, get_plot_tracker_template, MAIN_PLOT_ID, TEMPLATE_DESCRIPTION,
    TEMPLATE_VERSION,
};
pub use value_objects::{
    ConflictStatus, ConflictType, ForeshadowingStatus, ForeshadowingType, PlotLineStatus,
    PlotLineType, Priority,
};
