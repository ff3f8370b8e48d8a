//! Template Query Handlers

use crate::application::error::ApplicationError;
use crate::application::queries::{GetTemplate, ListTemplates, TemplateKind};
use crate::domain::plot::{create_plot_tracker_template, PlotTracker};

/// GetTemplate Handler
///
/// 每次查询都构造新的模板实例，调用方之间互不影响
#[derive(Debug, Default, Clone)]
pub struct GetTemplateHandler;

impl GetTemplateHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetTemplate) -> Result<PlotTracker, ApplicationError> {
        let kind = TemplateKind::from_str(&query.name)
            .ok_or_else(|| ApplicationError::template_not_found(&query.name))?;

        let template = match kind {
            TemplateKind::PlotTracker => create_plot_tracker_template(),
        };

        tracing::debug!(
            template = %kind,
            plot_lines = template.plot_lines.len(),
            created = %template.metadata.created,
            "Template created"
        );

        Ok(template)
    }
}

/// ListTemplates Handler
#[derive(Debug, Default, Clone)]
pub struct ListTemplatesHandler;

impl ListTemplatesHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _query: ListTemplates) -> Vec<String> {
        TemplateKind::ALL
            .iter()
            .map(|kind| kind.as_str().to_string())
            .collect()
    }
}
