//! Extension category classification.
//!
//! The category set is closed: every [`ComponentKind`] maps to exactly one
//! [`Category`], so classification of a typed snapshot cannot fail. Category
//! names arriving as text are checked by [`Category::from_str`].

use crate::error::DocError;
use crate::model::{ComponentKind, ExtensionComponent};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Processor,
    ControllerService,
    ReportingTask,
    FlowAnalysisRule,
    ParameterProvider,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Processor,
        Category::ControllerService,
        Category::ReportingTask,
        Category::FlowAnalysisRule,
        Category::ParameterProvider,
    ];

    /// Name written into the `type` element.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Processor => "PROCESSOR",
            Category::ControllerService => "CONTROLLER_SERVICE",
            Category::ReportingTask => "REPORTING_TASK",
            Category::FlowAnalysisRule => "FLOW_ANALYSIS_RULE",
            Category::ParameterProvider => "PARAMETER_PROVIDER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| DocError::UnknownCategory(s.to_string()))
    }
}

impl From<&ComponentKind> for Category {
    fn from(kind: &ComponentKind) -> Self {
        match kind {
            ComponentKind::Processor(_) => Category::Processor,
            ComponentKind::ControllerService(_) => Category::ControllerService,
            ComponentKind::ReportingTask => Category::ReportingTask,
            ComponentKind::FlowAnalysisRule => Category::FlowAnalysisRule,
            ComponentKind::ParameterProvider => Category::ParameterProvider,
        }
    }
}

/// Map a component onto its extension category.
pub fn classify(component: &ExtensionComponent) -> Category {
    Category::from(&component.kind)
}
