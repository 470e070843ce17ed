use crate::config::DetectionSettings;
use crate::templates::TemplateId;
use crate::workflows::model::Workflow;
use std::collections::BTreeMap;

/// True when `keyword` occurs in `query` starting at a word boundary, so
/// "mlr review" matches "the mlr review" but not "xmlr review".
fn contains_at_word_start(query: &str, keyword: &str) -> bool {
    query.match_indices(keyword).any(|(at, _)| {
        query[..at]
            .chars()
            .next_back()
            .map_or(true, |prev| !prev.is_alphanumeric())
    })
}

fn matches_any<'a>(query: &str, mut keywords: impl Iterator<Item = &'a str>) -> bool {
    keywords.any(|keyword| contains_at_word_start(query, keyword))
}

fn first_match(query: &str, candidates: &[TemplateId]) -> Option<TemplateId> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    candidates
        .iter()
        .copied()
        .find(|id| matches_any(&query, id.template().keywords.iter().copied()))
}

/// Picks the first template, in [`TemplateId::ALL`] order, whose keywords
/// appear in `query`.
pub fn classify(query: &str) -> Option<TemplateId> {
    first_match(query, &TemplateId::ALL)
}

/// Like [`classify`], restricted to the content supply chain templates.
pub fn classify_content(query: &str) -> Option<TemplateId> {
    first_match(query, &TemplateId::CONTENT)
}

pub fn detect_workflow(query: &str) -> Option<Workflow> {
    let id = classify(query)?;
    tracing::debug!(template = %id, "workflow detected");
    Some(id.instantiate())
}

pub fn detect_content_workflow(query: &str) -> Option<Workflow> {
    let id = classify_content(query)?;
    tracing::debug!(template = %id, "content workflow detected");
    Some(id.instantiate())
}

/// Detection with user-configured keywords and disabled templates layered on
/// top of the built-in keyword lists. Priority order never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detector {
    extra_keywords: BTreeMap<TemplateId, Vec<String>>,
    disabled: Vec<TemplateId>,
}

impl Detector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &DetectionSettings) -> Self {
        Self {
            extra_keywords: settings
                .extra_keywords
                .iter()
                .map(|(id, keywords)| {
                    let normalized = keywords
                        .iter()
                        .map(|keyword| keyword.trim().to_lowercase())
                        .filter(|keyword| !keyword.is_empty())
                        .collect();
                    (*id, normalized)
                })
                .collect(),
            disabled: settings.disabled.clone(),
        }
    }

    pub fn is_enabled(&self, id: TemplateId) -> bool {
        !self.disabled.contains(&id)
    }

    fn matches(&self, id: TemplateId, query: &str) -> bool {
        if !self.is_enabled(id) {
            return false;
        }
        if matches_any(query, id.template().keywords.iter().copied()) {
            return true;
        }
        self.extra_keywords
            .get(&id)
            .is_some_and(|extra| matches_any(query, extra.iter().map(String::as_str)))
    }

    fn first_match(&self, query: &str, candidates: &[TemplateId]) -> Option<TemplateId> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        candidates
            .iter()
            .copied()
            .find(|id| self.matches(*id, &query))
    }

    pub fn classify(&self, query: &str) -> Option<TemplateId> {
        self.first_match(query, &TemplateId::ALL)
    }

    pub fn classify_content(&self, query: &str) -> Option<TemplateId> {
        self.first_match(query, &TemplateId::CONTENT)
    }

    pub fn detect(&self, query: &str) -> Option<Workflow> {
        self.classify(query).map(TemplateId::instantiate)
    }

    pub fn detect_content(&self, query: &str) -> Option<Workflow> {
        self.classify_content(query).map(TemplateId::instantiate)
    }
}
