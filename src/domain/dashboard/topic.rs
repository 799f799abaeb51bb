use serde::Serialize;

use super::series::SeriesValues;
use crate::domain::comparison::{
    competency_field, component_competencies, ExamComponent, SeriesStyle, ValueSource,
};
use crate::domain::dataset::{CompetencyStats, CourseTopics, TopicYear};
use crate::domain::foundation::{ExamYear, QuestionType};
use crate::domain::selection::SelectionState;

/// Competency comparison for one exam component and question type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProjection {
    pub year: Option<ExamYear>,
    pub component: ExamComponent,
    pub question_type: QuestionType,
    pub rows: Vec<TopicRow>,
    pub legend: Vec<SeriesStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicRow {
    pub topic: String,
    #[serde(flatten)]
    pub values: SeriesValues,
}

/// One competency in the item-count ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRow {
    pub topic: String,
    pub item_count: u32,
    pub objective_question_labels: Vec<String>,
    pub discursive_question_labels: Vec<String>,
    pub component_type: ExamComponent,
    pub related_disciplines: Vec<String>,
}

fn topic_year<'a>(topics: Option<&'a CourseTopics>, year: Option<ExamYear>) -> Option<&'a TopicYear> {
    year.and_then(|year| topics.and_then(|years| years.get(&year)))
}

/// Projects the competencies of the active component.
///
/// Competencies without a course value for the question type are dropped.
/// Baseline gaps are drawn as zero bars.
pub fn project_topic_performance(topics: Option<&CourseTopics>, selection: &SelectionState) -> TopicProjection {
    let component = selection.topic_component;
    let question_type = selection.question_type;
    let sources = selection.baselines.sources();

    let rows = topic_year(topics, selection.year)
        .map(|topic_year| {
            component_competencies(topic_year, component)
                .iter()
                .filter_map(|(topic, stats)| {
                    let course_value = competency_field(question_type, ValueSource::Course).value(stats)?;
                    let mut values = SeriesValues::new();
                    for source in &sources {
                        let value = match source {
                            ValueSource::Course => course_value,
                            ValueSource::Baseline(_) => competency_field(question_type, *source)
                                .value(stats)
                                .unwrap_or(0.0),
                        };
                        values.push(source.style().key, Some(value));
                    }
                    Some(TopicRow {
                        topic: topic.to_string(),
                        values,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    TopicProjection {
        year: selection.year,
        component,
        question_type,
        rows,
        legend: selection.baselines.legend(),
    }
}

/// Ranks every competency of both components by number of exam items.
///
/// Independent of metric and baselines. The sort is stable, so ties keep
/// specific-component-first source order.
pub fn project_topic_distribution(topics: Option<&CourseTopics>, year: Option<ExamYear>) -> Vec<DistributionRow> {
    let Some(topic_year) = topic_year(topics, year) else {
        return Vec::new();
    };

    let mut rows: Vec<DistributionRow> = ExamComponent::all()
        .iter()
        .flat_map(|component| {
            component_competencies(topic_year, *component)
                .iter()
                .map(move |(topic, stats)| distribution_row(topic, stats, *component))
        })
        .collect();
    rows.sort_by(|a, b| b.item_count.cmp(&a.item_count));
    rows
}

fn distribution_row(topic: &str, stats: &CompetencyStats, component: ExamComponent) -> DistributionRow {
    let listed = stats.lista_questoes_objetivas.len() + stats.lista_questoes_discursivas.len();
    DistributionRow {
        topic: topic.to_string(),
        item_count: stats
            .quantidade_questoes_total
            .unwrap_or_else(|| u32::try_from(listed).unwrap_or(u32::MAX)),
        objective_question_labels: stats.lista_questoes_objetivas.clone(),
        discursive_question_labels: stats.lista_questoes_discursivas.clone(),
        component_type: component,
        related_disciplines: stats.lista_disciplinas.clone(),
    }
}

#[cfg(test)]
#[path = "topic_test.rs"]
mod topic_test;
