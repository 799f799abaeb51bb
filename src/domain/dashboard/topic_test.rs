#[cfg(test)]
mod tests {
    use crate::domain::comparison::{Baseline, BaselineSet, ExamComponent};
    use crate::domain::dashboard::topic::{project_topic_distribution, project_topic_performance};
    use crate::domain::dataset::{Competencies, CompetencyStats, CourseTopics, TopicYear};
    use crate::domain::foundation::{ExamYear, QuestionType};
    use crate::domain::selection::SelectionState;

    // ─────────────────────────────────────────────────────────────────────
    // Fixtures
    // ─────────────────────────────────────────────────────────────────────

    fn year() -> ExamYear {
        ExamYear::new(2022).unwrap()
    }

    fn stats(course: Option<f64>, regional: Option<f64>, items: Option<u32>) -> CompetencyStats {
        CompetencyStats {
            percentual_objetivas_curso: course,
            percentual_objetivas_br: Some(40.0),
            percentual_objetivas_regiao: regional,
            quantidade_questoes_total: items,
            lista_questoes_objetivas: vec!["Q1".to_string(), "Q4".to_string()],
            ..Default::default()
        }
    }

    fn topics() -> CourseTopics {
        let specific = Competencies::new(vec![
            ("Algoritmos".to_string(), stats(Some(55.0), None, Some(3))),
            ("Redes".to_string(), stats(None, Some(30.0), Some(5))),
            ("Banco de Dados".to_string(), stats(Some(48.0), Some(44.0), Some(5))),
        ]);
        let general = Competencies::new(vec![(
            "Ética".to_string(),
            CompetencyStats {
                percentual_objetivas_curso: Some(61.0),
                lista_questoes_objetivas: vec!["Q2".to_string()],
                lista_questoes_discursivas: vec!["D1".to_string()],
                lista_disciplinas: vec!["Filosofia".to_string()],
                ..Default::default()
            },
        )]);

        let mut topics = CourseTopics::new();
        topics.insert(year(), TopicYear { specific, general });
        topics
    }

    fn selection(baselines: BaselineSet) -> SelectionState {
        SelectionState {
            year: Some(year()),
            baselines,
            ..Default::default()
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Performance
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn test_drops_competencies_without_course_value() {
        let topics = topics();
        let projection = project_topic_performance(Some(&topics), &selection(BaselineSet::none()));

        let names: Vec<&str> = projection.rows.iter().map(|row| row.topic.as_str()).collect();
        assert_eq!(names, vec!["Algoritmos", "Banco de Dados"]);
    }

    #[test]
    fn test_missing_regional_baseline_is_zero_filled() {
        let topics = topics();
        let projection = project_topic_performance(
            Some(&topics),
            &selection(BaselineSet::none().with(Baseline::Regional)),
        );

        let algoritmos = &projection.rows[0];
        assert_eq!(algoritmos.values.get("Curso"), Some(Some(55.0)));
        assert_eq!(algoritmos.values.get("Região"), Some(Some(0.0)));
    }

    #[test]
    fn test_general_component_and_discursive_type() {
        let topics = topics();
        let mut state = selection(BaselineSet::none());
        state.topic_component = ExamComponent::General;
        let projection = project_topic_performance(Some(&topics), &state);
        assert_eq!(projection.rows.len(), 1);
        assert_eq!(projection.rows[0].topic, "Ética");

        state.question_type = QuestionType::Discursive;
        let projection = project_topic_performance(Some(&topics), &state);
        assert!(projection.rows.is_empty());
    }

    #[test]
    fn test_unknown_year_is_empty() {
        let topics = topics();
        let mut state = selection(BaselineSet::all());
        state.year = Some(ExamYear::new(2019).unwrap());
        assert!(project_topic_performance(Some(&topics), &state).rows.is_empty());
        assert!(project_topic_performance(None, &state).rows.is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Distribution
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn test_distribution_sorted_by_item_count_stable() {
        let topics = topics();
        let rows = project_topic_distribution(Some(&topics), Some(year()));

        let names: Vec<&str> = rows.iter().map(|row| row.topic.as_str()).collect();
        assert_eq!(names, vec!["Redes", "Banco de Dados", "Algoritmos", "Ética"]);
    }

    #[test]
    fn test_distribution_item_count_falls_back_to_listed_questions() {
        let topics = topics();
        let rows = project_topic_distribution(Some(&topics), Some(year()));
        let etica = rows.iter().find(|row| row.topic == "Ética").unwrap();
        assert_eq!(etica.item_count, 2);
        assert_eq!(etica.component_type, ExamComponent::General);
        assert_eq!(etica.related_disciplines, vec!["Filosofia".to_string()]);
    }

    #[test]
    fn test_distribution_serializes_camel_case() {
        let topics = topics();
        let rows = project_topic_distribution(Some(&topics), Some(year()));
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["itemCount"], 5);
        assert_eq!(json["componentType"], "CE");
        assert!(json["objectiveQuestionLabels"].is_array());
        assert!(json["discursiveQuestionLabels"].is_array());
        assert!(json["relatedDisciplines"].is_array());
    }

    #[test]
    fn test_distribution_without_year_is_empty() {
        let topics = topics();
        assert!(project_topic_distribution(Some(&topics), None).is_empty());
    }
}
