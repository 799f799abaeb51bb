#[cfg(test)]
mod tests {
    use crate::domain::comparison::{Baseline, BaselineSet, Metric};
    use crate::domain::dashboard::overview::project_overview;
    use crate::domain::dataset::{CourseScores, ScoreRecord};
    use crate::domain::foundation::ExamYear;
    use crate::domain::selection::SelectionState;

    fn year() -> ExamYear {
        ExamYear::new(2021).unwrap()
    }

    fn scores() -> CourseScores {
        let mut scores = CourseScores::new();
        scores.insert(
            year(),
            ScoreRecord {
                nota_geral: Some(62.0),
                media_nacional_geral: Some(58.0),
                nota_fg: Some(55.0),
                media_regiao_fg: Some(51.0),
                numero_participantes: Some(38),
                ..Default::default()
            },
        );
        scores
    }

    fn selection(metric: Metric, baselines: BaselineSet) -> SelectionState {
        SelectionState {
            year: Some(year()),
            active_metric: metric,
            baselines,
            ..Default::default()
        }
    }

    #[test]
    fn test_overall_with_national_only_has_exactly_two_keys() {
        let scores = scores();
        let projection = project_overview(
            Some(&scores),
            &selection(Metric::Overall, BaselineSet::none().with(Baseline::National)),
        );

        assert_eq!(projection.rows.len(), 1);
        let values = &projection.rows[0].values;
        let keys: Vec<&str> = values.keys().collect();
        assert_eq!(keys, vec!["Curso", "Brasil"]);
        assert_eq!(values.get("Curso"), Some(Some(62.0)));
        assert_eq!(values.get("Brasil"), Some(Some(58.0)));
    }

    #[test]
    fn test_row_serializes_with_chart_keys() {
        let scores = scores();
        let projection = project_overview(
            Some(&scores),
            &selection(Metric::Overall, BaselineSet::none().with(Baseline::National)),
        );
        let json = serde_json::to_value(&projection.rows[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Curso": 62.0, "Brasil": 58.0})
        );
    }

    #[test]
    fn test_unknown_baseline_stays_unknown() {
        let scores = scores();
        let projection = project_overview(
            Some(&scores),
            &selection(Metric::Overall, BaselineSet::none().with(Baseline::State)),
        );
        assert_eq!(projection.rows[0].values.get("Ceará"), Some(None));
    }

    #[test]
    fn test_metric_selects_field_row() {
        let scores = scores();
        let projection = project_overview(
            Some(&scores),
            &selection(
                Metric::GeneralFormation,
                BaselineSet::none().with(Baseline::Regional),
            ),
        );
        assert_eq!(projection.label, "Form. Geral");
        let row = &projection.rows[0];
        assert_eq!(row.values.get("Curso"), Some(Some(55.0)));
        assert_eq!(row.values.get("Região"), Some(Some(51.0)));
    }

    #[test]
    fn test_summary_carries_all_scores_and_participants() {
        let scores = scores();
        let projection = project_overview(Some(&scores), &selection(Metric::Overall, BaselineSet::none()));
        let summary = projection.summary.unwrap();
        assert_eq!(summary.overall, Some(62.0));
        assert_eq!(summary.specific_component, None);
        assert_eq!(summary.participants, Some(38));
    }

    #[test]
    fn test_missing_year_or_course_yields_empty_rows() {
        let scores = scores();
        let mut other_year = selection(Metric::Overall, BaselineSet::all());
        other_year.year = Some(ExamYear::new(2017).unwrap());
        assert!(project_overview(Some(&scores), &other_year).rows.is_empty());

        let no_data = project_overview(None, &selection(Metric::Overall, BaselineSet::all()));
        assert!(no_data.rows.is_empty());
        assert!(no_data.summary.is_none());
        assert_eq!(no_data.legend.len(), 5);

        let mut no_year = selection(Metric::Overall, BaselineSet::none());
        no_year.year = None;
        assert!(project_overview(Some(&scores), &no_year).rows.is_empty());
    }
}
