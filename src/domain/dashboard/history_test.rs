#[cfg(test)]
mod tests {
    use crate::domain::comparison::{Baseline, BaselineSet, Metric};
    use crate::domain::dashboard::history::project_history;
    use crate::domain::dataset::{EvolutionSnapshot, ScoreRecord};
    use crate::domain::foundation::ExamYear;
    use crate::domain::selection::SelectionState;

    fn snapshot(year: u16, nota_ce: Option<f64>, nacional_ce: Option<f64>) -> EvolutionSnapshot {
        EvolutionSnapshot {
            year: ExamYear::new(year).unwrap(),
            scores: ScoreRecord {
                nota_ce,
                media_nacional_ce: nacional_ce,
                ..Default::default()
            },
        }
    }

    fn selection() -> SelectionState {
        SelectionState {
            active_metric: Metric::SpecificComponent,
            baselines: BaselineSet::none().with(Baseline::National),
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_are_year_ascending() {
        let snapshots = vec![
            snapshot(2021, Some(60.0), Some(55.0)),
            snapshot(2014, Some(50.0), Some(49.0)),
            snapshot(2017, Some(52.0), Some(51.0)),
        ];
        let projection = project_history(&snapshots, &selection());

        let years: Vec<u16> = projection.rows.iter().map(|row| row.year.value()).collect();
        assert_eq!(years, vec![2014, 2017, 2021]);
        assert_eq!(projection.title, "Evolução do Componente Específico (CE)");
    }

    #[test]
    fn test_missing_value_is_a_gap_not_zero() {
        let snapshots = vec![snapshot(2014, Some(50.0), None), snapshot(2017, None, Some(51.0))];
        let projection = project_history(&snapshots, &selection());

        assert_eq!(projection.rows.len(), 2);
        assert_eq!(projection.rows[0].values.get("Brasil"), Some(None));
        assert_eq!(projection.rows[1].values.get("Curso"), Some(None));

        let json = serde_json::to_value(&projection.rows[1]).unwrap();
        assert_eq!(json, serde_json::json!({"year": 2017, "Curso": null, "Brasil": 51.0}));
    }

    #[test]
    fn test_empty_snapshots_give_empty_rows() {
        let projection = project_history(&[], &selection());
        assert!(projection.rows.is_empty());
        assert_eq!(projection.legend.len(), 2);
    }
}
