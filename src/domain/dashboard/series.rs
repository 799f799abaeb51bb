use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::comparison::{score_field, BaselineSet, Metric};
use crate::domain::dataset::ScoreRecord;

/// Ordered chart keys ("Curso", "Brasil", ...) with their values.
///
/// `None` is an unknown value and serializes as `null` so charts can draw a
/// gap instead of a zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesValues(Vec<(&'static str, Option<f64>)>);

impl SeriesValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: Option<f64>) {
        self.0.push((key, value));
    }

    /// `None` if the key is not part of the row, `Some(None)` if its value is unknown.
    pub fn get(&self, key: &str) -> Option<Option<f64>> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SeriesValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Course value plus enabled baselines for one metric, via the field table.
pub fn score_values(record: &ScoreRecord, metric: Metric, baselines: &BaselineSet) -> SeriesValues {
    let mut values = SeriesValues::new();
    for source in baselines.sources() {
        let field = score_field(metric, source);
        values.push(source.style().key, field.value(record));
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comparison::Baseline;

    #[test]
    fn serializes_in_insertion_order_with_nulls() {
        let mut values = SeriesValues::new();
        values.push("Curso", Some(61.0));
        values.push("Região", None);
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"{"Curso":61.0,"Região":null}"#
        );
    }

    #[test]
    fn get_distinguishes_missing_key_from_unknown_value() {
        let mut values = SeriesValues::new();
        values.push("Curso", None);
        assert_eq!(values.get("Curso"), Some(None));
        assert_eq!(values.get("Brasil"), None);
    }

    #[test]
    fn score_values_follow_enabled_baselines() {
        let record = ScoreRecord {
            nota_ce: Some(70.0),
            media_ufc_ce: Some(66.0),
            media_uf_ce: Some(64.0),
            ..Default::default()
        };
        let baselines = BaselineSet::none()
            .with(Baseline::State)
            .with(Baseline::InstitutionArea);
        let values = score_values(&record, Metric::SpecificComponent, &baselines);

        let keys: Vec<&str> = values.keys().collect();
        assert_eq!(keys, vec!["Curso", "UFC (Área)", "Ceará"]);
        assert_eq!(values.get("Ceará"), Some(Some(64.0)));
    }
}
