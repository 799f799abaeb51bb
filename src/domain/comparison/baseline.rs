//! Comparison baselines and their static label/color table.

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Legend entry of a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesStyle {
    /// Row key the series reads from ("Curso", "Brasil", ...).
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// The course's own series.
pub const COURSE_SERIES: SeriesStyle = SeriesStyle {
    key: "Curso",
    label: "Curso",
    color: "#051650",
};

/// Indexed by [`Baseline::index`].
const BASELINE_SERIES: [SeriesStyle; 4] = [
    SeriesStyle {
        key: "UFC (Área)",
        label: "UFC (Área)",
        color: "#E70000",
    },
    SeriesStyle {
        key: "Brasil",
        label: "Brasil",
        color: "#FF7B00",
    },
    SeriesStyle {
        key: "Região",
        label: "Região",
        color: "#0A5C36",
    },
    SeriesStyle {
        key: "Ceará",
        label: "Ceará",
        color: "#FFE745",
    },
];

/// A comparison average plotted next to the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Baseline {
    /// Same knowledge area within the institution.
    InstitutionArea,
    National,
    Regional,
    /// Federative unit (Ceará).
    State,
}

impl Baseline {
    /// All baselines in table order. Projections emit enabled baselines in this order.
    pub fn all() -> &'static [Baseline] {
        &[
            Baseline::InstitutionArea,
            Baseline::National,
            Baseline::Regional,
            Baseline::State,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Baseline::InstitutionArea => 0,
            Baseline::National => 1,
            Baseline::Regional => 2,
            Baseline::State => 3,
        }
    }

    pub fn style(&self) -> &'static SeriesStyle {
        &BASELINE_SERIES[self.index()]
    }

    pub fn label(&self) -> &'static str {
        self.style().label
    }

    pub fn color(&self) -> &'static str {
        self.style().color
    }
}

impl fmt::Display for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where a plotted value comes from: the course itself or one baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSource {
    Course,
    Baseline(Baseline),
}

impl ValueSource {
    /// Column index into the field tables (course first, then baselines).
    pub fn index(&self) -> usize {
        match self {
            ValueSource::Course => 0,
            ValueSource::Baseline(baseline) => 1 + baseline.index(),
        }
    }

    pub fn style(&self) -> &'static SeriesStyle {
        match self {
            ValueSource::Course => &COURSE_SERIES,
            ValueSource::Baseline(baseline) => baseline.style(),
        }
    }
}

/// The four independent baseline toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BaselineSet([bool; 4]);

impl BaselineSet {
    /// No baseline enabled.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self([true; 4])
    }

    pub fn is_enabled(&self, baseline: Baseline) -> bool {
        self.0[baseline.index()]
    }

    pub fn set(&mut self, baseline: Baseline, enabled: bool) {
        self.0[baseline.index()] = enabled;
    }

    pub fn toggle(&mut self, baseline: Baseline) {
        let slot = &mut self.0[baseline.index()];
        *slot = !*slot;
    }

    pub fn with(mut self, baseline: Baseline) -> Self {
        self.set(baseline, true);
        self
    }

    /// Enabled baselines, always in table order.
    pub fn enabled(&self) -> impl Iterator<Item = Baseline> + '_ {
        Baseline::all()
            .iter()
            .copied()
            .filter(move |baseline| self.is_enabled(*baseline))
    }

    /// Course source followed by the enabled baseline sources.
    pub fn sources(&self) -> Vec<ValueSource> {
        std::iter::once(ValueSource::Course)
            .chain(self.enabled().map(ValueSource::Baseline))
            .collect()
    }

    /// Legend for the course series plus enabled baselines.
    pub fn legend(&self) -> Vec<SeriesStyle> {
        self.sources().iter().map(|source| *source.style()).collect()
    }
}

impl FromIterator<Baseline> for BaselineSet {
    fn from_iter<I: IntoIterator<Item = Baseline>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), BaselineSet::with)
    }
}

impl Serialize for BaselineSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let enabled: Vec<Baseline> = self.enabled().collect();
        let mut seq = serializer.serialize_seq(Some(enabled.len()))?;
        for baseline in &enabled {
            seq.serialize_element(baseline)?;
        }
        seq.end()
    }
}
