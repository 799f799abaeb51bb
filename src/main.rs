//! Command-line front end: loads one course and prints the active view as JSON.
//!
//! ```text
//! enade-dashboard <campus> <course> [--view overview|topic|history|perception]
//!                 [--year YYYY] [--metric overall|general-formation|specific-component]
//!                 [--baseline institution-area|national|regional|state]...
//!                 [--question LABEL]
//! ```

use clap::{Parser, ValueEnum};
use serde_json::json;
use std::error::Error;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use enade_dashboard::adapters::from_config;
use enade_dashboard::application::{DatasetRepository, ViewCoordinator};
use enade_dashboard::config::{AppConfig, LoggingConfig};
use enade_dashboard::domain::comparison::{Baseline, Metric};
use enade_dashboard::domain::foundation::{CampusName, CourseCode, ExamYear};
use enade_dashboard::domain::selection::{ActiveView, SelectionEvent};

#[derive(Parser)]
#[command(name = "enade-dashboard")]
#[command(about = "Load one ENADE course and print the active dashboard view as JSON")]
#[command(version)]
struct Cli {
    /// Campus (municipality) name, as in the dataset folders
    #[arg(value_parser = parse_campus)]
    campus: CampusName,

    /// Course code (CO_CURSO)
    course: CourseCode,

    /// View to project
    #[arg(long, value_enum)]
    view: Option<ViewArg>,

    /// Exam year; defaults to the most recent one
    #[arg(long)]
    year: Option<ExamYear>,

    /// Score plotted by the overview and history views
    #[arg(long, value_enum)]
    metric: Option<MetricArg>,

    /// Comparison baseline to enable (repeatable)
    #[arg(long = "baseline", value_enum)]
    baselines: Vec<BaselineArg>,

    /// Question label to locate in the exam booklet ("Q5", "D3", ...)
    #[arg(long)]
    question: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewArg {
    Overview,
    Topic,
    History,
    Perception,
}

impl From<ViewArg> for ActiveView {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Overview => ActiveView::Overview,
            ViewArg::Topic => ActiveView::Topic,
            ViewArg::History => ActiveView::History,
            ViewArg::Perception => ActiveView::Perception,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MetricArg {
    Overall,
    GeneralFormation,
    SpecificComponent,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Overall => Metric::Overall,
            MetricArg::GeneralFormation => Metric::GeneralFormation,
            MetricArg::SpecificComponent => Metric::SpecificComponent,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BaselineArg {
    InstitutionArea,
    National,
    Regional,
    State,
}

impl From<BaselineArg> for Baseline {
    fn from(arg: BaselineArg) -> Self {
        match arg {
            BaselineArg::InstitutionArea => Baseline::InstitutionArea,
            BaselineArg::National => Baseline::National,
            BaselineArg::Regional => Baseline::Regional,
            BaselineArg::State => Baseline::State,
        }
    }
}

fn parse_campus(value: &str) -> Result<CampusName, String> {
    CampusName::new(value).map_err(|e| e.to_string())
}

impl Cli {
    /// Selection events beyond campus and course, in application order.
    fn events(&self) -> Vec<SelectionEvent> {
        let mut events = Vec::new();
        if let Some(view) = self.view {
            events.push(SelectionEvent::SelectView(view.into()));
        }
        if let Some(year) = self.year {
            events.push(SelectionEvent::SelectYear(year));
        }
        if let Some(metric) = self.metric {
            events.push(SelectionEvent::SelectMetric(metric.into()));
        }
        events.extend(
            self.baselines
                .iter()
                .map(|baseline| SelectionEvent::SetBaseline((*baseline).into(), true)),
        );
        events
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let source = from_config(&config.data_source)?;
    let repository = Arc::new(DatasetRepository::new(source));
    tracing::info!(source = %repository.source(), "Dataset source ready");

    let mut coordinator = ViewCoordinator::new(repository, config.coordinator_options());
    let events = cli.events();
    coordinator.select(SelectionEvent::SelectCampus(cli.campus)).await;
    coordinator.select(SelectionEvent::SelectCourse(cli.course)).await;
    for event in events {
        coordinator.select(event).await;
    }

    let page = match cli.question {
        Some(label) => Some(coordinator.locate_question(&label).await.ok()),
        None => None,
    };

    let output = json!({
        "selection": coordinator.selection(),
        "status": coordinator.status(),
        "notices": coordinator.notices(),
        "series": coordinator.active_series(),
        "examPage": page.flatten().map(|p| json!({"page": p, "viewerUrl": p.viewer_url()})),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
