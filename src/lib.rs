mod compare_floats;
pub mod core;
pub mod engine;
pub mod errors;
pub mod input;
pub mod locations;
pub mod output;

#[macro_use]
extern crate is_close;
extern crate lazy_static;

use crate::core::climate::{describe_zone, resolve_climate_zone};
use crate::core::recommendations::{generate_recommendations, Recommendations};
use crate::engine::{calculate_energy_costs, CalculationResult};
use crate::errors::{AssessmentError, LocationDataError};
use crate::input::ingest_for_assessment;
use crate::locations::LocationSelection;
use crate::output::Output;
use bitflags::bitflags;
use csv::WriterBuilder;
use itertools::Itertools;
use serde::Serialize;
use std::borrow::Cow;
use std::io::Read;
use std::io::Write;
use tracing::{debug, error, info};

bitflags! {
    /// Toggles for the optional artifacts an assessment run can emit.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct AssessmentFlags: u8 {
        const RECOMMENDATIONS = 0b001;
        const BREAKDOWN_CSV = 0b010;
        const SUMMARY_JSON = 0b100;
    }
}

/// The outcome of a full assessment run, independent of any files written.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssessmentResults {
    pub location: LocationSelection,
    pub result: CalculationResult,
    pub recommendations: Option<Recommendations>,
}

const REPORT_KEY: &str = "report";
const BREAKDOWN_KEY: &str = "breakdown";
const SUMMARY_KEY: &str = "summary";

/// Run one assessment end to end: ingest the document, resolve the location,
/// calculate costs and emissions, then write the requested artifacts.
pub fn run_assessment(
    input: impl Read,
    output: impl Output,
    flags: &AssessmentFlags,
) -> Result<AssessmentResults, AssessmentError> {
    let document = ingest_for_assessment(input)?;

    let location = document
        .location
        .as_ref()
        .ok_or(LocationDataError::NotSelected)?
        .resolve()?;

    let building = document.building.to_spec();
    let climate = resolve_climate_zone(&location.climate_zone_code);
    let result = match calculate_energy_costs(
        &building,
        climate,
        location.electricity_price_cents_per_kwh,
    ) {
        Ok(result) => result,
        Err(err) => {
            error!("Error running calculation: {err}");
            return Err(err.into());
        }
    };
    debug!("calculation details: {result:?}");

    let recommendations = flags
        .contains(AssessmentFlags::RECOMMENDATIONS)
        .then(|| generate_recommendations(&result, climate));

    let results = AssessmentResults {
        location,
        result,
        recommendations,
    };

    if !output.is_noop() {
        write_report_file(&output, &results).map_err(AssessmentError::ErrorInOutput)?;
        if flags.contains(AssessmentFlags::BREAKDOWN_CSV) {
            write_breakdown_file(&output, &results.result)
                .map_err(AssessmentError::ErrorInOutput)?;
        }
        if flags.contains(AssessmentFlags::SUMMARY_JSON) {
            write_summary_file(&output, &results).map_err(AssessmentError::ErrorInOutput)?;
        }
    }

    Ok(results)
}

fn write_report_file(output: &impl Output, results: &AssessmentResults) -> anyhow::Result<()> {
    info!("writing out {REPORT_KEY} artifact");
    let mut writer = output.writer_for_artifact(REPORT_KEY, "txt")?;

    let location = &results.location;
    let result = &results.result;

    writeln!(writer, "Home Energy Cost Model assessment")?;
    writeln!(
        writer,
        "Location: {} County, {}",
        location.county, location.state
    )?;
    writeln!(
        writer,
        "Climate zone: {} ({})",
        location.climate_zone_code,
        describe_zone(&location.climate_zone_code)
    )?;
    writeln!(
        writer,
        "Electricity price: {} cents/kWh",
        location.electricity_price_cents_per_kwh
    )?;
    writeln!(
        writer,
        "Heating: {} ({} tier) on {}",
        result.building.heating_system, result.building.efficiency_tier, result.building.heating_fuel
    )?;
    writeln!(writer, "Ducts: {}", result.building.duct_location)?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Estimated annual heating cost: ${:.2}",
        result.costs.heating_cost
    )?;
    writeln!(
        writer,
        "Estimated annual cooling cost: ${:.2}",
        result.costs.cooling_cost
    )?;
    writeln!(
        writer,
        "Estimated annual energy cost: ${:.2}",
        result.costs.total_cost
    )?;
    writeln!(
        writer,
        "Estimated annual emissions: {} lbs CO₂",
        result.emissions.total_lbs.round()
    )?;

    if let Some(recommendations) = &results.recommendations {
        writeln!(writer)?;
        writeln!(writer, "Recommendations:")?;
        writeln!(
            writer,
            "{}",
            recommendations
                .lines
                .iter()
                .map(|line| format!("- {line}"))
                .join("\n")
        )?;
    }

    writer.flush()?;

    Ok(())
}

fn write_breakdown_file(output: &impl Output, result: &CalculationResult) -> anyhow::Result<()> {
    info!("writing out {BREAKDOWN_KEY} artifact");
    let writer = output.writer_for_artifact(BREAKDOWN_KEY, "csv")?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    let heating_unit = result.building.heating_fuel.properties().unit;

    let headings = [
        "Wall loss",
        "Ceiling loss",
        "Window loss",
        "Infiltration loss",
        "Weather exposure",
        "Whole-home loss rate",
        "Heating demand",
        "Cooling demand",
        "Heating fuel bought",
        "Cooling electricity bought",
        "Heating cost",
        "Cooling cost",
        "Total cost",
        "Heating emissions",
        "Cooling emissions",
        "Total emissions",
    ];
    let units_row: Vec<Cow<'static, str>> = vec![
        "[BTU/hr/degF]".into(),
        "[BTU/hr/degF]".into(),
        "[BTU/hr/degF]".into(),
        "[BTU/hr/degF]".into(),
        "[ratio]".into(),
        "[BTU/hr/degF]".into(),
        "[BTU]".into(),
        "[BTU]".into(),
        format!("[{heating_unit}]").into(),
        "[kWh]".into(),
        "[USD]".into(),
        "[USD]".into(),
        "[USD]".into(),
        "[lbs CO2]".into(),
        "[lbs CO2]".into(),
        "[lbs CO2]".into(),
    ];

    // Write headings and units to output file
    writer.write_record(&headings)?;
    writer.write_record(units_row.iter().map(|unit| unit.as_ref()))?;

    let values = [
        result.envelope.wall_loss,
        result.envelope.ceiling_loss,
        result.envelope.window_loss,
        result.infiltration_loss_rate,
        result.weather_exposure_factor,
        result.total_loss_rate,
        result.demand.heating_btu,
        result.demand.cooling_btu,
        result.consumption.heating_fuel_units,
        result.consumption.cooling_kwh,
        result.costs.heating_cost,
        result.costs.cooling_cost,
        result.costs.total_cost,
        result.emissions.heating_lbs,
        result.emissions.cooling_lbs,
        result.emissions.total_lbs,
    ];
    writer.write_record(values.iter().map(|value| value.to_string()))?;

    writer.flush()?;

    Ok(())
}

fn write_summary_file(output: &impl Output, results: &AssessmentResults) -> anyhow::Result<()> {
    info!("writing out {SUMMARY_KEY} artifact");
    let mut writer = output.writer_for_artifact(SUMMARY_KEY, "json")?;

    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InputValidationError;
    use approx::assert_relative_eq;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::cell::RefCell;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::FmtSubscriber;

    #[derive(Debug, Default)]
    struct MemoryOutput {
        artifacts: RefCell<IndexMap<String, Vec<u8>>>,
    }

    impl MemoryOutput {
        fn artifact(&self, name: &str) -> String {
            String::from_utf8(self.artifacts.borrow()[name].clone()).unwrap()
        }

        fn artifact_names(&self) -> Vec<String> {
            self.artifacts.borrow().keys().cloned().collect()
        }
    }

    struct MemoryWriter<'a> {
        output: &'a MemoryOutput,
        name: String,
    }

    impl Write for MemoryWriter<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.output
                .artifacts
                .borrow_mut()
                .entry(self.name.clone())
                .or_default()
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Output for &MemoryOutput {
        fn writer_for_artifact(
            &self,
            artifact_key: &str,
            file_extension: &str,
        ) -> anyhow::Result<impl Write> {
            let name = format!("{artifact_key}.{file_extension}");
            self.artifacts.borrow_mut().entry(name.clone()).or_default();
            Ok(MemoryWriter {
                output: self,
                name,
            })
        }
    }

    #[derive(Clone, Default)]
    struct LogBuffer {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[fixture]
    fn document_json() -> &'static str {
        r#"{
            "location": {
                "county": "Cuyahoga",
                "state": "Ohio",
                "climate_zone": "5A",
                "electricity_price_cents_per_kwh": 13.5
            },
            "building": {
                "square_footage": 2000.0,
                "wall_r_value": 13.0,
                "ceiling_r_value": 30.0,
                "window_glazing": "single",
                "infiltration": "average",
                "heating_fuel": "electricity",
                "heating_system": "electric",
                "hvac_tier": "standard",
                "duct_location": "unconditioned"
            }
        }"#
    }

    #[rstest]
    fn should_run_an_assessment_and_write_the_report(document_json: &str) {
        let memory_output = MemoryOutput::default();
        let results = run_assessment(
            document_json.as_bytes(),
            &memory_output,
            &AssessmentFlags::RECOMMENDATIONS,
        )
        .unwrap();

        assert_relative_eq!(
            results.result.costs.total_cost,
            5_886.029814304966,
            max_relative = 1e-12
        );
        assert_eq!(results.recommendations.as_ref().unwrap().lines.len(), 13);
        assert_eq!(memory_output.artifact_names(), vec!["report.txt"]);

        let report = memory_output.artifact("report.txt");
        assert!(report.contains("Location: Cuyahoga County, Ohio"));
        assert!(report.contains("Climate zone: 5A (Cool - Humid)"));
        assert!(report.contains("Estimated annual energy cost: $5886.03"));
        assert!(report.contains("Estimated annual emissions: 40112 lbs CO₂"));
        assert!(report.contains(
            "- Upgrading from single-pane to double-pane windows could reduce heat loss through windows by up to 50%."
        ));
    }

    #[rstest]
    fn should_write_optional_artifacts_when_asked(document_json: &str) {
        let memory_output = MemoryOutput::default();
        let results = run_assessment(
            document_json.as_bytes(),
            &memory_output,
            &AssessmentFlags::all(),
        )
        .unwrap();

        assert_eq!(
            memory_output.artifact_names(),
            vec!["report.txt", "breakdown.csv", "summary.json"]
        );

        let breakdown = memory_output.artifact("breakdown.csv");
        let mut lines = breakdown.lines();
        assert!(lines.next().unwrap().starts_with("Wall loss,Ceiling loss,"));
        assert!(lines.next().unwrap().starts_with("[BTU/hr/degF],"));
        assert!(lines.next().unwrap().contains("5886.029814304966"));

        let summary: serde_json::Value =
            serde_json::from_str(&memory_output.artifact("summary.json")).unwrap();
        assert_eq!(summary["location"]["county"], "Cuyahoga");
        assert_relative_eq!(
            summary["result"]["costs"]["total_cost"].as_f64().unwrap(),
            results.result.costs.total_cost,
            max_relative = 1e-12
        );
    }

    #[rstest]
    fn should_skip_recommendations_without_the_flag(document_json: &str) {
        let memory_output = MemoryOutput::default();
        let results = run_assessment(
            document_json.as_bytes(),
            &memory_output,
            &AssessmentFlags::empty(),
        )
        .unwrap();

        assert!(results.recommendations.is_none());
        assert!(!memory_output
            .artifact("report.txt")
            .contains("Recommendations:"));
    }

    #[rstest]
    fn should_report_a_missing_location(document_json: &str) {
        let (_, building_only) = document_json.split_once("\"building\":").unwrap();
        let json = format!("{{\"building\":{}", building_only.trim_end());
        let error = run_assessment(
            json.as_bytes(),
            crate::output::SinkOutput,
            &AssessmentFlags::empty(),
        )
        .unwrap_err();

        assert!(matches!(
            error,
            AssessmentError::IncompleteLocation(LocationDataError::NotSelected)
        ));
    }

    #[rstest]
    fn should_report_an_invalid_document() {
        let error = run_assessment(
            "{\"building\": {}}".as_bytes(),
            crate::output::SinkOutput,
            &AssessmentFlags::empty(),
        )
        .unwrap_err();

        assert!(matches!(error, AssessmentError::InvalidDocument(_)));
    }

    #[rstest]
    fn should_report_calculation_failures(document_json: &str) {
        let json = document_json.replace(
            "\"heating_system\": \"electric\"",
            "\"heating_system\": \"heat_pump\"",
        );
        let json = json.replace(
            "\"heating_fuel\": \"electricity\"",
            "\"heating_fuel\": \"natural_gas\"",
        );
        let error = run_assessment(
            json.as_bytes(),
            crate::output::SinkOutput,
            &AssessmentFlags::empty(),
        )
        .unwrap_err();

        assert!(matches!(
            error,
            AssessmentError::FailureInCalculation(
                InputValidationError::IncompatibleHeatingSystem { .. }
            )
        ));
    }

    #[rstest]
    fn should_log_calculation_details_and_failures(document_json: &str) {
        let log_buffer = LogBuffer::default();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(log_buffer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            run_assessment(
                document_json.as_bytes(),
                crate::output::SinkOutput,
                &AssessmentFlags::empty(),
            )
            .unwrap();

            let json = document_json.replace(
                "\"heating_system\": \"electric\"",
                "\"heating_system\": \"heat_pump\"",
            );
            let json = json.replace(
                "\"heating_fuel\": \"electricity\"",
                "\"heating_fuel\": \"natural_gas\"",
            );
            run_assessment(
                json.as_bytes(),
                crate::output::SinkOutput,
                &AssessmentFlags::empty(),
            )
            .unwrap_err();
        });

        let logs = log_buffer.contents();
        assert!(logs.contains("calculation details:"));
        assert!(logs.contains("Error running calculation: A Heat Pump cannot run on Natural Gas"));
    }
}
