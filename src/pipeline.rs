use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::ExtractorConfig;
use crate::dataset::Dataset;
use crate::error::{ExtractError, Result};
use crate::extractor::SkillMatcher;
use crate::salary;

pub const RESPONSIBILITIES_COLUMN: &str = "Responsibilities";
pub const REQUIREMENTS_COLUMN: &str = "Requirements";
pub const SALARY_COLUMN: &str = "Salary";

pub const JOB_DESCRIPTION_COLUMN: &str = "Job Description";
pub const SKILLS_COLUMN: &str = "Skills";
pub const MID_SALARY_COLUMN: &str = "Mid Salary";

/// Result of a complete pipeline run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub rows: usize,
    pub rows_with_skills: usize,
    pub rows_with_salary: usize,
    pub distinct_skills: usize,
    pub output_file: String,
}

pub struct Pipeline;

impl Pipeline {
    /// Load the dataset at `input`, derive the Job Description, Skills and
    /// Mid Salary columns for every row, and write the augmented dataset
    /// to `output`. Row order and row count are preserved; per-row absence
    /// (blank salary, empty description) degrades to empty derived values
    /// and never aborts the batch.
    #[instrument(skip(config), fields(input = %input.display()))]
    pub fn run(config: &ExtractorConfig, input: &Path, output: &Path) -> Result<PipelineResult> {
        let matcher = SkillMatcher::new(config.vocabulary())?;
        let mut dataset = Dataset::from_path(input)?;

        let responsibilities = dataset.column(RESPONSIBILITIES_COLUMN);
        let requirements = dataset.column(REQUIREMENTS_COLUMN);
        if responsibilities.is_none() && requirements.is_none() {
            return Err(ExtractError::Schema(format!(
                "need at least one of '{}' or '{}'",
                RESPONSIBILITIES_COLUMN, REQUIREMENTS_COLUMN
            )));
        }
        let salary_column = dataset.column(SALARY_COLUMN);
        if salary_column.is_none() {
            info!("no '{}' column; midpoints will be empty", SALARY_COLUMN);
        }

        let mut descriptions = Vec::with_capacity(dataset.len());
        let mut skills_cells = Vec::with_capacity(dataset.len());
        let mut midpoint_cells = Vec::with_capacity(dataset.len());

        let mut rows_with_skills = 0;
        let mut rows_with_salary = 0;
        let mut all_skills: BTreeSet<String> = BTreeSet::new();

        for (index, row) in dataset.rows().iter().enumerate() {
            let description = format!(
                "{} {}",
                dataset.field(row, responsibilities).unwrap_or(""),
                dataset.field(row, requirements).unwrap_or("")
            );

            let skills = matcher.extract(&description);
            if !skills.is_empty() {
                rows_with_skills += 1;
                all_skills.extend(skills.iter().cloned());
            }

            let mid_salary = dataset
                .field(row, salary_column)
                .and_then(salary::midpoint);
            match mid_salary {
                Some(_) => rows_with_salary += 1,
                None => debug!(row = index, "no salary midpoint"),
            }

            skills_cells.push(
                skills
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(config.skill_separator()),
            );
            midpoint_cells.push(
                mid_salary
                    .map(|v| format!("{}", v))
                    .unwrap_or_default(),
            );
            descriptions.push(description);
        }

        dataset.push_column(JOB_DESCRIPTION_COLUMN, descriptions);
        dataset.push_column(SKILLS_COLUMN, skills_cells);
        dataset.push_column(MID_SALARY_COLUMN, midpoint_cells);

        dataset.write_to_path(output)?;

        let result = PipelineResult {
            rows: dataset.len(),
            rows_with_skills,
            rows_with_salary,
            distinct_skills: all_skills.len(),
            output_file: output.display().to_string(),
        };
        info!(
            rows = result.rows,
            with_skills = result.rows_with_skills,
            with_salary = result.rows_with_salary,
            "pipeline run complete"
        );
        Ok(result)
    }
}
