//! Lifescore CLI
//!
//! Survey JSON in, score report out. The seed pins tip selection so the
//! same invocation always prints the same report.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use lifescore_core::{
    calculate_with_seed, CarOwnership, EducationLevel, ExerciseFrequency, HeightInput,
    HobbyQuality, LivingSituation, RankedHobby, ReferenceData, RelationshipStatus, ScoreReport,
    SurveyInput, SurveyValidator, WeightInput,
};

#[derive(Parser)]
#[command(name = "lifescore")]
#[command(about = "Compute a life-score report from survey answers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a survey answers file
    Score {
        /// Input survey JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Tip-selection seed (same seed = same tips)
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Output report JSON file path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print a human-readable report instead of JSON
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Write a fully-populated sample survey file
    Template {
        /// Output survey JSON file path
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score { r#in, seed, out, pretty } => run_score(&r#in, seed, out.as_deref(), pretty),
        Commands::Template { out } => run_template(&out),
    }
}

fn run_score(input: &std::path::Path, seed: u64, out: Option<&std::path::Path>, pretty: bool) -> Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("failed to read survey file: {}", input.display()))?;
    let survey: SurveyInput =
        serde_json::from_str(&raw).context("survey file is not a valid survey JSON record")?;

    if let Err(errors) = SurveyValidator::validate(&survey) {
        let joined = errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n  ");
        bail!("survey answers are out of range:\n  {}", joined);
    }

    let report = calculate_with_seed(&survey, ReferenceData::us(), seed);

    let text = if pretty {
        render_report(&report)
    } else {
        serde_json::to_string_pretty(&report).context("failed to serialize report")?
    };

    match out {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("failed to write report: {}", path.display()))?,
        None => println!("{}", text),
    }
    Ok(())
}

fn run_template(out: &std::path::Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&sample_survey())
        .context("failed to serialize sample survey")?;
    fs::write(out, json)
        .with_context(|| format!("failed to write template: {}", out.display()))?;
    Ok(())
}

fn render_report(report: &ScoreReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Overall: {}/10 ({}th percentile)",
        report.overall_score, report.overall_percentile
    ));
    lines.push(String::new());

    for (category, result) in report.categories.iter() {
        lines.push(format!(
            "{:<22} {:>2}/10  ({}th percentile)",
            category.display_name(),
            result.score,
            result.percentile
        ));
        lines.push(format!("  {}", result.explanation));
        lines.push(format!("  Tip: {}", result.level_up_tip));
    }

    lines.push(String::new());
    lines.push(format!("Strongest: {}", report.strongest_category.display_name()));
    lines.push(format!("Weakest:   {}", report.weakest_category.display_name()));
    lines.push(String::new());
    lines.push(report.summary.clone());
    lines.push(report.primary_improvement.clone());
    lines.join("\n")
}

fn sample_survey() -> SurveyInput {
    SurveyInput {
        age: Some(30),
        country: Some("United States".to_string()),
        height: HeightInput { feet: Some(5.0), inches: Some(9.0), cm: None },
        weight: WeightInput { lbs: Some(180.0), kg: None },
        body_fat_percentage: Some(18.0),
        max_bench: Some(185.0),
        max_squat: Some(225.0),
        max_deadlift: Some(275.0),
        job_title: Some("Software Engineer".to_string()),
        yearly_income: Some(75_000.0),
        education_level: Some(EducationLevel::Bachelor),
        women_slept_with: Some(6),
        relationship_status: Some(RelationshipStatus::Dating),
        close_friends: Some(4),
        social_events_per_month: Some(5),
        facial_attractiveness: Some(6),
        style_grooming: Some(6),
        living_situation: Some(LivingSituation::Renting),
        exercise_frequency: Some(ExerciseFrequency::Regularly),
        hobbies: vec![
            RankedHobby { id: "sports".to_string(), quality: HobbyQuality::Excellent },
            RankedHobby { id: "reading".to_string(), quality: HobbyQuality::Good },
            RankedHobby { id: "gaming".to_string(), quality: HobbyQuality::Neutral },
        ],
        car_ownership: Some(CarOwnership::Standard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_survey_is_valid_and_scorable() {
        let survey = sample_survey();
        assert!(SurveyValidator::validate(&survey).is_ok());
        let report = calculate_with_seed(&survey, ReferenceData::us(), 0);
        assert!(report.overall_score >= 1);
    }

    #[test]
    fn test_template_round_trips_through_score() {
        let dir = tempfile::tempdir().unwrap();
        let survey_path = dir.path().join("survey.json");
        let report_path = dir.path().join("report.json");

        run_template(&survey_path).unwrap();
        run_score(&survey_path, 42, Some(report_path.as_path()), false).unwrap();

        let report: ScoreReport =
            serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
        let direct = calculate_with_seed(&sample_survey(), ReferenceData::us(), 42);
        assert_eq!(report, direct);
    }

    #[test]
    fn test_score_rejects_out_of_range_answers() {
        let dir = tempfile::tempdir().unwrap();
        let survey_path = dir.path().join("survey.json");
        fs::write(&survey_path, r#"{ "age": 12 }"#).unwrap();

        let err = run_score(&survey_path, 0, None, false).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_render_report_mentions_every_category() {
        let report = calculate_with_seed(&sample_survey(), ReferenceData::us(), 0);
        let text = render_report(&report);
        assert!(text.contains("Overall:"));
        assert!(text.contains("Strength & Fitness"));
        assert!(text.contains("Income & Career"));
        assert!(text.contains("Relationship & Dating"));
        assert!(text.contains("Social Life"));
        assert!(text.contains("Lifestyle"));
        assert!(text.contains("Tip:"));
    }
}
