use clap::Parser;
use cronforge::ScheduleFields;
use std::process;

const NO_MATCH_MESSAGE: &str = "Could not parse the natural language. \
Try examples like 'every Monday at 9am' or 'every day at 14:30'.";

#[derive(Parser)]
#[command(name = "cronforge", about = "Build and explain cron expressions", version)]
struct Cli {
    /// Natural-language phrase (e.g., "every weekday at 9am")
    phrase: Option<String>,

    /// Explain a 5-field cron expression
    #[arg(long, value_name = "CRON")]
    explain: Option<String>,

    /// Start from a preset: every-minute, every-day-9, every-monday-9
    #[arg(long, conflicts_with = "phrase")]
    preset: Option<String>,

    /// Minute field
    #[arg(long, default_value = "0")]
    minute: String,

    /// Hour field
    #[arg(long, default_value = "0")]
    hour: String,

    /// Day-of-month field
    #[arg(long, default_value = "*")]
    day_of_month: String,

    /// Month field
    #[arg(long, default_value = "*")]
    month: String,

    /// Day-of-week field (0=Sunday)
    #[arg(long, default_value = "*")]
    day_of_week: String,

    /// Validate a phrase without printing the expression
    #[arg(long, requires = "phrase")]
    check: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref expr) = cli.explain {
        println!("{}", cronforge::explain(expr));
        process::exit(0);
    }

    let fields = if let Some(ref phrase) = cli.phrase {
        match cronforge::interpret(phrase) {
            Some(fields) => fields,
            None => {
                eprintln!("{NO_MATCH_MESSAGE}");
                process::exit(1);
            }
        }
    } else if let Some(ref preset) = cli.preset {
        match preset.as_str() {
            "every-minute" => ScheduleFields::every_minute(),
            "every-day-9" => ScheduleFields::daily_at_nine(),
            "every-monday-9" => ScheduleFields::monday_at_nine(),
            other => {
                eprintln!("error: unknown preset: {other}");
                process::exit(2);
            }
        }
    } else {
        ScheduleFields::new(
            cli.minute.as_str(),
            cli.hour.as_str(),
            cli.day_of_month.as_str(),
            cli.month.as_str(),
            cli.day_of_week.as_str(),
        )
    };

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.json {
        let out = serde_json::json!({
            "fields": fields,
            "expression": fields.compose(),
            "description": fields.describe(),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
    } else {
        println!("{}", fields.compose());
        println!("{}", fields.describe());
    }
}
