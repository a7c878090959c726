use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acta_core::{
    assemble, fill_template, monthly_account_content, number_agreements, spell, SessionDetails,
    ACCOUNT_REDUNDANT_PASSAGE, DEFAULT_TEMPLATE,
};
use acta_layout::{layout_render, roster_parse};
use acta_types::{NonEmptyText, SessionKind};

#[derive(Parser)]
#[command(name = "acta")]
#[command(about = "Municipal session record composition CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a layout from a filled narrative and a roster
    Compose {
        /// Filled narrative text file
        #[arg(long)]
        narrative: PathBuf,
        /// Roster YAML file
        #[arg(long)]
        roster: PathBuf,
        /// Output file for the layout YAML (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fill the template for a general session
    Fill {
        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Opening time (HH:MM)
        #[arg(long)]
        opened: String,
        /// Closing time (HH:MM)
        #[arg(long)]
        closed: String,
        /// Session kind: ordinaria, extraordinaria or solemne
        #[arg(long, default_value = "ordinaria")]
        kind: String,
        /// Session subject
        #[arg(long)]
        subject: String,
        /// File holding the president's remarks
        #[arg(long)]
        remarks: PathBuf,
        /// File holding one agreement per paragraph
        #[arg(long)]
        agreements: PathBuf,
        /// Alternative template file
        #[arg(long)]
        template: Option<PathBuf>,
        /// Output file for the filled narrative (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fill the template for a monthly public-account session
    CuentaPublica {
        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Opening time (HH:MM)
        #[arg(long)]
        opened: String,
        /// Closing time (HH:MM)
        #[arg(long)]
        closed: String,
        /// Reported month (1-12)
        #[arg(long)]
        month: usize,
        /// Reported year
        #[arg(long)]
        year: u32,
        /// Session kind: ordinaria, extraordinaria or solemne
        #[arg(long, default_value = "ordinaria")]
        kind: String,
        /// Roster YAML file, used for the vote head-count
        #[arg(long)]
        roster: PathBuf,
        /// Alternative template file
        #[arg(long)]
        template: Option<PathBuf>,
        /// Output file for the filled narrative (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Spell a number as a Spanish cardinal numeral
    Spell {
        /// Number to spell
        n: u32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("acta=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Compose {
            narrative,
            roster,
            out,
        }) => match compose(&narrative, &roster, out.as_deref()) {
            Ok(()) => {}
            Err(e) => eprintln!("Error composing layout: {}", e),
        },
        Some(Commands::Fill {
            date,
            opened,
            closed,
            kind,
            subject,
            remarks,
            agreements,
            template,
            out,
        }) => {
            let result = fill(
                &date,
                &opened,
                &closed,
                &kind,
                &subject,
                &remarks,
                &agreements,
                template.as_deref(),
                out.as_deref(),
            );
            if let Err(e) = result {
                eprintln!("Error filling template: {}", e);
            }
        }
        Some(Commands::CuentaPublica {
            date,
            opened,
            closed,
            month,
            year,
            kind,
            roster,
            template,
            out,
        }) => {
            let result = cuenta_publica(
                &date,
                &opened,
                &closed,
                month,
                year,
                &kind,
                &roster,
                template.as_deref(),
                out.as_deref(),
            );
            if let Err(e) = result {
                eprintln!("Error filling cuenta pública template: {}", e);
            }
        }
        Some(Commands::Spell { n }) => {
            println!("{}", spell(n));
        }
        None => {
            println!("Use 'acta --help' for commands");
        }
    }

    Ok(())
}

fn compose(
    narrative: &std::path::Path,
    roster: &std::path::Path,
    out: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let narrative_text = fs::read_to_string(narrative)?;
    let roster_text = fs::read_to_string(roster)?;
    let roster = roster_parse(&roster_text)?;

    let layout = assemble(&narrative_text, &roster);
    let yaml = layout_render(&layout)?;
    write_output(out, &yaml)
}

#[allow(clippy::too_many_arguments)]
fn fill(
    date: &str,
    opened: &str,
    closed: &str,
    kind: &str,
    subject: &str,
    remarks: &std::path::Path,
    agreements: &std::path::Path,
    template: Option<&std::path::Path>,
    out: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let details = session_details(date, opened, closed, kind)?;
    let subject = NonEmptyText::new(subject)?;
    let remarks = NonEmptyText::new(fs::read_to_string(remarks)?)?;

    let agreement_items: Vec<String> = fs::read_to_string(agreements)?
        .split("\n\n")
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    let numbered = number_agreements(&agreement_items);

    let template_text = load_template(template)?;
    let filled = fill_template(&template_text, &details, &subject, &remarks, &numbered)?;
    write_output(out, &filled)
}

#[allow(clippy::too_many_arguments)]
fn cuenta_publica(
    date: &str,
    opened: &str,
    closed: &str,
    month: usize,
    year: u32,
    kind: &str,
    roster: &std::path::Path,
    template: Option<&std::path::Path>,
    out: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if month == 0 {
        return Err("month must be between 1 and 12".into());
    }
    let details = session_details(date, opened, closed, kind)?;

    let roster_text = fs::read_to_string(roster)?;
    let roster = roster_parse(&roster_text)?;
    let present = roster.iter().filter(|attendee| attendee.attended).count();

    let content = monthly_account_content(month - 1, year, present, roster.len())?;
    let subject = NonEmptyText::new(&content.subject)?;
    let remarks = NonEmptyText::new(&content.remarks)?;

    // The generated remarks already narrate the hand-out and the vote.
    let template_text = load_template(template)?.replacen(ACCOUNT_REDUNDANT_PASSAGE, "", 1);
    let filled = fill_template(
        &template_text,
        &details,
        &subject,
        &remarks,
        &content.agreements,
    )?;
    write_output(out, &filled)
}

fn session_details(
    date: &str,
    opened: &str,
    closed: &str,
    kind: &str,
) -> Result<SessionDetails, Box<dyn std::error::Error>> {
    Ok(SessionDetails {
        date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")?,
        opened: chrono::NaiveTime::parse_from_str(opened, "%H:%M")?,
        closed: chrono::NaiveTime::parse_from_str(closed, "%H:%M")?,
        kind: kind.parse::<SessionKind>()?,
    })
}

fn load_template(
    template: Option<&std::path::Path>,
) -> Result<String, Box<dyn std::error::Error>> {
    match template {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

fn write_output(out: Option<&std::path::Path>, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    match out {
        Some(path) => {
            fs::write(path, text)?;
            tracing::info!("wrote {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
