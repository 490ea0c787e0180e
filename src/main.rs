use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use log::{LevelFilter, info};
use schoolkr::{
    MonthInput, PageKind, QueryArgs, QueryOptions, SchoolPortal, config::SchoolConfig,
    requests::PageFetcher,
};

/// Prints (or fetches) the portal page of the school configured in the env.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Page to target: "meal" or "calendar".
    kind: String,
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    month: Option<String>,
    /// Options object, e.g. '{"year": 2024, "month": 5, "default": "none"}'.
    #[arg(long, conflicts_with_all = ["year", "month"])]
    options: Option<String>,
    /// Fetch the page instead of printing its URL.
    #[arg(long)]
    fetch: bool,
}

impl Args {
    fn query_args(&self) -> anyhow::Result<QueryArgs<String>> {
        if let Some(options) = &self.options {
            let value = serde_json::from_str(options).context("--options is not valid JSON")?;
            return Ok(QueryArgs::from_json(value)?);
        }
        if self.year.is_none() && self.month.is_none() {
            return Ok(QueryArgs::Bare);
        }
        // Raw text, so the library decides between incomplete and out of range.
        Ok(QueryArgs::Options(QueryOptions {
            year: self.year,
            month: self.month.clone().map(MonthInput::Text),
            default: None,
        }))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let kind = args.kind.parse::<PageKind>()?;
    let query = args.query_args()?;

    let config = SchoolConfig::new()?;
    let portal = SchoolPortal::new(PageFetcher::new()?, PageFetcher::new()?);
    let school = portal.init_with(config.school_builder())?;
    info!("using school {} ({}, {})", school.code(), school.school_type(), school.region());

    if !args.fetch {
        let date = query.normalize()?;
        println!("{}", portal.get_target_url(&args.kind, date.year, date.month)?);
        return Ok(());
    }

    let body = match kind {
        PageKind::Meal => portal.get_meal(query).await?,
        PageKind::Calendar => portal.get_calendar(query).await?,
    };
    println!("{body}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use schoolkr::SchoolError;

    use super::*;

    fn normalized(argv: &[&str]) -> Result<(), SchoolError> {
        let args = Args::try_parse_from(argv).unwrap();
        let query = args.query_args().unwrap();
        query.normalize().map(|_| ())
    }

    #[test]
    fn month_without_year_is_incomplete_whatever_its_value() {
        for month in ["5", "13", ""] {
            assert!(matches!(
                normalized(&["schoolkr", "meal", "--month", month]),
                Err(SchoolError::IncompleteDate)
            ));
        }
        assert!(matches!(
            normalized(&["schoolkr", "meal", "--year", "2024"]),
            Err(SchoolError::IncompleteDate)
        ));
    }

    #[test]
    fn month_range_is_checked_once_the_date_is_complete() {
        assert!(matches!(
            normalized(&["schoolkr", "meal", "--year", "2024", "--month", "13"]),
            Err(SchoolError::MonthRange(m)) if m == "13"
        ));
        assert!(normalized(&["schoolkr", "calendar", "--year", "2024", "--month", "5"]).is_ok());
        assert!(normalized(&["schoolkr", "meal"]).is_ok());
    }

    #[test]
    fn options_flag_conflicts_with_date_flags() {
        assert!(
            Args::try_parse_from(["schoolkr", "meal", "--year", "2024", "--options", "{}"])
                .is_err()
        );
    }
}
