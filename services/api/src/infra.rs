use chrono::NaiveDate;
use form_relay::FormKind;
use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_form(raw: &str) -> Result<FormKind, String> {
    raw.parse::<FormKind>().map_err(|err| {
        let known: Vec<&str> = FormKind::ALL.iter().map(|kind| kind.slug()).collect();
        format!("{err} (expected one of: {})", known.join(", "))
    })
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Contents of `path`, or of stdin when no path (or `-`) is given.
pub(crate) fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_form_lists_known_slugs_on_error() {
        assert_eq!(parse_form("general-inquiry"), Ok(FormKind::GeneralInquiry));

        let err = parse_form("rfp").expect_err("unknown slug");
        assert!(err.contains("contractor-application, general-inquiry, proposal"));
    }

    #[test]
    fn parse_date_requires_iso_dates() {
        assert_eq!(
            parse_date(" 2025-11-15 "),
            Ok(NaiveDate::from_ymd_opt(2025, 11, 15).expect("valid"))
        );
        assert!(parse_date("11/15/2025").is_err());
    }
}
