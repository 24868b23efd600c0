use crate::infra::read_input;
use chrono::{Local, NaiveDate};
use clap::Args;
use form_relay::config::AppConfig;
use form_relay::error::AppError;
use form_relay::handler::decode_body;
use form_relay::telemetry;
use form_relay::{
    Clock, FixedClock, FormKind, FormattedReport, InvocationRequest, InvocationResponse,
    MailTransport, RelayError, SmtpMailer, SubmissionHandler, SystemClock,
};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct InvokeArgs {
    /// Form to submit: contractor-application, general-inquiry, or proposal
    #[arg(long, value_parser = crate::infra::parse_form)]
    pub(crate) form: FormKind,
    /// Request descriptor JSON (`{"body": ...}`). Reads stdin when omitted.
    #[arg(long)]
    pub(crate) event: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct PreviewArgs {
    /// Form to validate: contractor-application, general-inquiry, or proposal
    #[arg(long, value_parser = crate::infra::parse_form)]
    pub(crate) form: FormKind,
    /// Submission body as a JSON object. Use `-` for stdin.
    #[arg(long)]
    pub(crate) body: PathBuf,
    /// Treat this date (YYYY-MM-DD) as today for deadline checks.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_invoke(args: InvokeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_stderr(&config.telemetry)?;
    let raw = read_input(args.event.as_deref())?;

    let handler = SubmissionHandler::new(
        config.mail.clone(),
        SmtpMailer::new(config.mail),
        SystemClock,
    );
    let response = invoke_event(&handler, args.form, &raw)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&response).map_err(std::io::Error::from)?
    );
    Ok(())
}

pub(crate) fn invoke_event<T, C>(
    handler: &SubmissionHandler<T, C>,
    form: FormKind,
    raw_event: &str,
) -> Result<InvocationResponse, AppError>
where
    T: MailTransport,
    C: Clock,
{
    let request: InvocationRequest =
        serde_json::from_str(raw_event).map_err(std::io::Error::from)?;
    Ok(handler.handle(form, request))
}

pub(crate) fn run_preview(args: PreviewArgs) -> Result<(), AppError> {
    let raw = read_input(Some(args.body.as_path()))?;
    let clock: Box<dyn Clock> = match args.today {
        Some(today) => Box::new(FixedClock(today.and_time(Local::now().time()))),
        None => Box::new(SystemClock),
    };

    match preview_submission(args.form, &raw, clock.as_ref()) {
        Preview::Report(report) => print!("{report}"),
        Preview::Rejected(body) => println!(
            "{}",
            serde_json::to_string_pretty(&body).map_err(std::io::Error::from)?
        ),
    }
    Ok(())
}

#[derive(Debug)]
pub(crate) enum Preview {
    Report(FormattedReport),
    Rejected(Value),
}

pub(crate) fn preview_submission(form: FormKind, raw_body: &str, clock: &dyn Clock) -> Preview {
    let outcome = decode_body(Some(Value::String(raw_body.to_string()))).and_then(|record| {
        form.review(&record, clock)
            .map_err(RelayError::Validation)
    });

    match outcome {
        Ok(report) => Preview::Report(report),
        Err(err) => Preview::Rejected(err.response_body()),
    }
}
