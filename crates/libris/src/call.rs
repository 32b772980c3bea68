use crate::display::format_json;
use crate::prelude::{eprintln, println, *};
use libris_core::request::{Call, Operation};
use libris_core::Session;

#[derive(Debug, clap::Args)]
pub struct CallOptions {
    /// Operation to run
    #[arg(value_name = "OPERATION", value_parser = clap::builder::PossibleValuesParser::new(Operation::NAMES))]
    pub operation: String,

    /// JSON object with the operation arguments, e.g. '{"decade": 2010}'
    #[arg(short, long, value_name = "JSON")]
    pub args: Option<String>,
}

/// Parse the raw `--args` text into a JSON value.
fn parse_arguments(args: Option<&str>) -> std::result::Result<Option<serde_json::Value>, Error> {
    args.map(|text| {
        serde_json::from_str(text).map_err(|e| Error::InvalidJson {
            source_name: "--args".to_string(),
            reason: e.to_string(),
        })
    })
    .transpose()
}

/// Validate and run a call, returning its JSON output.
pub fn call_data(options: &CallOptions, session: &Session) -> std::result::Result<String, Error> {
    let arguments = parse_arguments(options.args.as_deref())?;
    let call = Call::parse(&options.operation, arguments.as_ref())?;

    log::debug!("running {:?}", call.operation);

    let outcome = call.run(session);
    serde_json::to_string_pretty(&outcome).map_err(|e| Error::InvalidJson {
        source_name: "outcome".to_string(),
        reason: e.to_string(),
    })
}

pub fn run(options: CallOptions, session: &Session, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Calling {} with {}",
            options.operation,
            options.args.as_deref().unwrap_or("no arguments")
        );
    }

    let output = call_data(&options, session)?;
    println!("{}", output);
    Ok(())
}
