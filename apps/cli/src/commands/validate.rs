use anyhow::Context;
use forma::{Error, ValidationError};

use crate::cli::{ReportFormat, ValidateArgs};
use crate::schema_file::DescriptorFile;

/// `forma validate`. Returns whether the data was valid.
pub fn run(args: &ValidateArgs) -> anyhow::Result<bool> {
    let registry = DescriptorFile::load(&args.descriptors)?.registry()?;

    let text = std::fs::read_to_string(&args.data)
        .with_context(|| format!("failed to read `{}`", args.data.display()))?;
    let json: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("`{}` is not valid JSON", args.data.display()))?;

    match registry.validate_json(&args.strukt, &json) {
        Ok(fields) => {
            tracing::debug!(strukt = %args.strukt, fields = fields.len(), "input valid");
            match args.format {
                ReportFormat::Text => println!("`{}` is valid", args.strukt),
                ReportFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "struct": args.strukt, "valid": true })
                ),
            }
            Ok(true)
        }
        Err(Error::Validation(error)) => {
            report(&error, args.format)?;
            Ok(false)
        }
        Err(other) => Err(other.into()),
    }
}

fn report(error: &ValidationError, format: ReportFormat) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => {
            println!("`{}` is invalid:", error.strukt());
            for violation in error.violations() {
                println!("  {violation}");
            }
        }
        ReportFormat::Json => {
            let mut json = serde_json::to_value(error)?;
            json["valid"] = serde_json::Value::Bool(false);
            println!("{json}");
        }
    }
    Ok(())
}
