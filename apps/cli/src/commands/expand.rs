use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, bail};

use crate::cli::ExpandArgs;
use crate::config::Config;
use crate::schema_file::{DescriptorFile, codegen_error};

/// `forma expand`
pub fn run(args: &ExpandArgs, config: &Config) -> anyhow::Result<()> {
    let crate_path = args.crate_path.as_deref().unwrap_or(&config.crate_path);
    let format = args.rustfmt || config.rustfmt;
    let source = generate(&args.descriptors, crate_path, format, &config.header)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &source)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            tracing::info!(
                path = %path.display(),
                bytes = source.len(),
                "generated source written"
            );
        }
        None => print!("{source}"),
    }
    Ok(())
}

/// Expands every struct of a descriptor file into Rust source.
pub fn generate(
    descriptors: &Path,
    crate_path: &str,
    format: bool,
    header: &str,
) -> anyhow::Result<String> {
    let file = DescriptorFile::load(descriptors)?;
    let crate_path: syn::Path = syn::parse_str(crate_path)
        .with_context(|| format!("invalid crate path `{crate_path}`"))?;

    let mut tokens = proc_macro2::TokenStream::new();
    for def in file.struct_defs(&crate_path)? {
        let expanded = forma_codegen::expand(&def).map_err(|e| codegen_error(&def, e))?;
        tracing::debug!(strukt = %def.ident, fields = def.fields.len(), "struct expanded");
        tokens.extend(expanded);
    }

    let mut code = tokens.to_string();
    if format {
        code = rustfmt(&code)?;
    }

    let source_name = descriptors
        .file_name()
        .map_or_else(|| descriptors.display().to_string(), |n| n.to_string_lossy().into_owned());
    let mut out = header.replace("{source}", &source_name);
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&code);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn rustfmt(code: &str) -> anyhow::Result<String> {
    let mut child = Command::new("rustfmt")
        .args(["--edition", "2024", "--emit", "stdout"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to run rustfmt")?;

    child
        .stdin
        .take()
        .context("rustfmt stdin unavailable")?
        .write_all(code.as_bytes())
        .context("failed to pipe source to rustfmt")?;

    let output = child.wait_with_output().context("rustfmt did not finish")?;
    if !output.status.success() {
        bail!(
            "rustfmt failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    String::from_utf8(output.stdout).context("rustfmt produced invalid UTF-8")
}
