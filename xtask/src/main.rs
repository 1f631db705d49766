//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate keeps the engine crates free of IO.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        let parent = manifest_dir
            .parent()
            .context("xtask directory has no parent")?;
        Ok(parent.to_path_buf())
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn action_fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?
        .join("contracts")
        .join("fixtures")
        .join("actions"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_action_schema() -> schemars::Schema {
    schema_for!(lgr_types::ActionSpec)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(lgr_settings::LgrConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "lgr.action.v1.json",
            generate: generate_action_schema,
        },
        SchemaSpec {
            filename: "lgr.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn json_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Action fixture conformance.
///
/// Every fixture must validate against the generated action schema. Fixtures under `valid/`
/// must also construct an action; fixtures under `invalid/` must be rejected at construction.
fn conform() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_action_schema())
        .context("Failed to convert action schema to JSON")?;
    let compiled = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile action schema: {e}"))?;

    println!("✓ lgr.action.v1 schema compiles");

    let root = action_fixtures_dir()?;
    let mut errors = Vec::new();
    let mut count = 0;

    for (group, expect_valid) in [("valid", true), ("invalid", false)] {
        let dir = root.join(group);
        if !dir.exists() {
            bail!("{} not found\n\nCreate action fixtures first.", dir.display());
        }

        for path in json_files(&dir)? {
            count += 1;
            let name = format!("{group}/{}", file_name(&path));
            let content =
                fs::read_to_string(&path).with_context(|| format!("Failed to read {name}"))?;
            let value: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {name} as JSON"))?;

            for err in compiled.iter_errors(&value) {
                errors.push(format!("{name}: schema validation: {err}"));
            }

            let spec: lgr_types::ActionSpec = match serde_json::from_value(value) {
                Ok(spec) => spec,
                Err(e) => {
                    errors.push(format!("{name}: does not deserialize: {e}"));
                    continue;
                }
            };

            match (lgr_domain::Action::new(spec), expect_valid) {
                (Ok(_), true) | (Err(_), false) => {}
                (Ok(action), false) => {
                    errors.push(format!("{name}: expected rejection, built {action}"));
                }
                (Err(e), true) => errors.push(format!("{name}: {e}")),
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {count} action fixtures conform");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

/// Validate that all codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let codes = lgr_types::all_codes();
    let mut errors = Vec::new();

    for code in codes {
        match lgr_types::lookup_explanation(code) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Code '{code}' has empty title"));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Code '{code}' has empty description"));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Code '{code}' has empty remediation"));
                }
            }
            None => errors.push(format!("Code '{code}' has no explanation")),
        }
    }

    if errors.is_empty() {
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate action fixtures against lgr.action.v1");
    eprintln!("  explain-coverage  Validate all codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
