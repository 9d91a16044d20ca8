//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;
use userstyles_app::{CatalogFormat, parse_catalog_text};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }
    Ok(manifest_dir)
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_catalog_schema() -> schemars::Schema {
    userstyles_types::catalog_schema()
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(userstyles_types::UserstylesReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(userstyles_settings::UserstylesConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "userstyles.catalog.schema.json",
            generate: generate_catalog_schema,
        },
        SchemaSpec {
            filename: "userstyles.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "userstyles.config.v1.json",
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

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
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
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Check that the JSON Schema and the validator agree on fixtures");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

/// Conformance: the generated catalog schema and the document walker must agree.
///
/// For every fixture under `tests/fixtures/` that has an `expected.json`:
/// 1. the catalog parses (JSON or YAML by extension)
/// 2. `jsonschema` accepts it exactly when the walker reports no violations
/// 3. the walker result matches the `schema_violations` reason in `expected.json`
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_catalog_schema())
        .context("Failed to convert catalog schema to JSON")?;
    let compiled = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile catalog schema: {}", e))?;

    println!("✓ catalog schema compiles");

    let dir = fixtures_dir()?;
    let mut fixture_count = 0;
    let mut errors = Vec::new();

    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.join("expected.json").is_file())
        .collect();
    entries.sort();

    for fixture_dir in entries {
        let name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let expected_text = fs::read_to_string(fixture_dir.join("expected.json"))
            .with_context(|| format!("Failed to read expected.json for '{}'", name))?;
        let expected: serde_json::Value = serde_json::from_str(&expected_text)
            .with_context(|| format!("Failed to parse expected.json for '{}'", name))?;

        let catalog_name = expected["catalog"].as_str().unwrap_or("userstyles.json");
        let catalog_path = Utf8PathBuf::from_path_buf(fixture_dir.join(catalog_name))
            .map_err(|p| anyhow::anyhow!("non UTF-8 fixture path: {}", p.display()))?;
        let text = fs::read_to_string(&catalog_path)
            .with_context(|| format!("Failed to read {}", catalog_path))?;
        let value = parse_catalog_text(&text, CatalogFormat::from_path(&catalog_path))
            .with_context(|| format!("fixture '{}'", name))?;

        let violations = userstyles_domain::validate_document(&value);
        let schema_valid = compiled.is_valid(&value);

        if schema_valid != violations.is_empty() {
            errors.push(format!(
                "fixture '{}': JSON Schema says {} but the validator found {} violation(s)",
                name,
                if schema_valid { "valid" } else { "invalid" },
                violations.len()
            ));
        }

        let expects_violations = expected["reasons"]
            .as_array()
            .is_some_and(|r| r.iter().any(|v| v == "schema_violations"));
        if expects_violations == violations.is_empty() {
            errors.push(format!(
                "fixture '{}': expected.json disagrees with the validator ({} violation(s))",
                name,
                violations.len()
            ));
        }

        fixture_count += 1;
        println!("  ✓ {} ({} violation(s))", name, violations.len());
    }

    if fixture_count == 0 {
        bail!("No fixtures with expected.json found in {}", dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!(
        "\n✓ All {} fixtures pass conformance checks!",
        fixture_count
    );
    Ok(())
}

/// Validate that all check IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = userstyles_types::explain::all_check_ids();
    let codes = userstyles_types::explain::all_codes();

    let mut errors = Vec::new();

    for (kind, identifier) in check_ids
        .iter()
        .map(|id| ("Check ID", *id))
        .chain(codes.iter().map(|code| ("Code", *code)))
    {
        match userstyles_types::lookup_explanation(identifier) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("{kind} '{identifier}' has empty title"));
                }
                if exp.description.is_empty() {
                    errors.push(format!("{kind} '{identifier}' has empty description"));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("{kind} '{identifier}' has empty remediation"));
                }
            }
            None => errors.push(format!("{kind} '{identifier}' has no explanation")),
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
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
            println!("{}", userstyles_types::SCHEMA_REPORT_V1);
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
