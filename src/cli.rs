//! Minimal CLI: schema file(s) → one output file per target
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser};
use colored::Colorize;
use tracing::{debug, info};

use crate::engine::{Polystruct, Target};
use crate::schema::SchemaDocument;
use crate::strategizer::Conversion;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// convert a JSON-schema-ish object description into TypeScript, Zod and Go declarations
#[derive(Parser, Debug)]
#[command(name = "polystruct", version)]
pub struct CommandLineInterface {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    output_settings: OutputSettings,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select the schema inside each document (e.g. /components/schemas/User)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; must yield exactly one value.
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct OutputSettings {
    /// targets to emit (repeat or comma-separate)
    #[arg(
        long,
        short,
        value_enum,
        value_delimiter = ',',
        default_values_t = [Target::TypeScript, Target::TypeScriptZod, Target::Go]
    )]
    target: Vec<Target>,

    /// output directory; with several inputs each gets a subdirectory named after its file stem
    #[arg(short, long, default_value = "output")]
    out_dir: PathBuf,

    /// print to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// name of the top-level struct
    #[arg(long, default_value = "Root")]
    root_type: String,

    /// fail a target when its conversion reports any diagnostic
    #[arg(long)]
    deny_warnings: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_schema(&self, source_path: &Path) -> Result<SchemaDocument> {
        let source_path_str = source_path.to_string_lossy().to_string();
        let source = std::fs::read_to_string(source_path)
            .with_context(|| format!("failed to read source file ({source_path_str})"))?;

        // plain documents keep the typed path-aware parse
        if self.jq_expr.is_none() && self.json_pointer.is_none() {
            return SchemaDocument::from_json_str(&source)
                .with_context(|| format!("invalid schema ({source_path_str})"));
        }

        let mut json_value = serde_json::from_str::<serde_json::Value>(&source)
            .with_context(|| format!("failed to parse JSON source file ({source_path_str})"))?;
        if let Some(jq_expr) = self.jq_expr.as_ref() {
            json_value = crate::jq_exec::select_document(jq_expr, &json_value).with_context(|| {
                format!("failed to apply jq expression to source file ({source_path_str})")
            })?;
        }
        let document = match self.json_pointer.as_ref() {
            Some(pointer) => SchemaDocument::from_value_at(json_value, pointer),
            None => SchemaDocument::from_value(json_value),
        };
        document.with_context(|| format!("invalid schema ({source_path_str})"))
    }
}

impl OutputSettings {
    fn output_dir_for(&self, source_path: &Path, multiple_inputs: bool) -> PathBuf {
        if !multiple_inputs {
            return self.out_dir.clone();
        }
        let stem = source_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "schema".to_string());
        self.out_dir.join(stem)
    }

    /// Write (or print) one successful conversion.
    fn deliver(&self, target: Target, conversion: &Conversion, out_dir: &Path) -> Result<()> {
        if conversion.is_empty() {
            eprintln!("{} {target}: no output, nothing written", "skipped:".yellow().bold());
            return Ok(());
        }
        if self.stdout {
            print!("{}", stdout_block(target, &conversion.text, self.target.len() > 1));
            return Ok(());
        }

        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;
        let out_path = out_dir.join(target.file_name());
        std::fs::write(&out_path, &conversion.text)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!(%target, path = %out_path.display(), structs = conversion.structs.len(), "wrote output");
        eprintln!("{} {}", "wrote".green().bold(), out_path.display());
        Ok(())
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        // debug path
        if self.no_op {
            eprintln!("{self:#?}");
            return Ok(());
        }

        let source_paths = resolve_file_path_patterns(&self.input_settings.input)
            .context("failed to resolve input file paths")?;
        let multiple_inputs = source_paths.len() > 1;
        debug!(inputs = source_paths.len(), targets = ?self.output_settings.target, "starting");

        let mut failures = 0usize;
        for source_path in &source_paths {
            let schema = match self.input_settings.load_schema(source_path) {
                Ok(schema) => schema,
                Err(error) => {
                    eprintln!("{} {error:#}", "failed:".red().bold());
                    failures += 1;
                    continue;
                }
            };
            let engine = Polystruct::new(schema).with_root_name(&self.output_settings.root_type);
            let out_dir = self.output_settings.output_dir_for(source_path, multiple_inputs);

            for (target, result) in engine.convert_all(&self.output_settings.target) {
                if let Ok(conversion) = &result {
                    for diagnostic in &conversion.diagnostics {
                        eprintln!("{} {target}: {diagnostic}", "warning:".yellow().bold());
                    }
                }
                let result = match self.output_settings.deny_warnings {
                    true => result.and_then(Conversion::deny_diagnostics),
                    false => result,
                };
                match result {
                    Ok(conversion) => self.output_settings.deliver(target, &conversion, &out_dir)?,
                    Err(error) => {
                        eprintln!(
                            "{} {target} ({}): {error}",
                            "failed:".red().bold(),
                            source_path.display()
                        );
                        failures += 1;
                    }
                }
            }
        }

        if failures > 0 {
            bail!("{failures} conversion(s) failed");
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Stdout rendering of one output; labelled with a `// <target>` header when
/// several targets share the stream.
fn stdout_block(target: Target, text: &str, labelled: bool) -> String {
    if labelled {
        format!("// {target}\n{text}")
    } else {
        text.to_string()
    }
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
