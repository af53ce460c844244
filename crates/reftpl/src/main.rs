use clap::{Parser, Subcommand};
use reftpl_core::{DataDictionary, DateFormat, ResolveConfig, TemplateNode};
use reftpl_engine::{
    evaluate_expression,
    io::{load_data, load_template},
    parse_body, scan_balanced, Resolver,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a template against a data dictionary
    Render {
        /// Path to the template (text, or YAML/JSON tree)
        #[arg(index = 1)]
        template: PathBuf,

        /// Path to the data dictionary (YAML/JSON)
        #[arg(index = 2)]
        data: PathBuf,

        /// Leave unresolvable placeholders verbatim instead of blank
        #[arg(long)]
        strict: bool,

        /// Date format for {TODAY}/{NOW} (e.g. "Month D, YYYY")
        #[arg(long)]
        date_format: Option<String>,

        /// Maximum mapping depth to resolve into
        #[arg(long)]
        max_depth: Option<usize>,

        /// Output tree templates as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// Evaluate an operation-logic expression
    Eval {
        /// The expression, e.g. "5 > 3 ? 'big' : 'small'"
        expression: String,

        /// Value returned when the expression is malformed
        #[arg(long, default_value = "")]
        fallback: String,
    },
    /// List and check the placeholders in a template
    Validate {
        /// Path to the template file
        path: PathBuf,

        /// Optional data dictionary to check field resolvability against
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Generate the JSON schema for template trees
    Schema {
        /// Emit the resolve-configuration schema instead
        #[arg(long)]
        config: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            template,
            data,
            strict,
            date_format,
            max_depth,
            json,
        } => {
            let date_format = match date_format {
                Some(ref name) => match name.parse::<DateFormat>() {
                    Ok(f) => f,
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    }
                },
                None => DateFormat::default(),
            };

            let template = match load_template(&template) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Error loading template: {}", e);
                    std::process::exit(1);
                }
            };
            let data = match load_data(&data) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Error loading data: {}", e);
                    std::process::exit(1);
                }
            };

            let config = ResolveConfig {
                date_format,
                strict,
                max_depth,
            };
            let resolved = Resolver::new(&data).with_config(config).resolve(&template);

            match resolved {
                TemplateNode::Text(s) => println!("{}", s),
                tree if json => {
                    println!("{}", serde_json::to_string_pretty(&tree).unwrap())
                }
                tree => print!("{}", serde_yaml::to_string(&tree).unwrap()),
            }
        }
        Commands::Eval {
            expression,
            fallback,
        } => {
            println!("{}", evaluate_expression(&expression, &fallback));
        }
        Commands::Validate { path, data } => {
            let template = match load_template(&path) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Error loading template: {}", e);
                    std::process::exit(1);
                }
            };
            let data = match data {
                Some(ref p) => match load_data(p) {
                    Ok(d) => Some(d),
                    Err(e) => {
                        eprintln!("Error loading data: {}", e);
                        std::process::exit(1);
                    }
                },
                None => None,
            };

            let mut findings = 0;
            validate_node(&template, &data, &mut findings);
            if findings > 0 {
                eprintln!("{} problem(s) found.", findings);
                std::process::exit(1);
            }
            println!("Template is valid.");
        }
        Commands::Schema { config } => {
            let schema = if config {
                schemars::schema_for!(ResolveConfig)
            } else {
                schemars::schema_for!(TemplateNode)
            };
            println!("{}", serde_json::to_string_pretty(&schema).unwrap());
        }
    }
}

/// Walk the template tree, reporting each text leaf's placeholders.
fn validate_node(node: &TemplateNode, data: &Option<DataDictionary>, findings: &mut usize) {
    match node {
        TemplateNode::Text(text) => validate_text(text, data, findings),
        TemplateNode::Map(map) => {
            for value in map.values() {
                validate_node(value, data, findings);
            }
        }
        _ => {}
    }
}

/// Check every placeholder region in one text leaf. Nested bodies are
/// validated inner-first; the outer shape is then checked with the inner
/// spans collapsed, since the field id they build is only known at
/// render time.
fn validate_text(text: &str, data: &Option<DataDictionary>, findings: &mut usize) {
    for region in scan_balanced(text) {
        let nested = region.body.contains('{');
        let body = if nested {
            validate_text(&region.body, data, findings);
            let mut collapsed = region.body.clone();
            for inner in scan_balanced(&region.body).iter().rev() {
                collapsed.replace_range(inner.span.clone(), "x");
            }
            collapsed
        } else {
            region.body.clone()
        };
        match parse_body(&body, region.span.clone()) {
            Some(placeholder) => {
                if nested {
                    println!("  ok: {{{}}}", region.body);
                    continue;
                }
                let resolvable = match data {
                    Some(d) => {
                        d.contains_key(&placeholder.field)
                            || matches!(placeholder.field.as_str(), "TODAY" | "NOW" | "TIME")
                    }
                    None => true,
                };
                if resolvable {
                    println!("  ok: {{{}}}", placeholder.field);
                } else {
                    eprintln!("  unresolvable field: {{{}}}", placeholder.field);
                    *findings += 1;
                }
            }
            None => {
                eprintln!("  malformed placeholder: {{{}}}", region.body);
                *findings += 1;
            }
        }
    }
}
