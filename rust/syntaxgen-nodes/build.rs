use std::path::{Path, PathBuf};
use std::{env, fs};

use syntaxgen::{generate, Action, GenerationRequest};
use syntaxgen_schema::{parse_schema_file, Category};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema_path = Path::new("schema/nodes.json");
    println!("cargo:rerun-if-changed={}", schema_path.display());

    let schema = parse_schema_file(schema_path)?;
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    for category in Category::TREE {
        for action in Action::ALL {
            let source = generate(&schema, &GenerationRequest::new(category, action))?;
            let file = format!("{}_{}.rs", category.file_stem(), action.name());
            fs::write(out_dir.join(file), source)?;
        }
    }
    Ok(())
}
