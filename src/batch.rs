use crate::compact::write_compact_json;
use crate::config::Config;
use crate::ir::Tree;
use crate::layout::compute_layout;
use crate::render::{render_svg, write_output};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Files written for one source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutput {
    pub source: PathBuf,
    pub svg: PathBuf,
    pub json: PathBuf,
}

/// Renders every `*.json` file of each input directory into
/// `<output>/svg/<category>/` and writes its compact form into
/// `<output>/json/<category>/`.
pub fn run_batch(inputs: &[PathBuf], output: &Path, config: &Config) -> Result<Vec<BatchOutput>> {
    let mut written = Vec::new();
    for input in inputs {
        let dir_name = input
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("tree");
        let category = config.batch.category_for(dir_name);
        let svg_dir = output.join("svg").join(&category);
        let json_dir = output.join("json").join(&category);
        std::fs::create_dir_all(&svg_dir)
            .with_context(|| format!("creating {}", svg_dir.display()))?;
        std::fs::create_dir_all(&json_dir)
            .with_context(|| format!("creating {}", json_dir.display()))?;

        for source in tree_files(input)? {
            let Some(stem) = source.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            log::info!("Generating SVG for {}", source.display());
            let tree = read_tree(&source)?;
            let layout = compute_layout(&tree, &config.layout);
            let svg_path = svg_dir.join(format!("{stem}.svg"));
            write_output(&render_svg(&layout, config), Some(&svg_path))?;
            let json_path = json_dir.join(format!("{stem}.json"));
            write_compact_json(&tree, &json_path)?;
            written.push(BatchOutput {
                source,
                svg: svg_path,
                json: json_path,
            });
        }
    }
    Ok(written)
}

/// JSON files directly inside `dir`, sorted by name.
fn tree_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| ext == "json")
            .unwrap_or(false);
        if is_json && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn read_tree(path: &Path) -> Result<Tree> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Tree::from_reader(BufReader::new(file)).with_context(|| format!("decoding {}", path.display()))
}
