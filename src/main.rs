//! Command-line entry point: resolve, pack, and write `qrc.rs`.

use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;

use qrc_bundler::error::BundlerError;
use qrc_bundler::{bundle, codegen, resolver};

const LONG_ABOUT: &str = "\
Packs all resource files under the provided paths into a single qrc.rs \
file that may be built into the embedding application. Bundled files are \
then addressable by their logical label at runtime.

Paths can be:
  * a .manifest file in the Qt RCC resource-collection format; its entries
    are imported under the declared group prefix. This is the preferred
    method.
  * a filename. The file is imported directly.
  * a directory. All files beneath it are imported, except qmldir files
    and *.qmltypes metadata; *.manifest files found during the walk are
    expanded like direct references.

During development, setting QRC_REPACK=1 makes the generated loader repack \
the filesystem content at runtime, so resource edits do not require \
regenerating qrc.rs. The embedded copy is not updated by repack mode; run \
qrc-bundler again before shipping.";

#[derive(Debug, Parser)]
#[command(name = "qrc-bundler", about = "Pack resource files into an embeddable bundle.", long_about = LONG_ABOUT)]
struct Cli {
    /// Files, directories, or .manifest collections to pack.
    paths: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli.paths) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(paths: &[String]) -> Result<()> {
    if paths.is_empty() {
        return Err(BundlerError::InvalidArguments {
            message: "must provide at least one path".into(),
        }
        .into());
    }

    let bindings = resolver::resolve(paths)?;
    let packed = bundle::pack(&bindings)?;
    let code = codegen::render_artifact(&packed, paths);
    codegen::write_artifact(Path::new("."), &code)?;
    Ok(())
}
