use crate::command::ControllerArgs;
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use trellis::config::ConfigService;
use trellis::scaffold::{ControllerOptions, ControllerScaffold, ProjectRoot, current_year};

/// Generate a controller, printing it to `out` or writing it under `cwd`
pub fn run(
    args: ControllerArgs,
    config: &ConfigService,
    cwd: &Path,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut builder = ControllerOptions::builder(args.name);
    if let Some(route) = args.route {
        builder = builder.route(route);
    }
    if let Some(description) = args.description {
        builder = builder.description(description);
    }
    if let Some(author) = args.author {
        builder = builder.author(author);
    }
    if let Some(email) = args.email {
        builder = builder.email(email);
    }
    if let Some(platforms) = args.platforms {
        builder = builder.platforms(platforms);
    }
    let options = builder.build(config)?;
    let scaffold = ControllerScaffold::new(options);

    if args.dump {
        return scaffold
            .dump(out, current_year())
            .context("Failed to print the controller");
    }

    let root = ProjectRoot::open(cwd)?;
    let path = scaffold
        .write(&root, current_year())
        .with_context(|| format!("Failed to create controller {}", scaffold.options().name))?;
    writeln!(out, "Created {}", path.display())?;
    Ok(())
}
