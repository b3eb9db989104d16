use clap::Parser;
use kicad2blender::cli::{self, Args};
use kicad2blender::pipeline::{self, PipelineOptions};
use kicad2blender::{PipelineError, Toolchain};
use std::process;

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(cli::log_level(args.verbose))
        .parse_default_env()
        .init();

    let opts = PipelineOptions {
        input: args.input,
        output_dir: args.output,
        template: args.template,
        quality: args.quality,
    };
    let tools = Toolchain::from_env();

    match pipeline::run(&opts, &tools) {
        Ok(scene) => {
            println!("Wrote scene '{}'", scene.display());
        }
        Err(e) => {
            log::error!("{e}");
            // Surface the failing tool's own exit code when there is one
            let code = match &e {
                PipelineError::ToolFailed { code: Some(c), .. } if *c != 0 => *c,
                _ => 1,
            };
            process::exit(code);
        }
    }
}
