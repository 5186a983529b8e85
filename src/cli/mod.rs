use clap::{CommandFactory, Parser};
use log::{info, warn};

use crate::cli::args::Args;
use crate::cli::progress::StepContext;
use crate::config::{parse_config, ParamsGenConfig};
use crate::error::PreconditionError;
use crate::plan::{
    execute_plan, generate_plan, ExecutePlanParams, GenerateConfig, GenerateConfigBuilder,
    TaskKey,
};
use crate::Result;

pub mod args;
pub mod progress;

pub const BANNER: &str = r"
                                                         __
    ____  ____ __________ _____ ___  _____   ____  / /______ _   ____ ____  ____
   / __ \/ __ `/ ___/ __ `/ __ `__ \/ ___/  / __ \/ //_/ __ `/  / __ `/ _ \/ __ \
  / /_/ / /_/ / /  / /_/ / / / / / (__  )  / /_/ / ,< / /_/ /  / /_/ /  __/ / / /
 / .___/\__,_/_/   \__,_/_/ /_/ /_/____/  / .___/_/|_|\__, /   \__, /\___/_/ /_/
/_/                                      /_/         /____/   /____/
";

/// Merges command-line flags over the optional configuration file.
pub fn resolve_config(args: &Args, file_config: ParamsGenConfig) -> Result<GenerateConfig> {
    let mut builder = GenerateConfigBuilder::default();
    if let Some(template) = args.template.clone().or(file_config.template) {
        builder.template(template);
    }
    if let Some(output_dir) = args.output_dir.clone().or(file_config.output_dir) {
        builder.output_dir(output_dir);
    }
    Ok(builder.build()?)
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => parse_config(path)?,
        None => ParamsGenConfig::default(),
    };
    let config = resolve_config(&args, file_config)?;

    if !args.quiet {
        println!("{BANNER}");
        println!("Template: {:?}", &config.template);
        println!("Output directory: {:?}", &config.output_dir);
        println!(
            "Combinations: {} (address x data x length x id)\n",
            config.domains.len()
        );
    }

    let mut ctx = StepContext::new(args.quiet);

    let plan = match ctx.check(generate_plan(&config)) {
        Ok(plan) => plan,
        Err(e) => {
            if let Some(e) = e.downcast_ref::<PreconditionError>() {
                eprintln!("{e}");
                Args::command().print_help()?;
                std::process::exit(1);
            }
            return Err(e);
        }
    };
    ctx.finish(TaskKey::GeneratePlan);

    if plan.created_work_dir {
        info!("created output directory {:?}", &plan.work_dir);
    }
    for placeholder in plan.template.missing_placeholders() {
        warn!("template does not contain {}", placeholder.token());
    }

    let res = execute_plan(ExecutePlanParams {
        plan: &plan,
        ctx: Some(&mut ctx),
    });
    let written = ctx.check(res)?;

    if !args.quiet {
        println!(
            "{} parameter packages saved to: {:?}\n",
            written.len(),
            &plan.work_dir
        );
    }

    Ok(())
}
