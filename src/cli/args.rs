use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about,
    help_template(
        "{before-help}{name} {version}\n{author-with-newline}{about-with-newline}\n{usage-heading} {usage}\n\n{all-args}{after-help}"
    )
)]
pub struct Args {
    /// Template for params_pkg.sv.
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Directory for output files. Created if it does not exist [default: .].
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Path to a TOML file providing defaults for `template` and `output_dir`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress the banner and progress display.
    #[arg(short, long)]
    pub quiet: bool,
}
