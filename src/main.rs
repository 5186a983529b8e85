fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = params_pkg_gen::cli::run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
