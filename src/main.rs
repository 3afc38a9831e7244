/// Replays a recorded viewer session and prints the final frame as JSON.
///
/// Usage: lightbox-replay <script.json> [--config <config.json>]
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use lightbox::{ReplayScript, ViewerConfig};

    fn run() -> Result<(), Box<dyn std::error::Error>> {
        let mut args = std::env::args().skip(1);
        let mut script_path: Option<PathBuf> = None;
        let mut config_path: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().ok_or("--config needs a path")?;
                    config_path = Some(PathBuf::from(path));
                }
                "-h" | "--help" => {
                    println!("Usage: lightbox-replay <script.json> [--config <config.json>]");
                    return Ok(());
                }
                _ if script_path.is_none() => script_path = Some(PathBuf::from(arg)),
                _ => return Err(format!("Unexpected argument: {}", arg).into()),
            }
        }
        let script_path = script_path.ok_or("Missing replay script path")?;

        // Explicit config errors are fatal; a broken default config just falls back.
        let config = match &config_path {
            Some(path) => ViewerConfig::load_from_path(path)?,
            None => ViewerConfig::load_from_default_path().unwrap_or_default(),
        };

        env_logger::Builder::new()
            .filter_level(config.preferences.log_level.to_level_filter())
            .parse_default_env()
            .init();

        let script = ReplayScript::load(&script_path)?;
        log::info!(
            "Replaying {} step(s) over {} image(s)",
            script.steps.len(),
            script.images.len()
        );
        let report = script.run(&config);
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    if let Err(e) = run() {
        eprintln!("Replay error: {}", e);
        std::process::exit(1);
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
