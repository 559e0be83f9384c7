//! Crossword application using egui/eframe.
//!
//! Native builds accept `--puzzle <PATH>` to play a puzzle other than the
//! bundled one.

use crossword_app::{CrosswordApp, Puzzle, PuzzleConfig};

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle configuration file (JSON) to play instead of the bundled puzzle.
    #[arg(long, value_name = "PATH")]
    puzzle: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
fn load_puzzle(args: &Args) -> Result<Puzzle, crossword_app::ConfigError> {
    let config = match &args.puzzle {
        Some(path) => PuzzleConfig::load(path)?,
        None => PuzzleConfig::bundled()?,
    };
    config.into_puzzle()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser as _;

    const APP_ID: &str = "io.github.crossword";

    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::info!(
        "Starting crossword, version={}",
        crossword_app::version::build_version()
    );

    let puzzle = load_puzzle(&args).unwrap_or_else(|err| {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    });
    log::info!(
        "Loaded puzzle {:?} with {} entries",
        puzzle.title,
        puzzle.layout.entries().len()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((900.0, 640.0))
            .with_min_inner_size((480.0, 360.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Crossword",
        options,
        Box::new(|cc| Ok(Box::new(CrosswordApp::new(cc, puzzle)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn install_panic_alert_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        previous(panic_info);

        let message = panic_info.to_string();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "The crossword has crashed.\n\n{message}\n\nSee the developer console for details."
            ));
        }
    }));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    install_panic_alert_hook();

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    log::info!(
        "Starting crossword WASM application, version={}",
        crossword_app::version::build_version()
    );

    let puzzle: Puzzle = PuzzleConfig::bundled()
        .and_then(PuzzleConfig::into_puzzle)
        .expect("bundled puzzle is invalid");

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Failed to find the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(CrosswordApp::new(cc, puzzle)))),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(()) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}
