use anyhow::Context as _;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use gpui::{App, Application};
use keycalc::calculator::{format_result, run_calculation};
use keycalc::cli::{Cli, Mode};
use keycalc::{interactive, logging, ui};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mode = match cli.mode() {
        Ok(mode) => mode,
        Err(e) => Cli::command().error(ErrorKind::MissingRequiredArgument, e).exit(),
    };
    tracing::info!(?mode, "starting");

    match mode {
        Mode::OneShot { operation, a, b } => match run_calculation(&operation, a, b) {
            Ok(result) => println!("{}", format_result(result)),
            Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
        },
        Mode::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            if interactive::run(stdin.lock(), stdout.lock()).is_err() {
                std::process::exit(1);
            }
        }
        Mode::Gui => {
            if let Err(e) = run_gui() {
                eprintln!("{e:#}");
                std::process::exit(1);
            }
        }
    }
}

fn run_gui() -> anyhow::Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            gpui_component::init(cx);

            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();

            if let Err(e) = ui::open_window(cx) {
                let _ = tx.send(e);
                cx.quit();
                return;
            }
            cx.activate(true);
        });

    match rx.try_recv() {
        Ok(e) => Err(e).context("failed to open calculator window"),
        Err(_) => Ok(()),
    }
}
