//! Cardinal Spline Editor (Headless).
//!
//! Liest UI-Events zeilenweise von stdin, verarbeitet sie über den
//! `CurveController` und gibt nach jedem Event die Render-Szene als
//! JSON-Zeile auf stdout aus.

use cardinal_spline_editor::{ui, CurveController, CurveIntent, EditorOptions, EditorState};
use std::io::{BufRead, Write};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Cardinal Spline Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);

        let mut app = EditorApp::new(options);
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout().lock();
        app.run_session(stdin.lock(), &mut stdout)?;

        log::info!(
            "Eingabe beendet: {} Kontrollpunkte, Kurvenlänge {:.2}",
            app.state.control_points().len(),
            app.state.curve_length()
        );
        Ok(())
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: EditorState,
    controller: CurveController,
}

impl EditorApp {
    fn new(options: EditorOptions) -> Self {
        Self {
            state: EditorState::with_options(&options),
            controller: CurveController::new(),
        }
    }

    /// Verarbeitet alle Eingabezeilen bis EOF.
    ///
    /// Unlesbare Zeilen (kein UTF-8, Syntaxfehler) werden geloggt und
    /// übersprungen. Nur echte I/O-Fehler beenden die Sitzung.
    fn run_session(
        &mut self,
        mut input: impl BufRead,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Zeile {} ignoriert: kein gültiges UTF-8 ({})", line_no, e);
                    continue;
                }
            };
            let intent = match ui::parse_line(line) {
                Ok(Some(intent)) => intent,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("Zeile {} ignoriert: {:#}", line_no, e);
                    continue;
                }
            };

            self.process_event(intent);
            self.write_scene(out)?;
        }

        Ok(())
    }

    fn process_event(&mut self, intent: CurveIntent) {
        if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
            log::error!("Event handling failed: {:#}", e);
        }
        log::debug!("{}", self.state.status_text());
    }

    fn write_scene(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let scene = self.controller.build_render_scene(&self.state);
        serde_json::to_writer(&mut *out, &scene)?;
        writeln!(out)?;
        Ok(())
    }
}
