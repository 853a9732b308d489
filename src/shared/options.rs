//! Zentrale Konfiguration für den Spline-Editor.
//!
//! `EditorOptions` enthält die beim Start geladenen Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::spline_geometry::InterpolationParams;
use super::DisplayMode;
use serde::{Deserialize, Serialize};

// ── Interpolation ───────────────────────────────────────────────────

/// Standard-Tension (multiplikative Tangenten-Skalierung, 1.0 = neutral).
pub const DEFAULT_TENSION: f64 = 1.0;
/// Standard-Grain (Unterteilungen pro Kurvensegment).
pub const DEFAULT_GRAIN: u32 = 20;

/// Dateiname der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "cardinal_spline_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Start-Optionen des Editors.
/// Wird als `cardinal_spline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Tension beim Start
    #[serde(default = "default_tension")]
    pub default_tension: f64,
    /// Grain beim Start (muss ≥ 1 sein)
    #[serde(default = "default_grain")]
    pub default_grain: u32,
    /// Welche Polylinien gezeichnet werden
    #[serde(default)]
    pub display_mode: DisplayMode,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_tension: DEFAULT_TENSION,
            default_grain: DEFAULT_GRAIN,
            display_mode: DisplayMode::default(),
        }
    }
}

/// Serde-Default für `default_tension`.
fn default_tension() -> f64 {
    DEFAULT_TENSION
}

/// Serde-Default für `default_grain`.
fn default_grain() -> u32 {
    DEFAULT_GRAIN
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("cardinal_spline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Baut die Start-Parameter der Interpolation.
    ///
    /// Ungültige Werte aus der Datei werden einzeln durch Standardwerte ersetzt.
    pub fn interpolation_params(&self) -> InterpolationParams {
        let mut params = InterpolationParams::default();
        if let Err(e) = params.set_tension(self.default_tension) {
            log::warn!("Options-Tension verworfen: {}", e);
        }
        if let Err(e) = params.set_grain(i64::from(self.default_grain)) {
            log::warn!("Options-Grain verworfen: {}", e);
        }
        params
    }
}
