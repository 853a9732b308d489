//! Zeilenbasierte Eingabe für den Headless-Betrieb.
//!
//! Jede Zeile beschreibt genau ein UI-Event, z.B. `press 10 20` oder
//! `grain 12`. Leere Zeilen und `#`-Kommentare ergeben kein Event.

use crate::app::CurveIntent;
use crate::shared::{DisplayMode, Point2D};
use anyhow::{bail, Context, Result};

/// Übersetzt eine Eingabezeile in einen `CurveIntent`.
pub fn parse_line(line: &str) -> Result<Option<CurveIntent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let intent = match keyword.to_ascii_lowercase().as_str() {
        "press" => CurveIntent::PrimaryPressed {
            pos: point_arg(&args)?,
        },
        "move" => CurveIntent::SecondaryPressed {
            pos: point_arg(&args)?,
        },
        "insert" => CurveIntent::TertiaryPressed {
            pos: point_arg(&args)?,
        },
        "drag" => CurveIntent::PointerDragged {
            pos: point_arg(&args)?,
        },
        "release" => no_args(&args, CurveIntent::PointerReleased)?,
        "escape" => no_args(&args, CurveIntent::EscapePressed)?,
        "delete" => no_args(&args, CurveIntent::DeletePressed)?,
        "clear" => no_args(&args, CurveIntent::ClearRequested)?,
        "tension" => {
            let [value] = numbers::<1>(&args)?;
            CurveIntent::TensionChanged { tension: value }
        }
        "grain" => {
            let [value] = args.as_slice() else {
                bail!("`grain` erwartet genau einen Wert");
            };
            let grain = value
                .parse::<i64>()
                .with_context(|| format!("Grain `{}` ist keine Ganzzahl", value))?;
            CurveIntent::GrainChanged { grain }
        }
        "resize" => {
            let [ow, oh, nw, nh] = numbers::<4>(&args)?;
            CurveIntent::ViewportResized {
                old_size: [ow, oh],
                new_size: [nw, nh],
            }
        }
        "display" => {
            let [value] = args.as_slice() else {
                bail!("`display` erwartet both|input|smooth");
            };
            CurveIntent::DisplayModeChanged {
                mode: value.parse::<DisplayMode>()?,
            }
        }
        other => bail!("Unbekanntes Event `{}`", other),
    };

    Ok(Some(intent))
}

fn point_arg(args: &[&str]) -> Result<Point2D> {
    let [x, y] = numbers::<2>(args)?;
    Ok(Point2D::new(x, y))
}

fn numbers<const N: usize>(args: &[&str]) -> Result<[f64; N]> {
    if args.len() != N {
        bail!("{} Zahlen erwartet, {} erhalten", N, args.len());
    }
    let mut values = [0.0; N];
    for (slot, arg) in values.iter_mut().zip(args) {
        *slot = arg
            .parse::<f64>()
            .with_context(|| format!("`{}` ist keine Zahl", arg))?;
    }
    Ok(values)
}

fn no_args(args: &[&str], intent: CurveIntent) -> Result<CurveIntent> {
    if !args.is_empty() {
        bail!("{:?} erwartet keine Argumente", intent);
    }
    Ok(intent)
}
