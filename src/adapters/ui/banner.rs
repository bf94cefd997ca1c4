//! Neon ASCII banner with gradient (YT-SENTIMENT).
//! Uses figlet's bundled standard font.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// YouTube red (#ff0033).
const TUBE_RED: (u8, u8, u8) = (0xff, 0x00, 0x33);
/// Warm amber (#ffb000).
const AMBER: (u8, u8, u8) = (0xff, 0xb0, 0x00);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner: "YT-SENTIMENT" in figlet ASCII with a red-to-amber
/// gradient, then the version. Falls back to plain text if the font fails to load.
pub fn print_welcome() {
    let mut out = stdout();
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("YT-SENTIMENT").map(|f| f.to_string()))
        .unwrap_or_else(|| "YT-SENTIMENT".to_string());
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(TUBE_RED, AMBER, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: AMBER.0,
        g: AMBER.1,
        b: AMBER.2,
    }));
    let _ = out.execute(Print(format!("v{} · comment sentiment for YouTube channels\r\n", version)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
