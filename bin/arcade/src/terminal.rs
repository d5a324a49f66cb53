use colored::Colorize;
use rps_gameroom::*;
use std::io::Write;

/// Draws renders to a text stream.
///
/// In text mode only changes are printed, otherwise a 30 fps replay would
/// repeat the same line thirty times a second. JSON mode prints every tick
/// so a downstream renderer sees the full stream.
pub struct Terminal<W> {
    out: W,
    json: bool,
    last: Option<Render>,
}

impl<W> Terminal<W>
where
    W: Write,
{
    pub fn new(out: W, json: bool) -> Self {
        Self {
            out,
            json,
            last: None,
        }
    }

    pub fn show(&mut self, render: &Render) -> anyhow::Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, render)?;
            writeln!(self.out)?;
            return Ok(());
        }
        if self.last.as_ref() == Some(render) {
            return Ok(());
        }
        let outcome = match render.color {
            Color::Win => render.outcome.green(),
            Color::Lose => render.outcome.red(),
            Color::Draw => render.outcome.yellow(),
            Color::Neutral => render.outcome.normal(),
        };
        let overlay = match render.overlay {
            true => "[hands]".dimmed(),
            false => "".normal(),
        };
        writeln!(
            self.out,
            "{:<24} {} {}",
            render.label.yellow().bold(),
            outcome,
            overlay
        )?;
        self.last = Some(render.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(label: &str) -> Render {
        Render {
            label: label.to_string(),
            ..Render::default()
        }
    }

    #[test]
    fn text_mode_prints_changes_only() {
        colored::control::set_override(false);
        let mut screen = Terminal::new(Vec::new(), false);
        screen.show(&render("PLAY NOW!")).unwrap();
        screen.show(&render("PLAY NOW!")).unwrap();
        screen.show(&render("PRESS SPACE TO START!")).unwrap();
        let text = String::from_utf8(screen.out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("PLAY NOW!"));
    }

    #[test]
    fn json_mode_prints_every_tick() {
        let mut screen = Terminal::new(Vec::new(), true);
        screen.show(&render("PLAY NOW!")).unwrap();
        screen.show(&render("PLAY NOW!")).unwrap();
        let text = String::from_utf8(screen.out).unwrap();
        assert_eq!(text.lines().count(), 2);
        let first = serde_json::from_str::<serde_json::Value>(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["label"], "PLAY NOW!");
        assert_eq!(first["color"], "Neutral");
        assert_eq!(first["overlay"], false);
    }
}
