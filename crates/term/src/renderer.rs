//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw; later frames
//! only emit the runs of cells that changed since the previous one.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{queue, QueueableCommand};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Owns the terminal while the game runs and remembers the last frame it drew.
pub struct TerminalRenderer {
    out: Stdout,
    previous: Option<FrameBuffer>,
    scratch: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            previous: None,
            scratch: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode on the alternate screen, cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.scratch.clear();
        queue!(self.scratch, EnterAlternateScreen, Hide, DisableLineWrap)?;
        self.write_scratch()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        queue!(
            self.scratch,
            ResetColor,
            SetAttribute(Attribute::Reset),
            EnableLineWrap,
            Show,
            LeaveAlternateScreen
        )?;
        self.write_scratch()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Draw a frame, diffing against the previously drawn one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.scratch.clear();
        encode_into(self.previous.as_ref(), fb, &mut self.scratch)?;
        self.write_scratch()?;
        match &mut self.previous {
            Some(last) if last.width() == fb.width() && last.height() == fb.height() => {
                last.clone_from(fb);
            }
            slot => *slot = Some(fb.clone()),
        }
        Ok(())
    }

    fn write_scratch(&mut self) -> Result<()> {
        let mut out = self.out.lock();
        out.write_all(&self.scratch)?;
        out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// Without a compatible previous frame this is a clear plus full redraw.
pub fn encode_into(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(Clear(ClearType::All))?;
    }

    let mut current: Option<CellStyle> = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(MoveTo(x, y))?;
        for cell in (x..x + len).filter_map(|cx| next.get(cx, y)) {
            if current != Some(cell.style) {
                queue_style(out, cell.style)?;
                current = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    let weight = if style.bold { Attribute::Bold } else { Attribute::NormalIntensity };
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(rgb_color(style.fg)),
        SetBackgroundColor(rgb_color(style.bg)),
        SetAttribute(weight)
    )?;
    Ok(())
}

fn rgb_color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Horizontal runs `(x, y, len)` of cells that differ; every row when `prev` is absent.
fn changed_runs(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let Some(prev) = prev else {
        return (0..next.height()).map(|y| (0, y, next.width())).collect();
    };

    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start: Option<u16> = None;
        for x in 0..next.width() {
            let dirty = prev.get(x, y) != next.get(x, y);
            match (dirty, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, y, next.width() - s));
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_changes_coalesce_into_one_run() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = a.clone();
        for x in 1..=3 {
            b.set(x, 0, 'X', style);
        }
        b.set(5, 1, 'Y', style);

        assert_eq!(changed_runs(Some(&a), &b), vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn missing_previous_frame_redraws_every_row() {
        let b = FrameBuffer::new(4, 3);
        assert_eq!(changed_runs(None, &b), vec![(0, 0, 4), (0, 1, 4), (0, 2, 4)]);
    }

    #[test]
    fn identical_frames_only_reset_attributes() {
        let a = FrameBuffer::new(4, 2);
        let mut identical = Vec::new();
        encode_into(Some(&a), &a, &mut identical).unwrap();

        let mut full = Vec::new();
        encode_into(None, &a, &mut full).unwrap();
        assert!(identical.len() < full.len());
    }
}
