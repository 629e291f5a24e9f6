//! Input widgets and shared rendering helpers
//!
//! The input state here is plain data: [`Slider`] clamps and snaps values,
//! [`MobileNumberField`] keeps a 10-digit number, and [`DigitEntry`] is the
//! fixed-length OTP box row used by both the identity and the bank OTP
//! screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Width of the phone-shaped viewport
pub const PHONE_WIDTH: u16 = 48;
/// Height of the phone-shaped viewport
pub const PHONE_HEIGHT: u16 = 36;

/// Bounded, stepped numeric input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

impl Slider {
    pub fn new(min: u64, max: u64, step: u64) -> Self {
        Self {
            min,
            max: max.max(min),
            step: step.max(1),
        }
    }

    /// Clamp into range and snap down onto the step grid. The maximum is
    /// always reachable even when it is off-grid.
    pub fn clamp(&self, value: u64) -> u64 {
        if value >= self.max {
            return self.max;
        }
        if value <= self.min {
            return self.min;
        }
        self.min + (value - self.min) / self.step * self.step
    }

    pub fn increment(&self, value: u64) -> u64 {
        self.clamp(value.saturating_add(self.step))
    }

    pub fn decrement(&self, value: u64) -> u64 {
        if value >= self.max && (self.max - self.min) % self.step != 0 {
            // Step back onto the grid from an off-grid maximum
            return self.clamp(self.max - 1);
        }
        self.clamp(value.saturating_sub(self.step))
    }

    /// Position within the range, 0.0 to 1.0
    pub fn ratio(&self, value: u64) -> f64 {
        if self.max == self.min {
            return 1.0;
        }
        let clamped = value.clamp(self.min, self.max);
        (clamped - self.min) as f64 / (self.max - self.min) as f64
    }
}

/// Mobile number input: digits only, at most ten
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileNumberField {
    digits: String,
}

impl MobileNumberField {
    pub const LENGTH: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents, dropping non-digits and anything past ten digits
    pub fn set_text(&mut self, text: &str) {
        self.digits = text
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(Self::LENGTH)
            .collect();
    }

    /// Append one character. Returns false if it was rejected.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.digits.len() >= Self::LENGTH {
            return false;
        }
        self.digits.push(c);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.digits.pop()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Exactly ten digits present
    pub fn is_complete(&self) -> bool {
        self.digits.len() == Self::LENGTH
    }

    /// "98765 43210"
    pub fn display(&self) -> String {
        if self.digits.len() > 5 {
            format!("{} {}", &self.digits[..5], &self.digits[5..])
        } else {
            self.digits.clone()
        }
    }
}

/// Fixed-length row of single-digit slots with auto-advancing focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitEntry<const N: usize> {
    slots: [Option<u8>; N],
    focus: usize,
}

impl<const N: usize> DigitEntry<N> {
    pub fn new() -> Self {
        Self {
            slots: [None; N],
            focus: 0,
        }
    }

    /// Number of slots
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn set_focus(&mut self, index: usize) {
        if N > 0 {
            self.focus = index.min(N - 1);
        }
    }

    pub fn slot(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    /// Type `c` into slot `index`. A digit moves focus to the next slot
    /// unless `index` is the last one. Non-digits are rejected.
    pub fn enter_at(&mut self, index: usize, c: char) -> bool {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        if index >= N {
            return false;
        }
        self.slots[index] = Some(digit as u8);
        self.focus = if index + 1 < N { index + 1 } else { index };
        true
    }

    /// Type into the focused slot
    pub fn enter(&mut self, c: char) -> bool {
        self.enter_at(self.focus, c)
    }

    /// Clear the focused slot, or step back and clear the previous one
    pub fn erase(&mut self) {
        if N == 0 {
            return;
        }
        if self.slots[self.focus].is_some() {
            self.slots[self.focus] = None;
        } else if self.focus > 0 {
            self.focus -= 1;
            self.slots[self.focus] = None;
        }
    }

    pub fn clear(&mut self) {
        self.slots = [None; N];
        self.focus = 0;
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Every slot holds a digit
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The entered code, once complete
    pub fn code(&self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        Some(
            self.slots
                .iter()
                .flatten()
                .map(|d| char::from(b'0' + d))
                .collect(),
        )
    }
}

impl<const N: usize> Default for DigitEntry<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Phone-shaped viewport centred in the terminal
pub fn phone_frame(area: Rect) -> Rect {
    let width = PHONE_WIDTH.min(area.width);
    let height = PHONE_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rectangle of `height` rows, `percent_x` wide, centred in `r`
pub fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Screen title with an optional subtitle underneath
pub fn render_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str, accent: Color) {
    let text = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];
    let header = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(accent)),
        );
    f.render_widget(header, area);
}

/// Key hints like "Enter Continue  Esc Back"
pub fn render_help(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}  ", label)));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(help, area);
}

/// A push button; disabled buttons are dimmed, loading ones show a spinner label
pub fn button(label: &str, enabled: bool, loading: bool) -> Line<'static> {
    let (text, style) = if loading {
        (
            "[ Please wait... ]".to_string(),
            Style::default().fg(Color::Yellow),
        )
    } else if enabled {
        (
            format!("[ {} ]", label),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (format!("[ {} ]", label), Style::default().fg(Color::DarkGray))
    };
    Line::from(Span::styled(text, style))
}

/// Row of OTP boxes, focused slot highlighted
pub fn digit_boxes<const N: usize>(entry: &DigitEntry<N>, accent: Color) -> Line<'static> {
    let mut spans = Vec::with_capacity(N);
    for index in 0..N {
        let symbol = entry
            .slot(index)
            .map(|d| char::from(b'0' + d).to_string())
            .unwrap_or_else(|| "_".to_string());
        let style = if index == entry.focus() {
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(format!("[{}]", symbol), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Labelled slider gauge
pub fn render_slider(f: &mut Frame, area: Rect, title: &str, label: String, ratio: f64, focused: bool) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(border),
        )
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    f.render_widget(gauge, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_clamps_and_snaps() {
        let slider = Slider::new(10_000, 500_000, 5_000);
        assert_eq!(slider.clamp(0), 10_000);
        assert_eq!(slider.clamp(1_000_000), 500_000);
        assert_eq!(slider.clamp(12_345), 10_000);
        assert_eq!(slider.clamp(201_000), 200_000);
    }

    #[test]
    fn test_slider_steps_stay_in_bounds() {
        let slider = Slider::new(3, 36, 1);
        let mut value = 35;
        value = slider.increment(value);
        assert_eq!(value, 36);
        value = slider.increment(value);
        assert_eq!(value, 36);

        let mut value = 4;
        value = slider.decrement(value);
        assert_eq!(value, 3);
        value = slider.decrement(value);
        assert_eq!(value, 3);
    }

    #[test]
    fn test_slider_off_grid_maximum() {
        let slider = Slider::new(0, 10, 4);
        assert_eq!(slider.increment(8), 10);
        assert_eq!(slider.decrement(10), 8);
    }

    #[test]
    fn test_slider_ratio() {
        let slider = Slider::new(0, 100, 10);
        assert_eq!(slider.ratio(50), 0.5);
        assert_eq!(slider.ratio(200), 1.0);
    }

    #[test]
    fn test_mobile_field_strips_and_clamps() {
        let mut field = MobileNumberField::new();
        field.set_text("+91 98765-43210 ext 5");
        // "+91" digits are kept and the rest is clamped at ten
        assert_eq!(field.as_str(), "9198765432");
        assert!(field.is_complete());

        field.set_text("98765 43210");
        assert_eq!(field.as_str(), "9876543210");
        assert_eq!(field.display(), "98765 43210");
    }

    #[test]
    fn test_mobile_field_rejects_eleventh_digit() {
        let mut field = MobileNumberField::new();
        for c in "9876543210".chars() {
            assert!(field.push(c));
        }
        assert!(!field.push('9'));
        assert_eq!(field.as_str(), "9876543210");
        assert!(!field.push('x'));
    }

    #[test]
    fn test_digit_entry_auto_advances() {
        let mut entry = DigitEntry::<4>::new();
        for i in 0..3 {
            assert!(entry.enter_at(i, '1'));
            assert_eq!(entry.focus(), i + 1);
        }
        // Last slot keeps focus
        assert!(entry.enter_at(3, '9'));
        assert_eq!(entry.focus(), 3);
        assert!(entry.is_complete());
        assert_eq!(entry.code().as_deref(), Some("1119"));
    }

    #[test]
    fn test_digit_entry_completion_gate() {
        let mut entry = DigitEntry::<6>::new();
        for c in "12345".chars() {
            entry.enter(c);
            assert!(!entry.is_complete());
        }
        assert!(entry.code().is_none());
        entry.enter('6');
        assert!(entry.is_complete());

        // Clearing any slot closes the gate again
        entry.set_focus(2);
        entry.erase();
        assert!(!entry.is_complete());
        assert_eq!(entry.filled(), 5);
    }

    #[test]
    fn test_digit_entry_rejects_non_digits() {
        let mut entry = DigitEntry::<4>::new();
        assert!(!entry.enter('a'));
        assert_eq!(entry.focus(), 0);
        assert_eq!(entry.filled(), 0);
        assert!(!entry.enter_at(7, '1'));
    }

    #[test]
    fn test_digit_entry_erase_steps_back() {
        let mut entry = DigitEntry::<4>::new();
        entry.enter('1');
        entry.enter('2');
        assert_eq!(entry.focus(), 2);
        entry.erase();
        assert_eq!(entry.focus(), 1);
        assert_eq!(entry.slot(1), None);
        assert_eq!(entry.slot(0), Some(1));
    }

    #[test]
    fn test_phone_frame_fits_small_terminals() {
        let area = Rect::new(0, 0, 30, 20);
        let frame = phone_frame(area);
        assert_eq!(frame.width, 30);
        assert_eq!(frame.height, 20);

        let area = Rect::new(0, 0, 100, 40);
        let frame = phone_frame(area);
        assert_eq!(frame.width, PHONE_WIDTH);
        assert_eq!(frame.x, 26);
    }
}
